//! # Palettes and Rarity
//!
//! Eleven standard palettes plus one rare palette. Selection is a pure
//! function of the normalized seed and never touches the PRNG, so the
//! rarity roll cannot shift the pattern draws.
//!
//! ## Rarity Rule
//!
//! ```text
//! check   = ((seed + 1) * 16807) mod 1000
//! is_rare = seed <= 3 || check < 25        (~2.5%)
//! ```
//!
//! Seeds 0-3 predate the rarity roll and are always rare.

use serde::Serialize;

use crate::seed::Seed;

/// Index of the palette that unlocks the circle-hash band.
pub const RESERVE_BLUE_INDEX: usize = 6;

/// Number of standard palettes.
pub const STANDARD_COUNT: usize = 11;

/// Palette index reported for the rare palette.
pub const RARE_INDEX: usize = STANDARD_COUNT;

/// Seeds at or below this value are always rare.
pub const GRANDFATHERED_MAX_SEED: u32 = 3;

/// Rarity threshold out of 1000.
pub const RARE_THRESHOLD: u64 = 25;

/// Named set of five colors, darkest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Display name.
    pub name: &'static str,
    /// Exactly five `#rrggbb` colors indexed by grid color index.
    pub colors: [&'static str; 5],
    /// Whether this is the rare palette.
    pub rare: bool,
}

impl Palette {
    const fn standard(name: &'static str, colors: [&'static str; 5]) -> Self {
        Self {
            name,
            colors,
            rare: false,
        }
    }

    /// Color for a grid index. Indices above 4 clamp to the lightest color.
    #[inline]
    #[must_use]
    pub fn color(&self, index: u8) -> &'static str {
        self.colors[usize::from(index.min(4))]
    }
}

/// Standard palette table, indexed by `seed mod 11`.
pub static STANDARD_PALETTES: [Palette; STANDARD_COUNT] = [
    Palette::standard("North Sea", ["#1a2a3a", "#2d4a5e", "#4a7c9b", "#89b4c8", "#d4e5ed"]),
    Palette::standard("Highland", ["#1e3a2f", "#2d5a4a", "#4a8b6f", "#7eb89d", "#c8e0d4"]),
    Palette::standard("Heather", ["#3d2a4a", "#5c4a6e", "#8b6f9b", "#b89dbd", "#e0d4e5"]),
    Palette::standard("Peat", ["#2a1f1a", "#4a3d2d", "#7b6b4a", "#a89d7b", "#d4ccb8"]),
    Palette::standard("Berry", ["#3a1a2a", "#6b2d4a", "#9b4a6f", "#c87b9d", "#edd4e0"]),
    Palette::standard("Slate", ["#1a1f2a", "#3d4a5c", "#6b7b8b", "#9dadb8", "#d4dce0"]),
    Palette::standard("Reserve Blue", ["#1a3a5a", "#2d5a8b", "#5b9bd5", "#9dc5e8", "#d4e8f5"]),
    Palette::standard("Rust", ["#3a1f1a", "#6b3d2d", "#9b634a", "#c8947b", "#edd4c8"]),
    Palette::standard("Nordic Night", ["#0f1419", "#1e2832", "#3d5a6b", "#7b9bab", "#c8dce5"]),
    Palette::standard("Moss", ["#1a2a1a", "#3d5a2d", "#6b8b4a", "#9db87b", "#d4e5c8"]),
    Palette::standard("Crimson", ["#2a0a0a", "#5c1a1a", "#9b2d2d", "#c85a5a", "#edc8c8"]),
];

/// The rare multicolor palette.
pub static NORDIC_RAINBOW: Palette = Palette {
    name: "Nordic Rainbow",
    colors: ["#1e3a5c", "#2d6b4a", "#c8a02d", "#b84a2d", "#e8d4c8"],
    rare: true,
};

/// Looks up any palette by index (0-10 standard, 11 rare).
#[must_use]
pub fn palette_by_index(index: usize) -> Option<&'static Palette> {
    if index == RARE_INDEX {
        Some(&NORDIC_RAINBOW)
    } else {
        STANDARD_PALETTES.get(index)
    }
}

/// Every palette in index order.
pub fn all_palettes() -> impl Iterator<Item = &'static Palette> {
    STANDARD_PALETTES.iter().chain(std::iter::once(&NORDIC_RAINBOW))
}

/// Outcome of the seed-to-palette decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSelection {
    /// The chosen palette.
    pub palette: &'static Palette,
    /// 0-10 for standard palettes, 11 for the rare one.
    pub index: usize,
    /// Whether the rare palette was chosen.
    pub is_rare: bool,
}

/// Rarity roll in `[0, 1000)`.
#[inline]
#[must_use]
pub const fn rarity_check(seed: Seed) -> u64 {
    ((seed.value() as u64 + 1) * 16_807) % 1000
}

/// Whether a seed receives the rare palette.
#[inline]
#[must_use]
pub const fn is_rare(seed: Seed) -> bool {
    seed.value() <= GRANDFATHERED_MAX_SEED || rarity_check(seed) < RARE_THRESHOLD
}

/// Chooses the palette for a seed.
#[must_use]
pub fn select_palette(seed: Seed) -> PaletteSelection {
    if is_rare(seed) {
        return PaletteSelection {
            palette: &NORDIC_RAINBOW,
            index: RARE_INDEX,
            is_rare: true,
        };
    }

    let index = seed.value() as usize % STANDARD_COUNT;
    PaletteSelection {
        palette: &STANDARD_PALETTES[index],
        index,
        is_rare: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grandfathered_seeds_are_rare() {
        for raw in 0u32..=3 {
            let sel = select_palette(Seed::from(raw));
            assert!(sel.is_rare);
            assert_eq!(sel.index, RARE_INDEX);
            assert_eq!(sel.palette.name, "Nordic Rainbow");
        }
    }

    #[test]
    fn test_known_rare_seeds() {
        for raw in [30u32, 87, 144, 201, 258] {
            assert!(select_palette(Seed::from(raw)).is_rare, "seed {raw}");
        }
    }

    #[test]
    fn test_standard_index_is_seed_mod_11() {
        let sel = select_palette(Seed::from(5u32));
        assert_eq!(sel.index, 5);
        assert_eq!(sel.palette.name, "Slate");

        let sel = select_palette(Seed::from(6u32));
        assert_eq!(sel.index, RESERVE_BLUE_INDEX);
        assert_eq!(sel.palette.name, "Reserve Blue");

        let sel = select_palette(Seed::from(42u32));
        assert_eq!(sel.index, 9);
        assert!(!sel.is_rare);
    }

    #[test]
    fn test_rare_flag_matches_palette() {
        for raw in 0u32..2000 {
            let sel = select_palette(Seed::from(raw));
            assert_eq!(sel.is_rare, sel.palette.rare);
            assert!(sel.index <= RARE_INDEX);
            assert_eq!(palette_by_index(sel.index), Some(sel.palette));
        }
    }

    #[test]
    fn test_palette_table_shape() {
        assert_eq!(all_palettes().count(), 12);
        assert_eq!(all_palettes().filter(|p| p.rare).count(), 1);
        for palette in all_palettes() {
            for color in palette.colors {
                assert_eq!(color.len(), 7);
                assert!(color.starts_with('#'));
            }
        }
        assert!(palette_by_index(12).is_none());
    }

    #[test]
    fn test_color_index_clamps() {
        let p = &STANDARD_PALETTES[0];
        assert_eq!(p.color(0), "#1a2a3a");
        assert_eq!(p.color(4), "#d4e5ed");
        assert_eq!(p.color(9), "#d4e5ed");
    }
}
