//! # Artwork Generator
//!
//! One pure function from seed to finished artwork:
//!
//! ```text
//! seed ─> normalize ─> select_palette
//!                   └> SeededRandom(seed + 1000) ─> compose ─> rasterize ─> render
//! ```
//!
//! Nothing is cached and nothing is shared between calls except the static
//! tables, so calls can run on any number of threads.

use crate::grid::Grid;
use crate::palette::{select_palette, Palette, PaletteSelection};
use crate::rng::SeededRandom;
use crate::seed::Seed;
use crate::sequence::{Sequence, SequenceComposer};
use crate::stitch::StitchRenderer;

/// Finished artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// Complete SVG document.
    pub image: String,
    /// Palette used.
    pub palette: &'static Palette,
    /// 0-10 for standard palettes, 11 for the rare one.
    pub palette_index: usize,
    /// Whether the rare palette was used.
    pub is_rare: bool,
}

/// Everything decided for a seed, before SVG rendering.
#[derive(Debug, Clone)]
pub struct Artwork {
    /// Normalized seed.
    pub seed: Seed,
    /// Palette decision.
    pub selection: PaletteSelection,
    /// Band layout.
    pub sequence: Sequence,
    /// Color index raster.
    pub grid: Grid,
}

impl Artwork {
    /// Composes and rasterizes the artwork for a seed.
    #[must_use]
    pub fn compose(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        let selection = select_palette(seed);
        let mut rng = SeededRandom::new(seed.pattern_seed());
        let sequence = SequenceComposer::default().compose(&mut rng, selection.index);
        let grid = Grid::rasterize(&sequence);

        tracing::debug!(
            "seed {} -> palette {} ({}), {} bands",
            seed,
            selection.palette.name,
            selection.index,
            sequence.len()
        );

        Self {
            seed,
            selection,
            sequence,
            grid,
        }
    }

    /// Renders the SVG document.
    #[must_use]
    pub fn render(&self) -> RenderResult {
        RenderResult {
            image: StitchRenderer::new().render(&self.grid, self.selection.palette),
            palette: self.selection.palette,
            palette_index: self.selection.index,
            is_rare: self.selection.is_rare,
        }
    }
}

/// Generates the artwork for a seed.
#[must_use]
pub fn generate(seed: impl Into<Seed>) -> RenderResult {
    Artwork::compose(seed).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_zero_is_rare_rainbow() {
        let result = generate(0u32);
        assert!(result.is_rare);
        assert_eq!(result.palette.name, "Nordic Rainbow");
        assert_eq!(result.palette_index, 11);
    }

    #[test]
    fn test_negative_seed_matches_magnitude() {
        assert_eq!(generate(-5i64), generate(5u64));
    }

    #[test]
    fn test_string_seed_matches_integer() {
        let parsed: Seed = "424242".parse().unwrap();
        assert_eq!(generate(parsed).image, generate(424_242u32).image);
    }

    #[test]
    fn test_document_size_is_constant() {
        // colors are always 7 bytes, so only geometry decides the length
        let a = generate(5u32).image.len();
        let b = generate(424_242u32).image.len();
        assert_eq!(a, b);
        assert_eq!(a, 8_354_393);
    }
}
