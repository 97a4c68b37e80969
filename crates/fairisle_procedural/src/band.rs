//! # Band Catalog
//!
//! Immutable tables of horizontal bands, grouped by visual weight.
//!
//! | Tier    | Count | Heights | Role                               |
//! |---------|-------|---------|------------------------------------|
//! | Accent  | 7     | 1-3     | Separators between larger bands    |
//! | Small   | 7     | 3-10    | Peerie fillers                     |
//! | Medium  | 7     | 10-18   | Waves and diamond borders          |
//! | Feature | 12    | 10-22   | Snowflakes, pines, showpieces      |
//! | Giant   | 1     | 26-28   | Center-only giant snowflake        |
//!
//! The first eight feature bands are the required motifs: every
//! composition carries at least one of them (or the giant snowflake).

use crate::pattern::{PatternKind, PatternParams};

/// Weight class of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandTier {
    /// Thin separators.
    Accent,
    /// Short repeating fillers.
    Small,
    /// Mid-height borders.
    Medium,
    /// Showpiece motifs.
    Feature,
    /// The giant center snowflake.
    Giant,
}

/// Static description of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandDefinition {
    /// Stable band identifier.
    pub name: &'static str,
    /// Pattern drawn inside the band.
    pub pattern: PatternKind,
    /// Minimum height in rows.
    pub min_height: u32,
    /// Maximum height in rows.
    pub max_height: u32,
    /// Pattern overrides.
    pub params: PatternParams,
    /// Weight class.
    pub tier: BandTier,
}

impl BandDefinition {
    const fn new(
        tier: BandTier,
        name: &'static str,
        pattern: PatternKind,
        min_height: u32,
        max_height: u32,
        params: PatternParams,
    ) -> Self {
        Self {
            name,
            pattern,
            min_height,
            max_height,
            params,
            tier,
        }
    }

    /// Whether this band counts toward the required-motif rule.
    #[inline]
    #[must_use]
    pub const fn is_required_motif(&self) -> bool {
        self.pattern.is_required_motif()
    }
}

const BG0: PatternParams = PatternParams::NONE.with_bg(0);
const BG1: PatternParams = PatternParams::NONE.with_bg(1);

const fn accent(name: &'static str, pattern: PatternKind, min: u32, max: u32, params: PatternParams) -> BandDefinition {
    BandDefinition::new(BandTier::Accent, name, pattern, min, max, params)
}

const fn small(name: &'static str, pattern: PatternKind, min: u32, max: u32, params: PatternParams) -> BandDefinition {
    BandDefinition::new(BandTier::Small, name, pattern, min, max, params)
}

const fn medium(name: &'static str, pattern: PatternKind, min: u32, max: u32, params: PatternParams) -> BandDefinition {
    BandDefinition::new(BandTier::Medium, name, pattern, min, max, params)
}

const fn feature(name: &'static str, pattern: PatternKind, min: u32, max: u32, size: i32, bg: i32) -> BandDefinition {
    BandDefinition::new(
        BandTier::Feature,
        name,
        pattern,
        min,
        max,
        PatternParams::NONE.with_size(size).with_bg(bg),
    )
}

/// Accent bands.
pub static ACCENT_BANDS: [BandDefinition; 7] = [
    accent("solid_dark", PatternKind::Solid, 1, 2, PatternParams::NONE.with_color(0)),
    accent("solid_mid", PatternKind::Solid, 1, 2, PatternParams::NONE.with_color(1)),
    accent("solid_light", PatternKind::Solid, 1, 2, PatternParams::NONE.with_color(3)),
    accent("thin_line", PatternKind::ThinLine, 3, 3, BG0),
    accent("double_line", PatternKind::DoubleLine, 3, 3, BG0),
    accent("dash_line", PatternKind::DashLine, 3, 3, BG0),
    accent("zigzag_tiny", PatternKind::ZigzagTiny, 2, 3, BG0),
];

/// Small bands.
pub static SMALL_BANDS: [BandDefinition; 7] = [
    small("dots", PatternKind::Dots, 6, 8, BG0.with_spacing(8)),
    small("stars", PatternKind::Stars, 8, 10, BG0.with_spacing(10)),
    small("diamonds_small", PatternKind::DiamondsSmall, 8, 10, BG0.with_size(10)),
    small("peerie", PatternKind::Peerie, 4, 6, BG1),
    small("checkerboard", PatternKind::Checkerboard, 3, 5, BG0),
    small("seed_stitch", PatternKind::SeedStitch, 3, 5, BG0),
    small("houndstooth", PatternKind::Houndstooth, 4, 6, BG1),
];

/// Medium bands.
pub static MEDIUM_BANDS: [BandDefinition; 7] = [
    medium("zigzag_large", PatternKind::ZigzagLarge, 12, 16, BG0.with_period(24)),
    medium("chevron", PatternKind::Chevron, 10, 14, BG0.with_period(18)),
    medium("diamonds_outline", PatternKind::DiamondsOutline, 10, 14, BG0.with_size(12)),
    medium("diamonds_nested", PatternKind::DiamondsNested, 14, 18, BG1.with_size(16)),
    medium("x_large", PatternKind::XLarge, 12, 16, BG0.with_size(14)),
    medium("zigzag_shaded", PatternKind::ZigzagShaded, 12, 16, BG0.with_period(16)),
    medium("chevron_shaded", PatternKind::ChevronShaded, 12, 16, BG0.with_period(20)),
];

/// Number of leading feature bands that are required motifs.
pub const REQUIRED_COUNT: usize = 8;

/// Feature bands. The first [`REQUIRED_COUNT`] are the required motifs.
pub static FEATURE_BANDS: [BandDefinition; 12] = [
    feature("snowflake_6pt", PatternKind::Snowflake6pt, 16, 20, 16, 0),
    feature("snowflake_8pt", PatternKind::Snowflake8pt, 18, 22, 18, 1),
    feature("snowflake_crystal", PatternKind::SnowflakeCrystal, 16, 20, 18, 0),
    feature("snowflake_double", PatternKind::SnowflakeDouble, 16, 20, 18, 1),
    feature("snowflake_star", PatternKind::SnowflakeStar, 14, 18, 16, 0),
    feature("snowflake_tiny", PatternKind::SnowflakeTiny, 12, 16, 12, 1),
    feature("pine_tree", PatternKind::PineTree, 14, 18, 14, 0),
    feature("pine_layered", PatternKind::PineLayered, 16, 20, 16, 1),
    feature("snowfall", PatternKind::Snowfall, 14, 18, 16, 0),
    feature("circle_hash", PatternKind::CircleHash, 10, 12, 10, 0),
    feature("diamond_hash", PatternKind::DiamondHash, 14, 18, 16, 0),
    feature("diamond_gradient", PatternKind::DiamondGradient, 16, 20, 18, 0),
];

/// The giant snowflake, only ever used as the center band.
pub static GIANT_SNOWFLAKE: BandDefinition = BandDefinition::new(
    BandTier::Giant,
    "snowflake_giant",
    PatternKind::SnowflakeGiant,
    26,
    28,
    PatternParams::NONE.with_size(28).with_bg(0),
);

/// Band restricted to the Reserve Blue palette.
pub const PALETTE_LOCKED_BAND: &str = "circle_hash";

/// Grouped view over the band tables.
#[derive(Debug, Clone, Copy)]
pub struct BandCatalog {
    /// Accent tier.
    pub accent: &'static [BandDefinition],
    /// Small tier.
    pub small: &'static [BandDefinition],
    /// Medium tier.
    pub medium: &'static [BandDefinition],
    /// Feature tier.
    pub feature: &'static [BandDefinition],
    /// Giant center band.
    pub giant: &'static BandDefinition,
}

static STANDARD_CATALOG: BandCatalog = BandCatalog {
    accent: &ACCENT_BANDS,
    small: &SMALL_BANDS,
    medium: &MEDIUM_BANDS,
    feature: &FEATURE_BANDS,
    giant: &GIANT_SNOWFLAKE,
};

impl BandCatalog {
    /// The catalog every issued artwork is composed from.
    #[inline]
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_CATALOG
    }

    /// Required motifs, a prefix of the feature tier.
    #[inline]
    #[must_use]
    pub fn required(&self) -> &'static [BandDefinition] {
        let feature: &'static [BandDefinition] = self.feature;
        &feature[..REQUIRED_COUNT.min(feature.len())]
    }

    /// Iterates every band in the catalog, giant last.
    pub fn iter(&self) -> impl Iterator<Item = &'static BandDefinition> {
        let Self {
            accent,
            small,
            medium,
            feature,
            giant,
        } = *self;
        accent
            .iter()
            .chain(small)
            .chain(medium)
            .chain(feature)
            .chain(std::iter::once(giant))
    }

    /// Finds a band by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static BandDefinition> {
        self.iter().find(|band| band.name == name)
    }
}

/// A band with a concrete height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandInstance {
    /// The band drawn.
    pub definition: &'static BandDefinition,
    /// Height in rows.
    pub height: u32,
}

impl BandInstance {
    /// Creates an instance.
    #[inline]
    #[must_use]
    pub const fn new(definition: &'static BandDefinition, height: u32) -> Self {
        Self { definition, height }
    }

    /// Band name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.definition.name
    }

    /// Pattern drawn.
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> PatternKind {
        self.definition.pattern
    }
}
