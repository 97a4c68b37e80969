//! # Pattern Library
//!
//! Stateless per-cell color index functions. Every pattern answers one
//! question: for cell `(x, y)` inside a band of `height` rows, which of the
//! five palette colors should be knitted?
//!
//! ## Arithmetic
//!
//! Geometry is integer floor arithmetic. A handful of patterns (zig-zag
//! phases, pine progress, chevron scaling, circle radius, giant snowflake
//! ratios) scale through `f64` and floor afterwards; those steps are kept
//! in exactly that order because issued artwork depends on the rounding.
//!
//! Patterns repeat horizontally on their own period, so the band width
//! never enters a formula. Coordinates are expected to be non-negative.
//!
//! ## Totality
//!
//! Every function is total: sizes, periods, spacings and heights below 1
//! are raised to 1 before any modulo is taken.

/// Optional per-band parameters. Unset fields fall back to the
/// per-pattern defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PatternParams {
    /// Background color index.
    pub bg: Option<i32>,
    /// Fill color index (solid bands only).
    pub color: Option<i32>,
    /// Motif repeat width.
    pub size: Option<i32>,
    /// Wave repeat width.
    pub period: Option<i32>,
    /// Dot/star repeat width.
    pub spacing: Option<i32>,
}

impl PatternParams {
    /// No overrides.
    pub const NONE: Self = Self {
        bg: None,
        color: None,
        size: None,
        period: None,
        spacing: None,
    };

    /// Sets the background index.
    #[inline]
    #[must_use]
    pub const fn with_bg(self, bg: i32) -> Self {
        Self { bg: Some(bg), ..self }
    }

    /// Sets the solid fill index.
    #[inline]
    #[must_use]
    pub const fn with_color(self, color: i32) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Sets the motif size.
    #[inline]
    #[must_use]
    pub const fn with_size(self, size: i32) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    /// Sets the wave period.
    #[inline]
    #[must_use]
    pub const fn with_period(self, period: i32) -> Self {
        Self {
            period: Some(period),
            ..self
        }
    }

    /// Sets the dot spacing.
    #[inline]
    #[must_use]
    pub const fn with_spacing(self, spacing: i32) -> Self {
        Self {
            spacing: Some(spacing),
            ..self
        }
    }

    #[inline]
    fn bg_or(&self, default: i32) -> i32 {
        self.bg.unwrap_or(default)
    }

    #[inline]
    fn size_or(&self, default: i32) -> i32 {
        self.size.unwrap_or(default).max(1)
    }

    #[inline]
    fn period_or(&self, default: i32) -> i32 {
        self.period.unwrap_or(default).max(1)
    }

    #[inline]
    fn spacing_or(&self, default: i32) -> i32 {
        self.spacing.unwrap_or(default).max(1)
    }
}

/// Closed set of patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternKind {
    /// Single fill color.
    Solid,
    /// One bright row through the middle.
    ThinLine,
    /// Bright first and last rows.
    DoubleLine,
    /// Dashed middle row.
    DashLine,
    /// Tight two-row zig-zag.
    ZigzagTiny,
    /// Round dots.
    Dots,
    /// Plus-shaped stars.
    Stars,
    /// Small filled diamonds.
    DiamondsSmall,
    /// Diagonal peerie stripes.
    Peerie,
    /// Single-cell checks.
    Checkerboard,
    /// Offset seed dots.
    SeedStitch,
    /// Houndstooth check.
    Houndstooth,
    /// Wide zig-zag.
    ZigzagLarge,
    /// V-shaped chevron.
    Chevron,
    /// Diamond outlines.
    DiamondsOutline,
    /// Concentric diamonds.
    DiamondsNested,
    /// Large X with branches.
    XLarge,
    /// Stepped zig-zag with gradient.
    ZigzagShaded,
    /// Chevron with gradient.
    ChevronShaded,
    /// Six-point snowflake.
    Snowflake6pt,
    /// Eight-point snowflake.
    Snowflake8pt,
    /// Cross snowflake with V tips.
    SnowflakeCrystal,
    /// Thick-armed snowflake.
    SnowflakeDouble,
    /// Cross plus diagonal snowflake.
    SnowflakeStar,
    /// Thin cross snowflake.
    SnowflakeTiny,
    /// Single triangular pine.
    PineTree,
    /// Three-tier pine.
    PineLayered,
    /// Scattered flakes.
    Snowfall,
    /// Circle with hash negative space.
    CircleHash,
    /// Shaded diamond with dark cross.
    DiamondHash,
    /// Five-tone diamond.
    DiamondGradient,
    /// Large detailed snowflake.
    SnowflakeGiant,
}

impl PatternKind {
    /// Number of patterns.
    pub const COUNT: usize = 32;

    /// All patterns in declaration order.
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Solid,
            Self::ThinLine,
            Self::DoubleLine,
            Self::DashLine,
            Self::ZigzagTiny,
            Self::Dots,
            Self::Stars,
            Self::DiamondsSmall,
            Self::Peerie,
            Self::Checkerboard,
            Self::SeedStitch,
            Self::Houndstooth,
            Self::ZigzagLarge,
            Self::Chevron,
            Self::DiamondsOutline,
            Self::DiamondsNested,
            Self::XLarge,
            Self::ZigzagShaded,
            Self::ChevronShaded,
            Self::Snowflake6pt,
            Self::Snowflake8pt,
            Self::SnowflakeCrystal,
            Self::SnowflakeDouble,
            Self::SnowflakeStar,
            Self::SnowflakeTiny,
            Self::PineTree,
            Self::PineLayered,
            Self::Snowfall,
            Self::CircleHash,
            Self::DiamondHash,
            Self::DiamondGradient,
            Self::SnowflakeGiant,
        ]
    }

    /// Stable identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::ThinLine => "thinLine",
            Self::DoubleLine => "doubleLine",
            Self::DashLine => "dashLine",
            Self::ZigzagTiny => "zigzagTiny",
            Self::Dots => "dots",
            Self::Stars => "stars",
            Self::DiamondsSmall => "diamondsSmall",
            Self::Peerie => "peerie",
            Self::Checkerboard => "checkerboard",
            Self::SeedStitch => "seedStitch",
            Self::Houndstooth => "houndstooth",
            Self::ZigzagLarge => "zigzagLarge",
            Self::Chevron => "chevron",
            Self::DiamondsOutline => "diamondsOutline",
            Self::DiamondsNested => "diamondsNested",
            Self::XLarge => "xLarge",
            Self::ZigzagShaded => "zigzagShaded",
            Self::ChevronShaded => "chevronShaded",
            Self::Snowflake6pt => "snowflake6pt",
            Self::Snowflake8pt => "snowflake8pt",
            Self::SnowflakeCrystal => "snowflakeCrystal",
            Self::SnowflakeDouble => "snowflakeDouble",
            Self::SnowflakeStar => "snowflakeStar",
            Self::SnowflakeTiny => "snowflakeTiny",
            Self::PineTree => "pineTree",
            Self::PineLayered => "pineLayered",
            Self::Snowfall => "snowfall",
            Self::CircleHash => "circleHash",
            Self::DiamondHash => "diamondHash",
            Self::DiamondGradient => "diamondGradient",
            Self::SnowflakeGiant => "snowflakeGiant",
        }
    }

    /// Looks up a pattern by its identifier.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.name() == name)
    }

    /// Patterns that read as plus/cross shapes. At most one of these may
    /// appear in a composition.
    #[inline]
    #[must_use]
    pub const fn is_plus_like(self) -> bool {
        matches!(
            self,
            Self::Stars | Self::CircleHash | Self::SnowflakeTiny | Self::SnowflakeDouble
        )
    }

    /// Snowflake or pine motif.
    #[inline]
    #[must_use]
    pub const fn is_required_motif(self) -> bool {
        matches!(
            self,
            Self::Snowflake6pt
                | Self::Snowflake8pt
                | Self::SnowflakeCrystal
                | Self::SnowflakeDouble
                | Self::SnowflakeStar
                | Self::SnowflakeTiny
                | Self::PineTree
                | Self::PineLayered
                | Self::SnowflakeGiant
        )
    }

    /// Color index for cell `(x, y)` of a band `height` rows tall.
    ///
    /// The result is not clamped; callers clamp into `[0, 4]`.
    #[must_use]
    pub fn sample(self, x: i32, y: i32, height: i32, params: &PatternParams) -> i32 {
        let h = height.max(1);
        let p = params;
        match self {
            Self::Solid => p.color.unwrap_or(2),
            Self::ThinLine => thin_line(y, h, p),
            Self::DoubleLine => double_line(y, h, p),
            Self::DashLine => dash_line(x, y, h, p),
            Self::ZigzagTiny => zigzag_tiny(x, y, h, p),
            Self::Dots => dots(x, y, h, p),
            Self::Stars => stars(x, y, h, p),
            Self::DiamondsSmall => diamonds_small(x, y, h, p),
            Self::Peerie => peerie(x, y, p),
            Self::Checkerboard => checkerboard(x, y, p),
            Self::SeedStitch => seed_stitch(x, y, p),
            Self::Houndstooth => houndstooth(x, y, p),
            Self::ZigzagLarge => zigzag_large(x, y, h, p),
            Self::Chevron => chevron(x, y, h, p),
            Self::DiamondsOutline => diamonds_outline(x, y, h, p),
            Self::DiamondsNested => diamonds_nested(x, y, h, p),
            Self::XLarge => x_large(x, y, h, p),
            Self::ZigzagShaded => zigzag_shaded(x, y, h, p),
            Self::ChevronShaded => chevron_shaded(x, y, h, p),
            Self::Snowflake6pt => snowflake_6pt(x, y, h, p),
            Self::Snowflake8pt => snowflake_8pt(x, y, h, p),
            Self::SnowflakeCrystal => snowflake_crystal(x, y, h, p),
            Self::SnowflakeDouble => snowflake_double(x, y, h, p),
            Self::SnowflakeStar => snowflake_star(x, y, h, p),
            Self::SnowflakeTiny => snowflake_tiny(x, y, h, p),
            Self::PineTree => pine_tree(x, y, h, p),
            Self::PineLayered => pine_layered(x, y, h, p),
            Self::Snowfall => snowfall(x, y, h, p),
            Self::CircleHash => circle_hash(x, y, h, p),
            Self::DiamondHash => diamond_hash(x, y, h, p),
            Self::DiamondGradient => diamond_gradient(x, y, h, p),
            Self::SnowflakeGiant => snowflake_giant(x, y, h, p),
        }
    }
}

// =============================================================================
// Shared geometry
// =============================================================================

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn floor_i(value: f64) -> i32 {
    value.floor() as i32
}

/// Offset of a cell from the center of its motif tile.
#[derive(Clone, Copy)]
struct TileOffset {
    dx: i32,
    dy: i32,
    adx: i32,
    ady: i32,
}

#[inline]
fn tile_offset(x: i32, y: i32, size: i32, h: i32) -> TileOffset {
    let dx = x % size - size / 2;
    let dy = y % h - h / 2;
    TileOffset {
        dx,
        dy,
        adx: dx.abs(),
        ady: dy.abs(),
    }
}

#[inline]
const fn arm_length(size: i32, h: i32) -> i32 {
    let a = size / 2 - 1;
    let b = h / 2 - 1;
    if a < b {
        a
    } else {
        b
    }
}

/// Gradient shading around a wave line.
#[inline]
const fn line_shade(dy: i32, bg: i32) -> i32 {
    match dy {
        0 => 4,
        1 => 3,
        2 => 2,
        3 | 4 => 1,
        _ => bg,
    }
}

// =============================================================================
// Accent
// =============================================================================

fn thin_line(y: i32, h: i32, p: &PatternParams) -> i32 {
    if y == h / 2 {
        4
    } else {
        p.bg_or(0)
    }
}

fn double_line(y: i32, h: i32, p: &PatternParams) -> i32 {
    if h >= 3 && (y == 0 || y == h - 1) {
        4
    } else {
        p.bg_or(0)
    }
}

fn dash_line(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    if y == h / 2 && x % 4 < 2 {
        4
    } else {
        p.bg_or(0)
    }
}

fn zigzag_tiny(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let target = if x % 4 < 2 { 0 } else { h - 1 };
    if y == target {
        4
    } else {
        p.bg_or(0)
    }
}

// =============================================================================
// Small
// =============================================================================

fn dots(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let spacing = p.spacing_or(8);
    let dx = x % spacing - spacing / 2;
    let dy = y % h - h / 2;
    if dx * dx + dy * dy <= 3 {
        4
    } else {
        p.bg_or(0)
    }
}

fn stars(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let spacing = p.spacing_or(10);
    let dx = (x % spacing - spacing / 2).abs();
    let dy = (y % h - h / 2).abs();
    if (dx <= 1 && dy <= 1) || (dx <= 1 && dy <= 3) || (dy <= 1 && dx <= 3) {
        4
    } else {
        p.bg_or(0)
    }
}

fn diamonds_small(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(10);
    let t = tile_offset(x, y, size, h);
    if t.adx + t.ady <= (size / 3).min(h / 3) {
        4
    } else {
        p.bg_or(0)
    }
}

fn peerie(x: i32, y: i32, p: &PatternParams) -> i32 {
    if (x + y) % 4 < 2 {
        4
    } else {
        p.bg_or(1)
    }
}

fn checkerboard(x: i32, y: i32, p: &PatternParams) -> i32 {
    if (x + y) % 2 == 0 {
        4
    } else {
        p.bg_or(0)
    }
}

fn seed_stitch(x: i32, y: i32, p: &PatternParams) -> i32 {
    let offset = (y % 2) * 2;
    if (x + offset) % 4 == 0 {
        4
    } else {
        p.bg_or(0)
    }
}

fn houndstooth(x: i32, y: i32, p: &PatternParams) -> i32 {
    let cx = x % 4;
    let cy = y % 4;
    let on = (cx < 2 && cy < 2) || (cx >= 2 && cy >= 2) || (cx, cy) == (2, 1) || (cx, cy) == (1, 2);
    if on {
        4
    } else {
        p.bg_or(0)
    }
}

// =============================================================================
// Medium
// =============================================================================

fn zigzag_large(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let period = p.period_or(24);
    let phase = f64::from(x % period) / f64::from(period);
    let amplitude = f64::from(h / 4);
    let center = h / 2;

    let target = if phase < 0.5 {
        center - floor_i(amplitude * (phase * 2.0))
    } else {
        center - floor_i(amplitude * (2.0 - phase * 2.0))
    };

    match (y - target).abs() {
        0 | 1 => 4,
        2 => 3,
        _ => p.bg_or(0),
    }
}

fn chevron(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let period = p.period_or(18);
    let center = period / 2;
    let dist = (x % period - center).abs();
    let target = (dist * (h - 2)).div_euclid(center.max(1)) + 1;
    if (y - target).abs() <= 1 {
        4
    } else {
        p.bg_or(0)
    }
}

fn diamonds_outline(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(12);
    let t = tile_offset(x, y, size, h);
    let dist = t.adx + t.ady;
    let outer = arm_length(size, h);
    if (outer - 2..=outer).contains(&dist) {
        4
    } else {
        p.bg_or(0)
    }
}

fn diamonds_nested(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(16);
    let t = tile_offset(x, y, size, h);
    let dist = t.adx + t.ady;
    let outer = arm_length(size, h);
    let mid = outer - 2;
    let inner = mid - 2;

    if (dist - outer).abs() <= 1 {
        4
    } else if (dist - mid).abs() <= 1 {
        3
    } else if dist <= inner.max(0) {
        4
    } else {
        p.bg_or(0)
    }
}

fn x_large(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(14);
    let TileOffset { adx, ady, .. } = tile_offset(x, y, size, h);
    let max_dist = arm_length(size, h);

    if (adx - ady).abs() <= 1 && adx <= max_dist {
        return 4;
    }

    let branch = floor_i(f64::from(max_dist) * 0.6);
    if adx == branch && (branch - 1..=branch + 1).contains(&ady) {
        return 3;
    }
    if ady == branch && (branch - 1..=branch + 1).contains(&adx) {
        return 3;
    }
    p.bg_or(0)
}

fn zigzag_shaded(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let period = p.period_or(16);
    let amplitude = h / 3;
    let center = h / 2;
    let phase = f64::from(x % period);
    let half = f64::from(period) / 2.0;

    let target = if phase < half {
        let progress = phase / half;
        center - floor_i(progress * f64::from(amplitude))
    } else {
        let progress = (phase - half) / half;
        center - amplitude + floor_i(progress * f64::from(amplitude))
    };

    line_shade((y - target).abs(), p.bg_or(0))
}

fn chevron_shaded(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let period = p.period_or(20);
    let center = h / 2;
    let phase = x % period;
    let half = f64::from(period) / 2.0;

    let peak = if f64::from(phase) < half {
        phase
    } else {
        period - phase
    };
    let scaled = floor_i((f64::from(peak) / half) * (f64::from(h) / 2.0));

    line_shade((y - (center + scaled)).abs(), p.bg_or(0))
}

// =============================================================================
// Feature
// =============================================================================

fn snowflake_6pt(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(16);
    let TileOffset { adx, ady, .. } = tile_offset(x, y, size, h);
    let arm = arm_length(size, h);

    if adx <= 1 && ady <= 1 {
        return 4;
    }
    if (adx <= 1 && ady <= arm) || (ady <= 1 && adx <= arm) {
        return 4;
    }
    if (adx - ady).abs() <= 1 && (2..arm).contains(&adx) {
        return 4;
    }

    let branch = (arm * 2).div_euclid(3);
    if (ady - branch).abs() <= 1 && (2..=3).contains(&adx) {
        return 3;
    }
    if (adx - branch).abs() <= 1 && (2..=3).contains(&ady) {
        return 3;
    }
    p.bg_or(0)
}

fn snowflake_8pt(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(18);
    let TileOffset { adx, ady, .. } = tile_offset(x, y, size, h);
    let arm = arm_length(size, h);

    if adx <= 1 && ady <= 1 {
        return 4;
    }
    if (adx <= 1 && ady <= arm) || (ady <= 1 && adx <= arm) {
        return 4;
    }
    if (adx - ady).abs() <= 1 && (2..arm).contains(&adx) {
        return 4;
    }

    for pos in [arm.div_euclid(2), arm - 1] {
        if (ady - pos).abs() <= 1 && adx == 2 {
            return 3;
        }
        if (adx - pos).abs() <= 1 && ady == 2 {
            return 3;
        }
    }
    p.bg_or(0)
}

fn snowflake_crystal(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(18);
    let TileOffset { adx, ady, .. } = tile_offset(x, y, size, h);
    let arm = arm_length(size, h);

    if adx <= 1 && ady <= 1 {
        return 4;
    }
    if (adx == 0 && ady <= arm) || (ady == 0 && adx <= arm) {
        return 4;
    }

    let branch = arm - 2;
    if (branch..=arm).contains(&ady) && adx == ady - branch + 1 {
        return 3;
    }
    if (branch..=arm).contains(&adx) && ady == adx - branch + 1 {
        return 3;
    }
    p.bg_or(0)
}

fn snowflake_double(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(18);
    let TileOffset { adx, ady, .. } = tile_offset(x, y, size, h);
    let arm = arm_length(size, h);

    if adx <= 1 && ady <= 1 {
        return 4;
    }
    if (adx <= 1 && ady <= arm) || (ady <= 1 && adx <= arm) {
        return 4;
    }
    if (adx == 0 && ady == arm) || (ady == 0 && adx == arm) {
        return 3;
    }
    p.bg_or(0)
}

fn snowflake_star(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(16);
    let TileOffset { adx, ady, .. } = tile_offset(x, y, size, h);
    let arm = arm_length(size, h);

    let center = adx <= 1 && ady <= 1;
    let cross = (adx == 0 && ady <= arm) || (ady == 0 && adx <= arm);
    let diagonal = adx == ady && (2..=arm - 2).contains(&adx);
    if center || cross || diagonal {
        4
    } else {
        p.bg_or(0)
    }
}

fn snowflake_tiny(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(12);
    let TileOffset { adx, ady, .. } = tile_offset(x, y, size, h);
    let arm = arm_length(size, h);

    if (adx == 0 && ady == 0) || (adx == 0 && ady <= arm) || (ady == 0 && adx <= arm) {
        4
    } else {
        p.bg_or(0)
    }
}

fn pine_tree(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(14);
    let from_center = (x % size - size / 2).abs();
    let tree_bottom = h - 3;

    if (tree_bottom + 1..h).contains(&y) && from_center <= 1 {
        return 3;
    }

    if (0..=tree_bottom).contains(&y) {
        let progress = f64::from(y) / f64::from(tree_bottom.max(1));
        let half_width = floor_i(progress * f64::from(size / 2 - 1)) + 1;
        if from_center <= half_width {
            return 4;
        }
    }
    p.bg_or(0)
}

fn pine_layered(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(16);
    let from_center = (x % size - size / 2).abs();
    let tree_height = h - 2;
    let tier_height = tree_height.div_euclid(3);

    for tier in 0..3 {
        let top = tier * tier_height;
        let bottom = top + tier_height - 1;
        if (top..=bottom).contains(&y) {
            let progress = f64::from(y - top) / f64::from((tier_height - 1).max(1));
            let max_width = ((size / 2 - 1) * (tier + 1)).div_euclid(3) + 1 + tier;
            let half_width = floor_i(progress * f64::from(max_width)) + 1;
            if from_center <= half_width {
                return 4;
            }
        }
    }

    if (tree_height..h).contains(&y) && from_center <= 1 {
        return 3;
    }
    p.bg_or(0)
}

fn snowfall(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(16);
    let cell_x = x.div_euclid(size);
    let cell_y = y.div_euclid(h);
    let seed = (cell_x * 7 + cell_y * 13) % 17;

    let flake_x = (seed * 3 + 2) % size;
    let flake_y = (seed * 5 + 1) % h;
    let dx = (x % size - flake_x).abs();
    let dy = (y % h - flake_y).abs();

    match seed % 3 {
        0 if dx == 0 && dy == 0 => return 4,
        1 if dx + dy <= 1 => return 4,
        2 if dx <= 1 && dy <= 1 => return if dx == 0 || dy == 0 { 4 } else { 3 },
        _ => {}
    }

    if (x * 31 + y * 37) % 100 < 4 {
        return 4;
    }
    if (x * 17 + y * 23 + 7) % 100 < 2 {
        return 3;
    }
    p.bg_or(0)
}

fn circle_hash(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(10);
    let TileOffset { dx, dy, adx, ady } = tile_offset(x, y, size, h);
    let radius = arm_length(size, h);
    let bg = p.bg_or(0);

    if f64::from(dx * dx + dy * dy).sqrt() > f64::from(radius) {
        return bg;
    }
    // '#' bars cut out of the disc
    if (adx == 1 && ady <= 2) || (ady == 1 && adx <= 2) {
        return bg;
    }
    4
}

fn diamond_hash(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(16);
    let TileOffset { dx, dy, adx, ady } = tile_offset(x, y, size, h);
    let dist = adx + ady;

    if adx <= 1 && ady <= 1 && (dx == 0 || dy == 0) {
        return 0;
    }
    match dist {
        d if d <= 2 => 4,
        d if d <= 4 => 3,
        d if d <= arm_length(size, h) => 2,
        _ => p.bg_or(0),
    }
}

fn diamond_gradient(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(18);
    let t = tile_offset(x, y, size, h);
    let dist = t.adx + t.ady;
    let max_dist = (size / 2).min(h / 2);

    match dist {
        d if d <= 1 => 0,
        d if d <= 3 => 1,
        d if d <= 5 => 2,
        d if d <= 7 => 3,
        d if d <= max_dist => 4,
        _ => p.bg_or(0),
    }
}

fn snowflake_giant(x: i32, y: i32, h: i32, p: &PatternParams) -> i32 {
    let size = p.size_or(28);
    let TileOffset { adx, ady, .. } = tile_offset(x, y, size, h);
    let arm = arm_length(size, h);
    let scaled = |ratio: f64| floor_i(f64::from(arm) * ratio);

    // center jewel
    match adx + ady {
        0..=3 => return 4,
        4 => return 3,
        _ => {}
    }

    // cardinal arms, two cells wide
    if adx <= 1 && ady <= arm {
        return if adx == 0 { 4 } else { 3 };
    }
    if ady <= 1 && adx <= arm {
        return if ady == 0 { 4 } else { 3 };
    }

    if (adx - ady).abs() <= 1 && (3..=arm - 2).contains(&adx) {
        return if adx == ady { 4 } else { 3 };
    }

    let inner = scaled(0.4);
    if (ady == inner && (1..=3).contains(&adx)) || (adx == inner && (1..=3).contains(&ady)) {
        return 3;
    }

    let outer = scaled(0.7);
    if (ady == outer && (1..=4).contains(&adx)) || (adx == outer && (1..=4).contains(&ady)) {
        return 4;
    }

    // V tips
    if ady >= arm - 2 && adx == ady - arm + 3 && adx <= 2 {
        return 3;
    }
    if adx >= arm - 2 && ady == adx - arm + 3 && ady <= 2 {
        return 3;
    }

    let accent = scaled(0.55);
    if (adx - accent).abs() <= 1 && (ady - accent).abs() <= 1 {
        return if adx == accent && ady == accent { 4 } else { 2 };
    }

    let diag = scaled(0.5);
    if adx == ady && (diag - 1..=diag + 1).contains(&adx) && adx + ady == diag * 2 {
        return 4;
    }

    if (adx == 0 && ady == arm) || (ady == 0 && adx == arm) {
        return 3;
    }
    if adx == ady && adx == arm - 1 {
        return 2;
    }
    p.bg_or(0)
}
