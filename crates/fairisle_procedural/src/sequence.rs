//! # Sequence Composer
//!
//! Builds the vertical band layout: a top half, one center band, and the
//! top half mirrored underneath.
//!
//! ## Draw Order
//!
//! Every PRNG draw below happens in a fixed order. Reordering, adding or
//! skipping a draw changes every issued artwork after that point.
//!
//! 1. Opening accent band and its height.
//! 2. Top-half loop while the top half is shorter than `half - 12`:
//!    - `len % 4 == 0`: small band (plus-filtered)
//!    - `len % 4 == 1 | 3`: accent band
//!    - `len % 4 == 2`: when more than 20 rows remain, a 50% roll for an
//!      unused feature band; otherwise a medium band
//!    - height drawn from `[min, min(max, remaining - 4)]`; the loop stops
//!      when that range is empty, dropping the band just picked
//! 3. Accent filler of `min(remaining, 2)` rows when the half is short.
//! 4. Center roll: giant snowflake (20%), else a required motif if none was
//!    picked yet, else an unused feature band, else a medium band.
//! 5. Center height: the rows the two halves leave, clamped to the center
//!    band's `[min, max]`.
//!
//! ## Invariants
//!
//! - The sequence is a palindrome around the center band.
//! - Nominal heights need not sum to [`TARGET_ROWS`]. The rasterized grid
//!   is always [`TARGET_ROWS`] tall: overflow is cut off at the bottom and
//!   a short layout leaves fill rows.
//! - A required motif (snowflake or pine) is picked at least once. A motif
//!   picked for a feature slot counts even when the loop then drops it for
//!   lack of room; [`Sequence::dropped_band`] records that band.
//! - At most one plus-like pattern kind appears.
//! - `circle_hash` only appears with the Reserve Blue palette.

use crate::band::{BandCatalog, BandDefinition, BandInstance, PALETTE_LOCKED_BAND};
use crate::palette::RESERVE_BLUE_INDEX;
use crate::pattern::PatternKind;
use crate::rng::SeededRandom;

/// Rows in a finished composition.
pub const TARGET_ROWS: u32 = 100;

/// The top-half loop stops once fewer than this many rows remain.
const LOOP_MARGIN: u32 = 12;

/// A feature roll is only attempted with more rows than this remaining.
const FEATURE_ROLL_MIN_REMAINING: u32 = 20;

/// Probability of a feature band on a feature slot.
const FEATURE_CHANCE: f64 = 0.5;

/// Probability of the giant snowflake in the center.
const GIANT_CHANCE: f64 = 0.20;

/// Rows always left free below a loop band.
const HEIGHT_MARGIN: u32 = 4;

/// Maximum height of the closing filler band.
const FILLER_MAX: u32 = 2;

/// How the center band was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CenterChoice {
    /// The giant snowflake won its roll.
    Giant,
    /// No required motif was placed yet, so one was forced.
    RequiredMotif,
    /// An unused feature band.
    Feature,
    /// No feature band was left; a medium band stands in.
    MediumFallback,
}

/// Mirror-symmetric band layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    bands: Vec<BandInstance>,
    center_choice: CenterChoice,
    dropped_band: Option<&'static BandDefinition>,
}

impl Sequence {
    fn mirrored(top: &[BandInstance], center: BandInstance, center_choice: CenterChoice) -> Self {
        let mut bands = Vec::with_capacity(top.len() * 2 + 1);
        bands.extend_from_slice(top);
        bands.push(center);
        bands.extend(top.iter().rev().copied());
        Self {
            bands,
            center_choice,
            dropped_band: None,
        }
    }

    /// All bands, top to bottom.
    #[inline]
    #[must_use]
    pub fn bands(&self) -> &[BandInstance] {
        &self.bands
    }

    /// Number of bands.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Always false; a sequence has at least its center band.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Bands above the center.
    #[must_use]
    pub fn top_half(&self) -> &[BandInstance] {
        &self.bands[..self.bands.len() / 2]
    }

    /// The center band.
    #[must_use]
    pub fn center(&self) -> &BandInstance {
        &self.bands[self.bands.len() / 2]
    }

    /// Bands below the center.
    #[must_use]
    pub fn bottom_half(&self) -> &[BandInstance] {
        &self.bands[self.bands.len() / 2 + 1..]
    }

    /// How the center was picked.
    #[inline]
    #[must_use]
    pub const fn center_choice(&self) -> CenterChoice {
        self.center_choice
    }

    /// Band the top-half loop picked but had no room to place.
    #[inline]
    #[must_use]
    pub const fn dropped_band(&self) -> Option<&'static BandDefinition> {
        self.dropped_band
    }

    /// Whether the giant snowflake sits in the center.
    #[inline]
    #[must_use]
    pub fn has_giant_center(&self) -> bool {
        self.center_choice == CenterChoice::Giant
    }

    /// Sum of all nominal band heights. May differ from [`TARGET_ROWS`].
    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.bands.iter().map(|b| b.height).sum()
    }

    /// Whether the layout reads the same top-down and bottom-up.
    #[must_use]
    pub fn is_mirror_symmetric(&self) -> bool {
        self.bands.iter().eq(self.bands.iter().rev())
    }

    /// Whether any snowflake or pine band is present.
    #[must_use]
    pub fn has_required_motif(&self) -> bool {
        self.bands.iter().any(|b| b.definition.is_required_motif())
    }

    /// Distinct plus-like pattern kinds, in first-seen order.
    #[must_use]
    pub fn plus_patterns(&self) -> Vec<PatternKind> {
        let mut seen = Vec::new();
        for band in &self.bands {
            let kind = band.pattern();
            if kind.is_plus_like() && !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        seen
    }

    /// Whether a band with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bands.iter().any(|b| b.name() == name)
    }

    /// Compact `name:height` listing, top to bottom.
    #[must_use]
    pub fn describe(&self) -> String {
        self.bands
            .iter()
            .map(|b| format!("{}:{}", b.name(), b.height))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Mutable bookkeeping for one composition.
#[derive(Debug, Default)]
struct ComposerState {
    top: Vec<BandInstance>,
    height: u32,
    used_features: Vec<&'static str>,
    used_plus: Option<PatternKind>,
    has_required: bool,
    dropped: Option<&'static BandDefinition>,
}

impl ComposerState {
    fn push(&mut self, definition: &'static BandDefinition, height: u32) {
        tracing::trace!("band {} height {}", definition.name, height);
        self.top.push(BandInstance::new(definition, height));
        self.height += height;
    }

    /// Plus-like bands are only allowed if they match the kind already used.
    fn plus_allows(&self, band: &BandDefinition) -> bool {
        match self.used_plus {
            Some(used) => !band.pattern.is_plus_like() || band.pattern == used,
            None => true,
        }
    }

    fn note_plus(&mut self, band: &BandDefinition) {
        if band.pattern.is_plus_like() && self.used_plus.is_none() {
            self.used_plus = Some(band.pattern);
        }
    }

    fn is_unused(&self, band: &BandDefinition) -> bool {
        !self.used_features.contains(&band.name)
    }
}

/// Composes band sequences from a catalog.
#[derive(Debug, Clone, Copy)]
pub struct SequenceComposer {
    catalog: &'static BandCatalog,
}

impl Default for SequenceComposer {
    fn default() -> Self {
        Self::new(BandCatalog::standard())
    }
}

impl SequenceComposer {
    /// Creates a composer over a catalog.
    #[inline]
    #[must_use]
    pub const fn new(catalog: &'static BandCatalog) -> Self {
        Self { catalog }
    }

    /// Composes one sequence, consuming draws from `rng`.
    ///
    /// `palette_index` gates palette-locked bands.
    pub fn compose(&self, rng: &mut SeededRandom, palette_index: usize) -> Sequence {
        let catalog = self.catalog;
        let half = TARGET_ROWS / 2;
        let mut state = ComposerState::default();

        let palette_allows = |band: &BandDefinition| {
            band.name != PALETTE_LOCKED_BAND || palette_index == RESERVE_BLUE_INDEX
        };

        if let Some(opening) = rng.choose(catalog.accent) {
            let height = rng.next_int(opening.min_height, opening.max_height);
            state.push(opening, height);
        }

        while state.height < half.saturating_sub(LOOP_MARGIN) {
            let remaining = half - state.height;
            let phase = state.top.len() % 4;

            let band = match phase {
                0 => {
                    let small: Vec<&'static BandDefinition> =
                        catalog.small.iter().filter(|&b| state.plus_allows(b)).collect();
                    let band = rng.choose(&small).copied();
                    if let Some(band) = band {
                        state.note_plus(band);
                    }
                    band
                }
                1 | 3 => rng.choose(catalog.accent),
                _ => {
                    if remaining > FEATURE_ROLL_MIN_REMAINING && rng.next() < FEATURE_CHANCE {
                        let available: Vec<&'static BandDefinition> = catalog
                            .feature
                            .iter()
                            .filter(|&b| palette_allows(b) && state.is_unused(b) && state.plus_allows(b))
                            .collect();
                        match rng.choose(&available).copied() {
                            Some(band) => {
                                state.used_features.push(band.name);
                                state.note_plus(band);
                                state.has_required |= band.is_required_motif();
                                Some(band)
                            }
                            None => rng.choose(catalog.medium),
                        }
                    } else {
                        rng.choose(catalog.medium)
                    }
                }
            };

            let Some(band) = band else { break };
            let max_height = band.max_height.min(remaining.saturating_sub(HEIGHT_MARGIN));
            if max_height < band.min_height {
                state.dropped = Some(band);
                break;
            }

            let height = rng.next_int(band.min_height, max_height);
            state.push(band, height);
        }

        if state.height < half {
            let rem = half - state.height;
            if let Some(filler) = rng.choose(catalog.accent) {
                state.push(filler, rem.min(FILLER_MAX));
            }
        }

        let available = TARGET_ROWS.saturating_sub(state.height * 2);
        let (center, choice) = self.choose_center(rng, &state, available, palette_allows);
        let height = available.min(center.max_height).max(center.min_height);

        tracing::debug!(
            "composed {} top bands, center {} ({:?}) height {} of {} free",
            state.top.len(),
            center.name,
            choice,
            height,
            available
        );

        let center = BandInstance::new(center, height);
        let mut sequence = Sequence::mirrored(&state.top, center, choice);
        sequence.dropped_band = state.dropped;
        sequence
    }

    fn choose_center(
        &self,
        rng: &mut SeededRandom,
        state: &ComposerState,
        available: u32,
        palette_allows: impl Fn(&BandDefinition) -> bool,
    ) -> (&'static BandDefinition, CenterChoice) {
        let catalog = self.catalog;

        if rng.next() < GIANT_CHANCE && available >= catalog.giant.min_height {
            return (catalog.giant, CenterChoice::Giant);
        }

        if !state.has_required {
            let required = catalog.required();
            let candidates: Vec<&'static BandDefinition> = required
                .iter()
                .filter(|&b| state.is_unused(b) && state.plus_allows(b))
                .collect();
            let band = rng
                .choose(&candidates)
                .copied()
                .or_else(|| rng.choose(required))
                .unwrap_or(catalog.giant);
            return (band, CenterChoice::RequiredMotif);
        }

        let candidates: Vec<&'static BandDefinition> = catalog
            .feature
            .iter()
            .filter(|&b| palette_allows(b) && state.is_unused(b) && state.plus_allows(b))
            .collect();
        if let Some(band) = rng.choose(&candidates).copied() {
            return (band, CenterChoice::Feature);
        }

        match rng.choose(catalog.medium) {
            Some(band) => (band, CenterChoice::MediumFallback),
            None => (catalog.giant, CenterChoice::Giant),
        }
    }
}
