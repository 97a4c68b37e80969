//! # FAIRISLE Procedural Generation
//!
//! Deterministic fair isle artwork from a single integer seed.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces byte-identical SVG and metadata
//! 2. **Pure**: No I/O, no hidden state, no clocks
//! 3. **Fixed cost**: 100x100 grid, static catalogs, one PRNG per call
//! 4. **Parallel-safe**: Nothing is shared between calls except immutable tables
//!
//! ## Pipeline
//!
//! ```text
//! Seed ──> RaritySelector ──> Palette
//!   │
//!   └──> SeededRandom(seed + 1000) ──> SequenceComposer ──> Sequence
//!                                                              │
//!                             Palette ──> StitchRenderer <── Grid <── GridRasterizer
//! ```
//!
//! ## Core Components
//!
//! - `SeededRandom`: Park-Miller generator (multiplier 16807, modulus 2^31 - 1)
//! - `select_palette`: Seed to palette/rarity, independent of the PRNG
//! - `PatternKind`: Closed set of per-cell color index functions
//! - `BandCatalog`: Static band tables (accent, small, medium, feature, giant)
//! - `SequenceComposer`: Mirror-symmetric band layout around one center band
//! - `Grid`: 100x100 color index raster
//! - `StitchRenderer`: Shaded stitch SVG document
//!
//! ## Example
//!
//! ```rust,ignore
//! use fairisle_procedural::{generate, Seed};
//!
//! let result = generate(424_242u64);
//! assert_eq!(result.palette.colors.len(), 5);
//!
//! let seed: Seed = "-5".parse()?;
//! assert_eq!(generate(seed).image, generate(5u64).image);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod band;
pub mod color;
pub mod error;
pub mod generator;
pub mod grid;
pub mod palette;
pub mod pattern;
pub mod preview;
pub mod rng;
pub mod seed;
pub mod sequence;
pub mod stitch;

pub use band::{BandCatalog, BandDefinition, BandInstance, BandTier};
pub use color::{adjust_brightness, Rgb, StitchShades};
pub use error::{SeedError, SeedResult};
pub use generator::{generate, Artwork, RenderResult};
pub use grid::{Grid, COLS, ROWS};
pub use palette::{select_palette, Palette, PaletteSelection, RESERVE_BLUE_INDEX};
pub use pattern::{PatternKind, PatternParams};
pub use preview::{to_data_uri, with_success_overlay};
pub use rng::SeededRandom;
pub use seed::Seed;
pub use sequence::{CenterChoice, Sequence, SequenceComposer, TARGET_ROWS};
pub use stitch::{StitchRenderer, CANVAS_SIZE, STITCH_SIZE};
