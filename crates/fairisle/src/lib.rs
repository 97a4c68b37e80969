//! # FAIRISLE
//!
//! Everything around the artwork that touches the outside world.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐      ┌──────────────┐      ┌─────────────┐
//! │ fairisle_procedural │─────>│   metadata   │─────>│  <id>.json  │
//! │   (pure, seeded)    │      └──────────────┘      └─────────────┘
//! └──────────┬──────────┘      ┌──────────────┐      ┌─────────────┐
//!            └────────────────>│    batch     │─────>│  <id>.svg   │
//!                              └──────────────┘      └─────────────┘
//! ```
//!
//! Configuration comes from a TOML file (see [`config`]); the
//! `fairisle_render` binary wires it all to a command line.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;

/// Re-export of the generator crate.
pub use fairisle_procedural as procedural;

pub use batch::{BatchRenderer, BatchReport, SeedRange};
pub use config::{BatchConfig, FairIsleConfig, ImageMode, MetadataConfig};
pub use error::{FairIsleError, FairIsleResult};
pub use metadata::{has_giant_snowflake_trait, Attribute, TokenMetadata};
