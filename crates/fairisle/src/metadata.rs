//! # Token Metadata
//!
//! The JSON document marketplaces read for a token. Artwork and traits are
//! derived from the token id alone.

use fairisle_procedural::rng::MULTIPLIER;
use fairisle_procedural::{generate, to_data_uri, RenderResult, Seed};
use serde::{Deserialize, Serialize};

use crate::config::{ImageMode, MetadataConfig};
use crate::error::FairIsleResult;

/// Percentage of tokens carrying the "Has Giant Snowflake" trait.
const GIANT_TRAIT_PERCENT: u128 = 20;

/// Offset applied to the token id before the trait roll.
const GIANT_TRAIT_OFFSET: u128 = 1000;

/// One marketplace trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Trait name.
    pub trait_type: String,
    /// Trait value.
    pub value: String,
}

impl Attribute {
    fn new(trait_type: &str, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.to_owned(),
            value: value.into(),
        }
    }
}

/// Marketplace metadata for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Display name, `"<prefix> #<id>"`.
    pub name: String,
    /// Collection description.
    pub description: String,
    /// Data URI or preview link.
    pub image: String,
    /// Token page on the public site.
    pub external_url: String,
    /// Traits.
    pub attributes: Vec<Attribute>,
}

/// Legacy giant-snowflake trait.
///
/// This roll predates the composer and is kept as issued. It does not say
/// whether the rendered center band is actually the giant snowflake.
#[must_use]
pub fn has_giant_snowflake_trait(token_id: u64) -> bool {
    (u128::from(token_id) + GIANT_TRAIT_OFFSET) * u128::from(MULTIPLIER) % 100 < GIANT_TRAIT_PERCENT
}

impl TokenMetadata {
    /// Builds metadata for a token, rendering its artwork.
    #[must_use]
    pub fn for_token(token_id: u64, config: &MetadataConfig) -> Self {
        let result = generate(Seed::new(token_id));
        Self::from_render(token_id, &result, config)
    }

    /// Builds metadata from an already rendered artwork.
    #[must_use]
    pub fn from_render(token_id: u64, result: &RenderResult, config: &MetadataConfig) -> Self {
        let image = match config.image {
            ImageMode::DataUri => to_data_uri(&result.image),
            ImageMode::Url => format!("{}/api/preview?seed={token_id}", config.base_url()),
        };

        let palette_type = if result.is_rare { "Rare" } else { "Standard" };
        let giant = if has_giant_snowflake_trait(token_id) {
            "Yes"
        } else {
            "No"
        };

        Self {
            name: format!("{} #{token_id}", config.name_prefix),
            description: config.description.clone(),
            image,
            external_url: format!("{}?tokenId={token_id}", config.base_url()),
            attributes: vec![
                Attribute::new("Palette", result.palette.name),
                Attribute::new("Palette Type", palette_type),
                Attribute::new("Has Giant Snowflake", giant),
            ],
        }
    }

    /// Looks up a trait value by name.
    #[must_use]
    pub fn attribute(&self, trait_type: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.trait_type == trait_type)
            .map(|a| a.value.as_str())
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FairIsleError::Json`] if serialization fails.
    pub fn to_json(&self) -> FairIsleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
