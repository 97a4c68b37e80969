//! # Preview Helpers
//!
//! Embeddable encodings of a rendered document.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// MIME prefix of an SVG data URI.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Encodes an SVG document as a base64 data URI.
#[must_use]
pub fn to_data_uri(svg: &str) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + svg.len() * 4 / 3 + 4);
    uri.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(svg.as_bytes(), &mut uri);
    uri
}

/// Adds the "Minted!" badge shown after a successful mint.
///
/// The badge replaces the first closing `</svg>` tag. Input without one is
/// returned unchanged.
#[must_use]
pub fn with_success_overlay(svg: &str, palette_name: &str, is_rare: bool) -> String {
    let rare = if is_rare { " (Rare)" } else { "" };
    let badge = format!(
        concat!(
            "\n        <rect x=\"250\" y=\"350\" width=\"300\" height=\"100\" rx=\"16\" fill=\"#111\" fill-opacity=\"0.95\"/>",
            "\n        <text x=\"400\" y=\"395\" font-family=\"sans-serif\" font-size=\"24\" font-weight=\"bold\" fill=\"#4ade80\" text-anchor=\"middle\">Minted!</text>",
            "\n        <text x=\"400\" y=\"425\" font-family=\"sans-serif\" font-size=\"14\" fill=\"#888\" text-anchor=\"middle\">{name}{rare}</text>",
            "\n        </svg>",
        ),
        name = palette_name,
        rare = rare,
    );
    svg.replacen("</svg>", &badge, 1)
}
