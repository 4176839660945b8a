//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site identity.
//! pub struct SiteSectionConfig {
//!     /// Display name of the site.
//!     pub title: String,
//!
//!     /// URL path prefix the site is served under.
//!     #[config(default = "/")]
//!     pub base: Option<String>,
//!
//!     #[config(inline_doc = "Render LaTeX math in pages.")]
//!     pub math: bool,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteSectionConfig::template() -> TOML body with comments
//! // - SiteSectionConfig::template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//! - `#[config(array)]` - Section is an array of tables (`[[path]]`)
//!
//! Field-level:
//! - `#[config(sub)]` - Nested Config section, rendered with its own header
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc = "x")]` - Trailing comment in template
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `FooterConfig` → `footer`
//! - `LastUpdatedConfig` → `last_updated`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
