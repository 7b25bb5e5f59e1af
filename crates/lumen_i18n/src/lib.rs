//! Lumen localized value formatting
//!
//! Widgets describe numeric state to assistive technology as phrases.
//! This crate turns a progress fraction into such a phrase for a locale:
//!
//! - `0.497` with [`PercentStyle::SpellOut`] in `en-US` → `"fifty percent"`
//! - `0.497` with [`PercentStyle::Numeric`] → `"50%"`
//!
//! Formatters are plain values owned by whoever needs them; there is no global
//! formatter state.

mod catalog;
mod error;
mod locale;
mod percent;

pub use catalog::PercentCatalog;
pub use error::I18nError;
pub use locale::{locale_fallback_chain, normalize_locale};
pub use percent::{format_percent, spell_out_en, PercentFormat, PercentFormatter, PercentStyle};
