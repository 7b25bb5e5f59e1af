use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::I18nError;
use crate::locale::{locale_fallback_chain, normalize_locale};

/// Placeholder every template must contain
pub(crate) const VALUE_PLACEHOLDER: &str = "{value}";

const MAX_TEMPLATE_BYTES: usize = 256;

/// Per-locale templates for spoken percentages.
///
/// Each template contains `{value}`, which is replaced by the (possibly
/// spelled-out) percent number:
///
/// ```yaml
/// en: "{value} percent"
/// de: "{value} Prozent"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PercentCatalog {
    templates: HashMap<String, String>,
}

impl PercentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates shipped with Lumen
    pub fn builtin() -> Self {
        let mut cat = Self::new();
        for (locale, template) in [
            ("en", "{value} percent"),
            ("de", "{value} Prozent"),
            ("es", "{value} por ciento"),
            ("fr", "{value} pour cent"),
            ("ko", "{value}퍼센트"),
        ] {
            cat.templates.insert(locale.to_string(), template.to_string());
        }
        cat
    }

    /// Parse a YAML mapping of locale to template
    pub fn parse(src: &str) -> Result<Self, I18nError> {
        let raw: BTreeMap<String, String> = serde_yaml::from_str(src)?;
        let mut cat = Self::new();
        for (locale, template) in raw {
            cat.insert(locale, template)?;
        }
        Ok(cat)
    }

    /// Add or replace the template for a locale
    pub fn insert(
        &mut self,
        locale: impl AsRef<str>,
        template: impl Into<String>,
    ) -> Result<(), I18nError> {
        let locale = normalize_locale(locale.as_ref());
        let template = template.into();
        if locale.is_empty() {
            return Err(I18nError::Entry {
                locale,
                msg: "empty locale".to_string(),
            });
        }
        if !template.contains(VALUE_PLACEHOLDER) {
            return Err(I18nError::Entry {
                locale,
                msg: format!("template must contain `{VALUE_PLACEHOLDER}`"),
            });
        }
        if template.len() > MAX_TEMPLATE_BYTES {
            return Err(I18nError::Entry {
                locale,
                msg: format!("template is too long (max {MAX_TEMPLATE_BYTES} bytes)"),
            });
        }
        self.templates.insert(locale, template);
        Ok(())
    }

    /// Overlay `other` on top of this catalog
    pub fn merge(&mut self, other: PercentCatalog) {
        debug!(entries = other.templates.len(), "merging percent catalog");
        self.templates.extend(other.templates);
    }

    /// Template for the most specific matching locale
    pub fn template_for(&self, locale: &str) -> Option<&str> {
        locale_fallback_chain(locale)
            .iter()
            .find_map(|l| self.templates.get(l))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
