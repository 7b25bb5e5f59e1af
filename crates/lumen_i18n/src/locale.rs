use std::collections::HashSet;

/// Locale every lookup ends on
pub(crate) const FALLBACK_LOCALE: &str = "en-US";

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (Android and POSIX report `en_US`).
/// - Drops a POSIX encoding suffix (`en_US.UTF-8`).
/// - Trims whitespace.
/// - Canonicalizes case: `DE_de` -> `de-DE`, `zh_hant_tw` -> `zh-Hant-TW`.
pub fn normalize_locale(s: &str) -> String {
    let s = s.trim();
    let s = s.split('.').next().unwrap_or(s);
    s.split(['_', '-'])
        .enumerate()
        .map(|(i, subtag)| canonical_subtag_case(i, subtag))
        .collect::<Vec<_>>()
        .join("-")
}

/// Language lowercase, script titlecase, region uppercase
fn canonical_subtag_case(index: usize, subtag: &str) -> String {
    match (index, subtag.len()) {
        (0, _) => subtag.to_ascii_lowercase(),
        (_, 2) => subtag.to_ascii_uppercase(),
        (_, 4) => {
            let lower = subtag.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => lower,
            }
        }
        _ => subtag.to_ascii_lowercase(),
    }
}

/// Create a fallback chain for catalog lookup.
///
/// - `ko-KR` -> `["ko-KR", "ko", "en-US", "en"]`
/// - `en-US` -> `["en-US", "en"]`
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain = Vec::new();

    for candidate in [l.as_str(), FALLBACK_LOCALE] {
        if candidate.is_empty() {
            continue;
        }
        chain.push(candidate.to_string());
        if let Some(lang) = candidate.split('-').next() {
            if !lang.is_empty() {
                chain.push(lang.to_string());
            }
        }
    }

    let mut seen = HashSet::new();
    chain.retain(|x| seen.insert(x.clone()));
    chain
}

/// Primary language subtag (`en-US` -> `en`)
pub(crate) fn language_of(locale: &str) -> String {
    normalize_locale(locale)
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize() {
        assert_eq!(normalize_locale(" en_US "), "en-US");
        assert_eq!(normalize_locale("de_DE.UTF-8"), "de-DE");
        assert_eq!(normalize_locale("DE-de"), "de-DE");
        assert_eq!(normalize_locale("zh_hant_tw"), "zh-Hant-TW");
        assert_eq!(normalize_locale(""), "");
    }

    #[test]
    fn fallback_chain() {
        assert_eq!(locale_fallback_chain("ko_KR"), vec!["ko-KR", "ko", "en-US", "en"]);
        assert_eq!(locale_fallback_chain("en-US"), vec!["en-US", "en"]);
        assert_eq!(locale_fallback_chain(""), vec!["en-US", "en"]);
    }

    #[test]
    fn language() {
        assert_eq!(language_of("EN_gb"), "en");
        assert_eq!(language_of("fr"), "fr");
    }
}
