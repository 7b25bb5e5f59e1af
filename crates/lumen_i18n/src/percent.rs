use crate::catalog::{PercentCatalog, VALUE_PLACEHOLDER};
use crate::locale::{language_of, normalize_locale, FALLBACK_LOCALE};

const DEFAULT_TEMPLATE: &str = "{value} percent";

/// How a percentage is rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PercentStyle {
    /// `50%`
    Numeric,
    /// `fifty percent` (words where the language supports it)
    #[default]
    SpellOut,
}

/// Locale and style for percentage phrases
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PercentFormat {
    pub locale: String,
    pub style: PercentStyle,
}

impl PercentFormat {
    pub fn new(locale: impl AsRef<str>, style: PercentStyle) -> Self {
        Self {
            locale: normalize_locale(locale.as_ref()),
            style,
        }
    }
}

impl Default for PercentFormat {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE, PercentStyle::SpellOut)
    }
}

/// Turns a fraction in 0..=1 into a localized percentage phrase
#[derive(Clone, Debug)]
pub struct PercentFormatter {
    format: PercentFormat,
    catalog: PercentCatalog,
}

impl PercentFormatter {
    pub fn new(format: PercentFormat) -> Self {
        Self::with_catalog(format, PercentCatalog::builtin())
    }

    pub fn with_catalog(format: PercentFormat, catalog: PercentCatalog) -> Self {
        Self { format, catalog }
    }

    pub fn format_config(&self) -> &PercentFormat {
        &self.format
    }

    pub fn set_format(&mut self, format: PercentFormat) {
        self.format = format;
    }

    pub fn catalog_mut(&mut self) -> &mut PercentCatalog {
        &mut self.catalog
    }

    /// Format `fraction` (clamped to 0..=1, NaN reads as 0)
    pub fn format(&self, fraction: f32) -> String {
        let percent = whole_percent(fraction);
        match self.format.style {
            PercentStyle::Numeric => format!("{percent}%"),
            PercentStyle::SpellOut => {
                let value = if language_of(&self.format.locale) == "en" {
                    spell_out_en(percent)
                } else {
                    percent.to_string()
                };
                self.catalog
                    .template_for(&self.format.locale)
                    .unwrap_or(DEFAULT_TEMPLATE)
                    .replace(VALUE_PLACEHOLDER, &value)
            }
        }
    }
}

impl Default for PercentFormatter {
    fn default() -> Self {
        Self::new(PercentFormat::default())
    }
}

/// Format with the built-in catalog
pub fn format_percent(fraction: f32, format: &PercentFormat) -> String {
    PercentFormatter::new(format.clone()).format(fraction)
}

/// Whole percent, rounding half to even like platform number formatters
fn whole_percent(fraction: f32) -> u32 {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    (fraction as f64 * 100.0).round_ties_even() as u32
}

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// English cardinal words for `0..=999`; larger values fall back to digits
pub fn spell_out_en(n: u32) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{tens}-{}", ONES[ones as usize]),
            }
        }
        100..=999 => {
            let hundreds = format!("{} hundred", ONES[(n / 100) as usize]);
            match n % 100 {
                0 => hundreds,
                rest => format!("{hundreds} {}", spell_out_en(rest)),
            }
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spell_out_words() {
        assert_eq!(spell_out_en(0), "zero");
        assert_eq!(spell_out_en(13), "thirteen");
        assert_eq!(spell_out_en(40), "forty");
        assert_eq!(spell_out_en(42), "forty-two");
        assert_eq!(spell_out_en(100), "one hundred");
        assert_eq!(spell_out_en(305), "three hundred five");
        assert_eq!(spell_out_en(1000), "1000");
    }

    #[test]
    fn rounding_is_half_even() {
        assert_eq!(whole_percent(0.497), 50);
        assert_eq!(whole_percent(0.125), 12);
        assert_eq!(whole_percent(0.375), 38);
        assert_eq!(whole_percent(f32::NAN), 0);
        assert_eq!(whole_percent(3.0), 100);
        assert_eq!(whole_percent(-1.0), 0);
    }

    #[test]
    fn english_spell_out() {
        let f = PercentFormatter::default();
        assert_eq!(f.format(0.497), "fifty percent");
        assert_eq!(f.format(0.0), "zero percent");
        assert_eq!(f.format(1.0), "one hundred percent");
        assert_eq!(f.format(0.21), "twenty-one percent");
    }

    #[test]
    fn numeric_style() {
        let f = PercentFormatter::new(PercentFormat::new("de-DE", PercentStyle::Numeric));
        assert_eq!(f.format(0.497), "50%");
    }

    #[test]
    fn other_languages_use_digits_in_template() {
        let format = PercentFormat::new("de_DE", PercentStyle::SpellOut);
        assert_eq!(format_percent(0.75, &format), "75 Prozent");
        let format = PercentFormat::new("ko-KR", PercentStyle::SpellOut);
        assert_eq!(format_percent(0.3, &format), "30퍼센트");
    }

    #[test]
    fn locale_case_does_not_change_template() {
        let format = PercentFormat::new("DE-de", PercentStyle::SpellOut);
        assert_eq!(format.locale, "de-DE");
        assert_eq!(format_percent(0.5, &format), "50 Prozent");
        let format = PercentFormat::new("EN_us", PercentStyle::SpellOut);
        assert_eq!(format_percent(0.5, &format), "fifty percent");
    }

    #[test]
    fn empty_catalog_uses_default_template() {
        let f = PercentFormatter::with_catalog(PercentFormat::default(), PercentCatalog::new());
        assert_eq!(f.format(0.5), "fifty percent");
    }
}
