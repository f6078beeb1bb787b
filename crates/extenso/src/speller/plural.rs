//! Number agreement for scale words.
//!
//! Portuguese scale words agree with the value of the group they count:
//! "um milhão" but "dois milhões". The singular/plural decision follows the
//! CLDR cardinal rules for Portuguese, where the "one" category covers the
//! integers 0 and 1.
//!
//! Plural rules are cached per thread and built lazily on first access.

use std::borrow::Cow;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

thread_local! {
    /// Per-thread Portuguese cardinal rules.
    static PORTUGUESE_RULES: PluralRules = build_rules();
}

fn build_rules() -> PluralRules {
    PluralRules::try_new(locale!("pt").into(), PluralRuleType::Cardinal.into())
        .expect("compiled data should include Portuguese plural rules")
}

/// Returns the CLDR plural category of `value` in Portuguese.
fn category(value: u16) -> PluralCategory {
    PORTUGUESE_RULES.with(|rules| rules.category_for(i64::from(value)))
}

/// Inflects a singular scale word to agree with a group's value.
///
/// # Examples
///
/// ```
/// use extenso::speller::agree;
///
/// assert_eq!(agree("milhão", 1), "milhão");
/// assert_eq!(agree("milhão", 2), "milhões");
/// assert_eq!(agree("mil", 300), "mil");
/// ```
pub fn agree(scale: &'static str, value: u16) -> Cow<'static, str> {
    match category(value) {
        PluralCategory::One => Cow::Borrowed(scale),
        _ => pluralize(scale),
    }
}

/// Pluralizes a scale word by replacing a final "ão" with "ões".
///
/// Words without that ending are invariable.
pub fn pluralize(word: &'static str) -> Cow<'static, str> {
    match word.strip_suffix("ão") {
        Some(stem) => Cow::Owned(format!("{stem}ões")),
        None => Cow::Borrowed(word),
    }
}
