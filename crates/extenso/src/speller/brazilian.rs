use bon::Builder;
use tracing::{debug, instrument, trace};

use crate::lexicon::{self, CONJUNCTION, GROUP_SEPARATOR, THOUSANDS_INDEX, ZERO};
use crate::speller::{Ceiling, SpellError, agree, joins_final_segment};
use crate::types::Group;

/// Converts integers into their written-out form.
pub trait NumberSpeller {
    /// Spells `number` in full, or reports why it cannot be spelled.
    fn spell(&self, number: i128) -> Result<String, SpellError>;
}

/// Spells numbers in Brazilian Portuguese.
///
/// The speller holds no mutable state and can be shared freely across
/// threads.
///
/// # Example
///
/// ```
/// use extenso::{BrazilianSpeller, Ceiling, NumberSpeller, SpellError};
///
/// let speller = BrazilianSpeller::builder()
///     .ceiling(Ceiling::Lexicon)
///     .build();
///
/// assert_eq!(speller.spell(1_101).unwrap(), "mil cento e um");
/// assert_eq!(
///     speller.spell(-1),
///     Err(SpellError::NegativeNotAllowed { number: -1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct BrazilianSpeller {
    /// Largest accepted input. Defaults to `i64::MAX`.
    #[builder(default)]
    ceiling: Ceiling,
}

impl BrazilianSpeller {
    /// Creates a speller accepting numbers up to `i64::MAX`.
    pub const fn new() -> Self {
        Self {
            ceiling: Ceiling::NativeInt,
        }
    }

    /// Creates a speller with the given ceiling.
    pub const fn with_ceiling(ceiling: Ceiling) -> Self {
        Self { ceiling }
    }

    /// The ceiling this speller enforces.
    pub fn ceiling(&self) -> Ceiling {
        self.ceiling
    }

    /// Rejects negative and too-large inputs, returning the magnitude.
    fn validate(&self, number: i128) -> Result<u128, SpellError> {
        if number < 0 {
            debug!(%number, "rejected negative number");
            return Err(SpellError::NegativeNotAllowed { number });
        }
        let ceiling = self.ceiling.limit();
        if number > ceiling {
            debug!(%number, %ceiling, "rejected number above ceiling");
            return Err(SpellError::NumberTooLarge { number, ceiling });
        }
        Ok(number.unsigned_abs())
    }
}

impl NumberSpeller for BrazilianSpeller {
    #[instrument(level = "trace", skip(self))]
    fn spell(&self, number: i128) -> Result<String, SpellError> {
        let magnitude = self.validate(number)?;
        if magnitude == 0 {
            return Ok(ZERO.to_string());
        }

        let groups = Group::split(magnitude);
        let mut segments: Vec<String> = groups
            .iter()
            .filter(|group| !group.is_zero())
            .map(segment)
            .collect();

        if joins_final_segment(&groups) {
            if let Some(last) = segments.first_mut() {
                *last = format!("{CONJUNCTION} {last}");
            }
        }

        segments.reverse();
        Ok(segments.join(" "))
    }
}

/// Spells one non-zero group together with its scale word.
fn segment(group: &Group) -> String {
    let words = group.words().join(GROUP_SEPARATOR);
    let spoken = match lexicon::scale_word(group.index()) {
        None => words,
        // "mil", never "um mil"
        Some(scale) if group.index() == THOUSANDS_INDEX && group.value() == 1 => {
            scale.to_string()
        }
        Some(scale) => format!("{words} {}", agree(scale, group.value())),
    };
    trace!(
        index = group.index(),
        value = group.value(),
        %spoken,
        "spelled group"
    );
    spoken
}

/// Spells `number` with the default [`BrazilianSpeller`].
///
/// ```
/// assert_eq!(extenso::spell(234_u16).unwrap(), "duzentos e trinta e quatro");
/// assert!(extenso::spell(-5).is_err());
/// ```
pub fn spell(number: impl Into<i128>) -> Result<String, SpellError> {
    BrazilianSpeller::new().spell(number.into())
}
