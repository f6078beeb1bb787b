//! Static Portuguese numeral tables.
//!
//! Every table is total over its declared domain. Positional tables are
//! indexed by `digit - 1`; the digit zero never has a word of its own.

/// The word for the number zero, spoken only when the whole input is zero.
pub const ZERO: &str = "zero";

/// Exactly one hundred. Any other 1xx value uses "cento".
pub const HUNDRED_EXACT: &str = "cem";

/// The conjunction joining numeral parts.
pub const CONJUNCTION: &str = "e";

/// Separator placed between the words of a single group.
pub const GROUP_SEPARATOR: &str = " e ";

const UNITS: [&str; 9] = [
    "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const TENS: [&str; 9] = [
    "dez",
    "vinte",
    "trinta",
    "quarenta",
    "cinquenta",
    "sessenta",
    "setenta",
    "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 9] = [
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Contractions for 11 through 19.
const TEENS: [&str; 9] = [
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

/// Singular scale words, starting at the thousands group.
const SCALES: [&str; 11] = [
    "mil",
    "milhão",
    "bilhão",
    "trilhão",
    "quatrilhão",
    "quintilhão",
    "sextilhão",
    "septilhão",
    "octilhão",
    "nonilhão",
    "decilhão",
];

/// Group index of the thousands group.
pub const THOUSANDS_INDEX: usize = 1;

/// Largest number the scale table can name: 36 nines.
pub const MAX_SPELLABLE: i128 = 10_i128.pow(3 * (SCALES.len() as u32 + 1)) - 1;

/// Position of a digit inside a three-digit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Hundreds,
    Tens,
    Units,
}

impl Place {
    /// Places in reading order, matching the layout of a group's digits.
    pub const ALL: [Place; 3] = [Place::Hundreds, Place::Tens, Place::Units];

    fn table(self) -> &'static [&'static str; 9] {
        match self {
            Place::Hundreds => &HUNDREDS,
            Place::Tens => &TENS,
            Place::Units => &UNITS,
        }
    }
}

/// Returns the word for `digit` at `place`, or `None` for zero and
/// out-of-range digits.
///
/// ```
/// use extenso::lexicon::{Place, word};
///
/// assert_eq!(word(Place::Tens, 3), Some("trinta"));
/// assert_eq!(word(Place::Hundreds, 0), None);
/// ```
pub fn word(place: Place, digit: u8) -> Option<&'static str> {
    let index = usize::from(digit.checked_sub(1)?);
    place.table().get(index).copied()
}

/// Returns the contracted word for values 11 through 19.
pub fn teen(value: u16) -> Option<&'static str> {
    if !(11..=19).contains(&value) {
        return None;
    }
    TEENS.get(usize::from(value - 11)).copied()
}

/// Returns the singular scale word for a group index.
///
/// The units group (index 0) has no scale word, nor does any index past
/// "decilhão".
pub fn scale_word(group_index: usize) -> Option<&'static str> {
    let index = group_index.checked_sub(1)?;
    SCALES.get(index).copied()
}

