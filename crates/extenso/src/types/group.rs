use serde::Serialize;

use crate::lexicon::{self, HUNDRED_EXACT, Place};

/// A run of up to three decimal digits, grouped by thousands.
///
/// Groups are numbered from the least-significant end: index 0 holds the
/// units, index 1 the thousands, index 2 the millions, and so on. A partial
/// leading group is padded with zeros on the left.
///
/// # Example
///
/// ```
/// use extenso::Group;
///
/// let groups = Group::split(1_234_567);
/// let values: Vec<u16> = groups.iter().map(Group::value).collect();
/// assert_eq!(values, vec![567, 234, 1]);
/// assert_eq!(groups[1].words(), vec!["duzentos", "trinta", "quatro"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Group {
    index: usize,
    digits: [u8; 3],
    value: u16,
}

impl Group {
    /// Creates a group from its position and its three digits, most
    /// significant first.
    pub fn new(index: usize, digits: [u8; 3]) -> Self {
        Self {
            index,
            digits,
            value: digits_value(&digits),
        }
    }

    /// Splits a number into groups, least-significant group first.
    ///
    /// Zero yields a single zero-valued group.
    pub fn split(number: u128) -> Vec<Group> {
        let rendered = number.to_string();
        rendered
            .as_bytes()
            .rchunks(3)
            .enumerate()
            .map(|(index, chunk)| {
                let mut digits = [0_u8; 3];
                let padding = digits.len() - chunk.len();
                for (slot, byte) in digits.iter_mut().skip(padding).zip(chunk) {
                    *slot = byte - b'0';
                }
                Group::new(index, digits)
            })
            .collect()
    }

    /// Position of this group, counted from the units group.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The three digits of this group, most significant first.
    pub fn digits(&self) -> [u8; 3] {
        self.digits
    }

    /// Numeric value of this group, in `0..=999`.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Returns true if every digit of this group is zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Words spelling this group's value, without scale word or conjunctions.
    ///
    /// Digits are read one place at a time. A remainder between 11 and 19
    /// is spoken as a single contraction that also consumes the units digit.
    pub fn words(&self) -> Vec<&'static str> {
        if self.value == 100 {
            return vec![HUNDRED_EXACT];
        }

        let mut words = Vec::with_capacity(Place::ALL.len());
        for (position, (place, &digit)) in Place::ALL.iter().zip(&self.digits).enumerate() {
            let remainder = digits_value(&self.digits[position..]);
            if let Some(teen) = lexicon::teen(remainder) {
                words.push(teen);
                break;
            }
            if let Some(word) = lexicon::word(*place, digit) {
                words.push(word);
            }
        }
        words
    }
}

fn digits_value(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0, |value, &digit| value * 10 + u16::from(digit))
}
