use serde::{Deserialize, Serialize};

use crate::lexicon::MAX_SPELLABLE;

/// Upper bound on the numbers a speller accepts.
///
/// Deserializes from `"native_int"` or `"lexicon"`, so host applications can
/// carry it in their own configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ceiling {
    /// The largest native signed integer, `i64::MAX`.
    #[default]
    NativeInt,

    /// The largest number the scale words can name, `10^36 - 1`.
    Lexicon,
}

impl Ceiling {
    /// The largest accepted value.
    pub const fn limit(self) -> i128 {
        match self {
            Ceiling::NativeInt => i64::MAX as i128,
            Ceiling::Lexicon => MAX_SPELLABLE,
        }
    }
}
