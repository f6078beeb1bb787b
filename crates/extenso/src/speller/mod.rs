//! Number spelling.
//!
//! [`NumberSpeller`] is the seam for spelling implementations;
//! [`BrazilianSpeller`] spells Brazilian Portuguese numerals. Scale words
//! agree in number with their group through CLDR plural rules, and the
//! final segment is joined with "e" when it is a round or small remainder.

mod brazilian;
mod ceiling;
mod conjunction;
mod error;
mod plural;

pub use brazilian::{BrazilianSpeller, NumberSpeller, spell};
pub use ceiling::Ceiling;
pub use conjunction::joins_final_segment;
pub use error::SpellError;
pub use plural::{agree, pluralize};
