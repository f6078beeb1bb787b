//! Brazilian Portuguese number spelling.
//!
//! Converts non-negative integers into their written-out form, e.g.
//! `1234` becomes `"mil duzentos e trinta e quatro"`.
//!
//! # Example
//!
//! ```
//! use extenso::{BrazilianSpeller, NumberSpeller, spell};
//!
//! assert_eq!(spell(1001).unwrap(), "mil e um");
//!
//! let speller = BrazilianSpeller::new();
//! assert_eq!(speller.spell(2_000_000).unwrap(), "dois milhões");
//! ```

pub mod lexicon;
pub mod speller;
pub mod types;

pub use speller::{BrazilianSpeller, Ceiling, NumberSpeller, SpellError, spell};
pub use types::Group;
