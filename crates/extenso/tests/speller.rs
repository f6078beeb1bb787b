//! Integration tests for `BrazilianSpeller`.

use std::thread;

use extenso::lexicon::MAX_SPELLABLE;
use extenso::{BrazilianSpeller, Ceiling, NumberSpeller, SpellError, spell};

// =========================================================================
// Literal scenarios
// =========================================================================

#[test]
fn zero_is_spelled_as_word() {
    assert_eq!(spell(0).unwrap(), "zero");
}

#[test]
fn single_digit() {
    assert_eq!(spell(1).unwrap(), "um");
}

#[test]
fn teen_contraction() {
    assert_eq!(spell(15).unwrap(), "quinze");
}

#[test]
fn exactly_one_hundred_is_cem() {
    assert_eq!(spell(100).unwrap(), "cem");
}

#[test]
fn hundred_series_uses_cento() {
    assert_eq!(spell(101).unwrap(), "cento e um");
}

#[test]
fn full_group_joins_words_with_e() {
    assert_eq!(spell(234).unwrap(), "duzentos e trinta e quatro");
}

#[test]
fn one_thousand_is_bare_mil() {
    assert_eq!(spell(1_000).unwrap(), "mil");
}

#[test]
fn small_remainder_after_thousand_joins_with_e() {
    assert_eq!(spell(1_001).unwrap(), "mil e um");
}

#[test]
fn round_hundred_after_thousand_joins_with_e() {
    assert_eq!(spell(1_100).unwrap(), "mil e cem");
}

#[test]
fn hundred_with_remainder_after_thousand_joins_with_space() {
    assert_eq!(spell(1_101).unwrap(), "mil cento e um");
}

#[test]
fn plural_million() {
    assert_eq!(spell(2_000_000).unwrap(), "dois milhões");
}

#[test]
fn singular_billion() {
    assert_eq!(spell(1_000_000_000).unwrap(), "um bilhão");
}

// =========================================================================
// Gaps and large groups
// =========================================================================

#[test]
fn zero_groups_between_spoken_groups_are_skipped() {
    assert_eq!(spell(1_000_000_001).unwrap(), "um bilhão e um");
    assert_eq!(spell(1_000_001_000_i64).unwrap(), "um bilhão e mil");
    assert_eq!(spell(2_000_001).unwrap(), "dois milhões e um");
}

#[test]
fn zero_units_group_joins_thousands_with_e() {
    assert_eq!(spell(1_002_000).unwrap(), "um milhão e dois mil");
    assert_eq!(spell(2_001_000).unwrap(), "dois milhões e mil");
}

#[test]
fn teens_inside_every_group() {
    assert_eq!(spell(11_011_011).unwrap(), "onze milhões onze mil e onze");
}

#[test]
fn mil_never_pluralizes() {
    assert_eq!(spell(2_500).unwrap(), "dois mil e quinhentos");
    assert_eq!(spell(300_000).unwrap(), "trezentos mil");
}

#[test]
fn native_int_maximum() {
    assert_eq!(
        spell(i64::MAX).unwrap(),
        "nove quintilhões duzentos e vinte e três quatrilhões trezentos e setenta e dois \
         trilhões trinta e seis bilhões oitocentos e cinquenta e quatro milhões setecentos \
         e setenta e cinco mil oitocentos e sete"
    );
}

#[test]
fn lexicon_ceiling_reaches_decilhao() {
    let speller = BrazilianSpeller::with_ceiling(Ceiling::Lexicon);
    assert_eq!(speller.spell(10_i128.pow(33)).unwrap(), "um decilhão");
    assert_eq!(
        speller.spell(2 * 10_i128.pow(33) + 5).unwrap(),
        "dois decilhões e cinco"
    );
    assert_eq!(speller.spell(10_i128.pow(21) + 1).unwrap(), "um sextilhão e um");

    let largest = speller.spell(MAX_SPELLABLE).unwrap();
    assert!(largest.starts_with("novecentos e noventa e nove decilhões"));
    assert!(largest.ends_with("mil novecentos e noventa e nove"));
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn negative_numbers_are_rejected() {
    for number in [-1, -2, -1_000, i128::from(i64::MIN), i128::MIN] {
        assert_eq!(
            BrazilianSpeller::new().spell(number),
            Err(SpellError::NegativeNotAllowed { number })
        );
    }
}

#[test]
fn native_ceiling_rejects_above_i64_max() {
    let number = i128::from(i64::MAX) + 1;
    assert_eq!(
        spell(number),
        Err(SpellError::NumberTooLarge {
            number,
            ceiling: i128::from(i64::MAX),
        })
    );
}

#[test]
fn lexicon_ceiling_rejects_above_max_spellable() {
    let speller = BrazilianSpeller::builder().ceiling(Ceiling::Lexicon).build();
    assert!(speller.spell(MAX_SPELLABLE).is_ok());
    assert_eq!(
        speller.spell(MAX_SPELLABLE + 1),
        Err(SpellError::NumberTooLarge {
            number: MAX_SPELLABLE + 1,
            ceiling: MAX_SPELLABLE,
        })
    );
    assert!(matches!(
        speller.spell(i128::MAX),
        Err(SpellError::NumberTooLarge { .. })
    ));
}

#[test]
fn negative_check_precedes_ceiling() {
    let speller = BrazilianSpeller::with_ceiling(Ceiling::Lexicon);
    assert!(matches!(
        speller.spell(i128::MIN),
        Err(SpellError::NegativeNotAllowed { .. })
    ));
}

#[test]
fn error_messages_name_the_number() {
    let negative = spell(-42).unwrap_err().to_string();
    assert!(negative.contains("negative"));
    assert!(negative.contains("-42"));

    let too_large = spell(i128::from(i64::MAX) + 1).unwrap_err().to_string();
    assert!(too_large.contains("9223372036854775808"));
    assert!(too_large.contains("9223372036854775807"));
}

// =========================================================================
// Builder and configuration
// =========================================================================

#[test]
fn default_ceiling_is_native_int() {
    assert_eq!(BrazilianSpeller::default().ceiling(), Ceiling::NativeInt);
    assert_eq!(BrazilianSpeller::builder().build(), BrazilianSpeller::new());
    assert_eq!(Ceiling::NativeInt.limit(), i128::from(i64::MAX));
    assert_eq!(Ceiling::Lexicon.limit(), MAX_SPELLABLE);
}

#[test]
fn ceiling_deserializes_from_snake_case() {
    let ceiling: Ceiling = serde_json::from_str("\"lexicon\"").unwrap();
    assert_eq!(ceiling, Ceiling::Lexicon);
    assert_eq!(
        serde_json::to_string(&Ceiling::NativeInt).unwrap(),
        "\"native_int\""
    );
    assert!(serde_json::from_str::<Ceiling>("\"unbounded\"").is_err());
}

#[test]
fn speller_works_through_trait_object() {
    let spellers: Vec<Box<dyn NumberSpeller>> = vec![
        Box::new(BrazilianSpeller::new()),
        Box::new(BrazilianSpeller::with_ceiling(Ceiling::Lexicon)),
    ];
    for speller in &spellers {
        assert_eq!(speller.spell(21_000).unwrap(), "vinte e um mil");
    }
}

#[test]
fn speller_is_shareable_across_threads() {
    let speller = BrazilianSpeller::new();
    let handles: Vec<_> = (0..4_i64)
        .map(|offset| {
            thread::spawn(move || speller.spell(i128::from(1_000_000 + offset)).unwrap())
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![
            "um milhão",
            "um milhão e um",
            "um milhão e dois",
            "um milhão e três",
        ]
    );
}
