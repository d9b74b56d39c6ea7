//! Property tests for card validation and shuffling (pure domain, no DB).

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::domain::deck::default_codes;
use crate::domain::shuffle::DeckRng;
use crate::domain::validation::{parse_card_codes, validate_cards};
use crate::errors::domain::{DomainError, ValidationKind};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: any subset of the full deck, in any order, validates and
    /// keeps its length.
    #[test]
    fn prop_distinct_subsets_validate(
        subset in subsequence(default_codes(), 0..=52).prop_shuffle(),
    ) {
        let cards = parse_card_codes(&subset).unwrap();
        prop_assert_eq!(cards.len(), subset.len());
    }

    /// Property: lower-casing never changes validity.
    #[test]
    fn prop_case_insensitive(
        subset in subsequence(default_codes(), 1..=52),
    ) {
        let lower: Vec<String> = subset.iter().map(|c| c.to_lowercase()).collect();
        prop_assert!(validate_cards(&lower).is_ok());
    }

    /// Property: repeating any member is reported as a duplicate.
    #[test]
    fn prop_repeat_is_duplicate(
        subset in subsequence(default_codes(), 1..=52),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut codes = subset.clone();
        codes.push(pick.get(&subset).clone());
        let err = validate_cards(&codes).unwrap_err();
        prop_assert!(matches!(err, DomainError::Validation(ValidationKind::DuplicateCardCode, _)));
    }

    /// Property: shuffling preserves the multiset of cards.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let original = default_codes();
        let mut shuffled = original.clone();
        DeckRng::seeded(seed).shuffle(&mut shuffled);

        prop_assert_eq!(shuffled.len(), original.len());
        let a: HashSet<_> = original.iter().collect();
        let b: HashSet<_> = shuffled.iter().collect();
        prop_assert_eq!(a, b);
    }
}
