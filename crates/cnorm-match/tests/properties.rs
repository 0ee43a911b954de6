mod common;

use cnorm_match::{MatchConfig, MatchEngine, MatchOutcome, StoreAdmin};
use common::sample_store;
use proptest::prelude::*;

proptest! {
    #[test]
    fn exact_high_alias_resolves_to_its_value(key in "[a-z]{3,12}") {
        let mut store = sample_store();
        prop_assert!(StoreAdmin::new(&mut store).add(&key, "Zzyzx", 1));

        let engine = MatchEngine::new(&store, MatchConfig::default());
        prop_assert_eq!(
            engine.match_default(&key.to_uppercase()),
            MatchOutcome::Matched("Zzyzx".to_string())
        );
    }

    #[test]
    fn queries_are_idempotent(text in "[a-zA-Z ,.!-]{1,30}") {
        let store = sample_store();
        let engine = MatchEngine::new(&store, MatchConfig::default());
        prop_assert_eq!(engine.match_default(&text), engine.match_default(&text));
    }

    #[test]
    fn out_of_range_accuracy_is_invalid(accuracy in prop_oneof![-10.0..=0.0f64, 1.0..10.0f64]) {
        let store = sample_store();
        let engine = MatchEngine::new(&store, MatchConfig::default());
        prop_assert_eq!(
            engine.match_country_name("Russia", accuracy),
            MatchOutcome::InvalidInput
        );
    }
}
