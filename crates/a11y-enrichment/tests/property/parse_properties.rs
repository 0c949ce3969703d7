//! Property tests for the numbered-reply parser.

use a11y_enrichment::parse_numbered_reply;
use proptest::prelude::*;

proptest! {
    #[test]
    fn output_length_always_matches_batch(reply in ".{0,400}", n in 1usize..=20) {
        let out = parse_numbered_reply(&reply, n);
        prop_assert_eq!(out.len(), n);
    }

    #[test]
    fn no_slot_is_ever_empty(reply in "(\\d{1,2}\\. ?[a-zа-я ]{0,12}\n){0,15}", n in 1usize..=12) {
        for slot in parse_numbered_reply(&reply, n) {
            prop_assert!(!slot.trim().is_empty());
        }
    }

    #[test]
    fn well_formed_replies_round_trip(items in prop::collection::vec("[a-zа-я]{1,10}( [a-zа-я]{1,10}){0,3}", 1..15)) {
        let reply: String = items
            .iter()
            .enumerate()
            .map(|(i, text)| format!("{}. {}\n", i + 1, text))
            .collect();
        prop_assert_eq!(parse_numbered_reply(&reply, items.len()), items);
    }
}
