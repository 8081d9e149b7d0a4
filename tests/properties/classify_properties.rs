use std::collections::HashSet;

use proptest::prelude::*;

use aimp::import::{ResourceClassifier, ResourceRole};

fn arb_file_name() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just("cover"),
            Just("封面"),
            Just("mindmap"),
            Just("思维导图"),
            Just("flashcards"),
            Just("notes"),
            Just("lecture"),
        ],
        "[a-z0-9]{0,4}",
        prop_oneof![
            Just("png"),
            Just("mp4"),
            Just("MOV"),
            Just("mp3"),
            Just("pdf"),
            Just("csv"),
            Just("md"),
        ],
    )
        .prop_map(|(stem, suffix, ext)| format!("{stem}{suffix}.{ext}"))
}

proptest! {
    #[test]
    fn each_role_has_at_most_one_file(names in prop::collection::vec(arb_file_name(), 0..20)) {
        let map = ResourceClassifier::new().classify(&names);
        let roles: HashSet<ResourceRole> = map.roles().into_iter().collect();
        prop_assert_eq!(roles.len(), map.len());
        prop_assert!(map.len() <= 6);
    }

    #[test]
    fn every_mapped_file_came_from_input(names in prop::collection::vec(arb_file_name(), 0..20)) {
        let map = ResourceClassifier::new().classify(&names);
        for (role, file) in map.iter() {
            prop_assert!(names.iter().any(|n| n == file));
            prop_assert_eq!(ResourceClassifier::new().role_for(file), Some(role));
        }
    }

    #[test]
    fn last_match_wins(names in prop::collection::vec(arb_file_name(), 1..20)) {
        let classifier = ResourceClassifier::new();
        let map = classifier.classify(&names);
        for (role, file) in map.iter() {
            let last = names
                .iter()
                .rev()
                .find(|n| classifier.role_for(n) == Some(role))
                .map(String::as_str);
            prop_assert_eq!(last, Some(file));
        }
    }

    #[test]
    fn roles_come_out_in_canonical_order(names in prop::collection::vec(arb_file_name(), 0..20)) {
        let roles = ResourceClassifier::new().classify(&names).roles();
        let mut sorted = roles.clone();
        sorted.sort();
        prop_assert_eq!(roles, sorted);
    }
}
