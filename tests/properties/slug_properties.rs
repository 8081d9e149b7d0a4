use proptest::prelude::*;

use aimp::import::{is_valid_slug, normalize_slug};

fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PM{0,40}",
        "[A-Za-z0-9 :：_\\-!?.\\[\\]【】]{0,40}",
        "(【[^】]{0,6}】)?[\u{4e00}-\u{9fa5} A-Za-z]{0,20}",
    ]
}

proptest! {
    #[test]
    fn normalization_is_idempotent(label in arb_label()) {
        let once = normalize_slug(&label);
        prop_assert_eq!(normalize_slug(&once), once);
    }

    #[test]
    fn non_empty_output_is_valid(label in arb_label()) {
        let slug = normalize_slug(&label);
        prop_assume!(!slug.is_empty());
        prop_assert!(is_valid_slug(&slug), "invalid slug {:?} from {:?}", slug, label);
    }

    #[test]
    fn output_has_no_ascii_uppercase_or_whitespace(label in arb_label()) {
        let slug = normalize_slug(&label);
        prop_assert!(!slug.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace()));
        prop_assert!(!slug.contains("--"));
    }
}
