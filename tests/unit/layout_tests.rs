use std::path::PathBuf;

use aimp::AimpError;
use aimp::import::{CATEGORIES, PathResolver, Vocabulary};

fn resolver() -> PathResolver {
    PathResolver::new("/site/posts", Vocabulary::standard())
}

#[test]
fn every_label_resolves_to_its_code() {
    for category in CATEGORIES {
        let target = resolver().resolve(category.label, "", "slug").unwrap();
        assert_eq!(
            target,
            PathBuf::from(format!("/site/posts/{}/slug", category.code))
        );
    }
}

#[test]
fn codes_are_accepted_too() {
    let target = resolver().resolve("personal-growth", "habits", "deep-work").unwrap();
    assert_eq!(
        target,
        PathBuf::from("/site/posts/personal-growth/habits/deep-work")
    );
}

#[test]
fn unknown_label_is_rejected() {
    let err = resolver().resolve("Poetry", "", "slug").unwrap_err();
    assert!(matches!(err, AimpError::UnknownCategory { label } if label == "Poetry"));
}

#[test]
fn vocabulary_lookup_edge_cases() {
    let vocabulary = Vocabulary::standard();
    assert!(vocabulary.lookup("").is_none());
    assert_eq!(vocabulary.lookup("GAME").map(|c| c.code), Some("game"));
    assert_eq!(vocabulary.lookup("GAME 游戏").map(|c| c.code), Some("game"));
    assert!(vocabulary.contains_code("politics"));
    assert!(!vocabulary.contains_code("时政"));
}
