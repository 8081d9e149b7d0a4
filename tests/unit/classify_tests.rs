use aimp::import::{ResourceClassifier, ResourceRole, RoleRule};

fn classifier() -> ResourceClassifier {
    ResourceClassifier::new()
}

#[test]
fn extension_matching_is_case_insensitive() {
    assert_eq!(classifier().role_for("LECTURE.MP4"), Some(ResourceRole::Video));
    assert_eq!(classifier().role_for("Deck.PPTX"), Some(ResourceRole::Slides));
}

#[test]
fn keyword_wins_over_extension_by_rule_order() {
    assert_eq!(classifier().role_for("cover.mp4"), Some(ResourceRole::Cover));
    assert_eq!(classifier().role_for("flashcards.pdf"), Some(ResourceRole::Slides));
}

#[test]
fn extension_is_not_a_substring_match() {
    assert_eq!(classifier().role_for("notes.mp4.txt"), None);
    assert_eq!(classifier().role_for("csv-notes.md"), None);
}

#[test]
fn locale_tokens_match() {
    assert_eq!(classifier().role_for("封面.jpg"), Some(ResourceRole::Cover));
    assert_eq!(classifier().role_for("课程思维导图.png"), Some(ResourceRole::Mindmap));
}

#[test]
fn later_file_wins_for_same_role() {
    let map = classifier().classify(["a.mp3", "b.wav"]);
    assert_eq!(map.get(ResourceRole::Audio), Some("b.wav"));
    assert_eq!(map.len(), 1);
}

#[test]
fn unrecognized_files_are_ignored() {
    let map = classifier().classify(["readme.md", "data.json"]);
    assert!(map.is_empty());
}

static AUDIO_ONLY: [RoleRule; 1] = [RoleRule {
    role: ResourceRole::Audio,
    keywords: &["podcast"],
    locale_tokens: &[],
    extensions: &["ogg"],
}];

#[test]
fn custom_rule_table() {
    let classifier = ResourceClassifier::with_rules(&AUDIO_ONLY);
    assert_eq!(classifier.role_for("podcast.txt"), Some(ResourceRole::Audio));
    assert_eq!(classifier.role_for("song.ogg"), Some(ResourceRole::Audio));
    assert_eq!(classifier.role_for("cover.png"), None);
}
