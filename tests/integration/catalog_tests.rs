use aimp::catalog::{Catalog, CatalogFilter};
use aimp::import::RecordingObserver;

use super::fixture::TestFixture;

#[test]
fn test_imported_articles_show_up_in_catalog() {
    let fixture = TestFixture::new("test_imported_articles_show_up_in_catalog");
    let rust = fixture.add_source("Rust Traits", &[("cover.png", "img"), ("talk.mp4", "v")]);
    let go = fixture.add_source("Go Channels", &[("deck.pdf", "pdf")]);

    let mut orchestrator = fixture.orchestrator();
    let mut input = fixture.input(&rust, "coding");
    input.subcategory = "rust".to_string();
    orchestrator.run(&input, &mut RecordingObserver::new()).unwrap();
    orchestrator
        .run(&fixture.input(&go, "coding"), &mut RecordingObserver::new())
        .unwrap();

    let catalog = Catalog::new(&fixture.content_root, "index.md");
    let all = catalog.scan().unwrap();
    assert_eq!(all.len(), 2);

    let rust_only = catalog
        .list(&CatalogFilter {
            category: Some("coding".to_string()),
            subcategory: Some("rust".to_string()),
        })
        .unwrap();
    assert_eq!(rust_only.len(), 1);
    assert_eq!(rust_only[0].slug, "rust-traits");
    assert_eq!(rust_only[0].cover.as_deref(), Some("cover.png"));
    assert_eq!(rust_only[0].date.as_deref(), Some("2024-06-01"));

    let subs = catalog.subcategories().unwrap();
    assert!(subs["coding"].contains("rust"));
}

#[test]
fn test_title_with_colon_is_skipped_not_fatal() {
    let fixture = TestFixture::new("test_title_with_colon_is_skipped_not_fatal");
    let source = fixture.add_source("colon", &[("a.mp3", "a")]);
    let mut input = fixture.input(&source, "ai");
    input.title = "Part 1: Basics".to_string();
    fixture
        .orchestrator()
        .run(&input, &mut RecordingObserver::new())
        .unwrap();

    let entries = Catalog::new(&fixture.content_root, "index.md").scan().unwrap();
    assert!(entries.is_empty());
}
