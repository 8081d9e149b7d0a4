use proptest::prelude::*;

use crate::config::{ArticleConfig, Config, ContentConfig};
use crate::import::{CATEGORIES, ImportInput};

/// Folder names the way authors write them: an optional bracketed tag,
/// words in mixed scripts, the odd colon or stray punctuation.
pub fn arb_folder_name() -> impl Strategy<Value = String> {
    let prefix = prop_oneof![
        Just(String::new()),
        "[A-Za-z ]{1,8}".prop_map(|tag| format!("[{tag}]")),
        "[\u{4e00}-\u{4e20}]{1,4}".prop_map(|tag| format!("【{tag}】")),
    ];
    let word = prop_oneof![
        "[A-Za-z0-9]{1,10}",
        "[\u{4e00}-\u{9fa5}]{1,6}",
        Just("：".to_string()),
        Just(":".to_string()),
        Just("-".to_string()),
        "[!?.,'&]{1,2}",
    ];
    (prefix, prop::collection::vec(word, 1..6))
        .prop_map(|(prefix, words)| format!("{prefix}{}", words.join(" ")))
}

/// File names drawn from the vocabulary the classifier recognizes, mixed
/// with names that match nothing.
pub fn arb_source_file_name() -> impl Strategy<Value = String> {
    let stem = prop_oneof![
        Just("cover".to_string()),
        Just("封面".to_string()),
        Just("思维导图".to_string()),
        Just("mindmap".to_string()),
        Just("flashcards".to_string()),
        Just("slides".to_string()),
        "[a-z]{1,8}",
    ];
    let extension = prop_oneof![
        Just("png"),
        Just("JPG"),
        Just("mp4"),
        Just("mp3"),
        Just("pdf"),
        Just("pptx"),
        Just("csv"),
        Just("txt"),
        Just("md"),
    ];
    (stem, extension).prop_map(|(stem, ext)| format!("{stem}.{ext}"))
}

pub fn arb_import_input() -> impl Strategy<Value = ImportInput> {
    (
        prop::sample::select(CATEGORIES.to_vec()),
        prop::option::of("[a-z]{2,10}"),
        ".{1,30}",
        "[A-Za-z ]{1,20}",
    )
        .prop_map(|(category, subcategory, title, author)| ImportInput {
            category: category.code.to_string(),
            subcategory: subcategory.unwrap_or_default(),
            title,
            author,
            ..ImportInput::default()
        })
}

pub fn arb_config() -> impl Strategy<Value = Config> {
    (
        "[a-z/_-]{1,30}",
        "[a-z_]{1,10}\\.md",
        "[A-Za-z ]{1,20}",
    )
        .prop_map(|(root, index_file, default_author)| Config {
            content: ContentConfig { root, index_file },
            article: ArticleConfig { default_author },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::import::{
        ArticleFields, FrontMatter, MetadataComposer, ResourceClassifier, normalize_slug,
    };

    proptest! {
        #[test]
        fn config_survives_toml(config in arb_config()) {
            let rendered = config.to_toml().unwrap();
            let parsed: Config = toml::from_str(&rendered).unwrap();
            prop_assert_eq!(parsed.content.root, config.content.root);
            prop_assert_eq!(parsed.content.index_file, config.content.index_file);
            prop_assert_eq!(parsed.article.default_author, config.article.default_author);
        }

        #[test]
        fn composed_document_keeps_resources(
            names in prop::collection::vec(arb_source_file_name(), 0..8),
            folder in arb_folder_name(),
        ) {
            let slug = normalize_slug(&folder);
            // Plain YAML scalars must stay strings when read back.
            prop_assume!(slug.starts_with(char::is_alphabetic));
            prop_assume!(!matches!(slug.as_str(), "null" | "true" | "false"));
            let resources = ResourceClassifier::new().classify(&names);
            let fields = ArticleFields {
                title: "Title",
                slug: &slug,
                category: "coding",
                subcategory: None,
                author: "CodeMaster",
                date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            };
            let document = MetadataComposer::new().compose(&fields, &resources);
            let (front, _body) = FrontMatter::parse(&document).unwrap().unwrap();

            prop_assert_eq!(front.slug.as_deref(), Some(slug.as_str()));
            prop_assert_eq!(
                front.cover.as_deref(),
                resources.get(crate::import::ResourceRole::Cover)
            );
        }

        #[test]
        fn input_strategy_uses_known_categories(input in arb_import_input()) {
            prop_assert!(crate::import::Vocabulary::standard().contains_code(&input.category));
        }
    }
}
