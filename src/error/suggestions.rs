//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints that
//! use the error's context (which field failed, which label was rejected).

use itertools::Itertools;
use serde_json::Value;

use super::codes::ErrorCode;
use crate::import::CATEGORIES;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::ValidationFailed => suggest_validation_failed(context),
        ErrorCode::UnknownCategory => suggest_unknown_category(context),
        ErrorCode::FilesystemError => suggest_filesystem(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_validation_failed(context: Option<&Value>) -> String {
    let field = context
        .and_then(|c| c.get("field"))
        .and_then(Value::as_str);

    match field {
        Some("source") => {
            "Pass an existing source folder: `aimp import <SOURCE> --category <CODE>`".to_string()
        }
        Some("category") => format!(
            "Pass --category with one of: {}",
            CATEGORIES.iter().map(|c| c.code).join(", ")
        ),
        Some("slug") => "The folder name produced no usable slug. \
            Pass --slug with lowercase letters, digits and hyphens"
            .to_string(),
        Some("title") => "Pass --title; it could not be derived from the folder name".to_string(),
        Some("subcategory") => {
            "Use a single directory name for --subcategory (no '/', '\\' or '..')".to_string()
        }
        _ => ErrorCode::ValidationFailed.suggestion().to_string(),
    }
}

fn suggest_unknown_category(context: Option<&Value>) -> String {
    let codes = CATEGORIES.iter().map(|c| c.code).join(", ");
    match context.and_then(|c| c.get("label")).and_then(Value::as_str) {
        Some(label) => format!("Category '{label}' is not recognized. Valid codes: {codes}"),
        None => format!("Valid category codes: {codes}"),
    }
}

fn suggest_filesystem(context: Option<&Value>) -> String {
    let path = context.and_then(|c| c.get("path")).and_then(Value::as_str);
    match path {
        Some(path) => format!(
            "Could not write under {path}. Check permissions and free space; files copied so far were left in place and re-running the import is safe"
        ),
        None => ErrorCode::FilesystemError.suggestion().to_string(),
    }
}
