//! Shared string inflection utilities.
//!
//! Provides pluralization and singularization for deriving conventional
//! table and foreign-key names at registration time. Uses the `inflector`
//! crate with additional handling for common irregular plurals that appear
//! in database schemas.

use inflector::Inflector;

/// Known irregular plurals that inflector doesn't handle well for database contexts.
static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("half", "halves"),
    ("self", "selves"),
    ("analysis", "analyses"),
    ("basis", "bases"),
    ("diagnosis", "diagnoses"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
    ("index", "indices"),
    ("matrix", "matrices"),
];

/// Pluralize a word, handling irregulars first then falling back to inflector.
///
/// # Examples
/// ```ignore
/// assert_eq!(pluralize("comment"), "comments");
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("person"), "people");
/// ```
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    // Check irregular plurals first
    for (singular, plural) in IRREGULAR_PLURALS {
        if lower == *singular {
            return (*plural).to_string();
        }
        // Already plural?
        if lower == *plural {
            return (*plural).to_string();
        }
    }

    word.to_plural()
}

/// Singularize a word, handling irregulars first then falling back to inflector.
///
/// # Examples
/// ```ignore
/// assert_eq!(singularize("comments"), "comment");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("people"), "person");
/// ```
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    // Check irregular plurals first
    for (singular, plural) in IRREGULAR_PLURALS {
        if lower == *plural {
            return (*singular).to_string();
        }
        if lower == *singular {
            return (*singular).to_string();
        }
    }

    word.to_singular()
}

/// Derive the conventional foreign-key column for a relationship name:
/// singular snake_case plus `_id`.
///
/// # Examples
/// ```ignore
/// assert_eq!(foreign_key("user"), "user_id");
/// assert_eq!(foreign_key("comments"), "comment_id");
/// ```
pub fn foreign_key(name: &str) -> String {
    format!("{}_id", singularize(&name.to_snake_case()))
}
