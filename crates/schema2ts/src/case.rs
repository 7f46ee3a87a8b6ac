use heck::ToPascalCase;
use unicode_ident::{is_xid_continue, is_xid_start};

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whitespace for one level of `indent` spaces.
pub fn get_indent(indent: usize) -> String {
    " ".repeat(indent)
}

/// Whether a schema `title` can name the root declaration.
///
/// Only the first character is inspected: it must be an ASCII letter, `_` or `$`.
pub fn check_is_valid_title(title: Option<&str>) -> bool {
    title
        .and_then(|t| t.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
}

/// Whether `input` can be written as a bare TypeScript identifier.
pub fn is_identifier(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) if is_xid_start(first) || first == '_' || first == '$' => {
            chars.all(|c| is_xid_continue(c) || c == '$')
        }
        _ => false,
    }
}

/// Name fragment used for declarations derived from a property key.
///
/// Identifier-safe keys are only capitalized so `hairColor` stays `HairColor`;
/// anything else (`first-name`, `2nd place`) is PascalCased into something legal.
pub fn type_name(key: &str) -> String {
    if is_identifier(key) {
        return capitalize(key);
    }
    let mut cased = key.to_pascal_case();
    if cased.starts_with(|c: char| c.is_ascii_digit()) {
        cased = format!("_{cased}");
    }
    cased
}

/// Single-quoted TypeScript string literal of `input`.
pub fn quote(input: &str) -> String {
    format!("'{}'", input.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Property key as it appears inside an interface body.
pub fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}
