use std::sync::LazyLock;

use regex::Regex;

use crate::{
    case::{get_indent, quote},
    schema_node::{EnumEntry, SchemaNode},
};

static DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/\*\*(.*?)\*/\s*").expect("invalid doc comment pattern"));

static COMMENT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*/").expect("invalid comment end pattern"));

/// Renders the union body of an enum: `'a' | 'b' | 'c'`.
///
/// Entries without a (trimmed, non-empty) value are skipped. Quotes and
/// backslashes inside values are escaped.
pub fn get_enum_type(entries: &[EnumEntry]) -> String {
    entries
        .iter()
        .filter_map(|e| e.value.as_deref().map(str::trim))
        .filter(|v| !v.is_empty())
        .map(quote)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Single line doc comment summarising a node, or an empty string when the
/// node has nothing to say.
pub fn generate_comment(node: &SchemaNode, indent: usize) -> String {
    let mut comment = String::new();

    if let Some(title) = &node.title {
        comment.push_str(title);
    }
    if node.is_array() {
        if let Some(items) = &node.items {
            if let Some(title) = &items.title {
                comment.push_str(&format!(" {title}"));
            }
            if let Some(description) = &items.description {
                comment.push_str(&format!(" ({description})"));
            }
        }
    } else if let Some(description) = &node.description {
        comment.push_str(&format!(" ({description})"));
    }

    if comment.is_empty() {
        return String::new();
    }

    // a literal `*/` in a title would close the comment early
    let comment = COMMENT_END.replace_all(&comment, "*-/");
    format!("{}/** {comment} */\n", get_indent(indent))
}

/// Strips doc comments so declarations differing only in comments compare equal.
pub fn remove_comment(declaration: &str) -> String {
    declaration
        .split('\n')
        .map(|line| DOC_COMMENT.replace(line, ""))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_enum() {
        assert_eq!(get_enum_type(&[]), "");
    }

    #[test]
    fn test_enum_skips_missing_values() {
        let all_missing = [
            EnumEntry::without_value("test enum1"),
            EnumEntry::without_value("test enum2"),
            EnumEntry::without_value("test enum3"),
        ];
        assert_eq!(get_enum_type(&all_missing), "");

        let last_only = [
            EnumEntry::without_value("test enum1"),
            EnumEntry::without_value("test enum2"),
            EnumEntry::new("test enum3", "enum3"),
        ];
        assert_eq!(get_enum_type(&last_only), "'enum3'");

        let gap = [
            EnumEntry::new("test enum1", "enum1"),
            EnumEntry::without_value("test enum2"),
            EnumEntry::new("test enum3", "enum3"),
        ];
        assert_eq!(get_enum_type(&gap), "'enum1' | 'enum3'");

        let trailing_gap = [
            EnumEntry::new("test enum1", "enum1"),
            EnumEntry::without_value("test enum2"),
        ];
        assert_eq!(get_enum_type(&trailing_gap), "'enum1'");
    }

    #[test]
    fn test_enum_values() {
        let entries = [
            EnumEntry::new("test enum1", "enum1"),
            EnumEntry::new("test enum2", " enum2 "),
            EnumEntry::new("test enum3", "enum3"),
            EnumEntry::new("blank", "   "),
        ];
        assert_eq!(get_enum_type(&entries), "'enum1' | 'enum2' | 'enum3'");
    }

    #[test]
    fn test_enum_values_are_escaped() {
        let entries = [
            EnumEntry::new("apostrophe", "it's"),
            EnumEntry::new("path", r"a\b"),
        ];
        assert_eq!(get_enum_type(&entries), r"'it\'s' | 'a\\b'");
    }

    #[test]
    fn test_array_comment() {
        let node: SchemaNode = serde_json::from_str(
            r#"{
                "type": "array",
                "title": "test arr3",
                "items": {
                    "type": "object",
                    "title": "test arr3 items",
                    "description": "test arr3 description"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            generate_comment(&node, 2),
            "  /** test arr3 test arr3 items (test arr3 description) */\n"
        );
    }

    #[test]
    fn test_plain_comment() {
        let node = SchemaNode {
            type_tag: Some("string".into()),
            title: Some("test string title".into()),
            description: Some("test string description".into()),
            ..Default::default()
        };
        assert_eq!(
            generate_comment(&node, 2),
            "  /** test string title (test string description) */\n"
        );

        let description_only = SchemaNode {
            description: Some("just words".into()),
            ..Default::default()
        };
        assert_eq!(generate_comment(&description_only, 0), "/**  (just words) */\n");

        assert_eq!(generate_comment(&SchemaNode::default(), 2), "");
    }

    #[test]
    fn test_comment_end_is_escaped() {
        let node = SchemaNode {
            title: Some("ends */ early".into()),
            ..Default::default()
        };
        assert_eq!(generate_comment(&node, 0), "/** ends *-/ early */\n");
    }

    #[test]
    fn test_remove_comment() {
        assert_eq!(remove_comment("  /** test arr3 test arr3 items */\n"), "");
        assert_eq!(
            remove_comment("interface IA {\n  /** first */\n  a?: string;\n}"),
            "interface IA {\n  a?: string;\n}"
        );
    }
}
