use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub static DEFAULT_PARSE_ERROR_MESSAGE: &str = "// Parse schema error, please check your schema.";

/// Knobs for a single generation run.
///
/// Field names serialize to the camelCase keys used by existing schema2ts
/// config files, missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Returned verbatim when the input is not a schema document
    pub parse_error_message: String,
    /// Line placed above all generated declarations
    pub explain: String,
    /// Emit `/** ... */` comments from titles and descriptions
    #[serde(rename = "isGenComment")]
    pub gen_comment: bool,
    /// Spaces per indentation level
    pub indent: usize,
    /// Terminate statements with `;`
    pub semi: bool,
    /// Mark every interface field optional (`key?: T`)
    pub optional: bool,
    /// Property keys left out of every generated interface
    pub ignore_keys: IndexSet<String>,
    /// Prefix of interface names
    #[serde(rename = "preffix", alias = "prefix")]
    pub prefix: String,
    /// Prefix of enum type names
    #[serde(rename = "preffixOfEnum", alias = "enumPrefix")]
    pub enum_prefix: String,
    /// Prepend `export` to declarations
    #[serde(rename = "isExport")]
    pub export: bool,
    /// Run the output through the TypeScript formatter
    pub format: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            parse_error_message: DEFAULT_PARSE_ERROR_MESSAGE.into(),
            explain: String::new(),
            gen_comment: false,
            indent: 2,
            semi: true,
            optional: true,
            ignore_keys: IndexSet::new(),
            prefix: "I".into(),
            enum_prefix: "T".into(),
            export: true,
            format: false,
        }
    }
}

impl GenerationOptions {
    pub fn with_explain(mut self, explain: impl Into<String>) -> Self {
        self.explain = explain.into();
        self
    }

    pub fn with_comments(mut self, gen_comment: bool) -> Self {
        self.gen_comment = gen_comment;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_semi(mut self, semi: bool) -> Self {
        self.semi = semi;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_ignore_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_prefixes(mut self, prefix: impl Into<String>, enum_prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.enum_prefix = enum_prefix.into();
        self
    }

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignore_keys.contains(key)
    }
}
