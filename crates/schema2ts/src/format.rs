use biome_formatter::IndentStyle;
use biome_js_formatter::{context::JsFormatOptions, format_node};
use biome_js_parser::{JsParserOptions, parse};
use biome_js_syntax::JsFileSource;

/// Pretty-prints generated TypeScript, returning the input untouched when
/// biome cannot parse or print it.
pub fn format_ts(code: &str) -> String {
    let source = JsFileSource::ts();
    let parsed = parse(code, source, JsParserOptions::default());
    if parsed.has_errors() {
        log::debug!("skipping formatting, generated code has syntax errors");
        return code.into();
    }

    let options = JsFormatOptions::new(source).with_indent_style(IndentStyle::Space);
    match format_node(options, &parsed.syntax()).map(|f| f.print()) {
        Ok(Ok(printed)) => printed.into_code(),
        _ => code.into(),
    }
}
