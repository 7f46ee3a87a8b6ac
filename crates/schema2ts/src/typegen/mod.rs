mod schema_data;
mod transformer;

use log::{debug, error};

use crate::{
    CodegenError, CodegenResult,
    case::{check_is_valid_title, type_name},
    format::format_ts,
    options::GenerationOptions,
    schema_node::SchemaNode,
    typegen::transformer::Transformer,
};

/// Root declaration name when the schema has no usable `title`.
pub static DEFAULT_ROOT_NAME: &str = "Schema";

#[derive(Debug, Clone)]
pub struct TypegenResult {
    /// Name of the interface generated for the root node
    pub type_name: String,
    pub interfaces_generated: usize,
    pub enums_generated: usize,
    /// Declarations in output order, before `explain`/`semi`/`format` are applied
    pub declarations: Vec<String>,
    pub types: String,
}

/// Converts schema text into TypeScript declarations.
///
/// Never fails: text that does not parse as a schema yields
/// [`GenerationOptions::parse_error_message`].
pub fn schema2ts(schema: &str, options: &GenerationOptions) -> String {
    match generate(schema, options) {
        Ok(res) => res.types,
        Err(CodegenError::Json(e)) => {
            debug!("failed parsing schema: {e}");
            options.parse_error_message.clone()
        }
        Err(e) => {
            error!("{e}");
            options.parse_error_message.clone()
        }
    }
}

/// Fallible form of [`schema2ts`] that reports what was generated.
pub fn generate(schema: &str, options: &GenerationOptions) -> CodegenResult<TypegenResult> {
    let root: SchemaNode = serde_json::from_str(schema)?;

    let root_name = root
        .title
        .as_deref()
        .filter(|t| check_is_valid_title(Some(*t)))
        .unwrap_or(DEFAULT_ROOT_NAME);

    let mut transformer = Transformer::new(options)?;
    transformer.visit(&root, root_name)?;
    let output = transformer.finish();

    let mut types = format!("{}\n", output.declarations.join("\n\n"));
    if !options.explain.is_empty() {
        types = format!("{}\n{types}", options.explain);
    }
    if options.format {
        types = format_ts(&types);
    }
    if !options.semi {
        types = types.replace(';', "");
    }

    debug!(
        "generated {} interface(s) and {} enum(s)",
        output.interfaces, output.enums
    );

    Ok(TypegenResult {
        type_name: format!("{}{}", options.prefix, type_name(root_name)),
        interfaces_generated: output.interfaces,
        enums_generated: output.enums,
        declarations: output.declarations,
        types,
    })
}
