pub mod case;
pub mod format;
pub mod options;
pub mod render;
pub mod schema_node;
pub mod typegen;

use thiserror::Error;

pub use options::GenerationOptions;
pub use schema_node::{EnumEntry, NodeKind, SchemaNode};
pub use typegen::{TypegenResult, generate, schema2ts};

pub type CodegenResult<T> = Result<T, CodegenError>;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}
