use std::io::{Read, Write};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use log::{info, warn};
use schema2ts::{CodegenError, GenerationOptions, generate};

use crate::{
    config::Config,
    utils::styles::{fmt_bold, fmt_dimmed, fmt_success},
};

#[derive(Debug, Clone, Default, Parser)]
pub struct GenerateCmd {
    /// Schema file to read, stdin when omitted or `-`
    pub input: Option<Utf8PathBuf>,

    /// File to write the declarations to, stdout when omitted
    #[arg(long, short)]
    pub output: Option<Utf8PathBuf>,

    /// Line placed above the generated declarations
    #[arg(long)]
    pub explain: Option<String>,

    /// Generate doc comments from titles and descriptions
    #[arg(long)]
    pub comments: bool,

    /// Spaces per indentation level
    #[arg(long)]
    pub indent: Option<usize>,

    /// Leave out statement-ending semicolons
    #[arg(long)]
    pub no_semi: bool,

    /// Emit fields as required instead of optional
    #[arg(long)]
    pub required: bool,

    /// Property key to leave out of every interface (repeatable)
    #[arg(long = "ignore-key", value_name = "KEY")]
    pub ignore_keys: Vec<String>,

    /// Prefix of interface names
    #[arg(long)]
    pub prefix: Option<String>,

    /// Prefix of enum type names
    #[arg(long)]
    pub enum_prefix: Option<String>,

    /// Do not export the declarations
    #[arg(long)]
    pub no_export: bool,

    /// Pretty-print the output with the TypeScript formatter
    #[arg(long)]
    pub format: bool,

    /// Exit with an error when the schema cannot be parsed
    #[arg(long)]
    pub strict: bool,
}

impl GenerateCmd {
    pub(crate) fn handle(&self, cfg: Config) -> Result<()> {
        let options = self.apply(cfg.options);
        let schema = self.read_input()?;

        let types = match generate(&schema, &options) {
            Ok(res) => {
                info!(
                    "{}",
                    fmt_success(&format!(
                        "Generated {root} with {interfaces} interface(s) and {enums} enum(s)",
                        root = fmt_bold(&res.type_name),
                        interfaces = res.interfaces_generated,
                        enums = res.enums_generated,
                    ))
                );
                res.types
            }
            Err(CodegenError::Json(e)) if !self.strict => {
                warn!("schema could not be parsed: {e}");
                options.parse_error_message.clone()
            }
            Err(e) => return Err(e).context("failed generating types"),
        };

        self.write_output(&types)
    }

    /// Layers the command line flags over the configured options.
    pub fn apply(&self, mut options: GenerationOptions) -> GenerationOptions {
        if let Some(explain) = &self.explain {
            options.explain.clone_from(explain);
        }
        if let Some(indent) = self.indent {
            options.indent = indent;
        }
        if let Some(prefix) = &self.prefix {
            options.prefix.clone_from(prefix);
        }
        if let Some(enum_prefix) = &self.enum_prefix {
            options.enum_prefix.clone_from(enum_prefix);
        }
        options.gen_comment |= self.comments;
        options.format |= self.format;
        options.semi &= !self.no_semi;
        options.optional &= !self.required;
        options.export &= !self.no_export;
        options.ignore_keys.extend(self.ignore_keys.iter().cloned());
        options
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("failed reading schema {path}")),
            _ => {
                let mut schema = String::new();
                std::io::stdin()
                    .read_to_string(&mut schema)
                    .context("failed reading schema from stdin")?;
                Ok(schema)
            }
        }
    }

    fn write_output(&self, types: &str) -> Result<()> {
        if let Some(path) = &self.output {
            std::fs::write(path, types).with_context(|| format!("failed writing {path}"))?;
            info!("{}", fmt_success(&format!("Wrote {}", fmt_dimmed(path.as_str()))));
        } else {
            std::io::stdout()
                .write_all(types.as_bytes())
                .context("failed writing to stdout")?;
        }
        Ok(())
    }
}
