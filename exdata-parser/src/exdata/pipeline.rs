//! Pipeline from source text to rendered output
//!
//!     The stages run strictly in order and each one fully finishes before the next starts:
//!
//!         source ─tokenize─▶ tokens ─parse─▶ Sentence ─to_tagged_tree─▶ Value ─render─▶ String
//!
//!     [`Pipeline`] holds the rendering choices (format and indent) and nothing else, so one
//!     pipeline can be reused for any number of sources.

use crate::exdata::ast::Sentence;
use crate::exdata::formats::{render_tagged, to_tagged_tree, to_treeviz_str};
use crate::exdata::lexing::{tokenize, LexError};
use crate::exdata::parsing::{parse, ParseError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Any failure between reading the source and producing output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Rendering error: {0}")]
    Render(#[from] serde_json::Error),
}

/// What the pipeline renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The tagged tree as indented JSON.
    #[default]
    Json,
    /// The tagged tree as single-line JSON.
    JsonCompact,
    /// The token stream as indented JSON.
    Tokens,
    /// The AST as a treeviz view.
    Treeviz,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::JsonCompact,
        OutputFormat::Tokens,
        OutputFormat::Treeviz,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::JsonCompact => "json-compact",
            OutputFormat::Tokens => "tokens",
            OutputFormat::Treeviz => "treeviz",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Json => "Tagged tree as indented JSON (default)",
            OutputFormat::JsonCompact => "Tagged tree as single-line JSON",
            OutputFormat::Tokens => "Token stream as indented JSON",
            OutputFormat::Treeviz => "One line per AST node",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();
                format!(
                    "Unknown format '{}' (expected one of: {})",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// Tokenize and parse a source document.
pub fn parse_document(source: &str) -> Result<Sentence, PipelineError> {
    let tokens = tokenize(source)?;
    Ok(parse(tokens)?)
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    format: OutputFormat,
    indent: usize,
}

impl Pipeline {
    pub const DEFAULT_INDENT: usize = 2;

    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            indent: Self::DEFAULT_INDENT,
        }
    }

    /// Spaces per nesting level for the indented JSON formats.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Run every stage on `source` and return the rendered output, newline terminated.
    pub fn execute(&self, source: &str) -> Result<String, PipelineError> {
        log::debug!("running {} pipeline on {} bytes", self.format, source.len());
        let tokens = tokenize(source)?;

        let rendered = match self.format {
            OutputFormat::Tokens => render_tagged(&serde_json::to_value(&tokens)?, self.indent)?,
            OutputFormat::Json => render_tagged(&to_tagged_tree(&parse(tokens)?), self.indent)?,
            OutputFormat::JsonCompact => render_tagged(&to_tagged_tree(&parse(tokens)?), 0)?,
            OutputFormat::Treeviz => to_treeviz_str(&parse(tokens)?),
        };
        Ok(rendered)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
