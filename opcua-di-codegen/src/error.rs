//! Errors raised while reading the codegen inputs and writing the generated modules.

use std::{fmt, io, num::ParseIntError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeGenErrorKind {
    #[error("expected {0}, found `{1}`")]
    WrongFormat(String, String),
    #[error("`{0}` is not an integer: {1}")]
    ParseInt(String, #[source] ParseIntError),
    #[error("{0} `{1}` is defined more than once")]
    Duplicate(&'static str, String),
    #[error("{0}")]
    Other(String),
    #[error("invalid Rust path or item: {0}")]
    Syn(#[from] syn::Error),
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{0}: {1}")]
    Io(String, #[source] io::Error),
}

/// A [`CodeGenErrorKind`] with the input file and step it was raised in.
#[derive(Error, Debug)]
pub struct CodeGenError {
    #[source]
    pub kind: Box<CodeGenErrorKind>,
    /// Step of the generator, e.g. "parsing line 12".
    pub context: Option<String>,
    pub file: Option<String>,
}

impl fmt::Display for CodeGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file.as_deref().unwrap_or("opcua-di-codegen"))?;
        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }
        write!(f, ": {}", self.kind)
    }
}

impl From<CodeGenErrorKind> for CodeGenError {
    fn from(kind: CodeGenErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
            context: None,
            file: None,
        }
    }
}

impl From<syn::Error> for CodeGenError {
    fn from(value: syn::Error) -> Self {
        CodeGenErrorKind::from(value).into()
    }
}

impl From<serde_yaml::Error> for CodeGenError {
    fn from(value: serde_yaml::Error) -> Self {
        CodeGenErrorKind::from(value).into()
    }
}

impl CodeGenError {
    pub fn io(msg: &str, e: io::Error) -> Self {
        CodeGenErrorKind::Io(msg.to_owned(), e).into()
    }

    pub fn other(msg: impl Into<String>) -> Self {
        CodeGenErrorKind::Other(msg.into()).into()
    }

    pub fn parse_int(value: impl Into<String>, error: ParseIntError) -> Self {
        CodeGenErrorKind::ParseInt(value.into(), error).into()
    }

    pub fn wrong_format(expected: impl Into<String>, found: impl Into<String>) -> Self {
        CodeGenErrorKind::WrongFormat(expected.into(), found.into()).into()
    }

    pub fn duplicate(what: &'static str, value: impl Into<String>) -> Self {
        CodeGenErrorKind::Duplicate(what, value.into()).into()
    }

    /// Record the step the error was raised in. An existing context is kept
    /// as the innermost one.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        self.context = Some(match self.context.take() {
            Some(inner) => format!("{context}, {inner}"),
            None => context,
        });
        self
    }

    /// Record the input file, unless one is already set.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file.get_or_insert_with(|| file.into());
        self
    }
}
