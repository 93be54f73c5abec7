//! Compile options resolved from the CLI surface.

use std::path::PathBuf;

use thiserror::Error;

use crate::asset::CompileScope;
use crate::cli::CompileArgs;
use crate::logger::LogSink;

/// Configuration-related errors. Any of these aborts the run before any
/// processing happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no such source directory `{0}`")]
    MissingSource(PathBuf),

    #[error("source `{0}` is not a directory")]
    NotADirectory(PathBuf),

    #[error("unknown compilation scope `{0}`")]
    UnknownScope(String),
}

/// Validated options for one compile run.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub src: PathBuf,
    pub dest: PathBuf,
    pub version: String,
    pub minify: bool,
    pub line_break: Option<u32>,
    pub recursive: bool,
    pub scope: CompileScope,
}

impl CompileOptions {
    /// Validate raw CLI arguments into options.
    ///
    /// An unparsable line-break length is not fatal: it is logged once and
    /// the minifier runs unbounded, matching the CLI contract.
    pub fn resolve(args: &CompileArgs, log: &dyn LogSink) -> Result<Self, ConfigError> {
        if !args.src.exists() {
            return Err(ConfigError::MissingSource(args.src.clone()));
        }
        if !args.src.is_dir() {
            return Err(ConfigError::NotADirectory(args.src.clone()));
        }

        let scope = match &args.scope {
            Some(name) => CompileScope::parse(name)
                .ok_or_else(|| ConfigError::UnknownScope(name.clone()))?,
            None => CompileScope::All,
        };

        let line_break = if args.minify {
            parse_line_break(args.line_break.as_deref(), log)
        } else {
            None
        };

        Ok(Self {
            src: args.src.clone(),
            dest: args.dest.clone(),
            version: args.version.clone(),
            minify: args.minify,
            line_break,
            recursive: args.recursive,
            scope,
        })
    }
}

fn parse_line_break(raw: Option<&str>, log: &dyn LogSink) -> Option<u32> {
    let raw = raw?;
    match raw.parse() {
        Ok(length) => Some(length),
        Err(_) => {
            log.error(
                "compile",
                &format!("could not parse line break length `{raw}`, output is unbounded"),
            );
            None
        }
    }
}
