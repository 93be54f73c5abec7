//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Konjure toolkit CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Combine and minify JS/CSS sources into library artifacts
    #[command(visible_alias = "c")]
    Compile {
        #[command(flatten)]
        args: CompileArgs,
    },
}

/// Compile command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct CompileArgs {
    /// Source directory to discover JS/CSS files under
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub src: PathBuf,

    /// Destination directory for output artifacts (created if missing)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dest: PathBuf,

    /// Compilation version embedded in the output header
    #[arg(short = 'v', long = "version", value_name = "version")]
    pub version: String,

    /// Minify the combined JS and CSS contents
    #[arg(short, long)]
    pub minify: bool,

    /// Max minified line length (unbounded when absent or not a number)
    #[arg(short = 'l', long = "line-break", value_name = "length")]
    pub line_break: Option<String>,

    /// Search child directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Compilation scope: js, css or all (case-insensitive)
    #[arg(value_name = "scope")]
    pub scope: Option<String>,
}
