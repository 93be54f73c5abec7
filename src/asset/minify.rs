//! Asset minification for JS and CSS buffers.
//!
//! Uses oxc for JavaScript and lightningcss for CSS. Both are wrapped behind
//! the [`Compress`] capability so the pipeline never touches a minifier
//! library directly.

use std::sync::{Arc, RwLock};

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use crate::logger::LogSink;

use super::kind::CompileKind;

/// Severity of a compressor diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single diagnostic reported by a compressor.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// 1-based (line, column) in the combined buffer, when known.
    pub position: Option<(u32, u32)>,
}

/// Outcome of one compression pass.
///
/// `code` is `None` when the compressor could not produce output; the caller
/// keeps the buffer as it stood and continues (best-effort output).
pub struct CompressResult {
    pub code: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compressor capability: semantics-preserving compaction of one text blob.
pub trait Compress {
    fn compress(&self, source: &str, max_line_len: Option<u32>) -> CompressResult;
}

/// One compressor per asset family.
pub struct CompressorSet {
    pub script: Box<dyn Compress>,
    pub style: Box<dyn Compress>,
}

impl CompressorSet {
    /// The production pair: oxc for scripts, lightningcss for styles.
    pub fn native() -> Self {
        Self {
            script: Box::new(ScriptCompressor),
            style: Box::new(StyleCompressor),
        }
    }

    pub fn for_kind(&self, kind: CompileKind) -> &dyn Compress {
        match kind {
            CompileKind::Js => self.script.as_ref(),
            CompileKind::Css => self.style.as_ref(),
        }
    }
}

/// Forward compressor diagnostics to the log sink, position-prefixed when
/// the compressor reported one.
pub fn forward_diagnostics(diagnostics: &[Diagnostic], log: &dyn LogSink) {
    for diagnostic in diagnostics {
        let message = match diagnostic.position {
            Some((line, column)) => format!("{line}:{column}: {}", diagnostic.message),
            None => diagnostic.message.clone(),
        };
        match diagnostic.severity {
            Severity::Warning => log.warn("minify", &message),
            Severity::Error => log.error("minify", &message),
        }
    }
}

// ============================================================================
// JavaScript
// ============================================================================

/// JavaScript compressor backed by oxc.
pub struct ScriptCompressor;

impl Compress for ScriptCompressor {
    fn compress(&self, source: &str, max_line_len: Option<u32>) -> CompressResult {
        let allocator = Allocator::default();
        let source_type = SourceType::mjs();
        let ret = Parser::new(&allocator, source, source_type).parse();
        if !ret.errors.is_empty() {
            // Parse errors carry byte-offset labels; resolve the first one
            // to a line/column in the combined buffer.
            let diagnostics = ret
                .errors
                .iter()
                .map(|error| Diagnostic {
                    severity: Severity::Error,
                    message: error.to_string(),
                    position: error
                        .labels
                        .as_ref()
                        .and_then(|labels| labels.first())
                        .map(|label| position_at(source, label.offset())),
                })
                .collect();
            return CompressResult {
                code: None,
                diagnostics,
            };
        }

        let mut program = ret.program;
        let options = MinifierOptions {
            mangle: Some(MangleOptions::default()),
            compress: Some(CompressOptions::smallest()),
        };
        let ret = Minifier::new(options).minify(&allocator, &mut program);
        let code = Codegen::new()
            .with_options(CodegenOptions {
                minify: true,
                comments: CommentOptions::disabled(),
                ..CodegenOptions::default()
            })
            .with_scoping(ret.scoping)
            .build(&program)
            .code;

        CompressResult {
            code: Some(apply_line_break(code, max_line_len, ';')),
            diagnostics: Vec::new(),
        }
    }
}

/// 1-based (line, column) of a byte offset.
#[allow(clippy::cast_possible_truncation)] // Buffers are far below u32::MAX
fn position_at(source: &str, offset: usize) -> (u32, u32) {
    let offset = offset.min(source.len());
    let bytes = &source.as_bytes()[..offset];
    let line = bytes.iter().filter(|byte| **byte == b'\n').count() + 1;
    let line_start = bytes
        .iter()
        .rposition(|byte| *byte == b'\n')
        .map_or(0, |index| index + 1);
    (line as u32, (offset - line_start) as u32 + 1)
}

// ============================================================================
// CSS
// ============================================================================

/// CSS compressor backed by lightningcss.
pub struct StyleCompressor;

impl Compress for StyleCompressor {
    fn compress(&self, source: &str, max_line_len: Option<u32>) -> CompressResult {
        let warnings = Arc::new(RwLock::new(Vec::new()));
        let options = ParserOptions {
            warnings: Some(warnings.clone()),
            ..ParserOptions::default()
        };

        let mut diagnostics = Vec::new();
        let code = match StyleSheet::parse(source, options) {
            Ok(stylesheet) => {
                let printed = stylesheet.to_css(PrinterOptions {
                    minify: true,
                    ..PrinterOptions::default()
                });
                match printed {
                    Ok(result) => Some(result.code),
                    Err(error) => {
                        diagnostics.push(Diagnostic {
                            severity: Severity::Error,
                            message: error.kind.to_string(),
                            position: error.loc.map(|loc| (loc.line + 1, loc.column)),
                        });
                        None
                    }
                }
            }
            Err(error) => {
                diagnostics.push(Diagnostic {
                    severity: Severity::Error,
                    message: error.kind.to_string(),
                    position: error.loc.map(|loc| (loc.line + 1, loc.column)),
                });
                None
            }
        };

        if let Ok(collected) = warnings.read() {
            for warning in collected.iter() {
                diagnostics.push(Diagnostic {
                    severity: Severity::Warning,
                    message: warning.kind.to_string(),
                    position: warning.loc.as_ref().map(|loc| (loc.line + 1, loc.column)),
                });
            }
        }

        CompressResult {
            code: code.map(|code| apply_line_break(code, max_line_len, '}')),
            diagnostics,
        }
    }
}

// ============================================================================
// Line breaking
// ============================================================================

fn apply_line_break(code: String, max_line_len: Option<u32>, break_after: char) -> String {
    match max_line_len {
        Some(max) => break_long_lines(&code, max, break_after),
        None => code,
    }
}

/// Re-break minified output: insert a newline after the first `break_after`
/// character at or past `max_len` columns.
fn break_long_lines(code: &str, max_len: u32, break_after: char) -> String {
    let mut out = String::with_capacity(code.len() + code.len() / 64);
    let mut column: u32 = 0;

    for ch in code.chars() {
        out.push(ch);
        if ch == '\n' {
            column = 0;
            continue;
        }
        column += 1;
        if column >= max_len && ch == break_after {
            out.push('\n');
            column = 0;
        }
    }

    out
}
