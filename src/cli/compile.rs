//! Compile command: combines discovered sources into library artifacts.

use std::path::PathBuf;

use crate::asset::minify::{CompressorSet, forward_diagnostics};
use crate::asset::{
    CompileKind, build_header, combine_sources, discover_files, write_artifact,
};
use crate::config::CompileOptions;
use crate::logger::{LogSink, TermLogger};

use super::args::CompileArgs;

/// Entry point for `konjure compile`.
pub fn run(args: &CompileArgs) {
    let log = TermLogger::new(args.verbose);
    run_with(args, &CompressorSet::native(), &log);
}

/// Resolve options, then drive the pipeline.
///
/// Configuration errors abort the run before any processing; nothing is
/// written in that case, the destination directory included.
fn run_with(args: &CompileArgs, compressors: &CompressorSet, log: &dyn LogSink) {
    let options = match CompileOptions::resolve(args, log) {
        Ok(options) => options,
        Err(error) => {
            log.error("compile", &error.to_string());
            return;
        }
    };

    compile(&options, compressors, log);
}

/// Discover once, then process every kind the scope affects, sequentially.
fn compile(options: &CompileOptions, compressors: &CompressorSet, log: &dyn LogSink) {
    let files = discover_files(&options.src, options.recursive);
    log.info("compile", &format!("({}) total files discovered", files.len()));

    for kind in CompileKind::ALL {
        if options.scope.affects(kind) {
            compile_kind(options, &files, kind, compressors, log);
        }
    }
}

/// Process one asset family. Failures here are logged and skip only this
/// family's artifact; other families are unaffected.
fn compile_kind(
    options: &CompileOptions,
    files: &[PathBuf],
    kind: CompileKind,
    compressors: &CompressorSet,
    log: &dyn LogSink,
) {
    let (mut combined, count) = match combine_sources(files, kind) {
        Ok(result) => result,
        Err(error) => {
            log.error(
                "compile",
                &format!("failed to combine {} sources: {error}", kind.suffix()),
            );
            return;
        }
    };
    log.info(
        "compile",
        &format!("processing {count} {} files", kind.suffix()),
    );

    if options.minify {
        let result = compressors
            .for_kind(kind)
            .compress(&combined, options.line_break);
        forward_diagnostics(&result.diagnostics, log);
        match result.code {
            Some(code) => {
                combined = code;
                log.info("minify", &format!("all {} sources minified", kind.suffix()));
            }
            None => {
                // Best effort: ship the combined buffer unminified.
                log.error(
                    "minify",
                    &format!("failed to minify {} sources, keeping combined output", kind.suffix()),
                );
            }
        }
    }

    let header = build_header(kind, &options.version);
    let artifact = format!("{header}\n\n{combined}");

    match write_artifact(&options.dest, kind, &artifact) {
        Ok(path) => log.debug("compile", &format!("wrote {}", path.display())),
        Err(error) => log.error(
            "compile",
            &format!("failed to write {} output: {error}", kind.suffix()),
        ),
    }
}
