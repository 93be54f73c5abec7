//! Source concatenation by asset kind.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use super::kind::CompileKind;

/// Concatenate every discovered entry whose file name ends with the kind's
/// suffix, in discovery order.
///
/// Each source line is re-terminated with `\n`, so a file lacking a trailing
/// newline still gets one in the combined buffer. Returns the buffer and the
/// number of files concatenated.
///
/// Any read error aborts the whole combine for this kind; the caller decides
/// whether other kinds proceed.
pub fn combine_sources(files: &[PathBuf], kind: CompileKind) -> Result<(String, usize)> {
    let mut combined = String::new();
    let mut count = 0;

    for file in files {
        let matches = file
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(kind.suffix()));
        if !matches {
            continue;
        }

        let text = fs::read_to_string(file)?;
        for line in text.lines() {
            combined.push_str(line);
            combined.push('\n');
        }
        count += 1;
    }

    Ok((combined, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_combine_filters_by_suffix() {
        let dir = TempDir::new().unwrap();
        let js = dir.path().join("a.js");
        let css = dir.path().join("b.css");
        fs::write(&js, "var a = 1;").unwrap();
        fs::write(&css, "body { color: red; }").unwrap();

        let files = vec![js, css];

        let (buffer, count) = combine_sources(&files, CompileKind::Js).unwrap();
        assert_eq!(count, 1);
        assert_eq!(buffer, "var a = 1;\n");

        let (buffer, count) = combine_sources(&files, CompileKind::Css).unwrap();
        assert_eq!(count, 1);
        assert_eq!(buffer, "body { color: red; }\n");
    }

    #[test]
    fn test_combine_preserves_input_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.js");
        let second = dir.path().join("second.js");
        fs::write(&first, "var x = 1;").unwrap();
        fs::write(&second, "var y = 2;").unwrap();

        let (buffer, count) = combine_sources(&[first, second], CompileKind::Js).unwrap();
        assert_eq!(count, 2);
        assert_eq!(buffer, "var x = 1;\nvar y = 2;\n");
    }

    #[test]
    fn test_combine_terminates_final_line() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("no-trailing.js");
        fs::write(&file, "var a = 1;\nvar b = 2;").unwrap();

        let (buffer, _) = combine_sources(&[file], CompileKind::Js).unwrap();
        assert_eq!(buffer, "var a = 1;\nvar b = 2;\n");
    }

    #[test]
    fn test_combine_suffix_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let upper = dir.path().join("SHOUT.JS");
        fs::write(&upper, "var loud;").unwrap();

        let (buffer, count) = combine_sources(&[upper], CompileKind::Js).unwrap();
        assert_eq!(count, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_combine_empty_set() {
        let (buffer, count) = combine_sources(&[], CompileKind::Css).unwrap();
        assert_eq!(count, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_combine_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let ghost = dir.path().join("ghost.js");

        assert!(combine_sources(&[ghost], CompileKind::Js).is_err());
    }
}
