//! Output artifact banner generation.

use crate::utils::date::current_year;

use super::kind::CompileKind;

/// Build the comment banner prepended to an output artifact.
///
/// Pure function of (kind, version, current year); the year comes from the
/// system clock (UTC).
pub fn build_header(kind: CompileKind, version: &str) -> String {
    header_for_year(kind, version, current_year())
}

fn header_for_year(kind: CompileKind, version: &str, year: u16) -> String {
    format!(
        "/*\n\n\
         \t* Konjure UI {} Library v{}\n\
         \t* https://konjure.org/ui\n\n\
         \t* Copyright (c) {} Konjure and other contributors\n\
         \t* Released under the MIT license\n\
         \t* https://opensource.org/licenses/MIT\n\n\
         */",
        kind.library_name(),
        version,
        year
    )
}
