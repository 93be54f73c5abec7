//! Asset kind and compilation scope definitions.

/// Kind of compiled asset family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileKind {
    /// JavaScript sources (`.js`).
    Js,
    /// Stylesheet sources (`.css`).
    Css,
}

impl CompileKind {
    /// Every kind the compiler knows about, in processing order.
    pub const ALL: [Self; 2] = [Self::Js, Self::Css];

    /// File name suffix matched during concatenation.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Js => ".js",
            Self::Css => ".css",
        }
    }

    /// Human-readable library name used in the output header.
    pub const fn library_name(self) -> &'static str {
        match self {
            Self::Js => "JS",
            Self::Css => "CSS",
        }
    }
}

/// Which asset families a single invocation produces output for.
///
/// Selected once from the positional CLI argument, defaults to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompileScope {
    Js,
    Css,
    #[default]
    All,
}

impl CompileScope {
    /// Parse a scope name, case-insensitively. `None` for unrecognized names.
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("js") {
            Some(Self::Js)
        } else if name.eq_ignore_ascii_case("css") {
            Some(Self::Css)
        } else if name.eq_ignore_ascii_case("all") {
            Some(Self::All)
        } else {
            None
        }
    }

    /// Whether this scope covers the given kind.
    pub const fn affects(self, kind: CompileKind) -> bool {
        match self {
            Self::All => true,
            Self::Js => matches!(kind, CompileKind::Js),
            Self::Css => matches!(kind, CompileKind::Css),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_parse_case_insensitive() {
        assert_eq!(CompileScope::parse("js"), Some(CompileScope::Js));
        assert_eq!(CompileScope::parse("JS"), Some(CompileScope::Js));
        assert_eq!(CompileScope::parse("Css"), Some(CompileScope::Css));
        assert_eq!(CompileScope::parse("ALL"), Some(CompileScope::All));
    }

    #[test]
    fn test_scope_parse_unknown() {
        assert_eq!(CompileScope::parse("html"), None);
        assert_eq!(CompileScope::parse(""), None);
        assert_eq!(CompileScope::parse("js "), None);
    }

    #[test]
    fn test_scope_affects() {
        assert!(CompileScope::All.affects(CompileKind::Js));
        assert!(CompileScope::All.affects(CompileKind::Css));
        assert!(CompileScope::Js.affects(CompileKind::Js));
        assert!(!CompileScope::Js.affects(CompileKind::Css));
        assert!(CompileScope::Css.affects(CompileKind::Css));
        assert!(!CompileScope::Css.affects(CompileKind::Js));
    }

    #[test]
    fn test_kind_suffix() {
        assert_eq!(CompileKind::Js.suffix(), ".js");
        assert_eq!(CompileKind::Css.suffix(), ".css");
    }
}
