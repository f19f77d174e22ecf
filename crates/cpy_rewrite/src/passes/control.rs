//! `if` / `else if` / `else` / `while` header rewrites.
//!
//! These run late: by the time a header is rewritten, its condition has
//! already been through the membership, emptiness, and negation passes.

use once_cell::sync::Lazy;
use regex::Regex;

static IF_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^\s*)if \((.*)\)[ \{]*").unwrap());
static ELIF_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\} )?else if \((.*)\)[ \{]*$").unwrap());
static ELSE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)\}?\s?else(?:\s\{)?").unwrap());
static WHILE_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"while \((.*)\)").unwrap());

/// Rewrite one control header per shape, `else if` before `else` so the
/// bare-`else` pattern never sees a half-rewritten `elif`.
pub(crate) fn rewrite_headers(line: &str) -> String {
    let line = IF_HEADER.replace_all(line, "${1}if $2:");
    let line = ELIF_HEADER.replace_all(&line, "elif $2:");
    let line = ELSE_HEADER.replace_all(&line, "${1}else:");
    WHILE_HEADER.replace_all(&line, "while $1:").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn if_header_keeps_indent() {
        assert_eq!(rewrite_headers("      if (a > b) {"), "      if a > b:");
        assert_eq!(rewrite_headers("  if (cond)"), "  if cond:");
    }

    #[test]
    fn else_if_both_styles() {
        assert_eq!(rewrite_headers("    } else if (x == 0) {"), "    elif x == 0:");
        assert_eq!(rewrite_headers("    else if (x == 0)"), "    elif x == 0:");
    }

    #[test]
    fn else_header() {
        assert_eq!(rewrite_headers("    } else {"), "    else:");
        assert_eq!(rewrite_headers("    else"), "    else:");
    }

    #[test]
    fn while_header() {
        // The stray brace is the cleanup stage's job, not this pass's.
        assert_eq!(rewrite_headers("  while (l < r) {"), "  while l < r: {");
    }

    #[test]
    fn unrelated_lines_untouched() {
        assert_eq!(rewrite_headers("cnt += 1"), "cnt += 1");
    }
}
