//! Ordered literal substitution catalogs for the translation pipeline.
//!
//! Three fixed tables of plain (non-regex) string replacements:
//!
//! - [`PRE_PASS`]: token swaps that must land before the structural rewriters
//! - [`POST_PASS`]: swaps that are only safe after the structural rewriters
//! - [`CLEANUP`]: C++ tokens deleted outright at the very end
//!
//! Entry order within each table is load-bearing. The clearest case is the
//! comment marker: `//` must become `#` before the single `/` becomes the
//! floor-division `//`, or every comment would be re-doubled into garbage.

/// A literal substitution: every occurrence of `.0` becomes `.1`.
pub type Subst = (&'static str, &'static str);

/// Swaps applied before any structural rewriter sees the line.
///
/// `->` must be rewritten here: method headers rendered later contain a
/// Python `->` that no pass afterwards may touch.
pub const PRE_PASS: &[Subst] = &[
    ("class Solution {", "class Solution:"),
    ("->", "."),
    ("//", "#"),
    ("/", "//"),
    ("false", "False"),
    ("true", "True"),
    ("||", "or"),
    ("\"", "'"),
    (".push_back(", ".append("),
    (".emplace(", ".append("),
    (".pop_front(", ".popleft("),
    (".pop_back(", ".pop("),
    (".insert(", ".add("),
    (".erase(", ".remove("),
    (".front()", "[0]"),
    (".back()", "[-1]"),
    ("INT_MAX", "math.inf"),
    ("INT_MIN", "-math.inf"),
    ("nullptr", "None"),
];

/// Swaps applied after the structural rewriters.
///
/// `.top()` and `.push(` complete the stack idioms the heap rewriter left
/// alone; `&&` waits here so the pre-pass `&` stripping in parameter lists
/// never sees a half-rewritten operator.
pub const POST_PASS: &[Subst] = &[
    ("&&", "and"),
    ("1'000'000'007", "1_000_000_007"),
    (".top()", "[-1]"),
    (".push(", ".append("),
];

/// Tokens deleted unconditionally at the end of the pipeline.
///
/// Runs last so structural rewriters still see the semicolons and braces
/// their patterns anchor on.
pub const CLEANUP: &[&str] = &[
    "const ",
    "constexpr ",
    "string ",
    "string& ",
    "long ",
    "int ",
    "bool ",
    "char ",
    "++",
    "--",
    ";",
    "}",
    "{",
];

/// Access-modifier labels whose whole line is dropped from the output.
pub const ACCESS_MODIFIERS: &[&str] = &["public:", "private:"];

/// Apply a substitution table to a line, in table order.
pub fn apply(line: &str, table: &[Subst]) -> String {
    table
        .iter()
        .fold(line.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Delete every occurrence of each token, in table order.
pub fn strip_tokens(line: &str, tokens: &[&str]) -> String {
    tokens
        .iter()
        .fold(line.to_string(), |acc, tok| acc.replace(tok, ""))
}

/// True if the line carries an access-modifier label and should be dropped.
pub fn is_access_modifier(line: &str) -> bool {
    ACCESS_MODIFIERS.iter().any(|m| line.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_marker_swapped_before_division() {
        assert_eq!(apply("// note", PRE_PASS), "# note");
        assert_eq!(apply("a / b", PRE_PASS), "a // b");
    }

    #[test]
    fn division_inside_comment_text_still_doubles() {
        // The marker itself is protected; slashes in the comment body are not.
        assert_eq!(apply("// a / b", PRE_PASS), "# a // b");
    }

    #[test]
    fn boolean_literals_and_null() {
        assert_eq!(apply("return true;", PRE_PASS), "return True;");
        assert_eq!(apply("node = nullptr;", PRE_PASS), "node = None;");
    }

    #[test]
    fn container_method_renames() {
        assert_eq!(apply("v.push_back(x);", PRE_PASS), "v.append(x);");
        assert_eq!(apply("q.pop_front();", PRE_PASS), "q.popleft();");
        assert_eq!(apply("s.front()", PRE_PASS), "s[0]");
    }

    #[test]
    fn post_pass_completes_stack_idioms() {
        assert_eq!(apply("st.top()", POST_PASS), "st[-1]");
        assert_eq!(apply("st.push(x)", POST_PASS), "st.append(x)");
        assert_eq!(apply("a && b", POST_PASS), "a and b");
    }

    #[test]
    fn big_modulus_separator_style() {
        assert_eq!(apply("kMod = 1'000'000'007", POST_PASS), "kMod = 1_000_000_007");
    }

    #[test]
    fn cleanup_deletes_leftover_tokens() {
        assert_eq!(strip_tokens("int x = 0;", CLEANUP), "x = 0");
        assert_eq!(strip_tokens("  }", CLEANUP), "  ");
        assert_eq!(strip_tokens("const string s = t", CLEANUP), "s = t");
    }

    #[test]
    fn access_modifier_lines_detected() {
        assert!(is_access_modifier(" public:"));
        assert!(is_access_modifier("private:"));
        assert!(!is_access_modifier("int public_count = 0;"));
    }
}
