//! Expression-level rewrites.
//!
//! Ternaries, membership and emptiness tests, structured bindings, the
//! standard-library call idioms, and the late permissive rewrites (generic
//! negation, length calls, leftover increment statements).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TERNARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(return|\+|=) \(?([^)]*)\)? \? (.*) : (.*);").unwrap());
static AUTO_BINDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"auto \[([^\]]*)\]").unwrap());
static NOT_CONTAINS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!(\w+)\.count\((\w+)\)").unwrap());
static CONTAINS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\.count\((\w+)\)").unwrap());
static NOT_EMPTY: Lazy<Regex> = Lazy::new(|| Regex::new(r"!(\w+)\.empty\(\)").unwrap());
static IS_EMPTY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\.empty\(\)").unwrap());
// Word boundaries keep these off look-alike names; the pre-pass has already
// turned `.erase(` into `.remove(`, which a bare `move\(` would then eat.
static MOVE_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmove\((\w+)\)").unwrap());
static TO_STRING_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bto_string\((\w+)\)").unwrap());
static STOI_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bstoi\((\w+)\)").unwrap());
static STOL_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bstol\((\w+)\)").unwrap());
static SORT_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"sort\(begin\((\w+)\), end\(\w+\)\);").unwrap());
static REVERSE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"reverse\(begin\((\w+)\), end\(\w+\)\);").unwrap());
static MIN_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*min_element\(begin\((.*)\), end\(.+\)\);").unwrap());
static MAX_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*max_element\(begin\((.*)\), end\(.+\)\);").unwrap());
static SUM_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"accumulate\(begin\((.*)\), end\(.+\), [^)]*\);").unwrap());
static NEGATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"!([^=])").unwrap());
static LEN_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\w.\[\]]+)\.(?:length|size)\(\)").unwrap());
static INCREMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+{2}([^;]+);").unwrap());
static DECREMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2}([^;]+);").unwrap());

/// Ternary assignment or return → inline conditional expression.
///
/// When the captured prefix text carries a call whose name contains an
/// arithmetic operator, the call wrapper stays around the branches.
pub(crate) fn rewrite_ternary(line: &str) -> String {
    TERNARY
        .replace_all(line, |caps: &Captures| {
            let prefix = &caps[1];
            let condition: &str = &caps[2];
            let a = &caps[3];
            let b = &caps[4];
            match condition.split_once('(') {
                Some((callee, cond)) if callee.contains('+') || callee.contains('-') => {
                    format!("{prefix} {callee}({a} if {cond} else {b})")
                }
                Some((callee, cond)) => format!("{prefix} {callee}{a} if {cond} else {b}"),
                None => format!("{prefix} {a} if {condition} else {b}"),
            }
        })
        .into_owned()
}

/// `auto [a, b]` structured-binding text → `a, b`.
pub(crate) fn rewrite_auto_binding(line: &str) -> String {
    AUTO_BINDING.replace_all(line, "$1").into_owned()
}

/// `m.count(k)` membership tests; the negated form must go first.
pub(crate) fn rewrite_membership(line: &str) -> String {
    let line = NOT_CONTAINS.replace_all(line, "$2 not in $1");
    CONTAINS.replace_all(&line, "$2 in $1").into_owned()
}

/// `.empty()` truthiness; the negated form must go first.
pub(crate) fn rewrite_emptiness(line: &str) -> String {
    let line = NOT_EMPTY.replace_all(line, "$1");
    IS_EMPTY.replace_all(&line, "not $1").into_owned()
}

/// `move`, `to_string`, `stoi`, `stol` call idioms.
pub(crate) fn rewrite_call_idioms(line: &str) -> String {
    let line = MOVE_CALL.replace_all(line, "$1");
    let line = TO_STRING_CALL.replace_all(&line, "str($1)");
    let line = STOI_CALL.replace_all(&line, "int($1)");
    STOL_CALL.replace_all(&line, "int($1)").into_owned()
}

/// Whole-range algorithm calls onto the container's own methods.
pub(crate) fn rewrite_range_algorithms(line: &str) -> String {
    let line = SORT_RANGE.replace_all(line, "$1.sort()");
    let line = REVERSE_RANGE.replace_all(&line, "$1.reverse()");
    let line = MIN_RANGE.replace_all(&line, "min($1)");
    let line = MAX_RANGE.replace_all(&line, "max($1)");
    SUM_RANGE.replace_all(&line, "sum($1)").into_owned()
}

/// Generic `!x` → `not x`, leaving `!=` alone. Runs after every rewrite
/// that consumes its own `!` prefix (membership, emptiness).
pub(crate) fn rewrite_negation(line: &str) -> String {
    NEGATION.replace_all(line, "not $1").into_owned()
}

/// Remaining `.length()` / `.size()` calls → `len(...)`.
pub(crate) fn rewrite_len_calls(line: &str) -> String {
    LEN_CALL.replace_all(line, "len($1)").into_owned()
}

/// Leftover `++x;` / `--x;` statements → compound assignment.
pub(crate) fn rewrite_step_statements(line: &str) -> String {
    let line = INCREMENT.replace_all(line, "$1 += 1");
    DECREMENT.replace_all(&line, "$1 -= 1").into_owned()
}
