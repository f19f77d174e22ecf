//! Class and function signature rewrites.
//!
//! - `MyClass(const vector<int>& v) {` → `def __init__(self, v: List[int]):`
//! - `void myFunc(string& s, bool b) {` → `def myFunc(self, s: str, b: bool) -> None:`
//! - `UF uf(m * n);` → `uf = UF(m * n)`
//! - `class UnionFind {` → `class UnionFind:`

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use cpy_types::{py_type, split_params};

static INITIALIZER_CTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\w+)\((.*)\) : (.*) \{?").unwrap());
static PLAIN_CTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)(\w+)\((.*)\) \{").unwrap());
static METHOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\w<>*]+) (\w+)\((.*)\) \{").unwrap());
static OBJECT_CTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]\w*) (\w+)\((.*)\);").unwrap());
static CLASS_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"class (\w+) \{").unwrap());

/// Render a C++ parameter list as annotated Python parameters.
fn py_params(cpp_params: &str) -> String {
    split_params(cpp_params)
        .iter()
        .map(|param| {
            let cleaned = strip_qualifiers(param);
            // The variable name is whatever follows the last space; the rest
            // is the type expression.
            if let Some(i) = cleaned.rfind(' ') {
                let var = &cleaned[i + 1..];
                let ty = py_type(cleaned[..i].trim());
                format!("{var}: {ty}")
            } else {
                cleaned
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn strip_qualifiers(param: &str) -> String {
    param
        .replace('&', "")
        .replace("const ", "")
        .replace("auto ", "")
}

/// Constructor with a member-initializer list.
///
/// Renders the `__init__` header and splices the captured initializer text
/// after an indented `self.` opener on the next line. The splice is textual:
/// it is only right for the single-member form this tool targets, and the
/// member call is left for the line's remaining rewrites to reshape.
pub(crate) fn rewrite_initializer_constructor(line: &str) -> String {
    INITIALIZER_CTOR
        .replace_all(line, |caps: &Captures| {
            let lead = &caps[1];
            let params: &str = &caps[3];
            let members = &caps[4];
            if params.is_empty() {
                format!("{lead}def __init__(self):\n{lead}  self.")
            } else {
                format!(
                    "{lead}def __init__(self, {}):\n{lead}  self.{members}",
                    py_params(params)
                )
            }
        })
        .into_owned()
}

/// Constructor without an initializer list; the body follows on later lines.
pub(crate) fn rewrite_constructor(line: &str) -> String {
    PLAIN_CTOR
        .replace_all(line, |caps: &Captures| {
            let lead = &caps[1];
            let params: &str = &caps[3];
            if params.is_empty() {
                format!("{lead}def __init__(self):")
            } else {
                format!("{lead}def __init__(self, {}):", py_params(params))
            }
        })
        .into_owned()
}

/// Typed method signature, return type and parameters both mapped.
pub(crate) fn rewrite_method(line: &str) -> String {
    METHOD
        .replace_all(line, |caps: &Captures| {
            let ret = py_type(&caps[1]);
            let name = &caps[2];
            let params: &str = &caps[3];
            if params.is_empty() {
                format!("def {name}(self) -> {ret}:")
            } else {
                format!("def {name}(self, {}) -> {ret}:", py_params(params))
            }
        })
        .into_owned()
}

/// `UF uf(m * n);` → `uf = UF(m * n)` for uppercase-named classes.
pub(crate) fn rewrite_object_construction(line: &str) -> String {
    OBJECT_CTOR.replace_all(line, "$2 = $1($3)").into_owned()
}

/// Any class header the pre-pass table did not already cover.
pub(crate) fn rewrite_class_header(line: &str) -> String {
    CLASS_HEADER.replace_all(line, "class $1:").into_owned()
}
