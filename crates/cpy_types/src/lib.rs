//! Parameter-list splitting and C++ → Python type-notation mapping.
//!
//! Both helpers are pure string functions. [`split_params`] cuts a
//! comma-separated declaration list at top-level commas only, so nested
//! generics stay intact. [`py_type`] maps one C++ type expression to its
//! Python annotation, unwrapping one generic per recursive step.

/// Split a parameter list at top-level commas.
///
/// A comma is a split point only while the running `<`/`>` depth is zero.
/// Always returns at least one item; with no top-level comma, the whole
/// input is the single item.
pub fn split_params(params: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in params.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            ',' if depth == 0 => {
                items.push(&params[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&params[start..]);

    items.into_iter().map(|item| item.trim_start()).collect()
}

/// Map a C++ type expression to its Python annotation.
///
/// Unknown expressions pass through unchanged; `int`, `bool`, and any
/// user-defined class name are already valid Python annotations.
pub fn py_type(cpp_type: &str) -> String {
    match cpp_type {
        "void" => return "None".to_string(),
        "char" => return "str".to_string(),
        "string" => return "str".to_string(),
        "double" => return "float".to_string(),
        "long" => return "int".to_string(),
        "long long" => return "int".to_string(),
        _ => {}
    }

    // deque is usable unparameterized on the Python side.
    if cpp_type.starts_with("deque<") {
        return "deque".to_string();
    }
    if let Some(inner) = generic_arg(cpp_type, "vector<") {
        return format!("List[{}]", py_type(inner));
    }
    if let Some(inner) = generic_arg(cpp_type, "unordered_set<") {
        return format!("Set[{}]", py_type(inner));
    }
    if let Some(inner) = generic_arg(cpp_type, "unordered_map<") {
        let (key, value) = split_key_value(inner);
        return format!("Dict[{}, {}]", py_type(key), py_type(&value));
    }
    if let Some(base) = cpp_type.strip_suffix('*') {
        return format!("Optional[{}]", py_type(base));
    }

    cpp_type.to_string()
}

/// The text between a wrapper prefix and the last `>` in the expression.
fn generic_arg<'a>(cpp_type: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = cpp_type.strip_prefix(prefix)?;
    let close = rest.rfind('>')?;
    Some(&rest[..close])
}

/// Split a map argument at its first top-level comma.
fn split_key_value(arg: &str) -> (&str, String) {
    let parts = split_params(arg);
    let key = parts[0];
    let value = parts[1..].join(", ");
    (key, value)
}
