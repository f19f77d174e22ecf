//! Loop header rewrites.
//!
//! Range-based loops map onto direct iteration, `.items()`, or `.values()`
//! depending on the binding shape. Counted loops are folded into an
//! equivalent half-open `range(...)` with only the non-default arguments.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static EDGE_LIST_FOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for \(const vector<int>& edge : edges\) \{").unwrap());
static INT_ROW_FOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for \((?:const )?vector<int>& (\w+) : (\w+)\)").unwrap());
static EDGE_FIRST_READ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"const int u = edge\[0\];").unwrap());
static EDGE_SECOND_READ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"const int v = edge\[1\];").unwrap());
static PAIR_APPEND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\[(\w+)\]\.emplace_back\(([^,]+), ([^)]+)\);").unwrap());
static RANGE_FOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"for \((.*) : (.*)\)[ \{]*").unwrap());
static COUNTED_FOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"for \(\w+ (\w+) = ([^;]+); ([\w +-]*) (<|<=|>|>=) ([^;]+); ([^)]+)\)[ \{]*")
        .unwrap()
});
static LEN_IN_BOUND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\.(?:length|size)\(\)").unwrap());

/// The edge-list walk common to graph problems.
///
/// The fixed `edge : edges` form destructures straight into `u, v`; the two
/// element reads that always follow it are folded into the binding and
/// dropped. Typed row bindings must be handled here, before the generic
/// range-for, which would otherwise leave the element type in the binding.
pub(crate) fn rewrite_edge_list_idioms(line: &str) -> String {
    let line = EDGE_LIST_FOR.replace_all(line, "for u, v in edges:");
    let line = INT_ROW_FOR.replace_all(&line, "for $1 in $2:");
    let line = EDGE_FIRST_READ.replace_all(&line, "");
    let line = EDGE_SECOND_READ.replace_all(&line, "");
    PAIR_APPEND
        .replace_all(&line, "$1[$2].append(($3, $4))")
        .into_owned()
}

/// Range-based for loop, three sub-forms chosen from the binding text.
pub(crate) fn rewrite_range_for(line: &str) -> String {
    RANGE_FOR
        .replace_all(line, |caps: &Captures| {
            let binding = strip_binding_noise(&caps[1]);
            render_range_for(&binding, &caps[2])
        })
        .into_owned()
}

fn strip_binding_noise(binding: &str) -> String {
    binding
        .replace('&', "")
        .replace("const ", "")
        .replace("auto ", "")
        .replace("string ", "")
        .replace("int ", "")
        .replace("char ", "")
}

fn render_range_for(binding: &str, iterable: &str) -> String {
    // `[_, v]`: the key is a placeholder, walk the values only.
    if let Some(inner) = binding.strip_prefix("[_").and_then(|s| s.strip_suffix(']')) {
        if let Some((_, value)) = inner.split_once(", ") {
            return format!("for {value} in {iterable}.values():");
        }
    }
    // `[k, v]`: full key/value walk.
    if let Some(inner) = binding.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if let Some((key, value)) = inner.split_once(", ") {
            return format!("for {key}, {value} in {iterable}.items():");
        }
    }
    format!("for {binding} in {iterable}:")
}

/// Counted for loop → `range(...)` with only the non-default arguments.
pub(crate) fn rewrite_counted_for(line: &str) -> String {
    COUNTED_FOR
        .replace_all(line, |caps: &Captures| render_counted_for(caps))
        .into_owned()
}

fn render_counted_for(caps: &Captures) -> String {
    let var = &caps[1];
    let start: &str = &caps[2];
    let guard_lhs: &str = &caps[3];
    let cmp: &str = &caps[4];
    let step: &str = &caps[6];

    // The exclusive end bound: any literal addend on the guard's left side
    // shifts it down, and inclusive comparisons shift it by one.
    let mut offset: i64 = 0;
    if let Some((_, addend)) = guard_lhs.split_once(" + ") {
        if let Ok(n) = addend.trim().parse::<i64>() {
            offset -= n;
        }
    }
    match cmp {
        "<=" => offset += 1,
        ">=" => offset -= 1,
        _ => {}
    }

    let mut end = LEN_IN_BOUND.replace_all(&caps[5], "len($1)").into_owned();
    if end == "0" {
        end = offset.to_string();
    } else if offset < 0 {
        end = format!("{end} - {}", -offset);
    } else if offset > 0 {
        end = format!("{end} + {offset}");
    }

    let step_arg = if let Some((_, n)) = step.split_once(" += ") {
        format!(", {n}")
    } else if let Some((_, n)) = step.split_once(" -= ") {
        format!(", -{n}")
    } else if step.contains("--") {
        ", -1".to_string()
    } else {
        // `++i` / `i++`, and anything unrecognized, take the default step.
        String::new()
    };

    if start == "0" && step_arg.is_empty() {
        format!("for {var} in range({end}):")
    } else {
        format!("for {var} in range({start}, {end}{step_arg}):")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counted_loop() {
        assert_eq!(
            rewrite_counted_for("for (int i = 0; i < n; ++i)"),
            "for i in range(n):"
        );
    }

    #[test]
    fn descending_inclusive_loop() {
        assert_eq!(
            rewrite_counted_for("for (size_t i = n - 1; i >= 0; i -= 3)"),
            "for i in range(n - 1, -1, -3):"
        );
    }

    #[test]
    fn guard_addend_shifts_the_bound() {
        assert_eq!(
            rewrite_counted_for("for (int i = 1; i + 2 <= n; i += 2)"),
            "for i in range(1, n - 1, 2):"
        );
    }

    #[test]
    fn length_call_becomes_len_in_bound() {
        assert_eq!(
            rewrite_counted_for("for (int i = 0; i < s.length(); ++i)"),
            "for i in range(len(s)):"
        );
    }

    #[test]
    fn postfix_decrement_still_steps_backward() {
        assert_eq!(
            rewrite_counted_for("for (int i = n; i > 0; i--)"),
            "for i in range(n, 0, -1):"
        );
    }

    #[test]
    fn plain_range_for() {
        assert_eq!(
            rewrite_range_for("for (const auto& s : dfs(words, 0)) {"),
            "for s in dfs(words, 0):"
        );
    }

    #[test]
    fn destructured_range_for_walks_items() {
        assert_eq!(
            rewrite_range_for("for (const auto& [k, v] : freq)"),
            "for k, v in freq.items():"
        );
    }

    #[test]
    fn placeholder_key_walks_values() {
        assert_eq!(
            rewrite_range_for("for (const auto& [_, d] : freq)"),
            "for d in freq.values():"
        );
    }

    #[test]
    fn typed_row_binding_drops_element_type() {
        assert_eq!(
            rewrite_edge_list_idioms("for (const vector<int>& row : grid)"),
            "for row in grid:"
        );
    }

    #[test]
    fn edge_walk_destructures_and_drops_reads() {
        assert_eq!(
            rewrite_edge_list_idioms("for (const vector<int>& edge : edges) {"),
            "for u, v in edges:"
        );
        assert_eq!(rewrite_edge_list_idioms("  const int u = edge[0];"), "  ");
        assert_eq!(
            rewrite_edge_list_idioms("graph[u].emplace_back(v, vals[v]);"),
            "graph[u].append((v, vals[v]))"
        );
    }
}
