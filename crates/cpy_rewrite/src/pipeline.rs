//! The per-line translation pipeline.
//!
//! Four stages in fixed order: pre-pass literal swaps, structural
//! rewriters, post-pass literal swaps, token cleanup. Each line is
//! translated independently; there is no cross-line state and no retry.
//!
//! Stage and rewriter order is a hard invariant. Several rewriters only
//! work because an earlier one has already normalized their input, and the
//! permissive late rewrites (generic brace literal, generic negation) would
//! consume the narrower shapes if they ran any earlier.

use crate::passes::{containers, control, expressions, loops, signatures, slices};

type Rewrite = fn(&str) -> String;

/// Structural rewriters in application order.
const STRUCTURAL: &[Rewrite] = &[
    containers::rewrite_adjacency_rows,
    signatures::rewrite_initializer_constructor,
    signatures::rewrite_constructor,
    signatures::rewrite_method,
    loops::rewrite_edge_list_idioms,
    loops::rewrite_range_for,
    loops::rewrite_counted_for,
    slices::rewrite_substr,
    signatures::rewrite_object_construction,
    expressions::rewrite_ternary,
    containers::rewrite_counting_map,
    expressions::rewrite_auto_binding,
    signatures::rewrite_class_header,
    containers::rewrite_string_decl,
    containers::rewrite_heap_idioms,
    expressions::rewrite_range_algorithms,
    expressions::rewrite_membership,
    expressions::rewrite_emptiness,
    expressions::rewrite_call_idioms,
    containers::rewrite_sequence_decls,
    containers::rewrite_brace_literal,
    expressions::rewrite_negation,
    expressions::rewrite_len_calls,
    control::rewrite_headers,
    expressions::rewrite_step_statements,
];

/// Translate one line of C++ into Python.
///
/// Returns `None` for lines that vanish entirely (access-modifier labels);
/// every other line comes back, translated or untouched.
pub fn translate_line(line: &str) -> Option<String> {
    if cpy_rules::is_access_modifier(line) {
        return None;
    }

    let mut line = cpy_rules::apply(line, cpy_rules::PRE_PASS);
    for rewrite in STRUCTURAL {
        line = rewrite(&line);
    }
    line = cpy_rules::apply(&line, cpy_rules::POST_PASS);
    line = cpy_rules::strip_tokens(&line, cpy_rules::CLEANUP);

    Some(line.trim_end().to_string())
}

/// Translate a whole source buffer, preserving line order.
pub fn translate_source(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        if let Some(translated) = translate_line(line) {
            out.push_str(&translated);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(input: &str) -> String {
        translate_line(input).expect("line should not be dropped")
    }

    #[test]
    fn access_modifier_lines_vanish() {
        assert_eq!(translate_line(" public:"), None);
        assert_eq!(translate_line(" private:"), None);
    }

    #[test]
    fn counted_loops_end_to_end() {
        assert_eq!(line("for (int i = 0; i < n; ++i)"), "for i in range(n):");
        assert_eq!(
            line("for (size_t i = n - 1; i >= 0; i -= 3)"),
            "for i in range(n - 1, -1, -3):"
        );
        assert_eq!(
            line("for (int i = 1; i + 2 <= n; i += 2)"),
            "for i in range(1, n - 1, 2):"
        );
    }

    #[test]
    fn substr_end_to_end() {
        assert_eq!(line("s.substr(start, end - start + 1)"), "s[start:end]");
        assert_eq!(line("s.substr(0, k)"), "s[:k]");
        assert_eq!(line("s.substr(start)"), "s[start:]");
    }

    #[test]
    fn ternary_end_to_end() {
        assert_eq!(line("return (cond) ? a : b;"), "return a if cond else b");
    }

    #[test]
    fn method_header_keeps_python_arrow() {
        // The `->` swap is a pre-pass rule precisely so the rendered
        // Python arrow survives.
        assert_eq!(
            line("  int countEven(vector<int>& nums) {"),
            "  def countEven(self, nums: List[int]) -> int:"
        );
    }

    #[test]
    fn pointer_access_becomes_attribute_access() {
        assert_eq!(line("node->next = head;"), "node.next = head");
    }

    #[test]
    fn comment_marker_survives_division_swap() {
        assert_eq!(line("// dp over prefix sums"), "# dp over prefix sums");
        assert_eq!(line("int mid = (l + r) / 2;"), "mid = (l + r) // 2");
    }

    #[test]
    fn cleanup_runs_after_structural_matching() {
        // The semicolon must still be present when the vector rewriter
        // matches, and gone afterward.
        assert_eq!(line("vector<int> A;"), "A = []");
        assert_eq!(line("stack<int> st;"), "st = []");
    }

    #[test]
    fn brace_only_lines_become_blank() {
        assert_eq!(line("  }"), "");
        assert_eq!(line("};"), "");
    }

    #[test]
    fn stack_top_and_push_complete_in_post_pass() {
        assert_eq!(line("cur = st.top();"), "cur = st[-1]");
        assert_eq!(line("st.push_back(x);"), "st.append(x)");
    }

    #[test]
    fn heap_push_beats_post_pass_append() {
        assert_eq!(line("minHeap.push(val);"), "heapq.heappush(minHeap, val)");
    }

    #[test]
    fn logical_operators() {
        assert_eq!(line("if (a || b && !c)"), "if a or b and not c:");
    }

    #[test]
    fn while_with_emptiness_test() {
        assert_eq!(line("  while (!q.empty()) {"), "  while q:");
    }

    #[test]
    fn quotes_and_big_modulus() {
        assert_eq!(line("ans += \"x\";"), "ans += 'x'");
        assert_eq!(line("x %= 1'000'000'007;"), "x %= 1_000_000_007");
    }

    #[test]
    fn unsupported_lines_pass_through_minus_cleanup() {
        assert_eq!(line("goto retry"), "goto retry");
    }

    #[test]
    fn one_method_class_translates_line_for_line() {
        let cpp = "\
class Solution {
 public:
  int countEven(vector<int>& nums) {
    int cnt = 0;
    for (int i = 0; i < nums.size(); ++i) {
      if (nums[i] % 2 == 0) {
        ++cnt;
      } else {
        --cnt;
      }
    }
    return cnt;
  }
};
";
        // Closing-brace lines survive as blank lines; only access-modifier
        // lines disappear outright.
        let expected = "\
class Solution:
  def countEven(self, nums: List[int]) -> int:
    cnt = 0
    for i in range(len(nums)):
      if nums[i] % 2 == 0:
        cnt += 1
      else:
        cnt -= 1


    return cnt


";
        assert_eq!(translate_source(cpp), expected);
    }

    #[test]
    fn translated_class_has_no_cpp_punctuation() {
        let out = translate_source("class Solution {\n public:\n  bool f(int n) {\n    return (n > 0) ? true : false;\n  }\n};\n");
        for token in [";", "{", "}", "&&", "||"] {
            assert!(!out.contains(token), "leftover {token:?} in {out:?}");
        }
    }
}
