//! Container declarations and literals.
//!
//! Every C++ container declaration becomes a plain binding to the matching
//! Python value: vectors to lists (sized, nested, or brace-initialized),
//! sets, deques, queues, stacks, heaps, and the counting/auto-default map
//! family. The permissive brace-to-bracket rewrite lives here too; the
//! pipeline must run it after every narrower brace shape.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ADJACENCY_ROWS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"vector<vector<pair<\w+, \w+>>> (\w+)\((\w+)\);").unwrap());
static MAP_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"unordered_map<(\w+), ([\w<>]+)> (\w+);").unwrap());
static STRING_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"string (\w+);").unwrap());
static VEC_2D: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"vector<vector<int>> (\w+)\((\w+), vector<int>\((\w+)\)\);").unwrap()
});
static VEC_2D_BOOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"vector<vector<bool>> (\w+)\((\w+), vector<bool>\((\w+)\)\);").unwrap()
});
static VEC_EMPTY: Lazy<Regex> = Lazy::new(|| Regex::new(r"vector<[^>]+>+ (\w+);").unwrap());
static VEC_SIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"vector<[^>]+>+ (\w+)\((.*)\);").unwrap());
static VEC_ANON: Lazy<Regex> = Lazy::new(|| Regex::new(r"vector<[^>]+>+\((.*)\)").unwrap());
static VEC_BRACED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"vector<\S+> (\w+)\{([^\}]*)\};").unwrap());
static STACK_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"stack<[^>]+>+ (\w+)").unwrap());
static SET_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"unordered_set<[^>]+> (\w+);").unwrap());
static DEQUE_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"deque<[^>]+>+ (\w+);").unwrap());
static QUEUE_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s+)queue<.*> (\w+);").unwrap());
static QUEUE_SEEDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"queue<[^>]+>+ (\w+)\{+(\w+), (\w+)\}+;").unwrap());
static BRACE_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(.*)\}").unwrap());
static MIN_HEAP_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"priority_queue<int, vector<int>, greater<>> (\w+);").unwrap());
static HEAP_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"priority_queue<.*> (\w+);").unwrap());
static HEAP_PUSH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\.push\(([^)]+)\);").unwrap());
static HEAP_POP_TOP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\.top\(\), \w+\.pop\(\);").unwrap());

/// `vector<vector<pair<int, int>>> graph(n);` → sized empty adjacency rows.
pub(crate) fn rewrite_adjacency_rows(line: &str) -> String {
    ADJACENCY_ROWS
        .replace_all(line, "$1 = [[] for _ in range($2)]")
        .into_owned()
}

/// Maps whose value type auto-defaults on first touch.
///
/// Counting values become a `Counter`; list and set values become the
/// matching `defaultdict`. Other value types are left for later passes.
pub(crate) fn rewrite_counting_map(line: &str) -> String {
    MAP_DECL
        .replace_all(line, |caps: &Captures| {
            let value_type: &str = &caps[2];
            let var = &caps[3];
            if value_type == "int" {
                format!("{var} = collections.Counter()")
            } else if value_type.starts_with("vector<") {
                format!("{var} = collections.defaultdict(list)")
            } else if value_type.starts_with("unordered_set<") {
                format!("{var} = collections.defaultdict(set)")
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// `string s;` → empty-string binding.
pub(crate) fn rewrite_string_decl(line: &str) -> String {
    STRING_DECL.replace_all(line, "$1 = ''").into_owned()
}

/// Heap declarations and the push / top-then-pop idioms.
///
/// Plain `.push(` statements all route through `heapq`; stack pushes that
/// slip through are finished by the post-pass `.push(` → `.append(` swap.
pub(crate) fn rewrite_heap_idioms(line: &str) -> String {
    let line = MIN_HEAP_DECL.replace_all(line, "$1 = []");
    let line = HEAP_DECL.replace_all(&line, "$1 = []");
    let line = HEAP_PUSH.replace_all(&line, "heapq.heappush($1, $2)");
    HEAP_POP_TOP
        .replace_all(&line, "heapq.heappop($1)")
        .into_owned()
}

/// Fixed-shape sequence, set, and queue declarations.
///
/// Order inside this pass mirrors shape width: the 2-D forms go before the
/// generic sized form that would otherwise swallow them.
pub(crate) fn rewrite_sequence_decls(line: &str) -> String {
    let line = VEC_2D.replace_all(line, "$1 = [[0] * $3 for _ in range($2)]");
    let line = VEC_2D_BOOL.replace_all(&line, "$1 = [[False] * $3 for _ in range($2)]");
    let line = VEC_EMPTY.replace_all(&line, "$1 = []");
    let line = VEC_SIZED.replace_all(&line, "$1 = [0] * $2");
    let line = VEC_ANON.replace_all(&line, "[0] * $1");
    let line = VEC_BRACED.replace_all(&line, "$1 = [$2]");
    let line = STACK_DECL.replace_all(&line, "$1 = []");
    let line = SET_DECL.replace_all(&line, "$1 = set()");
    let line = DEQUE_DECL.replace_all(&line, "$1 = deque()");
    let line = QUEUE_DECL.replace_all(&line, "${1}${2} = deque()");
    QUEUE_SEEDED
        .replace_all(&line, "$1 = deque([($2, $3)])")
        .into_owned()
}

/// Any remaining brace literal → bracket literal. Maximally permissive;
/// ordered after every narrower brace-shaped rewrite.
pub(crate) fn rewrite_brace_literal(line: &str) -> String {
    BRACE_LITERAL.replace_all(line, "[$1]").into_owned()
}
