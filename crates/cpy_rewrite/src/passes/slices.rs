//! `substr` calls to Python slices.
//!
//! C++ takes (start, count); Python slices take [start:end]. The count
//! argument is resolved textually: a bare length, the inclusive-end idiom
//! `end - start + 1`, or — when neither fits — an explicit `???` marker so
//! the boundary is flagged for manual review instead of silently guessed.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SUBSTR_TWO_ARG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\.substr\((\w+), ([^)]*)\)").unwrap());
static SUBSTR_ONE_ARG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\.substr\(([^)]*)\)").unwrap());

pub(crate) fn rewrite_substr(line: &str) -> String {
    let line = SUBSTR_TWO_ARG.replace_all(line, |caps: &Captures| {
        render_slice(&caps[1], &caps[2], &caps[3])
    });
    // The one-argument form is open-ended from the start index.
    SUBSTR_ONE_ARG.replace_all(&line, "$1[$2:]").into_owned()
}

fn render_slice(var: &str, start: &str, count: &str) -> String {
    let tokens: Vec<&str> = count.split(' ').collect();
    if tokens.len() == 1 {
        if start == "0" {
            return format!("{var}[:{count}]");
        }
        return format!("{var}[{start}:{start} + {count}]");
    }
    if tokens.len() == 5
        && tokens[1] == "-"
        && tokens[2] == start
        && tokens[3] == "+"
        && tokens[4] == "1"
    {
        return format!("{var}[{start}:{}]", tokens[0]);
    }
    format!("{var}[{start}:???]")
}
