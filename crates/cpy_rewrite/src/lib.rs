//! Structural line rewriters and the fixed-order translation pipeline.
//!
//! Translates one line of restricted C++ at a time into Python:
//!
//! - `int countEven(vector<int>& nums) {` → `def countEven(self, nums: List[int]) -> int:`
//! - `for (int i = 0; i < n; ++i)`       → `for i in range(n):`
//! - `s.substr(start, end - start + 1)`  → `s[start:end]`
//!
//! There is no parser and no AST. Each rewriter recognizes one code shape
//! with a fixed capture pattern and renders its Python equivalent; a line
//! matching nothing passes through unchanged.

pub mod pipeline;

mod passes;

pub use pipeline::{translate_line, translate_source};
