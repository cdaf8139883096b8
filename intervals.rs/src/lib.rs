//! Pairwise-difference analysis: interval vectors within one set, interval
//! functions between two sets (Lewin, 2001), and their reduction to the
//! standard interval-class form.

mod pairwise;
pub use pairwise::*;

mod classes;
pub use classes::*;
