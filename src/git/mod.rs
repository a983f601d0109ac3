//! Version-control operations for freshly cloned projects.

mod operations;

pub use operations::{add_all, commit, init, strip_history};
