//! Size accounting and file utilities shared by the health coach crates

mod io;
mod paths;
mod size;

pub use io::{atomic_write, read_json, write_json};
pub use paths::Paths;
pub use size::{estimate_size, estimate_size_of, word_count};
