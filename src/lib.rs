//! mem - personal memory notes
//!
//! A flat log of tagged notes kept in one SQLite file under the home
//! directory.
//!
//! ## Key Concepts
//!
//! - **Memory**: free-text content, a tag string (`general` by default) and a
//!   creation timestamp
//! - **Substring search**: case-sensitive match on tags or content, newest
//!   first, at most five results
//! - **Open per call**: the store keeps only a path; each operation opens and
//!   closes its own connection

pub mod cli;
pub mod config;
pub mod core;

pub use crate::config::Config;
pub use crate::core::memory::{Memory, MemoryError, DEFAULT_TAGS};
pub use crate::core::storage::{MemoryStore, SEARCH_LIMIT};
