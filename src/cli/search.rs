//! `mem --search` command
//!
//! Case-sensitive substring search over tags and content. Shows at most
//! five memories, newest first.
//!
//! # Usage
//! ```bash
//! mem --search login
//! ```

use anyhow::Result;

use super::utils::print_memories;
use crate::core::storage::MemoryStore;

pub fn run(store: &MemoryStore, query: &str) -> Result<()> {
    let memories = store.search(query)?;

    if !memories.is_empty() {
        println!("Found {} memory(ies) for \"{}\":\n", memories.len(), query);
    }
    print_memories(&memories, true, "No memories found.");

    Ok(())
}
