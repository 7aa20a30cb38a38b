//! `mem --list` and `mem --stats` commands

use anyhow::Result;

use super::utils::print_memories;
use crate::core::storage::MemoryStore;

/// Show the `limit` most recent memories
pub fn run(store: &MemoryStore, limit: usize) -> Result<()> {
    let memories = store.recent(limit)?;
    print_memories(&memories, false, "No memories yet.");
    Ok(())
}

/// Show the memory count and database location
pub fn run_stats(store: &MemoryStore) -> Result<()> {
    let total = store.count()?;

    println!("📊 Memories: {}", total);
    println!("📁 Database: {}", store.path().display());

    Ok(())
}
