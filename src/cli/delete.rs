//! `mem --delete` command
//!
//! Removes one memory by id. An unknown id is reported, not treated as an
//! error.

use anyhow::Result;

use crate::core::storage::MemoryStore;

pub fn run(store: &MemoryStore, id: i64) -> Result<()> {
    if store.delete(id)? {
        println!("🗑️  Deleted memory #{}", id);
    } else {
        println!("No memory with id #{}. Nothing deleted.", id);
    }

    Ok(())
}
