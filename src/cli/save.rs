//! `mem --save` command
//!
//! # Usage
//! ```bash
//! mem --save "fix login bug" --tags bugs
//! mem --save "call the dentist"          # tagged "general"
//! ```

use anyhow::Result;
use colored::Colorize;

use crate::core::memory::normalize_tags;
use crate::core::storage::MemoryStore;

pub fn run(store: &MemoryStore, content: &str, tags: Option<&str>) -> Result<()> {
    let id = store.save(content, tags)?;

    println!("{} Memory saved: #{}", "✓".green(), id);
    println!("   Tags: {}", normalize_tags(tags));

    Ok(())
}
