//! CLI utility functions
//!
//! Output helpers shared by the search and list commands.

use colored::Colorize;

use crate::core::memory::Memory;

/// Print one memory as a header line plus indented content
pub fn print_memory(memory: &Memory, full: bool) {
    println!(
        "{} {} {}",
        format!("#{}", memory.id).bold(),
        memory
            .timestamp
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .dimmed(),
        format!("[{}]", memory.tags).cyan()
    );

    if full {
        for line in memory.content.lines() {
            println!("   {}", line);
        }
    } else {
        println!("   {}", memory.preview(80));
    }
}

/// Print a list of memories, or `empty_message` when there are none
pub fn print_memories(memories: &[Memory], full: bool, empty_message: &str) {
    if memories.is_empty() {
        println!("{}", empty_message);
        return;
    }

    for memory in memories {
        print_memory(memory, full);
        println!();
    }
}
