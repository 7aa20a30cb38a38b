//! `mem --wipe` command
//!
//! Deletes every memory after an interactive `[y/N]` prompt. Anything other
//! than `y` or `yes` cancels.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::core::storage::MemoryStore;

pub fn run(store: &MemoryStore) -> Result<()> {
    let stdin = io::stdin();
    let result = store.wipe_all(|total| {
        if total == 0 {
            return Ok(false);
        }
        confirm(total, &mut stdin.lock())
    })?;

    match result {
        Some(deleted) => println!("🗑️  Deleted {} memory(ies).", deleted),
        None if store.count()? == 0 => println!("Nothing to wipe."),
        None => println!("Cancelled."),
    }

    Ok(())
}

/// Ask before deleting `total` memories
fn confirm(total: usize, input: &mut impl BufRead) -> Result<bool> {
    print!("Delete all {} memories? [y/N] ", total);
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("Y"));
        assert!(is_yes(" yes "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn test_confirm_reads_answer() -> Result<()> {
        assert!(confirm(3, &mut "y\n".as_bytes())?);
        assert!(!confirm(3, &mut "no\n".as_bytes())?);
        // EOF counts as a refusal
        assert!(!confirm(3, &mut "".as_bytes())?);
        Ok(())
    }
}
