//! Memory - Core data structure
//!
//! A memory is a single note: free text, a tag string, and the moment it
//! was written.
//!
//! # Key Properties
//! - **id**: assigned by the store, never reused
//! - **tags**: free text, `general` when the caller gives none
//! - **content**: required, never blank
//! - **timestamp**: set once at creation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag string used when the caller supplies none
pub const DEFAULT_TAGS: &str = "general";

/// A stored note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: i64,
    pub tags: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Memory {
    /// Short preview of the content, cut at `max` characters
    pub fn preview(&self, max: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or("");
        let preview: String = first_line.chars().take(max).collect();
        if preview.len() < self.content.len() {
            format!("{}…", preview)
        } else {
            preview
        }
    }
}

/// Errors raised before a memory reaches storage
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("memory content must not be empty")]
    EmptyContent,
}

/// Reject blank content
pub fn validate_content(content: &str) -> Result<(), MemoryError> {
    if content.trim().is_empty() {
        return Err(MemoryError::EmptyContent);
    }
    Ok(())
}

/// Resolve the tag string for a new memory
///
/// Missing or blank tags fall back to [`DEFAULT_TAGS`]. Non-blank tags are
/// kept exactly as given.
pub fn normalize_tags(tags: Option<&str>) -> String {
    match tags {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => DEFAULT_TAGS.to_string(),
    }
}
