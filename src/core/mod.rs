//! Core module - Business logic
//!
//! Contains the memory data structure and its SQLite store.

pub mod memory;
pub mod storage;
