//! CLI module - Argument surface and intent dispatch
//!
//! Every invocation carries exactly one intent flag (`--save`, `--search`,
//! `--delete`, `--wipe`, `--list`, `--stats`). clap enforces that through
//! the `intent` group.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};

use crate::config::Config;
use crate::core::storage::MemoryStore;

pub mod delete;
pub mod list;
pub mod save;
pub mod search;
pub mod utils;
pub mod wipe;

/// mem - personal memory notes
///
/// Save short notes with a tag, find them again by substring.
#[derive(Parser, Debug)]
#[command(name = "mem")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("intent")
        .required(true)
        .args(["save", "search", "delete", "wipe", "list", "stats"])
))]
pub struct Cli {
    /// Save a new memory with this content
    #[arg(long, value_name = "TEXT")]
    pub save: Option<String>,

    /// Tags for --save
    #[arg(long, value_name = "TEXT", requires = "save")]
    pub tags: Option<String>,

    /// Show up to 5 memories containing TEXT, newest first
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Delete the memory with this id
    #[arg(long, value_name = "ID")]
    pub delete: Option<i64>,

    /// Delete all memories (asks first)
    #[arg(long)]
    pub wipe: bool,

    /// Show the most recent memories
    #[arg(long, value_name = "N", num_args = 0..=1)]
    pub list: Option<Option<usize>>,

    /// Show memory count and database location
    #[arg(long)]
    pub stats: bool,

    /// Database file
    #[arg(long, value_name = "PATH", env = "MEM_DATABASE")]
    pub db: Option<PathBuf>,

    /// Config file path
    #[arg(short, long, value_name = "PATH", env = "MEM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The single action requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Save {
        content: String,
        tags: Option<String>,
    },
    Search(String),
    Delete(i64),
    Wipe,
    List(Option<usize>),
    Stats,
}

impl Cli {
    /// Resolve the intent flags into one [`Intent`]
    pub fn intent(&self) -> Result<Intent> {
        if let Some(content) = &self.save {
            return Ok(Intent::Save {
                content: content.clone(),
                tags: self.tags.clone(),
            });
        }
        if let Some(query) = &self.search {
            return Ok(Intent::Search(query.clone()));
        }
        if let Some(id) = self.delete {
            return Ok(Intent::Delete(id));
        }
        if self.wipe {
            return Ok(Intent::Wipe);
        }
        if let Some(limit) = self.list {
            return Ok(Intent::List(limit));
        }
        if self.stats {
            return Ok(Intent::Stats);
        }
        bail!("Nothing to do. Use --save, --search, --delete, --wipe, --list or --stats.");
    }
}

/// Load config, prepare the store and run the requested intent
pub fn run(cli: Cli) -> Result<()> {
    let intent = cli.intent()?;
    let config = Config::load(cli.config.as_deref())?;
    let store = MemoryStore::new(config.database_path(cli.db.as_deref()));
    store.initialize()?;

    tracing::debug!(?intent, db = %store.path().display(), "dispatching");

    match intent {
        Intent::Save { content, tags } => save::run(&store, &content, tags.as_deref()),
        Intent::Search(query) => search::run(&store, &query),
        Intent::Delete(id) => delete::run(&store, id),
        Intent::Wipe => wipe::run(&store),
        Intent::List(limit) => list::run(&store, limit.unwrap_or(config.display.list_limit)),
        Intent::Stats => list::run_stats(&store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mem").chain(args.iter().copied()))
    }

    #[test]
    fn test_save_with_tags() {
        let cli = parse(&["--save", "fix login bug", "--tags", "bugs"]).unwrap();
        assert_eq!(
            cli.intent().unwrap(),
            Intent::Save {
                content: "fix login bug".to_string(),
                tags: Some("bugs".to_string()),
            }
        );
    }

    #[test]
    fn test_save_without_tags() {
        let cli = parse(&["--save", "hello world"]).unwrap();
        assert_eq!(
            cli.intent().unwrap(),
            Intent::Save {
                content: "hello world".to_string(),
                tags: None,
            }
        );
    }

    #[test]
    fn test_single_intents() {
        assert_eq!(
            parse(&["--search", "login"]).unwrap().intent().unwrap(),
            Intent::Search("login".to_string())
        );
        assert_eq!(
            parse(&["--delete", "7"]).unwrap().intent().unwrap(),
            Intent::Delete(7)
        );
        assert_eq!(parse(&["--wipe"]).unwrap().intent().unwrap(), Intent::Wipe);
        assert_eq!(parse(&["--stats"]).unwrap().intent().unwrap(), Intent::Stats);
    }

    #[test]
    fn test_list_optional_count() {
        assert_eq!(
            parse(&["--list"]).unwrap().intent().unwrap(),
            Intent::List(None)
        );
        assert_eq!(
            parse(&["--list", "3"]).unwrap().intent().unwrap(),
            Intent::List(Some(3))
        );
    }

    #[test]
    fn test_intents_are_exclusive() {
        assert!(parse(&["--save", "a", "--search", "b"]).is_err());
        assert!(parse(&["--wipe", "--delete", "1"]).is_err());
    }

    #[test]
    fn test_intent_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_tags_require_save() {
        assert!(parse(&["--search", "x", "--tags", "bugs"]).is_err());
    }

    #[test]
    fn test_delete_requires_integer() {
        assert!(parse(&["--delete", "abc"]).is_err());
    }
}
