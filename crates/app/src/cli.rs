//! Command-line surface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mindset_domain::{HierarchyLevel, RewardMode, SortOption};

#[derive(Debug, Parser)]
#[command(name = "mindset")]
#[command(about = "Daily quotes for where you are, a journal, and rewards for showing up")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (JSON or TOML) used instead of path probing; environment
    /// variables still override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick a focus level and interests on first run
    Onboard {
        /// Focus level, e.g. "Safety" or "Belonging and Love"
        #[arg(long)]
        level: HierarchyLevel,

        /// Interest genre; repeat for several
        #[arg(long = "genre")]
        genres: Vec<String>,
    },

    /// Show or change the current focus level
    Level { level: Option<HierarchyLevel> },

    /// Toggle an interest genre, or list the selection when no name is given
    Genre { name: Option<String> },

    /// Generate today's quote
    Quote {
        #[command(flatten)]
        actions: QuoteActions,
    },

    /// Toggle a saved favorite off by id
    Favorite { id: String },

    /// List saved favorites
    Favorites,

    /// Manage journal entries
    Journal {
        #[command(subcommand)]
        cmd: JournalCommand,
    },

    /// Show engagement counters and the next milestones
    Progress,

    /// Spend one reward on a personalized quote
    Claim {
        /// `kind` for comfort, `helpful` for growth
        #[arg(long, default_value = "kind")]
        mode: RewardMode,

        #[command(flatten)]
        actions: QuoteActions,
    },
}

/// Follow-up actions on a shown quote
#[derive(Debug, Default, Args)]
pub struct QuoteActions {
    /// Add the quote to favorites
    #[arg(long)]
    pub save: bool,

    /// Write a journal entry about the quote
    #[arg(long, value_name = "CONTENT")]
    pub journal: Option<String>,

    /// Title for the journal entry
    #[arg(long, requires = "journal")]
    pub title: Option<String>,

    /// Tag for the journal entry; repeat for several
    #[arg(long = "tag", requires = "journal")]
    pub tags: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum JournalCommand {
    /// Write a new entry
    Add {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long)]
        content: String,

        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Edit an existing entry; the original timestamp is kept
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Replace the tags of an entry
    Tag {
        id: String,

        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Delete an entry
    Remove { id: String },

    /// List entries, optionally filtered and sorted
    List {
        /// Case-insensitive text to find in title or content
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        tag: Option<String>,

        /// date_desc, date_asc, genre or level
        #[arg(long, default_value = "date_desc")]
        sort: SortOption,
    },

    /// List every tag in use
    Tags,
}

impl Command {
    /// Stable name for command logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Onboard { .. } => "onboard",
            Self::Level { .. } => "level",
            Self::Genre { .. } => "genre",
            Self::Quote { .. } => "quote",
            Self::Favorite { .. } => "favorite",
            Self::Favorites => "favorites",
            Self::Journal { cmd } => match cmd {
                JournalCommand::Add { .. } => "journal::add",
                JournalCommand::Edit { .. } => "journal::edit",
                JournalCommand::Tag { .. } => "journal::tag",
                JournalCommand::Remove { .. } => "journal::remove",
                JournalCommand::List { .. } => "journal::list",
                JournalCommand::Tags => "journal::tags",
            },
            Self::Progress => "progress",
            Self::Claim { .. } => "claim",
        }
    }
}
