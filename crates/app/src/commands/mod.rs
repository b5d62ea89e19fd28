//! Command handlers
//!
//! Each handler drives the session and returns the text to print. Errors
//! bubble up as `MindsetError` so the binary can report them and exit
//! non-zero.

pub mod journal;
pub mod profile;
pub mod quotes;
pub mod rewards;

use std::time::Instant;

use mindset_domain::{Result, UserProgress};

use crate::cli::{Command, JournalCommand};
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Run one command and log its outcome.
pub async fn execute(ctx: &mut AppContext, command: Command) -> Result<String> {
    let command_name = command.name();
    let start = Instant::now();

    let result = dispatch(ctx, command).await;

    log_command_execution(command_name, start.elapsed(), result.as_ref().err());
    result
}

async fn dispatch(ctx: &mut AppContext, command: Command) -> Result<String> {
    match command {
        Command::Onboard { level, genres } => profile::onboard(ctx, level, genres).await,
        Command::Level { level } => profile::level(ctx, level).await,
        Command::Genre { name } => profile::genre(ctx, name).await,
        Command::Quote { actions } => quotes::quote(ctx, actions).await,
        Command::Favorite { id } => quotes::unfavorite(ctx, &id).await,
        Command::Favorites => Ok(quotes::favorites(ctx)),
        Command::Journal { cmd } => match cmd {
            JournalCommand::Add { title, content, tags } => {
                journal::add(ctx, title, content, tags).await
            }
            JournalCommand::Edit { id, title, content } => {
                journal::edit(ctx, &id, title, content).await
            }
            JournalCommand::Tag { id, tags } => journal::tag(ctx, &id, tags).await,
            JournalCommand::Remove { id } => journal::remove(ctx, &id).await,
            JournalCommand::List { search, tag, sort } => Ok(journal::list(ctx, search, tag, sort)),
            JournalCommand::Tags => Ok(journal::tags(ctx)),
        },
        Command::Progress => Ok(rewards::progress(ctx)),
        Command::Claim { mode, actions } => rewards::claim(ctx, mode, actions).await,
    }
}

/// Line announcing a newly unlocked reward, if `after` gained one.
fn reward_notice(before: UserProgress, after: UserProgress) -> Option<String> {
    (after.rewards_available > before.rewards_available).then(|| {
        format!(
            "Reward unlocked! You have {} available. Run `mindset claim` to open it.",
            after.rewards_available
        )
    })
}
