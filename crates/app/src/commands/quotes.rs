//! Daily quote and favorites

use mindset_core::MindsetSession;
use mindset_domain::{JournalDraft, Quote, Result};

use super::reward_notice;
use crate::cli::QuoteActions;
use crate::context::AppContext;
use crate::utils::render;

pub async fn quote(ctx: &mut AppContext, actions: QuoteActions) -> Result<String> {
    let session = &mut ctx.session;
    let before = session.progress();

    let mut lines = vec![session.greeting()];
    if !session.is_onboarded() {
        lines.push("Tip: run `mindset onboard` to choose your focus level.".to_string());
    }

    let quote = session.daily_quote().await;
    lines.push(render::quote(&quote));
    apply_actions(session, quote, actions, &mut lines).await?;

    lines.extend(reward_notice(before, session.progress()));
    Ok(lines.join("\n"))
}

/// Save and/or journal `quote`, appending one status line per action.
pub(super) async fn apply_actions(
    session: &mut MindsetSession,
    quote: Quote,
    actions: QuoteActions,
    lines: &mut Vec<String>,
) -> Result<()> {
    if actions.save {
        if session.is_favorite(&quote) {
            lines.push("Already in your favorites.".to_string());
        } else {
            session.toggle_favorite(quote.clone()).await?;
            lines.push(format!("Saved to favorites as {}.", quote.id));
        }
    }

    if let Some(content) = actions.journal {
        let draft = session.journal_about_quote(quote).await?;
        let draft = JournalDraft { title: actions.title.unwrap_or_default(), content, ..draft }
            .with_tags(actions.tags);

        match session.save_journal(draft).await? {
            Some(entry) => lines.push(format!("Journal entry {} saved.", entry.id)),
            None => lines.push("Nothing to journal: the entry was empty.".to_string()),
        }
    }

    Ok(())
}

/// Remove a favorite by id.
pub async fn unfavorite(ctx: &mut AppContext, id: &str) -> Result<String> {
    let quote = ctx.session.favorite_by_id(id)?.clone();
    ctx.session.toggle_favorite(quote.clone()).await?;
    Ok(format!("Removed \"{}\" from favorites.", quote.text))
}

pub fn favorites(ctx: &AppContext) -> String {
    match ctx.session.favorites() {
        [] => "No favorites yet. Save one with `mindset quote --save`.".to_string(),
        favorites => favorites.iter().map(render::favorite_line).collect::<Vec<_>>().join("\n"),
    }
}
