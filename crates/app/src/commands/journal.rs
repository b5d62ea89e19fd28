//! Journal commands

use mindset_domain::{JournalDraft, JournalQuery, MindsetError, Result, SortOption, TagFilter};

use super::reward_notice;
use crate::context::AppContext;
use crate::utils::render;

pub async fn add(
    ctx: &mut AppContext,
    title: String,
    content: String,
    tags: Vec<String>,
) -> Result<String> {
    let before = ctx.session.progress();
    let draft = JournalDraft::new(title, content).with_tags(tags);

    let Some(entry) = ctx.session.save_journal(draft).await? else {
        return Ok("Nothing to save: title and content are both empty.".to_string());
    };

    let mut lines = vec![format!("Saved journal entry {}.", entry.id)];
    lines.extend(reward_notice(before, ctx.session.progress()));
    Ok(lines.join("\n"))
}

/// Edit title and/or content; unspecified fields keep their value.
pub async fn edit(
    ctx: &mut AppContext,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<String> {
    let entry = ctx
        .session
        .journal()
        .iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| MindsetError::NotFound(format!("journal entry {id}")))?;

    let mut draft = JournalDraft::from_entry(entry);
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(content) = content {
        draft.content = content;
    }

    match ctx.session.save_journal(draft).await? {
        Some(entry) => Ok(format!("Updated journal entry {}.", entry.id)),
        None => Err(MindsetError::InvalidInput(
            "an entry needs a title or content; use `journal remove` to delete it".to_string(),
        )),
    }
}

pub async fn tag(ctx: &mut AppContext, id: &str, tags: Vec<String>) -> Result<String> {
    let entry = ctx.session.update_journal_tags(id, tags).await?;
    Ok(match entry.tags() {
        [] => format!("Cleared tags on {}.", entry.id),
        tags => format!("Tagged {}: {}", entry.id, tags.join(", ")),
    })
}

pub async fn remove(ctx: &mut AppContext, id: &str) -> Result<String> {
    if ctx.session.delete_journal(id).await? {
        Ok(format!("Deleted journal entry {id}."))
    } else {
        Err(MindsetError::NotFound(format!("journal entry {id}")))
    }
}

pub fn list(
    ctx: &AppContext,
    search: Option<String>,
    tag: Option<String>,
    sort: SortOption,
) -> String {
    let query = JournalQuery {
        search_text: search,
        tag: tag.map_or(TagFilter::All, TagFilter::Tag),
        sort,
    };

    let entries = ctx.session.query_journal(&query);
    if entries.is_empty() {
        return "No journal entries match.".to_string();
    }
    entries.iter().map(render::journal_entry).collect::<Vec<_>>().join("\n\n")
}

pub fn tags(ctx: &AppContext) -> String {
    let tags = ctx.session.available_tags();
    if tags.is_empty() {
        "No tags yet.".to_string()
    } else {
        tags.join(", ")
    }
}
