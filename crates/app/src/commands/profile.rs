//! Focus level, interests and onboarding

use mindset_domain::{HierarchyLevel, Result};

use crate::context::AppContext;
use crate::utils::render;

pub async fn onboard(
    ctx: &mut AppContext,
    level: HierarchyLevel,
    genres: Vec<String>,
) -> Result<String> {
    ctx.session.complete_onboarding(level, genres).await?;

    let mut out = format!("Welcome to Mindset. {}", render::level(level));
    if !ctx.session.genres().is_empty() {
        out.push_str(&format!("\nYour interests: {}", ctx.session.genres().join(", ")));
    }
    Ok(out)
}

/// Show the current level, or switch to `level`.
pub async fn level(ctx: &mut AppContext, level: Option<HierarchyLevel>) -> Result<String> {
    match level {
        Some(level) => {
            ctx.session.set_level(level).await?;
            Ok(format!("Focus level set.\n{}", render::level(level)))
        }
        None => Ok(render::level(ctx.session.level())),
    }
}

/// Toggle `name`, or list the selection when no name is given.
pub async fn genre(ctx: &mut AppContext, name: Option<String>) -> Result<String> {
    let Some(name) = name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) else {
        let selected = match ctx.session.genres() {
            [] => "none".to_string(),
            genres => genres.join(", "),
        };
        let suggested = ctx.session.level().suggested_genres().join(", ");
        return Ok(format!("Selected genres: {selected}\nSuggested: {suggested}"));
    };

    if ctx.session.toggle_genre(&name).await? {
        Ok(format!("Added {name} to your interests."))
    } else {
        Ok(format!("Removed {name} from your interests."))
    }
}
