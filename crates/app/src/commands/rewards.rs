//! Progress and rewards

use mindset_domain::{Result, RewardMode};

use super::quotes::apply_actions;
use super::reward_notice;
use crate::cli::QuoteActions;
use crate::context::AppContext;
use crate::utils::render;

pub fn progress(ctx: &AppContext) -> String {
    let milestones = &ctx.session.options().milestones;
    render::progress(
        &ctx.session.progress(),
        milestones.journals_required(),
        milestones.saves_required(),
    )
}

/// Spend a reward, then save or journal the reward quote like a daily one.
pub async fn claim(
    ctx: &mut AppContext,
    mode: RewardMode,
    actions: QuoteActions,
) -> Result<String> {
    let session = &mut ctx.session;
    let Some(quote) = session.claim_reward(mode).await? else {
        return Ok("No rewards available yet. Keep journaling and saving quotes.".to_string());
    };
    let before = session.progress();

    let mut lines = vec![format!(
        "A {} word from your mentor ({}):\n{}",
        mode,
        mode.category(),
        render::quote(&quote)
    )];
    apply_actions(session, quote, actions, &mut lines).await?;

    lines.extend(reward_notice(before, session.progress()));
    Ok(lines.join("\n"))
}
