use anchor_lang::prelude::*;

use crate::constants::{MAX_CANDIDATES, MAX_RECIPIENTS};
use crate::errors::IncentiveError;
use crate::selection;
use crate::utils::HashChainDraw;
use crate::SelectRecipients;

/// Runs one selection round and replaces the stored recipient set
/// wholesale. Not idempotent under Random/Mixed modes: every run consumes
/// fresh draws, so re-running with identical inputs is a new outcome.
pub fn select_recipients(
    ctx: Context<SelectRecipients>,
    candidates: Vec<Pubkey>,
    scores: Vec<u64>,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    cfg.require_admin(&ctx.accounts.admin.key())?;

    require!(
        candidates.len() == scores.len(),
        IncentiveError::ScoreLengthMismatch
    );
    require!(
        candidates.len() <= MAX_CANDIDATES,
        IncentiveError::TooManyCandidates
    );

    let k = (cfg.num_of_targets as usize).min(candidates.len());
    require!(k <= MAX_RECIPIENTS, IncentiveError::TooManyRecipients);

    let set = &mut ctx.accounts.recipient_set;
    let clock = Clock::get()?;
    let next_round = set
        .round
        .checked_add(1)
        .ok_or(IncentiveError::MathOverflow)?;

    let mut draws = HashChainDraw::new(
        clock.slot,
        clock.unix_timestamp,
        next_round,
        &cfg.key(),
    );

    let recipients = selection::select_recipients(
        cfg.mode,
        cfg.num_of_targets,
        cfg.ranking_bps,
        &candidates,
        &scores,
        &mut draws,
    )?;

    msg!(
        "round {}: selected {} of {} candidates",
        next_round,
        recipients.len(),
        candidates.len()
    );

    set.recipients = recipients;
    set.round = next_round;
    set.selected_slot = clock.slot;

    Ok(())
}
