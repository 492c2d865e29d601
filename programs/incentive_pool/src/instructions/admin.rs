use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, INITIAL_VERSION};
use crate::errors::IncentiveError;
use crate::state::{validate_admins, DistributionMode};
use crate::{Initialize, SetRankingBps, SetTargetCount};

pub fn initialize(
    ctx: Context<Initialize>,
    admins: Vec<Pubkey>,
    mode: DistributionMode,
    num_of_targets: u32,
    ranking_bps: u16,
) -> Result<()> {
    validate_admins(&admins)?;
    require!(
        ranking_bps <= BPS_DENOMINATOR,
        IncentiveError::InvalidRankingBps
    );

    let cfg = &mut ctx.accounts.config;
    cfg.bump = ctx.bumps.config;
    cfg.admins = admins;
    cfg.mode = mode;
    cfg.num_of_targets = num_of_targets;
    cfg.ranking_bps = ranking_bps;
    cfg.version = INITIAL_VERSION;

    let set = &mut ctx.accounts.recipient_set;
    set.bump = ctx.bumps.recipient_set;
    set.round = 0;
    set.selected_slot = 0;
    set.recipients = Vec::new();

    Ok(())
}

pub fn set_ranking_bps(ctx: Context<SetRankingBps>, ranking_bps: u16) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    cfg.require_admin(&ctx.accounts.admin.key())?;
    require!(
        ranking_bps <= BPS_DENOMINATOR,
        IncentiveError::InvalidRankingBps
    );

    cfg.ranking_bps = ranking_bps;

    Ok(())
}

pub fn set_target_count(ctx: Context<SetTargetCount>, num_of_targets: u32) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    cfg.require_admin(&ctx.accounts.admin.key())?;

    // no upper bound here; the natural cap applies at selection time
    cfg.num_of_targets = num_of_targets;

    Ok(())
}
