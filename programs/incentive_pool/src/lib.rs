use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod instructions;
pub mod selection;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

use solana_security_txt::security_txt;

security_txt! {
    // Required fields
    name: "Incentive Pool",
    project_url: "https://github.com/incentive-pool/incentive-pool",
    contacts: "link:https://github.com/incentive-pool/incentive-pool/issues",
    policy: "https://github.com/incentive-pool/incentive-pool/blob/main/SECURITY.md",

    // Optional fields
    preferred_languages: "en",
    source_code: "https://github.com/incentive-pool/incentive-pool"
}

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod incentive_pool {
    use super::*;
    use crate::instructions::{admin, claim, select, vault};

    pub fn initialize(
        ctx: Context<Initialize>,
        admins: Vec<Pubkey>,
        mode: DistributionMode,
        num_of_targets: u32,
        ranking_bps: u16,
    ) -> Result<()> {
        admin::initialize(ctx, admins, mode, num_of_targets, ranking_bps)
    }

    pub fn set_ranking_bps(ctx: Context<SetRankingBps>, ranking_bps: u16) -> Result<()> {
        admin::set_ranking_bps(ctx, ranking_bps)
    }

    pub fn set_target_count(ctx: Context<SetTargetCount>, num_of_targets: u32) -> Result<()> {
        admin::set_target_count(ctx, num_of_targets)
    }

    pub fn select_recipients(
        ctx: Context<SelectRecipients>,
        candidates: Vec<Pubkey>,
        scores: Vec<u64>,
    ) -> Result<()> {
        select::select_recipients(ctx, candidates, scores)
    }

    pub fn init_incentive_vault(ctx: Context<InitIncentiveVault>) -> Result<()> {
        vault::init_incentive_vault(ctx)
    }

    pub fn deposit_incentive(ctx: Context<DepositIncentive>, amount: u64) -> Result<()> {
        vault::deposit_incentive(ctx, amount)
    }

    pub fn claim_incentive(ctx: Context<ClaimIncentive>) -> Result<()> {
        claim::claim_incentive(ctx)
    }
}
