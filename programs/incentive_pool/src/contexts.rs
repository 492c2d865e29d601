// programs/incentive_pool/src/contexts.rs

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::{ClaimRecord, Config, RecipientSet};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + Config::INIT_SPACE,
        seeds = [crate::CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = payer,
        space = 8 + RecipientSet::INIT_SPACE,
        seeds = [crate::RECIPIENTS_SEED, config.key().as_ref()],
        bump
    )]
    pub recipient_set: Account<'info, RecipientSet>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct SetRankingBps<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetTargetCount<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SelectRecipients<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::RECIPIENTS_SEED, config.key().as_ref()],
        bump = recipient_set.bump
    )]
    pub recipient_set: Account<'info, RecipientSet>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct InitIncentiveVault<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub incentive_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        seeds = [crate::INCENTIVE_VAULT_SEED, incentive_mint.key().as_ref()],
        bump,
        token::mint = incentive_mint,
        token::authority = config
    )]
    pub incentive_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct DepositIncentive<'info> {
    pub incentive_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [crate::INCENTIVE_VAULT_SEED, incentive_mint.key().as_ref()],
        bump
    )]
    pub incentive_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = incentive_mint,
        token::authority = funder
    )]
    pub funder_ata: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct ClaimIncentive<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [crate::RECIPIENTS_SEED, config.key().as_ref()],
        bump = recipient_set.bump
    )]
    pub recipient_set: Account<'info, RecipientSet>,

    pub incentive_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [crate::INCENTIVE_VAULT_SEED, incentive_mint.key().as_ref()],
        bump,
        token::mint = incentive_mint,
        token::authority = config
    )]
    pub incentive_vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = claimant,
        space = 8 + ClaimRecord::INIT_SPACE,
        seeds = [crate::CLAIM_SEED, incentive_mint.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    #[account(
        mut,
        token::mint = incentive_mint,
        token::authority = claimant
    )]
    pub claimant_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
