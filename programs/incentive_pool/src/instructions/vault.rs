use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::{DepositIncentive, InitIncentiveVault};

pub fn init_incentive_vault(_ctx: Context<InitIncentiveVault>) -> Result<()> {
    // Vault creation is handled by the `init` constraints in the context.
    Ok(())
}

pub fn deposit_incentive(ctx: Context<DepositIncentive>, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_ata.to_account_info(),
                to: ctx.accounts.incentive_vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    Ok(())
}
