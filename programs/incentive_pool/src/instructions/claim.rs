use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::errors::IncentiveError;
use crate::state::RecipientSet;
use crate::ClaimIncentive;

/// Claim guard ladder, ordered per the claim contract. Returns the
/// claimable share: an equal floor split of the current vault balance
/// across the current recipient count, so a sole recipient takes the
/// entire balance.
pub fn validate_claim(
    mint: &Pubkey,
    set: &RecipientSet,
    claimant: &Pubkey,
    already_claimed: bool,
    vault_balance: u64,
) -> Result<u64> {
    require!(*mint != Pubkey::default(), IncentiveError::InvalidToken);
    require!(set.is_recipient(claimant), IncentiveError::NotSelected);
    require!(!already_claimed, IncentiveError::AlreadyClaimed);
    require!(vault_balance > 0, IncentiveError::NothingToClaim);

    // divisor is nonzero: the claimant is a member
    let share = vault_balance
        .checked_div(set.recipients.len() as u64)
        .ok_or(IncentiveError::MathOverflow)?;
    require!(share > 0, IncentiveError::NothingToClaim);

    Ok(share)
}

/// One-shot withdrawal of the caller's incentive share for a given mint.
///
/// The claim flag is keyed by (mint, claimant) and never reset, so an
/// identity that claimed in an earlier round stays blocked for that mint
/// even after re-selection.
pub fn claim_incentive(ctx: Context<ClaimIncentive>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let claimant = ctx.accounts.claimant.key();

    let share = validate_claim(
        &ctx.accounts.incentive_mint.key(),
        &ctx.accounts.recipient_set,
        &claimant,
        ctx.accounts.claim_record.claimed,
        ctx.accounts.incentive_vault.amount,
    )?;

    let signer_seeds: &[&[&[u8]]] = &[&[crate::CONFIG_SEED, &[cfg.bump]]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.incentive_vault.to_account_info(),
                to: ctx.accounts.claimant_ata.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        share,
    )?;

    let record = &mut ctx.accounts.claim_record;
    record.bump = ctx.bumps.claim_record;
    record.mint = ctx.accounts.incentive_mint.key();
    record.claimant = claimant;
    record.claimed = true;
    record.claimed_slot = Clock::get()?.slot;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient_set(recipients: Vec<Pubkey>) -> RecipientSet {
        RecipientSet {
            bump: 255,
            round: 1,
            selected_slot: 100,
            recipients,
        }
    }

    #[test]
    fn sole_recipient_claims_the_entire_balance() {
        let mint = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();
        let set = recipient_set(vec![claimant]);

        let share = validate_claim(&mint, &set, &claimant, false, 5_000).unwrap();
        assert_eq!(share, 5_000);
    }

    #[test]
    fn balance_splits_equally_across_recipients() {
        let mint = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();
        let set = recipient_set(vec![Pubkey::new_unique(), claimant, Pubkey::new_unique()]);

        let share = validate_claim(&mint, &set, &claimant, false, 1_000).unwrap();
        assert_eq!(share, 333);
    }

    #[test]
    fn default_mint_is_rejected() {
        let claimant = Pubkey::new_unique();
        let set = recipient_set(vec![claimant]);

        let res = validate_claim(&Pubkey::default(), &set, &claimant, false, 100);
        assert_eq!(res.unwrap_err(), IncentiveError::InvalidToken.into());
    }

    #[test]
    fn non_recipient_cannot_claim() {
        let mint = Pubkey::new_unique();
        let set = recipient_set(vec![Pubkey::new_unique()]);

        let res = validate_claim(&mint, &set, &Pubkey::new_unique(), false, 100);
        assert_eq!(res.unwrap_err(), IncentiveError::NotSelected.into());
    }

    #[test]
    fn second_claim_is_rejected() {
        let mint = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();
        let set = recipient_set(vec![claimant]);

        let res = validate_claim(&mint, &set, &claimant, true, 100);
        assert_eq!(res.unwrap_err(), IncentiveError::AlreadyClaimed.into());
    }

    #[test]
    fn zero_balance_is_rejected() {
        let mint = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();
        let set = recipient_set(vec![claimant]);

        let res = validate_claim(&mint, &set, &claimant, false, 0);
        assert_eq!(res.unwrap_err(), IncentiveError::NothingToClaim.into());
    }

    #[test]
    fn share_that_floors_to_zero_is_rejected() {
        let mint = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();
        let mut recipients = vec![claimant];
        recipients.extend((0..9).map(|_| Pubkey::new_unique()));
        let set = recipient_set(recipients);

        // 10 recipients, 7 units: 7 / 10 floors to zero
        let res = validate_claim(&mint, &set, &claimant, false, 7);
        assert_eq!(res.unwrap_err(), IncentiveError::NothingToClaim.into());
    }
}
