use anchor_lang::prelude::*;

use crate::constants::{MAX_ADMINS, MAX_RECIPIENTS};
use crate::errors::IncentiveError;

#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum DistributionMode {
    Random,
    Ranking,
    Mixed,
}

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub bump: u8,

    /// Admin allowlist, validated at initialize and immutable afterwards.
    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,

    pub mode: DistributionMode,

    /// Desired recipient count; capped by candidate count at selection time.
    pub num_of_targets: u32,

    /// Fraction of the target count filled by ranking in Mixed mode,
    /// in basis points (0..=10_000).
    pub ranking_bps: u16,

    pub version: u16,
}

impl Config {
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.iter().any(|admin| admin == key)
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_admin(caller), IncentiveError::Unauthorized);
        Ok(())
    }
}

/// Rejects an empty list, the default (zero) pubkey, and duplicates.
/// All-or-nothing: a failed validation never creates a partial registry.
pub fn validate_admins(admins: &[Pubkey]) -> Result<()> {
    require!(!admins.is_empty(), IncentiveError::EmptyAdmins);
    require!(admins.len() <= MAX_ADMINS, IncentiveError::TooManyAdmins);
    for (i, admin) in admins.iter().enumerate() {
        require!(*admin != Pubkey::default(), IncentiveError::InvalidAdmin);
        require!(!admins[..i].contains(admin), IncentiveError::DuplicateAdmin);
    }
    Ok(())
}

#[account]
#[derive(InitSpace)]
pub struct RecipientSet {
    pub bump: u8,

    /// Monotonic selection-round counter, bumped on every run.
    pub round: u64,
    pub selected_slot: u64,

    /// Most recent selection result, replaced wholesale on each run.
    #[max_len(MAX_RECIPIENTS)]
    pub recipients: Vec<Pubkey>,
}

impl RecipientSet {
    pub fn is_recipient(&self, key: &Pubkey) -> bool {
        self.recipients.iter().any(|recipient| recipient == key)
    }
}

/// One-shot claim flag per (mint, claimant) pair. Created lazily on first
/// claim and never reset, so the flag outlives re-selection rounds.
#[account]
#[derive(InitSpace)]
pub struct ClaimRecord {
    pub bump: u8,
    pub mint: Pubkey,
    pub claimant: Pubkey,
    pub claimed: bool,
    pub claimed_slot: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_admins_accepts_distinct_keys() {
        let admins = vec![Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
        assert!(validate_admins(&admins).is_ok());
    }

    #[test]
    fn validate_admins_rejects_empty_list() {
        let res = validate_admins(&[]);
        assert_eq!(res.unwrap_err(), IncentiveError::EmptyAdmins.into());
    }

    #[test]
    fn validate_admins_rejects_default_pubkey() {
        let admins = vec![Pubkey::new_unique(), Pubkey::default()];
        let res = validate_admins(&admins);
        assert_eq!(res.unwrap_err(), IncentiveError::InvalidAdmin.into());
    }

    #[test]
    fn validate_admins_rejects_duplicates() {
        let dup = Pubkey::new_unique();
        let admins = vec![dup, Pubkey::new_unique(), dup];
        let res = validate_admins(&admins);
        assert_eq!(res.unwrap_err(), IncentiveError::DuplicateAdmin.into());
    }

    #[test]
    fn validate_admins_rejects_oversized_list() {
        let admins: Vec<Pubkey> = (0..MAX_ADMINS + 1).map(|_| Pubkey::new_unique()).collect();
        let res = validate_admins(&admins);
        assert_eq!(res.unwrap_err(), IncentiveError::TooManyAdmins.into());
    }
}
