use anchor_lang::prelude::*;

#[error_code]
pub enum IncentiveError {
    #[msg("Empty admin list")]
    EmptyAdmins,
    #[msg("Invalid admin address")]
    InvalidAdmin,
    #[msg("Duplicate admin address")]
    DuplicateAdmin,
    #[msg("Too many admins")]
    TooManyAdmins,

    #[msg("Admin only")]
    Unauthorized,

    #[msg("Invalid ranking bps (must be <= 10000)")]
    InvalidRankingBps,

    #[msg("Candidate and score lists differ in length")]
    ScoreLengthMismatch,
    #[msg("Too many candidates")]
    TooManyCandidates,
    #[msg("Target count exceeds recipient storage capacity")]
    TooManyRecipients,

    #[msg("Invalid incentive token")]
    InvalidToken,
    #[msg("Caller is not a selected recipient")]
    NotSelected,
    #[msg("Incentive already claimed")]
    AlreadyClaimed,
    #[msg("No incentive balance to claim")]
    NothingToClaim,

    #[msg("Math overflow")]
    MathOverflow,
}
