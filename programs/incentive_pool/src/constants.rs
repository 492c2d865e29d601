// Centralized Protocol Constants

// -----------------
// Seeds
// -----------------
pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const RECIPIENTS_SEED: &[u8] = b"recipients_v1";
pub const INCENTIVE_VAULT_SEED: &[u8] = b"incentive_vault_v1";
pub const CLAIM_SEED: &[u8] = b"claim_v1";

/// Domain tag mixed into the draw seed so draw values can never collide
/// with hashes produced for any other purpose.
pub const DRAW_DOMAIN: &[u8] = b"incentive-pool:draw_v1";

// -----------------
// Limits
// -----------------

/// Maximum admin identities stored in Config.
/// Fixed max_len to keep the account size deterministic.
pub const MAX_ADMINS: usize = 16;

/// Maximum recipients stored per selection round. Bounded by the 10 KiB
/// account init limit (256 * 32 bytes of keys plus header).
pub const MAX_RECIPIENTS: usize = 256;

/// Maximum candidates accepted by a single select_recipients call.
/// Selection is O(n * k); this bound keeps a worst-case run inside the
/// compute budget for the documented scale (hundreds of candidates).
pub const MAX_CANDIDATES: usize = 1024;

/// Basis-point denominator. 10_000 = 100%.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;
