use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::IncentiveError;
use crate::state::DistributionMode;
use crate::utils::DrawSource;

/// Packed per-candidate exclusion flags, one bit per input index.
/// Shared across the ranking and random phases of a Mixed run so the two
/// sub-selections are structurally disjoint.
pub struct ExclusionSet {
    words: Vec<u64>,
}

impl ExclusionSet {
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0u64; len.div_ceil(64)],
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.words[index / 64] >> (index % 64)) & 1 == 1
    }

    pub fn insert(&mut self, index: usize) {
        self.words[index / 64] |= 1u64 << (index % 64);
    }
}

/// Sum of scores over non-excluded candidates.
pub fn live_weight(scores: &[u64], excluded: &ExclusionSet) -> Result<u64> {
    let mut total: u64 = 0;
    for (i, &score) in scores.iter().enumerate() {
        if !excluded.contains(i) {
            total = total
                .checked_add(score)
                .ok_or(IncentiveError::MathOverflow)?;
        }
    }
    Ok(total)
}

/// Walk candidate indices in order, accumulating scores of non-excluded
/// candidates; return the first index whose inclusive cumulative sum
/// exceeds `r`.
///
/// A zero-score candidate never advances the sum, so no draw value lands
/// on it: zero score means structurally ineligible for a random slot.
/// A draw at or past the total live weight clamps to the last eligible
/// index. Returns None only when no eligible candidate remains.
pub fn find_index(scores: &[u64], excluded: &ExclusionSet, r: u64) -> Option<usize> {
    let mut acc: u64 = 0;
    let mut last_eligible: Option<usize> = None;

    for (i, &score) in scores.iter().enumerate() {
        if excluded.contains(i) || score == 0 {
            continue;
        }
        acc = acc.saturating_add(score);
        if r < acc {
            return Some(i);
        }
        last_eligible = Some(i);
    }

    last_eligible
}

/// Weighted draws without replacement. Stops early when the live weight
/// hits zero (every remaining candidate carries score 0), which can leave
/// the result shorter than `count`.
pub fn select_random(
    candidates: &[Pubkey],
    scores: &[u64],
    count: usize,
    excluded: &mut ExclusionSet,
    draws: &mut dyn DrawSource,
    out: &mut Vec<Pubkey>,
) -> Result<()> {
    for _ in 0..count {
        let total = live_weight(scores, excluded)?;
        if total == 0 {
            break;
        }

        let r = draws.draw(total);
        let idx = match find_index(scores, excluded, r) {
            Some(idx) => idx,
            None => break,
        };

        excluded.insert(idx);
        out.push(candidates[idx]);
    }
    Ok(())
}

/// Top-`count` by score descending, ties broken by input order.
/// Zero-score candidates are eligible here, unlike in the random path.
pub fn select_ranking(
    candidates: &[Pubkey],
    scores: &[u64],
    count: usize,
    excluded: &mut ExclusionSet,
    out: &mut Vec<Pubkey>,
) {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    // sort_by is stable, so equal scores keep their input order
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));

    let mut taken = 0usize;
    for idx in order {
        if taken == count {
            break;
        }
        if excluded.contains(idx) {
            continue;
        }
        excluded.insert(idx);
        out.push(candidates[idx]);
        taken += 1;
    }
}

/// Run one selection round under the given policy. The result holds at
/// most `min(num_of_targets, candidates.len())` recipients, each appearing
/// once, all drawn from `candidates`. In Mixed mode the ranking picks come
/// first, then the random picks.
pub fn select_recipients(
    mode: DistributionMode,
    num_of_targets: u32,
    ranking_bps: u16,
    candidates: &[Pubkey],
    scores: &[u64],
    draws: &mut dyn DrawSource,
) -> Result<Vec<Pubkey>> {
    require!(
        candidates.len() == scores.len(),
        IncentiveError::ScoreLengthMismatch
    );

    let k = (num_of_targets as usize).min(candidates.len());
    let mut excluded = ExclusionSet::new(candidates.len());
    let mut out = Vec::with_capacity(k);

    match mode {
        DistributionMode::Random => {
            select_random(candidates, scores, k, &mut excluded, draws, &mut out)?;
        }
        DistributionMode::Ranking => {
            select_ranking(candidates, scores, k, &mut excluded, &mut out);
        }
        DistributionMode::Mixed => {
            let ranking_count = (k as u64)
                .checked_mul(ranking_bps as u64)
                .ok_or(IncentiveError::MathOverflow)?
                / BPS_DENOMINATOR as u64;
            let ranking_count = ranking_count as usize;

            select_ranking(candidates, scores, ranking_count, &mut excluded, &mut out);
            select_random(
                candidates,
                scores,
                k - ranking_count,
                &mut excluded,
                draws,
                &mut out,
            )?;
        }
    }

    Ok(out)
}
