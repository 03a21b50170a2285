//! Randomized constrained pairing engine.
//!
//! Every participant gives to exactly one other participant and receives from
//! exactly one. A giver never draws themselves and never draws the recipient
//! recorded for them in the prior mapping.
//!
//! The engine is greedy: the pool is shuffled once, then each giver in input
//! order picks uniformly among the pool members still eligible for them and
//! removes the pick. When a giver is left with no eligible member the whole
//! run fails with [`AssignmentError::ConstraintViolation`]. This can happen
//! even when a valid derangement exists; retrying with fresh randomness is a
//! caller decision (see [`crate::modules::exchange`]).

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use santa_types::{AssignmentError, Assignment, Pairing, Participant, PriorMapping};

/// Pair every participant with a recipient.
///
/// Returns either a complete pairing that satisfies every constraint or an
/// error; a partial pairing is never returned.
pub fn assign<R>(
    participants: &[Participant],
    prior: &PriorMapping,
    rng: &mut R,
) -> Result<Pairing, AssignmentError>
where
    R: Rng + ?Sized,
{
    if participants.is_empty() {
        return Err(AssignmentError::EmptyInput);
    }
    ensure_unique_ids(participants)?;

    debug!(
        participants = participants.len(),
        prior_constraints = prior.len(),
        "Building pairing"
    );

    let mut pool: Vec<&Participant> = participants.iter().collect();
    pool.shuffle(rng);

    let mut assignments = Vec::with_capacity(participants.len());
    for giver in participants {
        let excluded = prior.get(&giver.email_id);
        let eligible = |c: &Participant| {
            c.email_id != giver.email_id && Some(c.email_id.as_str()) != excluded
        };

        let count = pool.iter().filter(|&&c| eligible(c)).count();
        let pick = match count {
            0 => None,
            _ => {
                let k = rng.gen_range(0..count);
                pool.iter().enumerate().filter(|&(_, &c)| eligible(c)).nth(k).map(|(idx, _)| idx)
            }
        };

        let Some(pick) = pick else {
            warn!(
                remaining = pool.len(),
                assigned = assignments.len(),
                "No eligible recipient left for a participant"
            );
            return Err(AssignmentError::ConstraintViolation {
                name: giver.name.clone(),
                id: giver.email_id.clone(),
            });
        };

        let recipient = pool.remove(pick);
        assignments.push(Assignment::new(giver, recipient));
    }

    Ok(Pairing::new(assignments))
}

fn ensure_unique_ids(participants: &[Participant]) -> Result<(), AssignmentError> {
    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.email_id.as_str()) {
            return Err(AssignmentError::DuplicateParticipant { id: p.email_id.clone() });
        }
    }
    Ok(())
}
