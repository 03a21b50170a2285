//! End-to-end exchange: ingest tables, build a pairing, emit a table.
//!
//! This is the entry point shared by the HTTP handlers and the CLI. It owns
//! the retry policy: the engine itself never retries, but callers may allow a
//! few fresh random draws when a greedy run dead-ends.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use santa_types::{AssignmentError, Pairing, Participant, PriorMapping, TypedError};

use super::{assignment, export, roster};

/// Knobs for one exchange run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeOptions {
    /// Engine runs allowed before a constraint violation is reported (min 1)
    pub attempts: u32,
    /// Fixed seed for reproducible output; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for ExchangeOptions {
    fn default() -> Self {
        Self { attempts: 1, seed: None }
    }
}

impl ExchangeOptions {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// A completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeOutcome {
    pub pairing: Pairing,
    /// Serialized table, ready to hand to a client
    pub csv: Vec<u8>,
    /// Engine runs it took to succeed
    pub attempts_used: u32,
    /// Number of givers with a prior-round exclusion
    pub prior_constraints: usize,
}

/// Run [`assignment::assign`] up to `attempts` times, retrying only on
/// constraint violations. The same generator keeps advancing, so each retry
/// sees fresh draws.
pub fn assign_with_attempts<R>(
    participants: &[Participant],
    prior: &PriorMapping,
    attempts: u32,
    rng: &mut R,
) -> Result<(Pairing, u32), AssignmentError>
where
    R: Rng + ?Sized,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match assignment::assign(participants, prior, rng) {
            Ok(pairing) => return Ok((pairing, attempt)),
            Err(e) if e.is_retryable() && attempt < attempts => {
                debug!(attempt, max_attempts = attempts, "Pairing dead-ended, retrying");
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Parse `current` (and `previous` when supplied), pair, and serialize.
pub fn run_exchange(
    current: &[u8],
    previous: Option<&[u8]>,
    options: &ExchangeOptions,
) -> Result<ExchangeOutcome, TypedError> {
    let mut rng = options.rng();
    run_exchange_with_rng(current, previous, options.attempts, &mut rng)
}

/// [`run_exchange`] with a caller-supplied generator.
pub fn run_exchange_with_rng<R>(
    current: &[u8],
    previous: Option<&[u8]>,
    attempts: u32,
    rng: &mut R,
) -> Result<ExchangeOutcome, TypedError>
where
    R: Rng + ?Sized,
{
    let roster = roster::parse_roster(current)?;
    let explicit = previous.map(roster::parse_prior).transpose()?;
    let prior = roster.resolve_prior(explicit);

    let (pairing, attempts_used) =
        assign_with_attempts(&roster.participants, &prior, attempts, rng)?;
    let csv = export::write_pairing(&pairing)?;

    info!(
        participants = pairing.len(),
        prior_constraints = prior.len(),
        attempts_used,
        "Exchange generated"
    );

    Ok(ExchangeOutcome { pairing, csv, attempts_used, prior_constraints: prior.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_types::IngestError;

    const TRIO: &[u8] = b"Employee_Name,Employee_EmailID\nAlice,a@x\nBob,b@x\nCarol,c@x\n";

    #[test]
    fn test_retries_until_success() {
        // A single greedy run on three people fails a quarter of the time.
        for seed in 0..100 {
            let options = ExchangeOptions { attempts: 50, seed: Some(seed) };
            let outcome = run_exchange(TRIO, None, &options).unwrap();
            assert_eq!(outcome.pairing.len(), 3);
            assert!(outcome.attempts_used >= 1 && outcome.attempts_used <= 50);
        }
    }

    #[test]
    fn test_single_attempt_reports_violation() {
        let mut failures = 0;
        for seed in 0..100 {
            let options = ExchangeOptions { attempts: 1, seed: Some(seed) };
            match run_exchange(TRIO, None, &options) {
                Ok(outcome) => assert_eq!(outcome.attempts_used, 1),
                Err(TypedError::Assignment(AssignmentError::ConstraintViolation { .. })) => {
                    failures += 1;
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert!(failures > 0);
    }

    #[test]
    fn test_infeasible_input_exhausts_attempts() {
        let current = b"Employee_Name,Employee_EmailID\nAlice,a@x\nBob,b@x\n";
        let previous = b"Employee_EmailID,Secret_Child_EmailID\na@x,b@x\nb@x,a@x\n";
        let options = ExchangeOptions { attempts: 10, seed: Some(1) };

        let err = run_exchange(current, Some(&previous[..]), &options).unwrap_err();
        assert_eq!(err.kind(), "constraint_violation");
        assert!(err.to_string().contains("Alice"));
    }

    #[test]
    fn test_ingest_errors_are_not_retried() {
        let options = ExchangeOptions { attempts: 10, seed: Some(1) };
        let err = run_exchange(b"Employee_Name\nAlice\n", None, &options).unwrap_err();
        assert!(matches!(err, TypedError::Ingest(IngestError::MissingColumns { .. })));
    }

    #[test]
    fn test_previous_table_applies_exclusion() {
        let previous = b"Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID\n\
Alice,a@x,Bob,b@x\n";
        let options = ExchangeOptions { attempts: 1, seed: Some(9) };

        let outcome = run_exchange(TRIO, Some(&previous[..]), &options).unwrap();
        assert_eq!(outcome.prior_constraints, 1);
        assert_eq!(outcome.pairing.recipient_of("a@x"), Some("c@x"));

        let text = String::from_utf8(outcome.csv).unwrap();
        assert!(text.starts_with("Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID\n"));
        assert!(text.contains("Alice,a@x,Carol,c@x\n"));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let options = ExchangeOptions { attempts: 20, seed: Some(2024) };
        let first = run_exchange(TRIO, None, &options).unwrap();
        let second = run_exchange(TRIO, None, &options).unwrap();
        assert_eq!(first, second);
    }
}
