//! CSV ingestion for participant rosters and prior-round tables.
//!
//! Rows are decoded once here into fixed-shape records. Everything past this
//! module can assume non-empty names and ids and unique ids.

use std::collections::HashSet;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use santa_types::{IngestError, Participant, PriorMapping};

pub const NAME_COLUMN: &str = "Employee_Name";
pub const ID_COLUMN: &str = "Employee_EmailID";
pub const RECIPIENT_NAME_COLUMN: &str = "Secret_Child_Name";
pub const RECIPIENT_ID_COLUMN: &str = "Secret_Child_EmailID";

/// The current round's participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub participants: Vec<Participant>,
    /// Prior recipients carried in the roster's own `Secret_Child_EmailID` column.
    pub inline_prior: PriorMapping,
}

impl Roster {
    /// Combine the inline column with an explicitly supplied prior table.
    /// Explicit entries win per giver.
    pub fn resolve_prior(&self, explicit: Option<PriorMapping>) -> PriorMapping {
        match explicit {
            Some(explicit) => self.inline_prior.clone().overlay(explicit),
            None => self.inline_prior.clone(),
        }
    }
}

struct Table {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Resolve every column in `columns`, reporting all missing ones at once.
    fn require<const N: usize>(&self, columns: [&str; N]) -> Result<[usize; N], IngestError> {
        let mut indices = [0; N];
        let mut missing = Vec::new();
        for (slot, name) in indices.iter_mut().zip(columns) {
            match self.column(name) {
                Some(idx) => *slot = idx,
                None => missing.push(name.to_string()),
            }
        }
        if missing.is_empty() {
            Ok(indices)
        } else {
            Err(IngestError::MissingColumns { columns: missing })
        }
    }
}

fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("")
}

fn read_table(bytes: &[u8]) -> Result<Table, IngestError> {
    let text = std::str::from_utf8(bytes).map_err(IngestError::malformed)?;
    let text = text.trim_start_matches('\u{feff}');
    if text.trim().is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(IngestError::malformed)?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(IngestError::malformed)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record);
    }

    Ok(Table { headers, rows })
}

/// Parse the current round's table.
///
/// Requires `Employee_Name` and `Employee_EmailID`. An optional
/// `Secret_Child_EmailID` column is read as last round's recipient.
pub fn parse_roster(bytes: &[u8]) -> Result<Roster, IngestError> {
    let table = read_table(bytes)?;
    let [name_idx, id_idx] = table.require([NAME_COLUMN, ID_COLUMN])?;
    if table.rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    let recipient_idx = table.column(RECIPIENT_ID_COLUMN);

    let mut seen = HashSet::with_capacity(table.rows.len());
    let mut participants = Vec::with_capacity(table.rows.len());
    let mut inline_prior = PriorMapping::new();

    for (offset, row) in table.rows.iter().enumerate() {
        let row_no = offset + 1;
        let name = field(row, name_idx);
        let id = field(row, id_idx);

        if name.is_empty() {
            return Err(IngestError::BlankField { row: row_no, column: NAME_COLUMN.to_string() });
        }
        if id.is_empty() {
            return Err(IngestError::BlankField { row: row_no, column: ID_COLUMN.to_string() });
        }
        if !seen.insert(id.to_string()) {
            return Err(IngestError::DuplicateParticipant { id: id.to_string(), row: row_no });
        }

        if let Some(idx) = recipient_idx {
            let previous = field(row, idx);
            if !previous.is_empty() {
                inline_prior.insert(id, previous);
            }
        }
        participants.push(Participant::new(name, id));
    }

    debug!(
        participants = participants.len(),
        inline_prior = inline_prior.len(),
        "Parsed roster"
    );
    Ok(Roster { participants, inline_prior })
}

/// Parse a previous round's table into a prior mapping.
///
/// Only `Employee_EmailID` is required. Rows without a
/// `Secret_Child_EmailID` value impose no constraint. A header-only table
/// yields an empty mapping.
pub fn parse_prior(bytes: &[u8]) -> Result<PriorMapping, IngestError> {
    let table = read_table(bytes)?;
    let [id_idx] = table.require([ID_COLUMN])?;

    let Some(recipient_idx) = table.column(RECIPIENT_ID_COLUMN) else {
        debug!("Prior table has no {} column; no exclusions applied", RECIPIENT_ID_COLUMN);
        return Ok(PriorMapping::new());
    };

    let mut prior = PriorMapping::new();
    for (offset, row) in table.rows.iter().enumerate() {
        let giver = field(row, id_idx);
        let recipient = field(row, recipient_idx);
        if giver.is_empty() || recipient.is_empty() {
            continue;
        }
        if prior.insert(giver, recipient).is_some() {
            warn!(row = offset + 1, "Giver listed twice in prior table; keeping the later row");
        }
    }

    debug!(prior_constraints = prior.len(), "Parsed prior table");
    Ok(prior)
}
