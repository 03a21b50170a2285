//! CSV emission for generated pairings.

use csv::{Terminator, WriterBuilder};

use santa_types::{ExportError, Pairing};

use super::roster::{ID_COLUMN, NAME_COLUMN, RECIPIENT_ID_COLUMN, RECIPIENT_NAME_COLUMN};

/// Header row of every generated table.
pub const HEADER: [&str; 4] = [NAME_COLUMN, ID_COLUMN, RECIPIENT_NAME_COLUMN, RECIPIENT_ID_COLUMN];

/// File name offered to clients downloading a generated table.
pub const ATTACHMENT_FILE_NAME: &str = "secret_santa_assignments.csv";

/// Serialize a pairing, one row per assignment in pairing order.
pub fn write_pairing(pairing: &Pairing) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER).map_err(ExportError::write)?;
    for a in pairing {
        writer
            .write_record([
                a.giver_name.as_str(),
                a.giver_id.as_str(),
                a.recipient_name.as_str(),
                a.recipient_id.as_str(),
            ])
            .map_err(ExportError::write)?;
    }

    writer.into_inner().map_err(ExportError::write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_types::{Assignment, Participant};

    #[test]
    fn test_write_pairing() {
        let alice = Participant::new("Alice", "alice@example.com");
        let bob = Participant::new("Bob", "bob@example.com");
        let charlie = Participant::new("Charlie", "charlie@example.com");
        let pairing = Pairing::new(vec![
            Assignment::new(&alice, &bob),
            Assignment::new(&bob, &charlie),
            Assignment::new(&charlie, &alice),
        ]);

        let csv = String::from_utf8(write_pairing(&pairing).unwrap()).unwrap();
        assert_eq!(
            csv,
            "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID\n\
Alice,alice@example.com,Bob,bob@example.com\n\
Bob,bob@example.com,Charlie,charlie@example.com\n\
Charlie,charlie@example.com,Alice,alice@example.com\n"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let a = Participant::new("Doe, Jane", "jane@x");
        let b = Participant::new("Roe, Rick", "rick@x");
        let pairing = Pairing::new(vec![Assignment::new(&a, &b), Assignment::new(&b, &a)]);

        let csv = String::from_utf8(write_pairing(&pairing).unwrap()).unwrap();
        assert!(csv.contains("\"Doe, Jane\",jane@x,\"Roe, Rick\",rick@x\n"));
    }

    #[test]
    fn test_output_reads_back_as_prior_table() {
        let a = Participant::new("Alice", "a@x");
        let b = Participant::new("Bob", "b@x");
        let pairing = Pairing::new(vec![Assignment::new(&a, &b), Assignment::new(&b, &a)]);

        let bytes = write_pairing(&pairing).unwrap();
        let prior = crate::modules::roster::parse_prior(&bytes).unwrap();
        assert_eq!(prior.get("a@x"), Some("b@x"));
        assert_eq!(prior.get("b@x"), Some("a@x"));
    }
}
