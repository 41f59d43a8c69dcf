//! Session script reader with iterator interface
//!
//! Provides a streaming iterator over the actions of a session script.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use rust_banking_ledger::io::action_reader::ActionReader;
//! use std::path::Path;
//!
//! let reader = ActionReader::new(Path::new("session.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(action) => println!("Applying {:?}", action),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as Err variants in the iterator,
//!   carrying the line number

use crate::io::csv_format::{convert_action_record, ActionRecord};
use crate::types::{LedgerError, SessionAction};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming reader over a session script
#[derive(Debug)]
pub struct ActionReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl ActionReader {
    /// Open a session script
    ///
    /// The CSV reader trims whitespace from all fields and allows rows with
    /// fewer columns than the header (trailing optional columns may be left
    /// out).
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` when the path does not exist, `IoError` for any
    /// other failure to open it.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for ActionReader {
    type Item = Result<SessionAction, LedgerError>;

    /// Get the next action from the script
    ///
    /// # Returns
    ///
    /// * `Some(Ok(SessionAction))` - Successfully parsed action
    /// * `Some(Err(LedgerError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<ActionRecord>();
        let result = deserializer.next()?;
        self.line_num += 1;

        Some(match result {
            Ok(record) => convert_action_record(record, Some(self.line_num)),
            Err(e) => Err(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DebitRequest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reader_fails_on_missing_file() {
        let result = ActionReader::new(Path::new("nonexistent.csv"));

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::FileNotFound { .. }
        ));
    }

    #[test]
    fn test_reader_iterates_actions_in_order() {
        let file = create_temp_csv(
            "action,target,detail,amount,id,category\n\
             pix,maria@email.com,,100.00,,\n\
             redeem,,,,,\n\
             reclassify,,,,4,Alimentação\n",
        );

        let actions: Vec<_> = ActionReader::new(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(actions.len(), 3);
        assert!(matches!(
            &actions[0],
            SessionAction::Debit { request: DebitRequest::Pix { key }, amount }
                if key == "maria@email.com" && amount == "100.00"
        ));
        assert_eq!(actions[1], SessionAction::RedeemCashback);
        assert!(matches!(actions[2], SessionAction::Reclassify { id: 4, .. }));
    }

    #[test]
    fn test_reader_accepts_short_rows() {
        let file = create_temp_csv("action,target,detail,amount,id,category\nredeem\n");

        let actions: Vec<_> = ActionReader::new(file.path()).unwrap().collect();

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0], Ok(SessionAction::RedeemCashback));
    }

    #[test]
    fn test_reader_reports_line_numbers_and_continues() {
        let file = create_temp_csv(
            "action,target,detail,amount,id,category\n\
             pix,maria@email.com,,10,,\n\
             transfer,x,,10,,\n\
             reclassify,,,,not_a_number,PIX\n\
             redeem,,,,,\n",
        );

        let results: Vec<_> = ActionReader::new(file.path()).unwrap().collect();

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(LedgerError::InvalidAction {
                action: "transfer".to_string(),
                line: Some(3)
            })
        );
        assert!(matches!(results[2], Err(LedgerError::ParseError { .. })));
        assert!(results[3].is_ok());
    }
}
