//! I/O module
//!
//! Handles CSV session scripts, statements and reports.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, statement and report serialization)
//! - `action_reader` - Session script reader with iterator interface

pub mod action_reader;
pub mod csv_format;

pub use action_reader::ActionReader;
pub use csv_format::{
    convert_action_record, convert_statement_record, read_statement_csv,
    write_category_report_csv, write_statement_csv, ActionRecord, StatementRecord,
};
