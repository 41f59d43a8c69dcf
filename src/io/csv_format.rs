//! CSV format handling for session scripts, statements and reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - ActionRecord structure for session script deserialization
//! - StatementRecord structure for statements and seed files
//! - Conversion from CSV records to domain types
//! - Statement and category report serialization
//!
//! Statement rows use `dd/mm/yyyy` dates, `HH:MM` times and amounts with two
//! decimals, so a written statement can be read back as a seed file.

use crate::core::CategoryTotals;
use crate::types::{
    parse_amount, Category, DebitRequest, LedgerError, SessionAction, Transaction, TransactionId,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::io::{Read, Write};

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%H:%M";

/// One row of a session script
///
/// Columns: `action,target,detail,amount,id,category`. Which columns matter
/// depends on the action:
///
/// | action          | target  | detail   | amount | id | category |
/// |-----------------|---------|----------|--------|----|----------|
/// | `pix`           | key     |          | yes    |    |          |
/// | `mobile_topup`  | phone   | operator | yes    |    |          |
/// | `service_topup` | service |          | yes    |    |          |
/// | `redeem`        |         |          |        |    |          |
/// | `reclassify`    |         |          |        | yes| yes      |
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ActionRecord {
    pub action: String,
    pub target: Option<String>,
    pub detail: Option<String>,
    pub amount: Option<String>,
    pub id: Option<TransactionId>,
    pub category: Option<String>,
}

/// One statement row
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StatementRecord {
    pub id: TransactionId,
    pub date: String,
    pub time: String,
    pub name: String,
    pub category: String,
    pub amount: String,
}

/// Convert an ActionRecord to a SessionAction
///
/// Empty debit fields are passed through as empty strings: reporting them is
/// the debit validation's job, so a script behaves like a form left blank.
///
/// # Arguments
///
/// * `record` - The deserialized CSV record
/// * `line` - Line number of the record, for error messages
///
/// # Errors
///
/// Returns `InvalidAction` for an unknown action, or a `reclassify` row
/// without an id or category.
pub fn convert_action_record(
    record: ActionRecord,
    line: Option<u64>,
) -> Result<SessionAction, LedgerError> {
    let text = |field: Option<String>| field.unwrap_or_default();

    let action = match record.action.trim().to_lowercase().as_str() {
        "pix" => SessionAction::Debit {
            request: DebitRequest::Pix {
                key: text(record.target),
            },
            amount: text(record.amount),
        },
        "mobile_topup" => SessionAction::Debit {
            request: DebitRequest::MobileTopUp {
                phone: text(record.target),
                operator: text(record.detail),
            },
            amount: text(record.amount),
        },
        "service_topup" => SessionAction::Debit {
            request: DebitRequest::ServiceTopUp {
                service: text(record.target),
            },
            amount: text(record.amount),
        },
        "redeem" => SessionAction::RedeemCashback,
        "reclassify" => {
            let category = record
                .category
                .filter(|category| !category.trim().is_empty())
                .ok_or_else(|| LedgerError::invalid_action(&record.action, line))?;
            let id = record
                .id
                .ok_or_else(|| LedgerError::invalid_action(&record.action, line))?;
            SessionAction::Reclassify {
                id,
                category: Category::new(category.trim()),
            }
        }
        _ => return Err(LedgerError::invalid_action(&record.action, line)),
    };

    Ok(action)
}

/// Convert a StatementRecord to a Transaction
///
/// # Errors
///
/// Returns `ParseError` for a malformed date, time or amount.
pub fn convert_statement_record(
    record: StatementRecord,
    line: Option<u64>,
) -> Result<Transaction, LedgerError> {
    let parse_error = |message: String| LedgerError::ParseError { line, message };

    let date = NaiveDate::parse_from_str(record.date.trim(), DATE_FORMAT)
        .map_err(|e| parse_error(format!("invalid date '{}': {}", record.date, e)))?;
    let time = NaiveTime::parse_from_str(record.time.trim(), TIME_FORMAT)
        .map_err(|e| parse_error(format!("invalid time '{}': {}", record.time, e)))?;
    let amount = parse_amount(&record.amount)
        .map_err(|_| parse_error(format!("invalid amount '{}'", record.amount)))?;

    Ok(Transaction::new(
        record.id,
        record.name.trim(),
        amount,
        date.and_time(time),
        record.category.trim(),
    ))
}

/// Read a whole statement (or seed file)
///
/// # Errors
///
/// Fails on the first malformed row; seed data is all-or-nothing.
pub fn read_statement_csv<R: Read>(input: R) -> Result<Vec<Transaction>, LedgerError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut transactions = Vec::new();
    for (index, result) in reader.deserialize::<StatementRecord>().enumerate() {
        let record = result?;
        transactions.push(convert_statement_record(record, Some(index as u64 + 2))?);
    }

    Ok(transactions)
}

/// Write transactions as a statement
///
/// Columns: `id,date,time,name,category,amount`, in the order given.
pub fn write_statement_csv<'a, I>(transactions: I, output: &mut dyn Write) -> Result<(), LedgerError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["id", "date", "time", "name", "category", "amount"])?;

    for tx in transactions {
        writer.write_record(&[
            tx.id.to_string(),
            tx.occurred_at.format(DATE_FORMAT).to_string(),
            tx.occurred_at.format(TIME_FORMAT).to_string(),
            tx.name.clone(),
            tx.category.to_string(),
            format!("{:.2}", tx.amount),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write debit totals per category with their share
///
/// Columns: `category,total,percentage`. The percentage is left empty when
/// there is nothing to chart.
pub fn write_category_report_csv(
    totals: &CategoryTotals,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["category", "total", "percentage"])?;

    for share in totals.shares() {
        writer.write_record(&[
            share.category.to_string(),
            format!("{:.2}", share.total),
            share
                .percentage
                .map(|p| format!("{:.2}", p))
                .unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
