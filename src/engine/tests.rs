use super::summarizer::{filter_by_period, process, sort_by_date_desc, summarize};

use anyhow::Result;
use chrono::NaiveDate;
use std::io::Write;
use std::str::FromStr;

use tempfile::{Builder, NamedTempFile};

use crate::config::Config;
use crate::ingest::IngestError;
use crate::models::Transaction;
use crate::types::Period;

fn create_transaction(date: &str, amount: i64, content: &str) -> Result<Transaction> {
    Ok(Transaction::new(NaiveDate::parse_from_str(date, "%Y/%m/%d")?, amount, content))
}

fn create_temporary_csv(contents: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new().suffix(".csv").tempfile()?;
    write!(file, "{contents}")?;
    Ok(file)
}

fn create_config(period: &str, file: &NamedTempFile) -> Result<Config> {
    Ok(Config {
        period: Period::from_str(period)?,
        path: file.path().to_path_buf()
    })
}

fn contents(transactions: &[Transaction]) -> Vec<&str> {
    transactions.iter().map(|transaction| transaction.content()).collect()
}

#[test]
fn test_filter_keeps_only_the_requested_month_in_order() -> Result<()> {
    let transactions = vec![
        create_transaction("2022/01/05", -1000, "eating out")?,
        create_transaction("2021/12/31", -300, "new year")?,
        create_transaction("2022/01/06", -10000, "debit")?,
        create_transaction("2022/02/03", -1500, "dining out")?,
        create_transaction("2022/01/31", 200, "refund")?,
        create_transaction("2022/02/01", 50, "gift")?,
        create_transaction("2021/01/15", 75, "last year")?,
    ];

    let filtered = filter_by_period(transactions, Period::from_str("202201")?);

    assert_eq!(contents(&filtered), vec!["eating out", "debit", "refund"]);

    Ok(())
}

#[test]
fn test_filter_without_matches_is_empty() -> Result<()> {
    let transactions = vec![create_transaction("2022/02/01", -1000, "rent")?];

    assert!(filter_by_period(transactions, Period::from_str("202201")?).is_empty());

    Ok(())
}

#[test]
fn test_sort_orders_newest_first_and_is_stable() -> Result<()> {
    let mut transactions = vec![
        create_transaction("2022/01/01", 1, "a")?,
        create_transaction("2022/01/03", 2, "b")?,
        create_transaction("2022/01/01", 3, "c")?,
        create_transaction("2022/01/02", 4, "d")?,
        create_transaction("2022/01/03", 5, "e")?,
    ];

    sort_by_date_desc(&mut transactions);

    assert_eq!(contents(&transactions), vec!["b", "e", "d", "a", "c"]);

    Ok(())
}

#[test]
fn test_sort_is_idempotent() -> Result<()> {
    let mut transactions = vec![
        create_transaction("2022/01/09", 1, "a")?,
        create_transaction("2022/01/04", 2, "b")?,
        create_transaction("2022/01/04", 3, "c")?,
        create_transaction("2022/01/01", 4, "d")?,
    ];
    let expected = transactions.clone();

    sort_by_date_desc(&mut transactions);
    assert_eq!(transactions, expected);

    sort_by_date_desc(&mut transactions);
    assert_eq!(transactions, expected);

    Ok(())
}

#[test]
fn test_summarize_partitions_amounts_by_sign() -> Result<()> {
    let transactions = vec![
        create_transaction("2022/01/01", 1000, "income")?,
        create_transaction("2022/01/02", -500, "eating out")?,
        create_transaction("2022/01/03", 0, "free sample")?,
        create_transaction("2022/01/04", 250, "refund")?,
        create_transaction("2022/01/05", -125, "bus")?,
    ];
    let sum: i64 = transactions.iter().map(|transaction| transaction.amount()).sum();

    let summary = summarize(transactions, Period::from_str("202201")?);

    assert_eq!(summary.period, "2022/01");
    assert_eq!(summary.total_income, 1250);
    assert_eq!(summary.total_expenditure, -625);
    assert_eq!(summary.total_income + summary.total_expenditure, sum);
    assert_eq!(contents(&summary.transactions), vec!["bus", "refund", "free sample", "eating out", "income"]);

    Ok(())
}

#[test]
fn test_summarize_counts_zero_as_expenditure() -> Result<()> {
    let summary = summarize(vec![create_transaction("2022/01/01", 0, "nothing")?], Period::from_str("202201")?);

    assert_eq!(summary.total_income, 0);
    assert_eq!(summary.total_expenditure, 0);
    assert_eq!(summary.transactions.len(), 1);

    Ok(())
}

#[test]
fn test_summarize_saturates_instead_of_overflowing() -> Result<()> {
    let transactions = vec![
        create_transaction("2022/01/01", i64::MAX, "jackpot")?,
        create_transaction("2022/01/02", 1, "interest")?,
    ];

    let summary = summarize(transactions, Period::from_str("202201")?);

    assert_eq!(summary.total_income, i64::MAX);

    Ok(())
}

#[test]
fn test_process_summarizes_valid_file() -> Result<()> {
    let file = create_temporary_csv("date,amount,content\n2022/01/01,1000,income\n2022/01/02,-500,eating out\n")?;

    let summary = process(&create_config("202201", &file)?)?;

    assert_eq!(summary.period, "2022/01");
    assert_eq!(summary.total_income, 1000);
    assert_eq!(summary.total_expenditure, -500);
    assert_eq!(contents(&summary.transactions), vec!["eating out", "income"]);

    Ok(())
}

#[test]
fn test_process_header_only_file_yields_empty_summary() -> Result<()> {
    let file = create_temporary_csv("date,amount,content\n")?;

    let summary = process(&create_config("202201", &file)?)?;

    assert!(summary.transactions.is_empty());
    assert_eq!(summary.total_income, 0);
    assert_eq!(summary.total_expenditure, 0);

    Ok(())
}

#[test]
fn test_process_rejects_pipe_delimited_file() -> Result<()> {
    let file = create_temporary_csv("date|amount|content\n2022/01/01|1000|income\n")?;

    let result = process(&create_config("202201", &file)?);

    assert!(matches!(result, Err(IngestError::Header { .. })));

    Ok(())
}

#[test]
fn test_process_without_transactions_in_period_is_not_an_error() -> Result<()> {
    let file = create_temporary_csv("date,amount,content\n2022/02/01,-1000,rent\n2022/02/15,3000,salary\n")?;

    let summary = process(&create_config("202201", &file)?)?;

    assert!(summary.transactions.is_empty());
    assert_eq!(summary.total_income, 0);
    assert_eq!(summary.total_expenditure, 0);

    Ok(())
}

#[test]
fn test_process_fails_on_empty_content_with_line_number() -> Result<()> {
    let file = create_temporary_csv("date,amount,content\n2022/01/01,1000,\n")?;

    let result = process(&create_config("202201", &file)?);

    assert!(matches!(result, Err(IngestError::EmptyContent { line: 2 })));

    Ok(())
}

#[test]
fn test_process_fails_on_rows_outside_the_period_too() -> Result<()> {
    let file = create_temporary_csv("date,amount,content\n2022/01/01,1000,income\n2021/13/01,5,broken\n")?;

    let result = process(&create_config("202201", &file)?);

    assert!(matches!(result, Err(IngestError::DateFormat { line: 3, .. })));

    Ok(())
}
