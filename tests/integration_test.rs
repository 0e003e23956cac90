use std::path::Path;
use std::process::Command;

use anyhow::Result;
use serde_json::Value;

fn run_engine(sample: &str) -> Result<Vec<Value>> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-import-engine");
    let sample_path = Path::new("samples").join(sample);

    let output = Command::new(binary_path).arg(sample_path).output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let documents = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;

    Ok(documents)
}

#[test]
fn test_cli_correctly_imports_sample_feed() -> Result<()> {
    let documents = run_engine("sample.jsonl")?;

    assert_eq!(documents.len(), 3);

    for document in &documents {
        assert!(document["id"].is_i64());
        assert!(document["amount"].is_string());
        assert!(document["transactionDate"].is_string());
        assert!(document["category"]["isIncome"].is_boolean());
    }

    Ok(())
}

#[test]
fn test_cli_preserves_wire_format_of_accepted_documents() -> Result<()> {
    let documents = run_engine("sample.jsonl")?;

    assert_eq!(documents[0]["id"], 1);
    assert_eq!(documents[0]["amount"], "500.00");
    assert_eq!(documents[0]["comment"], "Зарплата за месяц");
    assert_eq!(documents[0]["category"]["emoji"], "💰");

    // Offsets are normalized to UTC on the way through.
    assert_eq!(documents[1]["transactionDate"], "2025-06-14T06:30:00Z");

    // An absent comment stays absent, not null or empty.
    assert!(documents[2].get("comment").is_none());

    Ok(())
}

#[test]
fn test_cli_drops_invalid_documents_from_output() -> Result<()> {
    let documents = run_engine("mixed.jsonl")?;

    let ids: Vec<i64> = documents
        .iter()
        .filter_map(|document| document["id"].as_i64())
        .collect();

    assert_eq!(ids, vec![1, 5]);

    Ok(())
}
