use pdf_tables_to_xlsx::batch::{ItemOutcome, ItemStatus};
use pretty_assertions::assert_eq;

use pdf2xlsx_worker::models::{ConvertSummary, ItemReport, summarize};

fn sample_statuses() -> Vec<ItemStatus> {
    vec![
        ItemStatus {
            input_name: "one.pdf".to_string(),
            outcome: ItemOutcome::Converted {
                output_name: "one.xlsx".to_string(),
                table_count: 1,
                row_count: 2,
            },
        },
        ItemStatus {
            input_name: "two.pdf".to_string(),
            outcome: ItemOutcome::Failed {
                message: "failed to load PDF: invalid file header".to_string(),
            },
        },
        ItemStatus {
            input_name: "three.pdf".to_string(),
            outcome: ItemOutcome::NoTables,
        },
    ]
}

#[test]
fn summary_counts_converted_and_skipped_items() {
    let summary = summarize(&sample_statuses());

    assert_eq!(
        summary,
        ConvertSummary {
            converted: 1,
            skipped: 2,
            items: vec![
                ItemReport::Converted {
                    input_name: "one.pdf".to_string(),
                    output_name: "one.xlsx".to_string(),
                    table_count: 1,
                    row_count: 2,
                },
                ItemReport::Failed {
                    input_name: "two.pdf".to_string(),
                    message: "failed to load PDF: invalid file header".to_string(),
                },
                ItemReport::NoTables {
                    input_name: "three.pdf".to_string(),
                },
            ],
        }
    );
}

#[test]
fn summary_serializes_with_status_tags() {
    let summary = summarize(&sample_statuses());
    let json = serde_json::to_value(&summary).expect("summary should serialize");

    assert_eq!(json["converted"], 1);
    assert_eq!(json["skipped"], 2);
    assert_eq!(json["items"][0]["status"], "converted");
    assert_eq!(json["items"][0]["output_name"], "one.xlsx");
    assert_eq!(json["items"][1]["status"], "failed");
    assert_eq!(json["items"][2]["status"], "no_tables");
}

#[test]
fn empty_batch_summarizes_to_zero_counts() {
    let summary = summarize(&[]);
    assert_eq!(summary.converted, 0);
    assert_eq!(summary.skipped, 0);
    assert!(summary.items.is_empty());
}
