use pdf_tables_to_xlsx::batch::{ItemOutcome, ItemStatus};
use serde::{Deserialize, Serialize};

pub const ARCHIVE_FILE_NAME: &str = "converted_tables.zip";
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";
pub const UPLOAD_FIELD_NAME: &str = "files";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemReport {
    Converted {
        input_name: String,
        output_name: String,
        table_count: usize,
        row_count: usize,
    },
    NoTables {
        input_name: String,
    },
    Failed {
        input_name: String,
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub skipped: usize,
    pub items: Vec<ItemReport>,
}

#[must_use]
pub fn summarize(items: &[ItemStatus]) -> ConvertSummary {
    let reports = items
        .iter()
        .map(|item| match &item.outcome {
            ItemOutcome::Converted {
                output_name,
                table_count,
                row_count,
            } => ItemReport::Converted {
                input_name: item.input_name.clone(),
                output_name: output_name.clone(),
                table_count: *table_count,
                row_count: *row_count,
            },
            ItemOutcome::NoTables => ItemReport::NoTables {
                input_name: item.input_name.clone(),
            },
            ItemOutcome::Failed { message } => ItemReport::Failed {
                input_name: item.input_name.clone(),
                message: message.clone(),
            },
        })
        .collect::<Vec<_>>();

    let converted = reports
        .iter()
        .filter(|report| matches!(report, ItemReport::Converted { .. }))
        .count();

    ConvertSummary {
        converted,
        skipped: reports.len() - converted,
        items: reports,
    }
}
