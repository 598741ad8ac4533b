use pdf_tables_to_xlsx::ConvertOptions;
use pdf_tables_to_xlsx::batch::{InputDocument, run_batch};
use worker::{
    Context, Env, FormEntry, Request, Response, Result, RouteContext, Router, console_log,
    console_warn,
};

use crate::error::ApiError;
use crate::models::{
    ARCHIVE_CONTENT_TYPE, ARCHIVE_FILE_NAME, ConvertSummary, ItemReport, UPLOAD_FIELD_NAME,
    summarize,
};

const FORM_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>PDF to Excel Converter</title>
</head>
<body>
<h1>PDF to Excel Converter</h1>
<p>Upload PDF files to extract tables into Excel spreadsheets. All results
are returned as one ZIP archive.</p>
<form method="post" action="/api/v1/convert" enctype="multipart/form-data">
<input type="file" name="files" accept="application/pdf" multiple required>
<button type="submit">Convert</button>
</form>
</body>
</html>
"#;

pub async fn handle(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    Router::new()
        .get_async("/", form_page_route)
        .post_async("/api/v1/convert", convert_route)
        .run(req, env)
        .await
}

async fn form_page_route(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    Response::from_html(FORM_PAGE)
}

async fn convert_route(mut req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    match convert_response(&mut req).await {
        Ok(response) => Ok(response),
        Err(error) => error.into_response(),
    }
}

async fn convert_response(req: &mut Request) -> Result<Response, ApiError> {
    let documents = collect_uploads(req).await?;
    if documents.is_empty() {
        return Err(ApiError::BadRequest(
            "no PDF files uploaded; submit at least one file in the 'files' field".to_string(),
        ));
    }

    let outcome = run_batch(&documents, &ConvertOptions::default())
        .map_err(|error| ApiError::Internal(format!("batch conversion failed: {error}")))?;
    let summary = summarize(&outcome.items);
    log_summary(&summary);

    let Some(blob) = outcome.archive else {
        let mut response = Response::from_json(&summary)?;
        response.headers_mut().set("Cache-Control", "no-store")?;
        return Ok(response.with_status(422));
    };

    let mut response = Response::from_bytes(blob)?;
    response
        .headers_mut()
        .set("Content-Type", ARCHIVE_CONTENT_TYPE)?;
    response.headers_mut().set(
        "Content-Disposition",
        &format!("attachment; filename=\"{ARCHIVE_FILE_NAME}\""),
    )?;
    response.headers_mut().set("Cache-Control", "no-store")?;
    response
        .headers_mut()
        .set("X-Converted-Count", &summary.converted.to_string())?;
    response
        .headers_mut()
        .set("X-Skipped-Count", &summary.skipped.to_string())?;
    Ok(response)
}

async fn collect_uploads(req: &mut Request) -> Result<Vec<InputDocument>, ApiError> {
    let form = req
        .form_data()
        .await
        .map_err(|error| ApiError::BadRequest(format!("invalid multipart form data: {error}")))?;

    let Some(entries) = form.get_all(UPLOAD_FIELD_NAME) else {
        return Ok(Vec::new());
    };

    let mut documents = Vec::new();
    for entry in entries {
        match entry {
            FormEntry::File(file) => {
                let name = file.name();
                let bytes = file.bytes().await?;
                documents.push(InputDocument { name, bytes });
            }
            // Stray non-file fields under the upload name are ignored.
            FormEntry::Field(_) => {}
        }
    }

    Ok(documents)
}

fn log_summary(summary: &ConvertSummary) {
    for item in &summary.items {
        match item {
            ItemReport::Converted {
                input_name,
                output_name,
                table_count,
                row_count,
            } => console_log!(
                "converted {input_name} -> {output_name}: tables={table_count}, rows={row_count}"
            ),
            ItemReport::NoTables { input_name } => {
                console_warn!("no tables found in {input_name}");
            }
            ItemReport::Failed {
                input_name,
                message,
            } => console_warn!("conversion failed for {input_name}: {message}"),
        }
    }
}
