//! Generic lookup-to-report adapters.
//!
//! Every tool is one upstream call followed by rendering. The outcome is a
//! [`ReportResult`] and is turned into text in exactly one place,
//! [`conclude`].

use std::future::Future;

use cspr_cloud::models::NamedEntry;
use cspr_cloud::{CloudError, CloudResult, Page, PageRequest};
use explorer_core::format::{display_or, or_na, PLACEHOLDER};
use explorer_core::Report;
use thiserror::Error;

/// Why a tool produced no report
#[derive(Error, Debug)]
pub enum ToolError {
    /// Upstream has no record, or an empty collection
    #[error("{0}")]
    NotFound(String),

    /// A value required before the main call could not be obtained
    #[error("{0}")]
    Unavailable(String),

    #[error(transparent)]
    Upstream(#[from] CloudError),

    /// Caller-supplied JSON that does not parse
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type ReportResult = Result<String, ToolError>;

/// Collapse an outcome into the text handed back to the MCP client
pub fn conclude(action: &str, result: ReportResult) -> String {
    match result {
        Ok(text) => text,
        Err(ToolError::NotFound(sentence)) | Err(ToolError::Unavailable(sentence)) => sentence,
        Err(e) => format!("Error {}: {}", action, e),
    }
}

/// Layout of a paginated listing
pub struct Listing<T> {
    pub title: String,
    /// Line printed between the heading and the first row
    pub preamble: Option<String>,
    /// Print `---` before every row
    pub separated: bool,
    pub row: fn(&mut Report, &T),
}

impl<T> Listing<T> {
    pub fn new(title: impl Into<String>, row: fn(&mut Report, &T)) -> Self {
        Self {
            title: title.into(),
            preamble: None,
            separated: true,
            row,
        }
    }

    pub fn preamble(mut self, line: impl Into<String>) -> Self {
        self.preamble = Some(line.into());
        self
    }

    /// Rows follow each other without `---` in between
    pub fn compact(mut self) -> Self {
        self.separated = false;
        self
    }
}

/// One record lookup
pub async fn single<T, F>(
    fetch: F,
    not_found: String,
    render: impl FnOnce(&T, &mut Report),
) -> ReportResult
where
    F: Future<Output = CloudResult<Option<T>>>,
{
    let record = fetch.await?.ok_or(ToolError::NotFound(not_found))?;
    let mut report = Report::new();
    render(&record, &mut report);
    Ok(report.finish())
}

/// Paginated lookup: heading with page and total, one block per row, footer
pub async fn paged<T, F>(
    fetch: F,
    page: PageRequest,
    empty: String,
    listing: Listing<T>,
) -> ReportResult
where
    F: Future<Output = CloudResult<Option<Page<T>>>>,
{
    let result = non_empty(fetch.await?, empty)?;
    let mut report = Report::new();

    report.page_heading(&listing.title, page.page(), result.item_count);
    if let Some(preamble) = &listing.preamble {
        report.line(preamble);
    }
    for item in &result.data {
        if listing.separated {
            report.separator();
        }
        (listing.row)(&mut report, item);
    }
    report.page_footer(page.page(), result.page_count);

    Ok(report.finish())
}

/// Unpaginated collection with a free-form layout
pub async fn listing<T, F>(
    fetch: F,
    empty: String,
    render: impl FnOnce(&Page<T>, &mut Report),
) -> ReportResult
where
    F: Future<Output = CloudResult<Option<Page<T>>>>,
{
    let result = non_empty(fetch.await?, empty)?;
    let mut report = Report::new();
    render(&result, &mut report);
    Ok(report.finish())
}

/// `## Title (N total)` then one `- **ID:** id | **Name:** name` row per entry
pub async fn reference_table<F>(fetch: F, title: &str, empty: String) -> ReportResult
where
    F: Future<Output = CloudResult<Option<Page<NamedEntry>>>>,
{
    listing(fetch, empty, |entries, report| {
        report.heading(format_args!("{} ({} total)", title, entries.data.len()));
        for entry in &entries.data {
            report.line(format_args!(
                "- **ID:** {} | **Name:** {}",
                display_or(entry.id, PLACEHOLDER),
                or_na(entry.name.as_deref())
            ));
        }
    })
    .await
}

fn non_empty<T>(page: Option<Page<T>>, empty: String) -> Result<Page<T>, ToolError> {
    match page {
        Some(page) if !page.is_empty() => Ok(page),
        _ => Err(ToolError::NotFound(empty)),
    }
}

/// First `len` characters of a hash
pub fn short(hash: Option<&str>, len: usize) -> String {
    hash.unwrap_or_default().chars().take(len).collect()
}
