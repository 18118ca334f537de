//! Markdown report builder.
//!
//! Every tool answer has the same shape:
//!
//! ```text
//! ## Title (Page 1, 42 total)
//! ---
//! - **Label:** value
//!   Detail: value
//! ---
//! Page 1 of 5
//! ```

use std::fmt::Display;

use crate::format::display_or;

/// Line-oriented Markdown writer
#[derive(Debug, Default, Clone)]
pub struct Report {
    text: String,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// `## title`
    pub fn heading(&mut self, title: impl Display) -> &mut Self {
        self.line(format_args!("## {}", title))
    }

    /// `### title`
    pub fn subheading(&mut self, title: impl Display) -> &mut Self {
        self.line(format_args!("### {}", title))
    }

    /// `## title (Page P, N total)`
    pub fn page_heading(&mut self, title: impl Display, page: u32, item_count: Option<u64>) -> &mut Self {
        self.line(format_args!(
            "## {} (Page {}, {} total)",
            title,
            page,
            display_or(item_count, "")
        ))
    }

    /// `---` then `Page P of M`
    pub fn page_footer(&mut self, page: u32, page_count: Option<u64>) -> &mut Self {
        self.separator()
            .line(format_args!("Page {} of {}", page, display_or(page_count, "")))
    }

    /// `- **label:** value`
    pub fn field(&mut self, label: &str, value: impl Display) -> &mut Self {
        self.line(format_args!("- **{}:** {}", label, value))
    }

    /// Indented `  label: value` continuation of the previous bullet
    pub fn detail(&mut self, label: &str, value: impl Display) -> &mut Self {
        self.line(format_args!("  {}: {}", label, value))
    }

    pub fn separator(&mut self) -> &mut Self {
        self.line("---")
    }

    pub fn blank(&mut self) -> &mut Self {
        self.text.push('\n');
        self
    }

    pub fn line(&mut self, text: impl Display) -> &mut Self {
        self.text.push_str(&text.to_string());
        self.text.push('\n');
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn finish(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record_layout() {
        let mut report = Report::new();
        report
            .heading("Account Information")
            .field("Public Key", "01abc")
            .field("Balance", "1.000000000 CSPR");

        assert_eq!(
            report.finish(),
            "## Account Information\n- **Public Key:** 01abc\n- **Balance:** 1.000000000 CSPR\n"
        );
    }

    #[test]
    fn test_paged_layout() {
        let mut report = Report::new();
        report.page_heading("Accounts", 2, Some(42));
        report.separator().field("Public Key", "01abc").detail("Balance", "N/A");
        report.page_footer(2, Some(5));

        assert_eq!(
            report.finish(),
            "## Accounts (Page 2, 42 total)\n---\n- **Public Key:** 01abc\n  Balance: N/A\n---\nPage 2 of 5\n"
        );
    }

    #[test]
    fn test_missing_counts_render_empty() {
        let mut report = Report::new();
        report.page_heading("Blocks", 1, None).page_footer(1, None);

        assert_eq!(report.finish(), "## Blocks (Page 1,  total)\n---\nPage 1 of \n");
    }

    #[test]
    fn test_blank_and_subheading() {
        let mut report = Report::new();
        assert!(report.is_empty());
        report.line("Contract: abc").blank().subheading("Transfers (2)");

        assert_eq!(report.finish(), "Contract: abc\n\n### Transfers (2)\n");
    }
}
