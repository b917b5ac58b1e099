use crate::display::Terminal;
use console::Style;

/// Width of the report, including the header rule
pub const LINE_LEN: usize = 72;
const INDENT: usize = 4;
const PERCENT_WIDTH: usize = 9;
const VALUE_WIDTH: usize = 11;
const LABEL_WIDTH: usize = LINE_LEN - PERCENT_WIDTH - VALUE_WIDTH;

/// Accumulates aligned report lines: label, percentage column, value column
pub struct ReportWriter<'a> {
    terminal: &'a Terminal,
    out: String,
}

impl<'a> ReportWriter<'a> {
    pub fn new(terminal: &'a Terminal) -> Self {
        Self {
            terminal,
            out: String::new(),
        }
    }

    /// Section heading with a value in the value column
    pub fn title(&mut self, label: &str, value: &str) {
        self.row(0, label, "", value, None);
    }

    pub fn title_pct(&mut self, label: &str, percent: &str, value: &str) {
        self.row(0, label, percent, value, None);
    }

    /// Section heading without a value
    pub fn heading(&mut self, label: &str) {
        let text = self.terminal.paint(label, &self.terminal.heading_style());
        self.out.push_str(&text);
        self.out.push('\n');
    }

    /// Heading whose value is a health word colored by state
    pub fn status(&mut self, label: &str, status: &str, healthy: bool) {
        let style = self.terminal.health_style(healthy);
        self.row(0, label, "", status, Some(style));
    }

    pub fn line(&mut self, label: &str, value: &str) {
        self.row(INDENT, label, "", value, None);
    }

    pub fn line_pct(&mut self, label: &str, percent: &str, value: &str) {
        self.row(INDENT, label, percent, value, None);
    }

    /// Unaligned text, written as is
    pub fn text(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn row(&mut self, indent: usize, label: &str, percent: &str, value: &str, style: Option<Style>) {
        let label_width = LABEL_WIDTH.saturating_sub(indent);
        let mut value = format!("{:>width$}", value, width = VALUE_WIDTH);
        if let Some(style) = style {
            value = self.terminal.paint(&value, &style);
        }
        let line = format!(
            "{:indent$}{:<label_width$}{:>percent_width$}{}",
            "",
            label,
            percent,
            value,
            indent = indent,
            label_width = label_width,
            percent_width = PERCENT_WIDTH,
        );
        self.out.push_str(line.trim_end());
        self.out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_align_to_line_length() {
        let terminal = Terminal::plain();
        let mut writer = ReportWriter::new(&terminal);
        writer.title("ARC size (current):", "15.4 GiB");
        writer.line_pct("Target size (adaptive):", "100.0 %", "15.6 GiB");
        writer.line_pct("Demand data:", "43.3 %", "101.5M");
        writer.line("Chain max:", "5");

        let out = writer.finish();
        for line in out.lines() {
            assert_eq!(line.len(), LINE_LEN, "line {:?}", line);
        }
        assert!(out.starts_with("ARC size (current):"));
        assert!(out.contains("\n    Target size (adaptive):"));
        assert!(out.contains("\n    Demand data:"));
    }

    #[test]
    fn test_heading_and_text_are_verbatim() {
        let terminal = Terminal::plain();
        let mut writer = ReportWriter::new(&terminal);
        writer.heading("ARC hash breakdown:");
        writer.text("    zfs_arc_max=0");
        writer.blank();
        assert_eq!(writer.finish(), "ARC hash breakdown:\n    zfs_arc_max=0\n\n");
    }

    #[test]
    fn test_status_plain() {
        let terminal = Terminal::plain();
        let mut writer = ReportWriter::new(&terminal);
        writer.status("ARC status:", "HEALTHY", true);
        let out = writer.finish();
        assert!(out.ends_with("HEALTHY\n"));
        assert_eq!(out.trim_end().len(), LINE_LEN);
    }
}
