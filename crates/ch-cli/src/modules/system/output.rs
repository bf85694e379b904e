use std::io::Write;
#[cfg(test)]
use std::sync::Mutex;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputMode {
    pub json: bool,
    pub plain: bool,
}

impl OutputMode {
    pub(crate) fn from_flags(json: bool, plain: bool) -> anyhow::Result<Self> {
        if json && plain {
            anyhow::bail!("invalid output mode (cannot combine --json and --plain)");
        }
        Ok(Self { json, plain })
    }
}

/// Sink for progress and outcome messages. Core flows report through this
/// and never touch the terminal themselves.
pub(crate) trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes every message to stderr so stdout stays parseable.
pub(crate) struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub(crate) fn new(mode: OutputMode) -> Self {
        Self { quiet: mode.json }
    }

    fn emit(&self, prefix: &str, message: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{prefix}{message}");
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        if !self.quiet {
            self.emit("", message);
        }
    }

    fn warn(&self, message: &str) {
        self.emit("Warning: ", message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            self.emit("", message);
        }
    }

    fn error(&self, message: &str) {
        self.emit("", message);
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_field(label: &str, value: &str) {
    println!("{:<20} {}", label, value);
}

/// Column-aligned table for text output; `--plain` gets tab-separated rows
/// without a header.
pub(crate) fn print_table(mode: OutputMode, headers: &[&str], rows: &[Vec<String>]) {
    for line in format_table(mode, headers, rows) {
        println!("{line}");
    }
}

fn format_table(mode: OutputMode, headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    if mode.plain {
        return rows.iter().map(|row| row.join("\t")).collect();
    }

    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(&widths, headers));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(render_row(&widths, &cells));
    }
    lines
}

fn render_row(widths: &[usize], cells: &[&str]) -> String {
    let last = cells.len().saturating_sub(1);
    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let width = widths.get(index).copied().unwrap_or(0);
            if index == last {
                cell.to_string()
            } else {
                format!("{:<width$}", cell, width = width)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReportLevel {
    Info,
    Warn,
    Success,
    Error,
}

#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingReporter {
    events: Mutex<Vec<(ReportLevel, String)>>,
}

#[cfg(test)]
impl RecordingReporter {
    pub(crate) fn events(&self) -> Vec<(ReportLevel, String)> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub(crate) fn has(&self, level: ReportLevel, needle: &str) -> bool {
        self.events()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }

    fn push(&self, level: ReportLevel, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push(ReportLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(ReportLevel::Warn, message);
    }

    fn success(&self, message: &str) {
        self.push(ReportLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ReportLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_all_but_last_column() {
        let rows = vec![
            vec!["00445790".to_string(), "TESCO PLC".to_string(), "active".to_string()],
            vec!["1".to_string(), "A".to_string(), "dissolved".to_string()],
        ];
        let lines = format_table(OutputMode::default(), &["NUMBER", "NAME", "STATUS"], &rows);
        assert_eq!(lines[0], "NUMBER    NAME       STATUS");
        assert_eq!(lines[1], "00445790  TESCO PLC  active");
        assert_eq!(lines[2], "1         A          dissolved");
    }

    #[test]
    fn plain_table_is_tab_separated() {
        let mode = OutputMode {
            json: false,
            plain: true,
        };
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        assert_eq!(format_table(mode, &["X", "Y"], &rows), vec!["a\tb".to_string()]);
    }

    #[test]
    fn json_and_plain_are_exclusive() {
        assert!(OutputMode::from_flags(true, true).is_err());
        assert_eq!(
            OutputMode::from_flags(true, false).expect("json"),
            OutputMode {
                json: true,
                plain: false
            }
        );
    }
}
