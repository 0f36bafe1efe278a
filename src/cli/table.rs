//! # ASCII Table Formatter
//!
//! Renders record listings as ASCII tables with box-drawing characters.
//!
//! ## Output Format
//!
//! ```text
//! +-----+-------+
//! | key | value |
//! +-----+-------+
//! |   1 | Alice |
//! |   2 | Bob   |
//! +-----+-------+
//! 2 records
//! ```
//!
//! ## Column Width Calculation
//!
//! Column widths are the maximum of the header length and the longest
//! value in the column, capped at [`MAX_COLUMN_WIDTH`] (longer values are
//! truncated with "..."). Keys are right-aligned, values left-aligned.

use std::fmt::Write;

use crate::database::Record;

const MAX_COLUMN_WIDTH: usize = 50;

pub struct TableFormatter {
    widths: [usize; 2],
    rows: Vec<[String; 2]>,
}

impl TableFormatter {
    pub fn new(records: &[Record]) -> Self {
        let mut widths = ["key".len(), "value".len()];

        let rows: Vec<[String; 2]> = records
            .iter()
            .map(|record| {
                let key = record.key.to_string();
                let value = clip(&record.value);
                widths[0] = widths[0].max(key.len());
                widths[1] = widths[1].max(value.len());
                [key, value]
            })
            .collect();

        Self { widths, rows }
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        self.write_separator(&mut output);
        let _ = writeln!(
            output,
            "| {:>kw$} | {:<vw$} |",
            "key",
            "value",
            kw = self.widths[0],
            vw = self.widths[1]
        );
        self.write_separator(&mut output);

        for [key, value] in &self.rows {
            let _ = writeln!(
                output,
                "| {:>kw$} | {:<vw$} |",
                key,
                value,
                kw = self.widths[0],
                vw = self.widths[1]
            );
        }

        self.write_separator(&mut output);
        let noun = if self.rows.len() == 1 { "record" } else { "records" };
        let _ = writeln!(output, "{} {}", self.rows.len(), noun);

        output
    }

    fn write_separator(&self, output: &mut String) {
        let _ = writeln!(
            output,
            "+-{}-+-{}-+",
            "-".repeat(self.widths[0]),
            "-".repeat(self.widths[1])
        );
    }
}

fn clip(value: &str) -> String {
    if value.chars().count() <= MAX_COLUMN_WIDTH {
        return value.to_string();
    }
    let clipped: String = value.chars().take(MAX_COLUMN_WIDTH - 3).collect();
    format!("{}...", clipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: i64, value: &str) -> Record {
        Record {
            key,
            value: value.to_string(),
        }
    }

    #[test]
    fn renders_rows_with_aligned_columns() {
        let table = TableFormatter::new(&[record(1, "Alice"), record(42, "Bob")]);
        let output = table.render();

        assert!(output.contains("| key | value |"));
        assert!(output.contains("|   1 | Alice |"));
        assert!(output.contains("|  42 | Bob   |"));
        assert!(output.ends_with("2 records\n"));
    }

    #[test]
    fn singular_record_count() {
        let table = TableFormatter::new(&[record(7, "only")]);

        assert!(table.render().ends_with("1 record\n"));
    }

    #[test]
    fn long_values_are_clipped() {
        let long = "x".repeat(80);
        let table = TableFormatter::new(&[record(1, &long)]);
        let output = table.render();

        assert!(output.contains("..."));
        assert!(!output.contains(&long));
    }
}
