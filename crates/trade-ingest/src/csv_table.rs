use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use trade_model::{Result, TradeError};

/// A delimited file read as strings: one header row plus data rows.
///
/// Rows are padded or truncated to the header width. All-blank rows are not
/// kept, but they still count towards the numbering of the rows after them.
/// Empty lines are not rows.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// One data row and where it sits in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based record position after the header row.
    pub number: usize,
    pub cells: Vec<String>,
}

impl RawTable {
    /// Position of a header, matching exactly first and then ignoring case.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .or_else(|| {
                self.headers
                    .iter()
                    .position(|header| header.eq_ignore_ascii_case(name))
            })
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a comma-delimited file. The first non-blank row is the header.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).map_err(|e| TradeError::io(path, e))?;
    read_csv_table_from_reader(file, path)
}

/// Reads comma-delimited data from any reader; `path` is only used in errors.
pub fn read_csv_table_from_reader<R: Read>(input: R, path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut headers: Option<Vec<String>> = None;
    let mut header_record = 0;
    let mut rows: Vec<RawRow> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TradeError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let position = record.position().map(csv::Position::record);
        let Some(header) = headers.as_ref() else {
            headers = Some(record.iter().map(normalize_header).collect());
            header_record = position.unwrap_or(0);
            continue;
        };
        let previous = rows.last().map_or(0, |row| row.number);
        let number = position
            .and_then(|position| usize::try_from(position.saturating_sub(header_record)).ok())
            .filter(|&number| number > previous)
            .unwrap_or(previous + 1);
        let mut cells = Vec::with_capacity(header.len());
        for idx in 0..header.len() {
            cells.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        rows.push(RawRow { number, cells });
    }
    Ok(RawTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_whitespace_is_collapsed() {
        assert_eq!(normalize_header("  Value   ($US) "), "Value ($US)");
        assert_eq!(normalize_header("\u{feff}Time"), "Time");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn short_rows_are_padded() {
        let data = "Time,Country,Value ($US)\n2021,Canada\n";
        let table = read_csv_table_from_reader(data.as_bytes(), Path::new("inline.csv")).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].number, 1);
        assert_eq!(table.rows[0].cells, vec!["2021", "Canada", ""]);
    }

    #[test]
    fn blank_rows_are_skipped() {
        let data = "\n,,\nTime,Country,Value ($US)\n,,\n2021,Canada,\"1,000\"\n";
        let table = read_csv_table_from_reader(data.as_bytes(), Path::new("inline.csv")).unwrap();
        assert_eq!(table.headers, vec!["Time", "Country", "Value ($US)"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].number, 2);
        assert_eq!(table.rows[0].cells[2], "1,000");
    }

    #[test]
    fn row_numbers_count_skipped_blank_rows() {
        let data = "Time,Country,Value ($US)\n2021,Canada,1\n\n,,\n2021,Mexico,2\n";
        let table = read_csv_table_from_reader(data.as_bytes(), Path::new("inline.csv")).unwrap();
        let numbers: Vec<usize> = table.rows.iter().map(|row| row.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn column_lookup_falls_back_to_case_insensitive() {
        let table = RawTable {
            headers: vec!["time".to_string(), "Country".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(table.column_index("Country"), Some(1));
        assert_eq!(table.column_index("Time"), Some(0));
        assert_eq!(table.column_index("Value"), None);
    }
}
