use std::collections::HashMap;

use crate::error::{TermFoldError, TermFoldResult};

/// Column-indexed view over one tab-separated file with a header row.
#[derive(Debug)]
pub struct TsvFile {
    columns: HashMap<String, usize>,
    rows: Vec<(usize, Vec<String>)>,
}

impl TsvFile {
    /// Parse file contents, requiring every column in `required` to be
    /// present in the header. Blank lines are skipped; remaining rows keep
    /// their 1-based line number for error reporting.
    pub fn parse(contents: &str, required: &[&str]) -> TermFoldResult<Self> {
        let mut lines = contents.lines().enumerate();

        let header = match lines.next() {
            Some((_, line)) if !line.trim().is_empty() => line,
            _ => {
                return Err(TermFoldError::LoadError(
                    "file is empty or has no header row".to_string(),
                ))
            }
        };

        let columns: HashMap<String, usize> = header
            .split('\t')
            .enumerate()
            .map(|(idx, name)| (name.trim().to_string(), idx))
            .collect();

        for name in required {
            if !columns.contains_key(*name) {
                return Err(TermFoldError::LoadError(format!(
                    "header is missing required column '{}'",
                    name
                )));
            }
        }

        let mut rows = Vec::new();
        for (idx, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let cells = line.split('\t').map(|c| c.to_string()).collect();
            rows.push((idx + 1, cells));
        }

        Ok(Self { columns, rows })
    }

    pub fn rows(&self) -> impl Iterator<Item = TsvRow<'_>> {
        self.rows.iter().map(move |(line, cells)| TsvRow {
            columns: &self.columns,
            line: *line,
            cells: cells.as_slice(),
        })
    }

    pub fn row_count(&self) -> u64 {
        self.rows.len() as u64
    }
}

/// One data row, addressed by column name.
pub struct TsvRow<'a> {
    columns: &'a HashMap<String, usize>,
    line: usize,
    cells: &'a [String],
}

impl<'a> TsvRow<'a> {
    pub fn line(&self) -> usize {
        self.line
    }

    /// The raw cell under `column`. Errors if the row is too short for the
    /// header it was parsed with.
    pub fn cell(&self, column: &str) -> TermFoldResult<&'a str> {
        let idx = *self.columns.get(column).ok_or_else(|| {
            TermFoldError::LoadError(format!("unknown column '{}'", column))
        })?;
        self.cells.get(idx).map(|s| s.as_str()).ok_or_else(|| {
            TermFoldError::LoadError(format!(
                "row at line {} has {} columns, column '{}' is missing",
                self.line,
                self.cells.len(),
                column
            ))
        })
    }

    /// A required cell that must not be blank.
    pub fn required(&self, column: &str) -> TermFoldResult<&'a str> {
        let value = self.cell(column)?.trim();
        if value.is_empty() {
            return Err(TermFoldError::LoadError(format!(
                "row at line {} has a blank '{}' value",
                self.line, column
            )));
        }
        Ok(value)
    }

    /// An optional cell: blank (or whitespace-only) becomes `None`, the way
    /// the source files use empty strings for absent values. A trailing
    /// cell dropped entirely from the line (TSV writers often trim empty
    /// trailing tabs) also counts as absent.
    pub fn optional(&self, column: &str) -> TermFoldResult<Option<String>> {
        let idx = *self.columns.get(column).ok_or_else(|| {
            TermFoldError::LoadError(format!("unknown column '{}'", column))
        })?;
        let value = match self.cells.get(idx) {
            Some(cell) => cell.trim(),
            None => return Ok(None),
        };
        if value.is_empty() {
            Ok(None)
        } else {
            Ok(Some(value.to_string()))
        }
    }
}
