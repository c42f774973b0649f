use crate::cell::CellValue;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A sheet representing a 2D grid of cells (row-major storage)
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns (width of the widest row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the raw grid
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get a mutable reference to the raw grid
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }

    /// Header keys derived from the first row: trimmed, with repeated
    /// names de-duplicated by a `_1`/`_2` suffix (the first occurrence
    /// keeps the bare name). Matches the key scheme common to
    /// spreadsheet-to-JSON converters, which downstream column-name
    /// normalization expects.
    #[must_use]
    pub fn header_keys(&self) -> Vec<String> {
        let Some(first) = self.data.first() else {
            return Vec::new();
        };
        dedup_headers(first.iter().map(|c| c.as_str().trim().to_string()))
    }

    /// Row-object view: one ordered map per data row, keyed by
    /// [`Sheet::header_keys`]. Missing cells in ragged rows become
    /// `CellValue::Null`; columns with a blank header are skipped, and
    /// fully-blank rows (table separators in stacked sheets) produce no
    /// record at all.
    #[must_use]
    pub fn records(&self) -> Vec<IndexMap<String, CellValue>> {
        let keys = self.header_keys();
        if keys.is_empty() {
            return Vec::new();
        }

        self.data
            .iter()
            .skip(1)
            .filter(|row| !row.iter().all(CellValue::is_blank))
            .map(|row| {
                keys.iter()
                    .enumerate()
                    .filter(|(_, key)| !key.is_empty())
                    .map(|(idx, key)| {
                        let cell = row.get(idx).cloned().unwrap_or(CellValue::Null);
                        (key.clone(), cell)
                    })
                    .collect()
            })
            .collect()
    }
}

/// De-duplicate header names with `_N` suffixes, first occurrence bare.
fn dedup_headers<I: IntoIterator<Item = String>>(headers: I) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .map(|name| {
            let count = seen.entry(name.clone()).or_insert(0);
            let key = if *count == 0 || name.is_empty() {
                name.clone()
            } else {
                format!("{name}_{count}")
            };
            *count += 1;
            key
        })
        .collect()
}
