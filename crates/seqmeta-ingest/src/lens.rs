//! Lens serial-number resolution.
//!
//! The lens table is a flat CSV mapping lens serial IDs to focal-length
//! labels, e.g. `Z50108175, 29mm`. A row matches a serial ID when any of
//! its fields equals the ID, either verbatim or after both sides have a
//! leading `Z` prefix stripped; the resolved value is the first field in
//! that row containing the substring `mm`.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A loaded lens table: rows of trimmed CSV fields.
#[derive(Debug, Clone)]
pub struct LensTable {
    rows: Vec<Vec<String>>,
}

impl LensTable {
    /// Load the table from a CSV file. The file has no header row and rows
    /// may have varying field counts.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| IngestError::LensTable {
                path: path.to_path_buf(),
                source: e,
            })?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| IngestError::LensTable {
                path: path.to_path_buf(),
                source: e,
            })?;
            let row: Vec<String> = record.iter().map(|cell| cell.trim().to_string()).collect();
            if row.iter().all(String::is_empty) {
                continue;
            }
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Look up a serial ID. Returns the first `mm` field of the first
    /// matching row, in table order.
    #[must_use]
    pub fn lookup(&self, serial_id: &str) -> Option<&str> {
        let wanted = normalize_serial(serial_id);
        for row in &self.rows {
            let matched = row
                .iter()
                .any(|field| field == serial_id || normalize_serial(field) == wanted);
            if matched {
                return row
                    .iter()
                    .map(String::as_str)
                    .find(|field| field.contains("mm"));
            }
        }
        None
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Resolves lens serial IDs to focal-length labels, loading the table
/// lazily on the first `lens_type` key encountered.
#[derive(Debug, Default)]
pub struct LensResolver {
    path: Option<PathBuf>,
    table: Option<LensTable>,
}

impl LensResolver {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path, table: None }
    }

    /// True when a lens table path was configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.path.is_some()
    }

    /// Resolve a serial ID to a focal-length label.
    ///
    /// Returns `Ok(None)` when no table is configured or no row matches.
    /// A configured-but-unreadable table is a hard error: lens-aware
    /// output cannot be produced without it.
    pub fn resolve(&mut self, serial_id: &str) -> Result<Option<String>> {
        let Some(path) = self.path.clone() else {
            return Ok(None);
        };
        if self.table.is_none() {
            let table = LensTable::load(&path)?;
            debug!(path = %path.display(), rows = table.row_count(), "loaded lens table");
            self.table = Some(table);
        }
        match &self.table {
            Some(table) => Ok(table.lookup(serial_id).map(ToOwned::to_owned)),
            None => Ok(None),
        }
    }
}

/// Strip one leading `Z` (case-insensitive) from serial IDs that are not
/// purely numeric. Numeric-only IDs pass through untouched.
fn normalize_serial(id: &str) -> &str {
    if id.is_empty() || id.chars().all(|ch| ch.is_ascii_digit()) {
        return id;
    }
    id.strip_prefix(['Z', 'z']).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn resolves_prefixed_id_against_prefixed_row() {
        let file = table_file("Z50108175, 29mm\nZ50200341, 50mm\n");
        let mut resolver = LensResolver::new(Some(file.path().to_path_buf()));
        assert_eq!(
            resolver.resolve("Z50108175").unwrap(),
            Some("29mm".to_string())
        );
    }

    #[test]
    fn resolves_stripped_id_against_prefixed_row() {
        let file = table_file("Z50108175, 29mm\n");
        let mut resolver = LensResolver::new(Some(file.path().to_path_buf()));
        assert_eq!(
            resolver.resolve("50108175").unwrap(),
            Some("29mm".to_string())
        );
    }

    #[test]
    fn first_matching_row_wins() {
        let file = table_file("Z50108175, 29mm\nZ50108175, 35mm\n");
        let mut resolver = LensResolver::new(Some(file.path().to_path_buf()));
        assert_eq!(
            resolver.resolve("Z50108175").unwrap(),
            Some("29mm".to_string())
        );
    }

    #[test]
    fn unknown_id_returns_none() {
        let file = table_file("Z50108175, 29mm\n");
        let mut resolver = LensResolver::new(Some(file.path().to_path_buf()));
        assert_eq!(resolver.resolve("Z99999999").unwrap(), None);
    }

    #[test]
    fn no_table_configured_returns_none() {
        let mut resolver = LensResolver::new(None);
        assert_eq!(resolver.resolve("Z50108175").unwrap(), None);
        assert!(!resolver.is_configured());
    }

    #[test]
    fn missing_table_file_is_fatal() {
        let mut resolver = LensResolver::new(Some(PathBuf::from("/no/such/lenses.csv")));
        let err = resolver.resolve("Z50108175").unwrap_err();
        assert!(matches!(err, IngestError::LensTable { .. }));
    }

    #[test]
    fn mm_field_is_selected_not_first_field() {
        // The match field and the mm field can appear in any column.
        let file = table_file("29mm, Z50108175, spare\n");
        let mut resolver = LensResolver::new(Some(file.path().to_path_buf()));
        assert_eq!(
            resolver.resolve("Z50108175").unwrap(),
            Some("29mm".to_string())
        );
    }

    #[test]
    fn normalize_serial_rules() {
        assert_eq!(normalize_serial("Z50108175"), "50108175");
        assert_eq!(normalize_serial("z50108175"), "50108175");
        // Purely numeric IDs are not stripped.
        assert_eq!(normalize_serial("50108175"), "50108175");
        // Non-leading Z stays put.
        assert_eq!(normalize_serial("A50Z08175"), "A50Z08175");
    }
}
