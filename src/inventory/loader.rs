//! CSV inventory loading
//!
//! Parses the client's tool inventory. The file must have a header row
//! with the columns `Tool Name`, `Category`, `Used By` and
//! `Criticality`; additional columns are ignored. Validation happens
//! before any research work starts, so a malformed file fails the run
//! up front.

use super::types::{Criticality, ToolRecord};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Columns every inventory file must carry
pub const REQUIRED_COLUMNS: [&str; 4] = ["Tool Name", "Category", "Used By", "Criticality"];

/// Errors raised while loading the inventory
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Inventory file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read inventory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse inventory: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Inventory contains no tool rows")]
    Empty,

    #[error("Row {row}: tool name is empty")]
    EmptyToolName { row: usize },
}

/// Loads and validates a tool inventory from a CSV file.
///
/// Rows are returned in file order. Rows where every required field is
/// blank are skipped; a row with a blank tool name but other data is an
/// error.
pub fn load_inventory(path: &Path) -> Result<Vec<ToolRecord>, InventoryError> {
    if !path.exists() {
        return Err(InventoryError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;

    // Validate the header before touching any row.
    let headers = reader.headers()?.clone();
    let mut column_index = [0usize; 4];
    for (i, column) in REQUIRED_COLUMNS.iter().enumerate() {
        match headers.iter().position(|h| h.trim() == *column) {
            Some(idx) => column_index[i] = idx,
            None => return Err(InventoryError::MissingColumn(column.to_string())),
        }
    }

    debug!("Inventory header validated: {:?}", headers);

    let mut records = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row?;
        let field = |i: usize| row.get(column_index[i]).unwrap_or("").trim().to_string();

        let name = field(0);
        let category = field(1);
        let used_by = field(2);
        let criticality = field(3);

        if name.is_empty() {
            if category.is_empty() && used_by.is_empty() && criticality.is_empty() {
                continue;
            }
            // Header row is row 0 in the file; data rows start at 2 for humans.
            return Err(InventoryError::EmptyToolName { row: row_number + 2 });
        }

        records.push(ToolRecord::new(
            name,
            category,
            used_by,
            Criticality::from_label(&criticality),
        ));
    }

    if records.is_empty() {
        return Err(InventoryError::Empty);
    }

    info!(
        "Loaded {} tools from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_inventory() {
        let file = write_csv(
            "Tool Name,Category,Used By,Criticality\n\
             Redtail CRM,CRM,Advisors,High\n\
             Orion,Portfolio Management,Operations,Medium\n",
        );

        let records = load_inventory(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Redtail CRM");
        assert_eq!(records[0].criticality, Criticality::High);
        assert_eq!(records[1].category, "Portfolio Management");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let file = write_csv(
            "Tool Name,Category,Notes,Used By,Criticality\n\
             Zoom,Video Conferencing,renewal due,All Staff,Low\n",
        );

        let records = load_inventory(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].used_by, "All Staff");
    }

    #[test]
    fn test_missing_column_rejected() {
        let file = write_csv("Tool Name,Category,Criticality\nZoom,Video,Low\n");

        let err = load_inventory(file.path()).unwrap_err();
        assert!(matches!(err, InventoryError::MissingColumn(ref c) if c == "Used By"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_inventory(Path::new("/nonexistent/tools.csv")).unwrap_err();
        assert!(matches!(err, InventoryError::FileNotFound(_)));
    }

    #[test]
    fn test_empty_inventory_rejected() {
        let file = write_csv("Tool Name,Category,Used By,Criticality\n");

        let err = load_inventory(file.path()).unwrap_err();
        assert!(matches!(err, InventoryError::Empty));
    }

    #[test]
    fn test_blank_rows_skipped() {
        let file = write_csv(
            "Tool Name,Category,Used By,Criticality\n\
             ,,,\n\
             Zoom,Video,All,Low\n",
        );

        let records = load_inventory(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_blank_name_with_data_rejected() {
        let file = write_csv(
            "Tool Name,Category,Used By,Criticality\n\
             ,CRM,Advisors,High\n",
        );

        let err = load_inventory(file.path()).unwrap_err();
        assert!(matches!(err, InventoryError::EmptyToolName { row: 2 }));
    }

    #[test]
    fn test_roundtrip_fidelity() {
        let file = write_csv(
            "Tool Name,Category,Used By,Criticality\n\
             Redtail CRM,CRM,Advisors,High\n\
             eMoney,Financial Planning,Planners,Mission Critical\n",
        );

        let records = load_inventory(file.path()).unwrap();
        let reserialized: Vec<[String; 4]> = records
            .iter()
            .map(|r| {
                [
                    r.name.clone(),
                    r.category.clone(),
                    r.used_by.clone(),
                    r.criticality.to_string(),
                ]
            })
            .collect();

        assert_eq!(
            reserialized,
            vec![
                [
                    "Redtail CRM".to_string(),
                    "CRM".to_string(),
                    "Advisors".to_string(),
                    "High".to_string()
                ],
                [
                    "eMoney".to_string(),
                    "Financial Planning".to_string(),
                    "Planners".to_string(),
                    "Mission Critical".to_string()
                ],
            ]
        );
    }
}
