use std::{fs, path::Path};

use eyre::WrapErr;
use serde::Deserialize;
use tabletree_common::{
    TableMerkleTree,
    errors::EncodingError,
    types::{RowSchema, Value},
};
use tracing::{debug, info};

/// Table description read by the CLI.
///
/// ```json
/// { "types": ["string", "uint256"], "rows": [["acura", 2013], ["audi", "0x7dd"]] }
/// ```
#[derive(Debug, Deserialize)]
pub struct TableFile {
    pub types: RowSchema,
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl TableFile {
    pub fn read(path: &Path) -> eyre::Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read table file {}", path.display()))?;
        Self::from_json(&contents)
            .wrap_err_with(|| format!("Failed to parse table file {}", path.display()))
    }

    pub fn from_json(contents: &str) -> eyre::Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Replays every row, in file order, into a fresh tree.
    pub fn build_tree(&self) -> eyre::Result<TableMerkleTree> {
        let mut tree = TableMerkleTree::new(self.types.clone());
        for (idx, row) in self.rows.iter().enumerate() {
            let id = idx + 1;
            let values = self
                .row_values(row)
                .wrap_err_with(|| format!("Row {id} does not match the table types"))?;
            tree.append(&values)
                .wrap_err_with(|| format!("Failed to append row {id}"))?;
            debug!(id, "Loaded row");
        }
        info!(rows = tree.len(), types = self.types.len(), "Table loaded");
        Ok(tree)
    }

    fn row_values(&self, row: &[serde_json::Value]) -> Result<Vec<Value>, EncodingError> {
        if row.len() != self.types.len() {
            return Err(EncodingError::FieldCount {
                expected: self.types.len(),
                actual: row.len(),
            });
        }
        row.iter()
            .zip(self.types.types())
            .map(|(value, ty)| Value::from_json(value, *ty))
            .collect()
    }
}
