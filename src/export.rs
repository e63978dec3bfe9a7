//! CSV export of the aligned matrix.

use std::path::Path;

use crate::error::IsochronError;
use crate::matrix::AlignedMatrix;

/// Write the matrix as a date-indexed CSV table, one column per competitor.
///
/// Rows cover the union of all column dates; cells outside a competitor's
/// span stay empty.
pub fn write_matrix_csv(matrix: &AlignedMatrix, path: &Path) -> Result<(), IsochronError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["date".to_string()];
    header.extend(matrix.columns().iter().map(|c| c.person_id.clone()));
    writer.write_record(&header)?;

    for date in matrix.dates() {
        let mut row = Vec::with_capacity(matrix.len() + 1);
        row.push(date.to_string());
        for column in matrix.columns() {
            row.push(
                column
                    .values
                    .get(&date)
                    .map(|value| value.to_string())
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
