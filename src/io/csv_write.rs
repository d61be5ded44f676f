use std::path::Path;

use crate::error::Result;

/// Writes the provided rows to the given path as a CSV file, header first.
///
/// Every record write and the final flush are checked; the first failing
/// write aborts with the underlying error.
pub fn write_report(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
