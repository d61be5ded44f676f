use std::path::Path;

use tracing::{info, instrument};

use crate::aggregate::{member_table, team_index};
use crate::directory::OrgDirectory;
use crate::error::Result;
use crate::io::csv_write;
use crate::report::build_rows;

/// Exports the organization's member and team roster to a CSV file.
///
/// Both aggregations run to completion before the output file is created,
/// so a fetch failure leaves the destination untouched.
#[instrument(
    level = "info",
    skip_all,
    fields(org = %org, output = %output.display())
)]
pub fn export_org(directory: &impl OrgDirectory, org: &str, output: &Path) -> Result<()> {
    let index = team_index(directory, org)?;
    let members = member_table(directory, org)?;
    let rows = build_rows(&members, &index);
    info!(row_count = rows.len() - 1, "roster assembled");
    csv_write::write_report(output, &rows)
}
