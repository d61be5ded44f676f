//! Membership and team aggregation over the directory capability.

use tracing::{debug, info};

use crate::directory::OrgDirectory;
use crate::error::Result;
use crate::model::{MemberRecord, MemberTable, MembershipIndex};
use crate::paginate::fetch_all;

/// Builds the member id → team names index for the organization.
///
/// Teams are processed in listing order; a member on several teams
/// accumulates one name per membership, including duplicate names carried
/// by distinct team ids. Any page-fetch error aborts the aggregation with
/// no partial result.
pub fn team_index(directory: &impl OrgDirectory, org: &str) -> Result<MembershipIndex> {
    let teams = fetch_all(|page| directory.list_teams(org, page))?;
    info!(team_count = teams.len(), "fetched organization teams");

    let mut index = MembershipIndex::new();
    for team in teams {
        let members = fetch_all(|page| directory.list_team_members(team.id, page))?;
        debug!(team = %team.name, member_count = members.len(), "fetched team members");
        for member in members {
            index.entry(member.id).or_default().push(team.name.clone());
        }
    }
    Ok(index)
}

/// Builds the member table: one enriched record per organization member.
///
/// Enrichment issues one profile lookup per member, sequentially. A profile
/// without a display name leaves the record's name empty; the first lookup
/// or listing error aborts the whole aggregation.
pub fn member_table(directory: &impl OrgDirectory, org: &str) -> Result<MemberTable> {
    let members = fetch_all(|page| directory.list_members(org, page))?;
    info!(member_count = members.len(), "fetched organization members");

    let mut table = MemberTable::new();
    for member in members {
        let profile = directory.get_user(member.id)?;
        table.insert(
            member.id,
            MemberRecord {
                login: member.login,
                kind: member.kind,
                name: profile.name,
            },
        );
    }
    Ok(table)
}
