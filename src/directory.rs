//! Capability interface over the remote source-hosting platform.

use crate::error::Result;
use crate::model::{MemberSummary, TeamSummary, UserProfile};

/// Fixed number of records requested per listing page.
pub const PAGE_SIZE: u32 = 30;

/// One page of a listing together with the server's next-page indicator.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of the next page to request, `None` once the listing is
    /// exhausted.
    pub next: Option<u32>,
}

/// Read access to an organization's directory data.
///
/// Implementations perform blocking I/O; every method either returns the
/// requested data or the first error encountered, with no retries.
pub trait OrgDirectory {
    /// Lists one page of the organization's members.
    fn list_members(&self, org: &str, page: u32) -> Result<Page<MemberSummary>>;

    /// Lists one page of the organization's teams.
    fn list_teams(&self, org: &str, page: u32) -> Result<Page<TeamSummary>>;

    /// Lists one page of a team's members.
    fn list_team_members(&self, team_id: u64, page: u32) -> Result<Page<MemberSummary>>;

    /// Fetches a single user's profile by account id.
    fn get_user(&self, id: u64) -> Result<UserProfile>;
}
