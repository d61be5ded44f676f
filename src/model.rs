use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// Organization member as returned by the membership listing.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberSummary {
    /// Numeric account id, unique and stable for the life of the account.
    pub id: u64,
    /// Login handle, unique within the platform.
    pub login: String,
    /// Account type, e.g. `"User"` or `"Bot"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Team as returned by the organization team listing.
///
/// The id only keys the membership lookup; just the name survives into the
/// output.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamSummary {
    pub id: u64,
    pub name: String,
}

/// Full user profile, fetched once per member to pick up the display name.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    /// Display name; absent for accounts that never set one.
    pub name: Option<String>,
}

/// Attributes retained for one organization member after enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub login: String,
    pub kind: String,
    pub name: Option<String>,
}

/// Member id → enriched record. The ordered map gives the ascending-id row
/// order required of the output for free.
pub type MemberTable = BTreeMap<u64, MemberRecord>;

/// Member id → names of the teams the member belongs to, in the order the
/// teams were processed. Duplicate names across distinct team ids are kept.
pub type MembershipIndex = HashMap<u64, Vec<String>>;
