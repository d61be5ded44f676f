//! Join of the member and team aggregates into ordered output rows.

use crate::model::{MemberTable, MembershipIndex};

/// Column labels emitted as the first row of the report.
pub const HEADER: [&str; 5] = ["ID", "Login", "Name", "Type", "Teams"];

/// Produces the header row followed by one row per member, ascending by
/// numeric id.
///
/// A member without an entry in the membership index gets an empty Teams
/// field; a missing display name becomes an empty Name field.
pub fn build_rows(members: &MemberTable, index: &MembershipIndex) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(members.len() + 1);
    rows.push(HEADER.iter().map(ToString::to_string).collect());

    for (id, record) in members {
        let teams = index.get(id).map(|names| names.join(",")).unwrap_or_default();
        rows.push(vec![
            id.to_string(),
            record.login.clone(),
            record.name.clone().unwrap_or_default(),
            record.kind.clone(),
            teams,
        ]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::{HEADER, build_rows};
    use crate::model::{MemberRecord, MemberTable, MembershipIndex};

    fn record(login: &str, name: Option<&str>) -> MemberRecord {
        MemberRecord {
            login: login.to_string(),
            kind: "User".to_string(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn emits_header_then_one_row_per_member() {
        let mut members = MemberTable::new();
        members.insert(2, record("bob", None));
        members.insert(1, record("alice", Some("Alice A")));

        let rows = build_rows(&members, &MembershipIndex::new());
        assert_eq!(rows.len(), members.len() + 1);
        assert_eq!(rows[0], HEADER.map(str::to_string));
    }

    #[test]
    fn orders_rows_ascending_by_numeric_id() {
        let mut members = MemberTable::new();
        for id in [42, 7, 1000, 3] {
            members.insert(id, record(&format!("user{id}"), None));
        }

        let rows = build_rows(&members, &MembershipIndex::new());
        let ids: Vec<u64> = rows[1..]
            .iter()
            .map(|row| row[0].parse().expect("numeric id"))
            .collect();
        assert_eq!(ids, vec![3, 7, 42, 1000]);
    }

    #[test]
    fn member_absent_from_index_gets_empty_teams_field() {
        let mut members = MemberTable::new();
        members.insert(1, record("alice", Some("Alice A")));
        members.insert(2, record("bob", None));
        let index = MembershipIndex::from([(1, vec!["core".to_string()])]);

        let rows = build_rows(&members, &index);
        assert_eq!(rows[1], vec!["1", "alice", "Alice A", "User", "core"]);
        assert_eq!(rows[2], vec!["2", "bob", "", "User", ""]);
    }

    #[test]
    fn joins_multiple_team_names_with_a_literal_comma() {
        let mut members = MemberTable::new();
        members.insert(5, record("carol", None));
        let index = MembershipIndex::from([(5, vec!["a".to_string(), "b".to_string()])]);

        let rows = build_rows(&members, &index);
        assert_eq!(rows[1][4], "a,b");
    }
}
