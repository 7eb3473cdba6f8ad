//! Personnel roster: owner display name → team/part label

use std::collections::HashMap;

use orgboard_domain::config::RosterTeams;
use orgboard_domain::constants::WHOLE_TEAM_PART;
use tracing::debug;

/// Injected name → label map.
///
/// Labels are `"<team> <part>"`, or just `"<team>"` when the part is
/// `"전체"` (the whole team).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoster {
    labels: HashMap<String, String>,
}

impl TeamRoster {
    /// Build from a team → part → names structure.
    ///
    /// A name listed under more than one part keeps its first label in
    /// team/part key order. Names carrying an uppercase disambiguation
    /// suffix (`이윤지B`) also answer to the bare name unless another entry
    /// already holds it.
    pub fn from_teams(teams: &RosterTeams) -> Self {
        let mut labels = HashMap::new();
        for (team, parts) in teams {
            for (part, names) in parts {
                let label = team_part_label(team, part);
                for name in names {
                    let name = name.trim();
                    if name.is_empty() {
                        continue;
                    }
                    if labels.contains_key(name) {
                        debug!(name, "duplicate roster entry ignored");
                        continue;
                    }
                    labels.insert(name.to_string(), label.clone());
                }
            }
        }

        let aliases: Vec<(String, String)> = labels
            .iter()
            .filter_map(|(name, label)| Some((strip_suffix(name)?.to_string(), label.clone())))
            .collect();
        for (alias, label) in aliases {
            if labels.contains_key(&alias) {
                debug!(alias = %alias, "suffix alias shadowed by roster entry");
                continue;
            }
            labels.insert(alias, label);
        }
        Self { labels }
    }

    pub fn from_pairs<I, N, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        Self { labels: pairs.into_iter().map(|(n, l)| (n.into(), l.into())).collect() }
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// `이윤지B` → `이윤지`. Only strips a trailing run of ASCII uppercase
/// letters that follows a non-ASCII name.
fn strip_suffix(name: &str) -> Option<&str> {
    let base = name.trim_end_matches(|c: char| c.is_ascii_uppercase());
    let stripped = base.len() < name.len() && base.chars().last().is_some_and(|c| !c.is_ascii());
    stripped.then_some(base)
}

fn team_part_label(team: &str, part: &str) -> String {
    let (team, part) = (team.trim(), part.trim());
    if part.is_empty() || part == WHOLE_TEAM_PART {
        team.to_string()
    } else {
        format!("{team} {part}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn whole_team_part_uses_team_name_only() {
        let mut teams = RosterTeams::new();
        teams.insert(
            "공공교육팀".into(),
            BTreeMap::from([("전체".to_string(), vec!["이준석".to_string()])]),
        );
        teams.insert(
            "기업교육 1팀".into(),
            BTreeMap::from([("1파트".to_string(), vec![" 김솔이 ".to_string(), String::new()])]),
        );

        let roster = TeamRoster::from_teams(&teams);
        assert_eq!(roster.lookup("이준석"), Some("공공교육팀"));
        assert_eq!(roster.lookup("김솔이"), Some("기업교육 1팀 1파트"));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn suffixed_name_also_answers_to_bare_name() {
        let mut teams = RosterTeams::new();
        teams.insert(
            "기업교육 2팀".into(),
            BTreeMap::from([("1파트".to_string(), vec!["이윤지B".to_string(), "Tom".to_string()])]),
        );
        teams.insert(
            "공공교육팀".into(),
            BTreeMap::from([("전체".to_string(), vec!["김민수".to_string(), "김민수A".to_string()])]),
        );

        let roster = TeamRoster::from_teams(&teams);
        assert_eq!(roster.lookup("이윤지B"), Some("기업교육 2팀 1파트"));
        assert_eq!(roster.lookup("이윤지"), Some("기업교육 2팀 1파트"));
        assert_eq!(roster.lookup("김민수"), Some("공공교육팀"));
        assert_eq!(roster.lookup("To"), None);
    }

    #[test]
    fn suffix_stripping_needs_a_non_ascii_stem() {
        assert_eq!(strip_suffix("이윤지B"), Some("이윤지"));
        assert_eq!(strip_suffix("이윤지"), None);
        assert_eq!(strip_suffix("ABC"), None);
        assert_eq!(strip_suffix("Tom"), None);
    }
}
