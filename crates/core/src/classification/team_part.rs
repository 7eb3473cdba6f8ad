//! Team/part text and DRI flag from owner name lists

use orgboard_domain::constants::{TEAM_PART_SEPARATOR, UNKNOWN_TEAM_PART};
use orgboard_domain::{Dri, EnrichedWonSummaryRow, TeamPartSummary, WonSummaryRow};

use super::roster::TeamRoster;

/// Resolve one owner name to its label.
///
/// A trailing ASCII letter is a disambiguation suffix (`이윤지B`); it is
/// stripped and the lookup retried when the full name is not on the
/// roster. Unknown names map to `"미확인"`.
pub fn resolve_team_part<'a>(roster: &'a TeamRoster, name: &str) -> &'a str {
    if let Some(label) = roster.lookup(name) {
        return label;
    }
    let mut chars = name.chars();
    match chars.next_back() {
        Some(last) if last.is_ascii_alphabetic() => {
            roster.lookup(chars.as_str()).unwrap_or(UNKNOWN_TEAM_PART)
        }
        _ => UNKNOWN_TEAM_PART,
    }
}

/// Summarize which team/parts own a set of deals.
///
/// - blank names are skipped; no names at all yields empty text and `-`
/// - distinct labels keep first-seen order and are joined with `" / "`
/// - DRI is `O` for a single label and `X` for more than one
pub fn compute_team_part_summary<S: AsRef<str>>(roster: &TeamRoster, owners: &[S]) -> TeamPartSummary {
    let mut labels: Vec<&str> = Vec::new();
    for owner in owners {
        let name = owner.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        let label = resolve_team_part(roster, name);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    let dri = match labels.len() {
        0 => Dri::Unassigned,
        1 => Dri::Single,
        _ => Dri::Split,
    };
    TeamPartSummary { team_part_text: labels.join(TEAM_PART_SEPARATOR), dri }
}

/// Attach team/part text and DRI (from `owners2025`) to won summary rows.
pub fn enrich_won_summary(roster: &TeamRoster, rows: Vec<WonSummaryRow>) -> Vec<EnrichedWonSummaryRow> {
    rows.into_iter()
        .map(|row| {
            let summary = compute_team_part_summary(roster, &row.owners2025);
            EnrichedWonSummaryRow { row, team_part_text: summary.team_part_text, dri: summary.dri }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> TeamRoster {
        TeamRoster::from_pairs([
            ("김솔이", "기업교육 1팀 1파트"),
            ("김정은", "기업교육 1팀 1파트"),
            ("강지선", "기업교육 1팀 2파트"),
            ("정다혜", "기업교육 2팀 2파트"),
            ("이윤지", "기업교육 2팀 1파트"),
        ])
    }

    #[test]
    fn same_part_is_single_dri() {
        let got = compute_team_part_summary(&roster(), &["김솔이", "김정은"]);
        assert_eq!(got.team_part_text, "기업교육 1팀 1파트");
        assert_eq!(got.dri, Dri::Single);
    }

    #[test]
    fn different_parts_are_split() {
        let got = compute_team_part_summary(&roster(), &["강지선", "정다혜"]);
        assert_eq!(got.team_part_text, "기업교육 1팀 2파트 / 기업교육 2팀 2파트");
        assert_eq!(got.dri, Dri::Split);
    }

    #[test]
    fn trailing_letter_suffix_is_stripped() {
        let got = compute_team_part_summary(&roster(), &["이윤지B"]);
        assert_eq!(got.team_part_text, "기업교육 2팀 1파트");
        assert_eq!(got.dri, Dri::Single);
    }

    #[test]
    fn unknown_names_share_the_unknown_label() {
        let got = compute_team_part_summary(&roster(), &["홍길동", "김솔이", "임꺽정"]);
        assert_eq!(got.team_part_text, "미확인 / 기업교육 1팀 1파트");
        assert_eq!(got.dri, Dri::Split);
        assert_eq!(resolve_team_part(&roster(), "홍길동7"), UNKNOWN_TEAM_PART);
    }

    #[test]
    fn empty_and_blank_input() {
        let none: [&str; 0] = [];
        assert_eq!(compute_team_part_summary(&roster(), &none), TeamPartSummary::default());
        let blank = compute_team_part_summary(&roster(), &["  ", ""]);
        assert_eq!(blank.team_part_text, "");
        assert_eq!(blank.dri, Dri::Unassigned);
    }

    #[test]
    fn enrich_uses_owners2025_only() {
        let row = WonSummaryRow {
            upper_org: "인사팀".into(),
            owners: vec!["정다혜".into()],
            owners2025: vec!["김솔이".into()],
            ..WonSummaryRow::default()
        };
        let enriched = enrich_won_summary(&roster(), vec![row]);
        assert_eq!(enriched[0].team_part_text, "기업교육 1팀 1파트");
        assert_eq!(enriched[0].dri, Dri::Single);
    }
}
