use crate::util::consolidate::RosterRow;

/// Ranks both teams' rows for the cross-team view: blank members dropped,
/// highest total first, ties broken by fewer runners left on base. The sort
/// is stable, so full ties keep input order (team A before team B, slot order
/// within a team).
pub fn rank(rows_a: &[RosterRow], rows_b: &[RosterRow]) -> Vec<RosterRow> {
    let mut ranked = rows_a
        .iter()
        .chain(rows_b)
        .filter(|row| !row.member.trim().is_empty())
        .cloned()
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then(a.left_on_base.cmp(&b.left_on_base))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(member: &str, team: &str, total: i64, left_on_base: i64) -> RosterRow {
        RosterRow {
            slot: 1,
            member: member.to_owned(),
            names: String::new(),
            game_scores: [total, 0, 0],
            total,
            left_on_base,
            team: team.to_owned(),
        }
    }

    #[test]
    fn sorts_by_total_descending() {
        let a = [row("Friz", "A", 3, 0), row("Rife", "A", 7, 5)];
        let b = [row("Childs", "B", 5, 2)];
        let ranked = rank(&a, &b);
        let members = ranked.iter().map(|r| r.member.as_str()).collect::<Vec<_>>();
        assert_eq!(members, ["Rife", "Childs", "Friz"]);
    }

    #[test]
    fn ties_rank_fewer_runners_stranded_first() {
        let a = [row("Friz", "A", 4, 6)];
        let b = [row("Childs", "B", 4, 1)];
        let ranked = rank(&a, &b);
        assert_eq!(ranked[0].member, "Childs");
        assert_eq!(ranked[1].member, "Friz");
    }

    #[test]
    fn full_ties_keep_input_order() {
        let a = [row("Friz", "A", 2, 2), row("Rife", "A", 2, 2)];
        let b = [row("Childs", "B", 2, 2)];
        let members = rank(&a, &b)
            .into_iter()
            .map(|r| r.member)
            .collect::<Vec<_>>();
        assert_eq!(members, ["Friz", "Rife", "Childs"]);
    }

    #[test]
    fn blank_members_are_excluded_regardless_of_score() {
        let a = [row("", "A", 99, 0), row("  ", "A", 42, 0), row("Friz", "A", -3, 0)];
        let ranked = rank(&a, &[]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].member, "Friz");
    }
}
