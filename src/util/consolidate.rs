use core::fmt::Write;

use crate::util::scoring::{SlotScores, LINEUP_SLOTS};

pub const GAMES_PER_ROSTER: usize = 3;

/// One roster slot across up to three games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub slot: u8,
    /// Assigned team member; blank for an unused slot.
    pub member: String,
    /// `G1:`/`G2:`/`G3:` lines of semicolon-joined batter names.
    pub names: String,
    pub game_scores: [i64; GAMES_PER_ROSTER],
    pub total: i64,
    pub left_on_base: i64,
    pub team: String,
}

/// Combines up to three games' slot scores into the 9 roster rows, in slot
/// order. Missing games or slots default to zero score, zero LOB and an empty
/// name list; there are no failure modes.
pub fn consolidate(
    games: [&SlotScores; GAMES_PER_ROSTER],
    order: &[String; LINEUP_SLOTS as usize],
    team: &str,
) -> Vec<RosterRow> {
    (1..=LINEUP_SLOTS)
        .map(|slot| {
            let mut names = String::new();
            let mut game_scores = [0; GAMES_PER_ROSTER];
            let mut total = 0;
            let mut left_on_base = 0;
            for (idx, game) in games.iter().enumerate() {
                if idx > 0 {
                    names.push('\n');
                }
                let _ = write!(names, "G{}: ", idx + 1);
                if let Some(record) = game.get(&slot) {
                    names.push_str(&record.names.join("; "));
                    game_scores[idx] = record.score;
                    total += record.score;
                    left_on_base += record.left_on_base;
                }
            }
            RosterRow {
                slot,
                member: order[slot as usize - 1].clone(),
                names,
                game_scores,
                total,
                left_on_base,
                team: team.to_owned(),
            }
        })
        .collect()
}
