use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use fxhash::FxHashMap;
use serde_json::Value;

use crate::util::notes::{parse_note_field, PENALTY_LABELS};
use crate::util::statsapi::{self, BattingLine, Side};

/// Batting orders run 1..=9; slot 0 is reserved for "no slot open yet".
pub const LINEUP_SLOTS: u8 = 9;

/// One batting-order slot's aggregate for a single game: every batter who
/// occupied the slot, their combined score and runners left on base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotScore {
    pub names: Vec<String>,
    pub score: i64,
    pub left_on_base: i64,
}

/// Batting-order slot (1..=9) to aggregate, in slot order.
pub type SlotScores = BTreeMap<u8, SlotScore>;

/// Fetches one side's box score and derives its slot scores.
pub fn derive_scores(game_pk: i64, side: Side) -> Result<(String, SlotScores)> {
    let boxscore = statsapi::boxscore(game_pk)?;
    derive_from_boxscore(&boxscore, side)
}

/// The pure half of the deriver: batting lines folded into slots, then
/// game-note penalties subtracted.
pub fn derive_from_boxscore(boxscore: &Value, side: Side) -> Result<(String, SlotScores)> {
    let team_name = statsapi::team_name(boxscore, side)?;
    let lines = statsapi::batting_lines(boxscore, side)?;
    let mut slots = fold_lines(lines)?;
    apply_penalties(&mut slots, &penalties(statsapi::note_fields(boxscore, side)));
    Ok((team_name, slots))
}

/// Single forward pass over the batting lines: a non-substitution line opens
/// the next slot, a substitution line folds into the current one. A
/// substitution with no slot to continue, or a starter past the ninth slot,
/// means the feed is inconsistent and the whole side is rejected.
pub fn fold_lines(lines: Vec<BattingLine>) -> Result<SlotScores> {
    let mut slots = SlotScores::new();
    let mut order = 0_u8;
    for line in lines {
        let score = line.score();
        if line.substitution {
            let slot = slots.get_mut(&order).with_context(|| {
                format!("Substitute {} appeared before any starting batter", line.name)
            })?;
            slot.names.push(line.name);
            slot.score += score;
            slot.left_on_base += line.left_on_base;
        } else {
            if order == LINEUP_SLOTS {
                bail!(
                    "Starter {} overflowed the {LINEUP_SLOTS}-slot batting order",
                    line.name
                );
            }
            order += 1;
            slots.insert(
                order,
                SlotScore {
                    names: vec![line.name],
                    score,
                    left_on_base: line.left_on_base,
                },
            );
        }
    }
    Ok(slots)
}

/// Accumulates per-name penalty counts from every E/CS/GIDP note field. A
/// name recurring across entries or fields accumulates additively.
pub fn penalties(fields: impl IntoIterator<Item = (String, String)>) -> FxHashMap<String, i64> {
    let mut totals = FxHashMap::default();
    for (label, value) in fields {
        if !PENALTY_LABELS.contains(&label.as_str()) {
            continue;
        }
        for entry in parse_note_field(&value) {
            *totals.entry(entry.name).or_insert(0) += entry.count;
        }
    }
    totals
}

/// Subtracts each accumulated penalty from every slot whose name list
/// contains that exact name. Names with no matching slot are ignored.
pub fn apply_penalties(slots: &mut SlotScores, penalties: &FxHashMap<String, i64>) {
    for (name, total) in penalties {
        for slot in slots.values_mut() {
            if slot.names.iter().any(|n| n == name) {
                slot.score -= total;
            }
        }
    }
}
