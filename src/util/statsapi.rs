use core::fmt::{Display, Formatter};

use anyhow::{Context, Result};
use serde_json::Value;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub fn key(self) -> &'static str {
        match self {
            Self::Away => "away",
            Self::Home => "home",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One player's batting stats for one appearance in the lineup.
pub struct BattingLine {
    pub name: String,
    pub hits: i64,
    pub doubles: i64,
    pub triples: i64,
    pub home_runs: i64,
    pub runs: i64,
    pub rbi: i64,
    pub stolen_bases: i64,
    pub walks: i64,
    pub strikeouts: i64,
    pub left_on_base: i64,
    /// True when this line continues the previous batting-order slot (pinch
    /// hitter, pinch runner) rather than starting a new one.
    pub substitution: bool,
}

impl BattingLine {
    pub fn score(&self) -> i64 {
        self.hits
            + self.doubles
            + self.triples * 2
            + self.home_runs * 3
            + self.runs
            + self.rbi
            + self.stolen_bases
            + self.walks
            - self.strikeouts
    }
}

pub fn boxscore(game_pk: i64) -> Result<Value> {
    crate::get(&format!(
        "https://statsapi.mlb.com/api/v1/game/{game_pk}/boxscore"
    ))
}

pub fn team_name(boxscore: &Value, side: Side) -> Result<String> {
    let team = &boxscore["teams"][side.key()]["team"];
    team["teamName"]
        .as_str()
        .or_else(|| team["name"].as_str())
        .map(str::to_owned)
        .with_context(|| format!("{side} team didn't have a name"))
}

/// Extracts the side's batting lines in appearance order. The feed lists
/// batter ids under `batters`; each resolves through the `players` map, whose
/// `battingOrder` is `slot * 100 + n` with `n > 0` marking a substitution.
/// Players without a batting order never batted and are skipped.
pub fn batting_lines(boxscore: &Value, side: Side) -> Result<Vec<BattingLine>> {
    let root = &boxscore["teams"][side.key()];
    let batters = root["batters"]
        .as_array()
        .with_context(|| format!("{side} team didn't have a batters list"))?;
    let mut lines = Vec::with_capacity(batters.len());
    for id in batters {
        let id = id.as_i64().context("Batter id was not a number")?;
        let player = &root["players"][&format!("ID{id}")];
        if player.is_null() {
            continue;
        }
        let Some(batting_order) = player["battingOrder"]
            .as_str()
            .and_then(|x| x.parse::<i64>().ok())
        else {
            continue;
        };
        let person = &player["person"];
        let name = person["boxscoreName"]
            .as_str()
            .or_else(|| person["fullName"].as_str())
            .with_context(|| format!("Batter {id}'s name didn't exist"))?
            .to_owned();
        let batting = &player["stats"]["batting"];
        lines.push(BattingLine {
            name,
            hits: batting["hits"].as_i64().unwrap_or(0),
            doubles: batting["doubles"].as_i64().unwrap_or(0),
            triples: batting["triples"].as_i64().unwrap_or(0),
            home_runs: batting["homeRuns"].as_i64().unwrap_or(0),
            runs: batting["runs"].as_i64().unwrap_or(0),
            rbi: batting["rbi"].as_i64().unwrap_or(0),
            stolen_bases: batting["stolenBases"].as_i64().unwrap_or(0),
            walks: batting["baseOnBalls"].as_i64().unwrap_or(0),
            strikeouts: batting["strikeOuts"].as_i64().unwrap_or(0),
            left_on_base: batting["leftOnBase"].as_i64().unwrap_or(0),
            substitution: batting_order % 100 != 0,
        });
    }
    Ok(lines)
}

/// Every `(label, value)` pair from the side's free-text game-note field
/// lists (E, CS, GIDP, 2B, ...). Missing or oddly shaped entries are skipped.
pub fn note_fields(boxscore: &Value, side: Side) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    for section in boxscore["teams"][side.key()]["info"]
        .as_array()
        .iter()
        .flat_map(|x| x.iter())
    {
        for field in section["fieldList"].as_array().iter().flat_map(|x| x.iter()) {
            if let (Some(label), Some(value)) = (field["label"].as_str(), field["value"].as_str()) {
                fields.push((label.to_owned(), value.to_owned()));
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn batters_without_an_order_or_a_player_entry_are_skipped() {
        let boxscore = json!({
            "teams": {
                "home": {
                    "batters": [1, 2, 3],
                    "players": {
                        "ID1": {
                            "person": { "id": 1, "fullName": "Aaron Judge", "boxscoreName": "Judge" },
                            "battingOrder": "100",
                            "stats": { "batting": { "hits": 1 } }
                        },
                        "ID2": {
                            "person": { "id": 2, "fullName": "Bullpen Arm" },
                            "stats": { "batting": {} }
                        }
                    }
                }
            }
        });
        let lines = batting_lines(&boxscore, Side::Home).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Judge");
        assert_eq!(lines[0].hits, 1);
        assert_eq!(lines[0].strikeouts, 0);
        assert!(!lines[0].substitution);
    }

    #[test]
    fn pinch_hitter_orders_mark_substitutions() {
        let boxscore = json!({
            "teams": {
                "away": {
                    "batters": [7],
                    "players": {
                        "ID7": {
                            "person": { "id": 7, "fullName": "Addison Barger" },
                            "battingOrder": "501",
                            "stats": { "batting": {} }
                        }
                    }
                }
            }
        });
        let lines = batting_lines(&boxscore, Side::Away).unwrap();
        assert!(lines[0].substitution);
        // boxscoreName missing falls back to the full name
        assert_eq!(lines[0].name, "Addison Barger");
    }

    #[test]
    fn note_fields_flatten_every_section() {
        let boxscore = json!({
            "teams": {
                "away": {
                    "info": [
                        { "title": "BATTING", "fieldList": [{ "label": "2B", "value": "Springer (12)." }] },
                        { "title": "FIELDING", "fieldList": [{ "label": "E", "value": "Bichette 2." }] }
                    ]
                }
            }
        });
        assert_eq!(
            note_fields(&boxscore, Side::Away),
            vec![
                ("2B".to_owned(), "Springer (12).".to_owned()),
                ("E".to_owned(), "Bichette 2.".to_owned()),
            ]
        );
    }
}
