use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::util::consolidate::GAMES_PER_ROSTER;
use crate::util::scoring::LINEUP_SLOTS;

/// Static per-run configuration: which real games feed the scoreboard and
/// which member claims each batting-order slot. Both fantasy teams bet on the
/// same games, one per side: the away side feeds `away`, the home side
/// `home`.
pub struct Config {
    pub games: Vec<i64>,
    pub away: TeamConfig,
    pub home: TeamConfig,
    pub refresh: Duration,
}

pub struct TeamConfig {
    pub label: String,
    pub order: [String; LINEUP_SLOTS as usize],
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let root = serde_json::from_str::<Value>(&text)
            .with_context(|| format!("Config file {} was not valid json", path.display()))?;
        Self::parse(&root)
    }

    fn parse(root: &Value) -> Result<Self> {
        let games = root["games"]
            .as_array()
            .context("Config didn't have a 'games' list")?
            .iter()
            .map(|pk| pk.as_i64().context("Game pk was not a number"))
            .collect::<Result<Vec<_>>>()?;
        if games.is_empty() || games.len() > GAMES_PER_ROSTER {
            bail!(
                "Config must list between 1 and {GAMES_PER_ROSTER} games, found {}",
                games.len()
            );
        }
        Ok(Self {
            games,
            away: TeamConfig::parse(&root["away"], "away")?,
            home: TeamConfig::parse(&root["home"], "home")?,
            refresh: Duration::from_secs(root["refreshSeconds"].as_u64().unwrap_or(60)),
        })
    }
}

impl TeamConfig {
    fn parse(root: &Value, side: &str) -> Result<Self> {
        let label = root["label"]
            .as_str()
            .with_context(|| format!("Config's {side} team didn't have a label"))?
            .to_owned();
        let members = root["order"]
            .as_array()
            .with_context(|| format!("Config's {side} team didn't have a member order"))?;
        if members.len() > LINEUP_SLOTS as usize {
            bail!("Config's {side} team listed more than {LINEUP_SLOTS} members");
        }
        let mut order: [String; LINEUP_SLOTS as usize] = Default::default();
        for (slot, member) in order.iter_mut().zip(members) {
            *slot = member
                .as_str()
                .with_context(|| format!("Config's {side} team had a non-string member"))?
                .to_owned();
        }
        Ok(Self { label, order })
    }

    fn with_order(label: &str, members: &[&str]) -> Self {
        let mut order: [String; LINEUP_SLOTS as usize] = Default::default();
        for (slot, member) in order.iter_mut().zip(members) {
            *slot = (*member).to_owned();
        }
        Self {
            label: label.to_owned(),
            order,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            games: vec![777023],
            away: TeamConfig::with_order(
                "Team A",
                &["Friz", "Rife", "Brian", "Price", "Ben", "Ian", "Julia"],
            ),
            home: TeamConfig::with_order(
                "Team B",
                &["Childs", "Adrian", "Rory", "Dave", "Nagel", "Dreyer", "Sean"],
            ),
            refresh: Duration::from_secs(60),
        }
    }
}
