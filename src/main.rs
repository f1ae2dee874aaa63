use core::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use scoreboard_stalker::util::config::Config;
use scoreboard_stalker::util::consolidate::{consolidate, RosterRow};
use scoreboard_stalker::util::nth;
use scoreboard_stalker::util::ranking::rank;
use scoreboard_stalker::util::scoring::{derive_scores, SlotScores};
use scoreboard_stalker::util::statsapi::Side;

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match Config::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {e:#}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    loop {
        // clear screen, cursor home
        print!("\x1b[2J\x1b[H");
        match refresh(&config) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("Error refreshing scoreboard: {e:#}"),
        }
        std::thread::sleep(config.refresh);
    }
}

/// One refresh cycle: up to six sequential fetches, then pure computation.
/// Any fetch failure abandons the cycle; the next tick starts clean.
fn refresh(config: &Config) -> Result<String> {
    let mut away_name = None;
    let mut home_name = None;
    let mut away_games = Vec::with_capacity(config.games.len());
    let mut home_games = Vec::with_capacity(config.games.len());
    for &game_pk in &config.games {
        let (name, slots) = derive_scores(game_pk, Side::Away)?;
        away_name.get_or_insert(name);
        away_games.push(slots);
        let (name, slots) = derive_scores(game_pk, Side::Home)?;
        home_name.get_or_insert(name);
        home_games.push(slots);
    }
    let away_name = away_name.context("No games configured")?;
    let home_name = home_name.context("No games configured")?;

    let empty = SlotScores::new();
    let away_rows = consolidate(
        first_three(&away_games, &empty),
        &config.away.order,
        &config.away.label,
    );
    let home_rows = consolidate(
        first_three(&home_games, &empty),
        &config.home.order,
        &config.home.label,
    );
    let ranked = rank(&away_rows, &home_rows);

    let mut out = String::new();
    writeln!(out, "Last refreshed: {}", Local::now().format("%A %B %e, %H:%M:%S"))?;
    writeln!(out)?;
    write!(out, "{}", team_table(&away_name, &config.away.label, &away_rows)?)?;
    writeln!(out)?;
    write!(out, "{}", team_table(&home_name, &config.home.label, &home_rows)?)?;
    writeln!(out)?;
    write!(out, "{}", ranking_table(&ranked)?)?;
    Ok(out)
}

fn first_three<'a>(games: &'a [SlotScores], empty: &'a SlotScores) -> [&'a SlotScores; 3] {
    [
        games.first().unwrap_or(empty),
        games.get(1).unwrap_or(empty),
        games.get(2).unwrap_or(empty),
    ]
}

fn team_table(team_name: &str, label: &str, rows: &[RosterRow]) -> Result<String> {
    let member_width = rows
        .iter()
        .map(|row| row.member.len())
        .max()
        .unwrap_or(0)
        .max("Member".len());
    let names_width = rows
        .iter()
        .flat_map(|row| row.names.split('\n'))
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max("Players".len());
    let separator = "-".repeat(member_width + names_width + 36);

    let mut out = String::new();
    writeln!(out, "{team_name} ({label})")?;
    writeln!(out, "{separator}")?;
    writeln!(
        out,
        " # | {member: <member_width$} | {players: <names_width$} | {g1: >3} | {g2: >3} | {g3: >3} | Total | LOB",
        member = "Member",
        players = "Players",
        g1 = "G1",
        g2 = "G2",
        g3 = "G3",
    )?;
    writeln!(out, "{separator}")?;
    for row in rows {
        let mut names = row.names.split('\n');
        writeln!(
            out,
            "{slot: >2} | {member: <member_width$} | {line: <names_width$} | {g1: >3} | {g2: >3} | {g3: >3} | {total: >5} | {lob: >3}",
            slot = row.slot,
            member = row.member,
            line = names.next().unwrap_or(""),
            g1 = row.game_scores[0],
            g2 = row.game_scores[1],
            g3 = row.game_scores[2],
            total = row.total,
            lob = row.left_on_base,
        )?;
        for line in names {
            writeln!(
                out,
                "   | {blank: <member_width$} | {line: <names_width$} | {g: >3} | {g: >3} | {g: >3} | {t: >5} | {l: >3}",
                blank = "",
                g = "",
                t = "",
                l = "",
            )?;
        }
        writeln!(out, "{separator}")?;
    }
    Ok(out)
}

fn ranking_table(ranked: &[RosterRow]) -> Result<String> {
    let member_width = ranked
        .iter()
        .map(|row| row.member.len())
        .max()
        .unwrap_or(0)
        .max("Member".len());
    let team_width = ranked
        .iter()
        .map(|row| row.team.len())
        .max()
        .unwrap_or(0)
        .max("Team".len());

    let mut out = String::new();
    writeln!(out, "Standings")?;
    writeln!(
        out,
        "{place: >4} | {member: <member_width$} | {team: <team_width$} | Total | LOB",
        place = "",
        member = "Member",
        team = "Team",
    )?;
    for (idx, row) in ranked.iter().enumerate() {
        writeln!(
            out,
            "{place: >4} | {member: <member_width$} | {team: <team_width$} | {total: >5} | {lob: >3}",
            place = nth(idx + 1),
            member = row.member,
            team = row.team,
            total = row.total,
            lob = row.left_on_base,
        )?;
    }
    Ok(out)
}
