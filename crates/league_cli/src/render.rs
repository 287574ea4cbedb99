//! Console rendering of league statistics.
//!
//! Everything here returns `String`s; printing is left to the binary.

use league_core::{LeagueReport, StandingsRow, TeamAverageRow, TeamMetric};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Caption framed by `=` lines of the caption's width.
pub fn caption(text: &str) -> String {
    let rule = "=".repeat(text.chars().count());
    format!("{rule}\n{text}\n{rule}\n")
}

/// `Name: value unit`
pub fn metric_line<T: Display>(metric: &TeamMetric<T>, unit: &str) -> String {
    format!("{}: {} {}", metric.team, metric.value, unit)
}

pub fn leader_block<T: Display>(title: &str, metric: &TeamMetric<T>, unit: &str) -> String {
    format!("{}\n{}\n", caption(title), metric_line(metric, unit))
}

/// The four single leaders.
pub fn leaders(report: &LeagueReport) -> String {
    [
        leader_block("Team with the most goals scored:", &report.most_goals, "goals"),
        leader_block("Team with the most away goals:", &report.most_away_goals, "away goals"),
        leader_block("Team with the most home goals:", &report.most_home_goals, "home goals"),
        leader_block("Team with the best goal ratio:", &report.best_goal_ratio, "goal difference"),
    ]
    .join("\n")
}

/// Leaders, averages table and standings table.
pub fn full_report(report: &LeagueReport) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}",
        leaders(report),
        caption("Average team performance (by goals scored per match, descending):"),
        averages_table(&report.averages),
        caption("League table (by rank):"),
        standings_table(&report.standings),
    )
}

fn avg(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

pub fn averages_table(rows: &[TeamAverageRow]) -> String {
    let header = [
        ("Rank", Align::Right),
        ("Team", Align::Left),
        ("Matches", Align::Right),
        ("Scored home", Align::Right),
        ("Conceded home", Align::Right),
        ("Scored away", Align::Right),
        ("Conceded away", Align::Right),
        ("Scored total", Align::Right),
        ("Conceded total", Align::Right),
    ];
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.rank.to_string(),
                r.team.clone(),
                r.matches.to_string(),
                avg(r.avg_goals_scored_home),
                avg(r.avg_goals_conceded_home),
                avg(r.avg_goals_scored_away),
                avg(r.avg_goals_conceded_away),
                avg(Some(r.avg_goals_scored_total)),
                avg(Some(r.avg_goals_conceded_total)),
            ]
        })
        .collect();
    table(&header, &body)
}

pub fn standings_table(rows: &[StandingsRow]) -> String {
    let header = [
        ("Rank", Align::Right),
        ("Team", Align::Left),
        ("Played", Align::Right),
        ("Won", Align::Right),
        ("Drawn", Align::Right),
        ("Lost", Align::Right),
        ("GF", Align::Right),
        ("GA", Align::Right),
        ("GD", Align::Right),
        ("Points", Align::Right),
    ];
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.rank.to_string(),
                r.team.clone(),
                r.played.to_string(),
                r.wins.to_string(),
                r.draws.to_string(),
                r.losses.to_string(),
                r.goals_for.to_string(),
                r.goals_against.to_string(),
                format!("{:+}", r.goal_difference),
                r.points.to_string(),
            ]
        })
        .collect();
    table(&header, &body)
}

fn table(header: &[(&str, Align)], body: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|(h, _)| h.chars().count()).collect();
    for row in body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{separator}+\n");

    let mut out = String::new();
    out.push_str(&separator);
    let titles: Vec<String> = header.iter().map(|(h, _)| h.to_string()).collect();
    push_row(&mut out, &titles, header, &widths);
    out.push_str(&separator);
    for row in body {
        push_row(&mut out, row, header, &widths);
    }
    out.push_str(&separator);
    out
}

fn push_row(out: &mut String, cells: &[String], header: &[(&str, Align)], widths: &[usize]) {
    out.push('|');
    for ((cell, (_, align)), width) in cells.iter().zip(header).zip(widths.iter().copied()) {
        let padded = match align {
            Align::Left => format!(" {cell:<width$} |"),
            Align::Right => format!(" {cell:>width$} |"),
        };
        out.push_str(&padded);
    }
    out.push('\n');
}
