//! Season aggregates over analysis rows.

use serde::Serialize;

use super::joiner::AnalysisRow;
use crate::cli::types::{Difficulty, Gameweek};
use crate::dataset::MatchStats;

/// Totals for the rows sharing one difficulty rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DifficultyBucket {
    pub rows: u32,
    pub appearances: u32,
    pub points: i32,
    pub minutes: u32,
}

impl DifficultyBucket {
    fn add(&mut self, row: &AnalysisRow) {
        self.rows += 1;
        if row.played() {
            self.appearances += 1;
        }
        self.points += row.points;
        self.minutes += row.minutes;
    }

    /// Points per appearance in this bucket, 0 when there were none.
    pub fn average_points(&self) -> f64 {
        per_appearance(self.points, self.appearances)
    }
}

/// Season aggregates for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonSummary {
    pub total_points: i32,
    pub total_minutes: u32,
    /// Rows with minutes > 0.
    pub appearances: u32,
    pub average_points: f64,
    pub total_bonus: u32,
    pub stats: MatchStats,
    /// Buckets for ratings 1 through 5.
    pub by_difficulty: [DifficultyBucket; 5],
    pub unknown_difficulty: DifficultyBucket,
    pub double_gameweeks: Vec<Gameweek>,
    /// Pearson correlation of difficulty and points over appearances with a
    /// known rating. `None` with fewer than two such rows or no variance.
    pub difficulty_correlation: Option<f64>,
}

impl SeasonSummary {
    pub fn bucket(&self, difficulty: Difficulty) -> &DifficultyBucket {
        &self.by_difficulty[difficulty.index()]
    }
}

/// Aggregate the rows. Empty input gives an all-zero summary.
pub fn summarize(rows: &[AnalysisRow]) -> SeasonSummary {
    let mut summary = SeasonSummary::default();

    for row in rows {
        summary.total_points += row.points;
        summary.total_minutes += row.minutes;
        summary.total_bonus += row.bonus;
        if row.played() {
            summary.appearances += 1;
        }

        summary.stats.goals_scored += row.stats.goals_scored;
        summary.stats.assists += row.stats.assists;
        summary.stats.clean_sheets += row.stats.clean_sheets;
        summary.stats.goals_conceded += row.stats.goals_conceded;
        summary.stats.saves += row.stats.saves;

        match row.difficulty {
            Some(d) => summary.by_difficulty[d.index()].add(row),
            None => summary.unknown_difficulty.add(row),
        }
    }

    summary.average_points = per_appearance(summary.total_points, summary.appearances);
    summary.double_gameweeks = double_gameweeks(rows);
    summary.difficulty_correlation = difficulty_correlation(rows);
    summary
}

/// Gameweeks that appear on more than one row, ascending.
pub fn double_gameweeks(rows: &[AnalysisRow]) -> Vec<Gameweek> {
    let mut gws: Vec<Gameweek> = rows.iter().map(|r| r.gameweek).collect();
    gws.sort();

    let mut doubles: Vec<Gameweek> = gws
        .windows(2)
        .filter(|w| w[0] == w[1])
        .map(|w| w[0])
        .collect();
    doubles.dedup();
    doubles
}

fn per_appearance(points: i32, appearances: u32) -> f64 {
    if appearances == 0 {
        0.0
    } else {
        points as f64 / appearances as f64
    }
}

fn difficulty_correlation(rows: &[AnalysisRow]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = rows
        .iter()
        .filter(|r| r.played())
        .filter_map(|r| r.difficulty.map(|d| (d.as_u8() as f64, r.points as f64)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}
