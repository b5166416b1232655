//! Per-gameweek series for charting.

use serde::Serialize;

use super::joiner::AnalysisRow;
use crate::cli::types::Gameweek;

/// One plotted point. A double gameweek is merged into a single point with
/// summed points and the mean of the known difficulties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub gameweek: Gameweek,
    pub points: i32,
    pub difficulty: Option<f64>,
    pub label: String,
}

pub fn chart_series(rows: &[AnalysisRow]) -> Vec<ChartPoint> {
    let mut out: Vec<ChartPoint> = Vec::new();

    for group in rows.chunk_by(|a, b| a.gameweek == b.gameweek) {
        let known: Vec<f64> = group
            .iter()
            .filter_map(|r| r.difficulty.map(|d| d.as_u8() as f64))
            .collect();
        let difficulty = if known.is_empty() {
            None
        } else {
            Some(known.iter().sum::<f64>() / known.len() as f64)
        };

        let label = match group {
            [single] => single.fixture_label(),
            _ => "DGW".to_string(),
        };

        out.push(ChartPoint {
            gameweek: group[0].gameweek,
            points: group.iter().map(|r| r.points).sum(),
            difficulty,
            label,
        });
    }
    out
}
