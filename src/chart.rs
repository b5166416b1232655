//! SVG chart of points per gameweek, coloured by fixture difficulty.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use plotters::prelude::*;

use crate::analysis::{chart_series, ChartPoint, PlayerSeason};
use crate::cli::types::Difficulty;
use crate::Result;

const LINE_COLOR: RGBColor = RGBColor(0x37, 0x00, 0x3c);
const UNKNOWN_COLOR: RGBColor = RGBColor(0x99, 0x99, 0x99);
const CHART_SIZE: (u32, u32) = (1400, 800);

/// Marker colour for a rating: dark green (easiest) to red (hardest).
pub fn difficulty_color(difficulty: Difficulty) -> RGBColor {
    match difficulty.as_u8() {
        1 => RGBColor(0x1e, 0x5c, 0x35),
        2 => RGBColor(0x8b, 0xbd, 0x94),
        3 => RGBColor(0xf9, 0xe0, 0x76),
        4 => RGBColor(0xf0, 0x8c, 0x66),
        _ => RGBColor(0xe8, 0x4c, 0x3d),
    }
}

/// Colour for a (possibly averaged) difficulty; averages round to the
/// nearest rating.
fn point_color(difficulty: Option<f64>) -> RGBColor {
    difficulty
        .and_then(|d| Difficulty::new(d.round().clamp(1.0, 5.0) as u8).ok())
        .map(difficulty_color)
        .unwrap_or(UNKNOWN_COLOR)
}

/// Lowercase, spaces to underscores, everything but letters, digits, `-`
/// and `_` dropped.
pub fn slugify(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() || c == '.' => Some('_'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .flat_map(char::to_lowercase)
        .collect();

    let mut out = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '_' && (out.is_empty() || out.ends_with('_')) {
            continue;
        }
        out.push(c);
    }
    let out = out.trim_end_matches('_').to_string();
    if out.is_empty() {
        "player".to_string()
    } else {
        out
    }
}

/// `<dir>/<slug of display name>_season_analysis.svg`
pub fn chart_path(dir: &Path, display_name: &str) -> PathBuf {
    dir.join(format!("{}_season_analysis.svg", slugify(display_name)))
}

/// Render the season chart to `path`.
pub fn render_season_chart(season: &PlayerSeason<'_>, path: &Path) -> Result<()> {
    let series = chart_series(&season.rows);
    if series.is_empty() {
        return Err(anyhow!("no played gameweeks to chart").into());
    }

    let title = format!(
        "{} {} Season: Points vs Fixture Difficulty",
        season.player.full_name(),
        season.season
    );
    draw(&series, &title, season.summary.average_points, path)
        .with_context(|| format!("rendering {}", path.display()))?;
    Ok(())
}

/// Horizontal line at the exact season average across the x range.
fn average_line(average: f64, x_min: i32, x_max: i32) -> [(i32, f64); 2] {
    [(x_min, average), (x_max, average)]
}

fn draw(series: &[ChartPoint], title: &str, average: f64, path: &Path) -> anyhow::Result<()> {
    let x_min = series.iter().map(|p| p.gameweek.as_u8() as i32).min().unwrap_or(1) - 1;
    let x_max = series.iter().map(|p| p.gameweek.as_u8() as i32).max().unwrap_or(38) + 1;
    let y_min = f64::from(series.iter().map(|p| p.points).min().unwrap_or(0).min(0) - 1);
    let y_max = f64::from(series.iter().map(|p| p.points).max().unwrap_or(0).max(1) + 3);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("{}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow!("{}", e))?;

    chart
        .configure_mesh()
        .x_desc("Gameweek")
        .y_desc("FPL Points")
        .x_labels((x_max - x_min) as usize)
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()
        .map_err(|e| anyhow!("{}", e))?;

    chart
        .draw_series(LineSeries::new(
            series.iter().map(|p| (p.gameweek.as_u8() as i32, f64::from(p.points))),
            LINE_COLOR.mix(0.6).stroke_width(2),
        ))
        .map_err(|e| anyhow!("{}", e))?;

    chart
        .draw_series(series.iter().map(|p| {
            EmptyElement::at((p.gameweek.as_u8() as i32, f64::from(p.points)))
                + Circle::new((0, 0), 7, point_color(p.difficulty).filled())
                + Text::new(p.label.clone(), (-18, -22), ("sans-serif", 13).into_font())
        }))
        .map_err(|e| anyhow!("{}", e))?;

    chart
        .draw_series(LineSeries::new(
            average_line(average, x_min, x_max),
            LINE_COLOR.mix(0.5).stroke_width(1),
        ))
        .map_err(|e| anyhow!("{}", e))?
        .label(format!("Avg: {:.1}pts", average))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.mix(0.5).stroke_width(1)));

    for difficulty in Difficulty::all() {
        let color = difficulty_color(difficulty);
        let label = match difficulty.as_u8() {
            1 => "Difficulty 1 (Easiest)".to_string(),
            5 => "Difficulty 5 (Hardest)".to_string(),
            d => format!("Difficulty {}", d),
        };
        chart
            .draw_series(std::iter::empty::<Circle<(i32, f64), i32>>())
            .map_err(|e| anyhow!("{}", e))?
            .label(label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 6, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.9).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()
        .map_err(|e| anyhow!("{}", e))?;

    root.present().map_err(|e| anyhow!("{}", e))?;
    Ok(())
}
