//! Leaderboard bar-chart rendering
//!
//! Renders the users leaderboard as a PNG bar chart: one bar per user in
//! the requested order, bar height the user's reaction count. The font is
//! embedded so rendering works in containers without system fonts.

use std::path::Path;
use std::sync::Once;

use plotters::prelude::*;
use plotters::style::FontStyle;
use thiserror::Error;

use board_core::entities::User;

const CHART_WIDTH: u32 = 960;
const CHART_HEIGHT: u32 = 540;
const FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

static FONTS: Once = Once::new();

/// Chart rendering errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// One bar of the leaderboard chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub height: i64,
}

/// Map users (already in the requested order) to chart bars.
///
/// The label carries the user's full name and id so two users with the
/// same name stay distinguishable.
pub fn leaderboard_bars(users: &[User]) -> Vec<Bar> {
    users
        .iter()
        .map(|user| Bar {
            label: format!("{} (id: {})", user.full_name(), user.id),
            height: user.total_reactions,
        })
        .collect()
}

fn ensure_fonts() {
    FONTS.call_once(|| {
        // Registration only fails on a malformed font file
        let _ = plotters::style::register_font("sans-serif", FontStyle::Normal, FONT_BYTES);
    });
}

/// Render the leaderboard bars to a PNG at `path`, replacing any previous
/// render.
pub fn render_leaderboard(bars: &[Bar], path: &Path) -> Result<(), ChartError> {
    ensure_fonts();

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let x_count = bars.len().max(1);
    let y_max = bars.iter().map(|bar| bar.height).max().unwrap_or(0) + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Users leaderboard", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d((0..x_count).into_segmented(), 0..y_max)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("User")
        .y_desc("Reaction count")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) => bars
                .get(*i)
                .map(|bar| bar.label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, bar)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0),
                    (SegmentValue::Exact(i + 1), bar.height),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}
