use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::consts::{HISTOGRAM_BIN_EDGES, HISTOGRAM_X_PADDING, PLOT_HEIGHT, PLOT_WIDTH};
use crate::error::{Result, ThrongError};

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const GRAY: RGBColor = RGBColor(128, 128, 128);

fn render_err<E: std::fmt::Display>(err: E) -> ThrongError {
    ThrongError::Render(err.to_string())
}

/// Placeholder artifact for a run with no energy samples at all.
pub fn render_placeholder(path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let style = ("sans-serif", 40)
        .into_font()
        .color(&GRAY)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let center_x = PLOT_WIDTH as i32 / 2;
    let center_y = PLOT_HEIGHT as i32 / 2;
    root.draw(&Text::new(
        "Insufficient movement data",
        (center_x, center_y - 28),
        style.clone(),
    ))
    .map_err(render_err)?;
    root.draw(&Text::new(
        "for energy analysis",
        (center_x, center_y + 28),
        style,
    ))
    .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Per-sample bar chart for distributions too small for moment statistics.
pub fn render_bars(samples: &[u64], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let y_max = samples.iter().copied().max().unwrap_or(0).max(1) as f64;
    let x_max = samples.len() as f64 - 0.5;

    let mut chart = ChartBuilder::on(&root)
        .caption("Energy Levels (Limited Data)", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_max, 0.0f64..y_max * 1.05)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc("Track Index")
        .y_desc("Energy Level")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(samples.iter().enumerate().map(|(index, &energy)| {
            Rectangle::new(
                [
                    (index as f64 - 0.4, 0.0),
                    (index as f64 + 0.4, energy as f64),
                ],
                SKY_BLUE.mix(0.7).filled(),
            )
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Histogram of the full energy distribution.
///
/// Bin edges span [min, max] with [`HISTOGRAM_BIN_EDGES`] evenly spaced
/// values; the x axis is padded by [`HISTOGRAM_X_PADDING`] on both sides.
pub fn render_histogram(samples: &[u64], path: &Path) -> Result<()> {
    let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
        return Err(ThrongError::Render("empty distribution".into()));
    };
    let (min, max) = (min as f64, max as f64);

    let bins = bin_counts(samples, min, max);
    let y_max = bins.iter().map(|&(_, _, count)| count).max().unwrap_or(0).max(1) as f64;

    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of energies level", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (min - HISTOGRAM_X_PADDING)..(max + HISTOGRAM_X_PADDING),
            0.0f64..y_max * 1.05,
        )
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc("Energy level")
        .y_desc("Count")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            bins.iter()
                .filter(|&&(_, _, count)| count > 0)
                .map(|&(lo, hi, count)| {
                    Rectangle::new([(lo, 0.0), (hi, count as f64)], BLUE.mix(0.5).filled())
                }),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Count samples into equal-width bins over [min, max]; the final bin is
/// closed so the maximum sample is counted. A zero-width range collapses to
/// one unit-width bin.
fn bin_counts(samples: &[u64], min: f64, max: f64) -> Vec<(f64, f64, usize)> {
    if max == min {
        return vec![(min - 0.5, min + 0.5, samples.len())];
    }

    let bins = HISTOGRAM_BIN_EDGES - 1;
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &sample in samples {
        let index = (((sample as f64 - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| {
            let lo = min + index as f64 * width;
            (lo, lo + width, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_counts_cover_all_samples() {
        let samples = [0u64, 1, 5, 50, 99, 100];
        let bins = bin_counts(&samples, 0.0, 100.0);
        assert_eq!(bins.len(), HISTOGRAM_BIN_EDGES - 1);
        let total: usize = bins.iter().map(|&(_, _, count)| count).sum();
        assert_eq!(total, samples.len());
        // The maximum sample falls in the final, closed bin.
        assert!(bins.last().unwrap().2 >= 1);
    }

    #[test]
    fn test_bin_counts_degenerate_range() {
        let samples = [7u64, 7, 7];
        let bins = bin_counts(&samples, 7.0, 7.0);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].2, 3);
    }
}
