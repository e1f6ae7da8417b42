//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//!
//! - quick visual sanity checks of a single-feature fit in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//!
//! - observed samples: `o`
//! - fitted line: `-`

/// Sample a fitted line y = slope·x + offset on an evenly spaced grid.
pub fn sample_line(slope: f64, offset: f64, x_min: f64, x_max: f64, n: usize) -> Vec<(f64, f64)> {
    let n = n.max(2);
    (0..n)
        .map(|i| {
            let u = i as f64 / (n as f64 - 1.0);
            let x = x_min + u * (x_max - x_min);
            (x, slope * x + offset)
        })
        .collect()
}

/// Render observed points with an optional fitted line overlaid.
pub fn render_ascii_plot(
    points: &[(f64, f64)],
    line: Option<&[(f64, f64)]>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(points, line).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(points, line).unwrap_or((0.0, 1.0));
    let (x_min, x_max) = pad_range(x_min, x_max, 0.02);
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the line first so observed points can overlay it.
    if let Some(line) = line {
        for &(x, y) in line {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            let col = map_x(x, x_min, x_max, width);
            let row = map_y(y, y_min, y_max, height);
            grid[row][col] = '-';
        }
    }

    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.3}, {y_max:.3}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn x_range(points: &[(f64, f64)], line: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    minmax(points.iter().chain(line.into_iter().flatten()).map(|p| p.0))
}

fn y_range(points: &[(f64, f64)], line: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    minmax(points.iter().chain(line.into_iter().flatten()).map(|p| p.1))
}

fn minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = if span < 1e-12 { 0.5 } else { span * frac };
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    ((u * (width as f64 - 1.0)).round() as usize).min(width - 1)
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // Row 0 is the top of the grid.
    let row = ((1.0 - u) * (height as f64 - 1.0)).round() as usize;
    row.min(height - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_contains_points_and_header() {
        let points = vec![(0.0, 0.0), (1.0, 2.0), (2.0, 4.0)];
        let line = sample_line(2.0, 0.0, 0.0, 2.0, 50);
        let plot = render_ascii_plot(&points, Some(&line), 40, 10);

        assert!(plot.starts_with("Plot: x=["));
        assert!(plot.contains('o'));
        assert!(plot.contains('-'));
        // Header + `height` grid rows.
        assert_eq!(plot.lines().count(), 11);
    }

    #[test]
    fn plot_is_deterministic() {
        let points = vec![(0.0, 1.0), (5.0, 3.0)];
        let a = render_ascii_plot(&points, None, 30, 8);
        let b = render_ascii_plot(&points, None, 30, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn sample_line_spans_requested_range() {
        let line = sample_line(1.0, 100.0, 0.0, 10.0, 11);
        assert_eq!(line.len(), 11);
        assert!((line[0].0 - 0.0).abs() < 1e-12);
        assert!((line[10].0 - 10.0).abs() < 1e-12);
        assert!((line[10].1 - 110.0).abs() < 1e-12);
    }
}
