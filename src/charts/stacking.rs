//! Stack geometry shared by both chart surfaces.

use crate::data::{ChartRow, SeriesDescriptor};

/// Lower/upper bounds of one series across all rows.
#[derive(Debug, Clone, PartialEq)]
pub struct StackBand {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// Cumulative bands in series order; series 0 sits on the baseline.
pub fn stack_bands(rows: &[ChartRow], series: &[SeriesDescriptor]) -> Vec<StackBand> {
    let mut running = vec![0.0; rows.len()];

    series
        .iter()
        .map(|desc| {
            let lower = running.clone();
            for (top, row) in running.iter_mut().zip(rows) {
                *top += row.value(&desc.key);
            }
            StackBand {
                lower,
                upper: running.clone(),
            }
        })
        .collect()
}

/// Height of the tallest stack, never below zero.
pub fn stack_extent(bands: &[StackBand]) -> f64 {
    bands
        .iter()
        .flat_map(|band| band.upper.iter().chain(band.lower.iter()))
        .copied()
        .fold(0.0, f64::max)
}

/// Depth of the lowest stack edge, never above zero.
pub fn stack_floor(bands: &[StackBand]) -> f64 {
    bands
        .iter()
        .flat_map(|band| band.upper.iter().chain(band.lower.iter()))
        .copied()
        .fold(0.0, f64::min)
}

/// Upper bound for the value axis: the extent padded a little, or 1 for an empty chart.
pub fn axis_max(bands: &[StackBand]) -> f64 {
    let extent = stack_extent(bands);
    if extent > 0.0 {
        extent * 1.05
    } else {
        1.0
    }
}

/// Lower bound for the value axis: 0 unless some stack dips below it.
pub fn axis_min(bands: &[StackBand]) -> f64 {
    let floor = stack_floor(bands);
    if floor < 0.0 {
        floor * 1.05
    } else {
        0.0
    }
}

/// Points drawn between two neighbouring categories of a curved edge
pub const CURVE_STEPS: usize = 16;

/// Sample a monotone cubic through `(i, ys[i])`.
///
/// Tangents follow Steffen's method, so the curve never overshoots the data
/// between two categories. Two points give a straight segment. The first
/// point of each segment lands exactly on a category.
pub fn monotone_curve(ys: &[f64], steps: usize) -> Vec<[f64; 2]> {
    let n = ys.len();
    if n < 3 || steps < 2 {
        return ys.iter().enumerate().map(|(i, &y)| [i as f64, y]).collect();
    }

    let secants: Vec<f64> = ys.windows(2).map(|w| w[1] - w[0]).collect();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let (s0, s1) = (secants[i - 1], secants[i]);
        let p = (s0 + s1) / 2.0;
        tangents[i] = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    }
    tangents[0] = (3.0 * secants[0] - tangents[1]) / 2.0;
    tangents[n - 1] = (3.0 * secants[n - 2] - tangents[n - 2]) / 2.0;

    let mut points = Vec::with_capacity((n - 1) * steps + 1);
    for i in 0..n - 1 {
        let (y0, y1) = (ys[i], ys[i + 1]);
        let (m0, m1) = (tangents[i], tangents[i + 1]);
        for k in 0..steps {
            let t = k as f64 / steps as f64;
            let (t2, t3) = (t * t, t * t * t);
            let y = (2.0 * t3 - 3.0 * t2 + 1.0) * y0
                + (t3 - 2.0 * t2 + t) * m0
                + (-2.0 * t3 + 3.0 * t2) * y1
                + (t3 - t2) * m1;
            points.push([i as f64 + t, y]);
        }
    }
    points.push([(n - 1) as f64, ys[n - 1]]);
    points
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{project, series_descriptors, Dataset};

    #[test]
    fn test_bands_are_cumulative() {
        let dataset = Dataset::seed();
        let rows = project(&dataset);
        let series = series_descriptors(&dataset);
        let bands = stack_bands(&rows, &series);

        assert_eq!(bands.len(), 10);
        assert_eq!(bands[0].lower, vec![0.0; 4]);
        assert_eq!(bands[0].upper, vec![25.0, 22.0, 20.0, 18.0]);
        assert_eq!(bands[1].lower, bands[0].upper);
        assert_eq!(bands[1].upper, vec![40.0, 40.0, 40.0, 40.0]);
        for pair in bands.windows(2) {
            assert_eq!(pair[1].lower, pair[0].upper);
        }
    }

    #[test]
    fn test_extent_matches_row_totals() {
        let mut dataset = Dataset::seed();
        dataset.set_value(2, 0, "45").unwrap();
        let rows = project(&dataset);
        let bands = stack_bands(&rows, &series_descriptors(&dataset));

        let tallest = rows.iter().map(ChartRow::total).fold(0.0, f64::max);
        assert_eq!(stack_extent(&bands), tallest);
        assert_eq!(tallest, 125.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(stack_bands(&[], &[]).is_empty());
        assert_eq!(stack_extent(&[]), 0.0);
        assert_eq!(axis_max(&[]), 1.0);
        assert_eq!(axis_min(&[]), 0.0);
    }

    #[test]
    fn test_negative_values_extend_axis_below_zero() {
        let mut dataset = Dataset::seed();
        let bands = stack_bands(&project(&dataset), &series_descriptors(&dataset));
        assert_eq!(stack_floor(&bands), 0.0);
        assert_eq!(axis_min(&bands), 0.0);

        dataset.set_value(1, 0, "-40").unwrap();
        let bands = stack_bands(&project(&dataset), &series_descriptors(&dataset));
        assert_eq!(stack_floor(&bands), -40.0);
        assert!((axis_min(&bands) + 42.0).abs() < 1e-9);
        assert!(axis_max(&bands) > 100.0);
    }

    #[test]
    fn test_monotone_curve_hits_every_category() {
        let ys = [25.0, 22.0, 20.0, 18.0];
        let curve = monotone_curve(&ys, CURVE_STEPS);

        assert_eq!(curve.len(), 3 * CURVE_STEPS + 1);
        for (i, &y) in ys.iter().enumerate() {
            let point = curve[i * CURVE_STEPS];
            assert_eq!(point[0], i as f64);
            assert!((point[1] - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_monotone_curve_does_not_overshoot() {
        let ys = [0.0, 10.0, 10.0, 40.0, 5.0];
        let curve = monotone_curve(&ys, CURVE_STEPS);

        for pair in curve.windows(2) {
            let seg = pair[0][0].floor() as usize;
            let (lo, hi) = (ys[seg].min(ys[seg + 1]), ys[seg].max(ys[seg + 1]));
            assert!(pair[1][1] >= lo - 1e-9 && pair[1][1] <= hi + 1e-9, "{:?}", pair);
        }
        // flat stretch stays flat
        for point in &curve[CURVE_STEPS..2 * CURVE_STEPS] {
            assert!((point[1] - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_short_curves_are_straight() {
        assert_eq!(monotone_curve(&[], CURVE_STEPS), Vec::<[f64; 2]>::new());
        assert_eq!(monotone_curve(&[3.0], CURVE_STEPS), vec![[0.0, 3.0]]);
        assert_eq!(
            monotone_curve(&[1.0, 5.0], CURVE_STEPS),
            vec![[0.0, 1.0], [1.0, 5.0]]
        );
    }
}
