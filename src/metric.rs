use crate::error::PartitionError;
use rand::Rng;

/// Distance metric used to compare a grid index against a cell center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    /// Standard L2 norm.
    #[default]
    Euclidean,
    /// L1 norm, the sum of per-axis absolute differences.
    Taxicab,
}

impl Metric {
    /// Evaluates the metric between two points of the same fixed dimension.
    ///
    /// The dimensions match by construction, so unlike [`distance`] this can
    /// never fail.
    pub fn between<const D: usize>(self, p1: &[f64; D], p2: &[f64; D]) -> f64 {
        match self {
            Metric::Euclidean => p1
                .iter()
                .zip(p2)
                .map(|(a, b)| (b - a) * (b - a))
                .sum::<f64>()
                .sqrt(),
            Metric::Taxicab => p1.iter().zip(p2).map(|(a, b)| (b - a).abs()).sum(),
        }
    }
}

/// Distance between two points given as slices.
///
/// Returns [`PartitionError::DimensionMismatch`] when the points differ in
/// dimension.
pub fn distance(metric: Metric, p1: &[f64], p2: &[f64]) -> Result<f64, PartitionError> {
    if p1.len() != p2.len() {
        return Err(PartitionError::DimensionMismatch {
            left: p1.len(),
            right: p2.len(),
        });
    }

    Ok(match metric {
        Metric::Euclidean => p1
            .iter()
            .zip(p2)
            .map(|(a, b)| (b - a) * (b - a))
            .sum::<f64>()
            .sqrt(),
        Metric::Taxicab => p1.iter().zip(p2).map(|(a, b)| (b - a).abs()).sum(),
    })
}

/// Samples `count` grid indices uniformly within `[0, shape[axis])` per axis.
///
/// Indices are drawn independently and may repeat.
pub fn random_indices<const D: usize, R: Rng>(
    rng: &mut R,
    shape: [usize; D],
    count: usize,
) -> Vec<[usize; D]> {
    let mut indices = Vec::with_capacity(count);
    for _ in 0..count {
        let mut index = [0usize; D];
        for axis in 0..D {
            index[axis] = rng.gen_range(0..shape[axis]);
        }
        indices.push(index);
    }
    indices
}

/// Produces `div^D` evenly spaced points strictly inside the given box.
///
/// Along each axis the points sit at fractional positions `i / (div + 1)` for
/// `i = 1..=div`, so none of them touch the box faces. The first axis varies
/// slowest. Used to seed cell centers for a regular grid-like subdivision.
pub fn subdivide_bounds<const D: usize>(
    min: &[f64; D],
    max: &[f64; D],
    div: usize,
) -> Vec<[f64; D]> {
    if div == 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(div.pow(D as u32));
    let step = div as f64 + 1.0;
    let mut ticks = [1usize; D];

    loop {
        let mut point = [0.0; D];
        for axis in 0..D {
            point[axis] = (max[axis] - min[axis]) / step * ticks[axis] as f64 + min[axis];
        }
        points.push(point);

        // Advance the odometer, last axis fastest.
        let mut axis = D;
        loop {
            if axis == 0 {
                return points;
            }
            axis -= 1;
            if ticks[axis] < div {
                ticks[axis] += 1;
                for reset in ticks.iter_mut().skip(axis + 1) {
                    *reset = 1;
                }
                break;
            }
        }
    }
}
