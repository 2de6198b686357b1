use crate::error::PartitionError;
use crate::metric::subdivide_bounds;

/// Tight axis-aligned bounding box over a set of N-dimensional grid indices.
///
/// Both corners are inclusive: an index equal to `min` or `max` on every axis
/// is inside the box. The box is a convex hull, not a mask; it may contain
/// indices that are not members of the set it was computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox<const D: usize> {
    pub min: [usize; D],
    pub max: [usize; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [usize; D], max: [usize; D]) -> Self {
        Self { min, max }
    }

    /// Computes the componentwise min/max corners enclosing `indices`.
    ///
    /// Returns [`PartitionError::EmptyIndexSet`] for an empty slice, where no
    /// bounding box exists.
    pub fn of_indices(indices: &[[usize; D]]) -> Result<Self, PartitionError> {
        let first = indices.first().ok_or(PartitionError::EmptyIndexSet)?;

        let mut min = *first;
        let mut max = *first;
        for index in &indices[1..] {
            for axis in 0..D {
                min[axis] = min[axis].min(index[axis]);
                max[axis] = max[axis].max(index[axis]);
            }
        }

        Ok(Self { min, max })
    }

    /// True iff every component of `index` lies within `[min, max]`.
    pub fn contains(&self, index: &[usize; D]) -> bool {
        (0..D).all(|axis| self.min[axis] <= index[axis] && index[axis] <= self.max[axis])
    }

    /// Seed points for a grid-like subdivision of this box, `div^D` evenly
    /// spaced interior points. See [`subdivide_bounds`].
    pub fn subdivide(&self, div: usize) -> Vec<[f64; D]> {
        let mut min = [0.0; D];
        let mut max = [0.0; D];
        for axis in 0..D {
            min[axis] = self.min[axis] as f64;
            max[axis] = self.max[axis] as f64;
        }
        subdivide_bounds(&min, &max, div)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_indices_min_max() {
        let bounds = BoundingBox::of_indices(&[[3, 1], [0, 4], [2, 2]]).unwrap();
        assert_eq!(bounds.min, [0, 1]);
        assert_eq!(bounds.max, [3, 4]);
    }

    #[test]
    fn test_of_indices_empty() {
        let err = BoundingBox::<3>::of_indices(&[]).unwrap_err();
        assert_eq!(err, PartitionError::EmptyIndexSet);
    }

    #[test]
    fn test_contains_is_closed() {
        let bounds = BoundingBox::new([1, 1], [3, 3]);
        assert!(bounds.contains(&[1, 1]));
        assert!(bounds.contains(&[3, 3]));
        assert!(bounds.contains(&[2, 3]));
        assert!(!bounds.contains(&[0, 2]));
        assert!(!bounds.contains(&[2, 4]));
    }

    #[test]
    fn test_subdivide_octants() {
        let bounds = BoundingBox::new([0, 0, 0], [3, 3, 3]);
        let centers = bounds.subdivide(2);
        assert_eq!(centers.len(), 8);
        assert_eq!(centers[0], [1.0, 1.0, 1.0]);
    }
}
