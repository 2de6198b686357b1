/// Read-only dense value canvas defining the addressable index space of a
/// partition tree.
///
/// The superset's sole structural role is its shape; the stored values are a
/// legacy label canvas used only as the background of debug renders. Every
/// node of one tree shares the same superset through an `Arc` and never
/// mutates it.
#[derive(Clone, Debug)]
pub struct CellSuperset<const D: usize> {
    shape: [usize; D],
    values: Vec<i32>,
}

impl<const D: usize> CellSuperset<D> {
    /// Creates a superset of the given shape with every cell set to `value`.
    pub fn filled(shape: [usize; D], value: i32) -> Self {
        let len = shape.iter().product();
        Self {
            shape,
            values: vec![value; len],
        }
    }

    pub fn shape(&self) -> [usize; D] {
        self.shape
    }

    /// Total number of addressable cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value stored at `index`, in row-major order.
    pub fn value(&self, index: &[usize; D]) -> i32 {
        self.values[self.linear(index)]
    }

    /// A copy of the full value buffer, row-major. Scratch material for debug
    /// renders.
    pub(crate) fn values(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// Row-major linear offset of `index`.
    pub(crate) fn linear(&self, index: &[usize; D]) -> usize {
        let mut offset = 0;
        for axis in 0..D {
            offset = offset * self.shape[axis] + index[axis];
        }
        offset
    }

    /// Iterates every index of the shape in row-major order, the last axis
    /// varying fastest.
    pub fn indices(&self) -> Indices<D> {
        Indices {
            shape: self.shape,
            next: Some([0; D]),
        }
    }
}

/// Row-major iterator over every index of a shape.
pub struct Indices<const D: usize> {
    shape: [usize; D],
    next: Option<[usize; D]>,
}

impl<const D: usize> Iterator for Indices<D> {
    type Item = [usize; D];

    fn next(&mut self) -> Option<[usize; D]> {
        // A zero-extent axis means there is nothing to enumerate.
        if self.shape.iter().any(|&extent| extent == 0) {
            return None;
        }

        let current = self.next?;

        let mut following = current;
        let mut axis = D;
        self.next = loop {
            if axis == 0 {
                break None;
            }
            axis -= 1;
            following[axis] += 1;
            if following[axis] < self.shape[axis] {
                break Some(following);
            }
            following[axis] = 0;
        };

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_row_major() {
        let superset = CellSuperset::filled([2, 3], 0);
        let all: Vec<[usize; 2]> = superset.indices().collect();
        assert_eq!(
            all,
            vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]
        );
    }

    #[test]
    fn test_indices_match_len() {
        let superset = CellSuperset::filled([3, 4, 5], 0);
        assert_eq!(superset.indices().count(), superset.len());
        assert_eq!(superset.len(), 60);
    }

    #[test]
    fn test_indices_zero_extent() {
        let superset = CellSuperset::filled([4, 0, 2], 0);
        assert_eq!(superset.indices().count(), 0);
        assert!(superset.is_empty());
    }

    #[test]
    fn test_linear_offsets() {
        let superset = CellSuperset::filled([2, 3], 0);
        assert_eq!(superset.linear(&[0, 0]), 0);
        assert_eq!(superset.linear(&[0, 2]), 2);
        assert_eq!(superset.linear(&[1, 0]), 3);
        assert_eq!(superset.linear(&[1, 2]), 5);
    }
}
