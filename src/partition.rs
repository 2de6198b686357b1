use crate::bounds::BoundingBox;
use crate::error::PartitionError;
use crate::metric::Metric;
use crate::superset::CellSuperset;
use log::debug;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Label assigned when no cell center is available to claim an index. It is
/// negative to prevent conflicts with center indices.
pub const UNASSIGNED: i32 = -1;

/// Render value marking a direct member of a leaf partition.
pub const RENDER_MEMBER: i32 = 1;
/// Render value marking a cell inside a leaf's bounds that is not a member.
pub const RENDER_BOUNDED: i32 = 2;

/// Rule deciding which part of a partitioning an index belongs to.
///
/// Implementations must be total: every index receives exactly one label per
/// call, which is what makes [`VoxelPartition::partition`] a strict set
/// partition.
pub trait AssignmentRule<const D: usize> {
    fn assign(&self, index: [usize; D], metric: Metric, centers: &[[f64; D]]) -> i32;
}

/// Voronoi-style assignment: an index belongs to its nearest center.
///
/// Ties break toward the lowest center index; the scan runs forward from
/// center 0 with a strictly-less comparison, so the first minimum seen wins.
/// Returns [`UNASSIGNED`] when there are no centers at all.
pub struct NearestCenter;

impl<const D: usize> AssignmentRule<D> for NearestCenter {
    fn assign(&self, index: [usize; D], metric: Metric, centers: &[[f64; D]]) -> i32 {
        let Some(first) = centers.first() else {
            return UNASSIGNED;
        };

        let mut point = [0.0; D];
        for axis in 0..D {
            point[axis] = index[axis] as f64;
        }

        let mut nearest = 0;
        let mut min_dist = metric.between(&point, first);
        for (i, center) in centers.iter().enumerate().skip(1) {
            let dist = metric.between(&point, center);
            if dist < min_dist {
                min_dist = dist;
                nearest = i as i32;
            }
        }

        nearest
    }
}

/// Assigns every index to one fixed label.
pub struct Fixed(pub i32);

impl<const D: usize> AssignmentRule<D> for Fixed {
    fn assign(&self, _index: [usize; D], _metric: Metric, _centers: &[[f64; D]]) -> i32 {
        self.0
    }
}

/// One node of a recursive partition tree over a dense voxel grid.
///
/// A node holds a subset of the superset's index space, the tight bounding
/// box of that subset, and a map from partition label to child node. A node
/// with an empty map is a leaf: all of its members belong to a single
/// implicit part. [`partition`](Self::partition) splits the members into
/// disjoint child nodes, each of which is again a leaf over its slice.
///
/// All nodes of one tree share the same read-only [`CellSuperset`]; children
/// are exclusively owned by their parent's map, so dropping a node frees its
/// whole subtree.
pub struct VoxelPartition<const D: usize> {
    superset: Arc<CellSuperset<D>>,
    members: Vec<[usize; D]>,
    bounds: Option<BoundingBox<D>>,
    parts: BTreeMap<i32, VoxelPartition<D>>,
}

impl<const D: usize> VoxelPartition<D> {
    /// Creates the trivial root partition: every index of the superset is a
    /// member of one implicit part.
    ///
    /// Enumerates the full index space once, so this is O(|superset|).
    pub fn new(superset: Arc<CellSuperset<D>>) -> Self {
        let members: Vec<[usize; D]> = superset.indices().collect();
        Self::with_members(superset, members)
    }

    /// Creates a trivial (leaf) partition over an explicit member subset.
    ///
    /// The bounds are absent exactly when `members` is empty.
    pub fn with_members(superset: Arc<CellSuperset<D>>, members: Vec<[usize; D]>) -> Self {
        let bounds = BoundingBox::of_indices(&members).ok();
        Self {
            superset,
            members,
            bounds,
            parts: BTreeMap::new(),
        }
    }

    pub fn superset(&self) -> &Arc<CellSuperset<D>> {
        &self.superset
    }

    /// Member indices, in the deterministic order they were grouped in
    /// (row-major for a root node).
    pub fn members(&self) -> &[[usize; D]] {
        &self.members
    }

    /// Tight bounds over the members; `None` only for an empty member set.
    pub fn bounds(&self) -> Option<&BoundingBox<D>> {
        self.bounds.as_ref()
    }

    /// The children map, keyed by partition label. Labels are sparse and may
    /// include the [`UNASSIGNED`] sentinel.
    pub fn parts(&self) -> &BTreeMap<i32, VoxelPartition<D>> {
        &self.parts
    }

    pub fn part(&self, label: i32) -> Option<&VoxelPartition<D>> {
        self.parts.get(&label)
    }

    pub fn part_mut(&mut self, label: i32) -> Option<&mut VoxelPartition<D>> {
        self.parts.get_mut(&label)
    }

    /// A node is a leaf iff it has no sub-partitions.
    pub fn is_leaf(&self) -> bool {
        self.parts.is_empty()
    }

    /// Splits the members into child partitions according to `rule`.
    ///
    /// Any existing children are discarded first. Each member index is
    /// assigned exactly one label in a single pass, then one child node is
    /// created per distinct label, sharing this node's superset. Child bounds
    /// are recomputed once all grouping is done. The children's member sets
    /// are therefore pairwise disjoint and their union equals this node's
    /// members.
    pub fn partition<R: AssignmentRule<D>>(
        &mut self,
        rule: &R,
        metric: Metric,
        centers: &[[f64; D]],
    ) {
        self.parts.clear();

        for &index in &self.members {
            let label = rule.assign(index, metric, centers);
            self.parts
                .entry(label)
                .or_insert_with(|| Self {
                    superset: Arc::clone(&self.superset),
                    members: Vec::new(),
                    bounds: None,
                    parts: BTreeMap::new(),
                })
                .members
                .push(index);
        }

        for part in self.parts.values_mut() {
            part.bounds = BoundingBox::of_indices(&part.members).ok();
        }

        debug!(
            "partitioned {} members into {} parts",
            self.members.len(),
            self.parts.len()
        );
    }

    /// Iterates every `(label, index)` pair held by the direct children, in
    /// ascending label order.
    ///
    /// This is deliberately one level deep: it exports the result of the most
    /// recent [`partition`](Self::partition) call for immediate writeback.
    /// For a leaf it yields nothing. Re-invoking on an unchanged tree
    /// produces the same sequence. For the full subtree see
    /// [`labeled_members_deep`](Self::labeled_members_deep).
    pub fn labeled_members(&self) -> impl Iterator<Item = (i32, [usize; D])> + '_ {
        self.parts
            .iter()
            .flat_map(|(&label, part)| part.members.iter().map(move |&index| (label, index)))
    }

    /// Collects every `(label, index)` pair of the whole subtree.
    ///
    /// Leaf members are reported under the label of the edge leading to the
    /// leaf; internal nodes recurse instead of reporting their own members.
    pub fn labeled_members_deep(&self) -> Vec<(i32, [usize; D])> {
        let mut pairs = Vec::new();
        self.collect_deep(&mut pairs);
        pairs
    }

    fn collect_deep(&self, pairs: &mut Vec<(i32, [usize; D])>) {
        for (&label, part) in &self.parts {
            if part.is_leaf() {
                pairs.extend(part.members.iter().map(|&index| (label, index)));
            } else {
                part.collect_deep(pairs);
            }
        }
    }

    /// Total number of member indices.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Renders a 2-dimensional tree onto a copy of the superset canvas.
    ///
    /// For a leaf, members are stamped [`RENDER_MEMBER`] and non-member cells
    /// inside the bounds [`RENDER_BOUNDED`]; everything else keeps the
    /// superset's background value. For a non-leaf, each cell claimed by a
    /// direct child is stamped with its label + 1.
    ///
    /// Returns the canvas in row-major order, or
    /// [`PartitionError::UnsupportedDimension`] for a tree that is not
    /// 2-dimensional.
    pub fn render(&self) -> Result<Vec<i32>, PartitionError> {
        if D != 2 {
            return Err(PartitionError::UnsupportedDimension {
                dim: D,
                expected: 2,
            });
        }

        let mut canvas = self.superset.values();

        if self.is_leaf() {
            let members: HashSet<[usize; D]> = self.members.iter().copied().collect();
            for index in self.superset.indices() {
                if members.contains(&index) {
                    canvas[self.superset.linear(&index)] = RENDER_MEMBER;
                } else if self.bounds.is_some_and(|bounds| bounds.contains(&index)) {
                    canvas[self.superset.linear(&index)] = RENDER_BOUNDED;
                }
            }
        } else {
            for (label, index) in self.labeled_members() {
                canvas[self.superset.linear(&index)] = label + 1;
            }
        }

        Ok(canvas)
    }
}
