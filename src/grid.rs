use crate::error::PartitionError;
use crate::metric::Metric;
use crate::partition::{NearestCenter, VoxelPartition};
use crate::superset::CellSuperset;
use log::{debug, warn};
use std::sync::Arc;

/// Host volume supplying the shape of the addressable index space.
///
/// The partitioning engine never reads cell contents from the source, only
/// its extents.
pub trait GridSource {
    /// Per-axis extents of the volume; every extent must be positive.
    fn shape(&self) -> [usize; 3];
}

/// Host volume receiving the final coordinate→label writes.
pub trait GridSink {
    /// Writes `label` at the host position, failing with
    /// [`PartitionError::OutOfRange`] outside the addressable volume.
    fn write(&mut self, position: [i64; 3], label: i32) -> Result<(), PartitionError>;
}

/// Builds the trivial root partition over a host volume: a superset shaped
/// like the source with every index enumerated as a member.
pub fn grid_to_partition<S: GridSource + ?Sized>(source: &S) -> VoxelPartition<3> {
    let superset = Arc::new(CellSuperset::filled(source.shape(), 0));
    VoxelPartition::new(superset)
}

/// Writes the result of the most recent partitioning back into a host volume.
///
/// For every `(label, index)` pair yielded by the shallow traversal of
/// `partition`, writes `label + label_offset` at `index + offset`. The sink
/// only understands 3D volumes: a tree of any other dimension is rejected
/// with [`PartitionError::UnsupportedDimension`] before a single write is
/// performed. Returns the number of cells written.
pub fn partition_to_grid<const D: usize, S: GridSink + ?Sized>(
    sink: &mut S,
    offset: [i64; 3],
    partition: &VoxelPartition<D>,
    label_offset: i32,
) -> Result<usize, PartitionError> {
    if D != 3 {
        warn!("refusing writeback of a {}-dimensional partition", D);
        return Err(PartitionError::UnsupportedDimension {
            dim: D,
            expected: 3,
        });
    }

    let mut written = 0;
    for (label, index) in partition.labeled_members() {
        let position = [
            index[0] as i64 + offset[0],
            index[1] as i64 + offset[1],
            index[2] as i64 + offset[2],
        ];
        sink.write(position, label + label_offset)?;
        written += 1;
    }

    debug!("wrote {} labeled cells at offset {:?}", written, offset);
    Ok(written)
}

/// Splits a node into up to 8 octant-like parts.
///
/// Subdivides the node's bounds into `2^3` interior centers and runs a
/// nearest-center Euclidean partition against them. Fewer than 8 children is
/// legal: cells equidistant to several centers collapse into the
/// lowest-labeled one, and centers claiming no cell produce no child. A node
/// with no members has no bounds and ends up with no children.
pub fn oct_partition(partition: &mut VoxelPartition<3>) {
    let centers = match partition.bounds() {
        Some(bounds) => bounds.subdivide(2),
        None => Vec::new(),
    };
    partition.partition(&NearestCenter, Metric::Euclidean, &centers);
}

/// 2D counterpart of [`oct_partition`]: up to 4 quadrant-like parts.
pub fn quad_partition(partition: &mut VoxelPartition<2>) {
    let centers = match partition.bounds() {
        Some(bounds) => bounds.subdivide(2),
        None => Vec::new(),
    };
    partition.partition(&NearestCenter, Metric::Euclidean, &centers);
}

/// In-memory host volume backing both adapter traits.
///
/// Plays the role of the external level editor in tests, demos, and the WASM
/// surface: a box of `shape` cells anchored at `origin` in host coordinates,
/// with one label slot per cell.
pub struct ArrayGrid {
    origin: [i64; 3],
    shape: [usize; 3],
    labels: Vec<i32>,
}

impl ArrayGrid {
    pub fn new(origin: [i64; 3], shape: [usize; 3]) -> Self {
        Self {
            origin,
            shape,
            labels: vec![0; shape[0] * shape[1] * shape[2]],
        }
    }

    /// Label stored at a host position, or `None` outside the volume.
    pub fn get(&self, position: [i64; 3]) -> Option<i32> {
        self.offset_of(position).map(|offset| self.labels[offset])
    }

    /// The full label buffer in row-major order.
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    fn offset_of(&self, position: [i64; 3]) -> Option<usize> {
        let mut offset = 0;
        for axis in 0..3 {
            let local = position[axis] - self.origin[axis];
            if local < 0 || local >= self.shape[axis] as i64 {
                return None;
            }
            offset = offset * self.shape[axis] + local as usize;
        }
        Some(offset)
    }
}

impl GridSource for ArrayGrid {
    fn shape(&self) -> [usize; 3] {
        self.shape
    }
}

impl GridSink for ArrayGrid {
    fn write(&mut self, position: [i64; 3], label: i32) -> Result<(), PartitionError> {
        let offset = self
            .offset_of(position)
            .ok_or(PartitionError::OutOfRange { position })?;
        self.labels[offset] = label;
        Ok(())
    }
}
