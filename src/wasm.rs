use crate::grid::oct_partition;
use crate::metric::{Metric, random_indices};
use crate::partition::{NearestCenter, VoxelPartition};
use crate::superset::CellSuperset;
use js_sys::Array;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}

fn parse_js_point<const D: usize>(val: &JsValue) -> Option<[f64; D]> {
    let arr = val.dyn_ref::<Array>()?;
    if arr.length() < D as u32 {
        return None;
    }
    let mut point = [0.0; D];
    for i in 0..D {
        point[i] = arr.get(i as u32).as_f64()?;
    }
    Some(point)
}

/// WASM wrapper for a 3D partition tree over a dense voxel grid.
#[wasm_bindgen]
pub struct Partition3D {
    inner: VoxelPartition<3>,
}

#[wasm_bindgen]
impl Partition3D {
    /// Creates the trivial root partition over a grid of the given extents.
    #[wasm_bindgen(constructor)]
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Partition3D {
        let superset = Arc::new(CellSuperset::filled([size_x, size_y, size_z], 0));
        Partition3D {
            inner: VoxelPartition::new(superset),
        }
    }

    #[wasm_bindgen(js_name = memberCount)]
    pub fn member_count(&self) -> usize {
        self.inner.member_count()
    }

    #[wasm_bindgen(js_name = countParts)]
    pub fn count_parts(&self) -> usize {
        self.inner.parts().len()
    }

    /// Partitions against `count` randomly sampled cell centers.
    #[wasm_bindgen(js_name = partitionRandom)]
    pub fn partition_random(&mut self, count: usize) {
        let shape = self.inner.superset().shape();
        let mut rng = StdRng::seed_from_u64(get_seed());
        let centers: Vec<[f64; 3]> = random_indices(&mut rng, shape, count)
            .into_iter()
            .map(|index| [index[0] as f64, index[1] as f64, index[2] as f64])
            .collect();
        self.inner.partition(&NearestCenter, Metric::Euclidean, &centers);
    }

    /// Partitions against caller-supplied centers, an array of `[x, y, z]`
    /// arrays.
    #[wasm_bindgen(js_name = partitionCenters)]
    pub fn partition_centers(&mut self, centers: JsValue) -> Result<(), JsValue> {
        let arr = centers
            .dyn_ref::<Array>()
            .ok_or_else(|| JsValue::from_str("centers must be an array"))?;

        let mut parsed = Vec::with_capacity(arr.length() as usize);
        for val in arr.iter() {
            let point = parse_js_point::<3>(&val)
                .ok_or_else(|| JsValue::from_str("center must be an [x, y, z] array"))?;
            parsed.push(point);
        }

        self.inner.partition(&NearestCenter, Metric::Euclidean, &parsed);
        Ok(())
    }

    /// Subdivides the root into up to 8 octant-like parts.
    #[wasm_bindgen(js_name = octPartition)]
    pub fn oct_partition(&mut self) {
        oct_partition(&mut self.inner);
    }

    /// Flat row-major label buffer: each cell claimed by a direct child holds
    /// its label, unclaimed cells hold the superset background.
    pub fn labels(&self) -> Vec<i32> {
        let superset = self.inner.superset();
        let mut labels = vec![0; superset.len()];
        for (label, index) in self.inner.labeled_members() {
            labels[superset.linear(&index)] = label;
        }
        labels
    }

    #[wasm_bindgen(js_name = boundsMin)]
    pub fn bounds_min(&self) -> Option<Vec<u32>> {
        self.inner
            .bounds()
            .map(|bounds| bounds.min.iter().map(|&c| c as u32).collect())
    }

    #[wasm_bindgen(js_name = boundsMax)]
    pub fn bounds_max(&self) -> Option<Vec<u32>> {
        self.inner
            .bounds()
            .map(|bounds| bounds.max.iter().map(|&c| c as u32).collect())
    }
}
