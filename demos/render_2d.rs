//! Visual walkthrough of recursive 2D partitioning.
//!
//! Builds a trivial 20x20 partition, runs a random-center Voronoi partition,
//! prints each part, then quad-partitions the first part. Labels render as
//! label + 1, so the untouched root prints as a field of member marks.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use voxelpart::{
    CellSuperset, Metric, NearestCenter, VoxelPartition, quad_partition, random_indices,
};

fn print_partition(partition: &VoxelPartition<2>) {
    println!(
        "shape: {:?}  bounds: {:?}  members: {}",
        partition.superset().shape(),
        partition.bounds(),
        partition.member_count()
    );
    print!("parts: {{ ");
    for (label, part) in partition.parts() {
        print!("{}: {} members  ", label, part.member_count());
    }
    println!("}}");

    let canvas = partition.render().expect("2D tree renders");
    let [_, width] = partition.superset().shape();
    for row in canvas.chunks(width) {
        let line: Vec<String> = row.iter().map(|v| format!("{:2}", v)).collect();
        println!("{}", line.join(" "));
    }
    println!();
}

fn main() {
    let mut rng = StdRng::seed_from_u64(2026);
    let superset = Arc::new(CellSuperset::filled([20, 20], 0));

    println!("Initial trivial partition of a 20x20 grid:\n");
    let mut root = VoxelPartition::new(Arc::clone(&superset));
    print_partition(&root);

    println!("After a random-center Voronoi partition:\n");
    let centers: Vec<[f64; 2]> = random_indices(&mut rng, superset.shape(), 4)
        .into_iter()
        .map(|index| [index[0] as f64, index[1] as f64])
        .collect();
    root.partition(&NearestCenter, Metric::Euclidean, &centers);
    print_partition(&root);

    println!("Each sub-partition:\n");
    for part in root.parts().values() {
        print_partition(part);
    }

    println!("Quad-space partitioning of the first part:\n");
    let first_label = *root.parts().keys().next().expect("Root has parts");
    let first = root.part_mut(first_label).expect("First part exists");
    quad_partition(first);
    print_partition(first);
}
