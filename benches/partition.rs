use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use voxelpart::{CellSuperset, Metric, NearestCenter, VoxelPartition, oct_partition};

fn benchmark_root_construction(c: &mut Criterion) {
    let superset = Arc::new(CellSuperset::filled([32, 32, 32], 0));

    c.bench_function("root_construction_32768", |b| {
        b.iter(|| {
            let root = VoxelPartition::new(Arc::clone(&superset));
            black_box(root.member_count());
        })
    });
}

fn benchmark_oct_partition(c: &mut Criterion) {
    let superset = Arc::new(CellSuperset::filled([16, 16, 16], 0));

    c.bench_function("oct_partition_4096", |b| {
        b.iter(|| {
            let mut root = VoxelPartition::new(Arc::clone(&superset));
            oct_partition(&mut root);
            black_box(root.parts().len());
        })
    });
}

fn benchmark_many_centers(c: &mut Criterion) {
    let superset = Arc::new(CellSuperset::filled([16, 16, 16], 0));
    let mut centers: Vec<[f64; 3]> = Vec::with_capacity(64);
    for i in 0..64 {
        let v = (i as f64 / 64.0) * 16.0;
        centers.push([v, v, v]);
    }

    c.bench_function("partition_4096_cells_64_centers", |b| {
        b.iter(|| {
            let mut root = VoxelPartition::new(Arc::clone(&superset));
            root.partition(&NearestCenter, Metric::Euclidean, &centers);
            black_box(root.parts().len());
        })
    });
}

criterion_group!(
    benches,
    benchmark_root_construction,
    benchmark_oct_partition,
    benchmark_many_centers
);
criterion_main!(benches);
