//! Membership resolution benchmarks
//!
//! Measures full-closure computation over include chains of varying depth,
//! fast-path lookups against a fully expanded resolver, and lazy expansion
//! over randomly wired include graphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use group_membership::{GroupId, InMemoryGroupIncludeCache, MembershipResolver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Linear chain: ids[i+1] includes ids[i]
fn build_chain(depth: usize) -> (Arc<InMemoryGroupIncludeCache>, Vec<GroupId>) {
    let cache = Arc::new(InMemoryGroupIncludeCache::new());
    let ids: Vec<GroupId> = (0..depth).map(|_| GroupId::random()).collect();
    for pair in ids.windows(2) {
        cache.add_include(pair[1], pair[0]);
    }
    (cache, ids)
}

/// Random graph with `nodes` groups and `edges` include relations
fn build_random_graph(nodes: usize, edges: usize) -> (Arc<InMemoryGroupIncludeCache>, Vec<GroupId>) {
    let mut rng = StdRng::seed_from_u64(42);
    let cache = Arc::new(InMemoryGroupIncludeCache::new());
    let ids: Vec<GroupId> = (0..nodes).map(|_| GroupId::random()).collect();
    for _ in 0..edges {
        let parent = ids[rng.gen_range(0..nodes)];
        let child = ids[rng.gen_range(0..nodes)];
        cache.add_include(parent, child);
    }
    (cache, ids)
}

fn bench_full_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_closure");

    for depth in [10, 100, 1000].iter() {
        let (cache, ids) = build_chain(*depth);
        group.bench_with_input(BenchmarkId::new("chain_depth", depth), depth, |b, _| {
            b.iter(|| {
                let mut resolver = MembershipResolver::new(cache.clone(), [ids[0]]);
                let closure = resolver.known_groups().unwrap();
                black_box(closure);
            });
        });
    }

    group.finish();
}

fn bench_fast_path_contains(c: &mut Criterion) {
    let (cache, ids) = build_chain(1000);
    let mut resolver = MembershipResolver::new(cache, [ids[0]]);
    resolver.known_groups().unwrap();

    c.bench_function("fast_path_contains", |b| {
        b.iter(|| {
            let hit = resolver.contains(black_box(Some(&ids[999]))).unwrap();
            black_box(hit);
        });
    });
}

fn bench_lazy_contains_random_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_contains");

    for (nodes, edges) in [(100, 300), (1000, 3000)].iter() {
        let (cache, ids) = build_random_graph(*nodes, *edges);
        group.bench_with_input(
            BenchmarkId::new("nodes", nodes),
            &(*nodes, *edges),
            |b, _| {
                b.iter(|| {
                    let mut resolver = MembershipResolver::new(cache.clone(), [ids[0]]);
                    let hit = resolver.contains(black_box(Some(&ids[nodes - 1]))).unwrap();
                    black_box(hit);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_full_closure,
    bench_fast_path_contains,
    bench_lazy_contains_random_graph
);
criterion_main!(benches);
