use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::{BTreeMap, HashSet};
use std::hint::black_box;
use cow_linked_map::CowLinkedMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    let mut seen = HashSet::with_capacity(n);
    keys.retain(|&k| seen.insert(k));
    keys
}

/// Same keys in a different pseudo-random order, so lookups do not follow insertion order.
fn shuffled(keys: &[i64]) -> Vec<i64> {
    let mut order = keys.to_vec();
    let mut x: u64 = 67890;
    for i in (1..order.len()).rev() {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        let j = ((x >> 33) % (i as u64 + 1)) as usize;
        order.swap(i, j);
    }
    order
}

fn filled(keys: &[i64]) -> CowLinkedMap<i64, i64> {
    let mut map = CowLinkedMap::new();
    for &k in keys {
        map.insert_back(k, k).unwrap();
    }
    map
}

// ─── Insert ──────────────────────────────────────────────────────────────────

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    group.bench_function(BenchmarkId::new("CowLinkedMap", N), |b| {
        b.iter(|| {
            let mut map = CowLinkedMap::new();
            for i in 0..N as i64 {
                map.insert_front(i, i).unwrap();
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_after(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_after");

    group.bench_function(BenchmarkId::new("CowLinkedMap", N), |b| {
        b.iter(|| {
            let mut map = CowLinkedMap::new();
            map.insert_front(0i64, 0i64).unwrap();
            for i in 1..N as i64 {
                map.insert_after(&(i / 2), i, i).unwrap();
            }
            map
        });
    });

    group.finish();
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

fn bench_read_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let map = filled(&keys);
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let lookups = shuffled(&keys);

    let mut group = c.benchmark_group("read_random");

    group.bench_function(BenchmarkId::new("CowLinkedMap", keys.len()), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &lookups {
                if let Ok(&v) = map.read(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", keys.len()), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &lookups {
                if let Some(&v) = bt_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

// ─── Remove ──────────────────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let map = filled(&keys);
    let removals = shuffled(&keys);
    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("CowLinkedMap", keys.len()), |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                for &k in &removals {
                    map.remove(&k).unwrap();
                }
                map
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Copy-on-write ───────────────────────────────────────────────────────────

fn bench_clone(c: &mut Criterion) {
    let keys = random_keys(N);
    let shared = filled(&keys);
    let mut exposed = filled(&keys);
    let _ = exposed.read_mut(&keys[0]).unwrap();

    let mut group = c.benchmark_group("clone");

    group.bench_function(BenchmarkId::new("shared", keys.len()), |b| {
        b.iter(|| black_box(shared.clone()));
    });

    group.bench_function(BenchmarkId::new("exposed", keys.len()), |b| {
        b.iter(|| black_box(exposed.clone()));
    });

    group.bench_function(BenchmarkId::new("clone_then_write", keys.len()), |b| {
        b.iter(|| {
            let mut copy = shared.clone();
            copy.insert_front(-1, -1).unwrap();
            copy
        });
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_front, bench_insert_after,);

criterion_group!(read_benches, bench_read_random,);

criterion_group!(remove_benches, bench_remove_random,);

criterion_group!(cow_benches, bench_clone,);

criterion_main!(insert_benches, read_benches, remove_benches, cow_benches,);
