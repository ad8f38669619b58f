//! Opt-in microbenchmark binary, not part of the public library surface
//! (spec §1 scopes CLI/benchmark harnesses as external collaborators).
//! Grounded directly on the teacher's `main.rs` harness: same
//! `benchmark_find!`-shaped closure, same `fastrand::Rng::with_seed(123)`
//! workload generator, same `hashbrown::HashSet` baseline for comparison,
//! swapped from the teacher's cuckoo-table variants to [`swiss_flat_set::LongSet`].

use std::hint::black_box;
use std::time::Instant;

use swiss_flat_set::LongSet;

const ITERS: usize = 10_000_000;

fn benchmark_swiss_set(n: usize) {
    let mut set = LongSet::new(n).expect("n must be non-zero and within capacity limits");
    let mut rng = fastrand::Rng::with_seed(123);
    for _ in 0..n {
        let key = rng.u64(..);
        set.put(key).expect("entry width is fixed at 8 bytes");
    }

    let start = Instant::now();
    let mut found = 0usize;
    for _ in 0..ITERS {
        let key = rng.u64(..);
        found += set.find(key).expect("entry width is fixed at 8 bytes") as usize;
    }
    black_box(found);
    let duration = start.elapsed();
    println!(
        "LongSet/{n}: {:.2} ns/op",
        duration.as_nanos() as f64 / ITERS as f64
    );
}

fn benchmark_hashbrown_baseline(n: usize) {
    let mut set = hashbrown::HashSet::with_capacity(n);
    let mut rng = fastrand::Rng::with_seed(123);
    for _ in 0..n {
        set.insert(rng.u64(..));
    }

    let start = Instant::now();
    let mut found = 0usize;
    for _ in 0..ITERS {
        let key = rng.u64(..);
        found += set.contains(&key) as usize;
    }
    black_box(found);
    let duration = start.elapsed();
    println!(
        "hashbrown::HashSet/{n}: {:.2} ns/op",
        duration.as_nanos() as f64 / ITERS as f64
    );
}

fn main() {
    benchmark_swiss_set(1_000_000);
    benchmark_hashbrown_baseline(1_000_000);
}
