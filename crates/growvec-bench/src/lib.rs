//! Benchmark helpers for the growvec container.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growvec::GrowVec;

/// Build a container holding `count` sequential `u64` values.
///
/// Pushes from empty so the container goes through its full growth
/// staircase, matching the cold-append path the benchmarks measure.
pub fn filled(count: usize) -> GrowVec<u64> {
    let mut gv = GrowVec::new();
    for i in 0..count {
        gv.push(i as u64).expect("benchmark fill ran out of memory");
    }
    gv
}
