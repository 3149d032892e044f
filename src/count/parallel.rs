use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use super::core::{count_byte, count_byte_simd, count_matching};
use super::partition::partition_ranges;

/// Count bytes satisfying `pred` across `partitions` concurrent workers.
///
/// One scoped thread is spawned per non-empty partition; empty partitions
/// (only possible when `data.len() < partitions`) contribute zero without a
/// thread. Each worker counts its range with [`count_matching`] and folds the
/// partial count into a shared `AtomicU64` with a single `fetch_add`.
///
/// The accumulator is only read through `into_inner` after the scope has
/// joined every worker, so no partial total is ever observable. A panicking
/// worker propagates out of the scope.
pub fn count_matching_partitioned<P>(data: &[u8], partitions: usize, pred: P) -> u64
where
    P: Fn(u8) -> bool + Sync,
{
    sum_partitions(data, partitions, |chunk| count_matching(chunk, &pred))
}

/// Fan `count` out over the partitions of `data` and add every partial
/// result into one atomic accumulator, read after the join.
fn sum_partitions<C>(data: &[u8], partitions: usize, count: C) -> u64
where
    C: Fn(&[u8]) -> u64 + Sync,
{
    let ranges = partition_ranges(data.len(), partitions);
    log::debug!(
        "partitioned scan: {} bytes over {} partitions (chunk {})",
        data.len(),
        ranges.len(),
        ranges.first().map_or(0, |r| r.len())
    );

    let total = AtomicU64::new(0);
    std::thread::scope(|s| {
        for (index, range) in ranges.into_iter().enumerate() {
            if range.is_empty() {
                continue;
            }
            let total = &total;
            let count = &count;
            s.spawn(move || {
                let local = count(&data[range.clone()]);
                log::trace!("partition {index} [{}, {}): {local}", range.start, range.end);
                // Relaxed is enough: the scope join orders every add before the read.
                total.fetch_add(local, Ordering::Relaxed);
            });
        }
    });
    total.into_inner()
}

/// Count occurrences of `target` across `partitions` concurrent workers
/// sharing one atomic accumulator. Always equals [`count_byte`].
pub fn count_byte_partitioned(data: &[u8], target: u8, partitions: usize) -> u64 {
    count_matching_partitioned(data, partitions, |b| b == target)
}

/// Same partitions and atomic accumulator as [`count_byte_partitioned`], with
/// each worker running the memchr SIMD counter over its range.
pub fn count_byte_partitioned_simd(data: &[u8], target: u8, partitions: usize) -> u64 {
    sum_partitions(data, partitions, |chunk| count_byte_simd(chunk, target))
}

/// Same partitioning as [`count_byte_partitioned`], but each worker writes
/// its partial count into a private slot and the slots are summed after the
/// join. Workers share no mutable state at all.
pub fn count_byte_partitioned_slots(data: &[u8], target: u8, partitions: usize) -> u64 {
    let ranges = partition_ranges(data.len(), partitions);
    let mut slots = vec![0u64; ranges.len()];

    std::thread::scope(|s| {
        for (slot, range) in slots.iter_mut().zip(ranges) {
            if range.is_empty() {
                continue;
            }
            s.spawn(move || {
                *slot = count_byte(&data[range], target);
            });
        }
    });
    slots.iter().sum()
}

/// Same partitioning scanned on the rayon pool, reduced with a parallel sum.
/// Worker count follows the pool size rather than `partitions`.
pub fn count_byte_rayon(data: &[u8], target: u8, partitions: usize) -> u64 {
    partition_ranges(data.len(), partitions)
        .into_par_iter()
        .map(|range| count_byte(&data[range], target))
        .sum()
}
