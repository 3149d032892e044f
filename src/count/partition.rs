use std::ops::Range;

/// Number of partitions (and worker threads) used when none is configured.
pub const DEFAULT_PARTITIONS: usize = 16;

/// Split `[0, len)` into `partitions` contiguous half-open ranges.
///
/// Range `i` is `[i * chunk, (i + 1) * chunk)` with `chunk = len / partitions`;
/// the last range always ends at `len` and absorbs the division remainder.
/// When `len < partitions` every range but the last is empty. The ranges tile
/// `[0, len)` exactly: no gaps, no overlaps, in ascending order.
///
/// `partitions == 0` is treated as 1.
pub fn partition_ranges(len: usize, partitions: usize) -> Vec<Range<usize>> {
    let partitions = partitions.max(1);
    let chunk = len / partitions;

    (0..partitions)
        .map(|i| {
            let start = (i * chunk).min(len);
            let end = if i + 1 == partitions {
                len
            } else {
                ((i + 1) * chunk).min(len)
            };
            start..end
        })
        .collect()
}
