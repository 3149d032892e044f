use memchr::memchr_iter;

/// Count bytes satisfying `pred`, scanning left to right.
///
/// Branchless accumulation: the comparison result is added as 0 or 1 so the
/// loop body has no data-dependent jump and auto-vectorizes for simple
/// predicates.
#[inline]
pub fn count_matching<P>(data: &[u8], pred: P) -> u64
where
    P: Fn(u8) -> bool,
{
    let mut total = 0u64;
    for &b in data {
        total += pred(b) as u64;
    }
    total
}

/// Count occurrences of `target` in `data` with a single sequential pass.
/// An empty buffer yields 0.
#[inline]
pub fn count_byte(data: &[u8], target: u8) -> u64 {
    count_matching(data, |b| b == target)
}

/// Count occurrences of `target` using memchr's SIMD searcher (SSE2/AVX2/NEON).
/// Fastest when matches are sparse; dense matches fall back toward one
/// iterator step per hit.
#[inline]
pub fn count_byte_simd(data: &[u8], target: u8) -> u64 {
    memchr_iter(target, data).count() as u64
}
