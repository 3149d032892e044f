/// Use mimalloc as the global allocator for the binary and benches.
/// Scans allocate little, but thread spawn and file loading benefit from
/// mimalloc's thread-local caches.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod common;
pub mod count;
