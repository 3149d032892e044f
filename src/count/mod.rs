mod core;
mod parallel;
mod partition;
mod target;


pub use self::core::{count_byte, count_byte_simd, count_matching};
pub use self::parallel::{
    count_byte_partitioned, count_byte_partitioned_simd, count_byte_partitioned_slots,
    count_byte_rayon, count_matching_partitioned,
};
pub use self::partition::{DEFAULT_PARTITIONS, partition_ranges};
pub use self::target::{TargetByteError, parse_target_byte};
