//! Garden plots priced by region area and perimeter

use crate::algorithm::regions::{Region, partition_regions};
use crate::spatial::Lattice;

/// Fence cost of a single region
pub fn region_price<T>(region: &Region<T>) -> u64 {
    (region.area() * region.perimeter()) as u64
}

/// Total fence cost: sum of area times perimeter over all plant regions
pub fn fence_price<T>(lattice: &Lattice<T>) -> u64
where
    T: PartialEq + Clone,
{
    partition_regions(lattice)
        .iter()
        .map(region_price)
        .sum()
}
