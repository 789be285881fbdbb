//! First-overlap detection over ordered address ranges

use crate::range::{AddressRange, Overlap};

#[cfg(feature = "alloc")]
use crate::region::Region;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Find the first pair of overlapping ranges in scan order
///
/// Scans every pair `(i, j)` with `i < j` and returns on the first hit, so
/// the reported pair is the lexicographically first by position in the
/// slice, not necessarily the only conflict. The scan is O(n^2); region
/// counts are expected to stay in the tens.
pub fn find_overlap<'a>(ranges: &[AddressRange<'a>]) -> Option<Overlap<'a>> {
    for i in 0..ranges.len() {
        for j in (i + 1)..ranges.len() {
            if ranges[i].overlaps(&ranges[j]) {
                return Some(Overlap {
                    first: ranges[i],
                    second: ranges[j],
                });
            }
        }
    }
    None
}

/// Build the ordered range list for a sequence of named regions
///
/// One pass over the input; the output preserves input order, which fixes
/// the tie-break for [`find_overlap`] reporting.
#[cfg(feature = "alloc")]
pub fn collect_ranges<'a, R, I>(regions: I) -> Vec<AddressRange<'a>>
where
    R: Region,
    I: IntoIterator<Item = (&'a str, R)>,
{
    regions
        .into_iter()
        .map(|(name, region)| region.address_range(name))
        .collect()
}
