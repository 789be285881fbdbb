//! Half-open address ranges derived from region descriptions

/// Address range claimed by a named region
///
/// The range is half-open: `end` is one past the last byte. Two ranges that
/// merely touch do not overlap, and a zero-size region covers no addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange<'a> {
    /// Name of the region this range belongs to
    pub name: &'a str,
    /// First address covered
    pub start: u64,
    /// One past the last address covered
    pub end: u64,
}

impl<'a> AddressRange<'a> {
    /// Build a range from a base address and byte size
    ///
    /// Saturates at the top of the address space so `end >= start` holds
    /// for any input.
    pub const fn new(name: &'a str, base_address: u64, size_bytes: u64) -> Self {
        Self {
            name,
            start: base_address,
            end: base_address.saturating_add(size_bytes),
        }
    }

    /// Number of addresses covered
    pub const fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the range covers no addresses
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Half-open interval overlap test
    ///
    /// Empty ranges overlap nothing, and ranges that only touch at a
    /// boundary do not overlap.
    pub const fn overlaps(&self, other: &AddressRange<'_>) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl core::fmt::Display for AddressRange<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.start, self.end)
    }
}

/// A conflicting pair of ranges, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap<'a> {
    /// Range that appears first in the document
    pub first: AddressRange<'a>,
    /// Range that appears later and collides with `first`
    pub second: AddressRange<'a>,
}

impl core::fmt::Display for Overlap<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} overlaps with {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_half_open() {
        let a = AddressRange::new("a", 1000, 100);
        let b = AddressRange::new("b", 1050, 100);
        let c = AddressRange::new("c", 1100, 50);

        // Partial overlap, both directions
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Touching at 1100 is not an overlap
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn contained_range_overlaps() {
        let outer = AddressRange::new("outer", 0, 1000);
        let inner = AddressRange::new("inner", 100, 10);

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn zero_size_range_never_overlaps() {
        let a = AddressRange::new("a", 1000, 100);
        let empty = AddressRange::new("empty", 1000, 0);

        assert!(empty.is_empty());
        assert!(!a.overlaps(&empty));
        assert!(!empty.overlaps(&a));
        assert!(!empty.overlaps(&empty));
    }

    #[test]
    fn range_end_saturates() {
        let range = AddressRange::new("top", u64::MAX - 4, 16);
        assert_eq!(range.end, u64::MAX);
        assert!(range.end >= range.start);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn report_format() {
        use alloc::string::ToString;

        let overlap = Overlap {
            first: AddressRange::new("port1", 1000, 200),
            second: AddressRange::new("port2", 1100, 50),
        };
        assert_eq!(
            overlap.to_string(),
            "port1 (1000-1200) overlaps with port2 (1100-1150)"
        );
    }
}
