//! Region descriptions for register map documents

use crate::range::AddressRange;

/// Attribute keys every region description must carry (wire-format names)
pub const REQUIRED_ATTRIBUTES: [&str; 4] = ["baseAddress", "protocol", "sizeBytes", "widthBits"];

/// Core region trait for representation-agnostic access
///
/// The validation functions only need to know which attributes a region
/// carries and where it sits in the address space, so documents can back
/// this with a dynamic attribute map while typed code uses [`RegionSpec`].
pub trait Region {
    /// Whether the region carries the named attribute
    fn has_attribute(&self, key: &str) -> bool;

    /// First address covered by the region
    fn base_address(&self) -> u64;

    /// Extent of the region in bytes
    fn size_bytes(&self) -> u64;

    /// Derive the half-open address range claimed by this region
    fn address_range<'a>(&self, name: &'a str) -> AddressRange<'a> {
        AddressRange::new(name, self.base_address(), self.size_bytes())
    }
}

impl<R: Region + ?Sized> Region for &R {
    fn has_attribute(&self, key: &str) -> bool {
        (**self).has_attribute(key)
    }

    fn base_address(&self) -> u64 {
        (**self).base_address()
    }

    fn size_bytes(&self) -> u64 {
        (**self).size_bytes()
    }
}

/// A fully-specified region description
///
/// Field names map to the wire-format attribute keys, so a serialized
/// `RegionSpec` carries exactly the required attribute set.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RegionSpec {
    /// First address covered by the region
    pub base_address: u64,
    /// Bus protocol the region speaks (not interpreted by validation)
    pub protocol: alloc::string::String,
    /// Extent of the region in bytes
    pub size_bytes: u64,
    /// Data bus width in bits
    pub width_bits: u32,
}

#[cfg(feature = "alloc")]
impl Region for RegionSpec {
    fn has_attribute(&self, key: &str) -> bool {
        REQUIRED_ATTRIBUTES.contains(&key)
    }

    fn base_address(&self) -> u64 {
        self.base_address
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "alloc")]
    #[test]
    fn region_spec_carries_required_attributes() {
        use alloc::string::ToString;

        let spec = RegionSpec {
            base_address: 0x1000,
            protocol: "APB".to_string(),
            size_bytes: 256,
            width_bits: 32,
        };

        for key in REQUIRED_ATTRIBUTES {
            assert!(spec.has_attribute(key));
        }
        assert!(!spec.has_attribute("interrupts"));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn region_spec_address_range() {
        use alloc::string::ToString;

        let spec = RegionSpec {
            base_address: 4096,
            protocol: "AXI".to_string(),
            size_bytes: 512,
            width_bits: 64,
        };

        let range = spec.address_range("dma0");
        assert_eq!(range.name, "dma0");
        assert_eq!(range.start, 4096);
        assert_eq!(range.end, 4608);
    }
}
