use core::fmt;
use core::str::FromStr;

use byteorder::{ByteOrder, NetworkEndian};
use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

use crate::class::AddressClass;
use crate::error::{FormatAddrError, ParseAddrError, WireError};
use crate::text;

pub const ADDR_LEN: usize = 4;

/// An IPv4 address, stored as its four octets in network byte order.
///
/// Construction is total: once a value exists it is valid. Ordering and
/// hashing follow the big-endian byte sequence, so containers keyed on
/// addresses sort by the unsigned 32-bit value.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    AsBytes,
    FromBytes,
    FromZeroes,
    Unaligned,
)]
#[repr(transparent)]
pub struct Ipv4Address([u8; ADDR_LEN]);

impl Ipv4Address {
    pub const UNSPECIFIED: Self = Self([0; ADDR_LEN]);
    pub const LOOPBACK: Self = Self([127, 0, 0, 1]);
    pub const BROADCAST: Self = Self([255; ADDR_LEN]);

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    pub const fn from_bytes(octets: [u8; ADDR_LEN]) -> Self {
        Self(octets)
    }

    /// Builds an address from its host-order 32-bit value.
    pub fn from_u32(value: u32) -> Self {
        let mut octets = [0; ADDR_LEN];
        NetworkEndian::write_u32(&mut octets, value);

        Self(octets)
    }

    pub const fn octets(self) -> [u8; ADDR_LEN] {
        self.0
    }

    /// Returns the host-order 32-bit value. Exact inverse of `from_u32`.
    pub fn to_u32(self) -> u32 {
        NetworkEndian::read_u32(&self.0)
    }

    /// Parses dotted-decimal text. Same path as the `FromStr` impl.
    pub fn parse(text: &str) -> Result<Self, ParseAddrError> {
        text::parse_dotted_quad(text).map(Self)
    }

    /// Writes the dotted-decimal form into `buf` and returns the written
    /// prefix. `text::MAX_TEXT_LEN` bytes always suffice.
    pub fn format_into(self, buf: &mut [u8]) -> Result<&str, FormatAddrError> {
        text::format_dotted_quad(&self.0, buf)
    }

    /// Reads an address from the start of a wire buffer.
    pub fn from_wire(buf: &[u8]) -> Result<Self, WireError> {
        Self::read_from_prefix(buf).ok_or(WireError::Truncated)
    }

    /// Writes the four octets to the start of a wire buffer.
    pub fn write_wire(self, buf: &mut [u8]) -> Result<(), WireError> {
        self.write_to_prefix(buf).ok_or(WireError::BufferTooSmall)
    }

    pub fn is_unspecified(self) -> bool {
        self.to_u32() == 0
    }

    pub fn is_loopback(self) -> bool {
        self.to_u32() & 0xff00_0000 == 0x7f00_0000
    }

    pub fn is_multicast(self) -> bool {
        self.to_u32() & 0xf000_0000 == 0xe000_0000
    }

    pub fn is_broadcast(self) -> bool {
        self == Self::BROADCAST
    }

    pub fn is_link_local(self) -> bool {
        self.to_u32() & 0xffff_0000 == 0xa9fe_0000
    }

    /// Legacy classful category of this address.
    pub fn class(self) -> AddressClass {
        AddressClass::of(self.to_u32())
    }

    /// Legacy: top bit 0.
    pub fn is_class_a(self) -> bool {
        self.class() == AddressClass::A
    }

    /// Legacy: top bits 10.
    pub fn is_class_b(self) -> bool {
        self.class() == AddressClass::B
    }

    /// Legacy: top bits 110.
    pub fn is_class_c(self) -> bool {
        self.class() == AddressClass::C
    }

    /// Legacy classful netmask, class A checked first.
    pub fn netmask(self) -> Self {
        match self.class() {
            AddressClass::A => Self::new(255, 0, 0, 0),
            AddressClass::B => Self::new(255, 255, 0, 0),
            AddressClass::C => Self::new(255, 255, 255, 0),
            _ => Self::BROADCAST,
        }
    }

    /// Directed broadcast address for this address under `netmask`.
    pub fn broadcast(self, netmask: Self) -> Self {
        Self::from_u32(self.to_u32() | !netmask.to_u32())
    }
}

impl From<[u8; ADDR_LEN]> for Ipv4Address {
    fn from(octets: [u8; ADDR_LEN]) -> Self {
        Self(octets)
    }
}

impl From<Ipv4Address> for [u8; ADDR_LEN] {
    fn from(addr: Ipv4Address) -> Self {
        addr.0
    }
}

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> Self {
        addr.to_u32()
    }
}

impl FromStr for Ipv4Address {
    type Err = ParseAddrError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl fmt::Debug for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ipv4Address({})", self)
    }
}

impl defmt::Format for Ipv4Address {
    fn format(&self, fmt: defmt::Formatter) {
        let [a, b, c, d] = self.0;
        defmt::write!(fmt, "{=u8}.{=u8}.{=u8}.{=u8}", a, b, c, d)
    }
}
