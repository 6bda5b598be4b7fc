//! Named Memory Region.
//!
//! A region is a contiguous, inclusive address range `[begin, end]` backed by
//! a zero-initialized byte buffer of exactly `end - begin + 1` bytes.

/// One named, contiguous range of simulated memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Region {
    name: String,
    begin: u32,
    end: u32,
    bytes: Vec<u8>,
}

impl Region {
    /// Creates a zeroed region covering `size` bytes starting at `begin`.
    ///
    /// # Arguments
    ///
    /// * `name`  - Display name (e.g. `"text"`).
    /// * `begin` - First address covered.
    /// * `size`  - Number of bytes; must be non-zero and must not wrap past `u32::MAX`.
    ///   Callers validate this through `Config::validate`; an out-of-range
    ///   size is clamped to the end of the address space.
    pub fn new(name: impl Into<String>, begin: u32, size: u32) -> Self {
        let end = begin.saturating_add(size.max(1) - 1);
        let len = (end - begin) as usize + 1;
        Self {
            name: name.into(),
            begin,
            end,
            bytes: vec![0; len],
        }
    }

    /// Region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First address covered.
    pub const fn begin(&self) -> u32 {
        self.begin
    }

    /// Last address covered (inclusive).
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Number of bytes backing the region.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: a region covers at least one byte.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if `addr` lies within `[begin, end]`.
    #[inline]
    pub const fn contains(&self, addr: u32) -> bool {
        addr >= self.begin && addr <= self.end
    }

    /// Returns `true` if the two regions share at least one address.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }

    #[inline]
    pub(crate) fn read_u8(&self, addr: u32) -> u8 {
        self.bytes
            .get((addr.wrapping_sub(self.begin)) as usize)
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub(crate) fn write_u8(&mut self, addr: u32, val: u8) {
        if let Some(b) = self.bytes.get_mut((addr.wrapping_sub(self.begin)) as usize) {
            *b = val;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("name", &self.name)
            .field("begin", &format_args!("{:#010x}", self.begin))
            .field("end", &format_args!("{:#010x}", self.end))
            .finish_non_exhaustive()
    }
}
