//! Bump arena
//!
//! A single byte block with a monotonically increasing `used` offset.

use crate::error::{SimError, SimResult};

/// A byte range previously handed out by [`Arena::allocate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArenaRegion {
    offset: usize,
    len: usize,
}

impl ArenaRegion {
    /// Byte offset from the start of the arena
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// A bump-pointer arena.
///
/// Allocation only advances `used`; there is no per-allocation free and the
/// arena never grows. The backing block is released when the arena is torn
/// down (or dropped), which invalidates every region it handed out.
///
/// Regions carry no alignment guarantee beyond allocation order, so records
/// are copied in and out rather than borrowed in place.
#[derive(Debug)]
pub struct Arena {
    storage: Box<[u8]>,
    used: usize,
}

impl Arena {
    /// Reserves a zeroed block of `capacity` bytes.
    ///
    /// Fails with [`SimError::AllocationFailure`] if the allocator refuses
    /// the request.
    pub fn new(capacity: usize) -> SimResult<Self> {
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| SimError::AllocationFailure { bytes: capacity })?;
        storage.resize(capacity, 0u8);

        Ok(Self {
            storage: storage.into_boxed_slice(),
            used: 0,
        })
    }

    /// Total capacity in bytes
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bytes handed out so far
    #[inline]
    pub const fn used(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.used
    }

    /// Carves `size` bytes off the front of the free space.
    ///
    /// A request that does not fit returns [`SimError::CapacityExceeded`]
    /// and leaves the arena untouched.
    pub fn allocate(&mut self, size: usize) -> SimResult<ArenaRegion> {
        let end = self
            .used
            .checked_add(size)
            .filter(|&end| end <= self.capacity())
            .ok_or(SimError::CapacityExceeded {
                requested: size,
                remaining: self.remaining(),
                capacity: self.capacity(),
            })?;

        let region = ArenaRegion {
            offset: self.used,
            len: size,
        };
        self.used = end;
        Ok(region)
    }

    /// Bytes of a region, or `None` if it was not handed out by this arena
    #[inline]
    pub fn bytes(&self, region: ArenaRegion) -> Option<&[u8]> {
        if region.offset + region.len > self.used {
            return None;
        }
        self.storage.get(region.range())
    }

    #[inline]
    pub fn bytes_mut(&mut self, region: ArenaRegion) -> Option<&mut [u8]> {
        if region.offset + region.len > self.used {
            return None;
        }
        self.storage.get_mut(region.range())
    }

    /// Releases the whole block in one go.
    pub fn teardown(self) {
        log::debug!(
            "Arena released ({} of {} bytes used)",
            self.used,
            self.capacity()
        );
    }
}
