//! Fixed-capacity record pool
//!
//! Append-only registry of plain-old-data records stored in a single arena.

use std::marker::PhantomData;
use std::mem::size_of;

use bytemuck::Pod;

use super::arena::{Arena, ArenaRegion};
use crate::error::{SimError, SimResult};

/// A fixed-capacity pool of `T` records backed by one [`Arena`].
///
/// The arena is sized for exactly `capacity` records when the pool is
/// created. Records are addressed by slot index, kept in insertion order and
/// never removed; tearing the pool down releases all of them at once.
///
/// # Example
///
/// ```rust,ignore
/// let mut pool: Pool<Planet> = Pool::new(100)?;
/// let index = pool.insert(&planet)?;
/// for planet in pool.iter() { /* draw */ }
/// pool.teardown();
/// ```
#[derive(Debug)]
pub struct Pool<T> {
    /// Arena regions of the live records, in insertion order.
    slots: Vec<ArenaRegion>,
    /// Maximum number of records.
    capacity: usize,
    /// Backing storage for every record.
    arena: Arena,
    _phantom: PhantomData<T>,
}

impl<T: Pod> Pool<T> {
    /// Creates an empty pool with room for `capacity` records.
    ///
    /// Arena and slot-table failures are wrapped in
    /// [`SimError::PoolInitFailure`].
    pub fn new(capacity: usize) -> SimResult<Self> {
        let arena = capacity
            .checked_mul(size_of::<T>())
            .ok_or(SimError::AllocationFailure { bytes: usize::MAX })
            .and_then(Arena::new)
            .map_err(|e| SimError::PoolInitFailure(Box::new(e)))?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|_| {
            SimError::PoolInitFailure(Box::new(SimError::AllocationFailure {
                bytes: capacity.saturating_mul(size_of::<ArenaRegion>()),
            }))
        })?;

        Ok(Self {
            slots,
            capacity,
            arena,
            _phantom: PhantomData,
        })
    }

    /// Bytes a pool of `capacity` records accounts for: the records plus
    /// the pool and arena headers. Informational only.
    pub const fn footprint_bytes(capacity: usize) -> usize {
        capacity * size_of::<T>() + size_of::<Self>() + size_of::<Arena>()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Read access to the backing arena (diagnostics)
    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Copies `value` into a freshly bump-allocated slot.
    ///
    /// Returns the new slot index, or [`SimError::PoolFull`] without touching
    /// the pool when every slot is taken.
    pub fn insert(&mut self, value: &T) -> SimResult<usize> {
        if self.is_full() {
            return Err(SimError::PoolFull {
                capacity: self.capacity,
            });
        }

        let region = self.arena.allocate(size_of::<T>())?;
        self.store(region, value);

        let index = self.slots.len();
        self.slots.push(region);
        Ok(index)
    }

    /// Copy of the record at `index`
    pub fn get(&self, index: usize) -> Option<T> {
        let region = *self.slots.get(index)?;
        self.load(region)
    }

    /// Overwrites the record at `index` in place.
    ///
    /// Returns `false` if the slot is not occupied.
    pub fn set(&mut self, index: usize, value: &T) -> bool {
        match self.slots.get(index) {
            Some(&region) => self.store(region, value),
            None => false,
        }
    }

    /// Runs `f` on the records at slots `i` and `j` and writes both back.
    ///
    /// Returns `None` if either slot is empty or `i == j`.
    pub fn with_pair<R>(
        &mut self,
        i: usize,
        j: usize,
        f: impl FnOnce(&mut T, &mut T) -> R,
    ) -> Option<R> {
        if i == j {
            return None;
        }
        let mut a = self.get(i)?;
        let mut b = self.get(j)?;

        let out = f(&mut a, &mut b);

        self.set(i, &a);
        self.set(j, &b);
        Some(out)
    }

    /// Iterates over the live records in insertion order.
    ///
    /// The iterator yields copies; it can be restarted by calling `iter`
    /// again.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.slots.iter().filter_map(|&region| self.load(region))
    }

    /// Releases the arena, and with it every record, in one operation.
    pub fn teardown(self) {
        let Self { slots, arena, .. } = self;
        log::debug!("Pool released ({} records)", slots.len());
        arena.teardown();
    }

    fn load(&self, region: ArenaRegion) -> Option<T> {
        self.arena
            .bytes(region)
            .map(bytemuck::pod_read_unaligned::<T>)
    }

    fn store(&mut self, region: ArenaRegion, value: &T) -> bool {
        match self.arena.bytes_mut(region) {
            Some(bytes) => {
                bytes.copy_from_slice(bytemuck::bytes_of(value));
                true
            }
            None => false,
        }
    }
}
