use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use metrics::counter;

use crate::core::error::RingBufferError;

pub use mode::SearchMode;

mod mode;

pub const ADDED_METRIC_NAME: &str = "ringbuff_added_total";
pub const EVICTED_METRIC_NAME: &str = "ringbuff_evicted_total";
pub const LOOKUPS_METRIC_NAME: &str = "ringbuff_lookups_total";
pub const RESETS_METRIC_NAME: &str = "ringbuff_resets_total";

/// Fixed size storage plus write cursor. Only ever touched under the buffer lock.
struct Slots {
    entries: Box<[Option<Box<[u8]>>]>,
    cursor: usize,
    count: usize,
}

impl Slots {
    fn new(capacity: usize) -> Self {
        Self {
            entries: (0..capacity).map(|_| None).collect(),
            cursor: 0,
            count: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Writes at the cursor and advances it. Returns true if a resident element was evicted.
    fn push(&mut self, data: &[u8]) -> bool {
        let evicted = self.count == self.capacity();
        self.entries[self.cursor] = Some(Box::from(data));
        self.cursor = (self.cursor + 1) % self.capacity();
        if !evicted {
            self.count += 1;
        }
        evicted
    }

    /// Resident element at insertion position `n`, 0 being the oldest.
    fn nth(&self, n: usize) -> Option<&[u8]> {
        if n >= self.count {
            return None;
        }
        let capacity = self.capacity();
        let idx = (self.cursor + capacity - self.count + n) % capacity;
        self.entries[idx].as_deref()
    }

    fn oldest(&self) -> Option<&[u8]> {
        self.nth(0)
    }

    fn recent(&self) -> Option<&[u8]> {
        self.count.checked_sub(1).and_then(|n| self.nth(n))
    }

    fn contains(&self, data: &[u8], mode: SearchMode) -> bool {
        let is_match = |n: usize| self.nth(n) == Some(data);
        match mode {
            SearchMode::Recent => (0..self.count).rev().any(is_match),
            SearchMode::Oldest => (0..self.count).any(is_match),
        }
    }

    fn clear(&mut self) {
        self.entries.iter_mut().for_each(|entry| *entry = None);
        self.cursor = 0;
        self.count = 0;
    }
}

/// Thread safe circular buffer of byte sequences.
///
/// Once `capacity` elements are resident every [`RingBuffer::add`] evicts the oldest one.
/// Membership is checked with a linear scan whose direction is fixed by the [`SearchMode`]
/// chosen at construction. Every operation holds a single lock for its whole duration,
/// readers included, so the buffer is meant to be shared as `Arc<RingBuffer>`.
pub struct RingBuffer {
    mode: SearchMode,
    slots: Mutex<Slots>,
}

impl RingBuffer {
    pub fn new(capacity: usize, mode: SearchMode) -> Result<Self, RingBufferError> {
        if capacity < 1 {
            return Err(RingBufferError::InvalidCapacity { capacity: capacity as i64 });
        }
        log::debug!("creating ring buffer with capacity {capacity} in {mode} mode");
        Ok(Self {
            mode,
            slots: Mutex::new(Slots::new(capacity)),
        })
    }

    // No caller code ever runs under the lock, a poisoned guard still holds consistent slots.
    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Number of resident elements
    pub fn len(&self) -> usize {
        self.lock().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once the buffer is full and every further add evicts an element.
    pub fn is_saturated(&self) -> bool {
        let guard = self.lock();
        guard.count == guard.capacity()
    }

    /// Stores a copy of `data` as the newest element, evicting the oldest one when full.
    pub fn add(&self, data: &[u8]) {
        let evicted = self.lock().push(data);
        counter!(ADDED_METRIC_NAME).increment(1);
        if evicted {
            log::trace!("ring buffer saturated, oldest element evicted");
            counter!(EVICTED_METRIC_NAME).increment(1);
        }
    }

    /// Checks whether an element equal to `data` is resident.
    pub fn contains(&self, data: &[u8]) -> bool {
        let found = self.lock().contains(data, self.mode);
        record_lookup(found);
        found
    }

    /// Adds `data` unless it is already resident, returns whether it was found.
    ///
    /// Lookup and insertion happen under the same lock acquisition, so two threads
    /// offering the same element concurrently never both get `false`.
    pub fn contains_or_add(&self, data: &[u8]) -> bool {
        let mut guard = self.lock();
        let found = guard.contains(data, self.mode);
        let evicted = !found && guard.push(data);
        drop(guard);

        record_lookup(found);
        if !found {
            counter!(ADDED_METRIC_NAME).increment(1);
        }
        if evicted {
            log::trace!("ring buffer saturated, oldest element evicted");
            counter!(EVICTED_METRIC_NAME).increment(1);
        }
        found
    }

    /// Most recently added element, if any.
    pub fn recent(&self) -> Option<Vec<u8>> {
        self.lock().recent().map(<[u8]>::to_vec)
    }

    /// Oldest resident element, i.e. the next one to be evicted.
    pub fn oldest(&self) -> Option<Vec<u8>> {
        self.lock().oldest().map(<[u8]>::to_vec)
    }

    /// Copies of the resident elements, oldest first.
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        let guard = self.lock();
        (0..guard.count)
            .filter_map(|n| guard.nth(n))
            .map(<[u8]>::to_vec)
            .collect()
    }

    pub fn reset(&self) {
        self.lock().clear();
        log::debug!("ring buffer reset");
        counter!(RESETS_METRIC_NAME).increment(1);
    }
}

fn record_lookup(found: bool) {
    let outcome = if found { "hit" } else { "miss" };
    counter!(LOOKUPS_METRIC_NAME, "outcome" => outcome).increment(1);
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.lock();
        f.debug_struct("RingBuffer")
            .field("capacity", &guard.capacity())
            .field("mode", &self.mode)
            .field("len", &guard.count)
            .finish()
    }
}
