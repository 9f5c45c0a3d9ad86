//! Thread safe circular buffer of byte sequences.
//!
//! Keeps the most recent `capacity` elements and answers membership queries with a linear
//! scan, making it a good fit for deduplication windows and recent-event caches.
//!
//! ```
//! use ringbuff::buffer::{RingBuffer, SearchMode};
//!
//! let buffer = RingBuffer::new(2, SearchMode::Recent).unwrap();
//! buffer.add(b"a");
//! buffer.add(b"b");
//! buffer.add(b"c");
//! assert!(!buffer.contains(b"a"));
//! assert_eq!(buffer.oldest().as_deref(), Some(&b"b"[..]));
//! assert_eq!(buffer.recent().as_deref(), Some(&b"c"[..]));
//! ```

pub mod buffer;
pub mod core;

pub use crate::buffer::{RingBuffer, SearchMode};
pub use crate::core::error::RingBufferError;
