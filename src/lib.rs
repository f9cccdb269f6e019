//! A binary heap that hands out its minimum or maximum first, chosen at
//! construction time.
//!
//! ```
//! use prioheap::{Heap, HeapError};
//!
//! let mut heap = Heap::min_first(4);
//! for &v in [4, 1, 3].iter() {
//!     heap.insert(v)?;
//! }
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.extract_top(), Ok(1));
//! assert_eq!(heap.len(), 2);
//! # Ok::<(), HeapError>(())
//! ```

pub mod error;
pub mod heap;
pub mod order;

pub use crate::error::{HeapError, Result};
pub use crate::heap::Heap;
pub use crate::order::Order;

#[cfg(test)]
mod testing;
