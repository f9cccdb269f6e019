use crate::error::{HeapError, Result};
use crate::order::Order;
use core::fmt::{Debug, Display, Formatter, Write};
use log::{debug, trace};

/// A binary heap stored in one growable buffer.
///
/// The element at index 0 is the extreme element under `order`. Children of
/// index `i` live at `2i + 1` and `2i + 2`. The buffer grows by doubling;
/// `capacity` tracks the slot count the heap has asked for, which the backing
/// `Vec` may exceed.
pub struct Heap<T> {
    buf: Vec<T>,
    capacity: usize,
    order: Order,
}

fn left(parent: usize) -> usize {
    parent * 2 + 1
}
fn right(parent: usize) -> usize {
    parent * 2 + 2
}
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

impl<T: Ord> Heap<T> {
    pub fn new(order: Order, initial_capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
            order,
        }
    }

    pub fn min_first(initial_capacity: usize) -> Self {
        Self::new(Order::MinFirst, initial_capacity)
    }

    pub fn max_first(initial_capacity: usize) -> Self {
        Self::new(Order::MaxFirst, initial_capacity)
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The live elements in array order. This is the tree layout, not a sorted view.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Makes room for at least `additional` more elements without further growth.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let needed = self
            .buf
            .len()
            .checked_add(additional)
            .ok_or(HeapError::AllocationFailure {
                requested: usize::MAX,
            })?;
        if needed > self.capacity {
            self.grow(needed)?;
        }
        Ok(())
    }

    // Either the buffer holds `new_capacity` slots afterward or nothing changed.
    fn grow(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity > self.capacity);
        let additional = new_capacity - self.buf.len();
        self.buf
            .try_reserve_exact(additional)
            .map_err(|e| HeapError::allocation(new_capacity, e))?;
        debug!(
            "heap buffer grown: {} -> {} slots ({} live)",
            self.capacity,
            new_capacity,
            self.buf.len()
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Inserts an item into the partially-sorted heap.
    pub fn insert(&mut self, item: T) -> Result<()> {
        if self.buf.len() == self.capacity {
            let new_capacity = if self.capacity == 0 {
                1
            } else {
                self.capacity
                    .checked_mul(2)
                    .ok_or(HeapError::AllocationFailure {
                        requested: usize::MAX,
                    })?
            };
            self.grow(new_capacity)?;
        }
        let index = self.buf.len();
        self.buf.push(item);
        self.sift_up(index);
        self.check();
        Ok(())
    }

    /// Removes and returns the extreme item.
    pub fn extract_top(&mut self) -> Result<T> {
        if self.buf.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        // The last element moves into the root slot.
        let top = self.buf.swap_remove(0);
        self.sift_down(0);
        self.check();
        Ok(top)
    }

    pub fn peek(&self) -> Result<&T> {
        self.buf.first().ok_or(HeapError::EmptyHeap)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = parent(i);
            if self.order.holds(&self.buf[parent], &self.buf[i]) {
                break;
            }
            trace!("sift up: {} -> {}", i, parent);
            self.buf.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.buf.len();
        loop {
            let left = left(i);
            if left >= len {
                break;
            }
            // Prefer the left child unless the right one is strictly more extreme.
            let right = right(i);
            let child = if right < len && self.order.prefers(&self.buf[right], &self.buf[left]) {
                right
            } else {
                left
            };
            if self.order.holds(&self.buf[i], &self.buf[child]) {
                break;
            }
            trace!("sift down: {} -> {}", i, child);
            self.buf.swap(i, child);
            i = child;
        }
    }

    fn check(&self) {
        if cfg!(debug_assertions) {
            for i in 1..self.buf.len() {
                assert!(
                    self.order.holds(&self.buf[parent(i)], &self.buf[i]),
                    "heap order violated at index {}",
                    i
                );
            }
        }
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new(Order::default(), 0)
    }
}

impl<T: Display> Heap<T> {
    /// Writes `"<index>. <value>"` for each live slot in array order, followed by
    /// a blank line.
    pub fn dump<W: Write>(&self, out: &mut W) -> core::fmt::Result {
        for (i, item) in self.buf.iter().enumerate() {
            writeln!(out, "{}. {}", i, item)?;
        }
        writeln!(out)
    }
}

impl<T: Display> Display for Heap<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        self.dump(fmt)
    }
}

impl<T: Debug> Debug for Heap<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Heap({:?}, cap {}): ", self.order, self.capacity)?;
        fmt.debug_list().entries(self.buf.iter()).finish()
    }
}
