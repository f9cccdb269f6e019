use core::cmp::Ordering;

/// Which end of the ordering sits at the root of a heap.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Order {
    /// Every parent is `<=` its children; the root is the minimum.
    MinFirst,
    /// Every parent is `>=` its children; the root is the maximum.
    MaxFirst,
}

impl Default for Order {
    fn default() -> Self {
        Order::MinFirst
    }
}

impl Order {
    /// Returns true if `parent` may sit above `child`.
    pub fn holds<T: Ord>(self, parent: &T, child: &T) -> bool {
        !self.prefers(child, parent)
    }

    /// Returns true if `a` is strictly more extreme than `b`, i.e. `a` must be
    /// extracted before `b`.
    pub fn prefers<T: Ord>(self, a: &T, b: &T) -> bool {
        let c = Ord::cmp(a, b);
        match self {
            Order::MinFirst => c == Ordering::Less,
            Order::MaxFirst => c == Ordering::Greater,
        }
    }
}
