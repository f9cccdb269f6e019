use crate::heap::Heap;

pub fn init_test() {
    drop(env_logger::try_init());
}

pub fn assert_heap_order<T: Ord + core::fmt::Debug>(heap: &Heap<T>) {
    let items = heap.as_slice();
    for i in 1..items.len() {
        let p = (i - 1) / 2;
        assert!(
            heap.order().holds(&items[p], &items[i]),
            "{:?}: slot {} ({:?}) may not sit above slot {} ({:?})",
            heap.order(),
            p,
            items[p],
            i,
            items[i]
        );
    }
}

/// Extracts every element, in extraction order.
pub fn drain<T: Ord>(heap: &mut Heap<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(item) = heap.extract_top() {
        out.push(item);
    }
    assert!(heap.is_empty());
    out
}
