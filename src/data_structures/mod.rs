pub mod priority_queue;
pub mod sequenced_heap;

pub use priority_queue::MinPriorityQueue;
pub use sequenced_heap::SequencedMinHeap;
