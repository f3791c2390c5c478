//! FIFO queue of fingerprints awaiting expansion.
//!
//! First-in first-out order is what makes the search breadth-first, and
//! therefore what makes the first goal found a shortest one.

use regsearch_vm::Fingerprint;
use std::collections::VecDeque;

/// FIFO queue of discovered but not yet expanded states.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Fingerprint>,
    total_pushed: u64,
    peak_len: usize,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a fingerprint at the back.
    ///
    /// The caller must have checked the visited map first; the frontier
    /// itself does not deduplicate.
    pub fn push(&mut self, fingerprint: Fingerprint) {
        self.queue.push_back(fingerprint);
        self.total_pushed += 1;
        self.peak_len = self.peak_len.max(self.queue.len());
    }

    /// Dequeue the oldest fingerprint.
    pub fn pop(&mut self) -> Option<Fingerprint> {
        self.queue.pop_front()
    }

    /// Number of fingerprints waiting.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Fingerprints ever enqueued, including those already dequeued.
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    /// Largest length the queue has reached.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}
