//! Bounded input queue.
//!
//! [`InputQueue`] buffers taps between submission and the next step.
//! Events are applied strictly in arrival order: the core has no notion
//! of priority, and two taps on the same cell must compose in the order
//! the user made them.

use std::collections::VecDeque;

use ripple_core::{IngressError, InputEvent};

/// Bounded FIFO of pending input events.
#[derive(Debug)]
pub struct InputQueue {
    queue: VecDeque<InputEvent>,
    capacity: usize,
}

impl InputQueue {
    /// Create a new queue with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "InputQueue capacity must be at least 1");
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an event.
    ///
    /// Returns [`IngressError::QueueFull`] and drops the event if the
    /// queue is at capacity.
    pub fn submit(&mut self, event: InputEvent) -> Result<(), IngressError> {
        if self.queue.len() >= self.capacity {
            return Err(IngressError::QueueFull);
        }
        self.queue.push_back(event);
        Ok(())
    }

    /// Remove every pending event, oldest first.
    pub fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, InputEvent> {
        self.queue.drain(..)
    }

    /// Number of events currently buffered.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of events this queue can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discard all pending events.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut q = InputQueue::new(4);
        q.submit(InputEvent::pulse(1, 1)).unwrap();
        q.submit(InputEvent::source(2, 2)).unwrap();
        q.submit(InputEvent::remove(3, 3)).unwrap();
        let drained: Vec<_> = q.drain().collect();
        assert_eq!(
            drained,
            vec![
                InputEvent::pulse(1, 1),
                InputEvent::source(2, 2),
                InputEvent::remove(3, 3)
            ]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn rejects_when_full() {
        let mut q = InputQueue::new(2);
        assert!(q.submit(InputEvent::pulse(0, 0)).is_ok());
        assert!(q.submit(InputEvent::pulse(0, 1)).is_ok());
        assert_eq!(q.submit(InputEvent::pulse(0, 2)), Err(IngressError::QueueFull));
        assert_eq!(q.len(), 2);

        q.drain();
        assert!(q.submit(InputEvent::pulse(0, 2)).is_ok());
    }

    #[test]
    fn clear_discards_pending() {
        let mut q = InputQueue::new(8);
        q.submit(InputEvent::pulse(0, 0)).unwrap();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.capacity(), 8);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn zero_capacity_panics() {
        InputQueue::new(0);
    }
}
