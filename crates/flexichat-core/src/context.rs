//! Bounded short-term context buffer.
//!
//! Holds the most recent N exchanges for reference resolution ("what I told
//! you earlier"). Distinct from the unbounded persisted conversation log:
//! the buffer is never written to disk and starts empty on every process
//! start.

use std::collections::VecDeque;

use flexichat_types::exchange::Exchange;

/// Ring buffer of recent exchanges, oldest evicted first.
#[derive(Debug)]
pub struct ContextBuffer {
    entries: VecDeque<Exchange>,
    capacity: usize,
}

impl ContextBuffer {
    /// Create an empty buffer bounded to `capacity` exchanges.
    ///
    /// A capacity of zero is treated as one so the buffer always holds at
    /// least the latest exchange.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append an exchange, evicting the oldest when at capacity.
    pub fn push(&mut self, exchange: Exchange) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(exchange);
    }

    /// Exchanges most-recent-first.
    pub fn iter_recent(&self) -> impl Iterator<Item = &Exchange> {
        self.entries.iter().rev()
    }

    /// Drop all buffered exchanges.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(n: usize) -> Exchange {
        Exchange::now(format!("input number {n}"), format!("reply {n}"))
    }

    #[test]
    fn test_push_and_order() {
        let mut buf = ContextBuffer::new(3);
        buf.push(exchange(1));
        buf.push(exchange(2));
        let recent: Vec<_> = buf.iter_recent().map(|e| e.user.clone()).collect();
        assert_eq!(recent, vec!["input number 2", "input number 1"]);
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut buf = ContextBuffer::new(3);
        for n in 1..=10 {
            buf.push(exchange(n));
            assert!(buf.len() <= 3);
        }
        let recent: Vec<_> = buf.iter_recent().map(|e| e.user.clone()).collect();
        assert_eq!(
            recent,
            vec!["input number 10", "input number 9", "input number 8"]
        );
    }

    #[test]
    fn test_oldest_evicted_first() {
        let mut buf = ContextBuffer::new(2);
        buf.push(exchange(1));
        buf.push(exchange(2));
        buf.push(exchange(3));
        assert!(buf.iter_recent().all(|e| e.user != "input number 1"));
    }

    #[test]
    fn test_clear() {
        let mut buf = ContextBuffer::new(2);
        buf.push(exchange(1));
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_zero_capacity_holds_latest() {
        let mut buf = ContextBuffer::new(0);
        buf.push(exchange(1));
        buf.push(exchange(2));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.iter_recent().next().unwrap().user, "input number 2");
    }
}
