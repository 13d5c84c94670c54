//! A pending/executed list with optional validation and looped replay.

use std::collections::VecDeque;

/// Items waiting in `future` are consumed front first into `history`.
///
/// `I` is the raw input type handed to [`Queue::add`]; the validator turns
/// a batch of raw inputs into zero or more canonical items.
#[derive(Debug, Clone)]
pub struct Queue<T, I = T> {
    future: VecDeque<T>,
    history: Vec<T>,
    validator: fn(Vec<I>) -> Vec<T>,
    pub is_ready: bool,
    pub is_looping: bool,
}

impl<T> Queue<T, T> {
    /// A queue that stores items as given.
    pub fn new() -> Self {
        Self::with_validator(|items| items)
    }
}

impl<T> Default for Queue<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I> Queue<T, I> {
    pub fn with_validator(validator: fn(Vec<I>) -> Vec<T>) -> Self {
        Self {
            future: VecDeque::new(),
            history: Vec::new(),
            validator,
            is_ready: true,
            is_looping: false,
        }
    }

    /// Validates a batch of inputs and appends the results.
    pub fn add(&mut self, items: Vec<I>) {
        let validated = (self.validator)(items);
        self.future.extend(validated);
    }

    /// Appends one already-canonical item, skipping validation.
    pub fn push(&mut self, item: T) {
        self.future.push_back(item);
    }

    /// Moves the next pending item into history and returns a reference to
    /// it.
    ///
    /// When nothing is pending and the queue loops, the history is replayed:
    /// it becomes the new pending list, and this call returns `None`.
    pub fn advance(&mut self) -> Option<&T> {
        match self.future.pop_front() {
            Some(item) => {
                self.history.push(item);
                self.history.last()
            }
            None => {
                if self.is_looping {
                    self.future = std::mem::take(&mut self.history).into();
                }
                None
            }
        }
    }

    /// Same as [`Queue::advance`].
    pub fn redo(&mut self) -> Option<&T> {
        self.advance()
    }

    /// Moves the most recent history item back to the front of the pending
    /// list.
    pub fn undo(&mut self) -> Option<&T> {
        let item = self.history.pop()?;
        self.future.push_front(item);
        self.future.front()
    }

    /// Drops every pending item. History is kept.
    pub fn empty(&mut self) {
        self.future.clear();
    }

    /// Drops the history. Pending items are kept.
    pub fn forget(&mut self) {
        self.history.clear();
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.future.len()
    }

    pub fn is_empty(&self) -> bool {
        self.future.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.future.front()
    }

    pub fn future(&self) -> impl Iterator<Item = &T> {
        self.future.iter()
    }

    pub fn history(&self) -> &[T] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evens_doubled(items: Vec<i32>) -> Vec<i32> {
        items.into_iter().filter(|n| n % 2 == 0).map(|n| n * 2).collect()
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        queue.add(vec!['a', 'b']);
        queue.push('c');
        assert_eq!(queue.advance(), Some(&'a'));
        assert_eq!(queue.advance(), Some(&'b'));
        assert_eq!(queue.advance(), Some(&'c'));
        assert_eq!(queue.advance(), None);
        assert_eq!(queue.history(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_validator_may_drop_and_transform() {
        let mut queue: Queue<i32> = Queue::with_validator(evens_doubled);
        queue.add(vec![1, 2, 3, 4]);
        assert_eq!(queue.future().copied().collect::<Vec<_>>(), vec![4, 8]);
    }

    #[test]
    fn test_undo_then_redo() {
        let mut queue = Queue::new();
        queue.add(vec![1, 2, 3]);
        queue.advance();
        queue.advance();
        assert_eq!(queue.undo(), Some(&2));
        assert_eq!(queue.peek(), Some(&2));
        assert_eq!(queue.history(), &[1]);
        assert_eq!(queue.redo(), Some(&2));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_looping_replays_history() {
        let mut queue = Queue::new();
        queue.is_looping = true;
        queue.add(vec!["x", "y"]);
        assert_eq!(queue.advance(), Some(&"x"));
        assert_eq!(queue.advance(), Some(&"y"));
        // the refill call itself yields nothing
        assert_eq!(queue.advance(), None);
        assert!(queue.history().is_empty());
        assert_eq!(queue.advance(), Some(&"x"));
        assert_eq!(queue.advance(), Some(&"y"));
    }

    #[test]
    fn test_empty_keeps_history() {
        let mut queue = Queue::new();
        queue.add(vec![1, 2, 3]);
        queue.advance();
        queue.empty();
        assert!(queue.is_empty());
        assert_eq!(queue.history(), &[1]);
        assert_eq!(queue.undo(), Some(&1));
    }
}
