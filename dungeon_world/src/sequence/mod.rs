//! Sequence - the ordered container used for every aggregate in the world.
//!
//! Elements live in an arena of doubly linked nodes addressed by slot index.
//! A node keeps its slot for as long as it is linked, so front, back and
//! positional edits never move other elements around in memory.
//!
//! Invariants kept by every mutating operation:
//! - `len` equals the number of linked nodes;
//! - `head` and `tail` are both `None` exactly when `len == 0`;
//! - the head has no predecessor and the tail has no successor;
//! - for every adjacent pair, `next` of the first and `prev` of the second agree.

mod iter;

pub use iter::*;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Contract violations reported by [`Sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Pop or peek on a sequence with no elements.
    #[error("attempt to {operation} on an empty sequence")]
    EmptyCollection { operation: &'static str },

    /// Positional access outside the valid range.
    #[error("position {position} is out of range for a sequence of length {len}")]
    OutOfRange { position: usize, len: usize },
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An ordered, mutable collection with O(1) insertion and removal at both ends.
#[derive(Clone)]
pub struct Sequence<T> {
    slots: Vec<Option<Node<T>>>,
    /// Vacant slot indices, reused before the arena grows.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<T> Sequence<T> {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Add an element at the front.
    pub fn push_front(&mut self, value: T) -> &mut Self {
        let head = self.head;
        self.link_between(None, head, value);
        self
    }

    /// Add an element at the back.
    pub fn push_back(&mut self, value: T) -> &mut Self {
        let tail = self.tail;
        self.link_between(tail, None, value);
        self
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Result<T, SequenceError> {
        let idx = self.head.ok_or(SequenceError::EmptyCollection {
            operation: "pop_front",
        })?;
        Ok(self.unlink(idx))
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        let idx = self.tail.ok_or(SequenceError::EmptyCollection {
            operation: "pop_back",
        })?;
        Ok(self.unlink(idx))
    }

    /// Borrow the first element.
    pub fn peek_front(&self) -> Result<&T, SequenceError> {
        self.head
            .map(|idx| &self.node(idx).value)
            .ok_or(SequenceError::EmptyCollection {
                operation: "peek_front",
            })
    }

    /// Borrow the last element.
    pub fn peek_back(&self) -> Result<&T, SequenceError> {
        self.tail
            .map(|idx| &self.node(idx).value)
            .ok_or(SequenceError::EmptyCollection {
                operation: "peek_back",
            })
    }

    /// Insert `value` so that it ends up at position `pos`.
    ///
    /// Valid positions are `0..=len`; `pos == len` appends.
    pub fn insert_at(&mut self, pos: usize, value: T) -> Result<(), SequenceError> {
        if pos > self.len {
            return Err(SequenceError::OutOfRange {
                position: pos,
                len: self.len,
            });
        }
        if pos == self.len {
            self.push_back(value);
            return Ok(());
        }
        let at = self.locate(pos)?;
        let prev = self.node(at).prev;
        self.link_between(prev, Some(at), value);
        Ok(())
    }

    /// Remove and return the element at position `pos` (`0..len`).
    pub fn delete_at(&mut self, pos: usize) -> Result<T, SequenceError> {
        let idx = self.locate(pos)?;
        Ok(self.unlink(idx))
    }

    /// Borrow the element at position `pos`.
    pub fn get(&self, pos: usize) -> Result<&T, SequenceError> {
        let idx = self.locate(pos)?;
        Ok(&self.node(idx).value)
    }

    /// Mutably borrow the element at position `pos`.
    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T, SequenceError> {
        let idx = self.locate(pos)?;
        Ok(&mut self.node_mut(idx).value)
    }

    /// Replace the element at position `pos`, returning the old value.
    pub fn set(&mut self, pos: usize, value: T) -> Result<T, SequenceError> {
        let slot = self.get_mut(pos)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Position of the first element matching `predicate`, scanning from the front.
    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(|value| predicate(value))
    }

    /// Position of the last element matching `predicate`, scanning from the back.
    pub fn rposition<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().rposition(|value| predicate(value))
    }

    /// First element matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// First element matching `predicate`, mutably.
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter_mut().find(|value| predicate(value))
    }

    /// Unlink and return the first element matching `predicate`.
    pub fn remove_first_where<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let idx = self.index_where(predicate, Direction::Forward)?;
        Some(self.unlink(idx))
    }

    /// Unlink and return the last element matching `predicate`.
    pub fn remove_last_where<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let idx = self.index_where(predicate, Direction::Backward)?;
        Some(self.unlink(idx))
    }

    /// Iterate front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterate front to back with mutable access.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    // Slot of the node at `pos`, walking from whichever end is closer.
    fn locate(&self, pos: usize) -> Result<usize, SequenceError> {
        if pos >= self.len {
            return Err(SequenceError::OutOfRange {
                position: pos,
                len: self.len,
            });
        }
        let found = if pos <= self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..pos {
                cursor = cursor.and_then(|idx| self.node(idx).next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - pos) {
                cursor = cursor.and_then(|idx| self.node(idx).prev);
            }
            cursor
        };
        found.ok_or(SequenceError::OutOfRange {
            position: pos,
            len: self.len,
        })
    }

    fn index_where<P>(&self, mut predicate: P, direction: Direction) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = match direction {
            Direction::Forward => self.head,
            Direction::Backward => self.tail,
        };
        while let Some(idx) = cursor {
            let node = self.node(idx);
            if predicate(&node.value) {
                return Some(idx);
            }
            cursor = match direction {
                Direction::Forward => node.next,
                Direction::Backward => node.prev,
            };
        }
        None
    }

    fn link_between(&mut self, prev: Option<usize>, next: Option<usize>, value: T) -> usize {
        let node = Node { value, prev, next };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match prev {
            Some(p) => self.node_mut(p).next = Some(idx),
            None => self.head = Some(idx),
        }
        match next {
            Some(n) => self.node_mut(n).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.len += 1;
        idx
    }

    fn unlink(&mut self, idx: usize) -> T {
        let Some(node) = self.slots.get_mut(idx).and_then(Option::take) else {
            unreachable!("sequence slot {idx} is not linked");
        };

        match node.prev {
            Some(p) => self.node_mut(p).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;

        if self.len == 0 {
            // Nothing is linked any more, so the arena can be reset.
            self.slots.clear();
            self.free.clear();
        } else {
            self.free.push(idx);
        }
        node.value
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match self.slots.get(idx) {
            Some(Some(node)) => node,
            _ => unreachable!("sequence slot {idx} is not linked"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match self.slots.get_mut(idx) {
            Some(Some(node)) => node,
            _ => unreachable!("sequence slot {idx} is not linked"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

impl<T: PartialEq> Sequence<T> {
    /// Remove the first element equal to `value`.
    ///
    /// Returns `false`, leaving the sequence untouched, if nothing matches.
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_first_where(|candidate| candidate == value)
            .is_some()
    }

    /// Check if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Sequence::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Sequence::from_iter)
    }
}

#[cfg(test)]
impl<T> Sequence<T> {
    /// Walk the links in both directions and check every structural invariant.
    fn assert_links(&self) {
        match (self.head, self.tail) {
            (None, None) => assert_eq!(self.len, 0, "no ends but len {}", self.len),
            (Some(head), Some(tail)) => {
                assert!(self.len > 0);
                assert!(self.node(head).prev.is_none(), "head has a predecessor");
                assert!(self.node(tail).next.is_none(), "tail has a successor");
            }
            _ => panic!("exactly one end is present"),
        }

        let mut forward = 0;
        let mut cursor = self.head;
        let mut last = None;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            assert_eq!(node.prev, last, "prev link of slot {idx} disagrees");
            forward += 1;
            last = Some(idx);
            cursor = node.next;
        }
        assert_eq!(last, self.tail);
        assert_eq!(forward, self.len);

        let mut backward = 0;
        let mut cursor = self.tail;
        while let Some(idx) = cursor {
            backward += 1;
            cursor = self.node(idx).prev;
        }
        assert_eq!(backward, self.len);

        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.len);
        assert_eq!(self.slots.len(), self.len + self.free.len());
    }
}
