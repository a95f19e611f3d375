//! # Stack - resize-on-write LIFO container

use std::fmt;
use std::iter::FromIterator;
use std::mem;

use quickcheck::{Arbitrary, Gen};
use serde::{Deserialize, Serialize};

/// Index of the top slot; peeks and pokes without an explicit index target it.
const TOP: isize = 0;

/// Element cap for the truncated rendering.
const TRUNCATE_AT: usize = 10;

/// A LIFO container over a contiguous buffer, top at index 0.
///
/// There is no spare capacity and no amortized growth: every `push` and
/// `pop` moves the entries into a fresh buffer sized exactly for the new
/// count. Reads and writes by index are normalized rather than rejected,
/// except against an empty buffer (see [`Stack::poke_at`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the item at the top of the stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.peek_at(TOP)
    }

    /// Get the item at position `index` without removing it.
    ///
    /// The index is normalized like in [`Stack::poke_at`]; an empty stack
    /// yields `None` instead of an error.
    pub fn peek_at(&self, index: isize) -> Option<&T> {
        self.normalize_index(index).ok().map(|ix| &self.data[ix])
    }

    /// Overwrite the item at the top of the stack without growing it.
    pub fn poke(&mut self, item: T) -> Result<(), OutOfBounds> {
        self.poke_at(TOP, item)
    }

    /// Overwrite the item at position `index` without growing the stack.
    ///
    /// An index past the bottom silently targets the bottom slot and a
    /// negative index silently targets the top. Only an empty stack has no
    /// slot to write at all, which fails with [`OutOfBounds`].
    pub fn poke_at(&mut self, index: isize, item: T) -> Result<(), OutOfBounds> {
        let ix = self.normalize_index(index)?;
        self.data[ix] = item;
        Ok(())
    }

    /// Push `item` onto the top of the stack.
    ///
    /// Allocates a buffer of exactly `size + 1`, with every existing entry
    /// moved down one slot. O(n) per call, by design.
    pub fn push(&mut self, item: T) {
        let mut next = Vec::with_capacity(self.data.len() + 1);
        next.push(item);
        next.append(&mut self.data);
        self.data = next;
    }

    /// Pop the item off the top of the stack, or `None` if it is empty.
    ///
    /// The remaining entries move into a buffer of exactly `size - 1`.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let rest = self.data.split_off(1);
        mem::replace(&mut self.data, rest).pop()
    }

    /// View of the buffer contents, top first.
    ///
    /// The borrow ends before the next mutation; callers that need a
    /// longer-lived snapshot must copy the slice out.
    pub fn dump(&self) -> &[T] {
        &self.data
    }

    /// Drop every entry, leaving an empty buffer behind.
    pub fn clear(&mut self) {
        self.data = Vec::new();
    }

    /// True if the stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of entries; always equal to the buffer length.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Map a requested index onto a valid buffer position.
    ///
    /// An empty buffer has no valid position, so any request against it is
    /// out of bounds. Otherwise the index clamps: past the bottom lands on
    /// the bottom, negative lands on the top.
    fn normalize_index(&self, index: isize) -> Result<usize, OutOfBounds> {
        if self.data.is_empty() {
            Err(OutOfBounds { index })
        } else if index >= self.data.len() as isize {
            Ok(self.data.len() - 1)
        } else if index < TOP {
            Ok(TOP as usize)
        } else {
            Ok(index as usize)
        }
    }
}

impl<T: fmt::Display> Stack<T> {
    /// Same rendering as `Display` but capped at the first ten elements,
    /// with a `...` entry standing in for the cut-off rest.
    pub fn to_truncated_string(&self) -> String {
        let mut out = String::from("[");
        for (i, item) in self.data.iter().take(TRUNCATE_AT).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&item.to_string());
        }
        if self.data.len() > TRUNCATE_AT {
            out.push_str(", ...");
        }
        out.push(']');
        out
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Build a stack by pushing each element in iteration order; the last
    /// element of the input ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

/// The one error this module produces: an index-based write or read was
/// attempted while the stack had no slots at all. Any concrete index on a
/// non-empty stack normalizes silently instead.
#[derive(Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The index as the caller requested it, before normalization.
    pub index: isize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} doesn't exist in an empty stack", self.index)
    }
}

impl std::error::Error for OutOfBounds {}

impl<T: Arbitrary> Arbitrary for Stack<T> {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrunk buffers are top-first, so re-push them bottom-up.
        Box::new(
            self.data
                .shrink()
                .map(|data| data.into_iter().rev().collect()),
        )
    }
}
