use std::fmt;

use log::debug;
use quickcheck::{Arbitrary, Gen};
use serde::{Deserialize, Serialize};

use crate::stacks::Stack;

/// Browser-style navigation history.
///
/// Two stacks flank the currently visited value: `bwd` holds where we came
/// from (nearest first) and `fwd` holds what we backed out of. Moving the
/// cursor never drops a value; only visiting a new item while forward
/// entries exist discards them, the way a new page click invalidates a
/// browser's forward button. All mutation goes through the stacks' public
/// operations, so the buffers underneath follow the [`Stack`] contract.
///
/// Whenever either stack is non-empty a current value is present; the
/// stacks are only ever fed from the current slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History<T> {
    bwd: Stack<T>,
    fwd: Stack<T>,
    cur: Option<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            bwd: Stack::new(),
            fwd: Stack::new(),
            cur: None,
        }
    }
}

impl<T> History<T> {
    /// Create a history with no entries and no current value.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the cursor can be moved forward.
    pub fn can_move_forward(&self) -> bool {
        !self.fwd.is_empty()
    }

    /// True if the cursor can be moved backward.
    pub fn can_move_backward(&self) -> bool {
        !self.bwd.is_empty()
    }

    /// The currently visited value, if any.
    pub fn current(&self) -> Option<&T> {
        self.cur.as_ref()
    }

    /// Visit `item`, making it the new current value.
    ///
    /// The previous current value moves onto the back stack. Taking a new
    /// branch invalidates the forward path, so any forward entries are
    /// discarded first.
    pub fn visit(&mut self, item: T) -> &T {
        if self.can_move_forward() {
            debug!("visit discards {} forward entries", self.fwd.size());
            self.fwd.clear();
        }
        if let Some(prev) = self.cur.take() {
            self.bwd.push(prev);
        }
        &*self.cur.insert(item)
    }

    /// Visit every item in iteration order, returning the final current
    /// value. Observably identical to calling [`History::visit`] once per
    /// item.
    pub fn visit_all<I>(&mut self, items: I) -> Option<&T>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.visit(item);
        }
        self.current()
    }

    /// Move the cursor one step forward, returning the new current value.
    ///
    /// A no-op when nothing lies ahead: the current value stays put.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        if self.can_move_forward() {
            if let Some(cur) = self.cur.take() {
                self.bwd.push(cur);
            }
            self.cur = self.fwd.pop();
        }
        self.current()
    }

    /// Move the cursor forward `steps` times. Once the forward stack runs
    /// out the remaining steps are no-ops, per the single-step contract.
    pub fn next_n(&mut self, steps: usize) -> Option<&T> {
        for _ in 0..steps {
            self.next();
        }
        self.current()
    }

    /// Move the cursor one step back, returning the new current value.
    ///
    /// A no-op when nothing lies behind.
    pub fn previous(&mut self) -> Option<&T> {
        if self.can_move_backward() {
            if let Some(cur) = self.cur.take() {
                self.fwd.push(cur);
            }
            self.cur = self.bwd.pop();
        }
        self.current()
    }

    /// Move the cursor back `steps` times, stopping at the oldest entry.
    pub fn previous_n(&mut self, steps: usize) -> Option<&T> {
        for _ in 0..steps {
            self.previous();
        }
        self.current()
    }

    /// Forget everything: both stacks and the current value.
    pub fn clear(&mut self) {
        self.bwd.clear();
        self.fwd.clear();
        self.cur = None;
    }

    /// True if nothing has been visited (or everything was cleared).
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Total number of values held: back entries, forward entries, and
    /// the current one. Derived from the parts on every call, so it can
    /// never drift from them.
    pub fn size(&self) -> usize {
        self.bwd.size() + self.fwd.size() + usize::from(self.cur.is_some())
    }
}

impl<T: Clone> History<T> {
    /// Copy out every held value, newest visit first: forward entries from
    /// farthest to nearest, then the current value, then back entries from
    /// nearest to oldest.
    pub fn dump(&self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.size());
        items.extend(self.fwd.dump().iter().rev().cloned());
        items.extend(self.cur.clone());
        items.extend(self.bwd.dump().iter().cloned());
        items
    }
}

impl<T: fmt::Display> fmt::Display for History<T> {
    /// Renders as `{` and `}` on their own lines around one indented line
    /// holding the back entries oldest-first, the current value (`None`
    /// when absent), and the forward stack in its own rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\n  [")?;
        for (i, item) in self.bwd.dump().iter().rev().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "], ")?;
        match &self.cur {
            Some(cur) => write!(f, "{}", cur)?,
            None => write!(f, "None")?,
        }
        write!(f, ", {}\n}}", self.fwd)
    }
}

impl<T: Arbitrary> Arbitrary for History<T> {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let mut history = History::new();
        history.visit_all(Vec::<T>::arbitrary(g));
        for _ in 0..u8::arbitrary(g) % 4 {
            history.previous();
        }
        history
    }
}
