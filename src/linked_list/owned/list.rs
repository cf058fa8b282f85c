use alloc::boxed::Box;
use core::fmt;

use log::{Level, log_enabled, trace};

use super::{
    error::ListError,
    iter::{IntoIter, Iter, IterMut},
    node::ListNode,
    position::Position,
    traits::{Link, Node, NodeWithData},
};

/// A singly linked list that owns its nodes.
///
/// The list only stores the head link. Every other node is owned by its
/// predecessor, so the length is found by walking the chain.
pub struct LinkedList<T> {
    head: Option<Box<ListNode<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList { head: None }
    }

    /// Adds `value` as the new last element. O(n).
    pub fn append(&mut self, value: T) {
        let node = ListNode::new(value);
        match self.node_or_last_mut(usize::MAX) {
            Some(last) => node.append_to(last),
            None => node.append_to(self),
        }
    }

    /// Adds `value` as the new first element. O(1).
    pub fn prepend(&mut self, value: T) {
        ListNode::new(value).append_to(self);
    }

    /// Counts the nodes by walking the whole chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the list has no nodes. O(1).
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no nodes.
    pub fn head(&self) -> Result<&T, ListError> {
        self.next().map(NodeWithData::data).ok_or(ListError::Empty)
    }

    /// Returns the last value.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no nodes.
    pub fn tail(&self) -> Result<&T, ListError> {
        self.iter().last().ok_or(ListError::Empty)
    }

    /// Returns the value at the zero-based `index`.
    ///
    /// Negative, fractional and out of range positions all give `None`.
    pub fn at<P: Position>(&self, index: P) -> Option<&T> {
        self.iter().nth(index.position()?)
    }

    /// Mutable counterpart of [`LinkedList::at`].
    pub fn at_mut<P: Position>(&mut self, index: P) -> Option<&mut T> {
        Some(self.node_mut(index.position()?)?.data_mut())
    }

    /// Removes the last value and returns it, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        let node = match self.len() {
            0 => None,
            1 => ListNode::detach(self),
            len => ListNode::detach(self.node_mut(len - 2)?),
        };
        node.map(|node| node.into_data())
    }

    /// Inserts `value` so that it ends up at `index`, shifting later values back.
    ///
    /// * A negative or fractional `index` is ignored.
    /// * `0` always makes `value` the new head.
    /// * Any `index` past the end links `value` after the last node.
    pub fn insert_at<P: Position>(&mut self, value: T, index: P) {
        let Some(position) = index.position() else {
            trace!("insert_at: ignoring invalid position {index:?}");
            return;
        };

        let node = ListNode::new(value);
        if position == 0 {
            node.append_to(self);
            return;
        }

        if log_enabled!(Level::Trace) {
            let len = self.len();
            if position > len {
                trace!("insert_at: position {position} clamped to end of list (len {len})");
            }
        }

        match self.node_or_last_mut(position - 1) {
            Some(prev) => node.append_to(prev),
            None => node.append_to(self),
        }
    }

    /// Removes the value at `index` and returns it.
    ///
    /// * A negative or fractional `index`, or an empty list, is a no-op.
    /// * `0`, or a list holding a single node, always removes the head.
    /// * Any `index` past the end removes the last node.
    pub fn remove_at<P: Position>(&mut self, index: P) -> Option<T> {
        let Some(position) = index.position() else {
            trace!("remove_at: ignoring invalid position {index:?}");
            return None;
        };

        let len = self.len();
        let node = match len {
            0 => None,
            1 => ListNode::detach(self),
            _ if position == 0 => ListNode::detach(self),
            _ => {
                if position >= len {
                    trace!("remove_at: position {position} clamped to last node (len {len})");
                }
                let position = position.min(len - 1);
                ListNode::detach(self.node_mut(position - 1)?)
            }
        };
        node.map(|node| node.into_data())
    }

    /// Returns `true` if some value equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|data| data == value)
    }

    /// Returns the index of the first value equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|data| data == value)
    }

    /// Reverses the order of the nodes in place by relinking them.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut next = self.take_next();
        while let Some(mut node) = next {
            next = node.take_next();
            node.set_next(reversed);
            reversed = Some(node);
        }
        self.set_next(reversed);
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        // Unlink one node at a time so dropping a long chain does not recurse.
        let mut next = self.take_next();
        while let Some(mut node) = next {
            next = node.take_next();
        }
    }

    /// Returns an iterator over the values, head first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over mutable references to the values, head first.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut ListNode<T>> {
        let mut node = self.next_mut()?;
        for _ in 0..index {
            node = node.next_mut()?;
        }
        Some(node)
    }

    /// Like `node_mut`, but stops at the last node instead of running off the end.
    fn node_or_last_mut(&mut self, index: usize) -> Option<&mut ListNode<T>> {
        let mut node = self.next_mut()?;
        for _ in 0..index {
            if node.next().is_none() {
                break;
            }
            node = node.next_mut()?;
        }
        Some(node)
    }
}

/// The list acts as the link in front of its first node.
impl<T> Link for LinkedList<T> {
    type Target = ListNode<T>;

    fn next(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    fn next_mut(&mut self) -> Option<&mut ListNode<T>> {
        self.head.as_deref_mut()
    }

    fn take_next(&mut self) -> Option<Box<ListNode<T>>> {
        self.head.take()
    }

    fn set_next(&mut self, next: Option<Box<ListNode<T>>>) {
        self.head = next;
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the chain as `( a ) -> ( b ) -> null`. An empty list is just `null`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for data in self.iter() {
            write!(f, "( {data} ) -> ")?;
        }
        f.write_str("null")
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends every value in order. The new values are chained up front-first
    /// and then reversed, so the existing chain is only walked once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut chain = LinkedList::new();
        for value in iter {
            chain.prepend(value);
        }
        chain.reverse();

        let tail = chain.take_next();
        match self.node_or_last_mut(usize::MAX) {
            Some(last) => last.set_next(tail),
            None => self.set_next(tail),
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
