use alloc::boxed::Box;

use super::traits::{Link, Node, NodeWithData};

/// A node of an owned singly linked list.
///
/// Each node exclusively owns its successor, so a chain can never alias a node
/// from two predecessors or loop back on itself.
pub struct ListNode<T> {
    next: Option<Box<Self>>,
    data: T,
}

impl<T> ListNode<T> {
    /// Allocate a new node that is not linked to anything yet.
    pub fn new(data: T) -> Box<Self> {
        Box::new(Self { next: None, data })
    }

    /// Split the node into its data and its successor.
    pub(crate) fn parts_mut(&mut self) -> (&mut T, Option<&mut Self>) {
        (&mut self.data, self.next.as_deref_mut())
    }
}

impl<T> Link for ListNode<T> {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    #[inline]
    fn next_mut(&mut self) -> Option<&mut Self> {
        self.next.as_deref_mut()
    }

    #[inline]
    fn take_next(&mut self) -> Option<Box<Self>> {
        self.next.take()
    }

    #[inline]
    fn set_next(&mut self, next: Option<Box<Self>>) {
        self.next = next;
    }
}

impl<T> Node for ListNode<T> {
    #[inline]
    fn append_to<L>(mut self: Box<Self>, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        debug_assert!(self.next.is_none(), "Node is already linked");
        self.set_next(parent.take_next());
        parent.set_next(Some(self));
    }

    #[inline]
    fn detach<L>(parent: &mut L) -> Option<Box<Self>>
    where
        L: Link<Target = Self>,
    {
        let mut node = parent.take_next()?;
        parent.set_next(node.take_next());
        Some(node)
    }
}

impl<T> NodeWithData for ListNode<T> {
    type Data = T;

    fn data(&self) -> &T {
        &self.data
    }

    fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    fn into_data(self: Box<Self>) -> T {
        debug_assert!(self.next.is_none(), "Node must be detached first");
        self.data
    }
}
