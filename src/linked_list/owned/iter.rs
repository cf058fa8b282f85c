use core::iter::FusedIterator;

use super::{
    list::LinkedList,
    node::ListNode,
    traits::{Link, Node, NodeWithData},
};

/// An iterator over shared references to the values of a list.
pub struct Iter<'a, T> {
    current: Option<&'a ListNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            current: list.next(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            self.current = current.next();
            current.data()
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

/// An iterator over mutable references to the values of a list.
pub struct IterMut<'a, T> {
    current: Option<&'a mut ListNode<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut LinkedList<T>) -> Self {
        Self {
            current: list.next_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|current| {
            let (data, next) = current.parts_mut();
            self.current = next;
            data
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator that unlinks values from the front of a list.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        ListNode::detach(&mut self.list).map(|node| node.into_data())
    }
}

impl<T> FusedIterator for IntoIter<T> {}
