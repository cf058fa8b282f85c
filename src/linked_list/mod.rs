//! Linked lists.
//!
//! [`owned::LinkedList`] is a singly linked list that owns its nodes. Values
//! are addressed by zero-based position and the list renders itself as a
//! chain of values terminated by `null`.
//!
//! # Examples
//!
//! ```
//! use mola_list::linked_list::owned::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.prepend(0);
//! assert_eq!(list.to_string(), "( 0 ) -> ( 1 ) -> ( 2 ) -> null");
//!
//! list.remove_at(1);
//! assert_eq!(list.to_string(), "( 0 ) -> ( 2 ) -> null");
//!
//! assert_eq!(list.pop(), Some(2));
//! assert_eq!(list.to_string(), "( 0 ) -> null");
//!
//! assert_eq!(list.at(0), Some(&0));
//! assert_eq!(list.at(-1), None);
//! assert_eq!(list.at(0.5), None);
//! ```
pub mod owned;
