//! # Owned Singly Linked List
//!
//! This module provides a singly linked list whose nodes are heap allocated
//! and owned by the list.
//!
//! ## Core Components
//!
//! - [`list::LinkedList`]: the container and its index based operations.
//! - [`position::Position`]: how index arguments are validated.
//! - [`iter`]: borrowing and owning iterators.
//! - [`error::ListError`]: returned by accessors that need a non-empty list.
//!
//! Nodes never leave the list. Internally both the list and each node are a
//! `Link` (the owner of the next node), and every insertion or removal is one
//! of two splices on a link: append a node after it, or detach the node that
//! follows it.
//!
//! ## Index policy
//!
//! - Invalid positions (negative, fractional, NaN) make mutations a no-op and
//!   lookups return `None`.
//! - Positions past the end are clamped to the end of the list by
//!   `insert_at` and `remove_at`.
//! - `remove_at` on a single node list removes that node for any valid
//!   position.

pub mod error;
pub mod iter;
pub mod list;
pub mod position;

mod node;
mod traits;

pub use error::ListError;
pub use list::LinkedList;
pub use position::Position;

#[cfg(test)]
mod tests;
