use alloc::boxed::Box;

/// A trait for anything that owns the link to the next node of a chain.
///
/// Both the list (through its head slot) and every node (through its `next`
/// slot) are links, so the splice operations on [`Node`] work the same way
/// whether the predecessor is the list itself or another node.
pub trait Link {
    /// The node type this link points to.
    type Target;

    /// Get the next node in the chain
    fn next(&self) -> Option<&Self::Target>;

    /// Get a mutable reference to the next node in the chain
    fn next_mut(&mut self) -> Option<&mut Self::Target>;

    /// Take the next node out of the chain, leaving this link at the end
    fn take_next(&mut self) -> Option<Box<Self::Target>>;

    /// Set the next node in the chain
    ///
    /// Whatever this link owned before is dropped, so callers take it out first.
    fn set_next(&mut self, next: Option<Box<Self::Target>>);
}

/// A trait for a node in a singly linked chain.
pub trait Node: Link<Target = Self> + Sized {
    /// Link the node directly after `parent`.
    ///
    /// The node that followed `parent` (if any) now follows this node.
    fn append_to<L>(self: Box<Self>, parent: &mut L)
    where
        L: Link<Target = Self>;

    /// Unlink the node that follows `parent` and hand it back.
    ///
    /// `parent` is relinked to the successor of the detached node. Returns
    /// `None` when `parent` is the end of the chain.
    fn detach<L>(parent: &mut L) -> Option<Box<Self>>
    where
        L: Link<Target = Self>;
}

/// A trait for a node that carries data.
pub trait NodeWithData: Node {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Consume a detached node and return its data
    fn into_data(self: Box<Self>) -> Self::Data;
}
