/// Errors reported by list accessors that need at least one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("list is empty")]
    Empty,
}
