use thiserror::Error;

/// Errors returned by the checked entry points of the lists.
///
/// Partial progress of the `try_*` operations is not an error; those report
/// how far they got through their return value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("node is not a member of the list")]
    NotAMember,
    #[error("splitting inside a span requires an extra node")]
    MissingExtraNode,
}
