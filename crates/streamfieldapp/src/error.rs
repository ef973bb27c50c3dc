use crate::path::BlockPath;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamFieldError {
    #[error("No block at path {0}")]
    InvalidPath(BlockPath),

    #[error("Index {index} is out of range for the list at {list} ({len} blocks)")]
    InvalidIndex {
        list: BlockPath,
        index: usize,
        len: usize,
    },

    #[error("Invalid droppable id: {0:?}")]
    InvalidDroppableId(String),

    #[error("Invalid path: {0:?}")]
    PathSyntax(String),

    #[error("Cannot move block {block} into its own subtree at {destination}")]
    InvalidMove {
        block: BlockPath,
        destination: BlockPath,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StreamFieldError>;
