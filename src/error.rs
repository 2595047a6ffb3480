use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read tree file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed syntax tree: {0}")]
    Tree(#[from] serde_json::Error),
}
