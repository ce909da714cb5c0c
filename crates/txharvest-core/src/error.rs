use crate::types::TxHash;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("lookup service failure: {0}")]
    Transport(String),

    #[error("transaction not found: {0}")]
    TxNotFound(TxHash),

    #[error("invalid transaction data: {0}")]
    InvalidRecord(String),

    #[error("record parse error at line {line}: {message}")]
    RecordParse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
