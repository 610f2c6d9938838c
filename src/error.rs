use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrqError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot open a pull request from the protected branch '{0}'")]
    ProtectedBranch(String),

    #[error("No commits between {base} and HEAD; nothing to request")]
    NoCommits { base: String },

    #[error("No pull request recorded for branch '{0}'. Run `prq create` first")]
    NoRecordedPr(String),

    #[error("Index {index} is out of range ({len} pull requests)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Canceled")]
    Canceled,

    #[error("Git error: {0}")]
    Git(String),

    #[error("Command error: {0}")]
    Command(String),

    #[error("Could not parse remote url '{0}'")]
    RemoteUrl(String),

    #[error("API request failed with status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PrqError>;
