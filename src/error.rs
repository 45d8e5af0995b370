use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("malformed leaderboard row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
    #[error("unparseable score {value:?} for {player}")]
    UnparseableScore { player: String, value: String },
    #[error("{player} is drafted by {owner}, who is not a pool owner")]
    UnknownOwner { player: String, owner: String },
    #[error("{player} appears more than once in the roster")]
    DuplicatePlayer { player: String },
    #[error("config error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PoolError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for PoolError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for PoolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for PoolError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
