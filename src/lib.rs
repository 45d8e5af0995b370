pub mod config;
pub mod error;
pub mod model;
pub mod roster;
pub mod controller {
    pub mod leaderboard;
    pub mod score;
}
pub mod view {
    pub mod standings;
}

pub use controller::score::compute_standings;
pub use error::PoolError;
pub use roster::RosterIndex;
