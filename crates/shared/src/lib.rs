pub mod domain;
pub mod error;
pub mod sort;

pub use domain::{GameId, GameRecord, NewGame, SortKey};
pub use error::{ErrorBody, ErrorCode, ValidationError};
pub use sort::sort_games;
