pub mod types;
pub mod error;
pub mod map;
pub mod dice;
pub mod combat;
pub mod reinforcement;
pub mod cards;
pub mod navigation;
pub mod goals;
pub mod setup;
pub mod engine;
pub mod visibility;


pub use types::*;
pub use error::{GameError, GameErrorKind, GameResult, MapError, SetupError};
pub use map::Board;
pub use dice::RandomSource;
pub use engine::GameHandler;
pub use setup::{Game, GameConfig};
