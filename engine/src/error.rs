// ═══════════════════════════════════════════════════════════════════════
// Errors — every rejected call leaves the game untouched
// ═══════════════════════════════════════════════════════════════════════

use crate::types::Phase;
use thiserror::Error;

/// The closed set of rule violations, for callers that branch on the
/// category rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameErrorKind {
    NotPlayersTurn,
    WrongPhase,
    TerritoryNotControlled,
    TerritoryNotAttackable,
    IllegalArmyCount,
    IllegalCardCombination,
    IllegalPath,
    InvalidAttackDice,
    InvalidDefenseDice,
    NoTerritoryConquered,
    MustTradeCards,
    GameOver,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("it is not {player}'s turn")]
    NotPlayersTurn { player: String },

    #[error("cannot {action} during phase {phase}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("territory {territory} is not controlled by {player}")]
    TerritoryNotControlled { territory: String, player: String },

    #[error("territory {target} cannot be attacked from {from}: {reason}")]
    TerritoryNotAttackable {
        from: String,
        target: String,
        reason: &'static str,
    },

    #[error("illegal number of armies: {0}")]
    IllegalArmyCount(String),

    #[error("illegal card combination: {0}")]
    IllegalCardCombination(String),

    #[error("{to} is not reachable from {from} through own territory")]
    IllegalPath { from: String, to: String },

    #[error("invalid attack dice: {0}")]
    InvalidAttackDice(String),

    #[error("invalid defense dice: {0}")]
    InvalidDefenseDice(String),

    #[error("no territory conquered: {0}")]
    NoTerritoryConquered(String),

    #[error("{cards} cards in hand, trade before ending the phase")]
    MustTradeCards { cards: usize },

    #[error("the game is already over")]
    GameOver,

    #[error("{0}")]
    Unknown(String),
}

impl GameError {
    pub fn kind(&self) -> GameErrorKind {
        match self {
            GameError::NotPlayersTurn { .. } => GameErrorKind::NotPlayersTurn,
            GameError::WrongPhase { .. } => GameErrorKind::WrongPhase,
            GameError::TerritoryNotControlled { .. } => GameErrorKind::TerritoryNotControlled,
            GameError::TerritoryNotAttackable { .. } => GameErrorKind::TerritoryNotAttackable,
            GameError::IllegalArmyCount(_) => GameErrorKind::IllegalArmyCount,
            GameError::IllegalCardCombination(_) => GameErrorKind::IllegalCardCombination,
            GameError::IllegalPath { .. } => GameErrorKind::IllegalPath,
            GameError::InvalidAttackDice(_) => GameErrorKind::InvalidAttackDice,
            GameError::InvalidDefenseDice(_) => GameErrorKind::InvalidDefenseDice,
            GameError::NoTerritoryConquered(_) => GameErrorKind::NoTerritoryConquered,
            GameError::MustTradeCards { .. } => GameErrorKind::MustTradeCards,
            GameError::GameOver => GameErrorKind::GameOver,
            GameError::Unknown(_) => GameErrorKind::Unknown,
        }
    }
}

pub type GameResult<T> = Result<T, GameError>;

/// Problems with externally supplied topology or deck data.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("board has no territories")]
    Empty,
    #[error("board has more than {max} territories")]
    TooLarge { max: usize },
    #[error("duplicate territory name '{0}'")]
    DuplicateTerritory(String),
    #[error("territory '{territory}' lists unknown neighbor '{neighbor}'")]
    UnknownNeighbor { territory: String, neighbor: String },
    #[error("territory '{0}' lists itself as a neighbor")]
    SelfNeighbor(String),
    #[error("'{from}' neighbors '{to}' but not the other way round")]
    AsymmetricNeighbor { from: String, to: String },
    #[error("card references unknown territory '{0}'")]
    UnknownCardTerritory(String),
    #[error("duplicate card for territory '{0}'")]
    DuplicateCard(String),
    #[error("territory '{0}' has no card in the deck")]
    MissingCard(String),
    #[error("malformed data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a roster or game cannot be set up.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("a game needs between {min} and {max} players, got {got}")]
    InvalidPlayerCount { min: usize, max: usize, got: usize },
    #[error("player name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("color {0} is used by more than one player")]
    DuplicateColor(crate::types::Color),
    #[error(transparent)]
    Map(#[from] MapError),
}
