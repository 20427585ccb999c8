// ═══════════════════════════════════════════════════════════════════════
// Core types — ids, enums, cards, players, combat snapshots
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Ids ────────────────────────────────────────────────────────────────
// Compact, copyable identifiers. A TerritoryId indexes the board arena,
// a PlayerId is fixed at setup and never reused after elimination.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct TerritoryId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PlayerId(pub u8);

impl TerritoryId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ── Enums ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Continent {
    NorthAmerica,
    SouthAmerica,
    Europe,
    Africa,
    Asia,
    Australia,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Europe,
        Continent::Africa,
        Continent::Asia,
        Continent::Australia,
    ];

    /// Extra armies granted per turn for holding every territory of the continent.
    pub fn bonus(self) -> u32 {
        match self {
            Continent::Asia => 7,
            Continent::Europe => 5,
            Continent::NorthAmerica => 4,
            Continent::Africa => 3,
            Continent::Australia => 2,
            Continent::SouthAmerica => 2,
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Continent::NorthAmerica => write!(f, "North America"),
            Continent::SouthAmerica => write!(f, "South America"),
            Continent::Europe => write!(f, "Europe"),
            Continent::Africa => write!(f, "Africa"),
            Continent::Asia => write!(f, "Asia"),
            Continent::Australia => write!(f, "Australia"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Infantry,
    Cavalry,
    Artillery,
}

impl UnitType {
    pub const ALL: [UnitType; 3] = [UnitType::Infantry, UnitType::Cavalry, UnitType::Artillery];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
    White,
    Pink,
    Orange,
    Brown,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Black,
        Color::White,
        Color::Pink,
        Color::Orange,
        Color::Brown,
    ];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown color '{s}'"))
    }
}

/// Per-player turn phase. Order matters only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    #[default]
    None,
    InitialPlacement,
    TradeCards,
    TradeCardsAfterDefeat,
    Reinforcement,
    Attack,
    DrawCard,
    Fortification,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    GameOver,
}

// ── Goal ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    WorldDomination,
    EuropeAustraliaAndThird,
    EuropeSouthAmericaAndThird,
    AsiaAndAfrica,
    AsiaAndSouthAmerica,
    NorthAmericaAndAfrica,
    TwentyFourTerritories,
    AfricaSouthAmericaAndThird,
    NorthAmericaSouthAmericaAndAustralia,
}

impl Goal {
    pub const ALL: [Goal; 9] = [
        Goal::WorldDomination,
        Goal::EuropeAustraliaAndThird,
        Goal::EuropeSouthAmericaAndThird,
        Goal::AsiaAndAfrica,
        Goal::AsiaAndSouthAmerica,
        Goal::NorthAmericaAndAfrica,
        Goal::TwentyFourTerritories,
        Goal::AfricaSouthAmericaAndThird,
        Goal::NorthAmericaSouthAmericaAndAustralia,
    ];

    /// Goals handed out when the game is not played for world domination.
    pub fn assignable() -> &'static [Goal] {
        &Goal::ALL[1..]
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::WorldDomination => write!(f, "Conquer the world"),
            Goal::EuropeAustraliaAndThird => write!(f, "Conquer Europe, Australia and a third continent"),
            Goal::EuropeSouthAmericaAndThird => write!(f, "Conquer Europe, South America and a third continent"),
            Goal::AsiaAndAfrica => write!(f, "Conquer Asia and Africa"),
            Goal::AsiaAndSouthAmerica => write!(f, "Conquer Asia and South America"),
            Goal::NorthAmericaAndAfrica => write!(f, "Conquer North America and Africa"),
            Goal::TwentyFourTerritories => write!(f, "Control 24 territories"),
            Goal::AfricaSouthAmericaAndThird => write!(f, "Conquer Africa, South America and a third continent"),
            Goal::NorthAmericaSouthAmericaAndAustralia => {
                write!(f, "Conquer North America, South America and Australia")
            }
        }
    }
}

// ── Card ───────────────────────────────────────────────────────────────

/// A risk card. Derived equality gives the card identity rule: two wildcards
/// are equal, bound cards are equal when territory and unit type match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Wild,
    Territory { territory: TerritoryId, unit: UnitType },
}

impl Card {
    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild)
    }

    pub fn unit(&self) -> Option<UnitType> {
        match self {
            Card::Wild => None,
            Card::Territory { unit, .. } => Some(*unit),
        }
    }

    pub fn territory(&self) -> Option<TerritoryId> {
        match self {
            Card::Wild => None,
            Card::Territory { territory, .. } => Some(*territory),
        }
    }
}

// ── Player ─────────────────────────────────────────────────────────────

/// Identity supplied by the caller when building a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub color: Color,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        PlayerSpec { name: name.into(), color }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: Color,
    pub phase: Phase,
    pub goal: Goal,
    pub reinforcements: u32,
    pub conquered_this_turn: bool,
    /// Set once the per-turn reinforcement grant has been added to the pool.
    pub reinforcements_granted: bool,
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId, spec: PlayerSpec) -> Self {
        Player {
            id,
            name: spec.name,
            color: spec.color,
            phase: Phase::None,
            goal: Goal::WorldDomination,
            reinforcements: 0,
            conquered_this_turn: false,
            reinforcements_granted: false,
            cards: Vec::new(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

// ── Combat snapshots ───────────────────────────────────────────────────

/// One attack roll. Dice are sorted highest first. Only the handler issues
/// these, and each one can be defended once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackResult {
    pub(crate) attacking: TerritoryId,
    pub(crate) defending: TerritoryId,
    pub(crate) dice: Vec<u8>,
}

impl AttackResult {
    pub fn attacking(&self) -> TerritoryId {
        self.attacking
    }

    pub fn defending(&self) -> TerritoryId {
        self.defending
    }

    pub fn dice(&self) -> &[u8] {
        &self.dice
    }
}

/// Outcome of defending against an `AttackResult`. A conquering result is
/// the handle for `move_armies_after_conquest` until the phase ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefenseResult {
    pub(crate) attacking: TerritoryId,
    pub(crate) defending: TerritoryId,
    pub(crate) dice: Vec<u8>,
    pub(crate) attacker_losses: u32,
    pub(crate) defender_losses: u32,
    pub(crate) conquered: bool,
}

impl DefenseResult {
    pub fn attacking(&self) -> TerritoryId {
        self.attacking
    }

    pub fn defending(&self) -> TerritoryId {
        self.defending
    }

    /// Defense dice, highest first.
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    pub fn attacker_losses(&self) -> u32 {
        self.attacker_losses
    }

    pub fn defender_losses(&self) -> u32 {
        self.defender_losses
    }

    pub fn conquered(&self) -> bool {
        self.conquered
    }
}
