// ═══════════════════════════════════════════════════════════════════════
// Board — territory arena, adjacency, control queries
// Topology arrives from outside (JSON or the built-in classic table);
// neighbors are stored as ids so the cyclic graph owns nothing twice.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::MapError;
use crate::types::{Continent, PlayerId, TerritoryId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Upper bound imposed by the width of `TerritoryId`.
pub const MAX_TERRITORIES: usize = u8::MAX as usize + 1;

/// External description of one territory, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryDef {
    pub name: String,
    pub continent: Continent,
    pub neighbors: Vec<String>,
}

/// Dynamic per-territory state during a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    pub continent: Continent,
    pub neighbors: BTreeSet<TerritoryId>,
    pub armies: u32,
    pub owner: Option<PlayerId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    territories: Vec<Territory>,
}

impl Board {
    /// Build a board from name-keyed definitions, rejecting duplicate
    /// names, dangling or self references and one-sided adjacency.
    pub fn from_defs(defs: &[TerritoryDef]) -> Result<Board, MapError> {
        if defs.is_empty() {
            return Err(MapError::Empty);
        }
        if defs.len() > MAX_TERRITORIES {
            return Err(MapError::TooLarge { max: MAX_TERRITORIES });
        }

        let mut ids: HashMap<&str, TerritoryId> = HashMap::new();
        for (i, def) in defs.iter().enumerate() {
            if ids.insert(def.name.as_str(), TerritoryId(i as u8)).is_some() {
                return Err(MapError::DuplicateTerritory(def.name.clone()));
            }
        }

        let mut territories = Vec::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            let mut neighbors = BTreeSet::new();
            for n in &def.neighbors {
                let id = *ids.get(n.as_str()).ok_or_else(|| MapError::UnknownNeighbor {
                    territory: def.name.clone(),
                    neighbor: n.clone(),
                })?;
                if id.index() == i {
                    return Err(MapError::SelfNeighbor(def.name.clone()));
                }
                neighbors.insert(id);
            }
            territories.push(Territory {
                id: TerritoryId(i as u8),
                name: def.name.clone(),
                continent: def.continent,
                neighbors,
                armies: 0,
                owner: None,
            });
        }

        for t in &territories {
            for n in &t.neighbors {
                if !territories[n.index()].neighbors.contains(&t.id) {
                    return Err(MapError::AsymmetricNeighbor {
                        from: t.name.clone(),
                        to: territories[n.index()].name.clone(),
                    });
                }
            }
        }

        Ok(Board { territories })
    }

    /// Parse a JSON array of `TerritoryDef`.
    pub fn from_json(json: &str) -> Result<Board, MapError> {
        let defs: Vec<TerritoryDef> = serde_json::from_str(json)?;
        Board::from_defs(&defs)
    }

    /// The standard 42-territory world map.
    pub fn classic() -> Board {
        let territories = CLASSIC
            .iter()
            .map(|def| Territory {
                id: def.id,
                name: def.name.to_string(),
                continent: def.continent,
                neighbors: def.adjacent.iter().copied().collect(),
                armies: 0,
                owner: None,
            })
            .collect();
        Board { territories }
    }

    /// Name-keyed definitions of this board's topology.
    pub fn to_defs(&self) -> Vec<TerritoryDef> {
        self.territories
            .iter()
            .map(|t| TerritoryDef {
                name: t.name.clone(),
                continent: t.continent,
                neighbors: t.neighbors.iter().map(|n| self.name(*n).to_string()).collect(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn ids(&self) -> impl Iterator<Item = TerritoryId> + '_ {
        self.territories.iter().map(|t| t.id)
    }

    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.index())
    }

    /// Panics on an id that did not come from this board.
    pub fn territory(&self, id: TerritoryId) -> &Territory {
        &self.territories[id.index()]
    }

    pub fn territory_mut(&mut self, id: TerritoryId) -> &mut Territory {
        &mut self.territories[id.index()]
    }

    pub fn contains(&self, id: TerritoryId) -> bool {
        id.index() < self.territories.len()
    }

    pub fn name(&self, id: TerritoryId) -> &str {
        self.get(id).map_or("<unknown>", |t| t.name.as_str())
    }

    /// Case-insensitive lookup that treats '_' and ' ' alike.
    pub fn lookup(&self, name: &str) -> Option<TerritoryId> {
        let wanted = normalize(name);
        self.territories
            .iter()
            .find(|t| normalize(&t.name) == wanted)
            .map(|t| t.id)
    }

    pub fn owner(&self, id: TerritoryId) -> Option<PlayerId> {
        self.get(id).and_then(|t| t.owner)
    }

    pub fn armies(&self, id: TerritoryId) -> u32 {
        self.get(id).map_or(0, |t| t.armies)
    }

    pub fn are_neighbors(&self, a: TerritoryId, b: TerritoryId) -> bool {
        self.get(a).is_some_and(|t| t.neighbors.contains(&b))
    }

    pub fn territories_in_continent(&self, continent: Continent) -> Vec<TerritoryId> {
        self.territories
            .iter()
            .filter(|t| t.continent == continent)
            .map(|t| t.id)
            .collect()
    }

    pub fn territories_of(&self, player: PlayerId) -> Vec<TerritoryId> {
        self.territories
            .iter()
            .filter(|t| t.owner == Some(player))
            .map(|t| t.id)
            .collect()
    }

    pub fn count_controlled(&self, player: PlayerId) -> usize {
        self.territories.iter().filter(|t| t.owner == Some(player)).count()
    }

    /// True when the player holds every territory of a non-empty continent.
    pub fn controls_continent(&self, continent: Continent, player: PlayerId) -> bool {
        let mut any = false;
        for t in self.territories.iter().filter(|t| t.continent == continent) {
            if t.owner != Some(player) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn controlled_continents(&self, player: PlayerId) -> Vec<Continent> {
        Continent::ALL
            .iter()
            .copied()
            .filter(|&c| self.controls_continent(c, player))
            .collect()
    }

    pub fn is_world_domination(&self, player: PlayerId) -> bool {
        self.territories.iter().all(|t| t.owner == Some(player))
    }

    pub fn total_armies(&self, player: PlayerId) -> u32 {
        self.territories
            .iter()
            .filter(|t| t.owner == Some(player))
            .map(|t| t.armies)
            .sum()
    }
}

fn normalize(name: &str) -> String {
    name.trim().replace('_', " ").to_ascii_lowercase()
}

// ── Classic map ────────────────────────────────────────────────────────

/// Static description of a classic-map territory.
#[derive(Debug, Clone)]
pub struct ClassicDef {
    pub id: TerritoryId,
    pub name: &'static str,
    pub continent: Continent,
    pub adjacent: &'static [TerritoryId],
}

// ── Territory ID constants ─────────────────────────────────────────────
// Ordered by continent: North America (0–8), South America (9–12),
// Europe (13–19), Africa (20–25), Asia (26–37), Australia (38–41)

pub const ALASKA:                TerritoryId = TerritoryId(0);
pub const NORTHWEST_TERRITORY:   TerritoryId = TerritoryId(1);
pub const GREENLAND:             TerritoryId = TerritoryId(2);
pub const ALBERTA:               TerritoryId = TerritoryId(3);
pub const ONTARIO:               TerritoryId = TerritoryId(4);
pub const QUEBEC:                TerritoryId = TerritoryId(5);
pub const WESTERN_UNITED_STATES: TerritoryId = TerritoryId(6);
pub const EASTERN_UNITED_STATES: TerritoryId = TerritoryId(7);
pub const CENTRAL_AMERICA:       TerritoryId = TerritoryId(8);
pub const VENEZUELA:             TerritoryId = TerritoryId(9);
pub const PERU:                  TerritoryId = TerritoryId(10);
pub const BRAZIL:                TerritoryId = TerritoryId(11);
pub const ARGENTINA:             TerritoryId = TerritoryId(12);
pub const ICELAND:               TerritoryId = TerritoryId(13);
pub const SCANDINAVIA:           TerritoryId = TerritoryId(14);
pub const GREAT_BRITAIN:         TerritoryId = TerritoryId(15);
pub const NORTHERN_EUROPE:       TerritoryId = TerritoryId(16);
pub const WESTERN_EUROPE:        TerritoryId = TerritoryId(17);
pub const SOUTHERN_EUROPE:       TerritoryId = TerritoryId(18);
pub const UKRAINE:               TerritoryId = TerritoryId(19);
pub const NORTH_AFRICA:          TerritoryId = TerritoryId(20);
pub const EGYPT:                 TerritoryId = TerritoryId(21);
pub const EAST_AFRICA:           TerritoryId = TerritoryId(22);
pub const CONGO:                 TerritoryId = TerritoryId(23);
pub const SOUTH_AFRICA:          TerritoryId = TerritoryId(24);
pub const MADAGASCAR:            TerritoryId = TerritoryId(25);
pub const URAL:                  TerritoryId = TerritoryId(26);
pub const SIBERIA:               TerritoryId = TerritoryId(27);
pub const YAKUTSK:               TerritoryId = TerritoryId(28);
pub const KAMCHATKA:             TerritoryId = TerritoryId(29);
pub const IRKUTSK:               TerritoryId = TerritoryId(30);
pub const MONGOLIA:              TerritoryId = TerritoryId(31);
pub const JAPAN:                 TerritoryId = TerritoryId(32);
pub const AFGHANISTAN:           TerritoryId = TerritoryId(33);
pub const CHINA:                 TerritoryId = TerritoryId(34);
pub const MIDDLE_EAST:           TerritoryId = TerritoryId(35);
pub const INDIA:                 TerritoryId = TerritoryId(36);
pub const SIAM:                  TerritoryId = TerritoryId(37);
pub const INDONESIA:             TerritoryId = TerritoryId(38);
pub const NEW_GUINEA:            TerritoryId = TerritoryId(39);
pub const WESTERN_AUSTRALIA:     TerritoryId = TerritoryId(40);
pub const EASTERN_AUSTRALIA:     TerritoryId = TerritoryId(41);

pub const NUM_CLASSIC_TERRITORIES: usize = 42;

macro_rules! territory {
    ($name:expr, $id:expr, $continent:ident, adj: [$($a:expr),*]) => {
        ClassicDef { id: $id, name: $name, continent: Continent::$continent, adjacent: &[$($a),*] }
    };
}

pub static CLASSIC: [ClassicDef; NUM_CLASSIC_TERRITORIES] = [
    territory!("Alaska", ALASKA, NorthAmerica,
        adj: [NORTHWEST_TERRITORY, ALBERTA, KAMCHATKA]),
    territory!("Northwest Territory", NORTHWEST_TERRITORY, NorthAmerica,
        adj: [ALASKA, ALBERTA, ONTARIO, GREENLAND]),
    territory!("Greenland", GREENLAND, NorthAmerica,
        adj: [NORTHWEST_TERRITORY, ONTARIO, QUEBEC, ICELAND]),
    territory!("Alberta", ALBERTA, NorthAmerica,
        adj: [ALASKA, NORTHWEST_TERRITORY, ONTARIO, WESTERN_UNITED_STATES]),
    territory!("Ontario", ONTARIO, NorthAmerica,
        adj: [NORTHWEST_TERRITORY, ALBERTA, WESTERN_UNITED_STATES, EASTERN_UNITED_STATES, QUEBEC, GREENLAND]),
    territory!("Quebec", QUEBEC, NorthAmerica,
        adj: [ONTARIO, EASTERN_UNITED_STATES, GREENLAND]),
    territory!("Western United States", WESTERN_UNITED_STATES, NorthAmerica,
        adj: [ALBERTA, ONTARIO, EASTERN_UNITED_STATES, CENTRAL_AMERICA]),
    territory!("Eastern United States", EASTERN_UNITED_STATES, NorthAmerica,
        adj: [WESTERN_UNITED_STATES, ONTARIO, QUEBEC, CENTRAL_AMERICA]),
    territory!("Central America", CENTRAL_AMERICA, NorthAmerica,
        adj: [WESTERN_UNITED_STATES, EASTERN_UNITED_STATES, VENEZUELA]),
    territory!("Venezuela", VENEZUELA, SouthAmerica,
        adj: [CENTRAL_AMERICA, PERU, BRAZIL]),
    territory!("Peru", PERU, SouthAmerica,
        adj: [VENEZUELA, BRAZIL, ARGENTINA]),
    territory!("Brazil", BRAZIL, SouthAmerica,
        adj: [VENEZUELA, PERU, ARGENTINA, NORTH_AFRICA]),
    territory!("Argentina", ARGENTINA, SouthAmerica,
        adj: [PERU, BRAZIL]),
    territory!("Iceland", ICELAND, Europe,
        adj: [GREENLAND, GREAT_BRITAIN, SCANDINAVIA]),
    territory!("Scandinavia", SCANDINAVIA, Europe,
        adj: [ICELAND, GREAT_BRITAIN, NORTHERN_EUROPE, UKRAINE]),
    territory!("Great Britain", GREAT_BRITAIN, Europe,
        adj: [ICELAND, SCANDINAVIA, NORTHERN_EUROPE, WESTERN_EUROPE]),
    territory!("Northern Europe", NORTHERN_EUROPE, Europe,
        adj: [GREAT_BRITAIN, SCANDINAVIA, UKRAINE, SOUTHERN_EUROPE, WESTERN_EUROPE]),
    territory!("Western Europe", WESTERN_EUROPE, Europe,
        adj: [GREAT_BRITAIN, NORTHERN_EUROPE, SOUTHERN_EUROPE, NORTH_AFRICA]),
    territory!("Southern Europe", SOUTHERN_EUROPE, Europe,
        adj: [WESTERN_EUROPE, NORTHERN_EUROPE, UKRAINE, MIDDLE_EAST, EGYPT, NORTH_AFRICA]),
    territory!("Ukraine", UKRAINE, Europe,
        adj: [SCANDINAVIA, NORTHERN_EUROPE, SOUTHERN_EUROPE, MIDDLE_EAST, AFGHANISTAN, URAL]),
    territory!("North Africa", NORTH_AFRICA, Africa,
        adj: [BRAZIL, WESTERN_EUROPE, SOUTHERN_EUROPE, EGYPT, EAST_AFRICA, CONGO]),
    territory!("Egypt", EGYPT, Africa,
        adj: [NORTH_AFRICA, SOUTHERN_EUROPE, MIDDLE_EAST, EAST_AFRICA]),
    territory!("East Africa", EAST_AFRICA, Africa,
        adj: [EGYPT, MIDDLE_EAST, NORTH_AFRICA, CONGO, SOUTH_AFRICA, MADAGASCAR]),
    territory!("Congo", CONGO, Africa,
        adj: [NORTH_AFRICA, EAST_AFRICA, SOUTH_AFRICA]),
    territory!("South Africa", SOUTH_AFRICA, Africa,
        adj: [CONGO, EAST_AFRICA, MADAGASCAR]),
    territory!("Madagascar", MADAGASCAR, Africa,
        adj: [SOUTH_AFRICA, EAST_AFRICA]),
    territory!("Ural", URAL, Asia,
        adj: [UKRAINE, SIBERIA, CHINA, AFGHANISTAN]),
    territory!("Siberia", SIBERIA, Asia,
        adj: [URAL, YAKUTSK, IRKUTSK, MONGOLIA, CHINA]),
    territory!("Yakutsk", YAKUTSK, Asia,
        adj: [SIBERIA, KAMCHATKA, IRKUTSK]),
    territory!("Kamchatka", KAMCHATKA, Asia,
        adj: [YAKUTSK, IRKUTSK, MONGOLIA, JAPAN, ALASKA]),
    territory!("Irkutsk", IRKUTSK, Asia,
        adj: [SIBERIA, YAKUTSK, KAMCHATKA, MONGOLIA]),
    territory!("Mongolia", MONGOLIA, Asia,
        adj: [IRKUTSK, SIBERIA, KAMCHATKA, JAPAN, CHINA]),
    territory!("Japan", JAPAN, Asia,
        adj: [KAMCHATKA, MONGOLIA]),
    territory!("Afghanistan", AFGHANISTAN, Asia,
        adj: [UKRAINE, URAL, CHINA, INDIA, MIDDLE_EAST]),
    territory!("China", CHINA, Asia,
        adj: [AFGHANISTAN, URAL, SIBERIA, MONGOLIA, SIAM, INDIA]),
    territory!("Middle East", MIDDLE_EAST, Asia,
        adj: [UKRAINE, SOUTHERN_EUROPE, EGYPT, EAST_AFRICA, INDIA, AFGHANISTAN]),
    territory!("India", INDIA, Asia,
        adj: [MIDDLE_EAST, AFGHANISTAN, CHINA, SIAM]),
    territory!("Siam", SIAM, Asia,
        adj: [INDIA, CHINA, INDONESIA]),
    territory!("Indonesia", INDONESIA, Australia,
        adj: [SIAM, NEW_GUINEA, WESTERN_AUSTRALIA]),
    territory!("New Guinea", NEW_GUINEA, Australia,
        adj: [INDONESIA, WESTERN_AUSTRALIA, EASTERN_AUSTRALIA]),
    territory!("Western Australia", WESTERN_AUSTRALIA, Australia,
        adj: [INDONESIA, NEW_GUINEA, EASTERN_AUSTRALIA]),
    territory!("Eastern Australia", EASTERN_AUSTRALIA, Australia,
        adj: [WESTERN_AUSTRALIA, NEW_GUINEA]),
];
