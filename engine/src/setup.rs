// ═══════════════════════════════════════════════════════════════════════
// Game setup — roster validation, starting armies, goals, territory draw
// ═══════════════════════════════════════════════════════════════════════

use crate::cards;
use crate::dice::RandomSource;
use crate::engine::GameHandler;
use crate::error::SetupError;
use crate::map::Board;
use crate::types::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;
pub const ARMIES_FOR_MIN_PLAYERS: u32 = 40;
pub const ARMIES_LESS_PER_EXTRA_PLAYER: u32 = 5;

/// Armies each player starts with: 40 for two players, 5 fewer per extra player.
pub fn starting_armies(player_count: usize) -> u32 {
    let extra = player_count.saturating_sub(MIN_PLAYERS) as u32;
    ARMIES_FOR_MIN_PLAYERS.saturating_sub(extra * ARMIES_LESS_PER_EXTRA_PLAYER)
}

/// Everything needed to set up a game, loadable from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: Vec<PlayerSpec>,
    #[serde(default = "default_world_domination")]
    pub world_domination: bool,
    #[serde(default)]
    pub seed: u64,
}

fn default_world_domination() -> bool {
    true
}

/// Resolve optional external topology and deck data, falling back to the
/// classic map and its deck.
pub fn load_topology(board_json: Option<&str>, deck_json: Option<&str>) -> Result<(Board, Vec<Card>), SetupError> {
    let board = match board_json {
        Some(json) => Board::from_json(json)?,
        None => Board::classic(),
    };
    let deck = match deck_json {
        Some(json) => cards::deck_from_json(&board, json)?,
        None => cards::classic_deck(&board),
    };
    Ok((board, deck))
}

/// A validated roster waiting to be started.
#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    players: Vec<Player>,
    world_domination: bool,
    board: Board,
    deck: Vec<Card>,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Seeded setup from a config.
    pub fn from_config(config: &GameConfig, board: Board, deck: Vec<Card>) -> Result<Self, SetupError> {
        Game::new(
            config.players.clone(),
            config.world_domination,
            board,
            deck,
            ChaCha8Rng::seed_from_u64(config.seed),
        )
    }
}

impl<R: RandomSource> Game<R> {
    pub fn new(
        roster: Vec<PlayerSpec>,
        world_domination: bool,
        board: Board,
        deck: Vec<Card>,
        mut rng: R,
    ) -> Result<Self, SetupError> {
        validate_roster(&roster)?;

        let armies = starting_armies(roster.len());
        let mut players: Vec<Player> = roster
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                let mut p = Player::new(PlayerId(i as u8), spec);
                p.reinforcements = armies;
                p.phase = Phase::InitialPlacement;
                p
            })
            .collect();

        if !world_domination {
            assign_goals(&mut players, &mut rng);
        }

        Ok(Game { players, world_domination, board, deck, rng })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn is_world_domination(&self) -> bool {
        self.world_domination
    }

    /// Pick the first player, deal out every territory with one army each,
    /// and hand the game to the rules engine.
    pub fn start(mut self) -> GameHandler<R> {
        let first = self.rng.index(self.players.len());

        let mut remaining: Vec<TerritoryId> = self.board.ids().collect();
        while !remaining.is_empty() {
            for player in self.players.iter_mut() {
                if remaining.is_empty() {
                    break;
                }
                let id = remaining.remove(self.rng.index(remaining.len()));
                let territory = self.board.territory_mut(id);
                territory.owner = Some(player.id);
                territory.armies = 1;
                player.reinforcements = player.reinforcements.saturating_sub(1);
            }
        }

        let first_id = self.players[first].id;
        info!(
            players = self.players.len(),
            territories = self.board.len(),
            first = %self.players[first],
            "game started"
        );
        GameHandler::start_placement(self.board, self.deck, self.players, first_id, self.rng)
    }
}

fn validate_roster(roster: &[PlayerSpec]) -> Result<(), SetupError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roster.len()) {
        return Err(SetupError::InvalidPlayerCount {
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
            got: roster.len(),
        });
    }
    let mut names = HashSet::new();
    let mut colors = HashSet::new();
    for spec in roster {
        if !names.insert(spec.name.to_lowercase()) {
            return Err(SetupError::DuplicateName(spec.name.clone()));
        }
        if !colors.insert(spec.color) {
            return Err(SetupError::DuplicateColor(spec.color));
        }
    }
    Ok(())
}

/// Give every player a distinct goal other than world domination,
/// redrawing until the draw is unused.
fn assign_goals<R: RandomSource>(players: &mut [Player], rng: &mut R) {
    let pool = Goal::assignable();
    let mut taken: HashSet<Goal> = HashSet::new();
    for player in players.iter_mut() {
        let mut goal = pool[rng.index(pool.len())];
        while taken.contains(&goal) {
            goal = pool[rng.index(pool.len())];
        }
        taken.insert(goal);
        player.goal = goal;
        debug!(player = %player, %goal, "goal assigned");
    }
}
