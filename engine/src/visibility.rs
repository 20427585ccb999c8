// ═══════════════════════════════════════════════════════════════════════
// Visibility / Information Model
//
//   PUBLIC  — board ownership and armies, every player's phase, card
//             count and pool, turn holder, trade reward, winner
//   PRIVATE — the viewer's own hand and secret goal
//   HIDDEN  — deck order, opponents' hands and goals
//
// Drivers hand a PlayerView (usually as JSON) to whoever sits in a seat,
// never the handler itself.
// ═══════════════════════════════════════════════════════════════════════

use crate::dice::RandomSource;
use crate::engine::GameHandler;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    // ── Public info ────────────────────────────────────────
    pub viewer: PlayerId,
    pub status: GameStatus,
    pub in_turn: Option<PlayerId>,
    pub players: Vec<PublicPlayerInfo>,
    pub territories: Vec<TerritoryView>,
    pub deck_size: usize,
    pub next_trade_reward: u32,
    pub winner: Option<PlayerId>,

    // ── Private info (only for the viewer) ─────────────────
    pub my_cards: Vec<Card>,
    /// None once the viewer has been eliminated.
    pub my_goal: Option<Goal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicPlayerInfo {
    pub id: PlayerId,
    pub name: String,
    pub color: Color,
    pub phase: Phase,
    pub cards_in_hand: usize,
    pub reinforcements: u32,
    pub territories: usize,
    pub armies: u32,
    /// Continents held in full, each paying its bonus next turn.
    pub continents: Vec<Continent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerritoryView {
    pub id: TerritoryId,
    pub name: String,
    pub continent: Continent,
    pub owner: Option<PlayerId>,
    pub armies: u32,
    pub neighbors: Vec<TerritoryId>,
}

/// Build the PlayerView for one seat.
pub fn player_view<R: RandomSource>(handler: &GameHandler<R>, viewer: PlayerId) -> PlayerView {
    let board = handler.board();

    let territories = board
        .territories()
        .iter()
        .map(|t| TerritoryView {
            id: t.id,
            name: t.name.clone(),
            continent: t.continent,
            owner: t.owner,
            armies: t.armies,
            neighbors: t.neighbors.iter().copied().collect(),
        })
        .collect();

    let players = handler
        .players()
        .iter()
        .map(|p| PublicPlayerInfo {
            id: p.id,
            name: p.name.clone(),
            color: p.color,
            phase: p.phase,
            cards_in_hand: p.cards.len(),
            reinforcements: p.reinforcements,
            territories: board.count_controlled(p.id),
            armies: board.total_armies(p.id),
            continents: board.controlled_continents(p.id),
        })
        .collect();

    let me = handler.player(viewer);

    PlayerView {
        viewer,
        status: handler.game_status(),
        in_turn: handler.player_in_turn().map(|p| p.id),
        players,
        territories,
        deck_size: handler.deck().len(),
        next_trade_reward: handler.next_trade_reward(),
        winner: handler.winner().map(|p| p.id),
        my_cards: me.map(|p| p.cards.clone()).unwrap_or_default(),
        my_goal: me.map(|p| p.goal),
    }
}

pub fn player_view_json<R: RandomSource>(
    handler: &GameHandler<R>,
    viewer: PlayerId,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&player_view(handler, viewer))
}
