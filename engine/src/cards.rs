// ═══════════════════════════════════════════════════════════════════════
// Cards — deck construction, trade-in sets, escalating reward schedule
// ═══════════════════════════════════════════════════════════════════════

use crate::error::MapError;
use crate::map::Board;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const CARDS_PER_SET: usize = 3;
/// More cards than this and the player must trade before leaving the trade phase.
pub const MAX_HAND_BEFORE_TRADE: usize = 5;
pub const CLASSIC_WILDCARDS: usize = 2;

/// Rewards for the first trades of the game, shared by all players.
pub const TRADE_REWARDS: [u32; 6] = [4, 6, 8, 10, 12, 15];
/// Increment per trade once `TRADE_REWARDS` is used up.
pub const REWARD_STEP_AFTER_TABLE: u32 = 5;

// ── Deck construction ──────────────────────────────────────────────────

/// One card per territory, unit types cycling infantry/cavalry/artillery,
/// plus two wildcards.
pub fn classic_deck(board: &Board) -> Vec<Card> {
    let mut deck: Vec<Card> = board
        .ids()
        .zip(UnitType::ALL.iter().copied().cycle())
        .map(|(territory, unit)| Card::Territory { territory, unit })
        .collect();
    deck.extend(std::iter::repeat(Card::Wild).take(CLASSIC_WILDCARDS));
    deck
}

/// External card description, keyed by territory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CardDef {
    Wild,
    Territory { territory: String, unit: UnitType },
}

/// Resolve card definitions against a board. Every territory needs at least
/// one card and no bound card may appear twice.
pub fn deck_from_defs(board: &Board, defs: &[CardDef]) -> Result<Vec<Card>, MapError> {
    let mut deck = Vec::with_capacity(defs.len());
    let mut seen = HashSet::new();
    for def in defs {
        let card = match def {
            CardDef::Wild => Card::Wild,
            CardDef::Territory { territory, unit } => {
                let id = board
                    .lookup(territory)
                    .ok_or_else(|| MapError::UnknownCardTerritory(territory.clone()))?;
                let card = Card::Territory { territory: id, unit: *unit };
                if !seen.insert(card) {
                    return Err(MapError::DuplicateCard(territory.clone()));
                }
                card
            }
        };
        deck.push(card);
    }

    for t in board.territories() {
        if !deck.iter().any(|c| c.territory() == Some(t.id)) {
            return Err(MapError::MissingCard(t.name.clone()));
        }
    }
    Ok(deck)
}

pub fn deck_from_json(board: &Board, json: &str) -> Result<Vec<Card>, MapError> {
    let defs: Vec<CardDef> = serde_json::from_str(json)?;
    deck_from_defs(board, &defs)
}

// ── Trade sets ─────────────────────────────────────────────────────────

/// Three cards whose non-wild unit types are either all equal or all
/// different. Wildcards fit either rule.
pub fn is_valid_set(cards: &[Card]) -> bool {
    if cards.len() != CARDS_PER_SET {
        return false;
    }
    let units: Vec<UnitType> = cards.iter().filter_map(Card::unit).collect();
    let all_same = units.windows(2).all(|w| w[0] == w[1]);
    let distinct: HashSet<UnitType> = units.iter().copied().collect();
    all_same || distinct.len() == units.len()
}

/// True when `hand` holds every card of `sets`, counting duplicates.
pub fn hand_covers(hand: &[Card], sets: &[Vec<Card>]) -> bool {
    let mut remaining = hand.to_vec();
    for card in sets.iter().flatten() {
        match remaining.iter().position(|c| c == card) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

// ── Reward schedule ────────────────────────────────────────────────────

/// Game-wide trade counter. Every successful set advances it, whoever trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TradeSchedule {
    trades: u32,
}

impl TradeSchedule {
    pub fn new() -> Self {
        TradeSchedule::default()
    }

    pub fn trades(&self) -> u32 {
        self.trades
    }

    /// Reward the next set would earn.
    pub fn next_reward(&self) -> u32 {
        let i = self.trades as usize;
        match TRADE_REWARDS.get(i) {
            Some(&r) => r,
            None => {
                let last = TRADE_REWARDS[TRADE_REWARDS.len() - 1];
                let beyond = (i + 1 - TRADE_REWARDS.len()) as u32;
                last + beyond * REWARD_STEP_AFTER_TABLE
            }
        }
    }

    /// Consume one trade and return its reward.
    pub fn advance(&mut self) -> u32 {
        let reward = self.next_reward();
        self.trades += 1;
        reward
    }
}
