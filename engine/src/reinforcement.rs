// ═══════════════════════════════════════════════════════════════════════
// Reinforcements — per-turn army grant
// ═══════════════════════════════════════════════════════════════════════

use crate::map::Board;
use crate::types::PlayerId;

pub const TERRITORIES_PER_ARMY: usize = 3;
pub const MINIMUM_GRANT: u32 = 3;

/// Armies a player receives at the start of a turn:
/// territories / 3 (at least 3) plus every fully held continent's bonus.
pub fn grant(board: &Board, player: PlayerId) -> u32 {
    let base = (board.count_controlled(player) / TERRITORIES_PER_ARMY) as u32;
    let continents: u32 = board.controlled_continents(player).iter().map(|c| c.bonus()).sum();
    base.max(MINIMUM_GRANT) + continents
}
