// ═══════════════════════════════════════════════════════════════════════
// Navigation — fortification paths through a player's own territory
// ═══════════════════════════════════════════════════════════════════════

use crate::map::Board;
use crate::types::{PlayerId, TerritoryId};
use std::collections::BTreeSet;

/// Every territory reachable from `source` by stepping only onto territories
/// the player controls. Includes `source` itself.
pub fn reachable(board: &Board, source: TerritoryId, player: PlayerId) -> BTreeSet<TerritoryId> {
    let mut visited = BTreeSet::new();
    if board.owner(source) != Some(player) {
        return visited;
    }

    let mut stack = vec![source];
    visited.insert(source);
    while let Some(current) = stack.pop() {
        for &next in &board.territory(current).neighbors {
            if board.owner(next) == Some(player) && visited.insert(next) {
                stack.push(next);
            }
        }
    }
    visited
}

pub fn is_path_valid(board: &Board, from: TerritoryId, to: TerritoryId, player: PlayerId) -> bool {
    reachable(board, from, player).contains(&to)
}
