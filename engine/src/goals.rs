// ═══════════════════════════════════════════════════════════════════════
// Goals — victory conditions, checked when a player ends the attack phase
// ═══════════════════════════════════════════════════════════════════════

use crate::map::Board;
use crate::types::{Continent, Goal, Player, PlayerId};

pub const TERRITORIES_FOR_VICTORY: usize = 24;

/// Continents a goal names explicitly, and whether it also asks for one
/// more continent of the player's choosing.
pub fn requirements(goal: Goal) -> (&'static [Continent], bool) {
    use Continent::*;
    match goal {
        Goal::EuropeAustraliaAndThird => (&[Europe, Australia], true),
        Goal::EuropeSouthAmericaAndThird => (&[Europe, SouthAmerica], true),
        Goal::AsiaAndAfrica => (&[Asia, Africa], false),
        Goal::AsiaAndSouthAmerica => (&[Asia, SouthAmerica], false),
        Goal::NorthAmericaAndAfrica => (&[NorthAmerica, Africa], false),
        Goal::AfricaSouthAmericaAndThird => (&[Africa, SouthAmerica], true),
        Goal::NorthAmericaSouthAmericaAndAustralia => (&[NorthAmerica, SouthAmerica, Australia], false),
        Goal::WorldDomination | Goal::TwentyFourTerritories => (&[], false),
    }
}

pub fn is_met(board: &Board, player: PlayerId, goal: Goal) -> bool {
    match goal {
        Goal::WorldDomination => board.is_world_domination(player),
        Goal::TwentyFourTerritories => board.count_controlled(player) >= TERRITORIES_FOR_VICTORY,
        _ => {
            let (named, plus_any) = requirements(goal);
            if !named.iter().all(|&c| board.controls_continent(c, player)) {
                return false;
            }
            !plus_any
                || Continent::ALL
                    .iter()
                    .filter(|c| !named.contains(c))
                    .any(|&c| board.controls_continent(c, player))
        }
    }
}

/// First player in roster order whose goal is met.
pub fn first_winner(board: &Board, players: &[Player]) -> Option<PlayerId> {
    players.iter().find(|p| is_met(board, p.id, p.goal)).map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PlayerSpec};

    fn give(board: &mut Board, continent: Continent, p: PlayerId) {
        for id in board.territories_in_continent(continent) {
            board.territory_mut(id).owner = Some(p);
        }
    }

    fn player(id: u8, goal: Goal) -> Player {
        let mut p = Player::new(PlayerId(id), PlayerSpec::new(format!("p{id}"), Color::ALL[id as usize]));
        p.goal = goal;
        p
    }

    #[test]
    fn test_wildcard_continent_required() {
        let me = PlayerId(0);
        let mut board = Board::classic();
        give(&mut board, Continent::Europe, me);
        give(&mut board, Continent::Australia, me);
        assert!(!is_met(&board, me, Goal::EuropeAustraliaAndThird));
        give(&mut board, Continent::SouthAmerica, me);
        assert!(is_met(&board, me, Goal::EuropeAustraliaAndThird));
    }

    #[test]
    fn test_three_named_continents() {
        let me = PlayerId(0);
        let mut board = Board::classic();
        give(&mut board, Continent::NorthAmerica, me);
        give(&mut board, Continent::SouthAmerica, me);
        assert!(!is_met(&board, me, Goal::NorthAmericaSouthAmericaAndAustralia));
        give(&mut board, Continent::Australia, me);
        assert!(is_met(&board, me, Goal::NorthAmericaSouthAmericaAndAustralia));
    }

    #[test]
    fn test_pair_goals() {
        let me = PlayerId(0);
        let mut board = Board::classic();
        give(&mut board, Continent::Asia, me);
        assert!(!is_met(&board, me, Goal::AsiaAndAfrica));
        give(&mut board, Continent::Africa, me);
        assert!(is_met(&board, me, Goal::AsiaAndAfrica));
        assert!(!is_met(&board, me, Goal::AsiaAndSouthAmerica));
        assert!(!is_met(&board, me, Goal::NorthAmericaAndAfrica));
    }

    #[test]
    fn test_twenty_four_territories() {
        let me = PlayerId(0);
        let mut board = Board::classic();
        let ids: Vec<_> = board.ids().take(23).collect();
        for id in ids {
            board.territory_mut(id).owner = Some(me);
        }
        assert!(!is_met(&board, me, Goal::TwentyFourTerritories));
        board.territory_mut(crate::types::TerritoryId(40)).owner = Some(me);
        assert!(is_met(&board, me, Goal::TwentyFourTerritories));
    }

    #[test]
    fn test_first_winner_in_roster_order() {
        let mut board = Board::classic();
        give(&mut board, Continent::Asia, PlayerId(1));
        give(&mut board, Continent::Africa, PlayerId(1));
        give(&mut board, Continent::NorthAmerica, PlayerId(2));
        give(&mut board, Continent::SouthAmerica, PlayerId(2));
        give(&mut board, Continent::Australia, PlayerId(2));
        let players = vec![
            player(0, Goal::WorldDomination),
            player(2, Goal::NorthAmericaSouthAmericaAndAustralia),
            player(1, Goal::AsiaAndAfrica),
        ];
        assert_eq!(first_winner(&board, &players), Some(PlayerId(2)));
        assert_eq!(first_winner(&board, &players[..1]), None);
    }
}
