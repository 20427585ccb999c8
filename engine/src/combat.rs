// ═══════════════════════════════════════════════════════════════════════
// Combat — dice limits and the attack/defense comparison
// ═══════════════════════════════════════════════════════════════════════

pub const MIN_DICE: usize = 1;
pub const MAX_ATTACK_DICE: usize = 3;
pub const MAX_DEFENSE_DICE: usize = 2;

/// Armies lost by each side in one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Losses {
    pub attacker: u32,
    pub defender: u32,
}

/// Attack dice count must leave one army at home.
pub fn attack_dice_allowed(dice: usize, armies: u32) -> bool {
    (MIN_DICE..=MAX_ATTACK_DICE).contains(&dice) && (dice as u32) < armies
}

/// Defense may use as many dice as there are defending armies, up to two.
pub fn defense_dice_allowed(dice: usize, armies: u32) -> bool {
    (MIN_DICE..=MAX_DEFENSE_DICE).contains(&dice) && (dice as u32) <= armies
}

/// Compare sorted dice pairwise. Only the first min(attack, defense) pairs
/// count; a tie goes to the defender.
pub fn compare(attack: &[u8], defense: &[u8]) -> Losses {
    let mut losses = Losses::default();
    for (a, d) in attack.iter().zip(defense) {
        if d < a {
            losses.defender += 1;
        } else {
            losses.attacker += 1;
        }
    }
    losses
}
