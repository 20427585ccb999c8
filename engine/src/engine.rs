// ═══════════════════════════════════════════════════════════════════════
// Game Engine — turn/phase state machine and action resolution
//
// Architecture:
//   `GameHandler` owns the whole game: board, deck, live roster, the
//   shared trade schedule and the random source. It never does I/O.
//   Every operation first validates (turn, then game-over, then phase,
//   then the action's own rules) and only mutates once validation has
//   passed, so a rejected call leaves the game exactly as it was.
//
// Turn flow for the player in turn:
//   TradeCards → Reinforcement → Attack → [DrawCard] → Fortification
//   and then the next live player starts at TradeCards. Eliminating a
//   player while holding more than five cards diverts the attacker to
//   TradeCardsAfterDefeat, which leads back to Reinforcement.
// ═══════════════════════════════════════════════════════════════════════

use crate::cards::{self, TradeSchedule, MAX_HAND_BEFORE_TRADE};
use crate::combat;
use crate::dice::RandomSource;
use crate::error::{GameError, GameResult};
use crate::goals;
use crate::map::Board;
use crate::navigation;
use crate::reinforcement;
use crate::types::*;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

// ── Phase transitions ──────────────────────────────────────────────────

/// Where confirming the end of a phase leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Enter(Phase),
    EndTurn,
}

/// Pure transition table for `confirm_end_of_phase`. `None` means the phase
/// cannot be ended by confirmation. Guards (hand size, empty pool, empty
/// deck) are checked by the handler, not here.
///
/// `DrawCard` is normally left through `draw_card` and is not a confirm
/// target in the base rules. Its row here applies only once the deck is
/// empty; with cards left, confirming it is `WrongPhase`.
pub fn phase_transition(phase: Phase, conquered_this_turn: bool) -> Option<Step> {
    match phase {
        Phase::TradeCards | Phase::TradeCardsAfterDefeat => Some(Step::Enter(Phase::Reinforcement)),
        Phase::Reinforcement => Some(Step::Enter(Phase::Attack)),
        Phase::Attack if conquered_this_turn => Some(Step::Enter(Phase::DrawCard)),
        Phase::Attack => Some(Step::Enter(Phase::Fortification)),
        // empty deck only, see the guard in confirm_end_of_phase
        Phase::DrawCard => Some(Step::Enter(Phase::Fortification)),
        Phase::Fortification => Some(Step::EndTurn),
        Phase::None | Phase::InitialPlacement => None,
    }
}

// ── Handler ────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct GameHandler<R = ChaCha8Rng> {
    pub(crate) board: Board,
    pub(crate) deck: Vec<Card>,
    /// Live roster in seating order. Eliminated players move to `eliminated`.
    pub(crate) players: Vec<Player>,
    pub(crate) eliminated: Vec<Player>,
    pub(crate) current: PlayerId,
    pub(crate) schedule: TradeSchedule,
    pub(crate) status: GameStatus,
    pub(crate) winner: Option<PlayerId>,
    /// The last roll, until its defender answers.
    pub(crate) pending_attack: Option<AttackResult>,
    /// Conquests of the current phase, the only results armies may follow.
    pub(crate) conquests: Vec<DefenseResult>,
    pub(crate) rng: R,
}

impl<R: RandomSource> GameHandler<R> {
    /// Wrap an already prepared game. `in_turn` must be on the roster; its
    /// phase is left as given, so this can resume any mid-game position.
    pub fn new(board: Board, deck: Vec<Card>, players: Vec<Player>, in_turn: PlayerId, rng: R) -> Self {
        GameHandler {
            board,
            deck,
            players,
            eliminated: Vec::new(),
            current: in_turn,
            schedule: TradeSchedule::new(),
            status: GameStatus::Running,
            winner: None,
            pending_attack: None,
            conquests: Vec::new(),
            rng,
        }
    }

    /// Handler for a freshly distributed board. If the chosen first player has
    /// nothing left to place, placement moves on, or ends straight away when
    /// nobody has armies left.
    pub(crate) fn start_placement(
        board: Board,
        deck: Vec<Card>,
        players: Vec<Player>,
        first: PlayerId,
        rng: R,
    ) -> Self {
        let mut handler = GameHandler::new(board, deck, players, first, rng);
        let pos = handler.position(first).unwrap_or(0);
        if handler.players[pos].reinforcements == 0 {
            match handler.next_placer(pos) {
                Some(next) => handler.current = handler.players[next].id,
                None => handler.finish_placement(pos),
            }
        }
        handler
    }

    // ── Read-only accessors ────────────────────────────────────────────

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Alias kept for callers that think in terms of areas.
    pub fn areas(&self) -> &Board {
        &self.board
    }

    pub fn player_in_turn(&self) -> Option<&Player> {
        self.player(self.current)
    }

    pub fn game_status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Live players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn eliminated(&self) -> &[Player] {
        &self.eliminated
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Reward the next successful trade would earn, whoever makes it.
    pub fn next_trade_reward(&self) -> u32 {
        self.schedule.next_reward()
    }

    pub fn trades_made(&self) -> u32 {
        self.schedule.trades()
    }

    // ── Initial placement ──────────────────────────────────────────────

    pub fn place_initial_unit(&mut self, player: PlayerId, territory: TerritoryId) -> GameResult<()> {
        let pos = self.check_turn(player)?;
        self.check_phase(pos, &[Phase::InitialPlacement], "place initial armies")?;
        self.check_controls(pos, territory)?;
        if self.players[pos].reinforcements == 0 {
            return Err(GameError::IllegalArmyCount("no armies left to place".into()));
        }

        self.board.territory_mut(territory).armies += 1;
        self.players[pos].reinforcements -= 1;
        debug!(player = %self.players[pos], territory = self.board.name(territory), "initial army placed");

        match self.next_placer(pos) {
            Some(next) => self.current = self.players[next].id,
            None => self.finish_placement((pos + 1) % self.players.len()),
        }
        Ok(())
    }

    /// Next roster position after `pos` (wrapping round to `pos` itself) of
    /// a player still placing armies.
    fn next_placer(&self, pos: usize) -> Option<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|k| (pos + k) % n)
            .find(|&i| self.players[i].phase == Phase::InitialPlacement && self.players[i].reinforcements > 0)
    }

    fn finish_placement(&mut self, first_pos: usize) {
        for p in self.players.iter_mut() {
            p.phase = Phase::None;
            p.reinforcements = 0;
        }
        info!("initial placement finished");
        self.begin_turn(first_pos);
    }

    // ── Cards ──────────────────────────────────────────────────────────

    /// Trade one or more sets of three. The cards go back to the deck, the
    /// game-wide schedule advances once per set, and the player's pool is
    /// replaced by the combined reward, which is returned.
    pub fn trade_cards(&mut self, player: PlayerId, sets: &[Vec<Card>]) -> GameResult<u32> {
        let pos = self.check_turn(player)?;
        self.check_phase(pos, &[Phase::TradeCards, Phase::TradeCardsAfterDefeat], "trade cards")?;
        if sets.is_empty() {
            return Err(GameError::IllegalCardCombination("no cards given".into()));
        }
        if let Some(bad) = sets.iter().find(|set| !cards::is_valid_set(set)) {
            return Err(GameError::IllegalCardCombination(format!(
                "{} cards do not form a set",
                bad.len()
            )));
        }
        if !cards::hand_covers(&self.players[pos].cards, sets) {
            return Err(GameError::IllegalCardCombination("cards are not in hand".into()));
        }

        let mut reward = 0;
        for card in sets.iter().flatten() {
            let hand = &mut self.players[pos].cards;
            if let Some(i) = hand.iter().position(|c| c == card) {
                hand.remove(i);
            }
            self.deck.push(*card);
        }
        for _ in sets {
            reward += self.schedule.advance();
        }
        self.players[pos].reinforcements = reward;
        info!(player = %self.players[pos], sets = sets.len(), reward, "cards traded");
        Ok(reward)
    }

    /// Draw a random card after a turn with at least one conquest.
    /// Moves the player on to fortification.
    pub fn draw_card(&mut self, player: PlayerId) -> GameResult<Card> {
        let pos = self.check_turn(player)?;
        self.check_phase(pos, &[Phase::DrawCard], "draw a card")?;
        if !self.players[pos].conquered_this_turn {
            return Err(GameError::NoTerritoryConquered("a card is only drawn after a conquest".into()));
        }
        if self.deck.is_empty() {
            return Err(GameError::Unknown("the deck is empty".into()));
        }

        let card = self.deck.remove(self.rng.index(self.deck.len()));
        let p = &mut self.players[pos];
        p.cards.push(card);
        p.phase = Phase::Fortification;
        debug!(player = %p, ?card, hand = p.cards.len(), "card drawn");
        Ok(card)
    }

    // ── Reinforcement ──────────────────────────────────────────────────

    /// This turn's grant. The first call in a turn adds it to the pool;
    /// later calls only report it.
    pub fn available_reinforcements(&mut self, player: PlayerId) -> GameResult<u32> {
        let pos = self.check_turn(player)?;
        self.check_phase(pos, &[Phase::Reinforcement], "query reinforcements")?;
        let grant = reinforcement::grant(&self.board, player);
        self.credit_grant(pos, grant);
        Ok(grant)
    }

    fn credit_grant(&mut self, pos: usize, grant: u32) {
        let p = &mut self.players[pos];
        if !p.reinforcements_granted {
            p.reinforcements += grant;
            p.reinforcements_granted = true;
            debug!(player = %p, grant, pool = p.reinforcements, "reinforcements granted");
        }
    }

    /// Place `armies` from the pool onto an owned territory.
    pub fn reinforce(&mut self, player: PlayerId, territory: TerritoryId, armies: u32) -> GameResult<()> {
        let pos = self.check_turn(player)?;
        self.check_phase(pos, &[Phase::Reinforcement], "reinforce")?;
        self.check_controls(pos, territory)?;
        let pool = self.players[pos].reinforcements;
        if armies == 0 || armies > pool {
            return Err(GameError::IllegalArmyCount(format!("{armies} requested, {pool} in pool")));
        }

        self.board.territory_mut(territory).armies += armies;
        self.players[pos].reinforcements -= armies;
        debug!(player = %self.players[pos], territory = self.board.name(territory), armies, "reinforced");
        Ok(())
    }

    // ── Combat ─────────────────────────────────────────────────────────

    /// Roll `dice` attack dice from `from` against `target`. Nothing changes
    /// on the board until the defender answers with `defend`, and no new roll
    /// is made while a live one is still unanswered.
    pub fn attack(
        &mut self,
        player: PlayerId,
        from: TerritoryId,
        target: TerritoryId,
        dice: usize,
    ) -> GameResult<AttackResult> {
        let pos = self.check_turn(player)?;
        self.check_phase(pos, &[Phase::Attack], "attack")?;
        self.check_controls(pos, from)?;
        self.check_attackable(from, target, player)?;
        if self.pending_attack.as_ref().is_some_and(|a| self.is_live(a)) {
            return Err(GameError::WrongPhase { action: "roll before the last roll is defended", phase: Phase::Attack });
        }
        let armies = self.board.armies(from);
        if !combat::attack_dice_allowed(dice, armies) {
            return Err(GameError::InvalidAttackDice(format!(
                "{dice} dice with {armies} armies (1 to {}, fewer than the armies)",
                combat::MAX_ATTACK_DICE
            )));
        }

        let rolled = self.rng.roll_sorted(dice);
        debug!(
            player = %self.players[pos],
            from = self.board.name(from),
            target = self.board.name(target),
            ?rolled,
            "attack rolled"
        );
        let roll = AttackResult { attacking: from, defending: target, dice: rolled };
        self.pending_attack = Some(roll.clone());
        Ok(roll)
    }

    /// An unanswered roll whose dice still fit the attacking armies.
    fn is_live(&self, attack: &AttackResult) -> bool {
        self.board.owner(attack.attacking) == Some(self.current)
            && combat::attack_dice_allowed(attack.dice.len(), self.board.armies(attack.attacking))
    }

    fn check_attackable(&self, from: TerritoryId, target: TerritoryId, attacker: PlayerId) -> GameResult<()> {
        let not_attackable = |reason: &'static str| GameError::TerritoryNotAttackable {
            from: self.territory_label(from),
            target: self.territory_label(target),
            reason,
        };
        if !self.board.contains(target) {
            return Err(not_attackable("no such territory"));
        }
        if self.board.owner(target) == Some(attacker) {
            return Err(not_attackable("it is the attacker's own territory"));
        }
        if !self.board.are_neighbors(from, target) {
            return Err(not_attackable("the territories are not adjacent"));
        }
        Ok(())
    }

    /// Answer an attack with `dice` defense dice and resolve the exchange.
    /// An emptied territory is conquered: it takes the surviving attack dice
    /// as armies and changes hands. Losing the last territory eliminates the
    /// defender and passes their cards to the attacker. Only the roll the
    /// handler is waiting on can be defended, and only once.
    pub fn defend(&mut self, defender: PlayerId, attack: &AttackResult, dice: usize) -> GameResult<DefenseResult> {
        self.check_running()?;
        if self.pending_attack.as_ref() != Some(attack) {
            return Err(GameError::Unknown("that roll is not waiting for a defense".into()));
        }
        let target = attack.defending;
        let from = attack.attacking;
        if !self.board.contains(target) || self.board.owner(target) != Some(defender) {
            return Err(self.not_controlled(target, self.player_label(defender)));
        }
        let Some(attacker) = self.board.get(from).and_then(|t| t.owner) else {
            return Err(GameError::Unknown("the attacking territory does not exist".into()));
        };
        if attacker != self.current {
            return Err(self.not_controlled(from, self.player_label(self.current)));
        }
        let attacker_pos = self.position(attacker).ok_or_else(|| self.unknown_player(attacker))?;
        let attacker_phase = self.players[attacker_pos].phase;
        if attacker_phase != Phase::Attack {
            return Err(GameError::WrongPhase { action: "defend", phase: attacker_phase });
        }
        self.check_attackable(from, target, attacker)?;
        let attacking_armies = self.board.armies(from);
        if !combat::attack_dice_allowed(attack.dice.len(), attacking_armies) {
            return Err(GameError::InvalidAttackDice(format!(
                "{} dice no longer allowed with {attacking_armies} armies",
                attack.dice.len()
            )));
        }
        let defending_armies = self.board.armies(target);
        if !combat::defense_dice_allowed(dice, defending_armies) {
            return Err(GameError::InvalidDefenseDice(format!(
                "{dice} dice with {defending_armies} armies (1 to {}, at most the armies)",
                combat::MAX_DEFENSE_DICE
            )));
        }

        self.pending_attack = None;
        let rolled = self.rng.roll_sorted(dice);
        let losses = combat::compare(&attack.dice, &rolled);
        self.board.territory_mut(from).armies -= losses.attacker;
        self.board.territory_mut(target).armies -= losses.defender;
        debug!(
            attack = ?attack.dice,
            defense = ?rolled,
            attacker_losses = losses.attacker,
            defender_losses = losses.defender,
            "battle resolved"
        );

        let conquered = self.board.armies(target) == 0;
        if conquered {
            let moved = attack.dice.len() as u32 - losses.attacker;
            self.board.territory_mut(from).armies -= moved;
            let t = self.board.territory_mut(target);
            t.owner = Some(attacker);
            t.armies = moved;
            self.players[attacker_pos].conquered_this_turn = true;
            info!(
                attacker = %self.players[attacker_pos],
                territory = self.board.name(target),
                moved,
                "territory conquered"
            );
            if self.board.count_controlled(defender) == 0 {
                self.eliminate(defender, attacker);
            }
        }

        let result = DefenseResult {
            attacking: from,
            defending: target,
            dice: rolled,
            attacker_losses: losses.attacker,
            defender_losses: losses.defender,
            conquered,
        };
        if conquered {
            self.conquests.push(result.clone());
        }
        Ok(result)
    }

    fn eliminate(&mut self, loser: PlayerId, by: PlayerId) {
        let Some(loser_pos) = self.position(loser) else {
            return;
        };
        let mut out = self.players.remove(loser_pos);
        let taken = std::mem::take(&mut out.cards);
        out.phase = Phase::None;
        info!(player = %out, cards = taken.len(), "player eliminated");
        self.eliminated.push(out);

        let Some(by_pos) = self.position(by) else {
            return;
        };
        let attacker = &mut self.players[by_pos];
        attacker.cards.extend(taken);
        if attacker.cards.len() > MAX_HAND_BEFORE_TRADE {
            attacker.phase = Phase::TradeCardsAfterDefeat;
            debug!(player = %attacker, hand = attacker.cards.len(), "must trade after elimination");
        }

        if self.players.len() == 1 {
            self.declare_winner(self.players[0].id);
        }
    }

    /// Move extra armies into a territory conquered earlier in this attack
    /// phase. Zero is allowed; at least one army always stays behind.
    pub fn move_armies_after_conquest(
        &mut self,
        player: PlayerId,
        result: &DefenseResult,
        armies: u32,
    ) -> GameResult<()> {
        let pos = self.check_turn(player)?;
        self.check_phase(pos, &[Phase::Attack], "move armies after a conquest")?;
        if !result.conquered {
            return Err(GameError::NoTerritoryConquered(format!(
                "{} was not conquered",
                self.territory_label(result.defending)
            )));
        }
        if !self.conquests.contains(result) {
            return Err(GameError::NoTerritoryConquered(format!(
                "{} was not conquered in this attack phase",
                self.territory_label(result.defending)
            )));
        }
        self.check_controls(pos, result.attacking)?;
        self.check_controls(pos, result.defending)?;
        let available = self.board.armies(result.attacking).saturating_sub(1);
        if armies > available {
            return Err(GameError::IllegalArmyCount(format!("{armies} requested, {available} can move")));
        }

        self.board.territory_mut(result.attacking).armies -= armies;
        self.board.territory_mut(result.defending).armies += armies;
        debug!(player = %self.players[pos], armies, "armies moved into conquest");
        Ok(())
    }

    // ── Fortification ──────────────────────────────────────────────────

    /// Move armies between two owned territories joined by a chain of owned
    /// territories. Zero is allowed; at least one army stays behind.
    pub fn fortify(
        &mut self,
        player: PlayerId,
        source: TerritoryId,
        destination: TerritoryId,
        armies: u32,
    ) -> GameResult<()> {
        let pos = self.check_turn(player)?;
        self.check_phase(pos, &[Phase::Fortification], "fortify")?;
        if !self.board.contains(source) || !self.board.contains(destination) {
            return Err(GameError::Unknown("no such territory".into()));
        }
        self.check_controls(pos, source)?;
        self.check_controls(pos, destination)?;
        let available = self.board.armies(source).saturating_sub(1);
        if armies > available {
            return Err(GameError::IllegalArmyCount(format!("{armies} requested, {available} can move")));
        }
        if !navigation::is_path_valid(&self.board, source, destination, player) {
            return Err(GameError::IllegalPath {
                from: self.board.name(source).to_string(),
                to: self.board.name(destination).to_string(),
            });
        }

        self.board.territory_mut(source).armies -= armies;
        self.board.territory_mut(destination).armies += armies;
        debug!(
            player = %self.players[pos],
            from = self.board.name(source),
            to = self.board.name(destination),
            armies,
            "fortified"
        );
        Ok(())
    }

    // ── Ending phases ──────────────────────────────────────────────────

    pub fn confirm_end_of_phase(&mut self, player: PlayerId) -> GameResult<()> {
        let pos = self.check_turn(player)?;
        let phase = self.players[pos].phase;
        let Some(step) = phase_transition(phase, self.players[pos].conquered_this_turn) else {
            return Err(GameError::WrongPhase { action: "end this phase", phase });
        };

        match phase {
            Phase::TradeCards | Phase::TradeCardsAfterDefeat => {
                let cards = self.players[pos].cards.len();
                if cards > MAX_HAND_BEFORE_TRADE {
                    return Err(GameError::MustTradeCards { cards });
                }
            }
            Phase::Reinforcement => {
                let left = self.players[pos].reinforcements;
                if left > 0 {
                    return Err(GameError::IllegalArmyCount(format!("{left} armies still to place")));
                }
            }
            Phase::DrawCard if !self.deck.is_empty() => {
                return Err(GameError::WrongPhase { action: "skip drawing while the deck has cards", phase });
            }
            _ => {}
        }

        self.pending_attack = None;
        self.conquests.clear();
        match step {
            Step::Enter(next) => {
                self.players[pos].phase = next;
                debug!(player = %self.players[pos], from = %phase, to = %next, "phase ended");
                if phase == Phase::TradeCards && next == Phase::Reinforcement {
                    let grant = reinforcement::grant(&self.board, player);
                    self.credit_grant(pos, grant);
                }
                if phase == Phase::Attack {
                    if let Some(winner) = goals::first_winner(&self.board, &self.players) {
                        self.declare_winner(winner);
                    }
                }
            }
            Step::EndTurn => {
                let p = &mut self.players[pos];
                p.phase = Phase::None;
                p.conquered_this_turn = false;
                p.reinforcements_granted = false;
                self.begin_turn((pos + 1) % self.players.len());
            }
        }
        Ok(())
    }

    fn begin_turn(&mut self, pos: usize) {
        let p = &mut self.players[pos];
        p.phase = Phase::TradeCards;
        p.conquered_this_turn = false;
        p.reinforcements_granted = false;
        self.current = p.id;
        info!(player = %p, "turn started");
    }

    fn declare_winner(&mut self, id: PlayerId) {
        self.status = GameStatus::GameOver;
        self.winner = Some(id);
        if let Some(p) = self.player(id) {
            info!(winner = %p, goal = %p.goal, "game over");
        }
    }

    // ── Validation helpers ─────────────────────────────────────────────

    fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Turn check first, game-over second. Returns the caller's roster position.
    fn check_turn(&self, player: PlayerId) -> GameResult<usize> {
        let Some(pos) = self.position(player) else {
            return match self.eliminated.iter().find(|p| p.id == player) {
                Some(p) => Err(GameError::NotPlayersTurn { player: p.name.clone() }),
                None => Err(self.unknown_player(player)),
            };
        };
        if self.current != player {
            return Err(GameError::NotPlayersTurn { player: self.players[pos].name.clone() });
        }
        self.check_running()?;
        Ok(pos)
    }

    fn check_running(&self) -> GameResult<()> {
        match self.status {
            GameStatus::GameOver => Err(GameError::GameOver),
            GameStatus::Running => Ok(()),
        }
    }

    fn check_phase(&self, pos: usize, allowed: &[Phase], action: &'static str) -> GameResult<()> {
        let phase = self.players[pos].phase;
        if allowed.contains(&phase) {
            Ok(())
        } else {
            Err(GameError::WrongPhase { action, phase })
        }
    }

    fn check_controls(&self, pos: usize, territory: TerritoryId) -> GameResult<()> {
        let player = &self.players[pos];
        if self.board.contains(territory) && self.board.owner(territory) == Some(player.id) {
            Ok(())
        } else {
            Err(self.not_controlled(territory, player.name.clone()))
        }
    }

    fn not_controlled(&self, territory: TerritoryId, player: String) -> GameError {
        GameError::TerritoryNotControlled { territory: self.territory_label(territory), player }
    }

    fn territory_label(&self, id: TerritoryId) -> String {
        match self.board.get(id) {
            Some(t) => t.name.clone(),
            None => format!("#{}", id.0),
        }
    }

    fn player_label(&self, id: PlayerId) -> String {
        self.player(id)
            .or_else(|| self.eliminated.iter().find(|p| p.id == id))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("player #{}", id.0))
    }

    fn unknown_player(&self, id: PlayerId) -> GameError {
        GameError::Unknown(format!("no player #{}", id.0))
    }
}

#[cfg(test)]
mod transition_tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        assert_eq!(phase_transition(Phase::TradeCards, false), Some(Step::Enter(Phase::Reinforcement)));
        assert_eq!(
            phase_transition(Phase::TradeCardsAfterDefeat, true),
            Some(Step::Enter(Phase::Reinforcement))
        );
        assert_eq!(phase_transition(Phase::Reinforcement, false), Some(Step::Enter(Phase::Attack)));
        assert_eq!(phase_transition(Phase::Attack, false), Some(Step::Enter(Phase::Fortification)));
        assert_eq!(phase_transition(Phase::Attack, true), Some(Step::Enter(Phase::DrawCard)));
        assert_eq!(phase_transition(Phase::DrawCard, true), Some(Step::Enter(Phase::Fortification)));
        assert_eq!(phase_transition(Phase::Fortification, true), Some(Step::EndTurn));
        assert_eq!(phase_transition(Phase::None, false), None);
        assert_eq!(phase_transition(Phase::InitialPlacement, false), None);
    }
}
