// ═══════════════════════════════════════════════════════════════════════
// Console — line-oriented hot-seat driver over a GameHandler
//
// Every command acts for the player in turn. The only other seat that is
// ever asked anything is the defender, right after an attack roll.
// Territories are given by id or by name, with '_' standing for spaces.
// ═══════════════════════════════════════════════════════════════════════

use conquest_engine::dice::RandomSource;
use conquest_engine::engine::GameHandler;
use conquest_engine::types::*;
use conquest_engine::visibility;
use conquest_engine::{GameError, GameStatus};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  help                          this text
  areas                         every territory with owner and armies
  phase                         who is in turn and in which phase
  cards                         your hand, numbered
  view                          your player view as JSON
  place <territory>             place one initial army
  trade <i> <j> <k> [...]       trade hand cards by number, three per set
  reinforcements                this turn's grant
  reinforce <territory> <n>     move n armies from the pool
  attack <from> <to> <dice>     roll; the defender is asked for dice
  move <n>                      move n more armies into the last conquest
  draw                          draw a card after conquering
  fortify <from> <to> <n>       move armies along your own territory
  end                           confirm the end of the current phase
  quit                          leave the game";

pub struct Console<R, I, O> {
    handler: GameHandler<R>,
    input: I,
    out: O,
    last_conquest: Option<DefenseResult>,
}

/// What a command line asks the loop to do next.
enum Flow {
    Continue,
    Quit,
}

impl<R: RandomSource, I: BufRead, O: Write> Console<R, I, O> {
    pub fn new(handler: GameHandler<R>, input: I, out: O) -> Self {
        Console { handler, input, out, last_conquest: None }
    }

    /// Read and execute commands until the game ends, the input runs dry
    /// or a player quits.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "type 'help' for commands")?;
        loop {
            if self.handler.game_status() == GameStatus::GameOver {
                if let Some(w) = self.handler.winner() {
                    writeln!(self.out, "game over, {} wins: {}", w, w.goal)?;
                }
                return Ok(());
            }
            let Some(me) = self.handler.player_in_turn().cloned() else {
                return Ok(());
            };
            write!(self.out, "{} [{}]> ", me.name, me.phase)?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            match self.execute(&me, &words) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(CommandError::Game(e)) => writeln!(self.out, "rejected: {e}")?,
                Err(CommandError::Usage(msg)) => writeln!(self.out, "{msg}")?,
                Err(CommandError::Io(e)) => return Err(e),
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn execute(&mut self, me: &Player, words: &[&str]) -> Result<Flow, CommandError> {
        let id = me.id;
        match words {
            ["help"] => writeln!(self.out, "{HELP}")?,
            ["quit"] => return Ok(Flow::Quit),
            ["areas"] => self.print_areas()?,
            ["phase"] => writeln!(
                self.out,
                "{} is in {}, {} armies in pool, next trade earns {}",
                me,
                me.phase,
                me.reinforcements,
                self.handler.next_trade_reward()
            )?,
            ["cards"] => {
                if me.cards.is_empty() {
                    writeln!(self.out, "no cards")?;
                }
                for (i, card) in me.cards.iter().enumerate() {
                    let line = self.describe_card(card);
                    writeln!(self.out, "  {i}: {line}")?;
                }
            }
            ["view"] => {
                let json = visibility::player_view_json(&self.handler, id)
                    .map_err(|e| CommandError::Usage(format!("cannot render view: {e}")))?;
                writeln!(self.out, "{json}")?;
            }
            ["place", t] => {
                let t = self.territory(t)?;
                self.handler.place_initial_unit(id, t)?;
                writeln!(self.out, "{} now has {} armies", self.handler.board().name(t), self.handler.board().armies(t))?;
            }
            ["trade", picks @ ..] if !picks.is_empty() => {
                let sets = pick_sets(&me.cards, picks)?;
                let reward = self.handler.trade_cards(id, &sets)?;
                writeln!(self.out, "traded for {reward} armies")?;
            }
            ["reinforcements"] => {
                let grant = self.handler.available_reinforcements(id)?;
                let pool = self.handler.player(id).map_or(0, |p| p.reinforcements);
                writeln!(self.out, "grant this turn: {grant}, pool: {pool}")?;
            }
            ["reinforce", t, n] => {
                let t = self.territory(t)?;
                self.handler.reinforce(id, t, number(n)?)?;
                writeln!(self.out, "{} now has {} armies", self.handler.board().name(t), self.handler.board().armies(t))?;
            }
            ["attack", from, to, dice] => {
                let from = self.territory(from)?;
                let to = self.territory(to)?;
                let dice = number(dice)? as usize;
                self.attack(id, from, to, dice)?;
            }
            ["move", n] => {
                let Some(result) = self.last_conquest.clone() else {
                    return Err(CommandError::Usage("nothing conquered to move into".into()));
                };
                self.handler.move_armies_after_conquest(id, &result, number(n)?)?;
                writeln!(
                    self.out,
                    "{} now has {} armies",
                    self.handler.board().name(result.defending()),
                    self.handler.board().armies(result.defending())
                )?;
            }
            ["draw"] => {
                let card = self.handler.draw_card(id)?;
                let line = self.describe_card(&card);
                writeln!(self.out, "drew {line}")?;
            }
            ["fortify", from, to, n] => {
                let from = self.territory(from)?;
                let to = self.territory(to)?;
                self.handler.fortify(id, from, to, number(n)?)?;
                writeln!(self.out, "fortified {}", self.handler.board().name(to))?;
            }
            ["end"] => {
                self.handler.confirm_end_of_phase(id)?;
                self.last_conquest = None;
                if let Some(p) = self.handler.player_in_turn() {
                    writeln!(self.out, "{} is now in {}", p, p.phase)?;
                }
            }
            _ => return Err(CommandError::Usage("unknown command, try 'help'".into())),
        }
        Ok(Flow::Continue)
    }

    fn attack(&mut self, id: PlayerId, from: TerritoryId, to: TerritoryId, dice: usize) -> Result<(), CommandError> {
        let roll = self.handler.attack(id, from, to, dice)?;
        let Some(defender) = self.handler.board().owner(to) else {
            return Err(CommandError::Usage("nobody defends that territory".into()));
        };
        let defender_name = self.handler.player(defender).map_or_else(|| "defender".to_string(), |p| p.name.clone());
        writeln!(self.out, "attack rolls {:?}", roll.dice())?;

        loop {
            write!(self.out, "{defender_name}, defend {} with how many dice? ", self.handler.board().name(to))?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Err(CommandError::Usage("attack abandoned".into()));
            };
            let Ok(n) = line.parse::<usize>() else {
                writeln!(self.out, "enter a number")?;
                continue;
            };
            match self.handler.defend(defender, &roll, n) {
                Ok(result) => {
                    writeln!(
                        self.out,
                        "defense rolls {:?}: attacker loses {}, defender loses {}",
                        result.dice(),
                        result.attacker_losses(),
                        result.defender_losses()
                    )?;
                    if result.conquered() {
                        writeln!(self.out, "{} conquered", self.handler.board().name(to))?;
                        self.last_conquest = Some(result);
                    }
                    return Ok(());
                }
                Err(GameError::InvalidDefenseDice(msg)) => writeln!(self.out, "{msg}")?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn print_areas(&mut self) -> io::Result<()> {
        let board = self.handler.board();
        for t in board.territories() {
            let owner = t
                .owner
                .and_then(|o| self.handler.player(o))
                .map_or_else(|| "-".to_string(), |p| p.name.clone());
            writeln!(self.out, "{:>3} {:<24} {:<14} {:<12} {:>4}", t.id.0, t.name, t.continent.to_string(), owner, t.armies)?;
        }
        Ok(())
    }

    fn describe_card(&self, card: &Card) -> String {
        match card {
            Card::Wild => "wildcard".to_string(),
            Card::Territory { territory, unit } => format!("{} ({unit:?})", self.handler.board().name(*territory)),
        }
    }

    fn territory(&self, word: &str) -> Result<TerritoryId, CommandError> {
        let board = self.handler.board();
        if let Ok(n) = word.parse::<u8>() {
            if board.contains(TerritoryId(n)) {
                return Ok(TerritoryId(n));
            }
        }
        board
            .lookup(word)
            .ok_or_else(|| CommandError::Usage(format!("no territory '{word}'")))
    }
}

fn number(word: &str) -> Result<u32, CommandError> {
    word.parse().map_err(|_| CommandError::Usage(format!("'{word}' is not a number")))
}

/// Group hand positions into sets of three cards.
fn pick_sets(hand: &[Card], picks: &[&str]) -> Result<Vec<Vec<Card>>, CommandError> {
    if picks.len() % 3 != 0 {
        return Err(CommandError::Usage("give card numbers in groups of three".into()));
    }
    let mut seen = Vec::new();
    let mut sets = Vec::new();
    for group in picks.chunks(3) {
        let mut set = Vec::with_capacity(3);
        for word in group {
            let i = number(word)? as usize;
            if seen.contains(&i) {
                return Err(CommandError::Usage(format!("card {i} picked twice")));
            }
            let card = hand.get(i).ok_or_else(|| CommandError::Usage(format!("no card {i}")))?;
            seen.push(i);
            set.push(*card);
        }
        sets.push(set);
    }
    Ok(sets)
}

enum CommandError {
    Game(GameError),
    Usage(String),
    Io(io::Error),
}

impl From<GameError> for CommandError {
    fn from(e: GameError) -> Self {
        CommandError::Game(e)
    }
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        CommandError::Io(e)
    }
}
