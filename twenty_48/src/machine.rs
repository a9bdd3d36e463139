//! Round lifecycle.
//!
//! ```text
//! Init -> Game -> Game | Win | Gameover
//! Restart: Game | Win | Gameover -> Init
//! Exit:    Game | Win | Gameover -> Exit
//! ```

use log::debug;
use serde::Serialize;

use crate::{Action, Direction, GameField, Result, Snapshot};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum GameState {
    /// About to deal a fresh board.
    Init,
    /// Accepting moves.
    Game,
    /// Frozen until Restart or Exit.
    Win,
    /// Frozen until Restart or Exit.
    Gameover,
    Exit,
}

impl GameState {
    pub const ALL: [GameState; 5] = [
        GameState::Init,
        GameState::Game,
        GameState::Win,
        GameState::Gameover,
        GameState::Exit,
    ];
}

fn init(field: &mut GameField) -> Result<GameState> {
    field.reset()?;
    Ok(GameState::Game)
}

fn after_move(field: &mut GameField, direction: Direction) -> Result<GameState> {
    Ok(if !field.apply_move(direction)? {
        GameState::Game
    } else if field.is_won() {
        GameState::Win
    } else if field.is_over() {
        GameState::Gameover
    } else {
        GameState::Game
    })
}

/// The single transition function.
///
/// `Init` resets the field and ignores `action`. `Exit` absorbs everything.
/// After a successful move a win is reported before a game over.
pub fn transition(state: GameState, action: Action, field: &mut GameField) -> Result<GameState> {
    let next = match (state, action) {
        (GameState::Init, _) => init(field)?,
        (GameState::Exit, _) | (_, Action::Exit) => GameState::Exit,
        (_, Action::Restart) => GameState::Init,
        (GameState::Game, _) => match action.direction() {
            Some(direction) => after_move(field, direction)?,
            None => GameState::Game,
        },
        (frozen @ (GameState::Win | GameState::Gameover), _) => frozen,
    };

    if next != state {
        debug!("{state:?} --{action:?}--> {next:?}");
    }
    Ok(next)
}

/// Where actions come from, e.g. a keyboard.
pub trait ActionSource {
    /// Blocks until the next action is available.
    fn next_action(&mut self) -> Result<Action>;
}

/// Where snapshots go, e.g. a terminal.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot, state: GameState) -> Result<()>;
}

/// A field plus the state it is in.
#[derive(Debug)]
pub struct Session {
    field: GameField,
    state: GameState,
}

impl Session {
    pub fn new(field: GameField) -> Self {
        Session {
            field,
            state: GameState::Init,
        }
    }

    pub fn field(&self) -> &GameField {
        &self.field
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.field.snapshot()
    }

    /// Feeds one action through [`transition`].
    pub fn step(&mut self, action: Action) -> Result<GameState> {
        self.state = transition(self.state, action, &mut self.field)?;
        Ok(self.state)
    }

    /// Drives the session until it reaches [`GameState::Exit`].
    ///
    /// `Init` is resolved without asking `input`; every other state is shown
    /// to `output` before the next action is read.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<()>
    where
        I: ActionSource + ?Sized,
        O: Renderer + ?Sized,
    {
        loop {
            match self.state {
                GameState::Exit => return Ok(()),
                GameState::Init => self.state = init(&mut self.field)?,
                state => {
                    output.render(&self.field.snapshot(), state)?;
                    let action = input.next_action()?;
                    self.state = transition(state, action, &mut self.field)?;
                }
            }
        }
    }
}
