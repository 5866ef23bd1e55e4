use crate::*;

/// Receives notifications from a [`Session`]. Every hook defaults to doing nothing.
pub trait GameObserver {
    fn game_started(&mut self, _engine: &BoardEngine) {}

    fn board_changed(&mut self, _engine: &BoardEngine) {}

    fn game_won(&mut self, _engine: &BoardEngine) {}

    fn game_lost(&mut self, _engine: &BoardEngine) {}
}

/// One engine paired with whoever wants to hear about it.
///
/// Drivers call into the session instead of the engine so that redraws and the win/lose
/// notifications fire exactly once per transition.
#[derive(Clone, Debug)]
pub struct Session<O> {
    engine: BoardEngine,
    observer: O,
}

impl<O: GameObserver> Session<O> {
    pub fn new(engine: BoardEngine, observer: O) -> Self {
        Self { engine, observer }
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_parts(self) -> (BoardEngine, O) {
        (self.engine, self.observer)
    }

    pub fn start_game(&mut self, config: GameConfig) {
        self.engine.start(config);
        self.observer.game_started(&self.engine);
        self.observer.board_changed(&self.engine);
    }

    pub fn restart(&mut self) {
        self.start_game(self.engine.config());
    }

    pub fn reveal(&mut self, x: Coord, y: Coord) -> RevealOutcome {
        let outcome = self.engine.reveal(x, y);
        if outcome.has_update() {
            self.observer.board_changed(&self.engine);
        }
        match outcome {
            RevealOutcome::Won => self.observer.game_won(&self.engine),
            RevealOutcome::Lost => self.observer.game_lost(&self.engine),
            RevealOutcome::NoChange | RevealOutcome::Revealed => {}
        }
        outcome
    }

    pub fn toggle_flag(&mut self, x: Coord, y: Coord) -> FlagOutcome {
        let outcome = self.engine.toggle_flag(x, y);
        if outcome.has_update() {
            self.observer.board_changed(&self.engine);
        }
        outcome
    }
}
