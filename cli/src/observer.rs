use crate::render::render_board;
use deminer_core::{BoardEngine, GameObserver};
use std::io::{self, Write};

/// Prints the board and the end-of-game banners to a terminal-like writer.
#[derive(Debug)]
pub struct TerminalObserver<W> {
    out: W,
}

impl<W: Write> TerminalObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: &str) {
        if let Err(err) = self.try_print(text) {
            log::error!("Could not write to terminal: {err}");
        }
    }

    fn try_print(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> GameObserver for TerminalObserver<W> {
    fn game_started(&mut self, engine: &BoardEngine) {
        let (width, height) = engine.size();
        self.print(&format!(
            "new game: {width}x{height}, {} mines\n",
            engine.mine_count()
        ));
    }

    fn board_changed(&mut self, engine: &BoardEngine) {
        self.print(&render_board(engine));
    }

    fn game_won(&mut self, _engine: &BoardEngine) {
        self.print("*** you win! type `n` for a new game ***\n");
    }

    fn game_lost(&mut self, _engine: &BoardEngine) {
        self.print("*** boom, you lose. type `n` for a new game ***\n");
    }
}
