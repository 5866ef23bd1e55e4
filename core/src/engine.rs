use alloc::collections::VecDeque;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Owns the grid of one game and applies every player move to it.
#[derive(Clone, Debug, Serialize)]
pub struct BoardEngine {
    config: GameConfig,
    grid: Array2<Cell>,
    status: GameStatus,
    #[serde(skip)]
    rng: SmallRng,
}

impl BoardEngine {
    /// Starts a first game with `config`, later games keep drawing from the same seeded source.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut engine = Self::seeded(seed);
        engine.start(config);
        engine
    }

    /// Engine with a single empty cell waiting for [`BoardEngine::start`], no game generated yet.
    pub fn seeded(seed: u64) -> Self {
        let mut engine = Self::from_layout(MineLayout::from_mine_mask(Array2::default([1, 1])));
        engine.rng = SmallRng::seed_from_u64(seed);
        engine
    }

    pub fn from_layout(layout: MineLayout) -> Self {
        let config = layout.game_config();
        Self {
            config,
            grid: build_grid(&layout),
            status: GameStatus::InProgress,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    pub fn new_game(&mut self, width: Coord, height: Coord, mine_count: CellCount) {
        self.start(GameConfig::new((width, height), mine_count));
    }

    pub fn start(&mut self, config: GameConfig) {
        let generator = ProbingGenerator::new(self.rng.next_u64());
        self.start_with(config, generator);
    }

    pub fn start_with(&mut self, config: GameConfig, generator: impl MinefieldGenerator) {
        self.load_layout(generator.generate(config));
    }

    pub fn restart(&mut self) {
        self.start(self.config);
    }

    /// Replaces the board wholesale with one built from `layout`.
    pub fn load_layout(&mut self, layout: MineLayout) {
        self.config = layout.game_config();
        self.grid = build_grid(&layout);
        self.status = GameStatus::InProgress;
        log::debug!(
            "New game: {}x{} with {} mines",
            self.config.width(),
            self.config.height(),
            self.config.mines
        );
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Cell at `(x, y)`, or an [`CellKind::Invalid`] cell when outside the board.
    pub fn get_cell(&self, x: Coord, y: Coord) -> Cell {
        self.cell_at((x, y))
    }

    /// All cells, column by column.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }

    /// Flags still standing on unrevealed cells; a cascade can open a flagged cell.
    pub fn flag_count(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged && !cell.revealed)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.revealed)
    }

    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.flag_count())
    }

    pub fn toggle_flag(&mut self, x: Coord, y: Coord) -> FlagOutcome {
        if self.status.is_finished() {
            return FlagOutcome::NoChange;
        }

        match self.cell_mut((x, y)) {
            Some(cell) if !cell.revealed => {
                cell.flagged = !cell.flagged;
                log::trace!("({x}, {y}) flagged: {}", cell.flagged);
                FlagOutcome::Changed
            }
            _ => FlagOutcome::NoChange,
        }
    }

    pub fn reveal(&mut self, x: Coord, y: Coord) -> RevealOutcome {
        use CellKind::*;

        if self.status.is_finished() {
            return RevealOutcome::NoChange;
        }

        let cell = self.cell_at((x, y));
        if !cell.is_valid() || cell.revealed || cell.flagged {
            return RevealOutcome::NoChange;
        }

        log::trace!("({x}, {y}) reveal {:?}", cell.kind);
        match cell.kind {
            Hazard => {
                self.explode(cell.position);
                RevealOutcome::Lost
            }
            Empty => {
                self.flood(cell.position);
                self.check_win()
            }
            _ => {
                if let Some(cell) = self.cell_mut(cell.position) {
                    cell.revealed = true;
                }
                self.check_win()
            }
        }
    }

    fn explode(&mut self, coords: Coord2) {
        if let Some(cell) = self.cell_mut(coords) {
            cell.revealed = true;
            cell.exploded = true;
        }
        for cell in self.grid.iter_mut().filter(|cell| cell.is_hazard()) {
            cell.revealed = true;
        }
        self.status = GameStatus::Lost;
        log::debug!("Game lost at {coords:?}");
    }

    /// Reveals the empty region around `start` and the numbered cells bordering it.
    fn flood(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let Some(cell) = self.cell_mut(coords) else {
                continue;
            };
            if cell.revealed || cell.is_hazard() {
                continue;
            }

            cell.revealed = true;
            if cell.kind == CellKind::Empty {
                to_visit.extend(ORTHOGONAL.iter().filter_map(|&delta| offset(coords, delta)));
            }
        }
    }

    fn check_win(&mut self) -> RevealOutcome {
        if self
            .grid
            .iter()
            .any(|cell| !cell.is_hazard() && !cell.revealed)
        {
            return RevealOutcome::Revealed;
        }

        for cell in self.grid.iter_mut().filter(|cell| cell.is_hazard()) {
            cell.flagged = true;
        }
        self.status = GameStatus::Won;
        log::debug!("Game won");
        RevealOutcome::Won
    }

    fn cell_at(&self, coords: Coord2) -> Cell {
        coords
            .to_nd_index(self.config.size)
            .map_or(Cell::invalid(coords), |index| self.grid[index])
    }

    fn cell_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        let index = coords.to_nd_index(self.config.size)?;
        self.grid.get_mut(index)
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        let count = self.grid.iter().filter(|&cell| predicate(cell)).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }
}

/// Lays out fresh cells, places the hazards and numbers everything else.
fn build_grid(layout: &MineLayout) -> Array2<Cell> {
    Array2::from_shape_fn(nd_shape(layout.size()), |(x, y)| {
        let position = (x as Coord, y as Coord);
        let mut cell = Cell::new(position);
        cell.kind = if layout.contains_mine(position) {
            CellKind::Hazard
        } else {
            match layout.adjacent_mine_count(position) {
                0 => CellKind::Empty,
                count => CellKind::Numbered(count),
            }
        };
        cell
    })
}
