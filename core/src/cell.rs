use serde::{Deserialize, Serialize};

use crate::Coord2;

/// What a grid position holds, fixed once the board is generated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Marker for positions outside the board, never stored on the grid.
    #[default]
    Invalid,
    Empty,
    Numbered(u8),
    Hazard,
}

/// One grid position and its player-visible status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub revealed: bool,
    pub flagged: bool,
    pub exploded: bool,
    pub position: Coord2,
}

impl Cell {
    /// Unrevealed empty cell, the starting point of board generation.
    pub const fn new(position: Coord2) -> Self {
        Self {
            kind: CellKind::Empty,
            revealed: false,
            flagged: false,
            exploded: false,
            position,
        }
    }

    /// Sentinel handed out for coordinates outside the board.
    pub const fn invalid(position: Coord2) -> Self {
        Self {
            kind: CellKind::Invalid,
            revealed: false,
            flagged: false,
            exploded: false,
            position,
        }
    }

    pub const fn is_valid(&self) -> bool {
        !matches!(self.kind, CellKind::Invalid)
    }

    pub const fn is_hazard(&self) -> bool {
        matches!(self.kind, CellKind::Hazard)
    }

    /// Adjacent hazard count, zero for anything but numbered cells.
    pub const fn number(&self) -> u8 {
        match self.kind {
            CellKind::Numbered(count) => count,
            _ => 0,
        }
    }

    pub const fn tile(&self) -> Tile {
        use CellKind::*;

        match (self.revealed, self.kind) {
            (true, Hazard) if self.exploded => Tile::Exploded,
            (true, Hazard) => Tile::Mine,
            (true, Numbered(count)) => Tile::Revealed(count),
            (true, Empty) => Tile::Revealed(0),
            _ if self.flagged => Tile::Flagged,
            _ => Tile::Hidden,
        }
    }
}

/// Visual state of a cell as a renderer should draw it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
    Exploded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_invalid_sentinel() {
        let cell = Cell::default();

        assert!(!cell.is_valid());
        assert!(!cell.revealed);
        assert!(!cell.flagged);
        assert_eq!(cell.tile(), Tile::Hidden);
    }

    #[test]
    fn number_is_zero_outside_numbered_cells() {
        let mut cell = Cell::new((2, 3));
        assert_eq!(cell.number(), 0);

        cell.kind = CellKind::Numbered(4);
        assert_eq!(cell.number(), 4);

        cell.kind = CellKind::Hazard;
        assert_eq!(cell.number(), 0);
    }

    #[test]
    fn tile_prefers_revealed_content_over_flag() {
        let mut cell = Cell::new((0, 0));
        cell.flagged = true;
        assert_eq!(cell.tile(), Tile::Flagged);

        cell.revealed = true;
        assert_eq!(cell.tile(), Tile::Revealed(0));

        cell.kind = CellKind::Hazard;
        assert_eq!(cell.tile(), Tile::Mine);

        cell.exploded = true;
        assert_eq!(cell.tile(), Tile::Exploded);
    }
}
