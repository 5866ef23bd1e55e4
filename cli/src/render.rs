use deminer_core::{BoardEngine, Coord, GameStatus, Tile};
use std::fmt;

pub fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Hidden => '#',
        Tile::Flagged => 'F',
        Tile::Revealed(0) => '.',
        Tile::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        Tile::Mine => '*',
        Tile::Exploded => 'X',
    }
}

/// Text view of a board with row 0 at the bottom, the way the grid's y axis points up.
pub struct BoardView<'a>(pub &'a BoardEngine);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = self.0;
        let (width, height) = engine.size();
        let label_width = (height - 1).to_string().len();

        for y in (0..height).rev() {
            write!(f, "{y:>label_width$} ")?;
            for x in 0..width {
                write!(f, " {}", glyph(engine.get_cell(x, y).tile()))?;
            }
            writeln!(f)?;
        }

        write!(f, "{:label_width$} ", "")?;
        for x in 0..width {
            write!(f, " {}", column_label(x))?;
        }
        writeln!(f)?;

        let status = match engine.status() {
            GameStatus::InProgress => "in progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        writeln!(f, "mines left: {}, {status}", engine.mines_left())
    }
}

pub fn render_board(engine: &BoardEngine) -> String {
    BoardView(engine).to_string()
}

// wide boards repeat the digits every ten columns
fn column_label(x: Coord) -> char {
    char::from_digit((x % 10) as u32, 10).unwrap_or('?')
}
