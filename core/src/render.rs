use alloc::string::{String, ToString};
use core::fmt::{self, Display, Formatter, Write};

use crate::*;

impl Board {
    /// Text picture of the board, the same as its `Display` output.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let dim = self.dim();

        write_column_labels(f, dim)?;
        for row in 0..dim {
            write_border(f, dim)?;
            let label = dim - row;
            write!(f, "{label:>2} ")?;
            for column in 0..dim {
                f.write_char('|')?;
                let coords = (column, row);
                write_cell(f, self.cell_at(coords), self.adjacent_mine_count(coords))?;
            }
            writeln!(f, "| {label}")?;
        }
        write_border(f, dim)?;
        write_column_labels(f, dim)
    }
}

fn write_column_labels(f: &mut Formatter<'_>, dim: Coord) -> fmt::Result {
    f.write_str("    ")?;
    for label in 1..=dim {
        write!(f, "{label:>2} ")?;
    }
    f.write_char('\n')
}

fn write_border(f: &mut Formatter<'_>, dim: Coord) -> fmt::Result {
    f.write_str("   ")?;
    for _ in 0..dim {
        f.write_str("+--")?;
    }
    f.write_str("+\n")
}

/// Two characters per cell: the flag mark followed by the cell content.
fn write_cell(f: &mut Formatter<'_>, cell: Cell, adjacent_mines: u8) -> fmt::Result {
    let flag = if cell.is_flagged() { '*' } else { ' ' };
    match (cell.is_revealed(), cell.has_mine(), adjacent_mines) {
        (false, _, _) => write!(f, "{flag} "),
        (true, true, _) => f.write_str("XX"),
        (true, false, 0) => write!(f, "{flag}-"),
        (true, false, count) => write!(f, "{flag}{count}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(dim: Coord, mines: &[Coord2]) -> Board {
        Board::new(MineLayout::from_mine_coords(dim, mines).unwrap())
    }

    #[test]
    fn fresh_board_is_all_blank() {
        let board = board(2, &[(0, 0)]);

        let expected = concat!(
            "     1  2 \n",
            "   +--+--+\n",
            " 2 |  |  | 2\n",
            "   +--+--+\n",
            " 1 |  |  | 1\n",
            "   +--+--+\n",
            "     1  2 \n",
        );
        assert_eq!(board.render(), expected);
    }

    #[test]
    fn glyphs_cover_every_cell_state() {
        // every safe cell opens from the corner, only the mine stays closed
        let mut board = board(3, &[(0, 0)]);
        board.reveal((2, 2)).unwrap();
        board.set_flag((2, 2), true).unwrap();
        board.set_flag((0, 0), true).unwrap();
        board.set_flag((0, 1), true).unwrap();

        let expected = concat!(
            "     1  2  3 \n",
            "   +--+--+--+\n",
            " 3 |* | 1| -| 3\n",
            "   +--+--+--+\n",
            " 2 |*1| 1| -| 2\n",
            "   +--+--+--+\n",
            " 1 | -| -|*-| 1\n",
            "   +--+--+--+\n",
            "     1  2  3 \n",
        );
        assert_eq!(board.render(), expected);

        board.reveal_all_mines();
        assert!(board.render().contains(" 3 |XX| 1| -| 3\n"));
    }

    #[test]
    fn two_digit_labels_stay_aligned() {
        let board = board(10, &[]);
        let text = board.render();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("     1  2  3  4  5  6  7  8  9 10 ")
        );
        assert_eq!(lines.nth(1), Some("10 |  |  |  |  |  |  |  |  |  |  | 10"));
        assert_eq!(text.lines().nth(20), Some(" 1 |  |  |  |  |  |  |  |  |  |  | 1"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut board = board(6, &[(1, 1), (4, 3)]);
        board.reveal((5, 0)).unwrap();

        assert_eq!(board.render(), board.render());
        assert_eq!(board.render(), alloc::format!("{board}"));
    }
}
