//! Chess board diagrams.
//!
//! Renders the piece-placement field of a position record as a 9-line
//! diagram: eight rank lines followed by one file-label line.
//!
//! ```text
//! 8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜
//! 7  ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟
//! 6  · ░ · ░ · ░ · ░
//! ...
//! 1  ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖
//!    a b c d e f g h
//! ```
//!
//! Parsing is forgiving: unknown symbols are shown as-is, short ranks are
//! filled with empty squares and extra squares are dropped, so any input
//! produces a full 8×8 board.

use termgrid_protocol::Perspective;

/// Number of ranks and files on the board.
pub const BOARD_SIZE: usize = 8;

/// Glyph for an empty light square.
pub const LIGHT_SQUARE: char = '·';

/// Glyph for an empty dark square.
pub const DARK_SQUARE: char = '░';

/// Piece letters and their glyphs; uppercase is white, lowercase is black.
const PIECES: [(char, char); 12] = [
    ('K', '♔'),
    ('Q', '♕'),
    ('R', '♖'),
    ('B', '♗'),
    ('N', '♘'),
    ('P', '♙'),
    ('k', '♚'),
    ('q', '♛'),
    ('r', '♜'),
    ('b', '♝'),
    ('n', '♞'),
    ('p', '♟'),
];

const FILES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Returns the glyph for a piece letter, if it is one.
#[must_use]
pub fn piece_glyph(letter: char) -> Option<char> {
    PIECES
        .iter()
        .find_map(|&(l, glyph)| (l == letter).then_some(glyph))
}

/// Returns the empty-square glyph for a square in notation order.
///
/// Rank 0 is the first rank group of the notation (rank 8).
#[must_use]
pub const fn empty_square(rank: usize, file: usize) -> char {
    if (rank + file) % 2 == 0 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}

/// An 8×8 grid of square glyphs.
///
/// Row 0 holds the first rank group of the notation it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[char; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Parses the piece-placement field of a position record.
    ///
    /// Only the text before the first space is read.
    ///
    /// # Examples
    ///
    /// ```
    /// use termgrid_render::board::Board;
    ///
    /// let board = Board::from_notation("8/8/8/8/8/8/8/4K3 w - - 0 1");
    /// assert_eq!(board.square(7, 4), '♔');
    /// assert_eq!(board.square(0, 0), '·');
    /// ```
    #[must_use]
    pub fn from_notation(notation: &str) -> Self {
        let placement = notation.split(' ').next().unwrap_or_default();
        let mut squares = [[LIGHT_SQUARE; BOARD_SIZE]; BOARD_SIZE];

        for (rank, row) in squares.iter_mut().enumerate() {
            for (file, square) in row.iter_mut().enumerate() {
                *square = empty_square(rank, file);
            }
        }

        for (rank, group) in placement.split('/').take(BOARD_SIZE).enumerate() {
            let mut file = 0;
            for symbol in group.chars() {
                if file >= BOARD_SIZE {
                    break;
                }
                match symbol.to_digit(10) {
                    Some(n @ 1..=8) => file += n as usize,
                    _ => {
                        squares[rank][file] = piece_glyph(symbol).unwrap_or(symbol);
                        file += 1;
                    }
                }
            }
        }

        Self { squares }
    }

    /// Returns the glyph at a rank row and file column.
    ///
    /// # Panics
    ///
    /// Panics if either index is 8 or more.
    #[must_use]
    pub fn square(&self, rank: usize, file: usize) -> char {
        self.squares[rank][file]
    }

    /// Returns the board rotated 180 degrees.
    #[must_use]
    pub fn flipped(&self) -> Self {
        let mut squares = self.squares;
        squares.reverse();
        for row in &mut squares {
            row.reverse();
        }
        Self { squares }
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char; BOARD_SIZE]> {
        self.squares.iter()
    }
}

/// Renders a position as diagram lines from one side's point of view.
///
/// # Examples
///
/// ```
/// use termgrid_protocol::Perspective;
/// use termgrid_render::board::render_board;
///
/// let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
/// let lines = render_board(start, Perspective::White);
/// assert_eq!(lines.len(), 9);
/// assert!(lines[0].contains('♜'));
/// assert!(lines[8].ends_with("a b c d e f g h"));
///
/// let lines = render_board(start, Perspective::Black);
/// assert!(lines[8].ends_with("h g f e d c b a"));
/// assert!(lines[0].starts_with('1'));
/// ```
#[must_use]
pub fn render_board(notation: &str, perspective: Perspective) -> Vec<String> {
    let parsed = Board::from_notation(notation);
    let (board, rank_labels, files): (Board, Vec<usize>, Vec<char>) = match perspective {
        Perspective::White => (parsed, (1..=BOARD_SIZE).rev().collect(), FILES.to_vec()),
        Perspective::Black => (
            parsed.flipped(),
            (1..=BOARD_SIZE).collect(),
            FILES.iter().rev().copied().collect(),
        ),
    };

    let mut lines: Vec<String> = board
        .rows()
        .zip(rank_labels)
        .map(|(row, label)| format!("{label}  {}", spaced(row.iter().copied())))
        .collect();
    lines.push(format!("   {}", spaced(files.into_iter())));
    lines
}

fn spaced(glyphs: impl Iterator<Item = char>) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * 4);
    for (i, glyph) in glyphs.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(glyph);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn starting_position_white() {
        let lines = render_board(START, Perspective::White);
        insta::assert_snapshot!(lines.join("\n"), @r"
8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜
7  ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟
6  · ░ · ░ · ░ · ░
5  ░ · ░ · ░ · ░ ·
4  · ░ · ░ · ░ · ░
3  ░ · ░ · ░ · ░ ·
2  ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙
1  ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖
   a b c d e f g h
");
    }

    #[test]
    fn starting_position_black() {
        let lines = render_board(START, Perspective::Black);
        assert_eq!(
            lines,
            [
                "1  ♖ ♘ ♗ ♔ ♕ ♗ ♘ ♖",
                "2  ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙",
                "3  · ░ · ░ · ░ · ░",
                "4  ░ · ░ · ░ · ░ ·",
                "5  · ░ · ░ · ░ · ░",
                "6  ░ · ░ · ░ · ░ ·",
                "7  ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟",
                "8  ♜ ♞ ♝ ♚ ♛ ♝ ♞ ♜",
                "   h g f e d c b a",
            ]
        );
    }

    #[test]
    fn empty_board_alternates_squares() {
        let lines = render_board("8/8/8/8/8/8/8/8 w - - 0 1", Perspective::White);
        assert_eq!(lines.len(), 9);
        for line in &lines[..8] {
            assert!(line.contains(LIGHT_SQUARE));
            assert!(line.contains(DARK_SQUARE));
        }
    }

    #[test]
    fn midgame_position() {
        let fen = "rnb1kbnr/pppp1ppp/8/4p3/2B1P2q/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1";
        let board = Board::from_notation(fen);
        assert_eq!(board.square(3, 4), '♟');
        assert_eq!(board.square(4, 2), '♗');
        assert_eq!(board.square(4, 7), '♛');
        assert_eq!(board.square(7, 5), empty_square(7, 5));
        assert_eq!(board.square(7, 7), '♖');
    }

    #[test]
    fn unknown_symbols_are_echoed() {
        let board = Board::from_notation("x7/8/8/8/8/8/8/8");
        assert_eq!(board.square(0, 0), 'x');
        assert_eq!(board.square(0, 1), DARK_SQUARE);
    }

    #[test]
    fn malformed_ranks_are_normalized() {
        // Short rank, overlong rank, out-of-range digit, missing ranks.
        let board = Board::from_notation("K/ppppppppppp/9");
        assert_eq!(board.square(0, 0), '♔');
        assert_eq!(board.square(0, 7), empty_square(0, 7));
        assert_eq!(board.square(1, 7), '♟');
        assert_eq!(board.square(2, 0), '9');
        assert_eq!(board.square(7, 0), empty_square(7, 0));
        assert_eq!(render_board("", Perspective::White).len(), 9);
    }

    #[test]
    fn flipping_is_an_involution() {
        let board = Board::from_notation(START);
        assert_eq!(board.flipped().flipped(), board);
        assert_eq!(board.flipped().square(0, 0), board.square(7, 7));
    }

    #[test]
    fn piece_table_is_case_sensitive() {
        assert_eq!(piece_glyph('K'), Some('♔'));
        assert_eq!(piece_glyph('k'), Some('♚'));
        assert_eq!(piece_glyph('x'), None);
    }
}
