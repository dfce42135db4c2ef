/// A tic-tac-toe mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

/// 3x3 position, row-major; `None` is an empty cell.
pub type Board = [[Option<Player>; 3]; 3];

// Rows, columns, then the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Winner of the position, if any of the eight lines is held by one player.
pub fn evaluate_position(board: &Board) -> Option<Player> {
    for line in &LINES {
        let [a, b, c] = line.map(|(row, col)| board[row][col]);
        if a.is_some() && a == b && b == c {
            return a;
        }
    }
    None
}
