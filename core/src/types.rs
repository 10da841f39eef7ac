/// Cell index into the 3×3 board, row-major `0..9`.
pub type CellIx = u8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The 8 winning lines: three rows, two diagonals, three columns.
pub const TRIPLES: [[CellIx; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 4, 6],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
];
