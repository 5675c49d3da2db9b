/// Number of board rows. Row 0 is the top, row `ROWS - 1` the bottom.
pub const ROWS: usize = 6;
/// Number of board columns.
pub const COLS: usize = 7;
/// Chips in a row needed to win.
pub const CONNECT: usize = 4;
/// Listen address of the reference server.
pub const DEFAULT_BIND: &str = "0.0.0.0:8901";
