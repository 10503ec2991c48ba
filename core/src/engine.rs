use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Drawn
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won,
    Drawn,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Drawn)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Four collinear, contiguous cells owned by one player, in scan order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [Coord2; WIN_LENGTH],
}

impl WinningLine {
    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells.contains(&coords)
    }
}

/// Outcome of a successfully placed move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DropOutcome {
    /// Token placed, the game continues with the other player.
    Placed(Coord2),
    Won(Coord2, WinningLine),
    Drawn(Coord2),
}

impl DropOutcome {
    pub const fn coords(self) -> Coord2 {
        match self {
            Self::Placed(coords) | Self::Won(coords, _) | Self::Drawn(coords) => coords,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won(..) | Self::Drawn(_))
    }
}

/// Axis deltas scanned for a winning run, in fixed order: horizontal,
/// vertical, diagonal (↘), diagonal (↙).
const AXES: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Clone, Debug, PartialEq)]
pub struct GameEngine {
    board: Array2<Cell>,
    current_player: Player,
    state: GameState,
    winning_line: Option<WinningLine>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: Array2::default((ROWS as usize, COLS as usize)),
            current_player: Player::One,
            state: Default::default(),
            winning_line: None,
        }
    }

    /// Start a new game; safe to call at any point.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn winner(&self) -> Option<Player> {
        self.winning_line.map(|line| line.player)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords.to_nd_index()]
    }

    /// Lowest empty row of `col`, `None` when the column is full or out of
    /// range.
    pub fn lowest_open_row(&self, col: Coord) -> Option<Coord> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cell_at((row, col)).is_empty())
    }

    /// Place the current player's token under gravity. Does not advance the
    /// turn and does not look for a finished game; see [`Self::apply_move`]
    /// for the full move.
    pub fn drop_token(&mut self, col: Coord) -> Result<Coord2> {
        let col = self.validate_column(col)?;
        self.check_not_finished()?;

        let row = self.lowest_open_row(col).ok_or(GameError::ColumnFull)?;
        let coords = (row, col);
        self.board[coords.to_nd_index()] = Cell::Filled(self.current_player);
        self.mark_started();
        log::debug!(
            "player {} placed at {:?}",
            self.current_player.number(),
            coords
        );
        Ok(coords)
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// The board is full exactly when the top row is, thanks to gravity.
    pub fn is_draw(&self) -> bool {
        (0..COLS).all(|col| !self.cell_at((0, col)).is_empty())
    }

    pub fn is_winning_move(&self, coords: Coord2) -> bool {
        self.winning_line_at(coords).is_some()
    }

    /// Winning run through `coords`, if any. Axes are checked in a fixed
    /// order (horizontal, vertical, then the two diagonals) and the first
    /// qualifying run wins; a run longer than four reports its first four
    /// cells in scan order, which is not necessarily a window around
    /// `coords`.
    pub fn winning_line_at(&self, coords: Coord2) -> Option<WinningLine> {
        let player = self.cell_at(coords).player()?;
        AXES.into_iter()
            .find_map(|delta| self.axis_run(coords, delta, player))
    }

    fn axis_run(&self, origin: Coord2, delta: (i8, i8), player: Player) -> Option<WinningLine> {
        let owned = |&pos: &Coord2| self.cell_at(pos) == Cell::Filled(player);

        let mut cells: Vec<Coord2> = RayIter::new(origin, (-delta.0, -delta.1))
            .take_while(owned)
            .collect();
        cells.reverse();
        cells.push(origin);
        cells.extend(RayIter::new(origin, delta).take_while(owned));

        (cells.len() >= WIN_LENGTH).then(|| WinningLine {
            player,
            cells: cells[..WIN_LENGTH].try_into().unwrap(),
        })
    }

    /// Play a full move: drop, then classify the result. The turn advances
    /// only when the game continues, so after a terminal move the winner is
    /// still [`Self::current_player`].
    pub fn apply_move(&mut self, col: Coord) -> Result<DropOutcome> {
        let coords = self.drop_token(col)?;

        if let Some(line) = self.winning_line_at(coords) {
            self.state = GameState::Won;
            self.winning_line = Some(line);
            log::debug!("player {} wins with {:?}", line.player.number(), line.cells);
            Ok(DropOutcome::Won(coords, line))
        } else if self.is_draw() {
            self.state = GameState::Drawn;
            log::debug!("board full, game drawn");
            Ok(DropOutcome::Drawn(coords))
        } else {
            self.switch_player();
            Ok(DropOutcome::Placed(coords))
        }
    }

    fn validate_column(&self, col: Coord) -> Result<Coord> {
        if col < COLS {
            Ok(col)
        } else {
            Err(GameError::InvalidColumn)
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_final() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_initial() {
            self.state = GameState::InProgress;
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_many(engine: &mut GameEngine, moves: &[Coord]) -> DropOutcome {
        let mut last = None;
        for &col in moves {
            last = Some(engine.apply_move(col).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn fresh_board_is_empty_and_not_drawn() {
        let engine = GameEngine::new();

        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(engine.cell_at((row, col)), Cell::Empty);
            }
        }
        assert!(!engine.is_draw());
        assert_eq!(engine.state(), GameState::NotStarted);
        assert_eq!(engine.current_player(), Player::One);
        assert_eq!(engine.winning_line_at((0, 0)), None);
    }

    #[test]
    fn reset_clears_a_played_board() {
        let mut engine = GameEngine::new();
        engine.apply_move(3).unwrap();
        engine.apply_move(3).unwrap();

        engine.reset();

        assert_eq!(engine.cell_at((ROWS - 1, 3)), Cell::Empty);
        assert_eq!(engine.current_player(), Player::One);
        assert_eq!(engine.state(), GameState::NotStarted);
        assert_eq!(engine.winning_line(), None);
    }

    #[test]
    fn column_fills_bottom_to_top_then_rejects() {
        let mut engine = GameEngine::new();

        for turn in 0..ROWS {
            let coords = engine.drop_token(2).unwrap();
            assert_eq!(coords, (ROWS - 1 - turn, 2));
            engine.switch_player();
        }

        assert_eq!(engine.lowest_open_row(2), None);
        assert_eq!(engine.drop_token(2), Err(GameError::ColumnFull));
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let mut engine = GameEngine::new();

        assert_eq!(engine.drop_token(COLS), Err(GameError::InvalidColumn));
        assert_eq!(engine.lowest_open_row(COLS), None);
    }

    #[test]
    fn drop_token_does_not_advance_the_turn() {
        let mut engine = GameEngine::new();

        engine.drop_token(0).unwrap();

        assert_eq!(engine.current_player(), Player::One);
        assert_eq!(engine.state(), GameState::InProgress);
    }

    #[test]
    fn stacked_four_wins_vertically() {
        // P1 col 0, P2 col 1, repeated; P1's 4th token ends it.
        let mut engine = GameEngine::new();
        let outcome = drop_many(&mut engine, &[0, 1, 0, 1, 0, 1, 0]);

        let DropOutcome::Won(coords, line) = outcome else {
            panic!("expected a win, got {:?}", outcome);
        };
        assert_eq!(coords, (ROWS - 4, 0));
        assert_eq!(line.player, Player::One);
        assert_eq!(
            line.cells,
            [(ROWS - 4, 0), (ROWS - 3, 0), (ROWS - 2, 0), (ROWS - 1, 0)]
        );
        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.winner(), Some(Player::One));
        // the turn does not advance past a terminal move
        assert_eq!(engine.current_player(), Player::One);
    }

    #[test]
    fn moves_after_game_over_are_rejected() {
        let mut engine = GameEngine::new();
        drop_many(&mut engine, &[0, 1, 0, 1, 0, 1, 0]);

        assert_eq!(engine.apply_move(3), Err(GameError::AlreadyEnded));
        assert_eq!(engine.drop_token(3), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn horizontal_win_reports_cells_left_to_right() {
        let mut engine = GameEngine::new();
        let outcome = drop_many(&mut engine, &[0, 0, 1, 1, 2, 2, 3]);

        let DropOutcome::Won(_, line) = outcome else {
            panic!("expected a win, got {:?}", outcome);
        };
        assert_eq!(
            line.cells,
            [(ROWS - 1, 0), (ROWS - 1, 1), (ROWS - 1, 2), (ROWS - 1, 3)]
        );
    }

    #[test]
    fn truncates_overlong_run_from_scan_start() {
        // Five of the same player on the bottom row, placed raw: the
        // reported window starts at the far end of the backward scan and
        // can exclude the queried cell itself.
        let mut engine = GameEngine::new();
        for col in 0..5 {
            engine.drop_token(col).unwrap();
        }

        let line = engine.winning_line_at((ROWS - 1, 4)).unwrap();

        assert!(engine.is_winning_move((ROWS - 1, 4)));
        assert_eq!(
            line.cells,
            [(ROWS - 1, 0), (ROWS - 1, 1), (ROWS - 1, 2), (ROWS - 1, 3)]
        );
        assert!(!line.contains((ROWS - 1, 4)));
    }

    #[test]
    fn diagonal_win_down_right() {
        let mut engine = GameEngine::new();
        let outcome = drop_many(&mut engine, &[6, 5, 5, 4, 4, 3, 4, 3, 3, 0, 3]);

        let DropOutcome::Won(coords, line) = outcome else {
            panic!("expected a win, got {:?}", outcome);
        };
        assert_eq!(coords, (2, 3));
        assert_eq!(line.cells, [(2, 3), (3, 4), (4, 5), (5, 6)]);
    }

    #[test]
    fn diagonal_win_down_left() {
        let mut engine = GameEngine::new();
        let outcome = drop_many(&mut engine, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);

        let DropOutcome::Won(coords, line) = outcome else {
            panic!("expected a win, got {:?}", outcome);
        };
        assert_eq!(coords, (2, 3));
        assert_eq!(line.cells, [(2, 3), (3, 2), (4, 1), (5, 0)]);
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // Column stacks, bottom to top, chosen so no four-run exists: paired
        // columns alternate inversely and the pair boundaries break every
        // diagonal after two cells.
        use Player::{One, Two};
        let p = [One, Two, One, Two, One, Two];
        let q = [Two, One, Two, One, Two, One];
        let columns = [p, p, q, q, p, p, q];

        let mut engine = GameEngine::new();
        for (col, stack) in columns.iter().enumerate() {
            for &player in stack {
                if engine.current_player() != player {
                    engine.switch_player();
                }
                engine.drop_token(col as Coord).unwrap();
            }
        }

        assert!(engine.is_draw());
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(engine.winning_line_at((row, col)), None);
            }
        }
    }

    #[test]
    fn filling_move_without_a_line_draws() {
        // Same draw layout as above, reached through strictly alternating
        // full moves: each column pair fills level by level, the leftover
        // column last.
        let mut engine = GameEngine::new();
        let mut moves: Vec<Coord> = Vec::new();
        for (a, b) in [(0, 2), (1, 3), (4, 6)] {
            for level in 0..ROWS {
                if level % 2 == 0 {
                    moves.extend([a, b]);
                } else {
                    moves.extend([b, a]);
                }
            }
        }
        moves.extend([5; ROWS as usize]);

        let outcome = drop_many(&mut engine, &moves);

        assert_eq!(outcome, DropOutcome::Drawn((0, 5)));
        assert_eq!(engine.state(), GameState::Drawn);
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.apply_move(0), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn apply_move_alternates_players_while_game_continues() {
        let mut engine = GameEngine::new();

        assert_eq!(engine.apply_move(3).unwrap(), DropOutcome::Placed((5, 3)));
        assert_eq!(engine.current_player(), Player::Two);
        assert_eq!(engine.apply_move(3).unwrap(), DropOutcome::Placed((4, 3)));
        assert_eq!(engine.current_player(), Player::One);
        assert_eq!(engine.cell_at((5, 3)), Cell::Filled(Player::One));
        assert_eq!(engine.cell_at((4, 3)), Cell::Filled(Player::Two));
    }
}
