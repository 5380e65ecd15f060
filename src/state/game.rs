use std::rc::Rc;

use yew::Reducible;

use crate::config::{BoardOptions, GameConfig};
use crate::error::GameError;
use crate::model::{GameState, GameStatus, MoveOutcome, Score};
use crate::render::{self, Painter};
use crate::state::BoardGeometry;

/// A game in progress: the grid state plus the canvas it is drawn on.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub state: GameState,
    pub board: BoardGeometry,
    /// Bumped on every action so the canvas knows to redraw.
    pub version: u64,
}

impl Default for Game {
    fn default() -> Self {
        let cfg = GameConfig::default();
        let state = GameState::default();
        let board = BoardGeometry::new(cfg.width, cfg.height, state.grid_size());
        Self {
            state,
            board,
            version: 0,
        }
    }
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let state = GameState::new(config.grid_size)?;
        let board = BoardGeometry::new(config.width, config.height, config.grid_size);
        Ok(Self {
            state,
            board,
            version: 0,
        })
    }

    /// Handles a click at canvas-relative pixel coordinates. Returns whether
    /// a player has won after the click.
    pub fn click(&mut self, x: f64, y: f64) -> Result<bool, GameError> {
        let Some(cell) = self.board.cell_at(x, y) else {
            log::debug!("click at ({x}, {y}) is off the grid");
            return Ok(self.state.has_winner());
        };
        if self.state.cell_value(cell)?.is_some() {
            return Ok(self.state.has_winner());
        }
        let mover = self.state.current_player();
        match self.state.player_move(cell)? {
            MoveOutcome::Placed => log::debug!("{mover} played {cell}"),
            MoveOutcome::Won(p) => log::info!("{p} wins with {cell}"),
            MoveOutcome::Ignored => {}
        }
        Ok(self.state.has_winner())
    }

    pub fn reset(&mut self) {
        self.state.reset();
        log::info!("new round on a {0}x{0} grid", self.state.grid_size());
    }

    pub fn score(&self) -> Score {
        self.state.score()
    }

    pub fn grid_size(&self) -> usize {
        self.state.grid_size()
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.board.width, self.board.height)
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Dimensions first, then grid size; a dimension error stops before the
    /// grid is touched.
    pub fn apply_options(&mut self, opts: BoardOptions) -> Result<(), GameError> {
        self.board.set_dimensions(opts.width, opts.height)?;
        if let Some(size) = opts.grid_size {
            match self.state.set_grid_size(size) {
                Ok(()) => {
                    self.board.set_grid_size(size);
                    log::info!("grid resized to {size}x{size}");
                }
                Err(GameError::GridUnchanged(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    pub fn redraw<P: Painter>(&self, painter: &mut P) {
        render::draw_game(painter, &self.board, &self.state);
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    Click { x: f64, y: f64 },
    Reset,
    ApplyOptions(BoardOptions),
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            GameAction::Click { x, y } => {
                if let Err(e) = new.click(x, y) {
                    log::warn!("click rejected: {}", e);
                }
            }
            GameAction::Reset => new.reset(),
            GameAction::ApplyOptions(opts) => {
                if let Err(e) = new.apply_options(opts) {
                    log::error!("{}", e);
                }
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Player};
    use crate::render::tests::Recorder;
    use pretty_assertions::assert_eq;

    fn game() -> Game {
        Game::new(&GameConfig {
            width: 300.0,
            height: 300.0,
            ..GameConfig::default()
        })
        .unwrap()
    }

    // centre of a cell on the 300x300 3x3 board
    fn at(row: usize, column: usize) -> (f64, f64) {
        (column as f64 * 100.0 - 50.0, row as f64 * 100.0 - 50.0)
    }

    fn click(g: &mut Game, row: usize, column: usize) -> bool {
        let (x, y) = at(row, column);
        g.click(x, y).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let bad = GameConfig {
            grid_size: 1,
            ..GameConfig::default()
        };
        assert!(Game::new(&bad).is_err());
    }

    #[test]
    fn default_matches_default_config() {
        assert_eq!(Game::default(), Game::new(&GameConfig::default()).unwrap());
    }

    #[test]
    fn click_places_mark_for_current_player() {
        let mut g = game();
        assert!(!click(&mut g, 2, 3));
        assert_eq!(g.state.cell_value(Cell::new(2, 3)).unwrap(), Some(Player::One));
        assert_eq!(g.state.current_player(), Player::Two);
    }

    #[test]
    fn clicking_occupied_cell_is_a_noop() {
        let mut g = game();
        click(&mut g, 1, 1);
        let before = g.state.clone();
        assert!(!click(&mut g, 1, 1));
        assert_eq!(g.state, before);
    }

    #[test]
    fn clicking_off_the_grid_is_a_noop() {
        let mut g = game();
        let before = g.state.clone();
        assert!(!g.click(310.0, 20.0).unwrap());
        assert!(!g.click(-5.0, 20.0).unwrap());
        assert_eq!(g.state, before);
    }

    #[test]
    fn winning_click_reports_and_scores() {
        let mut g = game();
        for (r, c) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert!(!click(&mut g, r, c));
        }
        assert!(click(&mut g, 1, 3));
        assert_eq!(g.score(), Score { player_one: 1, player_two: 0 });
        // further clicks change nothing
        assert!(click(&mut g, 3, 3));
        assert_eq!(g.state.moves_played(), 5);
        assert_eq!(g.score().player_one, 1);

        g.reset();
        assert_eq!(g.status(), GameStatus::InProgress(Player::One));
        assert_eq!(g.state.moves_played(), 0);
        assert_eq!(g.score().player_one, 1);
    }

    #[test]
    fn apply_options_resizes_board_and_grid() {
        let mut g = game();
        click(&mut g, 1, 1);
        g.apply_options(BoardOptions {
            width: Some(400.0),
            height: None,
            grid_size: Some(4),
        })
        .unwrap();
        assert_eq!(g.dimensions(), (400.0, 300.0));
        assert_eq!(g.grid_size(), 4);
        assert_eq!(g.board.grid_lines(), 5);
        assert_eq!(g.state.moves_played(), 0);
        assert_eq!(g.board.cell_at(399.0, 299.0), Some(Cell::new(4, 4)));
    }

    #[test]
    fn unchanged_grid_size_is_not_an_error() {
        let mut g = game();
        click(&mut g, 1, 1);
        g.apply_options(BoardOptions {
            grid_size: Some(3),
            ..BoardOptions::default()
        })
        .unwrap();
        assert_eq!(g.state.moves_played(), 1);
    }

    #[test]
    fn dimension_error_leaves_grid_alone() {
        let mut g = game();
        let err = g
            .apply_options(BoardOptions {
                width: Some(10.0),
                height: None,
                grid_size: Some(5),
            })
            .unwrap_err();
        assert!(matches!(err, GameError::DimensionTooSmall { .. }));
        assert_eq!(g.grid_size(), 3);
        assert_eq!(g.board.grid_size, 3);
    }

    #[test]
    fn too_small_grid_keeps_board_in_step() {
        let mut g = game();
        assert!(
            g.apply_options(BoardOptions {
                grid_size: Some(1),
                ..BoardOptions::default()
            })
            .is_err()
        );
        assert_eq!(g.grid_size(), 3);
        assert_eq!(g.board.grid_size, 3);
    }

    #[test]
    fn oversized_grid_is_rejected_without_touching_the_board() {
        let mut g = Game::new(&GameConfig::default()).unwrap();
        click(&mut g, 1, 1);
        let err = g
            .apply_options(BoardOptions::parse("", "", "4294967296"))
            .unwrap_err();
        assert!(matches!(err, GameError::GridTooLarge { .. }));
        assert_eq!(g.grid_size(), 3);
        assert_eq!(g.board.grid_size, 3);
        assert_eq!(g.state.moves_played(), 1);
    }

    #[test]
    fn reducer_bumps_version_and_swallows_errors() {
        let g = Rc::new(game());
        let (x, y) = at(2, 2);
        let g = g.reduce(GameAction::Click { x, y });
        assert_eq!(g.version, 1);
        assert_eq!(g.state.moves_played(), 1);

        let g = g.reduce(GameAction::ApplyOptions(BoardOptions {
            height: Some(20.0),
            ..BoardOptions::default()
        }));
        assert_eq!(g.version, 2);
        assert_eq!(g.dimensions(), (300.0, 300.0));

        let g = g.reduce(GameAction::Reset);
        assert_eq!(g.version, 3);
        assert_eq!(g.state.moves_played(), 0);
    }

    #[test]
    fn redraw_draws_current_marks() {
        let mut g = game();
        click(&mut g, 1, 1);
        click(&mut g, 2, 2);
        click(&mut g, 3, 1);
        let mut r = Recorder::default();
        g.redraw(&mut r);
        assert_eq!(r.lines_of("red"), 4);
        assert_eq!(r.circles(), 1);
    }
}
