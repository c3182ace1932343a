//! The turn state machine.
//!
//! A `Game` owns one board, its score and the RNG that feeds tile spawns.
//! There is no uninitialised state: a game is either started fresh
//! (`Game::new`) or resumed from saved values (`Game::resume`), and every
//! query is valid from then on.
//!
//! A turn:
//! 1. Reject the move if the game is over
//! 2. Do nothing if the move would not change the board
//! 3. Align, score, merge and re-align the board (`RulesEngine::slide`)
//! 4. Spawn one new tile
//!
//! State is committed only after every step has succeeded.

use tracing::{debug, info, trace};

use crate::core::{Board, Direction, GameConfig, GameError, GameRng, Tile};
use crate::rules::{Points, RulesEngine, StandardRules};

use super::score::Score;
use super::snapshot::SavedGame;

/// What a call to `make_move` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Tiles moved, `points` were scored and a new tile was spawned.
    Moved { points: Points },
    /// The move would not change the board; nothing happened.
    Unchanged,
}

/// Progress of a game, as a front end would announce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Still working toward the first milestone tile.
    Playing { target: Tile },
    /// The first milestone is reached; `next_target` is the next one.
    Won { next_target: Tile },
    /// No move changes the board.
    Over,
}

/// A single game session.
#[derive(Clone, Debug)]
pub struct Game<R: RulesEngine = StandardRules> {
    rules: R,
    board: Board,
    score: Score,
    rng: GameRng,
    moves: u32,
}

impl Game<StandardRules> {
    /// Start a new game with the standard rules.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = rng_for(&config);
        Self::with_rules(StandardRules::new(config)?, rng)
    }

    /// Resume a saved game with the standard rules.
    pub fn resume(
        config: GameConfig,
        board: &Board,
        score: Points,
        high_score: Points,
    ) -> Result<Self, GameError> {
        let rng = rng_for(&config);
        Self::resume_with_rules(StandardRules::new(config)?, rng, board, score, high_score)
    }
}

impl<R: RulesEngine> Game<R> {
    /// Start a new game under custom rules.
    pub fn with_rules(rules: R, rng: GameRng) -> Result<Self, GameError> {
        let mut game = Self {
            rules,
            board: Board::new(),
            score: Score::default(),
            rng,
            moves: 0,
        };
        game.new_game()?;
        Ok(game)
    }

    /// Resume a saved game under custom rules.
    pub fn resume_with_rules(
        rules: R,
        rng: GameRng,
        board: &Board,
        score: Points,
        high_score: Points,
    ) -> Result<Self, GameError> {
        let (board, score) = validate_resume(board, score, high_score)?;
        debug!(score = score.current(), high_score = score.high(), "resumed game");
        Ok(Self {
            rules,
            board,
            score,
            rng,
            moves: 0,
        })
    }

    // === Lifecycle ===

    /// Start over on an empty board with the configured starting tiles.
    ///
    /// The score is reset; the high score is kept.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let mut board = Board::new();
        for _ in 0..self.rules.config().starting_tiles {
            board = self.rules.spawn_tile(&board, &mut self.rng)?;
        }

        self.board = board;
        self.score.reset();
        self.moves = 0;
        debug!(high_score = self.score.high(), "started new game");
        Ok(())
    }

    /// Replace the session with a saved board and scores.
    ///
    /// Fails with `InvalidArgument` if a score is negative, the high score is
    /// below the score, or a cell holds something other than 0 or a power of
    /// two. Nothing changes on failure.
    pub fn resume_game(
        &mut self,
        board: &Board,
        score: Points,
        high_score: Points,
    ) -> Result<(), GameError> {
        let (board, score) = validate_resume(board, score, high_score)?;
        self.board = board;
        self.score = score;
        self.moves = 0;
        debug!(score = score.current(), high_score = score.high(), "resumed game");
        Ok(())
    }

    /// Capture everything needed to continue this game later.
    #[must_use]
    pub fn save(&self) -> SavedGame {
        SavedGame {
            board: self.board,
            score: self.score.current(),
            high_score: self.score.high(),
            rng: Some(self.rng.state()),
        }
    }

    /// Continue a saved game, including its spawn sequence when recorded.
    pub fn restore(&mut self, saved: &SavedGame) -> Result<(), GameError> {
        self.resume_game(&saved.board, saved.score, saved.high_score)?;
        if let Some(state) = &saved.rng {
            self.rng = GameRng::from_state(state);
        }
        Ok(())
    }

    // === Turns ===

    /// Play one move.
    ///
    /// Fails with `InvalidState` if the game is already over. A move that
    /// would not change the board is a no-op and returns
    /// `MoveOutcome::Unchanged`.
    pub fn make_move(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::invalid_state("cannot move when the game is over"));
        }
        if !self.can_move(direction) {
            trace!(%direction, "move does not change the board");
            return Ok(MoveOutcome::Unchanged);
        }

        let slide = self.rules.slide(&self.board, direction);
        let mut score = self.score;
        score.add(slide.points)?;
        let board = self.rules.spawn_tile(&slide.board, &mut self.rng)?;

        self.board = board;
        self.score = score;
        self.moves += 1;
        debug!(
            %direction,
            points = slide.points,
            score = score.current(),
            "applied move"
        );

        if self.is_game_over() {
            info!(
                score = score.current(),
                max_tile = self.board.max_tile(),
                moves = self.moves,
                "game over"
            );
        }
        Ok(MoveOutcome::Moved {
            points: slide.points,
        })
    }

    // === Queries ===

    /// Check whether moving in `direction` would change the board.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        self.rules.can_move(&self.board, direction)
    }

    /// Directions in which a move changes the board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        self.rules.legal_moves(&self.board)
    }

    /// Check if no direction changes the board.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.rules.is_terminal(&self.board)
    }

    /// The next milestone tile: 2048 (or the configured target) until it
    /// is reached, then double the largest tile.
    #[must_use]
    pub fn next_tile_to_get(&self) -> Tile {
        self.rules.next_milestone(&self.board)
    }

    /// Current progress toward the milestones.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            return GameStatus::Over;
        }
        let target = self.rules.config().target_tile;
        let next = self.next_tile_to_get();
        if next == target {
            GameStatus::Playing { target }
        } else {
            GameStatus::Won { next_target: next }
        }
    }

    /// A copy of the current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> Points {
        self.score.current()
    }

    /// Best score.
    #[must_use]
    pub fn high_score(&self) -> Points {
        self.score.high()
    }

    /// Moves applied since the last new game or resume.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The rules this game is played under.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }
}

fn rng_for(config: &GameConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

fn validate_resume(
    board: &Board,
    score: Points,
    high_score: Points,
) -> Result<(Board, Score), GameError> {
    let score = Score::new(score, high_score)?;
    if !board.is_well_formed() {
        return Err(GameError::invalid_argument(
            "every tile must be 0 or a power of two no smaller than 2",
        ));
    }
    Ok((*board, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::new().with_seed(42)
    }

    fn resume(rows: [[Tile; 4]; 4], score: Points, high: Points) -> Game {
        Game::resume(config(), &Board::from_rows(rows), score, high).unwrap()
    }

    fn game_over_rows() -> [[Tile; 4]; 4] {
        [
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [2, 4, 8, 16],
            [32, 64, 128, 256],
        ]
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(config()).unwrap();

        assert_eq!(game.board().tile_count(), 2);
        assert!(game.board().is_well_formed());
        assert!(game.board().max_tile() <= 4);
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 0);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        let err = Game::new(GameConfig::new().with_starting_tiles(0)).unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument(_)));
    }

    #[test]
    fn test_new_game_keeps_high_score() {
        let mut game = resume(
            [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]],
            100,
            150,
        );
        game.make_move(Direction::Left).unwrap();
        assert_eq!(game.score(), 104);

        game.new_game().unwrap();
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 150);
        assert_eq!(game.board().tile_count(), 2);
    }

    #[test]
    fn test_resume_round_trip() {
        let rows = [
            [2, 0, 0, 4],
            [0, 8, 0, 0],
            [0, 0, 16, 0],
            [32, 0, 0, 2048],
        ];
        let game = resume(rows, 1000, 2000);

        assert_eq!(game.board(), Board::from_rows(rows));
        assert_eq!(game.score(), 1000);
        assert_eq!(game.high_score(), 2000);
    }

    #[test]
    fn test_resume_rejects_bad_scores() {
        let board = Board::new();
        for (score, high) in [(-1, 10), (0, -1), (20, 10)] {
            let err = Game::resume(config(), &board, score, high).unwrap_err();
            assert!(matches!(err, GameError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_resume_rejects_malformed_board() {
        let board = Board::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let err = Game::resume(config(), &board, 0, 0).unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument(_)));
    }

    #[test]
    fn test_failed_resume_leaves_state() {
        let mut game = resume([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 10, 20);
        let before = game.board();

        assert!(game.resume_game(&Board::new(), 30, 20).is_err());
        assert_eq!(game.board(), before);
        assert_eq!(game.score(), 10);
        assert_eq!(game.high_score(), 20);
    }

    #[test]
    fn test_move_left() {
        let mut game = resume([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]], 0, 0);

        let outcome = game.make_move(Direction::Left).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { points: 12 });

        let board = game.board();
        assert_eq!(board.get(0, 0).unwrap(), 4);
        assert_eq!(board.get(1, 0).unwrap(), 8);
        // Two settled tiles plus one spawned tile
        assert_eq!(board.tile_count(), 3);
        assert_eq!(game.score(), 12);
        assert_eq!(game.high_score(), 12);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_move_keeps_higher_high_score() {
        let mut game = resume([[0; 4], [0; 4], [0; 4], [2, 0, 0, 2]], 180, 1000);

        game.make_move(Direction::Right).unwrap();
        assert_eq!(game.score(), 184);
        assert_eq!(game.high_score(), 1000);
        assert_eq!(game.board().get(3, 3).unwrap(), 4);
    }

    #[test]
    fn test_move_without_effect_is_noop() {
        let mut game = resume([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]], 8, 16);
        let before = game.board();

        assert!(!game.can_move(Direction::Left));
        assert!(!game.can_move(Direction::Up));
        assert!(!game.is_game_over());

        let outcome = game.make_move(Direction::Left).unwrap();
        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(game.board(), before);
        assert_eq!(game.score(), 8);
        assert_eq!(game.high_score(), 16);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_move_when_game_over() {
        let mut game = resume(game_over_rows(), 50, 60);
        assert!(game.is_game_over());
        for dir in Direction::ALL {
            assert!(!game.can_move(dir));
        }

        let err = game.make_move(Direction::Up).unwrap_err();
        assert!(matches!(err, GameError::InvalidState(_)));
        assert_eq!(game.board(), Board::from_rows(game_over_rows()));
        assert_eq!(game.score(), 50);
    }

    #[test]
    fn test_can_move() {
        let game = resume([[0; 4], [0, 2, 0, 0], [0; 4], [0; 4]], 0, 0);
        for dir in Direction::ALL {
            assert!(game.can_move(dir), "{dir} should be possible");
        }
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn test_next_tile_to_get() {
        let game = resume([[1024, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 0, 0);
        assert_eq!(game.next_tile_to_get(), 2048);

        let game = resume([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 0, 0);
        assert_eq!(game.next_tile_to_get(), 4096);

        let game = resume([[2048, 4096, 0, 0], [0; 4], [0; 4], [0; 4]], 0, 0);
        assert_eq!(game.next_tile_to_get(), 8192);
    }

    #[test]
    fn test_status() {
        let game = resume([[1024, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 0, 0);
        assert_eq!(game.status(), GameStatus::Playing { target: 2048 });

        let game = resume([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 0, 0);
        assert_eq!(game.status(), GameStatus::Won { next_target: 4096 });

        let game = resume(game_over_rows(), 0, 0);
        assert_eq!(game.status(), GameStatus::Over);
    }

    #[test]
    fn test_board_is_a_copy() {
        let game = resume([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 0, 0);
        let mut board = game.board();
        board.set(0, 0, 4096).unwrap();

        assert_eq!(game.board().get(0, 0).unwrap(), 2);
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let mut a = Game::new(config()).unwrap();
        let mut b = Game::new(config()).unwrap();
        assert_eq!(a.board(), b.board());

        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            if a.is_game_over() {
                break;
            }
            assert_eq!(a.make_move(dir).unwrap(), b.make_move(dir).unwrap());
            assert_eq!(a.board(), b.board());
        }
    }

    #[test]
    fn test_save_and_restore_continue_identically() {
        let mut game = Game::new(config()).unwrap();
        let _ = game.make_move(Direction::Left);
        let _ = game.make_move(Direction::Up);

        let saved = game.save();
        let mut restored = Game::new(GameConfig::new().with_seed(7)).unwrap();
        restored.restore(&saved).unwrap();

        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.score(), game.score());
        assert_eq!(restored.high_score(), game.high_score());

        for dir in [Direction::Down, Direction::Right, Direction::Left] {
            if game.is_game_over() {
                break;
            }
            assert_eq!(game.make_move(dir).unwrap(), restored.make_move(dir).unwrap());
            assert_eq!(game.board(), restored.board());
        }
    }
}
