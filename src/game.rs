use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, GRID, START_DIRECTION, START_POSITION};
use crate::food::{spawn_position, Food};
use crate::input::{Direction, GameInput};
use crate::snake::Snake;
use crate::ui::layout::restart_button;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Why the last session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

/// Result of one call to [`GameState::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game is over; nothing changed.
    Idle,
    Moved,
    Ate,
    Died(DeathReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session with food placed from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(GRID, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_rng(GRID, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(START_POSITION, START_DIRECTION);
        let food = Food::new(spawn_position(&mut rng, bounds));

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            bounds,
            rng,
        }
    }

    /// Returns the playfield dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Replaces the whole session with a freshly constructed one.
    ///
    /// The random stream carries on, so seeded runs stay reproducible
    /// across restarts.
    pub fn reset(&mut self) {
        *self = Self::from_rng(self.bounds, self.rng.clone());
    }

    /// Turns the snake unless `direction` reverses the current heading.
    /// Rejected requests are ignored.
    pub fn request_direction_change(&mut self, direction: Direction) {
        let _ = self.snake.change_direction(direction);
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Collisions are checked against the body as it was before the move:
    /// walls first, then the snake itself, and only then food.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        let next_head = self.snake.next_head_position();

        if !next_head.is_within_bounds(self.bounds) {
            return self.end(DeathReason::Wall);
        }

        if self.snake.occupies(next_head) {
            return self.end(DeathReason::SelfCollision);
        }

        let grow = next_head == self.food.position;
        if grow {
            self.food = Food::spawn(&mut self.rng, self.bounds);
            self.score += 1;
        }

        self.snake.advance(next_head, grow);
        self.tick_count += 1;

        if grow {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.request_direction_change(direction),
            GameInput::Click { x, y } => {
                if self.is_over() && restart_button().contains(x, y) {
                    self.reset();
                }
            }
            GameInput::Quit => {}
        }
    }

    fn end(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::Over;
        self.death_reason = Some(reason);
        TickOutcome::Died(reason)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{START_DIRECTION, START_POSITION};
    use crate::food::Food;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus, TickOutcome};

    fn state_with_food_at(position: Position) -> GameState {
        let mut state = GameState::new_with_seed(1);
        state.food = Food::new(position);
        state
    }

    #[test]
    fn new_game_starts_with_one_segment_heading_right() {
        let state = GameState::new_with_seed(3);

        assert_eq!(
            state.snake.segments().copied().collect::<Vec<_>>(),
            vec![START_POSITION]
        );
        assert_eq!(state.snake.direction(), START_DIRECTION);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Running);
        assert!(state.food.position.is_within_bounds(state.bounds()));
    }

    #[test]
    fn every_reverse_request_is_ignored() {
        for heading in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut state = GameState::new_with_seed(5);
            state.snake = Snake::new(Position { x: 5, y: 5 }, heading);

            state.request_direction_change(heading.opposite());

            assert_eq!(state.snake.direction(), heading);
        }
    }

    #[test]
    fn perpendicular_request_changes_heading() {
        let mut state = GameState::new_with_seed(5);

        state.request_direction_change(Direction::Up);
        assert_eq!(state.snake.direction(), Direction::Up);

        state.apply_input(GameInput::Direction(Direction::Left));
        assert_eq!(state.snake.direction(), Direction::Left);
    }

    #[test]
    fn tick_moves_head_one_cell() {
        let mut state = state_with_food_at(Position { x: 0, y: 0 });

        assert_eq!(state.tick(), TickOutcome::Moved);

        assert_eq!(
            state.snake.segments().copied().collect::<Vec<_>>(),
            vec![Position { x: 11, y: 10 }]
        );
        assert_eq!(state.score, 0);
    }

    #[test]
    fn snake_grows_after_eating_food() {
        let mut state = state_with_food_at(Position { x: 11, y: 10 });

        assert_eq!(state.tick(), TickOutcome::Ate);

        assert_eq!(
            state.snake.segments().copied().collect::<Vec<_>>(),
            vec![Position { x: 11, y: 10 }, Position { x: 10, y: 10 }]
        );
        assert_eq!(state.score, 1);
        assert!(state.food.position.is_within_bounds(state.bounds()));
    }

    #[test]
    fn snake_collision_with_wall_sets_game_over() {
        let mut state = state_with_food_at(Position { x: 30, y: 20 });
        state.snake = Snake::new(Position { x: 0, y: 7 }, Direction::Left);

        assert_eq!(state.tick(), TickOutcome::Died(DeathReason::Wall));

        assert_eq!(state.status, GameStatus::Over);
        assert_eq!(state.death_reason, Some(DeathReason::Wall));
        assert_eq!(state.snake.head(), Position { x: 0, y: 7 });
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn far_walls_end_the_game_too() {
        let mut right = state_with_food_at(Position { x: 0, y: 0 });
        right.snake = Snake::new(Position { x: 39, y: 3 }, Direction::Right);
        assert_eq!(right.tick(), TickOutcome::Died(DeathReason::Wall));

        let mut bottom = state_with_food_at(Position { x: 0, y: 0 });
        bottom.snake = Snake::new(Position { x: 3, y: 29 }, Direction::Down);
        assert_eq!(bottom.tick(), TickOutcome::Died(DeathReason::Wall));

        let mut top = state_with_food_at(Position { x: 0, y: 5 });
        top.snake = Snake::new(Position { x: 3, y: 0 }, Direction::Up);
        assert_eq!(top.tick(), TickOutcome::Died(DeathReason::Wall));
    }

    #[test]
    fn snake_collision_with_self_sets_game_over() {
        let mut state = state_with_food_at(Position { x: 30, y: 20 });
        let body = vec![
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
            Position { x: 1, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 3, y: 3 },
            Position { x: 3, y: 2 },
        ];
        state.snake = Snake::from_segments(body.clone(), Direction::Down);

        assert_eq!(state.tick(), TickOutcome::Died(DeathReason::SelfCollision));

        assert_eq!(state.status, GameStatus::Over);
        assert_eq!(state.snake.segments().copied().collect::<Vec<_>>(), body);
    }

    #[test]
    fn moving_into_the_current_tail_is_a_collision() {
        let mut state = state_with_food_at(Position { x: 30, y: 20 });
        // Head at (2,2) heading Down into (2,3), which is the tail.
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Direction::Down,
        );

        assert_eq!(state.tick(), TickOutcome::Died(DeathReason::SelfCollision));
    }

    #[test]
    fn single_segment_snake_never_hits_itself() {
        for heading in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut state = state_with_food_at(Position { x: 0, y: 0 });
            state.snake = Snake::new(Position { x: 20, y: 15 }, heading);

            assert_eq!(state.tick(), TickOutcome::Moved);
            assert_eq!(state.status, GameStatus::Running);
        }
    }

    #[test]
    fn wall_is_checked_before_body() {
        let mut state = state_with_food_at(Position { x: 30, y: 20 });
        state.snake = Snake::from_segments(
            vec![Position { x: 0, y: 1 }, Position { x: 0, y: 2 }],
            Direction::Left,
        );

        assert_eq!(state.tick(), TickOutcome::Died(DeathReason::Wall));
    }

    #[test]
    fn ticks_after_game_over_change_nothing() {
        let mut state = state_with_food_at(Position { x: 30, y: 20 });
        state.snake = Snake::new(Position { x: 39, y: 0 }, Direction::Right);
        state.tick();
        let snake_before: Vec<_> = state.snake.segments().copied().collect();
        let food_before = state.food;

        for _ in 0..10 {
            assert_eq!(state.tick(), TickOutcome::Idle);
        }

        assert_eq!(state.status, GameStatus::Over);
        assert_eq!(
            state.snake.segments().copied().collect::<Vec<_>>(),
            snake_before
        );
        assert_eq!(state.food, food_before);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn reset_restores_the_initial_session() {
        let mut state = state_with_food_at(Position { x: 11, y: 10 });
        state.tick();
        state.snake = Snake::new(Position { x: 39, y: 0 }, Direction::Up);
        state.tick();
        assert_eq!(state.status, GameStatus::Over);
        assert_eq!(state.score, 1);

        state.reset();

        assert_eq!(
            state.snake.segments().copied().collect::<Vec<_>>(),
            vec![START_POSITION]
        );
        assert_eq!(state.snake.direction(), START_DIRECTION);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.death_reason, None);
        assert!(state.food.position.is_within_bounds(state.bounds()));
    }

    #[test]
    fn click_on_button_restarts_only_after_game_over() {
        let mut state = state_with_food_at(Position { x: 30, y: 20 });

        state.apply_input(GameInput::Click { x: 400, y: 380 });
        state.tick();
        assert_eq!(state.snake.head(), Position { x: 11, y: 10 });

        state.snake = Snake::new(Position { x: 39, y: 0 }, Direction::Right);
        state.tick();
        assert!(state.is_over());

        state.apply_input(GameInput::Click { x: 200, y: 100 });
        assert!(state.is_over());

        state.apply_input(GameInput::Click { x: 340, y: 380 });
        assert!(state.is_over());

        state.apply_input(GameInput::Click { x: 400, y: 380 });
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), START_POSITION);
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let mut first = GameState::new_with_seed(42);
        let mut second = GameState::new_with_seed(42);
        assert_eq!(first.food, second.food);

        first.reset();
        second.reset();
        assert_eq!(first.food, second.food);
    }
}
