use std::sync::Arc;

use rand::Rng;
use rand::rngs::StdRng;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info};

use super::{
    action::Direction,
    config::GameConfig,
    error::{ConfigError, GameError},
    food::FoodPlacer,
    grid::Grid,
    movement::{MoveOutcome, advance},
    observable::Observable,
    state::{Position, Snake},
    sync::synchronize,
};

const EVENT_CAPACITY: usize = 64;

/// Where the current game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Ended by `OutOfBounds` or `SelfCollision`
    Lost(GameError),
    /// Snake covers the whole grid
    Won,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Notifications fired while processing input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten(Position),
    FoodPlaced(Position),
    GameOver(GameError),
    Won,
}

/// Result of one direction input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Status after the input was processed
    pub status: GameStatus,
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Input pointed back into the snake and was ignored
    pub reversed: bool,
}

impl StepResult {
    fn idle(status: GameStatus) -> Self {
        Self {
            status,
            ate_food: false,
            reversed: false,
        }
    }

    /// Whether the game has terminated
    pub fn terminated(&self) -> bool {
        !self.status.is_running()
    }
}

/// The game engine that handles all game logic.
///
/// Processes inputs one at a time, each to completion: the grid is
/// resynchronized and food is replaced before anything is published.
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    placer: FoodPlacer<R>,
    grid: Grid,
    snake: Snake,
    status: GameStatus,
    moves: u32,
    grid_slot: Observable<Grid>,
    snake_slot: Observable<Snake>,
    food_slot: Observable<Option<Position>>,
    direction_slot: Observable<Option<Direction>>,
    status_slot: Observable<GameStatus>,
    events: broadcast::Sender<GameEvent>,
}

impl GameEngine<StdRng> {
    /// Create a new game engine, seeded from the config when it has a seed
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let placer = match config.seed {
            Some(seed) => FoodPlacer::from_seed(seed),
            None => FoodPlacer::from_entropy(),
        };
        Self::with_placer(config, placer)
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create a game engine with its own food placer, and start the first game
    pub fn with_placer(
        config: GameConfig,
        placer: FoodPlacer<R>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.grid_size)?;
        let snake = Snake::new(config.initial_snake.clone())?;
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        let mut engine = Self {
            grid_slot: Observable::new(grid.clone()),
            snake_slot: Observable::new(snake.clone()),
            food_slot: Observable::new(None),
            direction_slot: Observable::new(None),
            status_slot: Observable::new(GameStatus::Running),
            config,
            placer,
            grid,
            snake,
            status: GameStatus::Running,
            moves: 0,
            events,
        };
        engine.start();
        Ok(engine)
    }

    /// Reset the game to its initial state
    pub fn reset(&mut self) {
        // Initial snake was validated when the engine was built
        self.grid.clear();
        self.snake = Snake::from_positions(self.config.initial_snake.clone());
        self.status = GameStatus::Running;
        self.moves = 0;
        self.direction_slot.publish(None);
        self.start();
    }

    fn start(&mut self) {
        synchronize(&mut self.grid, &self.snake);
        self.replace_food();
        info!(
            size = self.grid.size(),
            length = self.snake.len(),
            "game started"
        );
        self.publish();
    }

    /// Process one direction input to completion
    pub fn on_direction(&mut self, direction: Direction) -> StepResult {
        if !self.status.is_running() {
            return StepResult::idle(self.status);
        }

        let food = self.grid.food();
        let outcome = match advance(&self.snake, direction, self.grid.size(), food) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.finish(err);
                return StepResult::idle(self.status);
            }
        };

        let (snake, ate_food) = match outcome {
            MoveOutcome::Advanced { snake, ate_food } => (snake, ate_food),
            MoveOutcome::Reversed => {
                debug!(?direction, "ignoring reversal into the snake");
                return StepResult {
                    status: self.status,
                    ate_food: false,
                    reversed: true,
                };
            }
        };

        self.snake = snake;
        self.moves += 1;
        self.direction_slot.publish(Some(direction));
        synchronize(&mut self.grid, &self.snake);

        let head = self.snake.head();
        debug!(
            ?direction,
            x = head.x,
            y = head.y,
            length = self.snake.len(),
            "snake moved"
        );

        if ate_food {
            info!(x = head.x, y = head.y, length = self.snake.len(), "food eaten");
            let _ = self.events.send(GameEvent::FoodEaten(head));
            self.replace_food();
        }

        self.publish();

        StepResult {
            status: self.status,
            ate_food,
            reversed: false,
        }
    }

    fn replace_food(&mut self) {
        match self.placer.place_food(&mut self.grid, &self.snake) {
            Ok(food) => {
                let _ = self.events.send(GameEvent::FoodPlaced(food));
            }
            Err(err) => self.finish(err),
        }
    }

    /// Enter a terminal state. Snake and grid keep their last valid values.
    fn finish(&mut self, err: GameError) {
        if err.is_win() {
            self.status = GameStatus::Won;
            info!(length = self.snake.len(), moves = self.moves, "snake fills the grid");
            let _ = self.events.send(GameEvent::Won);
        } else {
            self.status = GameStatus::Lost(err);
            info!(reason = %err, moves = self.moves, "game over");
            let _ = self.events.send(GameEvent::GameOver(err));
        }
        self.status_slot.publish(self.status);
    }

    fn publish(&self) {
        self.snake_slot.publish(self.snake.clone());
        self.grid_slot.publish(self.grid.clone());
        self.food_slot.publish(self.grid.food());
        self.status_slot.publish(self.status);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves since the last reset
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn grid(&self) -> Arc<Grid> {
        self.grid_slot.get()
    }

    pub fn snake(&self) -> Arc<Snake> {
        self.snake_slot.get()
    }

    pub fn food(&self) -> Option<Position> {
        *self.food_slot.get()
    }

    /// Last direction that moved the snake
    pub fn direction(&self) -> Option<Direction> {
        *self.direction_slot.get()
    }

    pub fn subscribe_grid(&self) -> watch::Receiver<Arc<Grid>> {
        self.grid_slot.subscribe()
    }

    pub fn subscribe_snake(&self) -> watch::Receiver<Arc<Snake>> {
        self.snake_slot.subscribe()
    }

    pub fn subscribe_food(&self) -> watch::Receiver<Arc<Option<Position>>> {
        self.food_slot.subscribe()
    }

    pub fn subscribe_direction(&self) -> watch::Receiver<Arc<Option<Direction>>> {
        self.direction_slot.subscribe()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<Arc<GameStatus>> {
        self.status_slot.subscribe()
    }

    /// Receiver for events fired after this call
    pub fn events(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }
}
