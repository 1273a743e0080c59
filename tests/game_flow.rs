use std::collections::HashSet;

use grid_snake::game::{
    Direction, GameConfig, GameEngine, GameError, GameEvent, GameStatus, Position,
};
use proptest::prelude::*;

fn direction_between(from: Position, to: Position) -> Direction {
    match (to.x - from.x, to.y - from.y) {
        (1, 0) => Direction::Right,
        (-1, 0) => Direction::Left,
        (0, 1) => Direction::Down,
        (0, -1) => Direction::Up,
        delta => panic!("cells are not adjacent: {:?}", delta),
    }
}

/// Closed tour of a 4x4 grid: zig-zag over columns 1..=3, back up column 0
#[rustfmt::skip]
fn tour() -> Vec<Position> {
    [
        (0, 0), (1, 0), (2, 0), (3, 0),
        (3, 1), (2, 1), (1, 1),
        (1, 2), (2, 2), (3, 2),
        (3, 3), (2, 3), (1, 3), (0, 3),
        (0, 2), (0, 1),
    ]
    .into_iter()
    .map(|(x, y)| Position::new(x, y))
    .collect()
}

fn assert_grid_matches(engine: &GameEngine) {
    let grid = engine.grid();
    let snake = engine.snake();

    let flagged: HashSet<Position> = grid.snake_positions().into_iter().collect();
    assert_eq!(flagged, snake.occupancy());

    let food = grid.food_positions();
    assert!(food.len() <= 1);
    assert_eq!(food.first().copied(), engine.food());
    if let Some(food) = engine.food() {
        assert!(!snake.contains(food));
    }
}

#[test]
fn test_following_a_tour_fills_the_grid() {
    let path = tour();
    let config = GameConfig::new(4)
        .with_snake(vec![path[1], path[0]])
        .with_seed(2024);
    let mut engine = GameEngine::new(config).unwrap();
    let mut events = engine.events();

    let mut at = 1;
    let mut eaten = 0;
    for _ in 0..16 * 16 {
        let next = (at + 1) % path.len();
        let result = engine.on_direction(direction_between(path[at], path[next]));
        at = next;

        assert!(!result.reversed);
        if result.ate_food {
            eaten += 1;
        }
        assert_grid_matches(&engine);

        if result.terminated() {
            break;
        }
    }

    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(eaten, 14);
    assert_eq!(engine.snake().len(), 16);
    assert_eq!(engine.snake().length, 16);
    assert_eq!(engine.food(), None);

    let fired: Vec<GameEvent> = std::iter::from_fn(|| events.try_recv().ok()).collect();
    let eaten_events = fired
        .iter()
        .filter(|e| matches!(e, GameEvent::FoodEaten(_)))
        .count();
    let placed_events = fired
        .iter()
        .filter(|e| matches!(e, GameEvent::FoodPlaced(_)))
        .count();
    assert_eq!(eaten_events, 14);
    // Every meal but the last one is followed by a new placement
    assert_eq!(placed_events, 13);
    assert_eq!(fired.last(), Some(&GameEvent::Won));
}

#[test]
fn test_each_meal_places_food_once() {
    let config = GameConfig::new(6)
        .with_snake(vec![Position::new(3, 3)])
        .with_seed(7);
    let mut engine = GameEngine::new(config).unwrap();
    let mut events = engine.events();

    // A single-cell snake can walk straight to the food without hitting itself
    let food = engine.food().unwrap();
    let mut result = None;
    while engine.snake().head() != food {
        let head = engine.snake().head();
        let direction = if head.x < food.x {
            Direction::Right
        } else if head.x > food.x {
            Direction::Left
        } else if head.y < food.y {
            Direction::Down
        } else {
            Direction::Up
        };
        result = Some(engine.on_direction(direction));
    }

    assert!(result.unwrap().ate_food);
    assert!(!engine.grid().cell(food).unwrap().is_food);
    assert!(engine.grid().cell(food).unwrap().is_snake);
    assert_eq!(engine.snake().len(), 2);
    assert_grid_matches(&engine);

    let new_food = engine.food().unwrap();
    assert_eq!(events.try_recv(), Ok(GameEvent::FoodEaten(food)));
    assert_eq!(events.try_recv(), Ok(GameEvent::FoodPlaced(new_food)));
    assert!(events.try_recv().is_err());
}

#[test]
fn test_self_collision_keeps_last_state() {
    // Hook shape: moving Down from (2,1) hits (2,2)
    let config = GameConfig::new(5)
        .with_snake(vec![
            Position::new(2, 1),
            Position::new(3, 1),
            Position::new(3, 2),
            Position::new(2, 2),
            Position::new(1, 2),
        ])
        .with_seed(3);
    let mut engine = GameEngine::new(config).unwrap();
    let snake = engine.snake();
    let grid = engine.grid();
    let mut status_rx = engine.subscribe_status();

    let result = engine.on_direction(Direction::Down);

    assert_eq!(
        result.status,
        GameStatus::Lost(GameError::SelfCollision(Position::new(2, 2)))
    );
    assert_eq!(engine.snake(), snake);
    assert_eq!(engine.grid(), grid);
    assert!(status_rx.has_changed().unwrap());
}

#[test]
fn test_every_wall_ends_the_game() {
    let n = 4;
    let cases = [
        (Position::new(0, 1), Direction::Left, Position::new(-1, 1)),
        (Position::new(3, 1), Direction::Right, Position::new(n, 1)),
        (Position::new(1, 0), Direction::Up, Position::new(1, -1)),
        (Position::new(1, 3), Direction::Down, Position::new(1, n)),
    ];

    for (head, direction, off_grid) in cases {
        let config = GameConfig::new(n as usize)
            .with_snake(vec![head])
            .with_seed(1);
        let mut engine = GameEngine::new(config).unwrap();
        let snake = engine.snake();

        let result = engine.on_direction(direction);

        assert_eq!(
            result.status,
            GameStatus::Lost(GameError::OutOfBounds(off_grid))
        );
        assert_eq!(engine.snake(), snake);
        assert_eq!(engine.moves(), 0);
    }
}

#[test]
fn test_single_cell_grid_is_won_at_start() {
    let config = GameConfig::new(1).with_snake(vec![Position::new(0, 0)]);
    let mut engine = GameEngine::new(config).unwrap();

    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.food(), None);

    let result = engine.on_direction(Direction::Right);
    assert_eq!(result.status, GameStatus::Won);
    assert_eq!(engine.moves(), 0);
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_grid_never_goes_stale(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any_direction(), 1..60),
    ) {
        let config = GameConfig::new(6).with_seed(seed);
        let mut engine = GameEngine::new(config).unwrap();

        for direction in inputs {
            let snake = engine.snake();
            let grid = engine.grid();
            let moves = engine.moves();

            let result = engine.on_direction(direction);

            let lost = matches!(result.status, GameStatus::Lost(_));
            if result.reversed || lost {
                prop_assert_eq!(engine.snake(), snake);
                prop_assert_eq!(engine.grid(), grid);
                prop_assert_eq!(engine.moves(), moves);
            }

            let grid = engine.grid();
            let flagged: HashSet<Position> = grid.snake_positions().into_iter().collect();
            prop_assert_eq!(flagged, engine.snake().occupancy());
            prop_assert!(grid.food_positions().len() <= 1);
            if let Some(food) = engine.food() {
                prop_assert!(!engine.snake().contains(food));
            }

            if result.terminated() {
                break;
            }
        }
    }
}
