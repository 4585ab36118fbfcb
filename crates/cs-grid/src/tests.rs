//! Unit tests for cs-grid.
//!
//! Boards are built in code; column-major literals read sideways, so most
//! tests start from an empty grid and place walls with `set_tile`.

#[cfg(test)]
mod helpers {
    use cs_core::{Position, Tile};

    use crate::Grid;

    pub fn open(w: i32, h: i32, toroidal: bool) -> Grid {
        Grid::new(w, h, Tile::Empty, toroidal).unwrap()
    }

    pub fn not_wall(_: Position, t: Tile) -> bool {
        !t.is_wall()
    }

    /// 10×10 torus split by a full-height wall at x = 5 and another at
    /// x = 0, leaving two 4-wide strips: x ∈ 1..=4 and x ∈ 6..=9.
    pub fn two_strips() -> Grid {
        let mut g = open(10, 10, true);
        for y in 0..10 {
            g.set_tile(Position::new(0, y), Tile::Wall);
            g.set_tile(Position::new(5, y), Tile::Wall);
        }
        g
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use cs_core::{Position, Tile};

    use crate::{Grid, GridError};

    #[test]
    fn non_positive_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 5, Tile::Empty, true),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(Grid::new(3, -1, Tile::Empty, false).is_err());
    }

    #[test]
    fn from_columns_is_column_major() {
        // columns[x][y]
        let board = vec![vec![0, 1, 3], vec![5, 0, 0]];
        let g = Grid::from_columns(&board, false).unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 3);
        assert_eq!(g.tile_at(Position::new(0, 1)), Some(Tile::Wall));
        assert_eq!(g.tile_at(Position::new(0, 2)), Some(Tile::Goal));
        assert_eq!(g.tile_at(Position::new(1, 0)), Some(Tile::BonusGoal));
    }

    #[test]
    fn ragged_board_rejected() {
        let board = vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]];
        assert_eq!(
            Grid::from_columns(&board, true),
            Err(GridError::Ragged { column: 1, expected: 3, got: 2 })
        );
    }

    #[test]
    fn empty_board_rejected() {
        let none: Vec<Vec<i32>> = vec![];
        assert_eq!(Grid::from_columns(&none, true), Err(GridError::EmptyBoard));
        assert_eq!(Grid::from_columns(&[Vec::<i32>::new()], true), Err(GridError::EmptyBoard));
    }

    #[test]
    fn set_tile_returns_previous() {
        let mut g = super::helpers::open(4, 4, false);
        let p = Position::new(1, 2);
        assert_eq!(g.set_tile(p, Tile::Goal), Some(Tile::Empty));
        assert_eq!(g.set_tile(p, Tile::Empty), Some(Tile::Goal));
        assert_eq!(g.set_tile(Position::new(9, 9), Tile::Goal), None);
    }
}

// ── Coordinates & topology ────────────────────────────────────────────────────

#[cfg(test)]
mod topology {
    use cs_core::{Direction, Position, Tile};

    use super::helpers::open;

    #[test]
    fn toroidal_tile_at_wraps() {
        let mut g = open(10, 10, true);
        g.set_tile(Position::new(9, 0), Tile::Wall);
        assert_eq!(g.tile_at(Position::new(-1, 10)), Some(Tile::Wall));
        assert_eq!(g.tile_at(Position::new(19, -10)), Some(Tile::Wall));
    }

    #[test]
    fn bounded_tile_at_off_grid_is_none() {
        let g = open(10, 10, false);
        assert_eq!(g.tile_at(Position::new(-1, 0)), None);
        assert_eq!(g.tile_at(Position::new(0, 10)), None);
        assert!(g.is_wall(Position::new(10, 0)), "off-grid counts as a wall");
    }

    #[test]
    fn neighbors_in_fixed_order_and_wrapped() {
        let g = open(10, 10, true);
        let n: Vec<_> = g.neighbors4(Position::new(0, 9)).collect();
        assert_eq!(
            n,
            vec![
                (Direction::Up, Position::new(0, 0)),
                (Direction::Right, Position::new(1, 9)),
                (Direction::Down, Position::new(0, 8)),
                (Direction::Left, Position::new(9, 9)),
            ]
        );
    }

    #[test]
    fn bounded_corner_has_two_neighbors() {
        let g = open(10, 10, false);
        let dirs: Vec<_> = g.neighbors4(Position::new(0, 0)).map(|(d, _)| d).collect();
        assert_eq!(dirs, vec![Direction::Up, Direction::Right]);
    }

    #[test]
    fn index_roundtrip() {
        let g = open(7, 3, true);
        for (pos, _) in g.tiles() {
            assert_eq!(g.position_of(g.index_of(pos).unwrap()), pos);
        }
        assert_eq!(g.tiles().count(), 21);
    }

    #[test]
    fn toroidal_distance_edges() {
        let g = open(10, 10, true);
        for y in 0..10 {
            assert_eq!(g.toroidal_distance(Position::new(0, y), Position::new(9, y)), 1);
        }
        let a = Position::new(2, 8);
        let b = Position::new(7, 1);
        assert_eq!(g.toroidal_distance(a, b), g.toroidal_distance(b, a));
        assert_eq!(g.toroidal_distance(a, b), 5 + 3);
    }
}

// ── Flood fill ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod flood {
    use cs_core::{Position, Tile};

    use super::helpers::{not_wall, open, two_strips};
    use crate::{Grid, flood_fill};

    #[test]
    fn capped_by_limit() {
        let g = open(10, 10, true);
        assert_eq!(flood_fill(&g, Position::new(5, 5), not_wall, 100), 100);
        assert_eq!(flood_fill(&g, Position::new(5, 5), not_wall, 37), 37);
        assert_eq!(flood_fill(&g, Position::new(5, 5), not_wall, 0), 0);
    }

    #[test]
    fn never_exceeds_component() {
        let g = two_strips();
        // Each strip is 4 × 10 = 40 tiles.
        assert_eq!(flood_fill(&g, Position::new(2, 3), not_wall, 100), 40);
        assert_eq!(flood_fill(&g, Position::new(8, 3), not_wall, 1000), 40);
    }

    #[test]
    fn count_bounded_by_cap_and_component_for_every_start() {
        let g = two_strips();
        for (pos, tile) in g.tiles() {
            if tile.is_wall() {
                continue;
            }
            for cap in [1, 10, 39, 40, 41, 200] {
                let n = flood_fill(&g, pos, not_wall, cap);
                assert!(n <= cap);
                assert!(n <= 40);
                assert_eq!(n, cap.min(40));
            }
        }
    }

    #[test]
    fn start_counts_even_when_impassable() {
        let g = Grid::new(3, 3, Tile::Wall, false).unwrap();
        assert_eq!(flood_fill(&g, Position::new(1, 1), not_wall, 10), 1);
    }

    #[test]
    fn bounded_grid_does_not_wrap() {
        let mut g = open(10, 1, false);
        g.set_tile(Position::new(3, 0), Tile::Wall);
        assert_eq!(flood_fill(&g, Position::new(0, 0), not_wall, 100), 3);

        let mut t = open(10, 1, true);
        t.set_tile(Position::new(3, 0), Tile::Wall);
        assert_eq!(flood_fill(&t, Position::new(0, 0), not_wall, 100), 9);
    }

    #[test]
    fn off_grid_start_is_empty() {
        let g = open(4, 4, false);
        assert_eq!(flood_fill(&g, Position::new(-1, 0), not_wall, 10), 0);
    }
}

// ── Shortest path ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use cs_core::{Direction, Position, Tile};

    use super::helpers::{not_wall, open, two_strips};
    use crate::{all_distances, shortest_path, shortest_path_first_step};

    fn is_goal(_: Position, t: Tile) -> bool {
        t.is_goal()
    }

    #[test]
    fn steps_toward_adjacent_goal() {
        let mut g = open(10, 10, true);
        g.set_tile(Position::new(6, 5), Tile::Goal);
        assert_eq!(
            shortest_path_first_step(&g, Position::new(5, 5), is_goal, not_wall),
            Some(Direction::Right)
        );
    }

    #[test]
    fn wraps_when_shorter() {
        let mut g = open(10, 10, true);
        g.set_tile(Position::new(9, 5), Tile::Goal);
        assert_eq!(
            shortest_path_first_step(&g, Position::new(0, 5), is_goal, not_wall),
            Some(Direction::Left)
        );

        let mut b = open(10, 10, false);
        b.set_tile(Position::new(9, 5), Tile::Goal);
        assert_eq!(
            shortest_path_first_step(&b, Position::new(0, 5), is_goal, not_wall),
            Some(Direction::Right)
        );
    }

    #[test]
    fn start_tile_is_not_a_goal() {
        let mut g = open(5, 5, true);
        g.set_tile(Position::new(2, 2), Tile::Goal);
        assert_eq!(shortest_path_first_step(&g, Position::new(2, 2), is_goal, not_wall), None);
    }

    #[test]
    fn ties_broken_by_enumeration_order() {
        // Goal diagonally up-right: Up and Right both start shortest routes.
        let mut g = open(10, 10, true);
        g.set_tile(Position::new(6, 6), Tile::Goal);
        assert_eq!(
            shortest_path_first_step(&g, Position::new(5, 5), is_goal, not_wall),
            Some(Direction::Up)
        );
        // Down-left: Down is enumerated before Left.
        let mut g = open(10, 10, true);
        g.set_tile(Position::new(4, 4), Tile::Goal);
        assert_eq!(
            shortest_path_first_step(&g, Position::new(5, 5), is_goal, not_wall),
            Some(Direction::Down)
        );
    }

    #[test]
    fn routes_around_walls() {
        let mut g = open(7, 7, false);
        // Wall directly right of start, goal behind it.
        g.set_tile(Position::new(4, 3), Tile::Wall);
        g.set_tile(Position::new(4, 2), Tile::Wall);
        g.set_tile(Position::new(5, 3), Tile::Goal);
        assert_eq!(
            shortest_path_first_step(&g, Position::new(3, 3), is_goal, not_wall),
            Some(Direction::Up)
        );
    }

    #[test]
    fn unreachable_goal_is_none() {
        let mut g = two_strips();
        g.set_tile(Position::new(8, 8), Tile::Goal);
        assert_eq!(shortest_path_first_step(&g, Position::new(2, 2), is_goal, not_wall), None);
    }

    #[test]
    fn first_step_never_enters_impassable_tile() {
        let mut g = open(9, 9, true);
        g.set_tile(Position::new(7, 7), Tile::Goal);
        let blocked = |p: Position| p == Position::new(4, 5) || p == Position::new(5, 4);
        let step = shortest_path_first_step(
            &g,
            Position::new(4, 4),
            is_goal,
            |p, t| !t.is_wall() && !blocked(p),
        )
        .unwrap();
        let dest = Position::new(4, 4).step(step).wrapped(9, 9);
        assert!(!blocked(dest), "stepped {step} into a blocked tile");
    }

    #[test]
    fn full_path_matches_distance_field() {
        let g = two_strips();
        let start = Position::new(1, 0);
        let goal = Position::new(4, 6);
        let path = shortest_path(&g, start, goal, not_wall).unwrap();
        let field = all_distances(&g, start, not_wall);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert_eq!(path.len() as u32, field.get(goal).unwrap() + 1);
        for pair in path.windows(2) {
            assert_eq!(g.toroidal_distance(pair[0], pair[1]), 1);
        }
    }

    #[test]
    fn trivial_and_missing_paths() {
        let g = two_strips();
        let p = Position::new(2, 2);
        assert_eq!(shortest_path(&g, p, p, not_wall), Some(vec![p]));
        assert_eq!(shortest_path(&g, p, Position::new(7, 2), not_wall), None);
    }
}

// ── Distance field ────────────────────────────────────────────────────────────

#[cfg(test)]
mod distances {
    use cs_core::Position;

    use super::helpers::{not_wall, open, two_strips};
    use crate::all_distances;

    #[test]
    fn open_torus_depth_equals_torus_metric() {
        let g = open(8, 6, true);
        let start = Position::new(1, 4);
        let field = all_distances(&g, start, not_wall);
        for (pos, _) in g.tiles() {
            assert_eq!(field.get(pos), Some(g.toroidal_distance(start, pos)));
        }
        assert_eq!(field.reached_count(), 48);
        assert_eq!(field.max_depth(), Some(4 + 3));
    }

    #[test]
    fn walls_and_other_components_unreached() {
        let g = two_strips();
        let field = all_distances(&g, Position::new(2, 2), not_wall);
        assert_eq!(field.get(Position::new(2, 2)), Some(0));
        assert!(!field.is_reached(Position::new(0, 2)), "wall");
        assert!(!field.is_reached(Position::new(5, 2)), "wall");
        assert!(!field.is_reached(Position::new(7, 2)), "other strip");
        assert_eq!(field.reached_count(), 40);
    }

    #[test]
    fn off_grid_start_reaches_nothing() {
        let g = open(3, 3, false);
        let field = all_distances(&g, Position::new(3, 3), not_wall);
        assert_eq!(field.reached_count(), 0);
        assert_eq!(field.max_depth(), None);
        assert_eq!(field.get(Position::new(-1, 0)), None);
    }

    #[test]
    fn torus_field_lookups_wrap() {
        let g = open(10, 10, true);
        let field = all_distances(&g, Position::new(0, 0), not_wall);
        assert_eq!(field.get(Position::new(-1, 0)), Some(1));
        assert_eq!(field.get(Position::new(10, 10)), Some(0));
        assert_eq!(field.get(Position::new(3, -2)), field.get(Position::new(3, 8)));
    }
}
