//! Unit tests for cs-core primitives.

#[cfg(test)]
mod pos {
    use crate::{CoreError, Direction, Position};

    #[test]
    fn move_order_is_up_right_down_left() {
        assert_eq!(
            Direction::MOVES,
            [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
        );
        assert!(!Direction::MOVES.contains(&Direction::Stay));
    }

    #[test]
    fn deltas() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::Up), Position::new(5, 6));
        assert_eq!(p.step(Direction::Right), Position::new(6, 5));
        assert_eq!(p.step(Direction::Down), Position::new(5, 4));
        assert_eq!(p.step(Direction::Left), Position::new(4, 5));
        assert_eq!(p.step(Direction::Stay), p);
    }

    #[test]
    fn wrapped_is_never_negative() {
        assert_eq!(Position::new(-1, -1).wrapped(10, 7), Position::new(9, 6));
        assert_eq!(Position::new(23, 7).wrapped(10, 7), Position::new(3, 0));
        assert_eq!(Position::new(-21, 0).wrapped(10, 7), Position::new(9, 0));
    }

    #[test]
    fn torus_distance_wraps_each_axis() {
        for y in 0..10 {
            assert_eq!(Position::new(0, y).torus_distance(Position::new(9, y), 10, 10), 1);
        }
        assert_eq!(Position::new(0, 0).torus_distance(Position::new(9, 9), 10, 10), 2);
        assert_eq!(Position::new(0, 0).torus_distance(Position::new(5, 0), 10, 10), 5);
        assert_eq!(Position::new(1, 1).torus_distance(Position::new(1, 1), 10, 10), 0);
    }

    #[test]
    fn torus_distance_is_symmetric() {
        let (w, h) = (7, 4);
        for ax in -2..9 {
            for ay in -1..5 {
                for bx in 0..w {
                    for by in 0..h {
                        let a = Position::new(ax, ay);
                        let b = Position::new(bx, by);
                        assert_eq!(a.torus_distance(b, w, h), b.torus_distance(a, w, h));
                    }
                }
            }
        }
    }

    #[test]
    fn torus_distance_triangle_inequality() {
        let (w, h) = (5, 6);
        let all: Vec<Position> = (0..w)
            .flat_map(|x| (0..h).map(move |y| Position::new(x, y)))
            .collect();
        for &a in &all {
            for &b in &all {
                for &c in all.iter().step_by(7) {
                    let ab = a.torus_distance(b, w, h);
                    let ac = a.torus_distance(c, w, h);
                    let cb = c.torus_distance(b, w, h);
                    assert!(ab <= ac + cb, "{a} {b} via {c}");
                }
            }
        }
    }

    #[test]
    fn parse_xy() {
        assert_eq!("5,5".parse::<Position>().unwrap(), Position::new(5, 5));
        assert_eq!(" 3 , -2 ".parse::<Position>().unwrap(), Position::new(3, -2));
    }

    #[test]
    fn parse_ignores_trailing_type_field() {
        assert_eq!("6,5,0".parse::<Position>().unwrap(), Position::new(6, 5));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "5", "5,", "a,b", "1.5,2", ",3"] {
            let err = bad.parse::<Position>().unwrap_err();
            assert!(matches!(err, CoreError::Parse(_)), "{bad:?} -> {err:?}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(1, -2).to_string(), "(1, -2)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}

#[cfg(test)]
mod tile {
    use crate::Tile;

    #[test]
    fn tag_roundtrip() {
        for tag in [0, 1, 3, 5, 2, 9, -1] {
            assert_eq!(Tile::from_tag(tag).tag(), tag);
        }
    }

    #[test]
    fn classification() {
        assert!(Tile::from(1).is_wall());
        assert!(Tile::from(3).is_goal());
        assert!(Tile::from(5).is_goal());
        assert!(!Tile::from(0).is_goal());
        assert!(!Tile::Other(2).is_wall());
        assert_eq!(Tile::from(7), Tile::Other(7));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, TacticsConfig};

    #[test]
    fn defaults_are_reference_tuning() {
        let cfg = TacticsConfig::default();
        assert_eq!(cfg.panic_distance, 4);
        assert_eq!(cfg.min_safe_area, 80);
        assert_eq!(cfg.flood_cap, 100);
        assert_eq!(cfg.stuck_threshold, 5);
        assert_eq!(cfg.escape.distance_weight, 10);
        assert_eq!(cfg.escape.cramped_area, 20);
        assert_eq!(cfg.escape.tight_area, 50);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn safe_area_above_cap_rejected() {
        let cfg = TacticsConfig { min_safe_area: 101, ..TacticsConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_stuck_threshold_rejected() {
        let cfg = TacticsConfig { stuck_threshold: 0, ..TacticsConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_area_breakpoints_rejected() {
        let mut cfg = TacticsConfig::default();
        cfg.escape.cramped_area = 60;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0..1000u32), r2.gen_range(0..1000u32));
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.r#gen();
        let b: u64 = r1.r#gen();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::from_seed(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }
}
