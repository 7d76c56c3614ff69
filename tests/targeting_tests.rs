use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::core::ai::{hunt, Mode, Targeting};
use seabattle::{
    auto_place_fleet, BoardView, Coord, Orientation, PlayerSide, ShipId, Shot, BOARD_SIZE,
};

fn side_with(ship: ShipId, origin: Coord, orientation: Orientation) -> PlayerSide {
    let mut side = PlayerSide::new();
    side.place_ship(ship, origin, orientation).unwrap();
    side
}

#[test]
fn test_target_candidates_around_last_hit() {
    let mut side = side_with(ShipId(0), Coord::new(3, 1), Orientation::Horizontal);
    let mut targeting = Targeting::new(true);

    let shot = side.receive_attack(Coord::new(3, 3)).unwrap();
    targeting.record(Coord::new(3, 3), shot);
    assert_eq!(targeting.memory(), &[Coord::new(3, 3)]);

    let view = BoardView::hidden(&side);
    assert_eq!(
        targeting.target_candidates(&view),
        vec![
            Coord::new(2, 3),
            Coord::new(4, 3),
            Coord::new(3, 2),
            Coord::new(3, 4),
        ]
    );

    // an attacked neighbour drops out
    side.receive_attack(Coord::new(2, 3)).unwrap();
    let view = BoardView::hidden(&side);
    assert_eq!(
        targeting.target_candidates(&view),
        vec![Coord::new(4, 3), Coord::new(3, 2), Coord::new(3, 4)]
    );
}

#[test]
fn test_target_candidates_at_corner() {
    let mut side = side_with(ShipId(4), Coord::new(0, 0), Orientation::Vertical);
    let mut targeting = Targeting::new(true);
    let shot = side.receive_attack(Coord::new(0, 0)).unwrap();
    targeting.record(Coord::new(0, 0), shot);

    let view = BoardView::hidden(&side);
    assert_eq!(
        targeting.target_candidates(&view),
        vec![Coord::new(1, 0), Coord::new(0, 1)]
    );
}

#[test]
fn test_miss_leaves_memory_unchanged() {
    let mut targeting = Targeting::new(true);
    targeting.record(Coord::new(5, 5), Shot::Hit(ShipId(1)));
    targeting.record(Coord::new(5, 6), Shot::Miss);
    assert_eq!(targeting.memory(), &[Coord::new(5, 5)]);
    targeting.record(Coord::new(4, 5), Shot::Sunk(ShipId(1)));
    assert_eq!(targeting.memory(), &[Coord::new(5, 5), Coord::new(4, 5)]);
}

#[test]
fn test_target_mode_picks_neighbor_of_last_hit() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut side = side_with(ShipId(1), Coord::new(6, 2), Orientation::Vertical);
    let mut targeting = Targeting::new(true);
    let shot = side.receive_attack(Coord::new(7, 2)).unwrap();
    targeting.record(Coord::new(7, 2), shot);

    for _ in 0..20 {
        let view = BoardView::hidden(&side);
        let (pick, mode) = targeting.choose(&mut rng, &view).unwrap();
        assert_eq!(mode, Mode::Target);
        assert!(Coord::new(7, 2).neighbors().any(|n| n == pick));
    }
}

#[test]
fn test_sunk_ship_is_forgotten_when_pruning() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut side = side_with(ShipId(4), Coord::new(0, 0), Orientation::Horizontal);
    let mut targeting = Targeting::new(true);
    for c in [Coord::new(0, 0), Coord::new(0, 1)] {
        let shot = side.receive_attack(c).unwrap();
        targeting.record(c, shot);
    }
    assert_eq!(targeting.memory().len(), 2);

    let view = BoardView::hidden(&side);
    let (pick, mode) = targeting.choose(&mut rng, &view).unwrap();
    assert!(targeting.memory().is_empty());
    assert_eq!(mode, Mode::Hunt);
    assert!(view.is_untried(pick));
}

#[test]
fn test_sunk_ship_is_chased_without_pruning() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut side = side_with(ShipId(4), Coord::new(0, 0), Orientation::Horizontal);
    let mut targeting = Targeting::new(false);
    for c in [Coord::new(0, 0), Coord::new(0, 1)] {
        let shot = side.receive_attack(c).unwrap();
        targeting.record(c, shot);
    }

    let view = BoardView::hidden(&side);
    let (pick, mode) = targeting.choose(&mut rng, &view).unwrap();
    assert_eq!(targeting.memory().len(), 2);
    assert_eq!(mode, Mode::Target);
    assert!([Coord::new(1, 1), Coord::new(0, 2)].contains(&pick));
}

#[test]
fn test_pruning_keeps_hits_of_other_ships() {
    let mut side = PlayerSide::new();
    side.place_ship(ShipId(4), Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    side.place_ship(ShipId(2), Coord::new(1, 0), Orientation::Horizontal)
        .unwrap();
    let mut targeting = Targeting::new(true);
    for c in [Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 1)] {
        let shot = side.receive_attack(c).unwrap();
        targeting.record(c, shot);
    }

    targeting.forget_sunk(&BoardView::hidden(&side));
    assert_eq!(targeting.memory(), &[Coord::new(1, 0)]);
}

#[test]
fn test_exhausted_neighbors_fall_back_to_hunt() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut side = side_with(ShipId(0), Coord::new(5, 0), Orientation::Horizontal);
    let mut targeting = Targeting::new(true);
    let shot = side.receive_attack(Coord::new(0, 0)).unwrap();
    assert_eq!(shot, Shot::Miss);
    // pretend (0, 0) was a hit of a ship we have not sunk, with every neighbour tried
    targeting.record(Coord::new(0, 0), Shot::Hit(ShipId(0)));
    side.receive_attack(Coord::new(1, 0)).unwrap();
    side.receive_attack(Coord::new(0, 1)).unwrap();

    let view = BoardView::hidden(&side);
    assert!(targeting.target_candidates(&view).is_empty());
    let (pick, mode) = targeting.choose(&mut rng, &view).unwrap();
    assert_eq!(mode, Mode::Hunt);
    assert!(view.is_untried(pick));
}

#[test]
fn test_hunt_finds_last_cell_and_then_gives_up() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut side = PlayerSide::new();
    let last = Coord::new(BOARD_SIZE - 1, 4);
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if Coord::new(r, c) != last {
                side.receive_attack(Coord::new(r, c)).unwrap();
            }
        }
    }
    let view = BoardView::hidden(&side);
    assert_eq!(hunt(&mut rng, &view), Some(last));

    side.receive_attack(last).unwrap();
    let view = BoardView::hidden(&side);
    assert_eq!(hunt(&mut rng, &view), None);
    assert_eq!(Targeting::new(true).choose(&mut rng, &view), None);
}

#[test]
fn test_off_board_hits_are_not_remembered() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut targeting = Targeting::new(true);
    targeting.record(Coord::new(usize::MAX, 0), Shot::Hit(ShipId(0)));
    targeting.record(Coord::new(0, usize::MAX), Shot::Sunk(ShipId(0)));
    targeting.record(Coord::new(BOARD_SIZE, BOARD_SIZE), Shot::Hit(ShipId(1)));
    assert!(targeting.memory().is_empty());

    let view = BoardView::hidden(&PlayerSide::new());
    let (pick, mode) = targeting.choose(&mut rng, &view).unwrap();
    assert_eq!(mode, Mode::Hunt);
    assert!(view.is_untried(pick));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn choice_is_untried_and_local(seed in any::<u64>(), shots in 0..BOARD_SIZE * BOARD_SIZE - 1, prune in any::<bool>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut side = PlayerSide::new();
        auto_place_fleet(&mut rng, &mut side, 10_000).unwrap();
        let mut targeting = Targeting::new(prune);
        for _ in 0..shots {
            let c = Coord::new(rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
            if let Ok(shot) = side.receive_attack(c) {
                targeting.record(c, shot);
            }
        }

        let view = BoardView::hidden(&side);
        let (pick, mode) = targeting.choose(&mut rng, &view).unwrap();
        prop_assert!(view.is_untried(pick));
        if prune {
            prop_assert!(targeting.memory().iter().all(|&c| !view.is_sunk_cell(c)));
        }
        match mode {
            Mode::Target => {
                let last = *targeting.memory().last().unwrap();
                prop_assert!(last.neighbors().any(|n| n == pick));
            }
            Mode::Hunt => {
                prop_assert!(targeting.target_candidates(&view).is_empty());
            }
        }
    }
}
