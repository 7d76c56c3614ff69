use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::prelude::*;
use seabattle::{BOARD_SIZE, TOTAL_SHIP_CELLS};

/// Human side picks uniformly among untried cells until the game ends.
fn play_out(seed: u64, prune: bool) -> GameSession {
    let config = EngineConfig {
        prune_sunk_hits: prune,
        ..EngineConfig::seeded(seed)
    };
    let mut session = GameSession::new(config).unwrap();
    session.auto_place_human().unwrap();
    let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
    let mut autopilot = AiPlayer::new();
    while session.phase() == Phase::Combat {
        let target = session.hidden_view(Side::Opponent);
        let own = session.own_view(Side::Human);
        let coord = autopilot.select_target(&mut rng, &target, &own).unwrap();
        let report = session.attack(coord).unwrap();
        autopilot.handle_guess_result(report.human.coord, report.human.shot);
    }
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn games_terminate_with_one_winner(seed in any::<u64>(), prune in any::<bool>()) {
        let session = play_out(seed, prune);
        let status = session.status();
        prop_assert_eq!(status.phase, Phase::GameOver);
        prop_assert_eq!(status.turn, None);
        let winner = status.winner.unwrap();
        prop_assert!(session.side(winner.other()).all_sunk());
        prop_assert!(!session.side(winner).all_sunk());

        let human = session.shots_fired(Side::Human);
        let opponent = session.shots_fired(Side::Opponent);
        prop_assert!(session.shots_fired(winner) >= TOTAL_SHIP_CELLS);
        prop_assert!(human <= BOARD_SIZE * BOARD_SIZE);
        prop_assert!(opponent <= BOARD_SIZE * BOARD_SIZE);
        match winner {
            Side::Human => prop_assert_eq!(opponent, human - 1),
            Side::Opponent => prop_assert_eq!(opponent, human),
        }
    }

    #[test]
    fn nobody_fires_twice_at_a_cell(seed in any::<u64>(), prune in any::<bool>()) {
        let mut session = play_out(seed, prune);
        let mut seen = [HashSet::new(), HashSet::new()];
        let mut game_overs = 0;
        for event in session.drain_events() {
            match event {
                GameEvent::AttackResolved { attacker, coord, .. } => {
                    let idx = match attacker {
                        Side::Human => 0,
                        Side::Opponent => 1,
                    };
                    prop_assert!(seen[idx].insert(coord), "{:?} fired twice at {}", attacker, coord);
                }
                GameEvent::GameOver { .. } => game_overs += 1,
                _ => {}
            }
        }
        prop_assert_eq!(game_overs, 1);
        prop_assert_eq!(seen[0].len(), session.shots_fired(Side::Human));
        prop_assert_eq!(seen[1].len(), session.shots_fired(Side::Opponent));
    }

    #[test]
    fn simulated_games_are_reproducible(seed in any::<u64>()) {
        let first = simulate(EngineConfig::seeded(seed)).unwrap();
        let second = simulate(EngineConfig::seeded(seed)).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.seed, Some(seed));
    }
}
