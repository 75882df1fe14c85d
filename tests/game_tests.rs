//! Whole-game tests: seeded computer tables played to the end.

use liars_bar::agents::{FnAgent, ScriptedAgent};
use liars_bar::cards::Card;
use liars_bar::core::config::REVOLVER_CHAMBERS;
use liars_bar::core::{Action, AiConfig, PlayerId, PlayerKind};
use liars_bar::events::{EventLog, GameEvent, NullSink};
use liars_bar::game::GameBuilder;
use liars_bar::rules::RoundEnd;
use proptest::prelude::*;

/// Run a seeded all-computer game and return its event log.
fn play(players: usize, seed: u64) -> (Option<PlayerId>, u32, EventLog) {
    let mut game = GameBuilder::new().player_count(players).seed(seed).build();
    let mut log = EventLog::new();
    let outcome = game.run(&mut log).unwrap();
    (outcome.winner, outcome.rounds, log)
}

#[test]
fn test_same_seed_same_game() {
    let (winner_a, rounds_a, log_a) = play(4, 99);
    let (winner_b, rounds_b, log_b) = play(4, 99);

    assert_eq!(winner_a, winner_b);
    assert_eq!(rounds_a, rounds_b);
    assert_eq!(log_a, log_b);
}

#[test]
fn test_game_sizes() {
    for players in 2..=4 {
        let (winner, rounds, log) = play(players, 7);
        assert!(winner.is_some());
        assert!(rounds >= (players - 1) as u32);
        assert_eq!(
            log.count(|e| matches!(e, GameEvent::PlayerEliminated { .. })),
            players - 1
        );
    }
}

#[test]
fn test_oversized_table_still_finishes() {
    let (winner, _, log) = play(6, 3);
    assert!(winner.is_some());
    // The 20-card deck only covers four full hands.
    assert!(log.iter().any(|e| matches!(e, GameEvent::CardsDealt { count: 0, .. })));
}

#[test]
fn test_step_round_carries_starter() {
    let mut game = GameBuilder::new().player_count(3).seed(21).build();
    let mut expected_starter = game.state().next_starter;

    while !game.is_over() {
        let mut log = EventLog::new();
        let end = game.step_round(&mut log).unwrap().unwrap();

        let started = log.iter().find_map(|e| match e {
            GameEvent::RoundStarted { starting_player, .. } => Some(*starting_player),
            _ => None,
        });
        assert_eq!(started, Some(expected_starter));

        if let RoundEnd::Accusation(outcome) = end {
            assert_eq!(game.state().next_starter, outcome.next_starter);
            assert!(!game.state().player(outcome.next_starter).is_eliminated() || game.is_over());
        }
        expected_starter = game.state().next_starter;
    }
}

#[test]
fn test_human_seat_through_closure() {
    // A "human" who always plays their first Liar if they have one.
    let human = FnAgent::new(|view, _rng| {
        let pick = view.hand.iter().position(|&c| c == Card::Liar).unwrap_or(0);
        Action::play(&[pick])
    })
    .reprompt();

    let mut game = GameBuilder::new()
        .player_count(3)
        .seed(5)
        .ai(AiConfig::default().with_accuse_chance(0.5))
        .human(PlayerId::new(0), human)
        .build();

    assert_eq!(game.state().player(PlayerId::new(0)).kind(), PlayerKind::Human);
    let outcome = game.run(&mut NullSink).unwrap();
    assert!(outcome.winner.is_some());
}

#[test]
fn test_scripted_seat_falls_back_after_script() {
    let mut game = GameBuilder::new()
        .player_count(2)
        .seed(8)
        .provider(PlayerId::new(1), ScriptedAgent::new([Action::play(&[0, 1])]))
        .build();

    let outcome = game.run(&mut NullSink).unwrap();
    assert!(outcome.winner.is_some());
}

#[test]
fn test_history_matches_events() {
    let mut game = GameBuilder::new().player_count(4).seed(31).build();
    let mut log = EventLog::new();
    game.run(&mut log).unwrap();

    let history = game.state().history();
    let plays = history.iter().filter(|r| !r.action.is_accusation()).count();
    let accusations = history.iter().filter(|r| r.action.is_accusation()).count();
    let forced = history.iter().filter(|r| r.forced).count();

    assert_eq!(plays, log.count(|e| matches!(e, GameEvent::CardsPlayed { .. })));
    assert_eq!(accusations, log.count(|e| matches!(e, GameEvent::AccusationMade { .. })));
    assert_eq!(
        forced,
        log.count(|e| matches!(e, GameEvent::AccusationMade { forced: true, .. }))
    );
    assert_eq!(accusations as u32, game.state().round_number);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_games_end_with_one_survivor(seed in any::<u64>(), players in 2usize..=4) {
        let mut game = GameBuilder::new().player_count(players).seed(seed).build();
        let mut eliminated: Vec<PlayerId> = Vec::new();

        while !game.is_over() {
            let mut log = EventLog::new();
            game.step_round(&mut log).unwrap();

            // Elimination is monotonic: everyone out stays out.
            for &out in &eliminated {
                prop_assert!(game.state().player(out).is_eliminated());
            }
            for e in log.iter() {
                if let GameEvent::PlayerEliminated { player } = e {
                    prop_assert!(!eliminated.contains(player));
                    eliminated.push(*player);
                }
            }

            for (_, p) in game.state().players().iter() {
                prop_assert!(p.revolver().pulled() <= REVOLVER_CHAMBERS);
                prop_assert_eq!(p.revolver().is_loaded(), !p.is_eliminated());
            }
        }

        prop_assert_eq!(eliminated.len(), players - 1);
        prop_assert!(game.state().winner().is_some());
    }
}
