//! Property-based tests.
//!
//! These tests check properties that must hold for any seed or seating:
//! card conservation through whole games, distance symmetry and mount
//! monotonicity, and that legality checks never change the game.

use proptest::prelude::*;

use rust_kingdoms::cards::{CardSpec, Horse, Suit};
use rust_kingdoms::core::{DeckPreset, PlayerId};
use rust_kingdoms::game::{GameBuilder, Progress, SeatConfig};
use rust_kingdoms::heroes::Hero;
use rust_kingdoms::policy::{PassivePolicy, RandomPolicy};
use rust_kingdoms::rules::Role;

fn seats(builder: GameBuilder, count: usize) -> GameBuilder {
    let mut builder = builder.seat(SeatConfig::new("Lord", Hero::liu_bei(), Role::Lord));
    for i in 1..count {
        let role = if i % 2 == 0 { Role::Traitor } else { Role::Rebel };
        builder = builder.seat(SeatConfig::new(format!("S{i}"), Hero::zhao_yun(), role));
    }
    builder
}

fn quiet_table(count: usize) -> GameBuilder {
    seats(
        GameBuilder::new()
            .deck(DeckPreset::Stacked(Vec::new()))
            .initial_hand_size(0)
            .policy(PassivePolicy),
        count,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Test that cards are neither created nor lost over a random game.
    #[test]
    fn test_cards_conserved(seed in any::<u64>(), count in 2usize..=8) {
        let mut game = seats(GameBuilder::new().seed(seed), count)
            .policy(RandomPolicy::new(seed))
            .build()
            .unwrap();
        let total = game.total_cards();

        for _ in 0..60 {
            let progress = game.advance().unwrap();
            prop_assert_eq!(game.counted_cards(), total);
            if let Progress::GameOver(_) = progress {
                break;
            }
        }
        prop_assert_eq!(game.total_cards(), total);
    }

    /// Test that distance is symmetric and zero only to oneself without mounts.
    #[test]
    fn test_distance_symmetric(count in 2usize..=8) {
        let game = quiet_table(count).build().unwrap();
        for a in PlayerId::all(count) {
            for b in PlayerId::all(count) {
                prop_assert_eq!(game.distance(a, b), game.distance(b, a));
                prop_assert_eq!(game.distance(a, b) == 0, a == b);
                prop_assert!(game.distance(a, b) as usize <= count / 2);
            }
        }
    }

    /// Test that a plus mount never brings anyone closer and a minus mount
    /// never pushes anyone away.
    #[test]
    fn test_mounts_monotone(count in 3usize..=8, wearer in 0u8..8) {
        let wearer = PlayerId::new(wearer % count as u8);
        let plain = quiet_table(count).build().unwrap();
        let plus = quiet_table(count)
            .equipment(wearer, vec![CardSpec::plus_horse(Horse::RedHare, Suit::Heart, 5)])
            .build()
            .unwrap();
        let minus = quiet_table(count)
            .equipment(wearer, vec![CardSpec::minus_horse(Horse::HexMark, Suit::Club, 5)])
            .build()
            .unwrap();

        for other in PlayerId::all(count).filter(|&p| p != wearer) {
            prop_assert!(plus.distance(other, wearer) >= plain.distance(other, wearer));
            prop_assert_eq!(plus.distance(wearer, other), plain.distance(wearer, other));
            prop_assert!(minus.distance(wearer, other) <= plain.distance(wearer, other));
            prop_assert!(minus.distance(wearer, other) >= 1);
        }
    }

    /// Test that asking about legality answers the same way twice and leaves
    /// the game untouched.
    #[test]
    fn test_legality_checks_are_pure(seed in any::<u64>(), index in 0usize..8, target in 0u8..5) {
        let mut game = GameBuilder::new()
            .seed(seed)
            .seat(SeatConfig::new("Lord", Hero::lu_bu(), Role::Lord).interactive())
            .seat(SeatConfig::new("A", Hero::zhang_fei(), Role::Rebel))
            .seat(SeatConfig::new("B", Hero::cao_cao(), Role::Rebel))
            .seat(SeatConfig::new("C", Hero::zhao_yun(), Role::Loyalist))
            .seat(SeatConfig::new("D", Hero::hua_tuo(), Role::Traitor))
            .policy(PassivePolicy)
            .build()
            .unwrap();
        prop_assert_eq!(game.advance().unwrap(), Progress::AwaitingAction(PlayerId::new(0)));

        let player = game.current_player();
        let targets = [PlayerId::new(target)];
        let hand = game.hand(player).to_vec();
        let stats = game.stats().clone();

        let first = game.can_play(player, index, &targets);
        let second = game.can_play(player, index, &targets);
        prop_assert_eq!(first, second);
        prop_assert_eq!(game.legal_actions(player), game.legal_actions(player));
        prop_assert_eq!(game.hand(player), hand.as_slice());
        prop_assert_eq!(game.stats(), &stats);
    }
}
