//! End-to-end game behavior tests.
//!
//! These cover the observable contract of the state machine: dealing,
//! card conservation, termination, tie-breaking, and lifecycle guards.

use war_engine::core::{CardValue, FixedPermutation, GameRng, Player};
use war_engine::deck::build_deck;
use war_engine::error::GameError;
use war_engine::game::{GamePhase, GameState};

fn cards(values: &[u32]) -> Vec<CardValue> {
    values.iter().copied().map(CardValue::new).collect()
}

fn seeded_game(size: usize, seed: u64) -> GameState {
    let mut rng = GameRng::new(seed);
    let deck = build_deck(size, &mut rng).expect("valid deck size");
    let mut game = GameState::new(Player::new("Ryan"), Player::new("Hugh"));
    game.deal(deck).expect("fresh game accepts a deal");
    game
}

fn total_cards(game: &GameState) -> usize {
    game.player_a().draw_stack().len()
        + game.player_a().score()
        + game.player_b().draw_stack().len()
        + game.player_b().score()
}

#[test]
fn test_deal_partitions_the_deck() {
    for size in [2usize, 4, 10, 52] {
        let game = seeded_game(size, 42);

        assert_eq!(game.player_a().draw_stack().len(), size / 2);
        assert_eq!(game.player_b().draw_stack().len(), size / 2);

        // Disjoint and together exactly {1..size}.
        let mut combined: Vec<u32> = game
            .player_a()
            .draw_stack()
            .iter()
            .chain(game.player_b().draw_stack())
            .map(|c| c.raw())
            .collect();
        combined.sort_unstable();
        assert_eq!(combined, (1..=size as u32).collect::<Vec<_>>());
    }
}

#[test]
fn test_build_deck_rejects_invalid_sizes() {
    let mut rng = GameRng::new(42);
    assert!(matches!(
        build_deck(51, &mut rng),
        Err(GameError::InvalidDeckSize(51))
    ));
    assert!(matches!(
        build_deck(0, &mut rng),
        Err(GameError::InvalidDeckSize(0))
    ));
}

#[test]
fn test_round_conservation_and_monotonicity() {
    let mut game = seeded_game(52, 7);

    while !game.is_game_over() {
        let before_total = total_cards(&game);
        let mut round = game.play_round().unwrap();

        let winner_id = game.apply_round(&mut round).unwrap();
        let (winner, loser) = if winner_id == game.player_a().id() {
            (game.player_a(), game.player_b())
        } else {
            (game.player_b(), game.player_a())
        };

        // No card created or destroyed.
        assert_eq!(total_cards(&game), before_total);
        // Both revealed cards went to the winner.
        let in_play = round.cards_in_play();
        assert!(in_play.iter().all(|c| winner.winning_stack().contains(c)));
        assert!(!in_play.iter().any(|c| loser.winning_stack().contains(c)));
    }

    assert_eq!(total_cards(&game), 52);
}

#[test]
fn test_apply_round_deltas() {
    let mut game = seeded_game(52, 3);
    let mut round = game.play_round().unwrap();

    let draw_a_before = game.player_a().draw_stack().len();
    let draw_b_before = game.player_b().draw_stack().len();
    let score_a_before = game.player_a().score();
    let score_b_before = game.player_b().score();

    let winner_id = game.apply_round(&mut round).unwrap();

    // Both draw stacks shrink by exactly one.
    assert_eq!(game.player_a().draw_stack().len(), draw_a_before - 1);
    assert_eq!(game.player_b().draw_stack().len(), draw_b_before - 1);

    // The winner's winning stack grows by exactly two.
    if winner_id == game.player_a().id() {
        assert_eq!(game.player_a().score(), score_a_before + 2);
        assert_eq!(game.player_b().score(), score_b_before);
    } else {
        assert_eq!(game.player_b().score(), score_b_before + 2);
        assert_eq!(game.player_a().score(), score_a_before);
    }
}

#[test]
fn test_full_deck_terminates_in_26_rounds() {
    let mut game = seeded_game(52, 42);
    let mut rounds = 0;

    while !game.is_game_over() {
        let mut round = game.play_round().unwrap();
        game.apply_round(&mut round).unwrap();
        rounds += 1;
        assert!(rounds <= 26, "game must terminate in exactly 26 rounds");
    }

    assert_eq!(rounds, 26);
    assert_eq!(game.rounds_played(), 26);
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.player_a().score() + game.player_b().score(), 52);
}

#[test]
fn test_scenario_deck_of_four() {
    // Deal order 3,4,1,2: A=[3,1] (top 1), B=[4,2] (top 2).
    let mut shuffler = FixedPermutation::new(cards(&[3, 4, 1, 2]));
    let deck = build_deck(4, &mut shuffler).unwrap();
    let mut game = GameState::new(Player::new("Ryan"), Player::new("Hugh"));
    game.deal(deck).unwrap();

    // Round 1: B wins with 2 over 1.
    let mut round = game.play_round().unwrap();
    let winner = game.apply_round(&mut round).unwrap();
    assert_eq!(winner, game.player_b().id());
    assert_eq!(game.player_a().draw_stack(), &cards(&[3])[..]);
    assert_eq!(game.player_b().draw_stack(), &cards(&[4])[..]);
    assert_eq!(game.player_b().winning_stack(), &cards(&[1, 2])[..]);

    // Round 2: B wins with 4 over 3, game over.
    let mut round = game.play_round().unwrap();
    let winner = game.apply_round(&mut round).unwrap();
    assert_eq!(winner, game.player_b().id());
    assert!(game.is_game_over());
    assert!(game.player_a().winning_stack().is_empty());
    let mut b_cards = game.player_b().winning_stack().to_vec();
    b_cards.sort();
    assert_eq!(b_cards, cards(&[1, 2, 3, 4]));

    // No tie-break needed.
    assert!(!game.is_tied());
    let winner = game.select_winner().unwrap();
    assert_eq!(winner.id(), game.player_b().id());
}

#[test]
fn test_tie_break_goes_to_highest_card() {
    // Deal order 4,1,2,3: A=[4,2], B=[1,3]. B takes 3 over 2, A takes
    // 4 over 1. Scores tie at 2-2; A holds the 4.
    let mut shuffler = FixedPermutation::new(cards(&[4, 1, 2, 3]));
    let deck = build_deck(4, &mut shuffler).unwrap();
    let mut game = GameState::new(Player::new("Ryan"), Player::new("Hugh"));
    game.deal(deck).unwrap();

    while !game.is_game_over() {
        let mut round = game.play_round().unwrap();
        game.apply_round(&mut round).unwrap();
    }

    assert!(game.is_tied());
    let winner = game.select_winner().unwrap();
    assert_eq!(winner.id(), game.player_a().id());
}

#[test]
fn test_lifecycle_guards() {
    // Winner selection before the game ends.
    let game = seeded_game(52, 1);
    assert!(matches!(
        game.select_winner(),
        Err(GameError::GameInProgress)
    ));

    // Playing past the end.
    let mut game = seeded_game(2, 1);
    let mut round = game.play_round().unwrap();
    game.apply_round(&mut round).unwrap();
    assert!(game.is_game_over());
    assert!(matches!(game.play_round(), Err(GameError::GameOver)));

    let mut stale = round.clone();
    assert!(matches!(
        game.apply_round(&mut stale),
        Err(GameError::GameOver)
    ));
}

#[test]
fn test_seeded_games_replay_identically() {
    let mut first = seeded_game(52, 99);
    let mut second = seeded_game(52, 99);

    while !first.is_game_over() {
        let mut round_a = first.play_round().unwrap();
        let mut round_b = second.play_round().unwrap();
        assert_eq!(round_a.cards_in_play(), round_b.cards_in_play());
        first.apply_round(&mut round_a).unwrap();
        second.apply_round(&mut round_b).unwrap();
    }

    assert_eq!(first.player_a().score(), second.player_a().score());
    assert_eq!(first.player_b().score(), second.player_b().score());
}
