//! Round and session integration tests.

#![allow(clippy::float_cmp)]

use std::io::Cursor;

use bjsim::{
    ActionError, Card, Choice, Deck, Game, GameOptions, GameState, Hand, Label, PlayError, Rank,
    Replay, ReplayPolicy, Round, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn stacked_deck(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

fn round_from_draws(draws: &[Card]) -> Round {
    Round::new(stacked_deck(draws), &GameOptions::default())
}

fn play_scripted(round: Round, script: &str) -> (bjsim::RoundResult, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let result = round.play(&mut input, &mut output).unwrap();
    (result, String::from_utf8(output).unwrap())
}

/// Finds a seed whose first `rounds` shuffles never deal the player 21 up front.
fn seed_without_naturals(rounds: usize) -> u64 {
    (0..)
        .find(|&seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..rounds).all(|_| {
                let mut deck = Deck::new();
                deck.shuffle(&mut rng);
                let cards = deck.cards();
                let opening: Hand = [cards[cards.len() - 1], cards[cards.len() - 3]]
                    .into_iter()
                    .collect();
                opening.value() < 21
            })
        })
        .unwrap()
}

#[test]
fn initial_deal_alternates_player_and_dealer() {
    let mut round = round_from_draws(&[
        card(Rank::Eight, Suit::Hearts),   // player
        card(Rank::Six, Suit::Clubs),      // dealer
        card(Rank::Seven, Suit::Diamonds), // player
        card(Rank::Ten, Suit::Spades),     // dealer
    ]);
    assert_eq!(round.state(), GameState::Setup);

    round.deal_initial().unwrap();
    assert_eq!(round.state(), GameState::PlayerTurn);
    assert_eq!(round.player().to_string(), "8H 7D");
    assert_eq!(round.dealer().to_string(), "6C 10S");
    assert_eq!(round.cards_remaining(), 0);
}

#[test]
fn natural_twenty_one_skips_player_turn() {
    let mut round = round_from_draws(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
    ]);

    round.deal_initial().unwrap();
    assert_eq!(round.state(), GameState::DealerTurn);
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn hit_then_stand_passes_to_dealer_once() {
    let mut round = round_from_draws(&[
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Four, Suit::Hearts), // player hit
        card(Rank::Five, Suit::Clubs),  // dealer draw
    ]);

    round.deal_initial().unwrap();
    assert_eq!(round.apply(Choice::Hit).unwrap(), Some(card(Rank::Four, Suit::Hearts)));
    assert_eq!(round.player().value(), 19);
    assert_eq!(round.state(), GameState::PlayerTurn);

    assert_eq!(round.apply(Choice::Stand).unwrap(), None);
    assert_eq!(round.state(), GameState::DealerTurn);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidState);

    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Rank::Five, Suit::Clubs)]);
    assert_eq!(round.state(), GameState::Resolution);
    assert_eq!(round.dealer_play().unwrap_err(), ActionError::InvalidState);

    let result = round.result().unwrap();
    assert_eq!(result.player.value, 19);
    assert_eq!(result.dealer.value, 21);
    assert_eq!(result.dealer.odds.label, Some(Label::Blackjack));
    assert_eq!(result.dealer_draws, 1);
}

#[test]
fn busting_ends_player_turn() {
    let mut round = round_from_draws(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Seven, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ]);

    round.deal_initial().unwrap();
    round.hit().unwrap();
    assert!(round.player().is_bust());
    assert_eq!(round.state(), GameState::DealerTurn);

    // Dealer stands on 17 even though the player already lost.
    assert!(round.dealer_play().unwrap().is_empty());
    let result = round.result().unwrap();
    assert_eq!(result.player.odds.label, Some(Label::Bust));
    assert_eq!(result.player.odds.probability, 0.0);
}

#[test]
fn dealer_draws_below_seventeen_regardless_of_player() {
    let mut round = round_from_draws(&[
        card(Rank::Two, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
    ]);

    round.deal_initial().unwrap();
    round.stand().unwrap();

    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn.len(), 3);
    assert_eq!(round.dealer().value(), 18);
    assert_eq!(round.player().value(), 5);
    assert_eq!(round.cards_remaining(), 1);
}

#[test]
fn dealer_soft_seventeen_rule() {
    let draws = [
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Six, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
    ];

    let mut stands = round_from_draws(&draws);
    stands.deal_initial().unwrap();
    stands.stand().unwrap();
    assert!(stands.dealer_play().unwrap().is_empty());
    assert_eq!(stands.dealer().value(), 17);

    let options = GameOptions::default().with_stand_on_soft_17(false);
    let mut hits = Round::new(stacked_deck(&draws), &options);
    hits.deal_initial().unwrap();
    hits.stand().unwrap();
    assert_eq!(hits.dealer_play().unwrap(), vec![card(Rank::Two, Suit::Hearts)]);
    assert_eq!(hits.dealer().value(), 19);
}

#[test]
fn exhausted_deck_reports_no_cards() {
    let mut round = round_from_draws(&[
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Spades),
    ]);

    round.deal_initial().unwrap();
    assert_eq!(round.hit().unwrap_err(), ActionError::NoCards);
    round.stand().unwrap();
    assert_eq!(round.dealer_play().unwrap_err(), ActionError::NoCards);

    let mut short = round_from_draws(&[card(Rank::Two, Suit::Hearts)]);
    assert_eq!(short.deal_initial().unwrap_err(), ActionError::NoCards);
}

#[test]
fn result_requires_resolution() {
    let round = round_from_draws(&[]);
    assert_eq!(round.result().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn scripted_round_transcript() {
    let round = round_from_draws(&[
        card(Rank::Ten, Suit::Hearts),    // player
        card(Rank::Six, Suit::Clubs),     // dealer
        card(Rank::Five, Suit::Diamonds), // player
        card(Rank::Nine, Suit::Spades),   // dealer
        card(Rank::Three, Suit::Clubs),   // player hit
        card(Rank::Four, Suit::Hearts),   // dealer draw
    ]);

    let (result, output) = play_scripted(round, "x\nh\ns\n");

    let expected = [
        "Dealer's Hand: 6C 9S",
        "Player's Hand: 10H 5D",
        "",
        "Dealer's Winning Probability: 28.5714%",
        "Player's Winning Probability: 28.5714%",
        "",
        "Do you want to hit or stand? (h/s): Invalid choice. Please enter 'h' or 's'.",
        "Do you want to hit or stand? (h/s): ",
        "Player's Hand: 10H 5D 3C",
        "Player's Winning Probability: 14.2857%",
        "",
        "Do you want to hit or stand? (h/s): Dealer's Hand: 6C 9S 4H",
        "Player's Hand: 10H 5D 3C",
        "Player's Winning Probability: 14.2857%",
        "Dealer's Winning Probability: 9.52381%",
        "",
    ]
    .join("\n");
    assert_eq!(output, expected);
    assert_eq!(result.player.value, 18);
    assert_eq!(result.dealer.value, 19);
}

#[test]
fn scripted_bust_shows_label() {
    let round = round_from_draws(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Queen, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ]);

    let (result, output) = play_scripted(round, "H\n");
    assert!(output.contains("Player's Hand: 10H 6D KH\nPlayer's Winning Probability: Bust 0%\n"));
    assert!(output.ends_with("Dealer's Winning Probability: 4.7619%\n"));
    assert_eq!(result.player.value, 26);
}

#[test]
fn closed_input_stands() {
    let round = round_from_draws(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Eight, Suit::Spades),
    ]);

    let (result, output) = play_scripted(round, "");
    assert_eq!(output.matches("hit or stand").count(), 1);
    assert_eq!(result.player.value, 12);
    assert_eq!(result.dealer.value, 18);
}

#[test]
fn choice_tokens() {
    assert_eq!(Choice::parse("h"), Some(Choice::Hit));
    assert_eq!(Choice::parse("stand"), Some(Choice::Stand));
    assert_eq!(Choice::parse("x"), None);
    assert_eq!(Replay::parse("y"), Some(Replay::Yes));
    assert_eq!(Replay::parse("n"), Some(Replay::No));
    assert_eq!(Replay::parse("maybe"), None);
}

#[test]
fn session_declined_thanks_player() {
    let seed = seed_without_naturals(1);
    let mut game = Game::new(GameOptions::default(), seed);

    let mut input = Cursor::new(b"s\nn\n".to_vec());
    let mut output = Vec::new();
    let rounds = game.run(&mut input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(rounds, 1);
    assert!(output.starts_with("*************************\n* Welcome to black jack *\n"));
    assert!(output.ends_with("Would you like to play again? (y/n):\nThank you for playing\n"));
}

#[test]
fn session_replays_only_once_by_default() {
    let seed = seed_without_naturals(2);
    let mut game = Game::new(GameOptions::default(), seed);

    let mut input = Cursor::new(b"s\ny\ns\ny\n".to_vec());
    let mut output = Vec::new();
    let rounds = game.run(&mut input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(rounds, 2);
    assert_eq!(game.rounds_played(), 2);
    assert_eq!(output.matches("play again").count(), 1);
    assert!(!output.contains("Thank you for playing"));
}

#[test]
fn session_invalid_replay_answer_ends_once_policy() {
    let seed = seed_without_naturals(1);
    let mut game = Game::new(GameOptions::default(), seed);

    let mut input = Cursor::new(b"s\nq\ny\n".to_vec());
    let mut output = Vec::new();
    let rounds = game.run(&mut input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(rounds, 1);
    assert!(output.ends_with("Invalid choice. Please enter 'y' or 'n': \n"));
}

#[test]
fn session_until_declined_keeps_asking() {
    let seed = seed_without_naturals(3);
    let options = GameOptions::default().with_replay(ReplayPolicy::UntilDeclined);
    let mut game = Game::new(options, seed);

    let mut input = Cursor::new(b"s\ny\ns\nwhat\ny\ns\nn\n".to_vec());
    let mut output = Vec::new();
    let rounds = game.run(&mut input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(rounds, 3);
    assert_eq!(output.matches("play again").count(), 4);
    assert!(output.ends_with("Thank you for playing\n"));
}

#[test]
fn io_failure_surfaces_as_play_error() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut game = Game::new(GameOptions::default(), 5);
    let mut input = Cursor::new(Vec::new());
    let err = game.play_round(&mut input, &mut Broken).unwrap_err();
    assert!(matches!(err, PlayError::Io(_)));
}
