//! Card and deck tests.

use std::collections::{HashMap, HashSet};

use bjsolo::{Card, DECK_SIZE, Deck, EmptyDeckError, ParseCardError, Rank, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn new_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&Card::new(rank, suit)));
        }
    }
}

#[test]
fn new_deck_is_in_construction_order() {
    let deck = Deck::new();
    assert_eq!(deck.cards()[0], "2C".parse().unwrap());
    assert_eq!(deck.cards()[12], "AC".parse().unwrap());
    assert_eq!(deck.cards()[13], "2D".parse().unwrap());
    assert_eq!(deck.cards()[51], "AS".parse().unwrap());
    assert_eq!(deck, Deck::default());
}

#[test]
fn draw_takes_from_the_end_until_empty() {
    let mut deck = Deck::from_cards(vec!["2C".parse().unwrap(), "KH".parse().unwrap()]);
    assert_eq!(deck.draw(), Ok("KH".parse().unwrap()));
    assert_eq!(deck.draw(), Ok("2C".parse().unwrap()));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn shuffled_deck_is_reordered() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let shuffled = Deck::shuffled(&mut rng);
    assert_ne!(shuffled, Deck::new());
    assert_eq!(shuffled.len(), DECK_SIZE);
}

#[test]
fn shuffle_handles_tiny_decks() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut empty = Deck::from_cards(Vec::new());
    empty.shuffle(&mut rng);
    assert!(empty.is_empty());

    let ace: Card = "AS".parse().unwrap();
    let mut single = Deck::from_cards(vec![ace]);
    single.shuffle(&mut rng);
    assert_eq!(single.cards(), &[ace]);
}

#[test]
fn shuffle_is_uniform_over_permutations() {
    let base: Vec<Card> = ["2C", "3D", "4H"].iter().map(|c| c.parse().unwrap()).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts: HashMap<Vec<Card>, u32> = HashMap::new();

    for _ in 0..60_000 {
        let mut deck = Deck::from_cards(base.clone());
        deck.shuffle(&mut rng);
        *counts.entry(deck.cards().to_vec()).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    for (order, count) in counts {
        assert!(
            (9_500..=10_500).contains(&count),
            "order {order:?} came up {count} times"
        );
    }
}

#[test]
fn shuffle_places_a_card_uniformly() {
    let ace: Card = "AS".parse().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut positions = [0u32; DECK_SIZE];

    for _ in 0..52_000 {
        let deck = Deck::shuffled(&mut rng);
        let index = deck.cards().iter().position(|c| *c == ace).unwrap();
        positions[index] += 1;
    }

    for (index, count) in positions.iter().enumerate() {
        assert!(
            (800..=1_200).contains(count),
            "position {index} held the ace {count} times"
        );
    }
}

#[test]
fn parses_and_displays_cards() {
    assert_eq!("TS".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Spades)));
    assert_eq!("10S".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Spades)));
    assert_eq!("ah".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
    assert_eq!(Card::new(Rank::Queen, Suit::Diamonds).to_string(), "QD");

    assert_eq!("".parse::<Card>(), Err(ParseCardError::InvalidLength));
    assert_eq!("H".parse::<Card>(), Err(ParseCardError::InvalidLength));
    assert_eq!("KQS".parse::<Card>(), Err(ParseCardError::InvalidLength));
    assert_eq!("1H".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("9X".parse::<Card>(), Err(ParseCardError::InvalidSuit));
}

proptest! {
    /// Shuffling only reorders: the same 52 cards come back.
    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shuffled = Deck::shuffled(&mut rng);

        prop_assert_eq!(shuffled.len(), DECK_SIZE);
        let unique: HashSet<Card> = shuffled.cards().iter().copied().collect();
        let original: HashSet<Card> = Deck::new().cards().iter().copied().collect();
        prop_assert_eq!(unique, original);
    }
}
