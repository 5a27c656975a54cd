//! Card, shoe, hand and strategy tests.

use std::collections::{HashMap, HashSet};

use bjsim::hand::{is_blackjack, is_soft, score, upcard_value};
use bjsim::{
    ACE, Action, Card, DECK_SIZE, DrawError, Hand, JACK, KING, ParseStrategyError, QUEEN, Shoe,
    Strategy, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

#[test]
fn card_values_and_display() {
    assert_eq!(card(Suit::Hearts, ACE).value(), 11);
    assert_eq!(card(Suit::Hearts, 7).value(), 7);
    assert_eq!(card(Suit::Hearts, 10).value(), 10);
    assert_eq!(card(Suit::Hearts, JACK).value(), 10);
    assert_eq!(card(Suit::Hearts, QUEEN).value(), 10);
    assert_eq!(card(Suit::Hearts, KING).value(), 10);
    assert_eq!(card(Suit::Hearts, 0).value(), 0);
    assert_eq!(card(Suit::Hearts, 14).value(), 0);

    assert_eq!(card(Suit::Spades, KING).to_string(), "king of spades");
    assert_eq!(card(Suit::Diamonds, 7).to_string(), "7 of diamonds");
    assert_eq!(card(Suit::Hearts, ACE).to_string(), "ace of hearts");
}

#[test]
fn score_uses_ace_flexibility() {
    assert_eq!(score(&cards(&[ACE, ACE, 9])), 21);
    assert_eq!(score(&cards(&[ACE, ACE, ACE, 9])), 12);
    assert_eq!(score(&cards(&[KING, ACE])), 21);
    assert_eq!(score(&cards(&[ACE, 6])), 17);
    assert_eq!(score(&cards(&[ACE, 6, 10])), 17);
    assert_eq!(score(&cards(&[ACE, ACE])), 12);
    assert_eq!(score(&[]), 0);
}

#[test]
fn score_reports_minimal_bust_total() {
    assert_eq!(score(&cards(&[7, 8, KING])), 25);
    assert_eq!(score(&cards(&[ACE, KING, QUEEN, 5])), 26);
}

#[test]
fn large_hands_score_past_u8_range() {
    // Possible with a six-deck shoe: every ace counted as 1.
    assert_eq!(score(&[card(Suit::Hearts, ACE); 24]), 24);
    assert!(!is_soft(&[card(Suit::Hearts, ACE); 24]));
    assert_eq!(score(&[card(Suit::Spades, KING); 26]), 260);

    let mut ranks = vec![ACE; 21];
    ranks.push(KING);
    assert_eq!(score(&cards(&ranks)), 31);

    let hand: Hand = [card(Suit::Clubs, KING); 30].into_iter().collect();
    assert_eq!(hand.value(), 300);
    assert!(hand.is_bust());
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(is_blackjack(&cards(&[KING, ACE])));
    assert!(is_blackjack(&cards(&[ACE, 10])));
    assert!(!is_blackjack(&cards(&[7, 7, 7])));
    assert!(!is_blackjack(&cards(&[10, 9])));
    assert!(!is_blackjack(&[]));
}

#[test]
fn soft_hands() {
    assert!(is_soft(&cards(&[ACE, 6])));
    assert!(!is_soft(&cards(&[ACE, 6, 10])));
    assert!(!is_soft(&cards(&[10, 7])));
}

#[test]
fn upcard_value_reads_first_card_only() {
    assert_eq!(upcard_value(&[]), 0);
    assert_eq!(upcard_value(&cards(&[ACE, ACE])), 11);
    assert_eq!(upcard_value(&cards(&[KING, 5])), 10);
    assert_eq!(upcard_value(&cards(&[10, 5])), 10);
    assert_eq!(upcard_value(&cards(&[7, ACE])), 7);
    assert_eq!(upcard_value(&cards(&[14, 5])), 0);
}

#[test]
fn hand_wrapper_tracks_cards() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.up_card(), None);
    assert_eq!(hand.up_card_value(), 0);

    hand.add_card(card(Suit::Hearts, ACE));
    hand.add_card(card(Suit::Clubs, KING));
    assert_eq!(hand.len(), 2);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_blackjack());
    assert!(hand.is_soft());
    assert!(!hand.is_bust());
    assert_eq!(hand.up_card(), Some(&card(Suit::Hearts, ACE)));

    hand.add_card(card(Suit::Diamonds, 5));
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_blackjack());

    let bust: Hand = cards(&[10, 9, 5]).into_iter().collect();
    assert!(bust.is_bust());

    hand.clear();
    assert!(hand.is_empty());
}

#[test]
fn single_deck_has_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let shoe = Shoe::new(1, &mut rng);

    assert_eq!(shoe.len(), DECK_SIZE);
    let unique: HashSet<Card> = shoe.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn three_deck_shoe_has_every_card_three_times() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let shoe = Shoe::new(3, &mut rng);

    assert_eq!(shoe.len(), 156);
    assert_eq!(shoe.capacity(), 156);
    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in shoe.cards() {
        *counts.entry(*card).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 3));
}

#[test]
fn zero_decks_is_clamped_to_one() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let shoe = Shoe::new(0, &mut rng);
    assert_eq!(shoe.decks(), 1);
    assert_eq!(shoe.len(), DECK_SIZE);
}

#[test]
fn shoe_is_shuffled() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let shoe = Shoe::new(1, &mut rng);

    let ordered: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| (1..=13).map(move |rank| card(suit, rank)))
        .collect();
    assert_ne!(shoe.cards(), ordered.as_slice());
}

#[test]
fn reshuffle_threshold_is_a_quarter() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut shoe = Shoe::new(3, &mut rng);
    assert_eq!(shoe.reshuffle_threshold(), 39);

    while shoe.len() > 39 {
        shoe.draw().unwrap();
        assert!(!shoe.needs_reshuffle());
    }
    shoe.draw().unwrap();
    assert_eq!(shoe.len(), 38);
    assert!(shoe.needs_reshuffle());

    shoe.reshuffle(&mut rng);
    assert_eq!(shoe.len(), 156);
    assert!(!shoe.needs_reshuffle());
}

#[test]
fn draw_takes_from_the_end() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut shoe = Shoe::new(1, &mut rng);
    let last = *shoe.cards().last().unwrap();

    assert_eq!(shoe.draw(), Ok(last));
    assert_eq!(shoe.len(), DECK_SIZE - 1);
}

#[test]
fn stacked_shoe_draws_in_order_then_runs_dry() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut shoe = Shoe::new(1, &mut rng);
    shoe.stack(&[card(Suit::Hearts, 2), card(Suit::Clubs, 3)]);

    assert_eq!(shoe.draw(), Ok(card(Suit::Hearts, 2)));
    assert_eq!(shoe.draw(), Ok(card(Suit::Clubs, 3)));
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw(), Err(DrawError::EmptyShoe));
}

#[test]
fn stack_is_truncated_to_capacity() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut shoe = Shoe::new(1, &mut rng);
    shoe.stack(&[card(Suit::Hearts, 2); 60]);
    assert_eq!(shoe.len(), DECK_SIZE);
}

#[test]
fn dealer_mimic_and_fixed_thresholds() {
    assert_eq!(Strategy::DealerMimic.decide(16, 10), Action::Hit);
    assert_eq!(Strategy::DealerMimic.decide(17, 2), Action::Stand);

    assert_eq!(Strategy::NeverBust.decide(11, 10), Action::Hit);
    assert_eq!(Strategy::NeverBust.decide(12, 10), Action::Stand);

    assert_eq!(Strategy::Aggressive.decide(18, 6), Action::Hit);
    assert_eq!(Strategy::Aggressive.decide(19, 6), Action::Stand);
}

#[test]
fn basic_hard_table() {
    let s = Strategy::BasicHard;
    assert_eq!(s.decide(14, 5), Action::Stand);
    assert_eq!(s.decide(14, 9), Action::Hit);
    assert_eq!(s.decide(17, 10), Action::Stand);
    assert_eq!(s.decide(20, 11), Action::Stand);
    assert_eq!(s.decide(13, 2), Action::Stand);
    assert_eq!(s.decide(16, 6), Action::Stand);
    assert_eq!(s.decide(16, 7), Action::Hit);
    assert_eq!(s.decide(12, 3), Action::Hit);
    assert_eq!(s.decide(12, 4), Action::Stand);
    assert_eq!(s.decide(12, 6), Action::Stand);
    assert_eq!(s.decide(12, 7), Action::Hit);
    assert_eq!(s.decide(11, 6), Action::Hit);
}

#[test]
fn basic_hard_thirteen_switches_between_six_and_seven() {
    let s = Strategy::BasicHard;
    assert_eq!(s.decide(13, 6), Action::Stand);
    assert_eq!(s.decide(13, 7), Action::Hit);
    assert_eq!(s.decide(13, 11), Action::Hit);
}

#[test]
fn cautious_threshold_depends_on_upcard() {
    let s = Strategy::Cautious;
    // Weak upcard: stand from 12.
    assert_eq!(s.decide(11, 4), Action::Hit);
    assert_eq!(s.decide(12, 4), Action::Stand);
    // Strong upcard, ace included: stand from 17.
    assert_eq!(s.decide(16, 10), Action::Hit);
    assert_eq!(s.decide(17, 10), Action::Stand);
    assert_eq!(s.decide(16, 11), Action::Hit);
    // No usable upcard: stand from 15.
    assert_eq!(s.decide(14, 0), Action::Hit);
    assert_eq!(s.decide(15, 0), Action::Stand);
}

#[test]
fn cautious_threshold_boundaries() {
    let s = Strategy::Cautious;
    // Lowest and highest weak upcards still stand from 12.
    assert_eq!(s.decide(11, 2), Action::Hit);
    assert_eq!(s.decide(12, 2), Action::Stand);
    assert_eq!(s.decide(11, 6), Action::Hit);
    assert_eq!(s.decide(12, 6), Action::Stand);
    // A 7 moves the threshold to 17.
    assert_eq!(s.decide(12, 7), Action::Hit);
    assert_eq!(s.decide(16, 7), Action::Hit);
    assert_eq!(s.decide(17, 7), Action::Stand);
}

#[test]
fn strategy_names_round_trip() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
    }
    assert_eq!("basic-hard".parse::<Strategy>(), Ok(Strategy::BasicHard));
    assert_eq!(" never_bust ".parse::<Strategy>(), Ok(Strategy::NeverBust));
    assert_eq!("Cautious".parse::<Strategy>(), Ok(Strategy::Cautious));
    assert_eq!("yolo".parse::<Strategy>(), Err(ParseStrategyError));
    assert_eq!("CAUTIOUSS".parse::<Strategy>(), Err(ParseStrategyError));

    assert_eq!(Strategy::from_name_or_default("yolo"), Strategy::DealerMimic);
    assert_eq!(Strategy::from_name_or_default("AGGRESSIVE"), Strategy::Aggressive);
    assert_eq!(Strategy::default(), Strategy::DealerMimic);
    assert_eq!(Strategy::NeverBust.to_string(), "NEVER_BUST");
}
