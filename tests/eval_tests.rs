//! Тесты оценки рук: классификация пятёрок и лучший выбор из семи карт.

use holdem_engine::domain::card::{Card, Rank, Suit};
use holdem_engine::eval::{describe, evaluate_best_hand, evaluate_five, HandCategory};

use Rank::*;
use Suit::*;

/// Удобный конструктор карты.
fn c(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

//
// ============= Фиксированные категории =============
//
#[test]
fn royal_flush_is_top_category() {
    let five = [
        c(Ten, Spades),
        c(Jack, Spades),
        c(Queen, Spades),
        c(King, Spades),
        c(Ace, Spades),
    ];
    let score = evaluate_five(&five);
    assert_eq!(score.category(), HandCategory::RoyalFlush);
    assert_eq!(describe(score), "Royal Flush");
}

#[test]
fn wheel_counts_as_five_high_straight() {
    // A♦ 2♣ 3♥ 4♠ 5♦ — туз играет как единица.
    let five = [
        c(Ace, Diamonds),
        c(Two, Clubs),
        c(Three, Hearts),
        c(Four, Spades),
        c(Five, Diamonds),
    ];
    let score = evaluate_five(&five);
    assert_eq!(score.category(), HandCategory::Straight);
    assert_eq!(score.high_card(), Some(Five));
}

#[test]
fn near_straight_with_gap_is_high_card() {
    // 2 3 4 5 7 — дырка, стрита нет.
    let five = [
        c(Two, Clubs),
        c(Three, Hearts),
        c(Four, Spades),
        c(Five, Diamonds),
        c(Seven, Clubs),
    ];
    let score = evaluate_five(&five);
    assert_eq!(score.category(), HandCategory::HighCard);
    assert_eq!(score.high_card(), Some(Seven));
}

#[test]
fn wheel_flush_is_straight_flush_not_royal() {
    let five = [
        c(Ace, Hearts),
        c(Two, Hearts),
        c(Three, Hearts),
        c(Four, Hearts),
        c(Five, Hearts),
    ];
    let score = evaluate_five(&five);
    assert_eq!(score.category(), HandCategory::StraightFlush);
    assert_eq!(score.high_card(), Some(Five));
}

#[test]
fn pair_categories_detected_from_count_shape() {
    let one_pair = [
        c(King, Clubs),
        c(King, Hearts),
        c(Nine, Spades),
        c(Five, Diamonds),
        c(Two, Clubs),
    ];
    assert_eq!(evaluate_five(&one_pair).category(), HandCategory::OnePair);

    let two_pair = [
        c(King, Clubs),
        c(King, Hearts),
        c(Nine, Spades),
        c(Nine, Diamonds),
        c(Two, Clubs),
    ];
    assert_eq!(evaluate_five(&two_pair).category(), HandCategory::TwoPair);

    let trips = [
        c(King, Clubs),
        c(King, Hearts),
        c(King, Spades),
        c(Nine, Diamonds),
        c(Two, Clubs),
    ];
    assert_eq!(evaluate_five(&trips).category(), HandCategory::ThreeOfAKind);

    let full_house = [
        c(King, Clubs),
        c(King, Hearts),
        c(King, Spades),
        c(Nine, Diamonds),
        c(Nine, Clubs),
    ];
    assert_eq!(evaluate_five(&full_house).category(), HandCategory::FullHouse);

    let quads = [
        c(King, Clubs),
        c(King, Hearts),
        c(King, Spades),
        c(King, Diamonds),
        c(Nine, Clubs),
    ];
    assert_eq!(evaluate_five(&quads).category(), HandCategory::FourOfAKind);
}

//
// ============= Порядок категорий =============
//
#[test]
fn category_ladder_is_monotonic() {
    // Ровно по одной руке каждой категории, снизу вверх.
    let hands: [[Card; 5]; 10] = [
        // high card
        [c(Two, Clubs), c(Five, Hearts), c(Nine, Spades), c(Jack, Diamonds), c(King, Clubs)],
        // one pair
        [c(Two, Clubs), c(Two, Hearts), c(Nine, Spades), c(Jack, Diamonds), c(King, Clubs)],
        // two pair
        [c(Two, Clubs), c(Two, Hearts), c(Nine, Spades), c(Nine, Diamonds), c(King, Clubs)],
        // trips
        [c(Two, Clubs), c(Two, Hearts), c(Two, Spades), c(Nine, Diamonds), c(King, Clubs)],
        // straight
        [c(Five, Clubs), c(Six, Hearts), c(Seven, Spades), c(Eight, Diamonds), c(Nine, Clubs)],
        // flush
        [c(Two, Clubs), c(Five, Clubs), c(Nine, Clubs), c(Jack, Clubs), c(King, Clubs)],
        // full house
        [c(Two, Clubs), c(Two, Hearts), c(Two, Spades), c(Nine, Diamonds), c(Nine, Clubs)],
        // quads
        [c(Two, Clubs), c(Two, Hearts), c(Two, Spades), c(Two, Diamonds), c(Nine, Clubs)],
        // straight flush
        [c(Five, Clubs), c(Six, Clubs), c(Seven, Clubs), c(Eight, Clubs), c(Nine, Clubs)],
        // royal flush
        [c(Ten, Clubs), c(Jack, Clubs), c(Queen, Clubs), c(King, Clubs), c(Ace, Clubs)],
    ];

    for pair in hands.windows(2) {
        let lower = evaluate_five(&pair[0]);
        let higher = evaluate_five(&pair[1]);
        assert!(
            higher > lower,
            "{} должно быть сильнее {}",
            describe(higher),
            describe(lower)
        );
    }
}

#[test]
fn flush_high_card_breaks_ties_within_category() {
    let ace_high = [
        c(Ace, Hearts),
        c(Jack, Hearts),
        c(Nine, Hearts),
        c(Seven, Hearts),
        c(Two, Hearts),
    ];
    let king_high = [
        c(King, Hearts),
        c(Jack, Hearts),
        c(Nine, Hearts),
        c(Seven, Hearts),
        c(Two, Hearts),
    ];
    assert!(evaluate_five(&ace_high) > evaluate_five(&king_high));
}

#[test]
fn paired_categories_carry_no_tiebreak_value() {
    // Пары/сеты старшую карту не кодируют: равная категория — равный счёт.
    let kings = [
        c(King, Clubs),
        c(King, Hearts),
        c(Nine, Spades),
        c(Five, Diamonds),
        c(Two, Clubs),
    ];
    let queens = [
        c(Queen, Clubs),
        c(Queen, Hearts),
        c(Nine, Spades),
        c(Five, Diamonds),
        c(Two, Clubs),
    ];
    assert_eq!(evaluate_five(&kings), evaluate_five(&queens));
}

//
// ============= Лучшая рука из семи =============
//
#[test]
fn best_of_seven_prefers_flush_over_pair() {
    // В семи картах есть и пара двоек, и пятикарточный флеш —
    // перебор обязан вернуть флеш, а не первую попавшуюся пару.
    let hole = [c(Ace, Hearts), c(Two, Diamonds)];
    let community = [
        c(King, Hearts),
        c(Queen, Hearts),
        c(Seven, Hearts),
        c(Three, Hearts),
        c(Two, Spades),
    ];
    let score = evaluate_best_hand(&hole, &community);
    assert_eq!(score.category(), HandCategory::Flush);
    assert_eq!(score.high_card(), Some(Ace));
}

#[test]
fn best_of_seven_finds_royal_on_board_corner() {
    let hole = [c(Ace, Spades), c(King, Spades)];
    let community = [
        c(Queen, Spades),
        c(Jack, Spades),
        c(Ten, Spades),
        c(Two, Hearts),
        c(Seven, Diamonds),
    ];
    let score = evaluate_best_hand(&hole, &community);
    assert_eq!(score.category(), HandCategory::RoyalFlush);
}

#[test]
fn best_of_seven_works_with_exactly_five_cards() {
    let hole = [c(Nine, Clubs), c(Nine, Hearts)];
    let community = [c(Two, Spades), c(Five, Diamonds), c(King, Clubs)];
    let score = evaluate_best_hand(&hole, &community);
    assert_eq!(score.category(), HandCategory::OnePair);
}

#[test]
#[should_panic]
fn fewer_than_five_cards_is_a_contract_violation() {
    let hole = [c(Nine, Clubs), c(Nine, Hearts)];
    let community = [c(Two, Spades), c(Five, Diamonds)];
    let _ = evaluate_best_hand(&hole, &community);
}
