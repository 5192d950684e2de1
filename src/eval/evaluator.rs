use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandScore;

use super::hand_score::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Лучшая 5-карточная рука из карманных + общих карт.
///
/// Ожидается `hole.len() == 2` и `community.len() == 5` (шоудаун),
/// но функция корректна для любых 5–7 карт суммарно.
///
/// Перебираем ВСЕ C(n,5) комбинаций и берём максимум. Жадный выбор
/// здесь неверен: локально лучшая пятёрка не обязана быть глобально
/// лучшей (флеш и пара могут собираться из разных карт).
pub fn evaluate_best_hand(hole: &[Card], community: &[Card]) -> HandScore {
    let mut all_cards = Vec::with_capacity(hole.len() + community.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(community);

    let n = all_cards.len();
    assert!(
        (5..=7).contains(&n),
        "evaluate_best_hand ожидает от 5 до 7 карт, получено {n}"
    );

    let mut best: Option<HandScore> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [
                            all_cards[a],
                            all_cards[b],
                            all_cards[c],
                            all_cards[d],
                            all_cards[e],
                        ];
                        let score = evaluate_five(&five);
                        if best.map_or(true, |b| score > b) {
                            best = Some(score);
                        }
                    }
                }
            }
        }
    }

    best.expect("хотя бы одна 5-карточная комбинация обязана существовать")
}

/// Классификация строго пяти карт.
pub fn evaluate_five(cards: &[Card; 5]) -> HandScore {
    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut rank_mask: RankMask = 0;

    for card in cards {
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight(rank_mask);
    let top_rank = cards.iter().map(|c| c.rank).max().unwrap();

    // Форма повторов: [количество самого частого ранга, второго по частоте].
    let mut counts: Vec<u8> = rank_counts.iter().copied().filter(|&c| c > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let first = counts[0];
    let second = counts.get(1).copied().unwrap_or(0);

    if is_flush {
        if let Some(high) = straight_high {
            return if high == Rank::Ace {
                HandScore::new(HandCategory::RoyalFlush, None)
            } else {
                HandScore::new(HandCategory::StraightFlush, Some(high))
            };
        }
    }

    if first == 4 {
        return HandScore::new(HandCategory::FourOfAKind, None);
    }
    if first == 3 && second == 2 {
        return HandScore::new(HandCategory::FullHouse, None);
    }
    if is_flush {
        return HandScore::new(HandCategory::Flush, Some(top_rank));
    }
    if let Some(high) = straight_high {
        return HandScore::new(HandCategory::Straight, Some(high));
    }
    if first == 3 {
        return HandScore::new(HandCategory::ThreeOfAKind, None);
    }
    if first == 2 && second == 2 {
        return HandScore::new(HandCategory::TwoPair, None);
    }
    if first == 2 {
        return HandScore::new(HandCategory::OnePair, None);
    }

    HandScore::new(HandCategory::HighCard, Some(top_rank))
}
