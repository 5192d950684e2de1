use crate::domain::card::Rank;
use crate::domain::hand::HandScore;

/// Категория руки по силе. Числовое значение — её очки при сравнении.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandScore {
    /// Собрать HandScore из категории и (опциональной) старшей карты.
    ///
    /// Схема кодирования (u32): [категория:4 бита][старшая карта:4 бита].
    /// Категория 1..10 и ранг 2..14 влезают в ниббл каждый.
    /// Старшую карту несут только те категории, где её отслеживаем:
    /// straight flush, flush, straight, high card. У остальных ниббл нулевой —
    /// равные категории там считаются равными руками (банк делится).
    pub fn new(category: HandCategory, high: Option<Rank>) -> Self {
        let cat_bits = (category as u32) & 0x0F;
        let high_bits = high.map(|r| r.value() as u32).unwrap_or(0) & 0x0F;
        HandScore((cat_bits << 4) | high_bits)
    }

    /// Вытащить категорию обратно.
    pub fn category(&self) -> HandCategory {
        match (self.0 >> 4) & 0x0F {
            2 => HandCategory::OnePair,
            3 => HandCategory::TwoPair,
            4 => HandCategory::ThreeOfAKind,
            5 => HandCategory::Straight,
            6 => HandCategory::Flush,
            7 => HandCategory::FullHouse,
            8 => HandCategory::FourOfAKind,
            9 => HandCategory::StraightFlush,
            10 => HandCategory::RoyalFlush,
            _ => HandCategory::HighCard,
        }
    }

    /// Старшая карта категории, если она кодировалась.
    pub fn high_card(&self) -> Option<Rank> {
        Rank::from_value((self.0 & 0x0F) as u8)
    }
}

/// Человеческое описание руки по категории.
pub fn describe(score: HandScore) -> String {
    match score.category() {
        HandCategory::HighCard => "High Card".to_string(),
        HandCategory::OnePair => "One Pair".to_string(),
        HandCategory::TwoPair => "Two Pair".to_string(),
        HandCategory::ThreeOfAKind => "Three of a Kind".to_string(),
        HandCategory::Straight => "Straight".to_string(),
        HandCategory::Flush => "Flush".to_string(),
        HandCategory::FullHouse => "Full House".to_string(),
        HandCategory::FourOfAKind => "Four of a Kind".to_string(),
        HandCategory::StraightFlush => "Straight Flush".to_string(),
        HandCategory::RoyalFlush => "Royal Flush".to_string(),
    }
}
