use crate::domain::card::Rank;

/// Битовая маска рангов: 13 бит, бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Окно из пяти подряд идущих бит — «скелет» любого обычного стрита.
const RUN_OF_FIVE: RankMask = 0b1_1111;

/// Маска «колеса» A2345: туз считается за единицу.
pub const WHEEL_MASK: RankMask = mask_from_ranks(&[
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
]);

/// Бит одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank.value() - 2)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= 1 << (ranks[i] as u8 - 2);
        i += 1;
    }
    mask
}

/// Найти стрит в маске рангов, вернуть его старшую карту.
///
/// Обычные стриты ищем окном сверху вниз (бродвей первым),
/// колесо проверяем отдельно: его старшая карта — пятёрка, не туз.
pub fn detect_straight(mask: RankMask) -> Option<Rank> {
    for high in (6u8..=14).rev() {
        let window = RUN_OF_FIVE << (high - 6);
        if mask & window == window {
            return Rank::from_value(high);
        }
    }
    if mask & WHEEL_MASK == WHEEL_MASK {
        return Some(Rank::Five);
    }
    None
}
