use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Seat;

/// Улица раздачи. Определяет, сколько общих карт открыто (0/3/4/5).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    /// Терминальный маркер: торговля закончена, руки вскрыты.
    Showdown,
}

impl Street {
    /// Сколько общих карт открыто на этой улице.
    pub fn revealed_cards(self) -> u8 {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Showdown => 5,
        }
    }
}

/// Сила руки. Упакованный u32, кодировку заполняет eval.
/// Сравнение — просто по числу: старшая категория всегда старше.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandScore(pub u32);

/// Кому достался банк.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandWinner {
    /// Один победитель.
    Seat(Seat),
    /// Равные руки: банк делится, нечётная фишка уходит второму месту.
    Split,
}

/// Почему раздача закончилась.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutcomeReason {
    /// Оппонент сфолдил.
    Fold,
    /// Дошли до вскрытия после ривера.
    Showdown,
}

/// Результат вскрытия: силы обеих рук и кто выиграл.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownResult {
    /// Лучшая 5-карточная сила каждого места (по индексу Seat).
    pub scores: [HandScore; 2],
    pub winner: HandWinner,
}

/// Итог завершённой раздачи — всё, что нужно слою выплат и фронту.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandOutcome {
    pub winner: HandWinner,
    /// Размер банка на момент завершения (до выплаты).
    pub pot: Chips,
    pub reason: OutcomeReason,
    /// Есть только при завершении через вскрытие.
    pub showdown: Option<ShowdownResult>,
}

impl HandOutcome {
    /// Раздача закончилась фолдом: весь банк уходит оппоненту.
    pub fn after_fold(winner: Seat, pot: Chips) -> Self {
        Self {
            winner: HandWinner::Seat(winner),
            pot,
            reason: OutcomeReason::Fold,
            showdown: None,
        }
    }

    /// Раздача дошла до вскрытия.
    pub fn after_showdown(result: ShowdownResult, pot: Chips) -> Self {
        Self {
            winner: result.winner,
            pot,
            reason: OutcomeReason::Showdown,
            showdown: Some(result),
        }
    }
}
