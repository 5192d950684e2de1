use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;

/// Место за столом. Ровно два: heads-up.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Оппонент.
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Индекс в массиве мест [SeatState; 2].
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::One => write!(f, "1"),
            Seat::Two => write!(f, "2"),
        }
    }
}

/// Состояние одного места в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatState {
    /// Текущий стек.
    pub stack: Chips,
    /// Карманные карты — ровно две, приватны для этого места.
    pub hole_cards: [Card; 2],
    /// Ставка в текущем раунде (сбрасывается на каждой новой улице).
    pub bet: Chips,
    /// Сколько всего внесено за этот раунд. Ведётся отдельно от банка,
    /// нужно только для бухгалтерии размеров рейзов.
    pub round_contribution: Chips,
    /// Сфолдил — терминально до конца раздачи.
    pub folded: bool,
}

impl SeatState {
    pub fn new(stack: Chips, hole_cards: [Card; 2]) -> Self {
        Self {
            stack,
            hole_cards,
            bet: Chips::ZERO,
            round_contribution: Chips::ZERO,
            folded: false,
        }
    }

    /// Сброс ставок при переходе на новую улицу.
    pub fn reset_for_new_round(&mut self) {
        self.bet = Chips::ZERO;
        self.round_contribution = Chips::ZERO;
    }
}
