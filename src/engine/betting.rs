use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::engine::actions::ActionKind;

/// Состояние раунда ставок на текущей улице.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingRound {
    /// Улица, к которой относится раунд.
    pub street: Street,
    /// Счётчик действий с момента последней агрессии.
    /// Раунд закрыт, когда оба походили И ставки уравнены.
    pub actions_taken: u8,
    /// Последнее действие — только для отображения.
    pub last_action: Option<ActionKind>,
    /// Размер последнего рейза. Минимальный следующий рейз — вдвое больше.
    pub last_raise: Chips,
}

impl BettingRound {
    /// Свежий раунд на заданной улице.
    pub fn opening(street: Street, baseline: Chips) -> Self {
        Self {
            street,
            actions_taken: 0,
            last_action: None,
            last_raise: baseline,
        }
    }

    /// Минимальный легальный размер следующего рейза.
    pub fn min_raise(&self) -> Chips {
        Chips(self.last_raise.0.saturating_mul(2))
    }

    pub fn record_check(&mut self) {
        self.actions_taken = self.actions_taken.saturating_add(1);
        self.last_action = Some(ActionKind::Check);
    }

    /// Колл уравнивает ставки и откатывает lastRaise к базовому минимуму.
    pub fn record_call(&mut self, baseline: Chips) {
        self.actions_taken = self.actions_taken.saturating_add(1);
        self.last_action = Some(ActionKind::Call);
        self.last_raise = baseline;
    }

    /// Рейз переоткрывает раунд: оппонент обязан ответить,
    /// даже если уже ходил на этой улице.
    pub fn record_raise(&mut self, amount: Chips) {
        self.actions_taken = 1;
        self.last_action = Some(ActionKind::Raise);
        self.last_raise = amount;
    }

    /// Закрыт ли раунд: оба успели походить после последней агрессии
    /// и ставки уравнены.
    pub fn is_complete(&self, bets_equal: bool) -> bool {
        self.actions_taken >= 2 && bets_equal
    }
}
