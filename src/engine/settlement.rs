use crate::domain::chips::Chips;
use crate::domain::hand::{HandOutcome, HandWinner};
use crate::domain::player::SeatState;

/// Стратегия выплаты банка по итогам раздачи.
///
/// Одна операция — `settle`. Движок вызывает её ровно один раз,
/// в момент завершения раздачи (фолд или вскрытие). Какая стратегия
/// активна — решает собирающий слой при конструировании сессии.
pub trait Settlement {
    fn settle(&mut self, seats: &mut [SeatState; 2], pot: &mut Chips, outcome: &HandOutcome);
}

/// Локальный расчёт: банк сразу зачисляется в стеки, после чего обнуляется.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSettlement;

impl Settlement for LocalSettlement {
    fn settle(&mut self, seats: &mut [SeatState; 2], pot: &mut Chips, outcome: &HandOutcome) {
        match outcome.winner {
            HandWinner::Seat(winner) => {
                seats[winner.index()].stack += *pot;
            }
            HandWinner::Split => {
                // Нечётную фишку получает второе место: floor первому, ceil второму.
                let first_share = pot.half_down();
                seats[0].stack += first_share;
                seats[1].stack += *pot - first_share;
            }
        }
        *pot = Chips::ZERO;
    }
}

/// Отложенный расчёт: фишки не двигаются, итог копится для внешнего
/// слоя выплат (эскроу, он и переводит деньги).
#[derive(Clone, Debug, Default)]
pub struct DeferredSettlement {
    pending: Vec<HandOutcome>,
}

impl DeferredSettlement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ещё не обработанные внешним слоем итоги.
    pub fn pending(&self) -> &[HandOutcome] {
        &self.pending
    }

    /// Забрать накопленные итоги (очередь очищается).
    pub fn take_pending(&mut self) -> Vec<HandOutcome> {
        std::mem::take(&mut self.pending)
    }
}

impl Settlement for DeferredSettlement {
    fn settle(&mut self, _seats: &mut [SeatState; 2], _pot: &mut Chips, outcome: &HandOutcome) {
        self.pending.push(*outcome);
    }
}
