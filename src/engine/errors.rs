use thiserror::Error;

use crate::domain::player::Seat;

/// Ошибки движка. Все — локальные отказы: состояние игры не меняется,
/// вызывающая сторона сама решает, как показать отказ игроку.
#[derive(Clone, Debug, Error)]
pub enum EngineError {
    #[error("Раздача уже завершена")]
    HandOver,

    #[error("Сейчас не ход места {0}")]
    NotYourTurn(Seat),

    #[error("Невозможно выполнить check — есть неуравненная ставка")]
    CannotCheck,

    #[error("Невозможно выполнить call — нет ставки для уравнивания")]
    CannotCall,

    #[error("Недостаточно фишек для этого действия")]
    NotEnoughChips,

    #[error("Размер рейза слишком мал")]
    RaiseTooSmall,

    #[error("Недопустимое действие в текущем состоянии раздачи")]
    IllegalAction,

    #[error("Внутренняя ошибка движка: {0}")]
    Internal(&'static str),
}
