use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Действие игрока. Закрытый тип: новое действие не добавить,
/// не обновив все точки диспетчеризации.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Рейз НА amount сверх текущей ставки оппонента
    /// (целевая ставка = ставка оппонента + amount).
    Raise(Chips),
}

impl Action {
    /// Вид действия без суммы — для отображения.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
        }
    }
}

/// Вид последнего действия, хранится в состоянии для фронта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
        };
        write!(f, "{s}")
    }
}
