use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Конфиг одной игры. Хранится внутри снапшота,
/// чтобы восстановленная игра жила со своими же лимитами.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Стартовый стек каждого места.
    pub starting_stack: Chips,
    /// Базовый минимум рейза. К нему же откатывается lastRaise
    /// после колла и на каждой новой улице.
    pub min_raise_baseline: Chips,
}

impl GameConfig {
    pub fn new(starting_stack: Chips, min_raise_baseline: Chips) -> Self {
        Self {
            starting_stack,
            min_raise_baseline,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_stack: Chips(1000),
            min_raise_baseline: Chips(10),
        }
    }
}
