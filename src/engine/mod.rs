//! Машина ставок heads-up: легальность действий, переход улиц, шоудаун.
//!
//! Основные операции:
//!   - `new_game` — свежая колода, раздача, префлоп;
//!   - `apply_action` — применить одно действие игрока (или отклонить);
//!   - `evaluate_showdown` — сравнить руки после ривера.
//!
//! Движок не хранит ничего между вызовами: всё состояние приходит
//! и уходит через `GameState`.

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod session;
pub mod settlement;
pub mod validation;

pub use actions::{Action, ActionKind};
pub use errors::EngineError;
pub use game_loop::{apply_action, evaluate_showdown, new_game, GameState, HandStatus};
pub use session::{GameSession, SessionError};
pub use settlement::{DeferredSettlement, LocalSettlement, Settlement};

/// RNG-интерфейс движка. Реализации живут в infra.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
