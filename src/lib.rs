//! Движок heads-up Texas Hold'em: колода, оценка рук, машина ставок, шоудаун.
//!
//! Движок сам по себе «чистый»: никакой сети, кошельков и UI.
//! Снаружи ему передают действия игроков, обратно он отдаёт
//! полный снапшот состояния (`GameState`) — плоские данные,
//! которые можно сериализовать и восстановить в любой момент.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::card::{Card, Rank, Suit};
pub use domain::chips::Chips;
pub use domain::config::GameConfig;
pub use domain::hand::{HandOutcome, HandScore, HandWinner, OutcomeReason, ShowdownResult, Street};
pub use domain::player::{Seat, SeatState};
pub use engine::{
    apply_action, evaluate_showdown, new_game, Action, ActionKind, EngineError, GameState,
    HandStatus, RandomSource,
};
pub use eval::evaluate_best_hand;
