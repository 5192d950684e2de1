use thiserror::Error;

use crate::domain::config::GameConfig;
use crate::domain::player::Seat;
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{apply_action, new_game, GameState, HandStatus};
use crate::engine::settlement::{LocalSettlement, Settlement};
use crate::engine::RandomSource;
use crate::infra::persistence::{SnapshotStore, StoreError};

/// Ошибки сессии (над движком одной раздачи).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Нет активной игры")]
    NoActiveGame,

    #[error("Ошибка хранилища снапшотов: {0}")]
    Store(#[from] StoreError),

    #[error("Ошибка движка: {0}")]
    Engine(#[from] EngineError),
}

/// Сессия одной игры поверх хранилища снапшотов.
///
/// Движок между вызовами ничего не помнит, поэтому каждая мутация —
/// это load → переход → compare-and-store. Если два источника ввода
/// (две вкладки) попытаются походить от одной версии, второй получит
/// конфликт версий и перечитает актуальный снапшот.
pub struct GameSession<P: SnapshotStore, S: Settlement> {
    config: GameConfig,
    store: P,
    settlement: S,
    hands_started: u64,
}

impl<P: SnapshotStore> GameSession<P, LocalSettlement> {
    /// Сессия с локальным расчётом банка (дефолтный вариант).
    pub fn with_local_settlement(config: GameConfig, store: P) -> Self {
        Self::new(config, store, LocalSettlement)
    }
}

impl<P: SnapshotStore, S: Settlement> GameSession<P, S> {
    pub fn new(config: GameConfig, store: P, settlement: S) -> Self {
        Self {
            config,
            store,
            settlement,
            hands_started: 0,
        }
    }

    /// Начать новую игру, заменив текущий снапшот (если он был).
    pub fn start_game<R: RandomSource>(&mut self, rng: &mut R) -> Result<GameState, SessionError> {
        let expected = self
            .store
            .load()?
            .map(|snapshot| snapshot.version)
            .unwrap_or(0);

        let state = new_game(self.config, rng);
        self.store.compare_and_store(expected, &state)?;
        self.hands_started += 1;
        Ok(state)
    }

    /// Применить действие к текущей игре через optimistic concurrency.
    pub fn apply(&mut self, seat: Seat, action: Action) -> Result<HandStatus, SessionError> {
        let snapshot = self.store.load()?.ok_or(SessionError::NoActiveGame)?;

        let mut state = snapshot.state;
        let status = apply_action(&mut state, seat, action, &mut self.settlement)?;

        self.store.compare_and_store(snapshot.version, &state)?;
        Ok(status)
    }

    /// Актуальное состояние игры (если она есть).
    pub fn state(&self) -> Result<Option<GameState>, SessionError> {
        Ok(self.store.load()?.map(|snapshot| snapshot.state))
    }

    pub fn settlement(&self) -> &S {
        &self.settlement
    }

    pub fn settlement_mut(&mut self) -> &mut S {
        &mut self.settlement
    }

    pub fn hands_started(&self) -> u64 {
        self.hands_started
    }
}
