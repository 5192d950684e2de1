use thiserror::Error;

use crate::engine::game_loop::GameState;

/// Ошибки хранилища снапшотов.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Кто-то успел записать новую версию между load и store.
    #[error("Конфликт версий снапшота: ожидали {expected}, в хранилище {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    #[error("Ошибка (де)сериализации снапшота: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Снапшот игры с номером версии для optimistic concurrency.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionedSnapshot {
    pub version: u64,
    pub state: GameState,
}

/// Хранилище ровно одного снапшота игры.
///
/// Запись идёт через compare-and-store: писатель обязан предъявить версию,
/// которую он читал. Отставший писатель получает `VersionConflict` и должен
/// перечитать состояние, а не затирать чужой ход.
pub trait SnapshotStore {
    /// Загрузить текущий снапшот (None — игры ещё нет).
    fn load(&self) -> Result<Option<VersionedSnapshot>, StoreError>;

    /// Записать новое состояние, если версия в хранилище всё ещё
    /// `expected_version` (0 — хранилище пусто). Возвращает новую версию.
    fn compare_and_store(
        &mut self,
        expected_version: u64,
        state: &GameState,
    ) -> Result<u64, StoreError>;

    /// Удалить снапшот.
    fn clear(&mut self);
}

/// In-memory реализация. Снапшот лежит в виде JSON-строки — ровно то,
/// что внешний слой мог бы положить в localStorage или переслать
/// другой вкладке дословно.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: Option<(u64, String)>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сырая JSON-форма снапшота (для передачи наружу как есть).
    pub fn raw_json(&self) -> Option<&str> {
        self.slot.as_ref().map(|(_, json)| json.as_str())
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<VersionedSnapshot>, StoreError> {
        match &self.slot {
            None => Ok(None),
            Some((version, json)) => {
                let state: GameState = serde_json::from_str(json)?;
                Ok(Some(VersionedSnapshot {
                    version: *version,
                    state,
                }))
            }
        }
    }

    fn compare_and_store(
        &mut self,
        expected_version: u64,
        state: &GameState,
    ) -> Result<u64, StoreError> {
        let actual = self.slot.as_ref().map(|(v, _)| *v).unwrap_or(0);
        if actual != expected_version {
            return Err(StoreError::VersionConflict {
                expected: expected_version,
                actual,
            });
        }

        let json = serde_json::to_string(state)?;
        let next = actual + 1;
        self.slot = Some((next, json));
        Ok(next)
    }

    fn clear(&mut self) {
        self.slot = None;
    }
}
