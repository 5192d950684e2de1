use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;
use crate::engine::session::SessionError;

/// Ошибки внешнего API — то, что отдаём фронту/клиенту.
/// Сериализуемые значения, без внутренних типов движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    BadRequest(String),

    /// Игры ещё нет — сначала NewGame.
    NoActiveGame,

    /// Параллельный писатель успел раньше: перечитайте состояние.
    Conflict(String),

    /// Отказ движка (очередь хода, легальность ставки).
    Engine(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoActiveGame => ApiError::NoActiveGame,
            SessionError::Store(e) => ApiError::Conflict(e.to_string()),
            SessionError::Engine(e) => ApiError::Engine(e.to_string()),
        }
    }
}
