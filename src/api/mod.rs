//! Внешняя поверхность движка: команды, read-only запросы, DTO.
//!
//! Всё сериализуемое: слой представления может гонять эти типы
//! через любой транспорт, движку всё равно.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::{handle_command, ActCommand, Command};
pub use dto::{CommandResponse, GameViewDto, OutcomeDto, SeatViewDto};
pub use errors::ApiError;
pub use queries::{build_game_view, Query, QueryResponse};
