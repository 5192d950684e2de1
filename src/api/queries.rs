use serde::{Deserialize, Serialize};

use crate::api::dto::{GameViewDto, SeatViewDto};
use crate::domain::player::Seat;
use crate::engine::game_loop::GameState;

/// Запросы «только чтение».
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние игры глазами героя (None — наблюдатель, карт не видно).
    GetGame { hero: Option<Seat> },
}

/// Результат запроса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Game(GameViewDto),
    NoGame,
}

/// Собрать DTO игры. Карманные карты отдаём только герою,
/// борд — только открытый префикс.
pub fn build_game_view(state: &GameState, hero: Option<Seat>) -> GameViewDto {
    let seats = [Seat::One, Seat::Two]
        .into_iter()
        .map(|seat| {
            let seat_state = state.seat(seat);
            SeatViewDto {
                seat,
                stack: seat_state.stack,
                bet: seat_state.bet,
                folded: seat_state.folded,
                hole_cards: if hero == Some(seat) {
                    Some(seat_state.hole_cards)
                } else {
                    None
                },
            }
        })
        .collect();

    GameViewDto {
        street: state.betting.street,
        pot: state.pot,
        board: state.revealed_community().to_vec(),
        seats,
        current_turn: state.current_turn,
        last_action: state.betting.last_action,
        min_raise: state.min_raise(),
        in_progress: state.in_progress,
    }
}
