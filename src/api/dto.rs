use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandOutcome, HandWinner, OutcomeReason, Street};
use crate::domain::player::Seat;
use crate::engine::actions::ActionKind;
use crate::engine::game_loop::HandStatus;
use crate::eval::describe;

/// DTO одного места.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatViewDto {
    pub seat: Seat,
    pub stack: Chips,
    pub bet: Chips,
    pub folded: bool,
    /// Карманные карты — только для героя, иначе None.
    pub hole_cards: Option<[Card; 2]>,
}

/// DTO состояния игры: всё, что нужно фронту для отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub street: Street,
    pub pot: Chips,
    /// Только ОТКРЫТЫЙ префикс борда: неоткрытые общие карты
    /// из движка не выходят.
    pub board: Vec<Card>,
    pub seats: Vec<SeatViewDto>,
    pub current_turn: Seat,
    pub last_action: Option<ActionKind>,
    /// Минимальный легальный рейз прямо сейчас.
    pub min_raise: Chips,
    pub in_progress: bool,
}

/// DTO итога раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeDto {
    /// None — банк поделён поровну.
    pub winner: Option<Seat>,
    pub pot: Chips,
    pub reason: OutcomeReason,
    /// Описания рук по местам (только при вскрытии).
    pub hands: Option<[String; 2]>,
}

impl OutcomeDto {
    pub fn from_outcome(outcome: &HandOutcome) -> Self {
        let winner = match outcome.winner {
            HandWinner::Seat(seat) => Some(seat),
            HandWinner::Split => None,
        };
        let hands = outcome
            .showdown
            .map(|result| [describe(result.scores[0]), describe(result.scores[1])]);

        Self {
            winner,
            pot: outcome.pot,
            reason: outcome.reason,
            hands,
        }
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Игра создана, раздача началась.
    GameStarted(GameViewDto),

    /// Действие принято, раздача продолжается.
    GameState(GameViewDto),

    /// Раздача завершена.
    HandFinished {
        game: GameViewDto,
        outcome: OutcomeDto,
    },
}

/// Преобразовать статус движка в ответ API.
pub fn map_hand_status(status: HandStatus, view: GameViewDto) -> CommandResponse {
    match status {
        HandStatus::Ongoing => CommandResponse::GameState(view),
        HandStatus::Finished(outcome) => CommandResponse::HandFinished {
            game: view,
            outcome: OutcomeDto::from_outcome(&outcome),
        },
    }
}
