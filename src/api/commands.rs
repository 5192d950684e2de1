use serde::{Deserialize, Serialize};

use crate::api::dto::{map_hand_status, CommandResponse};
use crate::api::errors::ApiError;
use crate::api::queries::build_game_view;
use crate::domain::player::Seat;
use crate::engine::actions::Action;
use crate::engine::session::GameSession;
use crate::engine::settlement::Settlement;
use crate::engine::RandomSource;
use crate::infra::persistence::SnapshotStore;

/// Команда верхнего уровня от слоя представления.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новую игру (старая, если была, заменяется).
    NewGame,

    /// Действие игрока в текущей игре.
    Act(ActCommand),
}

/// Действие конкретного места.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActCommand {
    pub seat: Seat,
    pub action: Action,
}

/// Выполнить команду поверх сессии и собрать ответ для фронта.
///
/// `hero` — чьи карманные карты можно показать в ответе.
pub fn handle_command<P, S, R>(
    session: &mut GameSession<P, S>,
    rng: &mut R,
    command: Command,
    hero: Option<Seat>,
) -> Result<CommandResponse, ApiError>
where
    P: SnapshotStore,
    S: Settlement,
    R: RandomSource,
{
    match command {
        Command::NewGame => {
            let state = session.start_game(rng)?;
            Ok(CommandResponse::GameStarted(build_game_view(&state, hero)))
        }

        Command::Act(ActCommand { seat, action }) => {
            let status = session.apply(seat, action)?;
            let state = session.state()?.ok_or(ApiError::NoActiveGame)?;
            let view = build_game_view(&state, hero);
            Ok(map_hand_status(status, view))
        }
    }
}
