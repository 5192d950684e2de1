use crate::domain::player::Seat;
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::GameState;

/// Проверка легальности действия при текущем состоянии. Ничего не мутирует:
/// отклонённое действие оставляет состояние байт-в-байт прежним.
pub fn validate_action(state: &GameState, seat: Seat, action: &Action) -> Result<(), EngineError> {
    if !state.in_progress {
        return Err(EngineError::HandOver);
    }
    if state.current_turn != seat {
        return Err(EngineError::NotYourTurn(seat));
    }

    let actor = state.seat(seat);
    let other = state.seat(seat.other());

    // Пока раздача живая, ход не может принадлежать сфолдившему,
    // но проверка дешёвая и держит инвариант явно.
    if actor.folded {
        return Err(EngineError::IllegalAction);
    }

    match action {
        Action::Fold => Ok(()),

        Action::Check => {
            if actor.bet == other.bet {
                Ok(())
            } else {
                Err(EngineError::CannotCheck)
            }
        }

        Action::Call => {
            if other.bet <= actor.bet {
                return Err(EngineError::CannotCall);
            }
            let to_call = other.bet - actor.bet;
            if actor.stack < to_call {
                return Err(EngineError::NotEnoughChips);
            }
            Ok(())
        }

        Action::Raise(amount) => {
            // Целевая ставка: ставка оппонента + amount.
            let target = other.bet + *amount;
            if target <= actor.bet {
                return Err(EngineError::IllegalAction);
            }
            if *amount < state.betting.min_raise() {
                return Err(EngineError::RaiseTooSmall);
            }
            let add = target - actor.bet;
            if actor.stack < add {
                return Err(EngineError::NotEnoughChips);
            }
            Ok(())
        }
    }
}
