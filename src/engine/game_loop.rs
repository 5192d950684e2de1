use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::hand::{HandOutcome, HandWinner, ShowdownResult, Street};
use crate::domain::player::{Seat, SeatState};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::betting::BettingRound;
use crate::engine::errors::EngineError;
use crate::engine::settlement::Settlement;
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;

use crate::eval::evaluate_best_hand;

/// Статус раздачи после применённого действия.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandStatus {
    Ongoing,
    Finished(HandOutcome),
}

/// Полное состояние одной раздачи heads-up. Плоские данные:
/// сериализуется целиком, восстановленная копия неотличима от оригинала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub config: GameConfig,
    /// Места по индексу Seat: [0] — первое, [1] — второе.
    pub seats: [SeatState; 2],
    /// Все 5 общих карт сданы при старте, но открыт только префикс
    /// длиной `revealed`.
    pub community: [Card; 5],
    /// Остаток колоды после раздачи. В heads-up не используется,
    /// хранится для симметрии и расширений.
    pub deck: Deck,
    /// Банк: всё, что ушло из стеков с начала раздачи.
    pub pot: Chips,
    /// Текущий раунд ставок (улица + счётчики).
    pub betting: BettingRound,
    /// Сколько общих карт открыто: 0/3/4/5, зеркало улицы.
    pub revealed: u8,
    /// Чей ход. Пока раздача живая — всегда не-сфолдивший.
    pub current_turn: Seat,
    /// false после фолда или вскрытия: действия больше не принимаются.
    pub in_progress: bool,
}

impl GameState {
    pub fn seat(&self, seat: Seat) -> &SeatState {
        &self.seats[seat.index()]
    }

    pub fn seat_mut(&mut self, seat: Seat) -> &mut SeatState {
        &mut self.seats[seat.index()]
    }

    /// Открытый префикс общих карт.
    pub fn revealed_community(&self) -> &[Card] {
        &self.community[..self.revealed as usize]
    }

    /// Минимальный легальный рейз в данный момент.
    pub fn min_raise(&self) -> Chips {
        self.betting.min_raise()
    }

    /// Сумма фишек в игре: оба стека + банк. Инвариант сохранения:
    /// до выплаты всегда равна двум стартовым стекам.
    pub fn total_chips(&self) -> Chips {
        self.seats[0].stack + self.seats[1].stack + self.pot
    }
}

/// Новая игра: свежая перетасованная колода, по 2 карманные карты
/// каждому месту, затем 5 общих; стартовые стеки, пустой банк, префлоп,
/// первым ходит первое место.
pub fn new_game<R: RandomSource>(config: GameConfig, rng: &mut R) -> GameState {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    let hole_one = draw_two(&mut deck);
    let hole_two = draw_two(&mut deck);
    let community = draw_five(&mut deck);

    GameState {
        seats: [
            SeatState::new(config.starting_stack, hole_one),
            SeatState::new(config.starting_stack, hole_two),
        ],
        community,
        deck,
        pot: Chips::ZERO,
        betting: BettingRound::opening(Street::Preflop, config.min_raise_baseline),
        revealed: 0,
        current_turn: Seat::One,
        in_progress: true,
        config,
    }
}

fn draw_two(deck: &mut Deck) -> [Card; 2] {
    let cards = deck.draw_n(2);
    [cards[0], cards[1]]
}

fn draw_five(deck: &mut Deck) -> [Card; 5] {
    let cards = deck.draw_n(5);
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

/// Применить действие игрока: один синхронный шаг машины состояний.
/// Либо состояние полностью переходит, либо действие отклонено
/// и состояние не тронуто.
pub fn apply_action<S: Settlement>(
    state: &mut GameState,
    seat: Seat,
    action: Action,
    settlement: &mut S,
) -> Result<HandStatus, EngineError> {
    validate_action(state, seat, &action)?;

    match action {
        Action::Fold => {
            state.seat_mut(seat).folded = true;
            state.betting.last_action = Some(ActionKind::Fold);
            state.in_progress = false;

            let outcome = HandOutcome::after_fold(seat.other(), state.pot);
            settlement.settle(&mut state.seats, &mut state.pot, &outcome);
            return Ok(HandStatus::Finished(outcome));
        }

        Action::Check => {
            state.betting.record_check();
        }

        Action::Call => {
            let to_call = state.seat(seat.other()).bet - state.seat(seat).bet;
            {
                let actor = state.seat_mut(seat);
                actor.stack -= to_call;
                actor.bet += to_call;
                actor.round_contribution += to_call;
            }
            state.pot += to_call;
            state.betting.record_call(state.config.min_raise_baseline);
        }

        Action::Raise(amount) => {
            let target = state.seat(seat.other()).bet + amount;
            let add = target - state.seat(seat).bet;
            {
                let actor = state.seat_mut(seat);
                actor.stack -= add;
                actor.bet = target;
                actor.round_contribution += add;
            }
            state.pot += add;
            state.betting.record_raise(amount);
        }
    }

    let bets_equal = state.seats[0].bet == state.seats[1].bet;
    if state.betting.is_complete(bets_equal) {
        advance_round(state, settlement)
    } else {
        state.current_turn = state.current_turn.other();
        Ok(HandStatus::Ongoing)
    }
}

/// Закрытие раунда ставок: сброс ставок, первая улица хода — всегда
/// за первым местом; дальше либо открываем карты борда, либо шоудаун.
fn advance_round<S: Settlement>(
    state: &mut GameState,
    settlement: &mut S,
) -> Result<HandStatus, EngineError> {
    for seat_state in state.seats.iter_mut() {
        seat_state.reset_for_new_round();
    }
    state.current_turn = Seat::One;

    let next_street = match state.betting.street {
        Street::Preflop => Street::Flop,
        Street::Flop => Street::Turn,
        Street::Turn => Street::River,
        Street::River => Street::Showdown,
        Street::Showdown => {
            return Err(EngineError::Internal("переход улицы после шоудауна"));
        }
    };

    state.betting = BettingRound::opening(next_street, state.config.min_raise_baseline);
    state.revealed = next_street.revealed_cards();

    if next_street != Street::Showdown {
        return Ok(HandStatus::Ongoing);
    }

    // Вскрытие: сравниваем лучшие руки, банк уходит победителю
    // (или делится при равных).
    let result = evaluate_showdown(state);
    let outcome = HandOutcome::after_showdown(result, state.pot);
    state.in_progress = false;
    settlement.settle(&mut state.seats, &mut state.pot, &outcome);
    Ok(HandStatus::Finished(outcome))
}

/// Сравнить руки обоих мест по лучшей 5-карточной комбинации из 7 карт.
/// Доступна и снаружи — для отображения и тестов.
pub fn evaluate_showdown(state: &GameState) -> ShowdownResult {
    let score_one = evaluate_best_hand(&state.seats[0].hole_cards, &state.community);
    let score_two = evaluate_best_hand(&state.seats[1].hole_cards, &state.community);

    let winner = if score_one > score_two {
        HandWinner::Seat(Seat::One)
    } else if score_two > score_one {
        HandWinner::Seat(Seat::Two)
    } else {
        HandWinner::Split
    };

    ShowdownResult {
        scores: [score_one, score_two],
        winner,
    }
}
