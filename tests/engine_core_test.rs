use holdem_engine::domain::{
    chips::Chips,
    config::GameConfig,
    hand::Street,
    player::Seat,
};
use holdem_engine::engine::{
    actions::{Action, ActionKind},
    betting::BettingRound,
    errors::EngineError,
    game_loop::new_game,
    validation::validate_action,
    LocalSettlement, RandomSource, Settlement,
};

/// Детерминированный RNG для тестов: shuffle ничего не делает,
/// колода остаётся в порядке standard_52.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

//
// actions.rs
//
#[test]
fn action_kind_strips_amount() {
    assert_eq!(Action::Fold.kind(), ActionKind::Fold);
    assert_eq!(Action::Check.kind(), ActionKind::Check);
    assert_eq!(Action::Call.kind(), ActionKind::Call);
    assert_eq!(Action::Raise(Chips(50)).kind(), ActionKind::Raise);
    assert_eq!(ActionKind::Raise.to_string(), "raise");
}

//
// betting.rs
//
#[test]
fn betting_round_opening_state() {
    let round = BettingRound::opening(Street::Flop, Chips(10));
    assert_eq!(round.street, Street::Flop);
    assert_eq!(round.actions_taken, 0);
    assert_eq!(round.last_action, None);
    assert_eq!(round.last_raise, Chips(10));
    assert_eq!(round.min_raise(), Chips(20));
}

#[test]
fn betting_round_completes_after_two_actions_with_equal_bets() {
    let mut round = BettingRound::opening(Street::Preflop, Chips(10));
    assert!(!round.is_complete(true));

    round.record_check();
    assert!(!round.is_complete(true));

    round.record_check();
    assert!(round.is_complete(true));
    // Уравненность ставок обязательна даже при двух действиях.
    assert!(!round.is_complete(false));
}

#[test]
fn raise_reopens_round_and_doubles_minimum() {
    let mut round = BettingRound::opening(Street::Turn, Chips(10));
    round.record_check();
    round.record_check();
    assert_eq!(round.actions_taken, 2);

    // Рейз сбрасывает счётчик: оппонент обязан ответить ещё раз.
    round.record_raise(Chips(40));
    assert_eq!(round.actions_taken, 1);
    assert_eq!(round.last_raise, Chips(40));
    assert_eq!(round.min_raise(), Chips(80));
    assert_eq!(round.last_action, Some(ActionKind::Raise));
}

#[test]
fn call_resets_minimum_raise_to_baseline() {
    let mut round = BettingRound::opening(Street::River, Chips(10));
    round.record_raise(Chips(100));
    assert_eq!(round.min_raise(), Chips(200));

    round.record_call(Chips(10));
    assert_eq!(round.last_raise, Chips(10));
    assert_eq!(round.min_raise(), Chips(20));
    assert_eq!(round.actions_taken, 2);
}

//
// validation.rs
//
#[test]
fn validate_rejects_out_of_turn_action() {
    let state = new_game(GameConfig::default(), &mut DummyRng);
    let err = validate_action(&state, Seat::Two, &Action::Check).unwrap_err();
    assert!(matches!(err, EngineError::NotYourTurn(Seat::Two)));
}

#[test]
fn validate_check_requires_equal_bets() {
    let mut state = new_game(GameConfig::default(), &mut DummyRng);
    validate_action(&state, Seat::One, &Action::Check).unwrap();

    // Оппонент «поставил» — check больше нелегален.
    state.seats[1].bet = Chips(20);
    let err = validate_action(&state, Seat::One, &Action::Check).unwrap_err();
    assert!(matches!(err, EngineError::CannotCheck));
}

#[test]
fn validate_call_requires_outstanding_bet_and_chips() {
    let mut state = new_game(GameConfig::default(), &mut DummyRng);

    let err = validate_action(&state, Seat::One, &Action::Call).unwrap_err();
    assert!(matches!(err, EngineError::CannotCall));

    state.seats[1].bet = Chips(300);
    validate_action(&state, Seat::One, &Action::Call).unwrap();

    state.seats[0].stack = Chips(100);
    let err = validate_action(&state, Seat::One, &Action::Call).unwrap_err();
    assert!(matches!(err, EngineError::NotEnoughChips));
}

#[test]
fn validate_raise_enforces_minimum_and_stack() {
    let state = new_game(GameConfig::default(), &mut DummyRng);

    // lastRaise стартует с базовых 10 → минимум 20.
    let err = validate_action(&state, Seat::One, &Action::Raise(Chips(19))).unwrap_err();
    assert!(matches!(err, EngineError::RaiseTooSmall));

    validate_action(&state, Seat::One, &Action::Raise(Chips(20))).unwrap();

    let err = validate_action(&state, Seat::One, &Action::Raise(Chips(1001))).unwrap_err();
    assert!(matches!(err, EngineError::NotEnoughChips));

    let err = validate_action(&state, Seat::One, &Action::Raise(Chips(0))).unwrap_err();
    assert!(matches!(err, EngineError::IllegalAction));
}

//
// game_loop.rs — состояние
//
#[test]
fn game_state_helpers() {
    let state = new_game(GameConfig::default(), &mut DummyRng);

    assert_eq!(state.revealed_community().len(), 0);
    assert_eq!(state.min_raise(), Chips(20));
    assert_eq!(state.total_chips(), Chips(2000));
    assert_eq!(state.seat(Seat::One).stack, Chips(1000));
    assert_eq!(state.seat(Seat::Two).stack, Chips(1000));
}

//
// settlement.rs — делёжка напрямую
//
#[test]
fn local_settlement_splits_odd_pot_floor_ceil() {
    use holdem_engine::domain::hand::{HandOutcome, HandWinner, OutcomeReason};

    let mut state = new_game(GameConfig::default(), &mut DummyRng);
    state.seats[0].stack = Chips(950);
    state.seats[1].stack = Chips(949);
    let mut pot = Chips(101);

    let outcome = HandOutcome {
        winner: HandWinner::Split,
        pot,
        reason: OutcomeReason::Showdown,
        showdown: None,
    };

    LocalSettlement.settle(&mut state.seats, &mut pot, &outcome);

    // floor первому месту, ceil второму: 50 + 51, всё до фишки.
    assert_eq!(state.seats[0].stack, Chips(1000));
    assert_eq!(state.seats[1].stack, Chips(1000));
    assert_eq!(pot, Chips::ZERO);
}
