//! Runs a [`Board`] on the current thread without a host event loop.

use std::time::{Duration, Instant};

use crate::{Board, RunMode};

/// Runs the board without a callback.
///
/// For more information see [`run_with_callback`].
pub fn run(board: &mut Board) {
    run_with_callback(board, (), |_, _| {})
}

/// Advances the board at its tick period until it is stopped, blocking the current thread.
///
/// The given callback is called after every generation & can stop the board to end the run.
/// The only other value it can mutate is the given `Data` value, which allows the callback to persist its own state
/// between generations. The `Data` is returned once the board has stopped.
///
/// An idle board returns straight away. A zero tick period runs uncapped.
pub fn run_with_callback<Data, Callback>(board: &mut Board, mut data: Data, mut callback: Callback) -> Data
where
    Callback: FnMut(&mut Data, &mut Board),
{
    // Used to control the generations per second.
    // The first generation is due when the board's own timer is, one period after it was played.
    let mut tick_period = board.tick_period();
    let first_tick = match board.run_mode() {
        RunMode::Running(timer) => timer.next_tick(),
        RunMode::Idle => Instant::now() + tick_period,
    };
    let mut tick_rate_limiter = create_limiter(first_tick, tick_period);

    while board.is_running() {
        if board.tick_period() != tick_period {
            tick_period = board.tick_period();
            match &mut tick_rate_limiter {
                Some(limiter) if !tick_period.is_zero() => limiter.set_period(tick_period),
                _ => tick_rate_limiter = create_limiter(Instant::now() + tick_period, tick_period),
            }
        }

        if let Some(limiter) = &mut tick_rate_limiter {
            limiter.tick();
        }

        board.advance_generation();
        callback(&mut data, board);
    }

    data
}

/// Creates an interval that first completes at `first_tick`, or [`None`] if the period is zero.
fn create_limiter(first_tick: Instant, tick_period: Duration) -> Option<spin_sleep_util::Interval> {
    if tick_period.is_zero() {
        return None;
    }

    let mut limiter = spin_sleep_util::interval_at(first_tick, tick_period);
    limiter.set_missed_tick_behavior(spin_sleep_util::MissedTickBehavior::Skip);
    Some(limiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::blinker_board;

    #[test]
    /// The callback sees every generation & stopping the board ends the run.
    fn stops_when_callback_stops() {
        let mut board = blinker_board().with_tick_period(Duration::from_millis(1));
        board.play();

        let frames = run_with_callback(&mut board, Vec::new(), |frames, board| {
            frames.push(board.to_string());
            if board.generation() == 2 {
                board.stop();
            }
        });

        assert_eq!(frames, [".#.\n.#.\n.#.\n", "...\n###\n...\n"]);
        assert_eq!(board.generation(), 2);
        assert!(!board.is_running());
    }

    #[test]
    /// The first generation comes one period after playing, not straight away.
    fn first_generation_waits_a_period() {
        let period = Duration::from_millis(100);
        let mut board = blinker_board().with_tick_period(period);

        let started = Instant::now();
        board.play();
        let first = run_with_callback(&mut board, None, |first, board| {
            *first = Some(started.elapsed());
            board.stop();
        });

        let first = first.unwrap();
        assert!(first >= period * 9 / 10, "first generation after {first:?}");
        assert_eq!(board.generation(), 1);
    }

    #[test]
    /// An idle board is not advanced.
    fn idle_board_returns() {
        let mut board = blinker_board();

        run(&mut board);
        assert_eq!(board.generation(), 0);
    }

    #[test]
    /// A zero period runs without sleeping.
    fn uncapped() {
        let mut board = blinker_board().with_tick_period(Duration::ZERO);
        board.play();

        let ticks = run_with_callback(&mut board, 0, |ticks, board| {
            *ticks += 1;
            if *ticks == 100 {
                board.stop();
            }
        });

        assert_eq!(ticks, 100);
        assert_eq!(board.to_string(), "...\n###\n...\n");
    }
}
