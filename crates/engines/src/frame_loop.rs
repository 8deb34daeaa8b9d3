//! Cooperative frame loop with an explicit tick source and cancellation.
//!
//! A [`Ticker`] decides when (and whether) the next frame happens; a
//! [`StopToken`] lets the owner end the loop from outside. Neither needs a
//! real display, so the loop runs the same in tests, the CLI, and the browser.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rosette_core::Surface;

use crate::sequence::Sequence;

/// Source of frame ticks.
pub trait Ticker {
    /// Blocks until the next frame is due. Returns `false` when no more
    /// frames will come.
    fn next_tick(&mut self) -> bool;
}

/// Yields exactly `n` ticks with no delay.
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: usize,
}

impl FrameBudget {
    pub fn new(frames: usize) -> Self {
        Self { remaining: frames }
    }
}

impl Ticker for FrameBudget {
    fn next_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Yields ticks paced at a fixed period, optionally capped at a frame budget.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    budget: Option<usize>,
    last: Option<Instant>,
}

impl Interval {
    /// Creates an interval ticker. `budget` of `None` ticks forever.
    pub fn new(period: Duration, budget: Option<usize>) -> Self {
        Self {
            period,
            budget,
            last: None,
        }
    }

    /// Ticker paced at `fps` frames per second. Non-positive rates tick unpaced.
    pub fn from_fps(fps: f64, budget: Option<usize>) -> Self {
        let period = if fps > 0.0 && fps.is_finite() {
            Duration::from_secs_f64(1.0 / fps)
        } else {
            Duration::ZERO
        };
        Self::new(period, budget)
    }
}

impl Ticker for Interval {
    fn next_tick(&mut self) -> bool {
        match self.budget.as_mut() {
            Some(0) => return false,
            Some(n) => *n -= 1,
            None => {}
        }
        if let Some(last) = self.last {
            let due = last + self.period;
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
        }
        self.last = Some(Instant::now());
        true
    }
}

/// Shared cancellation flag for a running [`FrameLoop`].
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the loop stop before its next frame.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Summary of a [`FrameLoop::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    /// Frames rendered during this run.
    pub frames: usize,
    /// Whether the sequence's terminal stage had completed when the loop ended.
    pub finished: bool,
    /// Whether the loop ended because the stop token was cancelled.
    pub stopped: bool,
}

/// Drives a [`Sequence`] one tick per frame until stopped or out of ticks.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    stop: StopToken,
}

impl FrameLoop {
    pub fn new(stop: StopToken) -> Self {
        Self { stop }
    }

    /// A handle that cancels this loop.
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    /// Renders a single frame unless the loop has been stopped.
    ///
    /// Returns `true` if the caller should schedule another frame.
    pub fn frame(&self, sequence: &mut Sequence, surface: &mut dyn Surface) -> bool {
        if self.stop.is_cancelled() {
            return false;
        }
        sequence.tick(surface);
        true
    }

    /// Runs frames until the stop token is cancelled or `ticker` is exhausted.
    pub fn run(
        &self,
        sequence: &mut Sequence,
        surface: &mut dyn Surface,
        ticker: &mut dyn Ticker,
    ) -> LoopReport {
        let mut frames = 0;
        let stopped = loop {
            if self.stop.is_cancelled() {
                break true;
            }
            if !ticker.next_tick() {
                break false;
            }
            if !self.frame(sequence, surface) {
                break true;
            }
            frames += 1;
        };
        let report = LoopReport {
            frames,
            finished: sequence.is_finished(),
            stopped,
        };
        log::debug!("frame loop ended: {report:?}");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosette_core::{Point, Recorder};
    use rosette_rose::{MaurerRose, RoseCurve};

    fn reference_sequence() -> Sequence {
        Sequence::new(vec![
            Box::new(MaurerRose::new(Point::ZERO, 100.0, 6.0, 71.0).unwrap()),
            Box::new(RoseCurve::new(Point::ZERO, 100.0, 6.0, 0.02).unwrap()),
        ])
        .unwrap()
    }

    /// Ticker that cancels a token after a fixed number of ticks.
    struct CancelAfter {
        ticks: usize,
        token: StopToken,
    }

    impl Ticker for CancelAfter {
        fn next_tick(&mut self) -> bool {
            if self.ticks == 0 {
                self.token.cancel();
            } else {
                self.ticks -= 1;
            }
            true
        }
    }

    #[test]
    fn frame_budget_yields_exactly_n_ticks() {
        let mut ticker = FrameBudget::new(3);
        assert!(ticker.next_tick());
        assert!(ticker.next_tick());
        assert!(ticker.next_tick());
        assert!(!ticker.next_tick());
        assert!(!ticker.next_tick());
    }

    #[test]
    fn run_stops_when_ticks_run_out() {
        let mut sequence = reference_sequence();
        let mut recorder = Recorder::new();
        let report =
            FrameLoop::default().run(&mut sequence, &mut recorder, &mut FrameBudget::new(10));
        assert_eq!(
            report,
            LoopReport {
                frames: 10,
                finished: false,
                stopped: false
            }
        );
        assert_eq!(sequence.frames(), 10);
    }

    #[test]
    fn run_to_completion_reports_finished() {
        let mut sequence = reference_sequence();
        let budget = sequence.remaining_steps();
        let report = FrameLoop::default().run(
            &mut sequence,
            &mut Recorder::new(),
            &mut FrameBudget::new(budget),
        );
        assert_eq!(report.frames, 361 + 315);
        assert!(report.finished);
        assert!(!report.stopped);
    }

    #[test]
    fn cancelled_token_stops_a_perpetual_loop() {
        let stop = StopToken::new();
        let frame_loop = FrameLoop::new(stop.clone());
        let mut ticker = CancelAfter {
            ticks: 25,
            token: stop,
        };
        let mut sequence = reference_sequence();
        let report = frame_loop.run(&mut sequence, &mut Recorder::new(), &mut ticker);
        assert!(report.stopped);
        assert_eq!(report.frames, 25);
    }

    #[test]
    fn loop_keeps_ticking_after_the_terminal_stage_completes() {
        let stop = StopToken::new();
        let frame_loop = FrameLoop::new(stop.clone());
        let mut ticker = CancelAfter {
            ticks: 1000,
            token: stop,
        };
        let mut sequence = reference_sequence();
        let mut recorder = Recorder::new();
        let report = frame_loop.run(&mut sequence, &mut recorder, &mut ticker);
        assert_eq!(report.frames, 1000);
        assert!(report.finished);
        assert_eq!(recorder.stroke_count(), 361 + 315);
    }

    #[test]
    fn pre_cancelled_loop_renders_nothing() {
        let frame_loop = FrameLoop::default();
        frame_loop.stop_token().cancel();
        let mut recorder = Recorder::new();
        let mut sequence = reference_sequence();
        let report =
            frame_loop.run(&mut sequence, &mut recorder, &mut FrameBudget::new(5));
        assert!(report.stopped);
        assert_eq!(report.frames, 0);
        assert!(recorder.is_empty());
        assert!(!frame_loop.frame(&mut sequence, &mut recorder));
    }

    #[test]
    fn frame_renders_one_tick() {
        let frame_loop = FrameLoop::default();
        let mut sequence = reference_sequence();
        let mut recorder = Recorder::new();
        assert!(frame_loop.frame(&mut sequence, &mut recorder));
        assert_eq!(sequence.frames(), 1);
        assert_eq!(recorder.stroke_count(), 1);
    }

    #[test]
    fn stop_token_clones_share_state() {
        let token = StopToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn interval_respects_budget() {
        let mut ticker = Interval::new(Duration::ZERO, Some(2));
        assert!(ticker.next_tick());
        assert!(ticker.next_tick());
        assert!(!ticker.next_tick());
    }

    #[test]
    fn interval_paces_ticks() {
        let mut ticker = Interval::new(Duration::from_millis(5), Some(3));
        let start = Instant::now();
        while ticker.next_tick() {}
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn interval_from_non_positive_fps_is_unpaced() {
        let mut ticker = Interval::from_fps(0.0, Some(1));
        assert!(ticker.next_tick());
        assert!(!ticker.next_tick());
    }
}
