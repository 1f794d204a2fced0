use crossbeam_channel::{Receiver, Sender};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use thiserror::Error;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One elapsed period of the timer registered under `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Delivers `TimerTick { generation }` every `period` until the returned token is cancelled.
pub trait Scheduler {
    fn schedule(&mut self, period: Duration, generation: u64) -> Result<CancelToken, SchedulerError>;
}

/// Runs each schedule on its own thread, feeding ticks into a channel the UI loop drains.
#[derive(Debug, Clone)]
pub struct ThreadScheduler {
    tx: Sender<TimerTick>,
}

impl ThreadScheduler {
    pub fn new(tx: Sender<TimerTick>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, Receiver<TimerTick>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&mut self, period: Duration, generation: u64) -> Result<CancelToken, SchedulerError> {
        let token = CancelToken::new();
        let thread_token = token.clone();
        let tx = self.tx.clone();
        let ticker = crossbeam_channel::tick(period);

        thread::Builder::new()
            .name(format!("nihongo-quiz::timer-{}", generation))
            .spawn(move || {
                while ticker.recv().is_ok() {
                    if thread_token.is_cancelled() {
                        break;
                    }
                    if tx.send(TimerTick { generation }).is_err() {
                        // Receiver gone, nobody is listening anymore
                        break;
                    }
                }
            })?;

        Ok(token)
    }
}

#[derive(Debug, Clone)]
pub struct Scheduled {
    pub period: Duration,
    pub generation: u64,
    pub token: CancelToken,
}

/// Records schedules without running anything; the owner delivers ticks by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    scheduled: Vec<Scheduled>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled(&self) -> &[Scheduled] {
        &self.scheduled
    }

    pub fn latest(&self) -> Option<&Scheduled> {
        self.scheduled.last()
    }

    /// The tick the most recent live schedule would deliver next.
    pub fn next_tick(&self) -> Option<TimerTick> {
        self.latest()
            .filter(|s| !s.token.is_cancelled())
            .map(|s| TimerTick {
                generation: s.generation,
            })
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, period: Duration, generation: u64) -> Result<CancelToken, SchedulerError> {
        let token = CancelToken::new();
        self.scheduled.push(Scheduled {
            period,
            generation,
            token: token.clone(),
        });
        Ok(token)
    }
}

/// Whole-second countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns true on the tick that reaches zero, and only on that one.
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            0 => false,
            1 => {
                self.remaining = 0;
                true
            }
            _ => {
                self.remaining -= 1;
                false
            }
        }
    }
}

/// `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn test_countdown_expires_once() {
        let mut countdown = Countdown::new(3);
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 2);
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_cancel_token_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_manual_scheduler_records() {
        let mut scheduler = ManualScheduler::new();
        let token = scheduler.schedule(TICK_PERIOD, 4).unwrap();
        assert_eq!(scheduler.next_tick(), Some(TimerTick { generation: 4 }));
        token.cancel();
        assert_eq!(scheduler.next_tick(), None);
        assert_eq!(scheduler.scheduled().len(), 1);
    }

    #[test]
    fn test_thread_scheduler_ticks_until_cancelled() {
        let (mut scheduler, rx) = ThreadScheduler::channel();
        let token = scheduler.schedule(Duration::from_millis(10), 7).unwrap();
        let tick = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(tick, TimerTick { generation: 7 });

        token.cancel();
        // Drain anything already in flight, then nothing else should arrive.
        thread::sleep(Duration::from_millis(50));
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }
}
