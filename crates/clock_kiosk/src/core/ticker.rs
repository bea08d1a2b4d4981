use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::debug;

/// A tick from one of the kiosk's repeating timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickEvent {
    /// Refresh every clock face (default 1s)
    Clock,
    /// Refresh the header date (default 60s)
    Date,
    /// Re-evaluate meeting windows (default 30s)
    MeetingCheck,
}

/// Periods for the three repeating timers, injectable for tests
#[derive(Debug, Clone, Copy)]
pub struct TickerPeriods {
    pub clock: Duration,
    pub date: Duration,
    pub meeting: Duration,
}

impl Default for TickerPeriods {
    fn default() -> Self {
        Self {
            clock: Duration::from_secs(1),
            date: Duration::from_secs(60),
            meeting: Duration::from_secs(30),
        }
    }
}

/// Scheduler owning the three repeating tick tasks.
///
/// Each task forwards its `TickEvent` over the channel; the presentation
/// loop on the receiving end decides what to recompute. Shutdown cancels all
/// tasks cooperatively, and tasks also stop on their own once the receiver
/// is dropped.
pub struct Ticker {
    cancel_token: tokio_util::sync::CancellationToken,
    handles: Vec<JoinHandle<()>>,
}

impl Ticker {
    pub fn start(periods: TickerPeriods, sender: mpsc::Sender<TickEvent>) -> Self {
        let cancel_token = tokio_util::sync::CancellationToken::new();

        let handles = vec![
            spawn_tick_task(
                TickEvent::Clock,
                periods.clock,
                sender.clone(),
                cancel_token.clone(),
            ),
            spawn_tick_task(
                TickEvent::Date,
                periods.date,
                sender.clone(),
                cancel_token.clone(),
            ),
            spawn_tick_task(
                TickEvent::MeetingCheck,
                periods.meeting,
                sender,
                cancel_token.clone(),
            ),
        ];

        tracing::info!(
            clock_period_ms = periods.clock.as_millis() as u64,
            date_period_ms = periods.date.as_millis() as u64,
            meeting_period_ms = periods.meeting.as_millis() as u64,
            "Ticker started"
        );

        Self {
            cancel_token,
            handles,
        }
    }

    /// Cancel all tick tasks and wait for them to exit
    pub async fn shutdown(self) {
        self.cancel_token.cancel();
        for handle in self.handles {
            let _ = handle.await;
        }
        debug!("Ticker shut down");
    }
}

fn spawn_tick_task(
    event: TickEvent,
    period: Duration,
    sender: mpsc::Sender<TickEvent>,
    cancel_token: tokio_util::sync::CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        // The initial frame is rendered before the ticker starts, so the
        // first tick fires one full period in
        let mut interval = interval_at(Instant::now() + period, period);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if sender.send(event).await.is_err() {
                        debug!(?event, "Tick receiver dropped, stopping task");
                        break;
                    }
                }
                _ = cancel_token.cancelled() => {
                    debug!(?event, "Tick task cancelled");
                    break;
                }
            }
        }
    })
}
