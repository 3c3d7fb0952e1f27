use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

/// The fixed polling cadence of the station dashboard.
pub(crate) const POLL_INTERVAL_MS: u64 = 30_000;

/// The kind of station page a session is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageKind {
    Overview,
    Details,
    Contact,
    About,
}

impl PageKind {
    /// Derive the page kind from the page URL.
    pub fn from_url(url: &str) -> PageKind {
        if url.contains("contact") {
            PageKind::Contact
        } else if url.contains("about") {
            PageKind::About
        } else if url.contains("details") {
            PageKind::Details
        } else {
            PageKind::Overview
        }
    }

    /// Live data is shown on every page except the static ones.
    pub fn shows_data(self) -> bool {
        !matches!(self, PageKind::Contact | PageKind::About)
    }
}

/// The tick source driving a polling session.
///
/// `wait` blocks until the next cycle is due and returns `false` once
/// the session should stop instead.
pub(crate) trait Ticker {
    fn wait(&mut self) -> bool;
}

/// The production tick source: sleeps the polling interval between
/// cycles, cancellable through a shared stop flag.
pub(crate) struct IntervalTicker {
    interval: Duration,
    stop: Arc<AtomicBool>,
}

impl IntervalTicker {
    const STOP_POLL_STEP: Duration = Duration::from_millis(250);

    pub fn new(interval_ms: u64) -> IntervalTicker {
        Self {
            interval: Duration::from_millis(interval_ms),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A handle that cancels the ticker from outside the polling loop.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stop))
    }
}

impl Ticker for IntervalTicker {
    fn wait(&mut self) -> bool {
        let mut remaining = self.interval;

        while !remaining.is_zero() {
            if self.stop.load(Ordering::Relaxed) {
                return false;
            }

            let step = remaining.min(Self::STOP_POLL_STEP);
            thread::sleep(step);
            remaining -= step;
        }

        !self.stop.load(Ordering::Relaxed)
    }
}

/// Cancels the [IntervalTicker] it was taken from.
pub(crate) struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// A tick source that never ticks: the session runs its immediate
/// cycle and stops.
pub(crate) struct OneShot;

impl Ticker for OneShot {
    fn wait(&mut self) -> bool {
        false
    }
}

/// The observable state of a polling session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    Idle,
    Scheduled,
    Fetching,
    Disabled,
}

/// One polling lifecycle, exclusively owning its timer.
///
/// The coordinator holds at most one session and replaces it wholesale
/// on navigation, so two timers can never run at once.
pub(crate) struct PollingSession {
    page: PageKind,
    state: SessionState,
}

impl PollingSession {
    pub fn new(page: PageKind) -> PollingSession {
        Self {
            page,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session: one immediate cycle, then one cycle per tick.
    ///
    /// Static pages disable the session before the first cycle. A failed
    /// cycle does not break the cadence; the next tick fires regardless,
    /// which is also the only retry the dashboard ever performs.
    pub fn run<C, T>(&mut self, mut cycle: C, mut ticker: T)
    where
        C: FnMut(),
        T: Ticker,
    {
        if !self.page.shows_data() {
            self.state = SessionState::Disabled;
            return;
        }

        loop {
            self.state = SessionState::Fetching;
            cycle();
            self.state = SessionState::Scheduled;

            if !ticker.wait() {
                break;
            }
        }

        self.state = SessionState::Idle;
    }
}
