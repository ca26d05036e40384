use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, TrySendError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{trace, warn};

use crate::basic::Ticks;

/// A background thread posting numbered ticks to whoever
/// owns the clock, at a fixed pace
///
/// At most one tick is ever pending, ticks that come due while the
/// owner is still busy are dropped and don't get a number
pub struct Clock {
    receiver: Receiver<Ticks>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    pub fn start(interval: Duration) -> Self {
        let (sender, receiver) = sync_channel::<Ticks>(1);
        let running = Arc::new(AtomicBool::new(true));

        let handle = thread::spawn({
            let running = Arc::clone(&running);
            move || {
                let mut tick = 0;
                // deadlines don't drift with the time spent sending
                let mut deadline = Instant::now();
                while running.load(Ordering::Acquire) {
                    deadline += interval;
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                    match sender.try_send(tick + 1) {
                        Ok(()) => tick += 1,
                        Err(TrySendError::Full(_)) => {}
                        // nobody is listening anymore
                        Err(TrySendError::Disconnected(_)) => break,
                    }
                }
                trace!("clock stopped after {} ticks", tick);
            }
        });

        Self {
            receiver,
            running,
            handle: Some(handle),
        }
    }

    /// Blocks until the next tick, ends once the clock is stopped
    pub fn ticks(&self) -> impl Iterator<Item = Ticks> + '_ {
        self.receiver.iter()
    }

    pub fn try_tick(&self) -> Option<Ticks> {
        self.receiver.try_recv().ok()
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("clock thread panicked");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop()
    }
}
