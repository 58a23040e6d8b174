use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::PanelEvent;

/// Interval between seek-overlay refreshes.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spawn the seek ticker thread.
///
/// `position` is polled on each wake — it is the host's playback clock,
/// safe to read off the UI thread — and the result is fed into the event
/// channel as [`PanelEvent::Tick`]. The thread exits once the receiving
/// end of the channel is gone.
pub fn spawn_seek_ticker<F>(events: Sender<PanelEvent>, position: F) -> JoinHandle<()>
where
    F: Fn() -> f64 + Send + 'static,
{
    thread::spawn(move || {
        loop {
            thread::sleep(TICK_INTERVAL);
            let position_ms = position();
            if events.send(PanelEvent::Tick { position_ms }).is_err() {
                break;
            }
        }
    })
}
