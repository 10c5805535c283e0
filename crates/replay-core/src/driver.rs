use tracing::debug;

use crate::engine::ReplayEngine;
use crate::view::LogView;

/// Ticks the engine and sleeps until the next fire time until nothing is
/// pending. Returns the number of lines fired.
///
/// The engine's clock has to advance with tokio time (`TokioClock`), or this
/// never finishes.
pub async fn run_until_idle<V: LogView>(engine: &mut ReplayEngine<V>) -> usize {
    let mut fired = 0;
    loop {
        fired += engine.tick();
        match engine.time_until_next() {
            Some(wait) => tokio::time::sleep(wait).await,
            None => break,
        }
    }
    debug!(fired, "playback drained");
    fired
}
