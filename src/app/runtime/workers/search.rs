use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    task::JoinSet,
    time::{Duration, sleep},
};

use crate::logic::SearchEvent;
use crate::sources::{SearchProvider, with_timeout};

/// What: Run the Search tab query worker until its input closes.
///
/// Inputs:
/// - `query_rx`: Raw query text, one message per edit
/// - `events`: Channel back into the Search screen
/// - `provider`: Search backend
/// - `debounce`: Quiet period before a query is emitted
/// - `timeout`: Optional per-call limit
///
/// Details:
/// - Debounces raw edits, then drops an emission equal to the previous one.
/// - Each emission gets a fresh id and aborts the in-flight provider call.
/// - Blank emissions resolve immediately with no provider call.
/// - Dropping the worker drops its `JoinSet`, aborting any call still running.
pub async fn run_query_worker(
    mut query_rx: mpsc::UnboundedReceiver<String>,
    events: mpsc::UnboundedSender<SearchEvent>,
    provider: Arc<dyn SearchProvider>,
    debounce: Duration,
    timeout: Option<Duration>,
) {
    let mut in_flight: JoinSet<()> = JoinSet::new();
    let mut last_emitted: Option<String> = None;
    let mut next_id: u64 = 0;
    loop {
        let Some(mut latest) = query_rx.recv().await else {
            break;
        };
        loop {
            select! {
                Some(new_q) = query_rx.recv() => { latest = new_q; }
                () = sleep(debounce) => { break; }
            }
        }
        if last_emitted.as_deref() == Some(latest.as_str()) {
            tracing::trace!(query = %latest, "[Search] Unchanged after debounce");
            continue;
        }
        last_emitted = Some(latest.clone());
        next_id += 1;
        let id = next_id;
        in_flight.shutdown().await;

        if latest.trim().is_empty() {
            if events
                .send(SearchEvent::SearchResolved { id, outcome: None })
                .is_err()
            {
                break;
            }
            continue;
        }
        if events.send(SearchEvent::SearchStarted { id }).is_err() {
            break;
        }
        tracing::debug!(id, query = %latest, "[Search] Dispatching search");
        let provider = Arc::clone(&provider);
        let tx = events.clone();
        in_flight.spawn(async move {
            let outcome = with_timeout("Search", timeout, provider.search(&latest)).await;
            let _ = tx.send(SearchEvent::SearchResolved {
                id,
                outcome: Some(outcome),
            });
        });
    }
    tracing::debug!("[Search] Query worker stopped");
}
