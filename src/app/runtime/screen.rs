//! Per-screen task: owns the state, runs the reducer, executes effects.
//!
//! A screen is one tokio task draining its intent channel, the results of its
//! own child tasks, and (optionally) the favorites and settings feeds. After
//! every event it publishes the new snapshot on a `watch` channel. Child tasks
//! live in a `JoinSet` owned by the screen task, so tearing the screen down
//! aborts all of them.

use std::collections::HashMap;
use std::future::Future;

use tokio::select;
use tokio::sync::{mpsc, watch};
use tokio::task::{AbortHandle, JoinHandle, JoinSet};

use crate::settings::AppSettings;
use crate::state::FavoritesSet;

/// Glue between a pure reducer and the runtime.
pub trait ScreenDriver: Send + 'static {
    /// Snapshot type published to observers.
    type State: Clone + Send + Sync + 'static;
    /// Inputs: user intents and child task results alike.
    type Event: Send + 'static;
    /// Effects requested by the reducer.
    type Effect: Send;

    /// Name used in logs.
    const NAME: &'static str;

    /// Pure state transition.
    fn reduce(&self, state: Self::State, event: Self::Event) -> (Self::State, Vec<Self::Effect>);

    /// Perform one effect, spawning child tasks on `scope` as needed.
    fn execute(&mut self, effect: Self::Effect, scope: &mut TaskScope<Self::Event>);

    /// Events applied once before the first snapshot is published.
    fn start(&mut self, _scope: &mut TaskScope<Self::Event>) -> Vec<Self::Event> {
        Vec::new()
    }

    /// Map a favorites emission to an event, if the screen cares.
    fn favorites_event(&self, _favorites: FavoritesSet) -> Option<Self::Event> {
        None
    }

    /// Map a settings emission to an event, if the screen cares.
    fn settings_event(&self, _settings: &AppSettings) -> Option<Self::Event> {
        None
    }
}

/// Child tasks of one screen.
///
/// Every task's output is an event delivered back to the screen. Named slots
/// hold at most one task: spawning into an occupied slot aborts the previous one.
pub struct TaskScope<E> {
    /// All children; dropped (and thereby aborted) with the screen.
    tasks: JoinSet<()>,
    /// Latest-wins slots.
    slots: HashMap<&'static str, AbortHandle>,
    /// Channel back into the screen loop.
    results: mpsc::UnboundedSender<E>,
}

impl<E: Send + 'static> TaskScope<E> {
    /// Scope delivering results on `results`.
    pub fn new(results: mpsc::UnboundedSender<E>) -> Self {
        Self {
            tasks: JoinSet::new(),
            slots: HashMap::new(),
            results,
        }
    }

    /// Spawn a task whose output is fed back as an event.
    pub fn spawn<F>(&mut self, fut: F)
    where
        F: Future<Output = E> + Send + 'static,
    {
        let tx = self.results.clone();
        self.tasks.spawn(async move {
            let _ = tx.send(fut.await);
        });
    }

    /// What: Spawn into a named slot, aborting whatever occupied it.
    ///
    /// Inputs:
    /// - `slot`: Slot name (e.g. `"search"`)
    /// - `fut`: Task producing the event to deliver
    ///
    /// Details:
    /// - An aborted task never delivers its event; one that already delivered is
    ///   filtered by the reducer's own staleness checks.
    pub fn spawn_latest<F>(&mut self, slot: &'static str, fut: F)
    where
        F: Future<Output = E> + Send + 'static,
    {
        self.cancel(slot);
        let tx = self.results.clone();
        let handle = self.tasks.spawn(async move {
            let _ = tx.send(fut.await);
        });
        self.slots.insert(slot, handle);
    }

    /// Abort the task in `slot`; returns whether one was there.
    pub fn cancel(&mut self, slot: &'static str) -> bool {
        self.slots.remove(slot).is_some_and(|h| {
            let running = !h.is_finished();
            h.abort();
            running
        })
    }

    /// Spawn a long-lived worker that may emit any number of events.
    pub fn spawn_worker<F, Fut>(&mut self, worker: F)
    where
        F: FnOnce(mpsc::UnboundedSender<E>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.tasks.spawn(worker(self.results.clone()));
    }

    /// Number of children not yet reaped.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no children are pending.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Handle to a running screen.
///
/// Dropping the handle aborts the screen task and, with it, every child.
pub struct Screen<S, E> {
    /// Intent channel into the screen loop.
    intents: mpsc::UnboundedSender<E>,
    /// Latest published snapshot.
    state: watch::Receiver<S>,
    /// Screen task; `None` once shut down.
    task: Option<JoinHandle<()>>,
}

impl<S: Clone, E> Screen<S, E> {
    /// Send an intent; `false` when the screen has stopped.
    pub fn send(&self, event: E) -> bool {
        self.intents.send(event).is_ok()
    }

    /// Copy of the latest snapshot.
    pub fn state(&self) -> S {
        self.state.borrow().clone()
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.clone()
    }

    /// What: Wait until a snapshot satisfies `pred`.
    ///
    /// Output:
    /// - The matching snapshot, or `None` if the screen stopped first.
    pub async fn wait_for(&self, pred: impl FnMut(&S) -> bool) -> Option<S> {
        let mut rx = self.state.clone();
        rx.wait_for(pred).await.ok().map(|s| s.clone())
    }

    /// Close the intent channel and wait for the screen task to finish.
    pub async fn shutdown(mut self) {
        let task = self.task.take();
        drop(self);
        if let Some(task) = task {
            let _ = task.await;
        }
    }
}

impl<S, E> Drop for Screen<S, E> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Optional feeds a screen subscribes to.
#[derive(Default)]
pub struct Feeds {
    /// Favorites store receiver.
    pub favorites: Option<watch::Receiver<FavoritesSet>>,
    /// Settings store receiver.
    pub settings: Option<watch::Receiver<AppSettings>>,
}

/// What: Wait for the next value on an optional watch receiver.
///
/// Output:
/// - `Some(Some(value))` on change, `Some(None)` when the sender is gone.
/// - Never resolves while `rx` is `None`.
async fn next_value<T: Clone>(rx: &mut Option<watch::Receiver<T>>) -> Option<T> {
    match rx {
        Some(rx) => match rx.changed().await {
            Ok(()) => Some(rx.borrow_and_update().clone()),
            Err(_) => None,
        },
        None => std::future::pending().await,
    }
}

/// What selected the next loop iteration.
enum Wake<E> {
    /// Event for the reducer.
    Event(E),
    /// Favorites emitted a new set.
    Favorites(FavoritesSet),
    /// Settings emitted a new value.
    Settings(AppSettings),
    /// Favorites sender dropped.
    FavoritesClosed,
    /// Settings sender dropped.
    SettingsClosed,
    /// A child finished and was reaped.
    Reaped,
    /// Intent channel closed.
    Stop,
}

/// What: Spawn a screen task.
///
/// Inputs:
/// - `driver`: Reducer plus effect executor
/// - `initial`: Initial snapshot
/// - `feeds`: Favorites/settings receivers the screen reacts to
///
/// Output:
/// - Handle for sending intents and observing snapshots.
///
/// Details:
/// - Must be called inside a tokio runtime.
pub fn spawn_screen<D: ScreenDriver>(
    driver: D,
    initial: D::State,
    feeds: Feeds,
) -> Screen<D::State, D::Event> {
    let (intents_tx, intents_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(initial.clone());
    let task = tokio::spawn(run_screen(driver, initial, intents_rx, state_tx, feeds));
    Screen {
        intents: intents_tx,
        state: state_rx,
        task: Some(task),
    }
}

/// Apply one event and execute the resulting effects.
fn step<D: ScreenDriver>(
    driver: &mut D,
    state: D::State,
    event: D::Event,
    scope: &mut TaskScope<D::Event>,
) -> D::State {
    let (next, effects) = driver.reduce(state, event);
    for effect in effects {
        driver.execute(effect, scope);
    }
    next
}

/// Screen loop body; see [`spawn_screen`].
async fn run_screen<D: ScreenDriver>(
    mut driver: D,
    mut state: D::State,
    mut intents: mpsc::UnboundedReceiver<D::Event>,
    state_tx: watch::Sender<D::State>,
    feeds: Feeds,
) {
    let Feeds {
        mut favorites,
        mut settings,
    } = feeds;
    let (results_tx, mut results) = mpsc::unbounded_channel();
    let mut scope = TaskScope::new(results_tx);
    tracing::debug!(screen = D::NAME, "[Runtime] Screen started");

    for event in driver.start(&mut scope) {
        state = step(&mut driver, state, event, &mut scope);
    }
    state_tx.send_replace(state.clone());

    loop {
        let wake = select! {
            maybe = intents.recv() => maybe.map_or(Wake::Stop, Wake::Event),
            Some(event) = results.recv() => Wake::Event(event),
            changed = next_value(&mut favorites) => changed.map_or(Wake::FavoritesClosed, Wake::Favorites),
            changed = next_value(&mut settings) => changed.map_or(Wake::SettingsClosed, Wake::Settings),
            Some(joined) = scope.tasks.join_next(), if !scope.tasks.is_empty() => {
                if let Err(e) = joined
                    && e.is_panic()
                {
                    tracing::warn!(screen = D::NAME, error = %e, "[Runtime] Child task panicked");
                }
                Wake::Reaped
            }
        };
        let event = match wake {
            Wake::Event(event) => Some(event),
            Wake::Favorites(set) => driver.favorites_event(set),
            Wake::Settings(s) => driver.settings_event(&s),
            Wake::FavoritesClosed => {
                favorites = None;
                None
            }
            Wake::SettingsClosed => {
                settings = None;
                None
            }
            Wake::Reaped => None,
            Wake::Stop => break,
        };
        if let Some(event) = event {
            state = step(&mut driver, state, event, &mut scope);
            state_tx.send_replace(state.clone());
        }
    }
    tracing::debug!(
        screen = D::NAME,
        children = scope.len(),
        "[Runtime] Screen stopped"
    );
}
