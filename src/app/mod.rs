// SPDX-License-Identifier: MPL-2.0
//! Gallery runtime: the async driver around the [`Gallery`] reducer.
//!
//! `GalleryApp` is the single owner of the gallery state. It feeds messages
//! into the reducer, carries out the returned effects and turns their results
//! back into messages:
//!
//! - `FetchBatch` and `FetchSelection` run as tokio tasks in one `JoinSet`;
//!   each task resolves to the `Message` that reports its result.
//! - `Navigate` writes the [`Navigator`]; the runtime's own subscription then
//!   delivers the change as `NavigationChanged`, exactly like a change made by
//!   any other holder of the navigator.
//!
//! Starting a refresh aborts the batch task of the previous one. The reducer
//! also drops results tagged with an older generation, which covers a task
//! that finished before it could be aborted.
//!
//! Every processed message publishes a state snapshot on a `watch` channel
//! for presentation layers that render from a separate task.

pub mod paths;
pub mod telemetry;

use crate::application::gallery::{Effect, Gallery, GalleryState, Message};
use crate::application::port::CatalogSource;
use crate::application::query::fan_out::fetch_with_timeout;
use crate::application::query::{FanOutFetcher, Navigator};
use crate::domain::record::RecordId;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::{AbortHandle, JoinError, JoinSet};

/// One input to the runtime loop.
enum Event {
    Inbox(Option<Message>),
    Navigation { open: bool },
    Task(Result<Message, JoinError>),
}

/// Async driver that owns the gallery and its in-flight lookups.
pub struct GalleryApp<C> {
    gallery: Gallery,
    catalog: Arc<C>,
    fetcher: FanOutFetcher,
    navigator: Navigator,
    navigation: watch::Receiver<Option<RecordId>>,
    tasks: JoinSet<Message>,
    batch_task: Option<AbortHandle>,
    selection_task: Option<AbortHandle>,
    snapshots: watch::Sender<GalleryState>,
}

impl<C> GalleryApp<C>
where
    C: CatalogSource + 'static,
{
    #[must_use]
    pub fn new(
        gallery: Gallery,
        catalog: Arc<C>,
        fetcher: FanOutFetcher,
        navigator: Navigator,
    ) -> Self {
        let navigation = navigator.subscribe();
        let snapshots = watch::Sender::new(gallery.state().clone());
        Self {
            gallery,
            catalog,
            fetcher,
            navigator,
            navigation,
            tasks: JoinSet::new(),
            batch_task: None,
            selection_task: None,
            snapshots,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GalleryState {
        self.gallery.state()
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    /// Handle for reading and writing the navigation signal.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Subscribes to state snapshots, one per processed message that changed it.
    #[must_use]
    pub fn snapshots(&self) -> watch::Receiver<GalleryState> {
        self.snapshots.subscribe()
    }

    /// Returns `true` while lookups are in flight.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Loads the first batch and honors an identifier the navigator already
    /// holds (deep link).
    pub fn start(&mut self) {
        self.dispatch(Message::Refresh);
        let initial = *self.navigation.borrow_and_update();
        if initial.is_some() {
            self.dispatch(Message::NavigationChanged(initial));
        }
    }

    /// Feeds one message through the reducer and performs its effect.
    pub fn dispatch(&mut self, message: Message) {
        let effect = self.gallery.update(message);
        self.perform(effect);
        self.publish();
    }

    /// Processes results and navigation changes until no lookup is in flight.
    pub async fn settle(&mut self) {
        loop {
            if self.navigation.has_changed().unwrap_or(false) {
                self.sync_navigation();
                continue;
            }
            match self.tasks.join_next().await {
                Some(joined) => self.handle_joined(joined),
                None => break,
            }
        }
    }

    /// Runs until `inbox` closes, then aborts whatever is still in flight.
    ///
    /// Returns the final state.
    pub async fn run(mut self, mut inbox: mpsc::Receiver<Message>) -> GalleryState {
        self.start();

        loop {
            let has_tasks = !self.tasks.is_empty();
            let event = tokio::select! {
                received = inbox.recv() => Event::Inbox(received),
                changed = self.navigation.changed() => Event::Navigation { open: changed.is_ok() },
                Some(joined) = self.tasks.join_next(), if has_tasks => Event::Task(joined),
            };

            match event {
                Event::Inbox(Some(message)) => self.dispatch(message),
                Event::Inbox(None) => break,
                Event::Navigation { open: true } => self.sync_navigation(),
                Event::Navigation { open: false } => break,
                Event::Task(joined) => self.handle_joined(joined),
            }
        }

        self.tasks.shutdown().await;
        tracing::debug!("gallery runtime stopped");
        self.gallery.state().clone()
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchBatch { generation, ids } => {
                if let Some(previous) = self.batch_task.take() {
                    previous.abort();
                }
                let catalog = Arc::clone(&self.catalog);
                let fetcher = self.fetcher;
                let handle = self.tasks.spawn(async move {
                    let outcome = fetcher.fetch_batch(catalog, &ids).await;
                    Message::BatchLoaded {
                        generation,
                        outcome,
                    }
                });
                self.batch_task = Some(handle);
            }
            Effect::FetchSelection { request, id } => {
                if let Some(previous) = self.selection_task.take() {
                    previous.abort();
                }
                let catalog = Arc::clone(&self.catalog);
                let timeout = self.fetcher.config().request_timeout;
                let handle = self.tasks.spawn(async move {
                    let result = fetch_with_timeout(&*catalog, id, timeout).await;
                    Message::SelectionLoaded { request, result }
                });
                self.selection_task = Some(handle);
            }
            Effect::Navigate(target) => {
                self.navigator.set(target);
            }
        }
    }

    fn sync_navigation(&mut self) {
        let target = *self.navigation.borrow_and_update();
        self.dispatch(Message::NavigationChanged(target));
    }

    fn handle_joined(&mut self, joined: Result<Message, JoinError>) {
        match joined {
            Ok(message) => self.dispatch(message),
            Err(err) if err.is_cancelled() => {
                tracing::debug!("superseded lookup task cancelled");
            }
            Err(err) => {
                tracing::error!(error = %err, "lookup task failed");
            }
        }
    }

    fn publish(&self) {
        let state = self.gallery.state();
        self.snapshots.send_if_modified(|published| {
            if published == state {
                false
            } else {
                *published = state.clone();
                true
            }
        });
    }
}
