use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::api::models::AnalysisRequest;
use crate::core::ports::{AnalysisBackend, CredentialStore, API_KEY_STORAGE_KEY};
use crate::ui::dispatch::{dispatch, Action, Effect};
use crate::ui::state::UiState;

/// Effects the front end has to present itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
    ScrollResultsIntoView,
}

#[derive(Clone, Debug)]
pub struct ControllerOptions {
    pub max_time_to_crack: Option<f64>,
    pub auto_scroll: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            max_time_to_crack: None,
            auto_scroll: true,
        }
    }
}

/// Owns the page state and runs the effects the reducer asks for.
///
/// Network calls are spawned on the tokio runtime and report back through a
/// channel, so their results are applied in the order they resolve.
pub struct Controller {
    state: UiState,
    backend: Arc<dyn AnalysisBackend>,
    store: Arc<dyn CredentialStore>,
    max_time_to_crack: Option<f64>,
    completions_tx: UnboundedSender<Action>,
    completions_rx: UnboundedReceiver<Action>,
    pending: usize,
    notices: VecDeque<Notice>,
}

impl Controller {
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        store: Arc<dyn CredentialStore>,
        options: ControllerOptions,
    ) -> Self {
        let (completions_tx, completions_rx) = unbounded_channel();
        Self {
            state: UiState::new(options.auto_scroll),
            backend,
            store,
            max_time_to_crack: options.max_time_to_crack,
            completions_tx,
            completions_rx,
            pending: 0,
            notices: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Network calls spawned and not yet applied.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            let (state, effects) = dispatch(std::mem::take(&mut self.state), action);
            self.state = state;
            for effect in effects {
                if let Some(follow_up) = self.execute(effect) {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    /// Apply every completion that has already arrived. Returns how many.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.completions_rx.try_recv() {
            self.pending -= 1;
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next network call to resolve and apply it.
    /// Returns false when nothing is in flight.
    pub async fn settle_next(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        match self.completions_rx.recv().await {
            Some(action) => {
                self.pending -= 1;
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    pub async fn settle_all(&mut self) {
        while self.settle_next().await {}
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    fn execute(&mut self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::Bootstrap => {
                let backend = Arc::clone(&self.backend);
                self.spawn(async move {
                    match backend.bootstrap().await {
                        Ok(res) => Action::BootstrapSucceeded {
                            message: res.message,
                        },
                        Err(e) => Action::BootstrapFailed {
                            error: e.to_string(),
                        },
                    }
                });
                None
            }
            Effect::Analyze {
                request_id,
                password,
            } => {
                let request =
                    AnalysisRequest::new(&password, self.stored_api_key(), self.max_time_to_crack);
                let backend = Arc::clone(&self.backend);
                self.spawn(async move {
                    match backend.analyze(request).await {
                        Ok(result) => Action::AnalysisSucceeded { request_id, result },
                        Err(e) => Action::AnalysisFailed {
                            request_id,
                            error: e.to_string(),
                        },
                    }
                });
                None
            }
            Effect::LoadStoredApiKey => Some(Action::StoredApiKeyLoaded(self.stored_api_key())),
            Effect::StoreApiKey(key) => match self.store.set(API_KEY_STORAGE_KEY, &key) {
                Ok(()) => Some(Action::ApiKeyStored),
                Err(e) => Some(Action::ApiKeyStoreFailed {
                    error: format!("{e:#}"),
                }),
            },
            Effect::Alert(msg) => {
                self.notices.push_back(Notice::Alert(msg));
                None
            }
            Effect::ScrollResultsIntoView => {
                self.notices.push_back(Notice::ScrollResultsIntoView);
                None
            }
        }
    }

    // An unreadable store is treated like an empty one.
    fn stored_api_key(&self) -> Option<String> {
        match self.store.get(API_KEY_STORAGE_KEY) {
            Ok(key) => key,
            Err(e) => {
                warn!("could not read stored API key: {e:#}");
                None
            }
        }
    }

    fn spawn<F>(&mut self, fut: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let tx = self.completions_tx.clone();
        self.pending += 1;
        debug!(pending = self.pending, "spawning request");
        tokio::spawn(async move {
            let _ = tx.send(fut.await);
        });
    }
}
