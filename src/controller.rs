use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};

use crate::error::Error;
use crate::like_api::LikeApi;
use crate::models::{Action, Control, DisplayState, EntityId, LikeStatus};
use crate::view::{LikeView, TriggerEvent};

/// Keeps one cafe's like/unlike controls in sync with the server.
///
/// The display only changes once a reply arrives, and only one request per controller
/// is in flight at a time: activations made meanwhile fail with [`Error::InFlight`].
///
/// Every failed operation is logged before its error is returned, so hosts that only
/// care about the controls can drop the `Result`.
pub struct LikeToggleController<A, V> {
    api: A,
    entity_id: EntityId,
    state: Mutex<State<V>>,
}

struct State<V> {
    view: V,
    display: Option<DisplayState>,
    in_flight: Option<Action>,
}

impl<V: LikeView> State<V> {
    fn set_enabled(&mut self, action: Action, enabled: bool) {
        for control in action.triggers() {
            self.view.set_enabled(*control, enabled);
        }
    }

    fn finish(&mut self, action: Action) {
        self.in_flight = None;
        self.set_enabled(action, true);
    }

    fn render(&mut self, display: DisplayState) {
        for control in Control::ALL {
            self.view.set_visible(control, display.shows(control));
        }
        self.display = Some(display);
    }
}

fn lock<V>(state: &Mutex<State<V>>) -> MutexGuard<'_, State<V>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the in-flight marker if the request future is dropped before its reply.
struct Pending<'a, V: LikeView> {
    state: &'a Mutex<State<V>>,
    action: Option<Action>,
}

impl<V: LikeView> Pending<'_, V> {
    fn complete(mut self, state: &mut State<V>) {
        if let Some(action) = self.action.take() {
            state.finish(action);
        }
    }
}

impl<V: LikeView> Drop for Pending<'_, V> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            debug!("{action} dropped before its reply, re-enabling controls");
            lock(self.state).finish(action);
        }
    }
}

impl<A: LikeApi, V: LikeView> LikeToggleController<A, V> {
    /// Binds to the view, reading its cafe id once. The controls keep their rendered
    /// visibility until the first successful reply.
    pub fn bind(api: A, view: V) -> Self {
        let entity_id = view.entity_id();
        LikeToggleController {
            api,
            entity_id,
            state: Mutex::new(State {
                view,
                display: None,
                in_flight: None,
            }),
        }
    }

    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    /// Last display applied from a reply, `None` before the first one.
    pub fn display(&self) -> Option<DisplayState> {
        lock(&self.state).display
    }

    /// Runs `f` against the view while holding the state lock; keep it short.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&lock(&self.state).view)
    }

    /// Unbinds the controller and hands back the view as last rendered.
    pub fn into_view(self) -> V {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .view
    }

    /// Asks the server whether the viewer likes this cafe. Run once when the page is ready.
    pub async fn fetch_status(&self) -> Result<DisplayState, Error> {
        debug!("Fetching like status for cafe {}", self.entity_id);
        self.run(Action::Status, self.api.status(&self.entity_id)).await
    }

    pub async fn like(&self, event: &mut impl TriggerEvent) -> Result<DisplayState, Error> {
        event.prevent_default();
        debug!("Like triggered for cafe {}", self.entity_id);
        self.run(Action::Like, async {
            self.api
                .like(&self.entity_id)
                .await
                .map(|()| LikeStatus(true))
        })
        .await
    }

    pub async fn unlike(&self, event: &mut impl TriggerEvent) -> Result<DisplayState, Error> {
        event.prevent_default();
        debug!("Unlike triggered for cafe {}", self.entity_id);
        self.run(Action::Unlike, async {
            self.api
                .unlike(&self.entity_id)
                .await
                .map(|()| LikeStatus(false))
        })
        .await
    }

    async fn run(
        &self,
        action: Action,
        request: impl Future<Output = Result<LikeStatus, Error>>,
    ) -> Result<DisplayState, Error> {
        let pending = {
            let mut state = lock(&self.state);
            if let Some(pending) = state.in_flight {
                debug!(
                    "Dropping {action} for cafe {}, {pending} still in flight",
                    self.entity_id
                );
                return Err(Error::InFlight(pending));
            }
            state.in_flight = Some(action);
            state.set_enabled(action, false);
            Pending {
                state: &self.state,
                action: Some(action),
            }
        };

        let result = request.await;

        let mut state = lock(&self.state);
        pending.complete(&mut state);
        match result {
            Ok(status) => {
                let display = DisplayState::from(status);
                state.render(display);
                info!("Cafe {} is now {display:?} after {action}", self.entity_id);
                Ok(display)
            }
            Err(err) => {
                match &err {
                    Error::Remote(message) => {
                        warn!("{action} for cafe {} refused: {message}", self.entity_id)
                    }
                    other => error!("{action} for cafe {} failed: {other}", self.entity_id),
                }
                Err(err)
            }
        }
    }
}
