//! # App Controller
//!
//! Owns the session: the single fetched bundle, the strategy cycle, and the
//! background tasks that feed it.
//!
//! ## State machine
//! ```text
//! Idle --start--> Loading --Loaded(Ok)--> Ready { index: 0, visible: true }
//!                         --Loaded(Err)-> Failed   (notifies once)
//!
//! Ready --advance--> Ready { index, visible: false }      (timer scheduled)
//!       --FadeElapsed--> Ready { index + 1 mod 4, visible: true }
//! ```
//!
//! Background work (the fetch, the fade timer, the avatar probe) runs as
//! spawned tasks that only *report* via `AppEvent`. The controller is the
//! only code that mutates its state, through `handle_event`, so the event
//! loop driving it needs no locking.
//!
//! While a transition is pending, further `advance` calls are ignored.
//! `shutdown` (also run on drop) aborts every outstanding task and makes
//! the controller deaf to any event still queued.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, error, info, warn};

use data_loader::{FetchError, RecommendationBundle, RecommendationSource, StrategyKey};
use views::{
    Accent, AdvanceControl, AvatarResolver, AvatarSlot, DiceBearResolver, RecommendationView,
    UserPanel, ViewAction,
};

use crate::avatar_probe::AvatarProbe;
use crate::events::{AdvanceOutcome, AppEvent};
use crate::notify::{FAILURE_MESSAGE, Notifier};
use crate::screen::Screen;

/// Delay between fade-out and switching to the next strategy
pub const DEFAULT_FADE_DELAY: Duration = Duration::from_millis(300);

/// Tunables for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub fade_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            fade_delay: DEFAULT_FADE_DELAY,
        }
    }
}

/// Position in the strategy cycle and whether the list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleState {
    /// Index into `StrategyKey::ALL`, always below `StrategyKey::COUNT`
    pub index: usize,
    /// False between fade-out and the end of the transition delay
    pub visible: bool,
}

impl CycleState {
    pub fn strategy(&self) -> StrategyKey {
        StrategyKey::from_index(self.index)
    }
}

/// Lifecycle of one session
#[derive(Debug)]
pub enum AppState {
    Idle,
    Loading,
    Ready(CycleState),
    /// The fetch failed. The cause is kept even though the user only sees
    /// `FAILURE_MESSAGE`.
    Failed(FetchError),
}

/// Main controller for one viewing session
pub struct AppController {
    config: ControllerConfig,
    source: Arc<dyn RecommendationSource>,
    notifier: Arc<dyn Notifier>,
    resolver: Arc<dyn AvatarResolver>,
    probe: Option<Arc<dyn AvatarProbe>>,

    state: AppState,
    bundle: Option<RecommendationBundle>,
    avatar: Option<AvatarSlot>,

    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    fetch_task: Option<JoinHandle<()>>,
    fade_task: Option<JoinHandle<()>>,
    probe_task: Option<JoinHandle<()>>,
    shut_down: bool,
}

impl AppController {
    /// Create an idle controller. Nothing is fetched until `start`.
    ///
    /// Avatars default to `DiceBearResolver` and are not probed.
    pub fn new(source: Arc<dyn RecommendationSource>, notifier: Arc<dyn Notifier>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            config: ControllerConfig::default(),
            source,
            notifier,
            resolver: Arc::new(DiceBearResolver::default()),
            probe: None,
            state: AppState::Idle,
            bundle: None,
            avatar: None,
            events_tx,
            events_rx,
            fetch_task: None,
            fade_task: None,
            probe_task: None,
            shut_down: false,
        }
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn AvatarResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_avatar_probe(mut self, probe: Arc<dyn AvatarProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The fetched bundle, once loaded. Read-only for everyone but the controller.
    pub fn bundle(&self) -> Option<&RecommendationBundle> {
        self.bundle.as_ref()
    }

    pub fn cycle(&self) -> Option<CycleState> {
        match self.state {
            AppState::Ready(cycle) => Some(cycle),
            _ => None,
        }
    }

    pub fn avatar(&self) -> Option<&AvatarSlot> {
        self.avatar.as_ref()
    }

    /// True while a fade transition is waiting for its timer
    pub fn is_transition_pending(&self) -> bool {
        self.fade_task.is_some()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Issue the session's one fetch.
    ///
    /// Only acts from `Idle`; any later call (re-initialisation, a second
    /// start after failure) returns false and fetches nothing.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> bool {
        if self.shut_down || !matches!(self.state, AppState::Idle) {
            warn!("Ignoring start: fetch already issued");
            return false;
        }

        info!("Starting session, fetching recommendations");
        self.state = AppState::Loading;

        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        self.fetch_task = Some(tokio::spawn(async move {
            let result = source.fetch_recommendations().await;
            // Receiver gone means the controller was dropped
            let _ = tx.send(AppEvent::Loaded(result));
        }));
        true
    }

    /// Begin moving to the next strategy.
    ///
    /// Hides the list now and schedules the switch after the fade delay.
    /// Inert once the controller is shut down.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.shut_down {
            debug!("Ignoring advance after shutdown");
            return AdvanceOutcome::NotReady;
        }
        let AppState::Ready(cycle) = &mut self.state else {
            debug!("Ignoring advance: no recommendations loaded");
            return AdvanceOutcome::NotReady;
        };
        if self.fade_task.is_some() {
            debug!("Ignoring advance: transition already pending");
            return AdvanceOutcome::Ignored;
        }

        cycle.visible = false;
        debug!(
            "Fading out {} for {:?}",
            cycle.strategy(),
            self.config.fade_delay
        );

        let deadline = Instant::now() + self.config.fade_delay;
        let tx = self.events_tx.clone();
        self.fade_task = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            let _ = tx.send(AppEvent::FadeElapsed);
        }));
        AdvanceOutcome::Started
    }

    /// Route raw user input through the current view.
    ///
    /// Returns `None` if the view did not react to the input.
    pub fn handle_input(&mut self, input: &str) -> Option<AdvanceOutcome> {
        let action = match self.screen() {
            Screen::Ready { list, .. } => list.handle_input(input),
            _ => None,
        }?;
        match action {
            ViewAction::Advance => Some(self.advance()),
        }
    }

    /// Wait for the next event from a background task
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Apply an event. Returns true if the screen needs redrawing.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        if self.shut_down {
            debug!("Dropping {:?} after shutdown", event);
            return false;
        }

        match event {
            AppEvent::Loaded(result) => self.on_loaded(result),
            AppEvent::FadeElapsed => self.on_fade_elapsed(),
            AppEvent::AvatarUnavailable => self.on_avatar_unavailable(),
        }
    }

    /// Abort the fetch, the fade timer and the avatar probe.
    ///
    /// Idempotent. Events still queued are discarded by `handle_event`.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        for task in [
            self.fetch_task.take(),
            self.fade_task.take(),
            self.probe_task.take(),
        ]
        .into_iter()
        .flatten()
        {
            task.abort();
        }
        info!("Controller shut down");
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Compose the views for the current state
    pub fn screen(&self) -> Screen<'_> {
        match (&self.state, &self.bundle) {
            (AppState::Ready(cycle), Some(bundle)) => {
                let key = cycle.strategy();
                Screen::Ready {
                    user: UserPanel::new(bundle.user_id(), self.avatar.as_ref()),
                    list: RecommendationView::new(key.title(), bundle.recommendations(key))
                        .visible(cycle.visible)
                        .accent(Accent::for_strategy(key))
                        .with_advance(AdvanceControl::default()),
                }
            }
            (AppState::Failed(_), _) => Screen::Failed,
            _ => Screen::Loading,
        }
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    fn on_loaded(&mut self, result: data_loader::Result<RecommendationBundle>) -> bool {
        self.fetch_task = None;
        if !matches!(self.state, AppState::Loading) {
            warn!("Unexpected fetch result outside of loading state");
            return false;
        }

        match result {
            Ok(bundle) => {
                info!("Recommendations ready for user {}", bundle.user_id());
                let slot = AvatarSlot::mount(bundle.user_id(), self.resolver.as_ref());
                self.spawn_avatar_probe(&slot);
                self.avatar = Some(slot);
                self.bundle = Some(bundle);
                self.state = AppState::Ready(CycleState {
                    index: 0,
                    visible: true,
                });
            }
            Err(e) => {
                error!(
                    "Fetching recommendations failed ({}): {}",
                    if e.is_network() { "network" } else { "parse" },
                    e
                );
                self.state = AppState::Failed(e);
                self.notifier.notify(FAILURE_MESSAGE);
            }
        }
        true
    }

    fn on_fade_elapsed(&mut self) -> bool {
        if self.fade_task.take().is_none() {
            debug!("Stale fade event ignored");
            return false;
        }
        let AppState::Ready(cycle) = &mut self.state else {
            return false;
        };

        cycle.index = (cycle.index + 1) % StrategyKey::COUNT;
        cycle.visible = true;
        debug!("Showing {}", cycle.strategy());
        true
    }

    fn on_avatar_unavailable(&mut self) -> bool {
        self.probe_task = None;
        match self.avatar.as_mut() {
            Some(slot) => {
                let replaced = slot.on_load_error();
                if replaced {
                    debug!("Avatar unavailable, using fallback image");
                }
                replaced
            }
            None => false,
        }
    }

    fn spawn_avatar_probe(&mut self, slot: &AvatarSlot) {
        let Some(probe) = self.probe.as_ref().map(Arc::clone) else {
            return;
        };
        let avatar = slot.current().clone();
        let tx = self.events_tx.clone();
        self.probe_task = Some(tokio::spawn(async move {
            if !probe.probe(&avatar).await {
                let _ = tx.send(AppEvent::AvatarUnavailable);
            }
        }));
    }
}

impl Drop for AppController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fade_delay() {
        assert_eq!(ControllerConfig::default().fade_delay, Duration::from_millis(300));
    }

    #[test]
    fn test_cycle_state_strategy() {
        let strategies: Vec<_> = (0..StrategyKey::COUNT)
            .map(|index| CycleState { index, visible: true }.strategy())
            .collect();
        assert_eq!(strategies, StrategyKey::ALL.to_vec());
    }
}
