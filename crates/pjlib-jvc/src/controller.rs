//! The recovery boundary between callers and the projector.
//!
//! [`ProjectorController`] serialises every device exchange behind one
//! mutex, since the projector handles a single command at a time. It maps
//! every protocol failure onto [`GetOutcome`] / [`SendOutcome`] and logs the
//! detail; nothing below it escapes as an error.
//!
//! # Sessions
//!
//! Each operation connects if needed and, before releasing the mutex,
//! schedules a debounced close. Back-to-back operations reuse one session;
//! the session closes once the controller has been idle for the disconnect
//! delay. The poll loop closes immediately after a failure it cannot trust.
//!
//! # Polling
//!
//! With a [`StateNotifier`] configured, a background task reads the power
//! state (and, while the lamp is on, anamorphic, picture and installation
//! modes) and publishes it. The interval follows the power state:
//!
//! | Power state          | Next poll |
//! |----------------------|-----------|
//! | `Starting`/`Cooling` | 1s        |
//! | `LampOn`             | 10s       |
//! | anything else        | 20s       |
//! | poll failed          | 10s       |
//!
//! A batch that changed device state pulls the next poll forward to 1s.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{Mutex, watch};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use pjlib_core::error::{Error, Result};
use pjlib_core::notify::StateNotifier;

use crate::commands::{self, ANAMORPHIC, INSTALLATION_MODE, PICTURE_MODE, POWER, REMOTE};
use crate::executor::CommandExecutor;
use crate::schedule::{Debouncer, PollSchedule, TickGuard};
use crate::values::Value;

/// Notifier key for the projector.
pub const DEVICE_KEY: &str = "pj";

/// Picture mode the HDR calibration lives in.
pub const HDR_PICTURE_MODE: &str = "User5";

/// Prefix of a pause directive in a command batch (`PAUSE0.5`).
pub const PAUSE: &str = "PAUSE";

pub const DISCONNECT_DELAY: Duration = Duration::from_secs(4);
pub const FIRST_POLL_DELAY: Duration = Duration::from_millis(500);
pub const MIN_TICK_GAP: Duration = Duration::from_millis(500);
pub const POLL_AFTER_SEND: Duration = Duration::from_secs(1);
pub const FAILURE_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Observed projector power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Standby,
    LampOn,
    Cooling,
    Starting,
    Error,
}

impl PowerState {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Standby" => Some(PowerState::Standby),
            "LampOn" => Some(PowerState::LampOn),
            "Cooling" => Some(PowerState::Cooling),
            "Starting" => Some(PowerState::Starting),
            "Error" => Some(PowerState::Error),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PowerState::Standby => "Standby",
            PowerState::LampOn => "LampOn",
            PowerState::Cooling => "Cooling",
            PowerState::Starting => "Starting",
            PowerState::Error => "Error",
        }
    }

    /// How long to wait before polling again after observing this state.
    pub fn poll_interval(self) -> Duration {
        match self {
            PowerState::Starting | PowerState::Cooling => Duration::from_secs(1),
            PowerState::LampOn => Duration::from_secs(10),
            PowerState::Standby | PowerState::Error => Duration::from_secs(20),
        }
    }
}

/// Cached attributes published after each successful poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectorState {
    pub power_state: String,
    pub anamorphic_mode: String,
    pub installation_mode: String,
    pub picture_mode: String,
    /// True iff the lamp is on.
    pub power: bool,
    /// The HDR picture mode (User5) is selected.
    pub hdr: bool,
    /// Lens hint: `A` for the anamorphic A setting, `B` when installation
    /// mode TWO holds the anamorphic lens memory, otherwise none.
    pub anamorphic: Option<String>,
}

/// Result of [`ProjectorController::get`].
#[derive(Debug, Clone, PartialEq)]
pub enum GetOutcome {
    Value(Value),
    /// No command with that name.
    NotFound,
    /// The device exchange failed; details are in the log.
    Failed,
    /// No projector configured.
    Disabled,
}

/// Result of [`ProjectorController::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The batch ran. `skipped` entries could not be parsed or resolved;
    /// `failed` entries reached the device and failed there.
    Completed {
        executed: usize,
        skipped: usize,
        failed: usize,
    },
    /// Could not open a session; nothing was sent.
    Failed,
    /// No projector configured.
    Disabled,
}

/// Delays and intervals used by the controller.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Timing {
    pub disconnect_delay: Duration,
    pub first_poll_delay: Duration,
    pub min_tick_gap: Duration,
    pub poll_after_send: Duration,
    pub failure_interval: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            disconnect_delay: DISCONNECT_DELAY,
            first_poll_delay: FIRST_POLL_DELAY,
            min_tick_gap: MIN_TICK_GAP,
            poll_after_send: POLL_AFTER_SEND,
            failure_interval: FAILURE_POLL_INTERVAL,
        }
    }
}

#[derive(Debug, Default)]
struct Batch {
    executed: usize,
    skipped: usize,
    failed: usize,
    mutated: bool,
}

struct Inner {
    executor: Arc<Mutex<CommandExecutor>>,
    macros: HashMap<String, Vec<String>>,
    notifier: Option<Arc<dyn StateNotifier>>,
    state: watch::Sender<ProjectorState>,
    disconnect: Debouncer,
    schedule: Option<PollSchedule>,
    ticks: TickGuard,
    timing: Timing,
    cancel: CancellationToken,
}

/// Controller for one projector. Clones share the same session and poll loop.
///
/// Build with [`ControllerBuilder`](crate::builder::ControllerBuilder).
#[derive(Clone)]
pub struct ProjectorController {
    inner: Option<Arc<Inner>>,
}

impl ProjectorController {
    /// A controller with no projector. Every operation reports `Disabled`.
    pub fn disabled() -> Self {
        ProjectorController { inner: None }
    }

    /// Start a controller. Spawns the poll loop when a notifier is given,
    /// so this must run inside a tokio runtime.
    pub(crate) fn start(
        executor: CommandExecutor,
        macros: HashMap<String, Vec<String>>,
        notifier: Option<Arc<dyn StateNotifier>>,
        timing: Timing,
    ) -> Self {
        let (state, _) = watch::channel(ProjectorState::default());
        let cancel = CancellationToken::new();
        let (schedule, deadline) = match notifier {
            Some(_) => {
                let (schedule, deadline) = PollSchedule::new(timing.first_poll_delay);
                (Some(schedule), Some(deadline))
            }
            None => (None, None),
        };

        let inner = Arc::new(Inner {
            executor: Arc::new(Mutex::new(executor)),
            macros,
            notifier,
            state,
            disconnect: Debouncer::new(),
            schedule,
            ticks: TickGuard::new(timing.min_tick_gap),
            timing,
            cancel: cancel.clone(),
        });

        if let Some(deadline) = deadline {
            tokio::spawn(poll_loop(Arc::downgrade(&inner), deadline, cancel));
        }

        ProjectorController { inner: Some(inner) }
    }

    /// True iff a projector is configured.
    pub fn enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Snapshot of the attributes cached by the last poll.
    pub fn state(&self) -> ProjectorState {
        self.inner
            .as_ref()
            .map(|inner| inner.state.borrow().clone())
            .unwrap_or_default()
    }

    /// Watch the cached attributes for changes.
    pub fn subscribe(&self) -> Option<watch::Receiver<ProjectorState>> {
        self.inner.as_ref().map(|inner| inner.state.subscribe())
    }

    /// Time until the next scheduled poll, if polling is active.
    pub fn next_poll_in(&self) -> Option<Duration> {
        let schedule = self.inner.as_ref()?.schedule.as_ref()?;
        Some(schedule.deadline().saturating_duration_since(Instant::now()))
    }

    /// Read one command by name.
    pub async fn get(&self, name: &str) -> GetOutcome {
        let Some(inner) = &self.inner else {
            return GetOutcome::Disabled;
        };
        let Some(command) = commands::find(name) else {
            warn!(command = name, "Unknown command");
            return GetOutcome::NotFound;
        };

        let mut executor = inner.executor.lock().await;
        inner.disconnect.cancel();
        let result = match executor.connect().await {
            Ok(()) => executor.get(command).await,
            Err(e) => Err(e),
        };
        inner.schedule_disconnect();
        drop(executor);

        match result {
            Ok(value) => GetOutcome::Value(value),
            Err(e) if e.is_nack() => {
                error!(command = name, error = %e, "Get not acknowledged");
                GetOutcome::Failed
            }
            Err(e) => {
                error!(command = name, error = %e, "Get failed");
                GetOutcome::Failed
            }
        }
    }

    /// Run a batch of dotted commands, macro names and `PAUSE<seconds>`
    /// directives under a single hold of the device mutex.
    ///
    /// Entries that cannot be resolved are logged and skipped; they do not
    /// stop the batch.
    pub async fn send<S: AsRef<str>>(&self, entries: &[S]) -> SendOutcome {
        let Some(inner) = &self.inner else {
            return SendOutcome::Disabled;
        };

        let mut executor = inner.executor.lock().await;
        inner.disconnect.cancel();
        if let Err(e) = executor.connect().await {
            error!(error = %e, "Unable to open session for command batch");
            return SendOutcome::Failed;
        }

        let mut batch = Batch::default();
        for entry in entries {
            let entry = entry.as_ref();
            match inner.macros.get(entry) {
                Some(steps) => {
                    info!(name = entry, steps = steps.len(), "Running macro");
                    for step in steps {
                        inner.run_entry(&mut executor, step, &mut batch).await;
                    }
                }
                None => inner.run_entry(&mut executor, entry, &mut batch).await,
            }
        }

        inner.schedule_disconnect();
        if batch.mutated {
            if let Some(schedule) = &inner.schedule {
                schedule.rearm(inner.timing.poll_after_send);
            }
        }
        drop(executor);

        SendOutcome::Completed {
            executed: batch.executed,
            skipped: batch.skipped,
            failed: batch.failed,
        }
    }

    /// Run one poll tick now. Returns `false` if the tick was suppressed
    /// or the controller is disabled.
    pub async fn poll_now(&self) -> bool {
        match &self.inner {
            Some(inner) => inner.tick().await,
            None => false,
        }
    }

    /// Stop polling, drop any pending close and close the session.
    pub async fn shutdown(&self) {
        let Some(inner) = &self.inner else {
            return;
        };
        inner.cancel.cancel();
        inner.disconnect.cancel();
        let mut executor = inner.executor.lock().await;
        if let Err(e) = executor.disconnect(false).await {
            warn!(error = %e, "Error closing projector session");
        }
        info!("Projector controller stopped");
    }
}

impl Inner {
    fn schedule_disconnect(&self) {
        let executor = self.executor.clone();
        self.disconnect
            .trigger(self.timing.disconnect_delay, async move {
                if let Err(e) = executor.lock().await.disconnect(true).await {
                    warn!(error = %e, "Deferred close failed");
                }
            });
    }

    async fn hard_disconnect(&self, executor: &mut CommandExecutor) {
        self.disconnect.cancel();
        if let Err(e) = executor.disconnect(true).await {
            warn!(error = %e, "Close after failure failed");
        }
    }

    async fn run_entry(&self, executor: &mut CommandExecutor, entry: &str, batch: &mut Batch) {
        if let Some(arg) = entry.strip_prefix(PAUSE) {
            match parse_pause(arg) {
                Some(pause) => {
                    info!(seconds = pause.as_secs_f64(), "Pausing");
                    tokio::time::sleep(pause).await;
                }
                None => {
                    warn!(entry, "Ignoring malformed pause");
                    batch.skipped += 1;
                }
            }
            return;
        }

        let (command, value) = match commands::parse_dotted(entry) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(entry, error = %e, "Ignoring command");
                batch.skipped += 1;
                return;
            }
        };

        info!(entry, "Sending command");
        match executor.set(command, &value, true).await {
            Ok(()) => {
                batch.executed += 1;
                if command.name != REMOTE {
                    batch.mutated = true;
                }
            }
            Err(e) => {
                error!(entry, error = %e, "Command failed");
                batch.failed += 1;
            }
        }
    }

    async fn tick(&self) -> bool {
        if !self.ticks.try_begin() {
            warn!("Suppressing poll tick, previous tick too recent");
            return false;
        }

        let mut executor = self.executor.lock().await;
        self.disconnect.cancel();
        let next = match self.refresh(&mut executor).await {
            Ok(power) => {
                self.publish(power);
                self.schedule_disconnect();
                power.poll_interval()
            }
            Err(e) if e.is_nack() => {
                error!(error = %e, "Poll not acknowledged, keeping previous state");
                self.schedule_disconnect();
                self.last_interval()
            }
            Err(e) => {
                error!(error = %e, "Poll failed, projector offline");
                if let Some(notifier) = &self.notifier {
                    notifier.offline(DEVICE_KEY);
                }
                self.hard_disconnect(&mut executor).await;
                self.timing.failure_interval
            }
        };
        drop(executor);

        if let Some(schedule) = &self.schedule {
            schedule.rearm(next);
        }
        debug!(next_ms = next.as_millis() as u64, "Next poll scheduled");
        true
    }

    async fn refresh(&self, executor: &mut CommandExecutor) -> Result<PowerState> {
        executor.connect().await?;
        let value = read(executor, POWER).await?;
        let power = value
            .symbol_name()
            .and_then(PowerState::from_name)
            .ok_or_else(|| Error::BadValue(format!("unexpected power state {}", value)))?;

        if power == PowerState::LampOn {
            let anamorphic = read(executor, ANAMORPHIC).await?;
            let picture = read(executor, PICTURE_MODE).await?;
            let installation = read(executor, INSTALLATION_MODE).await?;
            self.state.send_replace(ProjectorState {
                power_state: power.name().to_string(),
                anamorphic_mode: anamorphic.to_string(),
                installation_mode: installation.to_string(),
                picture_mode: picture.to_string(),
                power: true,
                hdr: picture.symbol_name() == Some(HDR_PICTURE_MODE),
                anamorphic: lens_hint(&anamorphic, &installation),
            });
        } else {
            self.state.send_modify(|state| {
                state.power_state = power.name().to_string();
                state.power = false;
            });
        }
        Ok(power)
    }

    fn publish(&self, power: PowerState) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        notifier.online(DEVICE_KEY);
        notifier.state(DEVICE_KEY, power.name());
        let snapshot = self.state.borrow().clone();
        match serde_json::to_string(&snapshot) {
            Ok(payload) => notifier.attributes(DEVICE_KEY, &payload),
            Err(e) => warn!(error = %e, "Unable to encode attributes"),
        }
    }

    fn last_interval(&self) -> Duration {
        PowerState::from_name(&self.state.borrow().power_state)
            .unwrap_or(PowerState::Standby)
            .poll_interval()
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn read(executor: &mut CommandExecutor, name: &'static str) -> Result<Value> {
    let command = commands::lookup(name)?;
    executor
        .get(command)
        .await
        .inspect_err(|e| debug!(command = name, error = %e, "Poll read failed"))
}

fn lens_hint(anamorphic: &Value, installation: &Value) -> Option<String> {
    if anamorphic.symbol_name() == Some("A") {
        Some("A".to_string())
    } else if installation.symbol_name() == Some("TWO") {
        Some("B".to_string())
    } else {
        None
    }
}

fn parse_pause(arg: &str) -> Option<Duration> {
    let seconds: f64 = arg.trim().parse().ok()?;
    Duration::try_from_secs_f64(seconds).ok()
}

async fn poll_loop(
    inner: Weak<Inner>,
    mut deadline: watch::Receiver<Instant>,
    cancel: CancellationToken,
) {
    debug!("Poll loop started");
    loop {
        let at = *deadline.borrow_and_update();
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            changed = deadline.changed() => {
                if changed.is_err() {
                    break;
                }
                continue;
            }
            _ = tokio::time::sleep_until(at) => {}
        }

        let Some(inner) = inner.upgrade() else {
            break;
        };
        if !inner.tick().await {
            // Suppressed with the deadline still in the past.
            if let Some(schedule) = &inner.schedule {
                if schedule.deadline() <= Instant::now() {
                    schedule.rearm(inner.timing.min_tick_gap);
                }
            }
        }
    }
    debug!("Poll loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_follow_power_state() {
        assert_eq!(PowerState::Starting.poll_interval(), Duration::from_secs(1));
        assert_eq!(PowerState::Cooling.poll_interval(), Duration::from_secs(1));
        assert_eq!(PowerState::LampOn.poll_interval(), Duration::from_secs(10));
        assert_eq!(PowerState::Standby.poll_interval(), Duration::from_secs(20));
        assert_eq!(PowerState::Error.poll_interval(), Duration::from_secs(20));
    }

    #[test]
    fn power_state_names_round_trip() {
        for state in [
            PowerState::Standby,
            PowerState::LampOn,
            PowerState::Cooling,
            PowerState::Starting,
            PowerState::Error,
        ] {
            assert_eq!(PowerState::from_name(state.name()), Some(state));
        }
        assert_eq!(PowerState::from_name("On"), None);
    }

    #[test]
    fn attributes_use_camel_case() {
        let state = ProjectorState {
            power_state: "LampOn".into(),
            anamorphic_mode: "A".into(),
            installation_mode: "ONE".into(),
            picture_mode: "Natural".into(),
            power: true,
            hdr: false,
            anamorphic: Some("A".into()),
        };
        let json: serde_json::Value = serde_json::to_value(&state).unwrap();
        assert_eq!(json["powerState"], "LampOn");
        assert_eq!(json["anamorphicMode"], "A");
        assert_eq!(json["installationMode"], "ONE");
        assert_eq!(json["pictureMode"], "Natural");
        assert_eq!(json["power"], true);
        assert_eq!(json["hdr"], false);
        assert_eq!(json["anamorphic"], "A");

        let json = serde_json::to_value(ProjectorState::default()).unwrap();
        assert!(json["anamorphic"].is_null());
    }

    #[test]
    fn pause_parsing() {
        assert_eq!(parse_pause("0.5"), Some(Duration::from_millis(500)));
        assert_eq!(parse_pause(" 2"), Some(Duration::from_secs(2)));
        assert_eq!(parse_pause("-1"), None);
        assert_eq!(parse_pause("soon"), None);
        assert_eq!(parse_pause(""), None);
    }

    #[tokio::test]
    async fn disabled_controller_is_inert() {
        let controller = ProjectorController::disabled();
        assert!(!controller.enabled());
        assert_eq!(controller.get("Power").await, GetOutcome::Disabled);
        assert_eq!(controller.send(&["Power.PowerState.LampOn"]).await, SendOutcome::Disabled);
        assert!(!controller.poll_now().await);
        assert_eq!(controller.state(), ProjectorState::default());
        assert!(controller.next_poll_in().is_none());
        controller.shutdown().await;
    }
}
