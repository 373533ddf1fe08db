//! Activation policy for effects that animate before acting
//!
//! Bounce and shake both follow `Idle -> Animating -> (delay) -> Idle + action`.
//! What a tap does while an activation is still in flight is a named choice:
//!
//! | Policy | Second tap while animating | Action invocations |
//! |---|---|---|
//! | `IgnoreWhileAnimating` | dropped | one per accepted tap |
//! | `Restart` | cancels the pending callback, restarts the animation | one, for the latest tap |
//! | `Queue` | schedules another independent callback | one per tap, staggered |

use std::sync::Arc;
use std::time::Duration;

use motionkit_animation::{SchedulerHandle, TimerId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// What to do with an activation that arrives while one is in flight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationPolicy {
    #[default]
    IgnoreWhileAnimating,
    Restart,
    Queue,
}

/// Result of a single `activate()` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Animation started from idle; the action runs after the delay
    Started,
    /// Dropped because an activation is in flight
    Ignored,
    /// Replaced the in-flight activation
    Restarted,
    /// Scheduled alongside the in-flight activation
    Queued,
    /// Dropped because the control is disabled
    Suppressed,
    /// The action ran synchronously
    Invoked,
}

impl ActivationOutcome {
    /// Whether this activation will (or did) reach the action
    pub fn reaches_action(&self) -> bool {
        !matches!(self, ActivationOutcome::Ignored | ActivationOutcome::Suppressed)
    }
}

/// Coarse animation state of a bounce or shake
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectPhase {
    #[default]
    Idle,
    Animating,
}

#[derive(Default)]
struct GateState {
    /// Scheduled callbacks that have not fired yet
    pending: usize,
    /// Most recent callback, tagged with its generation
    latest: Option<(u64, TimerId)>,
    generation: u64,
}

/// Applies an [`ActivationPolicy`] around "start now, settle after a delay"
pub(crate) struct ActivationGate {
    policy: ActivationPolicy,
    state: Arc<Mutex<GateState>>,
}

impl ActivationGate {
    pub(crate) fn new(policy: ActivationPolicy) -> Self {
        Self {
            policy,
            state: Arc::new(Mutex::new(GateState::default())),
        }
    }

    pub(crate) fn policy(&self) -> ActivationPolicy {
        self.policy
    }

    pub(crate) fn set_policy(&mut self, policy: ActivationPolicy) {
        self.policy = policy;
    }

    pub(crate) fn phase(&self) -> EffectPhase {
        if self.state.lock().pending > 0 {
            EffectPhase::Animating
        } else {
            EffectPhase::Idle
        }
    }

    pub(crate) fn pending(&self) -> usize {
        self.state.lock().pending
    }

    /// Run `start` now and `settle` after `delay`, subject to the policy
    ///
    /// `settle` receives `true` when no other activation is still in flight,
    /// so visuals are only reset by the last one. If the scheduler is gone the
    /// settle step runs immediately. The gate is not locked while `start`
    /// runs, and the activation already counts as in flight.
    pub(crate) fn activate<S, F>(
        &self,
        handle: &SchedulerHandle,
        delay: Duration,
        start: S,
        settle: F,
    ) -> ActivationOutcome
    where
        S: FnOnce(),
        F: FnOnce(bool) + Send + 'static,
    {
        let (outcome, generation) = {
            let mut state = self.state.lock();

            let outcome = if state.pending == 0 {
                ActivationOutcome::Started
            } else {
                match self.policy {
                    ActivationPolicy::IgnoreWhileAnimating => {
                        tracing::debug!(pending = state.pending, "activation ignored while animating");
                        return ActivationOutcome::Ignored;
                    }
                    ActivationPolicy::Restart => {
                        if let Some((_, timer)) = state.latest.take() {
                            if handle.cancel_timer(timer) {
                                state.pending -= 1;
                            }
                        }
                        ActivationOutcome::Restarted
                    }
                    ActivationPolicy::Queue => ActivationOutcome::Queued,
                }
            };

            state.generation += 1;
            state.pending += 1;
            (outcome, state.generation)
        };

        start();

        if !handle.is_alive() {
            self.release();
            tracing::debug!("animation scheduler gone; settling immediately");
            settle(true);
            return outcome;
        }

        let shared = Arc::clone(&self.state);
        let timer = handle.schedule_after(delay, move || {
            let idle = {
                let mut state = shared.lock();
                state.pending = state.pending.saturating_sub(1);
                if matches!(state.latest, Some((g, _)) if g == generation) {
                    state.latest = None;
                }
                state.pending == 0
            };
            settle(idle);
        });

        match timer {
            Some(timer) => self.state.lock().latest = Some((generation, timer)),
            None => self.release(),
        }

        outcome
    }

    fn release(&self) {
        let mut state = self.state.lock();
        state.pending = state.pending.saturating_sub(1);
    }
}
