use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use ghostfix_shared::{ActorId, Clock};

/// Per-actor rate limit on accepted triggers.
///
/// Entries hold the last accepted trigger time in milliseconds. They are
/// dropped on disconnect through [`CooldownGate::forget`], or by
/// [`CooldownGate::sweep`] on hosts that do not report disconnects.
///
/// The map sits behind a single lock and [`CooldownGate::try_acquire`] does
/// its check and its update under that lock, so triggers for the same actor
/// delivered from several threads cannot both pass.
pub struct CooldownGate {
    clock: Arc<dyn Clock>,
    last_triggered: Mutex<HashMap<ActorId, u64>>,
}

impl CooldownGate {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last_triggered: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true if the actor triggered less than `cooldown_ms` ago
    pub fn is_on_cooldown(&self, actor: &ActorId, cooldown_ms: u64) -> bool {
        let now = self.clock.now_ms();
        let last = self.entries().get(actor).copied();
        Self::within_cooldown(last, now, cooldown_ms)
    }

    /// Records a trigger for the actor at the current time
    pub fn mark_triggered(&self, actor: &ActorId) {
        let now = self.clock.now_ms();
        self.entries().insert(*actor, now);
    }

    /// Checks the cooldown and, if it has elapsed, records a new trigger.
    /// Returns true if the trigger was accepted.
    pub fn try_acquire(&self, actor: &ActorId, cooldown_ms: u64) -> bool {
        let now = self.clock.now_ms();
        let mut entries = self.entries();
        if Self::within_cooldown(entries.get(actor).copied(), now, cooldown_ms) {
            return false;
        }
        entries.insert(*actor, now);
        true
    }

    /// Drops the actor's entry
    pub fn forget(&self, actor: &ActorId) {
        self.entries().remove(actor);
    }

    /// Evicts every entry older than `max_age_ms`, returning how many were removed
    pub fn sweep(&self, max_age_ms: u64) -> usize {
        let now = self.clock.now_ms();
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|_, last| now.saturating_sub(*last) <= max_age_ms);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn within_cooldown(last: Option<u64>, now: u64, cooldown_ms: u64) -> bool {
        match last {
            // a clock stepping backwards reads as "just triggered"
            Some(last) => now.saturating_sub(last) < cooldown_ms,
            None => false,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<ActorId, u64>> {
        // timestamps stay valid even if a holder panicked
        self.last_triggered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
