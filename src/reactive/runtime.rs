use std::cell::RefCell;
use std::collections::HashSet;

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::new());
}

pub type SignalId = usize;
pub type EffectId = usize;

/// Per-thread bookkeeping for signal subscriptions and pending effects.
///
/// Effect callbacks are taken out of the runtime while they run so that the
/// signals they read can register themselves without re-borrowing the runtime.
#[derive(Default)]
pub struct Runtime {
    current_effect: Option<EffectId>,
    pending_effects: Vec<EffectId>,
    effect_callbacks: Vec<Option<Box<dyn FnMut()>>>,
    effect_alive: Vec<bool>,
    effect_dependencies: Vec<HashSet<SignalId>>,
    signal_subscribers: Vec<HashSet<EffectId>>,
    batch_depth: usize,
    flushing: bool,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_signal(&mut self) -> SignalId {
        self.signal_subscribers.push(HashSet::new());
        self.signal_subscribers.len() - 1
    }

    pub fn allocate_effect(&mut self, callback: Box<dyn FnMut()>) -> EffectId {
        self.effect_callbacks.push(Some(callback));
        self.effect_alive.push(true);
        self.effect_dependencies.push(HashSet::new());
        self.effect_callbacks.len() - 1
    }

    pub fn track_read(&mut self, signal_id: SignalId) {
        // Signals created on another thread's runtime are unknown here
        if signal_id >= self.signal_subscribers.len() {
            return;
        }

        if let Some(effect_id) = self.current_effect {
            self.signal_subscribers[signal_id].insert(effect_id);
            self.effect_dependencies[effect_id].insert(signal_id);
        }
    }

    /// Queue every subscriber of `signal_id`. Effects run on the next flush.
    pub fn notify_write(&mut self, signal_id: SignalId) {
        if signal_id >= self.signal_subscribers.len() {
            return;
        }

        let mut subscribers: Vec<_> = self.signal_subscribers[signal_id].iter().copied().collect();
        subscribers.sort_unstable();
        for effect_id in subscribers {
            if !self.pending_effects.contains(&effect_id) {
                self.pending_effects.push(effect_id);
            }
        }
    }

    pub fn dispose_effect(&mut self, effect_id: EffectId) {
        // Effects outliving a runtime reset have nothing left to detach
        if effect_id >= self.effect_callbacks.len() {
            return;
        }
        let deps = std::mem::take(&mut self.effect_dependencies[effect_id]);
        for signal_id in deps {
            if signal_id < self.signal_subscribers.len() {
                self.signal_subscribers[signal_id].remove(&effect_id);
            }
        }
        self.effect_callbacks[effect_id] = None;
        self.effect_alive[effect_id] = false;
        self.pending_effects.retain(|id| *id != effect_id);
    }

    /// Detach the effect from its old dependencies and hand out its callback.
    fn begin_effect(&mut self, effect_id: EffectId) -> Option<(Box<dyn FnMut()>, Option<EffectId>)> {
        if !self.effect_alive.get(effect_id).copied().unwrap_or(false) {
            return None;
        }
        let callback = self.effect_callbacks[effect_id].take()?;

        let old_deps = std::mem::take(&mut self.effect_dependencies[effect_id]);
        for signal_id in old_deps {
            self.signal_subscribers[signal_id].remove(&effect_id);
        }

        let prev_effect = self.current_effect.replace(effect_id);
        Some((callback, prev_effect))
    }

    fn end_effect(
        &mut self,
        effect_id: EffectId,
        callback: Box<dyn FnMut()>,
        prev_effect: Option<EffectId>,
    ) {
        self.current_effect = prev_effect;
        // The effect may have been disposed from inside its own callback
        if self.effect_alive[effect_id] {
            self.effect_callbacks[effect_id] = Some(callback);
        }
    }
}

pub fn with_runtime<F, R>(f: F) -> R
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.with(|rt| f(&mut rt.borrow_mut()))
}

/// Try to access the runtime, skipping the callback if it is already borrowed.
pub fn try_with_runtime<F>(f: F)
where
    F: FnOnce(&mut Runtime),
{
    RUNTIME.with(|rt| {
        if let Ok(mut runtime) = rt.try_borrow_mut() {
            f(&mut runtime);
        }
    });
}

/// An effect callback taken out of the runtime while it runs.
///
/// Dropping it hands the callback back, also when the callback panicked.
struct RunningEffect {
    effect_id: EffectId,
    callback: Option<Box<dyn FnMut()>>,
    prev_effect: Option<EffectId>,
}

impl Drop for RunningEffect {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            with_runtime(|rt| rt.end_effect(self.effect_id, callback, self.prev_effect));
        }
    }
}

/// Clears the runtime's `flushing` flag when the flush ends or unwinds.
struct FlushGuard;

impl Drop for FlushGuard {
    fn drop(&mut self) {
        with_runtime(|rt| rt.flushing = false);
    }
}

/// Run a single effect with dependency tracking.
pub fn run_effect(effect_id: EffectId) {
    let Some((callback, prev_effect)) = with_runtime(|rt| rt.begin_effect(effect_id)) else {
        return;
    };
    let mut running = RunningEffect {
        effect_id,
        callback: Some(callback),
        prev_effect,
    };
    if let Some(callback) = running.callback.as_mut() {
        callback();
    }
}

/// Run queued effects unless a batch is open or a flush is already in progress.
pub fn flush_effects() {
    let should_flush = with_runtime(|rt| {
        if rt.batch_depth > 0 || rt.flushing {
            false
        } else {
            rt.flushing = true;
            true
        }
    });
    if !should_flush {
        return;
    }
    let _guard = FlushGuard;

    loop {
        let next = with_runtime(|rt| {
            if rt.pending_effects.is_empty() {
                None
            } else {
                Some(rt.pending_effects.remove(0))
            }
        });
        match next {
            Some(effect_id) => run_effect(effect_id),
            None => break,
        }
    }
}

/// Group several signal writes so that effects observe them together.
///
/// Effects queued inside the closure run once, after the outermost batch ends.
pub fn batch<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    with_runtime(|rt| rt.batch_depth += 1);
    let result = f();
    with_runtime(|rt| rt.batch_depth -= 1);
    flush_effects();
    result
}

#[cfg(test)]
pub(crate) fn reset_runtime() {
    with_runtime(|rt| *rt = Runtime::new());
}
