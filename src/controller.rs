use crate::params::{self, ContentParams};
use crate::reactive::{batch, create_signal, Signal};
use crate::transition::TransitionKey;
use crate::view::View;

/// Holds the displayed view and the key of the transition that led to it.
///
/// Both cells are only written by [`select_view`](Self::select_view), inside
/// one batch, so effects never observe a view paired with a stale key.
#[derive(Clone)]
pub struct ViewTransitionController {
    view: Signal<View>,
    key: Signal<TransitionKey>,
}

impl ViewTransitionController {
    pub fn new() -> Self {
        Self {
            view: create_signal(View::INITIAL),
            key: create_signal(TransitionKey::default()),
        }
    }

    /// Show `next`, keying the transition by the view shown until now.
    pub fn select_view(&self, next: View) {
        let prev = self.view.get_untracked();
        let key = TransitionKey::between(prev, next);
        log::debug!("select {next}: transition {key}");
        batch(|| {
            self.key.set(key);
            self.view.set(next);
        });
    }

    pub fn view(&self) -> View {
        self.view.get()
    }

    pub fn transition_key(&self) -> TransitionKey {
        self.key.get()
    }

    /// Shell spring bounce for the current key, defaulted on a table miss
    pub fn shell_bounce(&self) -> f32 {
        params::resolved_shell_bounce(self.transition_key())
    }

    /// Content motion for the current key, neutral on a table miss
    pub fn content_params(&self) -> ContentParams {
        params::resolved_content_params(self.transition_key())
    }
}

impl Default for ViewTransitionController {
    fn default() -> Self {
        Self::new()
    }
}
