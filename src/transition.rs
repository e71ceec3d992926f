use std::fmt;

use crate::view::View;

/// Identifies the (previous, next) view pair a transition animates.
///
/// Before the first selection the key is the bare initial view and renders as
/// `"idle"`. Every selection after that yields `"{from}-{to}"`, including
/// reselecting the view already shown (`"idle-idle"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKey {
    Initial(View),
    Between { from: View, to: View },
}

impl TransitionKey {
    /// Key derived when moving from `prev` to `next`.
    pub fn between(prev: View, next: View) -> Self {
        TransitionKey::Between {
            from: prev,
            to: next,
        }
    }

    /// The view this key animates towards.
    pub fn target(self) -> View {
        match self {
            TransitionKey::Initial(view) => view,
            TransitionKey::Between { to, .. } => to,
        }
    }

    /// Reselecting the displayed view. No table has an entry for these keys.
    pub fn is_self_transition(self) -> bool {
        matches!(self, TransitionKey::Between { from, to } if from == to)
    }
}

impl Default for TransitionKey {
    fn default() -> Self {
        TransitionKey::Initial(View::INITIAL)
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionKey::Initial(view) => write!(f, "{view}"),
            TransitionKey::Between { from, to } => write!(f, "{from}-{to}"),
        }
    }
}
