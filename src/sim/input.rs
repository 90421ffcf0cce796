//! Single-button input gate

use super::state::SessionState;

/// What an activation means in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Leave the start prompt and begin a run
    Start,
    /// Request an impulse on the next tick
    Flap,
    /// Crash animation in progress
    Ignored,
}

pub fn dispatch(state: SessionState) -> Activation {
    match state {
        SessionState::Idle => Activation::Start,
        SessionState::Running => Activation::Flap,
        SessionState::Terminated => Activation::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_state() {
        assert_eq!(dispatch(SessionState::Idle), Activation::Start);
        assert_eq!(dispatch(SessionState::Running), Activation::Flap);
        assert_eq!(dispatch(SessionState::Terminated), Activation::Ignored);
    }
}
