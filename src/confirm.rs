//! Confirm-before-acting gate
//!
//! A pending action is held behind a yes/no prompt and only handed back to
//! the caller if the user affirms. Declining or dismissing the prompt drops
//! the action silently; that is a normal outcome, not an error. This is the
//! non-blocking replacement for a modal confirm dialog: the host renders
//! the prompt while the gate is open and resolves it from its key handler.

/// Holds at most one action awaiting user confirmation
pub struct ConfirmGate<A> {
    pending: Option<(String, A)>,
}

impl<A> ConfirmGate<A> {
    pub fn new() -> Self {
        ConfirmGate { pending: None }
    }

    /// Opens the gate with a prompt and the action to run on "yes"
    ///
    /// A previous pending request, if any, is replaced and its action
    /// dropped.
    pub fn request(&mut self, message: impl Into<String>, action: A) {
        self.pending = Some((message.into(), action));
    }

    /// The prompt to render, while the gate is open
    pub fn message(&self) -> Option<&str> {
        self.pending.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Closes the gate; returns the action only if the user affirmed
    pub fn resolve(&mut self, accepted: bool) -> Option<A> {
        let (_, action) = self.pending.take()?;
        accepted.then_some(action)
    }
}

impl<A> Default for ConfirmGate<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_returns_action() {
        let mut gate = ConfirmGate::new();
        gate.request("Quit?", "quit");
        assert!(gate.is_open());
        assert_eq!(gate.message(), Some("Quit?"));
        assert_eq!(gate.resolve(true), Some("quit"));
        assert!(!gate.is_open());
    }

    #[test]
    fn test_decline_drops_action() {
        let mut gate = ConfirmGate::new();
        gate.request("Clear the form?", "clear");
        assert_eq!(gate.resolve(false), None);
        assert!(!gate.is_open());
        assert_eq!(gate.message(), None);
    }

    #[test]
    fn test_resolve_without_request_is_none() {
        let mut gate: ConfirmGate<u8> = ConfirmGate::new();
        assert_eq!(gate.resolve(true), None);
        assert_eq!(gate.resolve(false), None);
    }

    #[test]
    fn test_new_request_replaces_pending() {
        let mut gate = ConfirmGate::new();
        gate.request("first", 1);
        gate.request("second", 2);
        assert_eq!(gate.message(), Some("second"));
        assert_eq!(gate.resolve(true), Some(2));
    }
}
