/// Progress of the waitlist signup form.
///
/// The submission itself is fire-and-forget: the success view is shown
/// after a fixed delay whatever the transport did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaitlistPhase {
    #[default]
    Idle,
    /// Loader showing, request sent.
    Submitting,
    /// Loader fading out before the success view replaces the form.
    Finishing,
    Done,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WaitlistFlow {
    phase: WaitlistPhase,
}

impl WaitlistFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WaitlistPhase {
        self.phase
    }

    /// Start a submission. Ignored unless the form is idle.
    pub fn submit(&mut self) -> bool {
        self.advance(WaitlistPhase::Idle, WaitlistPhase::Submitting)
    }

    /// Begin swapping to the success view. Without one there is nothing to
    /// swap to and the flow stays where it is.
    pub fn finish(&mut self, has_success_view: bool) -> bool {
        has_success_view && self.advance(WaitlistPhase::Submitting, WaitlistPhase::Finishing)
    }

    pub fn complete(&mut self) -> bool {
        self.advance(WaitlistPhase::Finishing, WaitlistPhase::Done)
    }

    fn advance(&mut self, from: WaitlistPhase, to: WaitlistPhase) -> bool {
        if self.phase != from {
            return false;
        }
        log::debug!("waitlist {:?} -> {:?}", from, to);
        self.phase = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let mut flow = WaitlistFlow::new();
        assert!(flow.submit());
        assert_eq!(flow.phase(), WaitlistPhase::Submitting);
        assert!(flow.finish(true));
        assert!(flow.complete());
        assert_eq!(flow.phase(), WaitlistPhase::Done);
    }

    #[test]
    fn resubmit_while_in_flight_is_ignored() {
        let mut flow = WaitlistFlow::new();
        assert!(flow.submit());
        assert!(!flow.submit());
        flow.finish(true);
        assert!(!flow.submit());
        flow.complete();
        assert!(!flow.submit());
    }

    #[test]
    fn missing_success_view_leaves_flow_submitting() {
        let mut flow = WaitlistFlow::new();
        flow.submit();
        assert!(!flow.finish(false));
        assert_eq!(flow.phase(), WaitlistPhase::Submitting);
        assert!(!flow.complete());
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let mut flow = WaitlistFlow::new();
        assert!(!flow.finish(true));
        assert!(!flow.complete());
        assert_eq!(flow.phase(), WaitlistPhase::Idle);
    }
}
