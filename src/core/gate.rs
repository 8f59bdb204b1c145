use super::surface::{FrameHandle, FrameScheduler};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Stopped,
    Running,
}

/// Outcome of feeding a visibility change into the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTransition {
    Started,
    Stopped,
    Unchanged,
}

/// Runs the frame loop only while the hero is on screen.
///
/// At most one frame is ever pending; `schedule_next` is a no-op while one is
/// outstanding or while stopped.
#[derive(Debug, Default)]
pub struct VisibilityGate {
    state: GateState,
    pending: Option<FrameHandle>,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GateState::Running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn set_visible<S: FrameScheduler + ?Sized>(
        &mut self,
        visible: bool,
        scheduler: &mut S,
    ) -> GateTransition {
        match (visible, self.state) {
            (true, GateState::Stopped) => {
                self.state = GateState::Running;
                GateTransition::Started
            }
            (false, GateState::Running) => {
                self.state = GateState::Stopped;
                if let Some(handle) = self.pending.take() {
                    scheduler.cancel_frame(handle);
                }
                GateTransition::Stopped
            }
            _ => GateTransition::Unchanged,
        }
    }

    /// Called at the top of every frame callback. The fired frame is no longer
    /// pending; returns whether the frame should draw.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.is_running()
    }

    pub fn schedule_next<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.is_running() && self.pending.is_none() {
            self.pending = scheduler.request_frame();
        }
    }
}
