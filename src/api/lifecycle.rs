use serde::{Deserialize, Serialize};

/// Host application lifecycle transitions surfaced to the status sink.
///
/// The engine itself holds no run state; these exist so status observers see
/// the same phase announcements the host emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleCommand {
    Init,
    Start,
    Stop,
    Reset,
    Terminate,
}

impl LifecycleCommand {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Init => "Initialized",
            Self::Start => "Started",
            Self::Stop => "Stopped",
            Self::Reset => "Reset",
            Self::Terminate => "Terminated",
        }
    }
}
