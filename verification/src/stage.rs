//! Verification pipeline stages.
//!
//! ```text
//! Start -> FormatChecked -> Rejected
//!                        -> Encoded -> Resolved -> Completed
//!          FormatChecked | Encoded | Resolved -> Errored
//! ```

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Start,
    FormatChecked,
    /// Terminal: the number failed structural validation.
    Rejected,
    Encoded,
    Resolved,
    /// Terminal: an age flag was produced.
    Completed,
    /// Terminal: the encode / resolve sequence failed.
    Errored,
}

impl PipelineStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Errored)
    }

    /// Whether the pipeline may move from `self` to `next`.
    pub fn can_transition_to(&self, next: PipelineStage) -> bool {
        use PipelineStage::*;
        matches!(
            (*self, next),
            (Start, FormatChecked)
                | (FormatChecked, Rejected)
                | (FormatChecked, Encoded)
                | (Encoded, Resolved)
                | (Resolved, Completed)
                | (FormatChecked | Encoded | Resolved, Errored)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::FormatChecked => "format_checked",
            Self::Rejected => "rejected",
            Self::Encoded => "encoded",
            Self::Resolved => "resolved",
            Self::Completed => "completed",
            Self::Errored => "errored",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
