//! Event stream produced by the grammar
//!
//! Grammar rules never touch the tree builder directly. They push events
//! (`Start`, `Token`, `Finish`) through markers, which lets a rule wrap an
//! already-parsed node in a parent (`precede`) without re-parsing. The sink replays the events into a
//! rowan green tree once parsing is over.

use super::syntax_kind::SyntaxKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// Opens a node. `forward_parent` is the distance to the `Start` event of
    /// a node that was later made the parent of this one via `precede`.
    Start {
        kind: SyntaxKind,
        forward_parent: Option<u32>,
    },
    /// Consumes the next significant token together with its leading trivia
    Token,
    Finish,
}

impl Event {
    pub(crate) fn tombstone() -> Self {
        Event::Start {
            kind: SyntaxKind::TOMBSTONE,
            forward_parent: None,
        }
    }
}

/// An open node: the index of its `Start` event
#[must_use = "a marker must be completed"]
#[derive(Debug)]
pub struct Marker {
    pub(crate) pos: u32,
}

/// A finished node that can still be wrapped by a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedMarker {
    pub(crate) pos: u32,
    kind: SyntaxKind,
}

impl CompletedMarker {
    pub(crate) fn new(pos: u32, kind: SyntaxKind) -> Self {
        Self { pos, kind }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }
}

/// Snapshot of the parser used to backtrack over an uncommitted prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub(crate) pos: usize,
    pub(crate) events: usize,
    pub(crate) errors: usize,
}
