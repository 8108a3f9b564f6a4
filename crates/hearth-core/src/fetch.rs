//! Per-operation fetch state.
//!
//! Every remote operation owned by the dashboard (the listings load and the
//! per-property detail load) is tracked by one [`FetchState`] slot. The slot
//! moves through `Idle -> Loading -> Loaded | Failed` and is always replaced
//! as a whole; a payload is never patched in place.

/// Tagged state of a single fetch slot.
///
/// At most one of `Loading`/`Failed` is active at a time, and entering
/// `Loading` discards any previous `Loaded` or `Failed` value. `Loaded`
/// with an empty payload is distinct from `Idle`: the former means "the
/// server answered and there was nothing", the latter "never asked".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// No fetch has been attempted for this slot
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The most recent fetch settled successfully
    Loaded(T),
    /// The most recent fetch settled with a user-facing error message
    Failed(String),
}

impl<T> FetchState<T> {
    /// Returns true if no fetch has been attempted yet.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true once a fetch has settled successfully.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Returns true if the most recent fetch settled with an error.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the loaded payload, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
