//! What a state action did. Actions never fail; they either apply or leave
//! the state untouched for a reason the view can show.

/// Outcome of a selection, metric or submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Applied,
    Ignored(IgnoreReason),
}

impl Change {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why an action left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The slot already holds that model.
    Unchanged,
    /// The model is chosen in another slot.
    AlreadyChosen,
    /// The comparison slot needs a primary model first.
    PrimaryEmpty,
    /// Additional slots need a comparison model first.
    ComparisonEmpty,
    /// An additional slot needs the slot before it filled first.
    PreviousSlotEmpty,
    /// Every catalog model already has a slot.
    SlotCapReached,
    NoSuchSlot,
    /// Submitting needs a non-blank prompt.
    EmptyPrompt,
    /// Submitting needs at least one filled slot.
    NothingSelected,
}
