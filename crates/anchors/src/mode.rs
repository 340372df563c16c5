use bevy::prelude::*;

/// Interaction mode of the controller. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnchorMode {
    /// Placement preview shown; the trigger places an anchor.
    Create,
    /// Ray line shown; the trigger selects the hovered anchor.
    #[default]
    Select,
}

impl AnchorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Create => Self::Select,
            Self::Select => Self::Create,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Select => "Select",
        }
    }
}

/// What a primary press (trigger) does this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryAction {
    /// Spawn an anchor at the placement preview.
    Place,
    /// Select the hovered anchor, or clear the selection.
    Select,
    /// Nothing bound yet.
    #[default]
    None,
}

impl PrimaryAction {
    /// The action a mode binds when it is entered.
    pub fn for_mode(mode: AnchorMode) -> Self {
        match mode {
            AnchorMode::Create => Self::Place,
            AnchorMode::Select => Self::Select,
        }
    }
}

/// Mode the controller enters when it starts. Insert before the first update
/// to start somewhere other than Select.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitialMode(pub AnchorMode);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_is_an_involution() {
        for mode in [AnchorMode::Create, AnchorMode::Select] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_action_for_mode() {
        assert_eq!(PrimaryAction::for_mode(AnchorMode::Create), PrimaryAction::Place);
        assert_eq!(PrimaryAction::for_mode(AnchorMode::Select), PrimaryAction::Select);
        assert_eq!(PrimaryAction::default(), PrimaryAction::None);
    }
}
