//! Controller buttons and their keyboard / gamepad bindings.
//!
//! Interaction systems never read raw device input. They read the
//! `ButtonInput<ControllerButton>` resource, which [`map_controller_input`]
//! feeds from every bound device that is present and
//! [`clear_controller_input`] resets at the end of each frame.

use bevy::prelude::*;

// =============================================================================
// Controller buttons
// =============================================================================

/// The four discrete inputs the interaction layer polls each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    /// Index trigger. Runs whichever primary action the current mode binds.
    Trigger,
    /// Thumbstick pushed up: previous menu button.
    ThumbstickUp,
    /// Thumbstick pushed down: next menu button.
    ThumbstickDown,
    /// Face button that submits the focused menu button.
    Confirm,
}

impl ControllerButton {
    /// All buttons in display order.
    pub const ALL: &'static [ControllerButton] = &[
        Self::Trigger,
        Self::ThumbstickUp,
        Self::ThumbstickDown,
        Self::Confirm,
    ];

    /// Human-readable label for help text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trigger => "Trigger",
            Self::ThumbstickUp => "Menu Up",
            Self::ThumbstickDown => "Menu Down",
            Self::Confirm => "Confirm",
        }
    }
}

// =============================================================================
// Bindings
// =============================================================================

/// Device inputs that drive one controller button. Either side may be unbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonBinding {
    pub key: Option<KeyCode>,
    pub gamepad: Option<GamepadButton>,
}

impl ButtonBinding {
    pub const UNBOUND: Self = Self {
        key: None,
        gamepad: None,
    };

    /// Bind both a keyboard key and a gamepad button.
    pub const fn new(key: KeyCode, gamepad: GamepadButton) -> Self {
        Self {
            key: Some(key),
            gamepad: Some(gamepad),
        }
    }

    /// Bind a keyboard key only.
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key: Some(key),
            gamepad: None,
        }
    }

    fn shares_input_with(&self, other: &ButtonBinding) -> bool {
        let same_key = self.key.is_some() && self.key == other.key;
        let same_pad = self.gamepad.is_some() && self.gamepad == other.gamepad;
        same_key || same_pad
    }

    fn just_pressed(&self, keys: Option<&ButtonInput<KeyCode>>, pads: &[&Gamepad]) -> bool {
        let key = match (self.key, keys) {
            (Some(key), Some(keys)) => keys.just_pressed(key),
            _ => false,
        };
        let pad = self
            .gamepad
            .is_some_and(|button| pads.iter().any(|pad| pad.just_pressed(button)));
        key || pad
    }

    fn just_released(&self, keys: Option<&ButtonInput<KeyCode>>, pads: &[&Gamepad]) -> bool {
        let key = match (self.key, keys) {
            (Some(key), Some(keys)) => keys.just_released(key),
            _ => false,
        };
        let pad = self
            .gamepad
            .is_some_and(|button| pads.iter().any(|pad| pad.just_released(button)));
        key || pad
    }
}

/// Configurable mapping from devices to [`ControllerButton`]s.
///
/// On a headset the gamepad side carries the tracked controller's buttons;
/// on a desktop the keyboard side stands in for it.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ControllerBindings {
    pub trigger: ButtonBinding,
    pub thumbstick_up: ButtonBinding,
    pub thumbstick_down: ButtonBinding,
    pub confirm: ButtonBinding,
}

impl Default for ControllerBindings {
    fn default() -> Self {
        Self {
            trigger: ButtonBinding::new(KeyCode::Space, GamepadButton::RightTrigger2),
            thumbstick_up: ButtonBinding::new(KeyCode::ArrowUp, GamepadButton::DPadUp),
            thumbstick_down: ButtonBinding::new(KeyCode::ArrowDown, GamepadButton::DPadDown),
            confirm: ButtonBinding::new(KeyCode::Enter, GamepadButton::South),
        }
    }
}

impl ControllerBindings {
    /// Get the binding for a button.
    pub fn get(&self, button: ControllerButton) -> ButtonBinding {
        match button {
            ControllerButton::Trigger => self.trigger,
            ControllerButton::ThumbstickUp => self.thumbstick_up,
            ControllerButton::ThumbstickDown => self.thumbstick_down,
            ControllerButton::Confirm => self.confirm,
        }
    }

    /// Replace the binding for a button.
    pub fn rebind(&mut self, button: ControllerButton, binding: ButtonBinding) {
        let slot = match button {
            ControllerButton::Trigger => &mut self.trigger,
            ControllerButton::ThumbstickUp => &mut self.thumbstick_up,
            ControllerButton::ThumbstickDown => &mut self.thumbstick_down,
            ControllerButton::Confirm => &mut self.confirm,
        };
        *slot = binding;
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// Pairs of buttons that share a key or gamepad button.
    pub fn find_conflicts(&self) -> Vec<(ControllerButton, ControllerButton)> {
        let mut conflicts = Vec::new();
        for (i, &a) in ControllerButton::ALL.iter().enumerate() {
            for &b in &ControllerButton::ALL[i + 1..] {
                if self.get(a).shares_input_with(&self.get(b)) {
                    conflicts.push((a, b));
                }
            }
        }
        conflicts
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Translate device edges into controller button presses and releases.
///
/// Keyboard input is optional so the system is a no-op in headless apps
/// without `InputPlugin`.
pub fn map_controller_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    gamepads: Query<&Gamepad>,
    bindings: Res<ControllerBindings>,
    mut buttons: ResMut<ButtonInput<ControllerButton>>,
) {
    let keys = keys.as_deref();
    let pads: Vec<&Gamepad> = gamepads.iter().collect();

    for &button in ControllerButton::ALL {
        let binding = bindings.get(button);
        if binding.just_pressed(keys, &pads) {
            buttons.press(button);
        }
        if binding.just_released(keys, &pads) {
            buttons.release(button);
        }
    }
}

/// Drop this frame's just-pressed / just-released edges.
pub fn clear_controller_input(mut buttons: ResMut<ButtonInput<ControllerButton>>) {
    buttons.clear();
}
