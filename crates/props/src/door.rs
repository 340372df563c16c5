//! The RC car door and its two named clips.

use bevy::prelude::*;

use crate::config::{DOOR_CLIP_DURATION, DOOR_OPEN_ANGLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorClip {
    Open,
    Close,
}

impl DoorClip {
    pub fn name(self) -> &'static str {
        match self {
            Self::Open => "OpenDoor",
            Self::Close => "CloseDoor",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "OpenDoor" => Some(Self::Open),
            "CloseDoor" => Some(Self::Close),
            _ => None,
        }
    }

    /// Hinge angle at the start and end of the clip.
    fn angles(self) -> (f32, f32) {
        match self {
            Self::Open => (0.0, DOOR_OPEN_ANGLE),
            Self::Close => (DOOR_OPEN_ANGLE, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Playback {
    clip: DoorClip,
    elapsed: f32,
}

/// Animator on the door hinge.
///
/// The open/closed flag is assumed state: it flips on every toggle and is
/// never read back from the hinge.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DoorAnimator {
    open: bool,
    playback: Option<Playback>,
    rest: Quat,
}

impl DoorAnimator {
    /// A closed door whose hinge rest orientation is `rest`.
    pub fn new(rest: Quat) -> Self {
        Self {
            open: false,
            playback: None,
            rest,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Play OpenDoor if closed, CloseDoor if open, then flip the flag.
    pub fn toggle(&mut self) -> DoorClip {
        let clip = if self.open {
            DoorClip::Close
        } else {
            DoorClip::Open
        };
        self.play(clip);
        self.open = !self.open;
        clip
    }

    /// Start `clip` from its first frame.
    pub fn play(&mut self, clip: DoorClip) {
        self.playback = Some(Playback { clip, elapsed: 0.0 });
    }

    pub fn current_clip(&self) -> Option<DoorClip> {
        self.playback.map(|p| p.clip)
    }

    pub fn is_playing(&self) -> bool {
        self.playback
            .is_some_and(|p| p.elapsed < DOOR_CLIP_DURATION)
    }

    /// Advance playback, holding the last frame once the clip ends.
    pub fn advance(&mut self, dt: f32) {
        if let Some(playback) = &mut self.playback {
            playback.elapsed = (playback.elapsed + dt).min(DOOR_CLIP_DURATION);
        }
    }

    pub fn hinge_angle(&self) -> f32 {
        match self.playback {
            Some(Playback { clip, elapsed }) => {
                let (from, to) = clip.angles();
                let t = (elapsed / DOOR_CLIP_DURATION).clamp(0.0, 1.0);
                from + (to - from) * t
            }
            None if self.open => DOOR_OPEN_ANGLE,
            None => 0.0,
        }
    }

    /// Hinge orientation: the rest pose swung about local Y.
    pub fn rotation(&self) -> Quat {
        self.rest * Quat::from_rotation_y(self.hinge_angle())
    }
}

/// Advance playing door clips and write the hinge rotation.
pub fn play_door_clips(time: Res<Time>, mut doors: Query<(&mut DoorAnimator, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut door, mut transform) in &mut doors {
        if !door.is_playing() {
            continue;
        }
        door.advance(dt);
        transform.rotation = door.rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates_clips_starting_closed() {
        let mut door = DoorAnimator::new(Quat::IDENTITY);
        let names: Vec<&str> = (0..5).map(|_| door.toggle().name()).collect();
        assert_eq!(
            names,
            ["OpenDoor", "CloseDoor", "OpenDoor", "CloseDoor", "OpenDoor"]
        );
        assert!(door.is_open());
    }

    #[test]
    fn test_clip_names_round_trip() {
        for clip in [DoorClip::Open, DoorClip::Close] {
            assert_eq!(DoorClip::from_name(clip.name()), Some(clip));
        }
        assert_eq!(DoorClip::from_name("Honk"), None);
    }

    #[test]
    fn test_open_clip_sweeps_to_open_angle_and_holds() {
        let mut door = DoorAnimator::new(Quat::IDENTITY);
        assert_eq!(door.hinge_angle(), 0.0);

        door.toggle();
        assert!(door.is_playing());
        door.advance(DOOR_CLIP_DURATION / 2.0);
        assert!((door.hinge_angle() - DOOR_OPEN_ANGLE / 2.0).abs() < 1e-5);

        door.advance(DOOR_CLIP_DURATION);
        assert!(!door.is_playing());
        assert!((door.hinge_angle() - DOOR_OPEN_ANGLE).abs() < 1e-5);
    }

    #[test]
    fn test_close_mid_swing_restarts_from_clip_start() {
        let mut door = DoorAnimator::new(Quat::IDENTITY);
        door.toggle();
        door.advance(DOOR_CLIP_DURATION / 4.0);

        assert_eq!(door.toggle(), DoorClip::Close);
        assert_eq!(door.current_clip(), Some(DoorClip::Close));
        assert!((door.hinge_angle() - DOOR_OPEN_ANGLE).abs() < 1e-5);
    }
}
