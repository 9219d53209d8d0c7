//! Input mapping: turns raw key transitions from the host into the
//! debounced intents the simulation consumes.
//!
//! The types here are deliberately backend-neutral: the host translates
//! whatever its input source yields (terminal key codes, synthesized
//! releases) into `KeyTransition`s, and the mapper decides what the game
//! actually hears.

/// The keys the game cares about.  Anything the host cannot name becomes
/// `Other` and is silently ignored by the mapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    Restart,
    Other,
}

/// One discrete key edge: pressed or released, with the auto-repeat flag
/// the input source reported (or the host inferred).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyTransition {
    pub key: Key,
    pub pressed: bool,
    pub is_repeat: bool,
}

/// A decoded, debounced user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    StartMoveLeft,
    StartMoveRight,
    StopMoveLeft,
    StopMoveRight,
    Fire,
    Restart,
}

/// Map one key transition to at most one intent.
///
/// Auto-repeat events are dropped wholesale: a held key must not
/// re-trigger its press action.  Releases of one-shot keys (Fire,
/// Restart) and unrecognized keys map to nothing.
pub fn map_transition(event: &KeyTransition) -> Option<Intent> {
    if event.is_repeat {
        return None;
    }
    match (event.key, event.pressed) {
        (Key::Left, true) => Some(Intent::StartMoveLeft),
        (Key::Left, false) => Some(Intent::StopMoveLeft),
        (Key::Right, true) => Some(Intent::StartMoveRight),
        (Key::Right, false) => Some(Intent::StopMoveRight),
        (Key::Fire, true) => Some(Intent::Fire),
        (Key::Restart, true) => Some(Intent::Restart),
        _ => None,
    }
}

/// Map a whole batch of transitions, lazily and in arrival order.  The
/// host pulls one batch per tick from its input source.
pub fn map_batch(events: &[KeyTransition]) -> impl Iterator<Item = Intent> + '_ {
    events.iter().filter_map(map_transition)
}
