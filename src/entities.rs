/// All game entity types — pure data, no logic.

use crate::geometry::AxisAlignedBox;

/// Playfield dimensions in playfield units (origin top-left, y grows down).
/// The terminal front end scales these to cells; the rules never change.
pub const FIELD_WIDTH: i32 = 640;
pub const FIELD_HEIGHT: i32 = 480;

/// Off-field sentinel where inactive entities are parked.
pub const PARK_X: i32 = 700;
pub const PARK_Y: i32 = 700;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Lost,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Soldier {
    pub pos_x: i32,
    pub pos_y: i32,
    /// −VEL, 0 or +VEL under paired press/release sequences.
    pub vel_x: i32,
    pub collider: AxisAlignedBox,
}

impl Soldier {
    pub const WIDTH: i32 = 32;
    pub const HEIGHT: i32 = 48;
    pub const VEL: i32 = 1;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub pos_x: i32,
    pub pos_y: i32,
    /// Tick counter; increments every tick and only resets on restart.
    pub accel: u32,
    /// Discrete acceleration tier, recomputed at fixed `accel` checkpoints.
    /// Never decreases mid-round.
    pub accel_tier: u32,
    pub collider: AxisAlignedBox,
}

impl Enemy {
    pub const WIDTH: i32 = 32;
    pub const HEIGHT: i32 = 48;
    /// Base step width; each tier adds one more unit on top.
    pub const VEL: i32 = 1;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub pos_x: i32,
    pub pos_y: i32,
    /// One-tick pulse: set by a Fire intent, consumed by the next tick's
    /// position update.
    pub armed: bool,
    pub collider: AxisAlignedBox,
}

impl Bullet {
    pub const WIDTH: i32 = 28;
    pub const HEIGHT: i32 = 20;
    /// Leftward drift per tick, applied whether or not the bullet was
    /// ever fired.
    pub const VEL: i32 = 1;
}

/// The entire round state.  Cloneable so the pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub soldier: Soldier,
    pub enemy: Enemy,
    pub bullet: Bullet,
    pub round_state: RoundState,
}

/// Per-tick view handed to the renderer: everything it needs to draw one
/// frame, nothing it could mutate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub round_state: RoundState,
    pub soldier_pos: (i32, i32),
    pub enemy_pos: (i32, i32),
    pub enemy_parked: bool,
    pub bullet_pos: (i32, i32),
    pub bullet_parked: bool,
}
