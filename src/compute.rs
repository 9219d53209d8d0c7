/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// state and returns a brand-new value.  The simulation has no I/O and no
/// failure modes; pacing and rendering belong to the host.

use log::debug;

use crate::entities::{
    Bullet, Enemy, FrameSnapshot, GameState, RoundState, Soldier, FIELD_HEIGHT, FIELD_WIDTH,
    PARK_X, PARK_Y,
};
use crate::geometry::{overlaps, AxisAlignedBox};
use crate::input::Intent;

// ── Tuning ───────────────────────────────────────────────────────────────

/// `accel` values at which the enemy's tier is recomputed.
const TIER_CHECKPOINTS: [u32; 4] = [20, 30, 40, 50];

/// Divisor applied to `accel` at a checkpoint: 20→1, 30→2, 40→2, 50→3.
const TIER_DIVISOR: u32 = 15;

/// The enemy steps forward only on ticks where `accel % 4 == 1`.
const ENEMY_MOVE_PERIOD: u32 = 4;

/// Where a fired bullet appears relative to the soldier's top-left corner.
const MUZZLE_DX: i32 = -10;
const MUZZLE_DY: i32 = 10;

// ── Spawn table ──────────────────────────────────────────────────────────

fn spawn_soldier() -> Soldier {
    let (pos_x, pos_y) = (240, FIELD_HEIGHT - Soldier::HEIGHT);
    Soldier {
        pos_x,
        pos_y,
        vel_x: 0,
        collider: AxisAlignedBox::new(pos_x, pos_y, Soldier::WIDTH, Soldier::HEIGHT),
    }
}

fn spawn_enemy() -> Enemy {
    let (pos_x, pos_y) = (20, FIELD_HEIGHT - Enemy::HEIGHT);
    Enemy {
        pos_x,
        pos_y,
        accel: 0,
        accel_tier: 0,
        collider: AxisAlignedBox::new(pos_x, pos_y, Enemy::WIDTH, Enemy::HEIGHT),
    }
}

fn spawn_bullet() -> Bullet {
    Bullet {
        pos_x: PARK_X,
        pos_y: PARK_Y,
        armed: false,
        collider: AxisAlignedBox::new(PARK_X, PARK_Y, Bullet::WIDTH, Bullet::HEIGHT),
    }
}

/// Build the initial state of a round: soldier and enemy at their spawn
/// points, bullet parked off-field, round live.
pub fn init_state() -> GameState {
    GameState {
        soldier: spawn_soldier(),
        enemy: spawn_enemy(),
        bullet: spawn_bullet(),
        round_state: RoundState::Playing,
    }
}

// ── Intent application ───────────────────────────────────────────────────

/// Apply a single debounced intent.
///
/// While the round is lost only `Restart` does anything.  While playing,
/// `Restart` is a no-op and `Fire` arms the bullet at most once per
/// flight of the pulse.
pub fn apply_intent(state: &GameState, intent: Intent) -> GameState {
    match state.round_state {
        RoundState::Lost => match intent {
            Intent::Restart => {
                debug!("restart: round reset to spawn state");
                init_state()
            }
            _ => state.clone(),
        },
        RoundState::Playing => match intent {
            Intent::StartMoveLeft => nudge_velocity(state, -Soldier::VEL),
            Intent::StopMoveLeft => nudge_velocity(state, Soldier::VEL),
            Intent::StartMoveRight => nudge_velocity(state, Soldier::VEL),
            Intent::StopMoveRight => nudge_velocity(state, -Soldier::VEL),
            Intent::Fire => {
                if state.bullet.armed {
                    state.clone()
                } else {
                    let mut next = state.clone();
                    next.bullet.armed = true;
                    next
                }
            }
            Intent::Restart => state.clone(),
        },
    }
}

fn nudge_velocity(state: &GameState, delta: i32) -> GameState {
    let mut next = state.clone();
    next.soldier.vel_x += delta;
    next
}

// ── Per-entity steps ─────────────────────────────────────────────────────

/// Advance the soldier one tick against the obstacle's current box.
///
/// A move that would leave the field is undone outright rather than
/// clamped; collision with the obstacle is only evaluated for moves that
/// stand.  Returns the stepped soldier and whether it collided.
pub fn step_soldier(soldier: &Soldier, obstacle: &AxisAlignedBox) -> (Soldier, bool) {
    let mut s = soldier.clone();
    s.pos_x += s.vel_x;
    s.collider.move_to(s.pos_x, s.pos_y);

    if s.pos_x < 0 || s.pos_x + Soldier::WIDTH > FIELD_WIDTH {
        s.pos_x -= s.vel_x;
        s.collider.move_to(s.pos_x, s.pos_y);
        (s, false)
    } else if overlaps(&s.collider, obstacle) {
        (s, true)
    } else {
        (s, false)
    }
}

/// Advance the enemy one tick against the obstacle's current box.
///
/// `accel` counts every tick; the enemy itself only steps on ticks where
/// `accel % 4 == 1`, covering `VEL + accel_tier` whole units.  The
/// sub-unit remainder of the acceleration curve is truncated every tick,
/// never accumulated.  Ramming the obstacle parks the enemy off-field and
/// reports the collision.
pub fn step_enemy(enemy: &Enemy, obstacle: &AxisAlignedBox) -> (Enemy, bool) {
    let mut e = enemy.clone();
    e.accel += 1;
    if TIER_CHECKPOINTS.contains(&e.accel) {
        e.accel_tier = e.accel / TIER_DIVISOR;
    }
    e.collider.move_to(e.pos_x, e.pos_y);

    if overlaps(&e.collider, obstacle) {
        e.pos_x = PARK_X;
        e.pos_y = PARK_Y;
        e.collider.move_to(e.pos_x, e.pos_y);
        (e, true)
    } else {
        if e.accel % ENEMY_MOVE_PERIOD == 1 {
            e.pos_x += Enemy::VEL + e.accel_tier as i32;
            e.collider.move_to(e.pos_x, e.pos_y);
        }
        (e, false)
    }
}

/// Advance the bullet one tick.
///
/// A pending Fire pulse relocates it to the soldier's muzzle exactly
/// once; the bullet then drifts left every tick regardless, starting from
/// wherever it is (the park sentinel before the first shot).  Returns the
/// stepped bullet and whether it overlapped the enemy's box.
pub fn step_bullet(bullet: &Bullet, soldier: &Soldier, enemy_box: &AxisAlignedBox) -> (Bullet, bool) {
    let mut b = bullet.clone();
    if b.armed {
        b.pos_x = soldier.pos_x + MUZZLE_DX;
        b.pos_y = soldier.pos_y + MUZZLE_DY;
        b.collider.move_to(b.pos_x, b.pos_y);
        b.armed = false;
    }

    b.pos_x -= Bullet::VEL;
    b.collider.move_to(b.pos_x, b.pos_y);

    let hit = overlaps(&b.collider, enemy_box);
    (b, hit)
}

// ── Whole-simulation tick ────────────────────────────────────────────────

/// Advance the simulation by one tick.
///
/// Queued intents are applied first, in arrival order.  Entities then
/// step in a fixed order (soldier, enemy, bullet), each reading the
/// boxes the earlier ones just updated.  A soldier/enemy collision ends
/// the round; a bullet hit parks the enemy (and the bullet) while the
/// round continues.
pub fn tick(state: &GameState, intents: &[Intent]) -> GameState {
    if state.round_state == RoundState::Lost {
        // A lost round only listens for Restart; the reset tick itself
        // performs no entity updates.
        return intents
            .iter()
            .fold(state.clone(), |s, &intent| apply_intent(&s, intent));
    }

    let mut s = state.clone();
    for &intent in intents {
        s = apply_intent(&s, intent);
    }

    let (soldier, ran_into_enemy) = step_soldier(&s.soldier, &s.enemy.collider);
    let (mut enemy, rammed_soldier) = step_enemy(&s.enemy, &soldier.collider);
    let (mut bullet, bullet_hit) = step_bullet(&s.bullet, &soldier, &enemy.collider);

    // A hit only counts against an enemy that is actually on the field;
    // two parked colliders meeting at the sentinel must stay inert.
    if bullet_hit && !off_field(&enemy.collider) {
        debug!(
            "enemy eliminated at ({}, {}), accel {}",
            enemy.pos_x, enemy.pos_y, enemy.accel
        );
        enemy.pos_x = PARK_X;
        enemy.pos_y = PARK_Y;
        enemy.collider.move_to(PARK_X, PARK_Y);
        bullet.pos_x = PARK_X;
        bullet.pos_y = PARK_Y;
        bullet.collider.move_to(PARK_X, PARK_Y);
    }

    let round_state = if ran_into_enemy || rammed_soldier {
        debug!(
            "soldier/enemy collision at soldier x={}, round lost",
            soldier.pos_x
        );
        RoundState::Lost
    } else {
        RoundState::Playing
    };

    GameState {
        soldier,
        enemy,
        bullet,
        round_state,
    }
}

/// True when a collider sits fully outside the playfield: the parked
/// representation for eliminated or never-fired entities.
pub fn off_field(collider: &AxisAlignedBox) -> bool {
    !overlaps(collider, &AxisAlignedBox::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT))
}

/// Condense the state into the read-only view the renderer consumes.
pub fn snapshot(state: &GameState) -> FrameSnapshot {
    FrameSnapshot {
        round_state: state.round_state,
        soldier_pos: (state.soldier.pos_x, state.soldier.pos_y),
        enemy_pos: (state.enemy.pos_x, state.enemy.pos_y),
        enemy_parked: off_field(&state.enemy.collider),
        bullet_pos: (state.bullet.pos_x, state.bullet.pos_y),
        bullet_parked: off_field(&state.bullet.collider),
    }
}
