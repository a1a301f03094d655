// One player against one enemy on a flat floor

use glam::Vec2;
use rand_chacha::ChaCha8Rng;

use crate::engine::input::InputState;
use crate::engine::physics::{
    presets, ColliderHandle, ContactEvent, ContactTracker, PhysicsWorld, RigidBodyHandle,
};
use crate::game::characters::{
    AnimationPlayer, CharacterController, EnemyController, EnemyIntentSource, Outputs,
    PlayerController, PlayerIntentSource, TuningFile,
};
use crate::game::rig::{RapierBody, SensorHitbox};

/// Character collider size
pub const CHARACTER_WIDTH: f32 = 0.8;
pub const CHARACTER_HEIGHT: f32 = 1.8;

/// Attack sensor size and its authored offset (facing right)
pub const HITBOX_WIDTH: f32 = 1.0;
pub const HITBOX_HEIGHT: f32 = 1.0;
pub const HITBOX_OFFSET_X: f32 = 0.8;
pub const HITBOX_OFFSET_Y: f32 = 0.2;

/// Floor size; its top surface is at y = 0
pub const FLOOR_WIDTH: f32 = 40.0;
pub const FLOOR_HEIGHT: f32 = 1.0;

pub const PLAYER_SPAWN_X: f32 = -4.0;
pub const ENEMY_SPAWN_X: f32 = 4.0;
pub const SPAWN_Y: f32 = 1.5;

/// Physics handles and presentation state of one fighter
#[derive(Debug)]
pub struct Fighter {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    hitbox: SensorHitbox,
    contacts: ContactTracker,
    animation: AnimationPlayer,
    /// Current hitbox window already connected
    hit_registered: bool,
    hits_landed: u32,
}

impl Fighter {
    fn spawn(world: &mut PhysicsWorld, x: f32, y: f32) -> Self {
        let body = world.add_rigid_body(presets::character_body(x, y));
        let collider = world.add_collider(
            presets::character_collider(CHARACTER_WIDTH, CHARACTER_HEIGHT),
            body,
        );
        let sensor = world.add_collider(
            presets::hitbox_sensor(HITBOX_WIDTH, HITBOX_HEIGHT, HITBOX_OFFSET_X, HITBOX_OFFSET_Y),
            body,
        );

        // Hitboxes start closed
        let hitbox = SensorHitbox::new(sensor, HITBOX_OFFSET_X, HITBOX_OFFSET_Y);
        hitbox.apply_to(world);

        Self {
            body,
            collider,
            hitbox,
            contacts: ContactTracker::new(),
            animation: AnimationPlayer::with_standard_animations(),
            hit_registered: false,
            hits_landed: 0,
        }
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn hitbox(&self) -> &SensorHitbox {
        &self.hitbox
    }

    pub fn animation(&self) -> &AnimationPlayer {
        &self.animation
    }

    pub fn hits_landed(&self) -> u32 {
        self.hits_landed
    }

    fn position(&self, world: &PhysicsWorld) -> Option<Vec2> {
        world
            .get_rigid_body(self.body)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
    }
}

/// The duel: physics world, both fighters and the enemy's brain
pub struct Arena {
    world: PhysicsWorld,
    player: PlayerController,
    player_fighter: Fighter,
    enemy: EnemyController,
    enemy_fighter: Fighter,
    enemy_brain: EnemyIntentSource<ChaCha8Rng>,
    /// Body the enemy tracks; never owned, may go away
    enemy_target: Option<RigidBodyHandle>,
}

impl Arena {
    /// Create the arena with the default spawn points
    pub fn new(tuning: &TuningFile, seed: u64) -> Self {
        Self::with_spawns(tuning, seed, PLAYER_SPAWN_X, ENEMY_SPAWN_X)
    }

    pub fn with_spawns(tuning: &TuningFile, seed: u64, player_x: f32, enemy_x: f32) -> Self {
        let mut world = PhysicsWorld::new();

        let floor = world.add_rigid_body(presets::platform_body(0.0, -FLOOR_HEIGHT / 2.0));
        world.add_collider(presets::platform_collider(FLOOR_WIDTH, FLOOR_HEIGHT), floor);

        let player_fighter = Fighter::spawn(&mut world, player_x, SPAWN_Y);
        let enemy_fighter = Fighter::spawn(&mut world, enemy_x, SPAWN_Y);
        let enemy_target = Some(player_fighter.body);

        log::info!(
            "Arena ready: player at {:.1}, enemy at {:.1}, seed {}",
            player_x,
            enemy_x,
            seed
        );

        Self {
            world,
            player: PlayerController::new(tuning.player, Some(HITBOX_OFFSET_X)),
            player_fighter,
            enemy: EnemyController::new(tuning.enemy, Some(HITBOX_OFFSET_X)),
            enemy_fighter,
            enemy_brain: EnemyIntentSource::seeded(seed),
            enemy_target,
        }
    }

    /// Per rendered frame: intent, timers and transitions for both fighters
    pub fn frame(&mut self, dt: f32, input: &InputState) {
        let mut source = PlayerIntentSource::new(input);
        {
            let fighter = &mut self.player_fighter;
            let mut body = RapierBody::new(&mut self.world, fighter.body);
            let mut out = Outputs::new(&mut fighter.animation, Some(&mut fighter.hitbox));
            self.player.update(dt, &mut source, &mut body, &mut out);
        }
        self.player_fighter.hitbox.apply_to(&mut self.world);

        let target = self
            .enemy_target
            .and_then(|handle| self.world.get_rigid_body(handle))
            .map(|body| Vec2::new(body.translation().x, body.translation().y));
        {
            let fighter = &mut self.enemy_fighter;
            let mut body = RapierBody::new(&mut self.world, fighter.body);
            let mut out = Outputs::new(&mut fighter.animation, Some(&mut fighter.hitbox));
            self.enemy
                .update(dt, &mut self.enemy_brain, target, &mut body, &mut out);
        }
        self.enemy_fighter.hitbox.apply_to(&mut self.world);

        self.player_fighter.animation.update(dt);
        self.enemy_fighter.animation.update(dt);
    }

    /// Per physics step: velocities, simulation, contacts and hits
    pub fn fixed_step(&mut self) {
        fixed_update(&mut self.world, &mut self.player_fighter, &mut self.player);
        fixed_update(&mut self.world, &mut self.enemy_fighter, &mut self.enemy);

        self.world.step();

        dispatch_contacts(&self.world, &mut self.player_fighter, &mut self.player);
        dispatch_contacts(&self.world, &mut self.enemy_fighter, &mut self.enemy);

        let enemy_collider = self.enemy_fighter.collider;
        let player_collider = self.player_fighter.collider;
        register_hit(
            &self.world,
            &mut self.player_fighter,
            &self.player,
            enemy_collider,
            "enemy",
        );
        register_hit(
            &self.world,
            &mut self.enemy_fighter,
            &self.enemy,
            player_collider,
            "player",
        );
    }

    /// Forget the enemy's target, as when the player leaves the arena
    pub fn clear_enemy_target(&mut self) {
        self.enemy_target = None;
    }

    /// Remove the player's body from the world; the enemy's handle goes stale
    pub fn despawn_player(&mut self) {
        self.world.remove_rigid_body(self.player_fighter.body);
        log::info!("Player despawned");
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn enemy(&self) -> &EnemyController {
        &self.enemy
    }

    pub fn player_fighter(&self) -> &Fighter {
        &self.player_fighter
    }

    pub fn enemy_fighter(&self) -> &Fighter {
        &self.enemy_fighter
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.player_fighter.position(&self.world)
    }

    pub fn enemy_position(&self) -> Option<Vec2> {
        self.enemy_fighter.position(&self.world)
    }

    pub fn velocity_of(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.world
            .get_rigid_body(handle)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
    }
}

fn fixed_update(
    world: &mut PhysicsWorld,
    fighter: &mut Fighter,
    controller: &mut dyn CharacterController,
) {
    let mut body = RapierBody::new(world, fighter.body);
    let mut out = Outputs::new(&mut fighter.animation, Some(&mut fighter.hitbox));
    controller.fixed_update(&mut body, &mut out);
}

/// Feed this step's contact changes into the controller's grounded state
fn dispatch_contacts(
    world: &PhysicsWorld,
    fighter: &mut Fighter,
    controller: &mut dyn CharacterController,
) {
    let contacts = world.contacts_with(fighter.collider);
    for event in fighter.contacts.update(&contacts) {
        match event {
            ContactEvent::Stay { normal_y, .. } => controller
                .core_mut()
                .on_contact_stay(normal_y, &mut fighter.animation),
            ContactEvent::Exit { .. } => controller
                .core_mut()
                .on_contact_exit(&mut fighter.animation),
        }
    }
}

/// Count at most one hit per hitbox window
fn register_hit(
    world: &PhysicsWorld,
    attacker: &mut Fighter,
    controller: &dyn CharacterController,
    defender: ColliderHandle,
    defender_name: &str,
) {
    if !controller.core().hitbox().is_active() {
        attacker.hit_registered = false;
        return;
    }

    if !attacker.hit_registered && world.is_intersecting(attacker.hitbox.collider(), defender) {
        attacker.hit_registered = true;
        attacker.hits_landed += 1;
        log::info!("Hit: {}", defender_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::game_loop::FIXED_TIMESTEP;
    use crate::engine::input::Action;

    fn run(arena: &mut Arena, frames: usize, input: &mut InputState) {
        for _ in 0..frames {
            arena.frame(FIXED_TIMESTEP, input);
            arena.fixed_step();
            input.end_frame();
        }
    }

    #[test]
    fn test_fighters_land_on_floor() {
        let mut arena = Arena::new(&TuningFile::default(), 1);
        arena.clear_enemy_target();
        let mut input = InputState::new();
        run(&mut arena, 120, &mut input);

        assert!(arena.player().core().is_grounded());
        assert!(arena.enemy().core().is_grounded());
        let player = arena.player_position().unwrap();
        assert!(player.y > 0.0 && player.y < 1.2, "player at {player}");
    }

    #[test]
    fn test_enemy_chases_player() {
        let mut arena = Arena::new(&TuningFile::default(), 1);
        let mut input = InputState::new();
        run(&mut arena, 60, &mut input);

        let enemy = arena.enemy_position().unwrap();
        assert!(enemy.x < ENEMY_SPAWN_X - 1.0, "enemy at {enemy}");
        let velocity = arena.velocity_of(arena.enemy_fighter().body()).unwrap();
        approx::assert_relative_eq!(velocity.x, -3.0, epsilon = 1e-3);
        assert!(arena.enemy_fighter().animation().is_flipped_horizontal());
    }

    #[test]
    fn test_enemy_without_target_stays_put() {
        let mut arena = Arena::new(&TuningFile::default(), 1);
        arena.clear_enemy_target();
        let mut input = InputState::new();
        run(&mut arena, 120, &mut input);

        let enemy = arena.enemy_position().unwrap();
        approx::assert_relative_eq!(enemy.x, ENEMY_SPAWN_X, epsilon = 1e-3);
    }

    #[test]
    fn test_stale_target_handle_is_ignored() {
        let mut arena = Arena::new(&TuningFile::default(), 1);
        let mut input = InputState::new();
        arena.despawn_player();
        run(&mut arena, 60, &mut input);

        assert_eq!(arena.player_position(), None);
        let enemy = arena.enemy_position().unwrap();
        approx::assert_relative_eq!(enemy.x, ENEMY_SPAWN_X, epsilon = 1e-3);
    }

    #[test]
    fn test_player_walks_and_faces() {
        let mut arena = Arena::new(&TuningFile::default(), 1);
        arena.clear_enemy_target();
        let mut input = InputState::new();
        run(&mut arena, 60, &mut input);

        input.press(Action::MoveLeft);
        run(&mut arena, 30, &mut input);
        let velocity = arena.velocity_of(arena.player_fighter().body()).unwrap();
        approx::assert_relative_eq!(velocity.x, -5.0, epsilon = 1e-3);
        assert!(arena.player_fighter().animation().is_flipped_horizontal());
        assert_eq!(arena.player_fighter().hitbox().offset_x(), -HITBOX_OFFSET_X);
        assert_eq!(arena.player_fighter().animation().current_animation(), "run");
    }

    #[test]
    fn test_player_jump_leaves_ground() {
        let mut arena = Arena::new(&TuningFile::default(), 1);
        arena.clear_enemy_target();
        let mut input = InputState::new();
        run(&mut arena, 90, &mut input);
        let rest_y = arena.player_position().unwrap().y;

        input.press(Action::Jump);
        run(&mut arena, 10, &mut input);
        assert!(!arena.player().core().is_grounded());
        assert!(arena.player_position().unwrap().y > rest_y + 0.3);

        input.release(Action::Jump);
        run(&mut arena, 120, &mut input);
        assert!(arena.player().core().is_grounded());
    }

    #[test]
    fn test_player_attack_hits_enemy_once_per_window() {
        let mut arena = Arena::with_spawns(&TuningFile::default(), 1, 0.0, 1.0);
        arena.clear_enemy_target();
        let mut input = InputState::new();
        run(&mut arena, 60, &mut input);

        input.press(Action::Attack);
        run(&mut arena, 1, &mut input);
        assert!(arena.player_fighter().hitbox().is_enabled());
        input.release(Action::Attack);
        run(&mut arena, 30, &mut input);

        assert_eq!(arena.player_fighter().hits_landed(), 1);
        assert!(!arena.player_fighter().hitbox().is_enabled());
    }

    #[test]
    fn test_attack_facing_away_misses() {
        let mut arena = Arena::with_spawns(&TuningFile::default(), 1, 0.0, 1.0);
        arena.clear_enemy_target();
        let mut input = InputState::new();
        run(&mut arena, 60, &mut input);

        // Turn left without walking far, then swing
        input.press(Action::MoveLeft);
        run(&mut arena, 1, &mut input);
        input.release(Action::MoveLeft);
        input.press(Action::Attack);
        run(&mut arena, 20, &mut input);

        assert_eq!(arena.player_fighter().hits_landed(), 0);
    }
}
