//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems once per frame, and produces `GameStateSnapshot`s.
//! Completely headless (no rendering or physics host), enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tinymap_core::commands::PlayerCommand;
use tinymap_core::config::GameConfig;
use tinymap_core::constants::DT;
use tinymap_core::enums::{GameOverDestination, GamePhase};
use tinymap_core::events::GameEvent;
use tinymap_core::state::GameStateSnapshot;
use tinymap_core::types::{EntityId, SimTime};

use tinymap_vision::step_resolves;

use crate::registry::EntityIndex;
use crate::scheduler::{DeferredAction, Scheduler, TaskId};
use crate::session::{EmitterState, ScoreState, SpawnTimer};
use crate::systems;
use crate::systems::combat::{CombatRules, Contact};
use crate::systems::contacts::ContactTracker;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    index: EntityIndex,
    time: SimTime,
    phase: GamePhase,
    config: GameConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    reported_contacts: Vec<(EntityId, EntityId)>,
    contact_tracker: ContactTracker,
    despawn_buffer: Vec<(Entity, EntityId)>,
    events: Vec<GameEvent>,

    // --- Per-match state ---
    score: ScoreState,
    emitter: EmitterState,
    spawn_timer: SpawnTimer,
    player_id: Option<EntityId>,

    // --- Deferred work ---
    scheduler: Scheduler,
    /// Bumped whenever a match starts or is torn down.
    session: u64,
    game_over_task: Option<TaskId>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. Starts on the menu.
    pub fn new(config: SimConfig) -> Self {
        let game = config.game.sanitized();
        if !step_resolves(game.cone_step(), game.enemy_radius, game.cone_range) {
            log::warn!(
                "cone step {}deg can miss enemies of radius {} at range {}",
                game.cone_step_deg,
                game.enemy_radius,
                game.cone_range
            );
        }

        Self {
            world: World::new(),
            index: EntityIndex::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            reported_contacts: Vec::new(),
            contact_tracker: ContactTracker::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
            emitter: EmitterState::default(),
            spawn_timer: SpawnTimer::new(game.spawn_interval_ticks()),
            player_id: None,
            scheduler: Scheduler::new(),
            session: 0,
            game_over_task: None,
            config: game,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Report a contact from an external physics host. Resolved on the next
    /// running frame, before the built-in detector's contacts. Unknown or
    /// destroyed ids are ignored, as are reports made outside a match.
    pub fn report_contact(&mut self, a: EntityId, b: EntityId) {
        if !matches!(self.phase, GamePhase::Active | GamePhase::Paused) {
            log::debug!("dropping contact ({a:?}, {b:?}) reported in {:?}", self.phase);
            return;
        }
        self.reported_contacts.push((a, b));
    }

    /// Host-reported contacts waiting for the next running frame (for tests).
    #[cfg(test)]
    pub fn pending_contacts(&self) -> usize {
        self.reported_contacts.len()
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Active => {
                self.advance_deferred();
                if self.phase == GamePhase::Active {
                    self.run_systems();
                }
                self.time.advance();
            }
            GamePhase::GameOver => {
                self.advance_deferred();
                self.time.advance();
            }
            GamePhase::MainMenu | GamePhase::Paused => {}
        }

        let game_over_remaining_secs = self
            .game_over_task
            .and_then(|id| self.scheduler.remaining_ticks(id))
            .map(|ticks| ticks as f64 * DT);
        let events = std::mem::take(&mut self.events);

        systems::snapshot::build_snapshot(
            &self.world,
            &SnapshotContext {
                time: &self.time,
                phase: self.phase,
                score: &self.score,
                emitter: &self.emitter,
                config: &self.config,
                game_over_remaining_secs,
            },
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Enemies destroyed this match.
    pub fn score(&self) -> u32 {
        self.score.enemies_destroyed
    }

    /// Live-projectile counter.
    pub fn projectile_count(&self) -> u32 {
        self.emitter.live_projectiles
    }

    /// Current value of the emitter cooldown counter.
    pub fn cooldown_counter(&self) -> u32 {
        self.emitter.cooldown.counter
    }

    /// Enemies spawned by the spawner this match.
    pub fn enemies_spawned(&self) -> u32 {
        self.spawn_timer.spawned
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Look up the hecs entity behind an id.
    pub fn entity(&self, id: EntityId) -> Option<Entity> {
        self.index.get(id)
    }

    /// Spawn an enemy at a fixed position (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: tinymap_core::types::Position) -> EntityId {
        world_setup::spawn_enemy(&mut self.world, &mut self.index, &self.config, position)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_match();
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::MainMenu {
                    self.enter_menu();
                }
            }
            PlayerCommand::Pause => self.set_paused(true),
            PlayerCommand::Resume => self.set_paused(false),
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Active => self.set_paused(true),
                GamePhase::Paused => self.set_paused(false),
                GamePhase::MainMenu | GamePhase::GameOver => {}
            },
            PlayerCommand::Move { dx, dy } => {
                if self.phase == GamePhase::Active {
                    systems::input::apply_move(&mut self.world, dx, dy, &self.config);
                }
            }
            PlayerCommand::Aim { angle } => {
                if self.phase != GamePhase::Active {
                    return;
                }
                if let Some((origin, angle)) = systems::input::apply_aim(&mut self.world, angle) {
                    systems::emitter::try_emit(
                        &mut self.world,
                        &mut self.index,
                        &mut self.emitter,
                        &mut self.score,
                        &self.config,
                        origin,
                        angle,
                        &mut self.events,
                    );
                }
            }
        }
    }

    fn set_paused(&mut self, paused: bool) {
        match (self.phase, paused) {
            (GamePhase::Active, true) => {
                self.phase = GamePhase::Paused;
                log::info!("paused at tick {}", self.time.tick);
                self.events.push(GameEvent::Paused);
            }
            (GamePhase::Paused, false) => {
                self.phase = GamePhase::Active;
                log::info!("resumed at tick {}", self.time.tick);
                self.events.push(GameEvent::Resumed);
            }
            _ => {}
        }
    }

    /// Drop every entity and invalidate outstanding deferred tasks.
    fn teardown(&mut self) {
        self.world.clear();
        self.index.clear();
        self.contact_tracker.clear();
        self.reported_contacts.clear();
        self.scheduler.cancel_all();
        self.emitter = EmitterState::default();
        self.game_over_task = None;
        self.player_id = None;
        self.session += 1;
    }

    /// Begin a fresh match: empty world, new player, counters reset.
    fn start_match(&mut self) {
        self.teardown();
        self.score = ScoreState::default();
        self.spawn_timer = SpawnTimer::new(self.config.spawn_interval_ticks());
        self.time = SimTime::default();
        self.player_id = Some(world_setup::spawn_player(
            &mut self.world,
            &mut self.index,
            &self.config,
        ));
        self.phase = GamePhase::Active;

        log::info!("match {} started", self.session);
        self.events.push(GameEvent::MatchStarted);
    }

    fn enter_menu(&mut self) {
        self.teardown();
        self.phase = GamePhase::MainMenu;
        log::info!("returned to menu (final score {})", self.score.enemies_destroyed);
        self.events.push(GameEvent::ReturnedToMenu);
    }

    fn on_player_hit(&mut self) {
        self.phase = GamePhase::GameOver;
        let delay_ticks = self.config.game_over_delay_ticks();
        self.game_over_task = Some(self.scheduler.schedule(
            delay_ticks,
            DeferredAction::LeaveMatch,
            self.session,
        ));

        log::info!(
            "game over at tick {} with score {}",
            self.time.tick,
            self.score.enemies_destroyed
        );
        self.events.push(GameEvent::GameOver {
            score: self.score.enemies_destroyed,
            delay_secs: self.config.game_over_delay_secs,
        });
    }

    /// Fire any deferred tasks that came due this tick.
    fn advance_deferred(&mut self) {
        for action in self.scheduler.advance(self.session) {
            match action {
                DeferredAction::LeaveMatch => {
                    self.game_over_task = None;
                    match self.config.game_over_destination {
                        GameOverDestination::MainMenu => self.enter_menu(),
                        GameOverDestination::Restart => self.start_match(),
                    }
                }
            }
        }
    }

    /// Resolve host-reported contact ids to live entities.
    fn take_reported_contacts(&mut self) -> Vec<Contact> {
        let index = &self.index;
        self.reported_contacts
            .drain(..)
            .filter_map(|(a, b)| match (index.get(a), index.get(b)) {
                (Some(a), Some(b)) => Some(Contact { a, b }),
                _ => {
                    log::debug!("ignoring contact with unknown entity ({a:?}, {b:?})");
                    None
                }
            })
            .collect()
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawner
        systems::spawner::run(
            &mut self.world,
            &mut self.index,
            &mut self.rng,
            &mut self.spawn_timer,
            &self.config,
            &mut self.events,
        );
        // 2. Keep the player on the field
        systems::input::clamp_player(&mut self.world, &self.config.play_field);
        // 3. Pursuit (pre-frame player position)
        systems::pursuit::run(&mut self.world, self.config.enemy_speed);
        // 4. Projectile motion and expiry
        systems::projectiles::run(
            &mut self.world,
            &mut self.emitter,
            &self.config,
            &mut self.events,
        );
        // 5. Contacts: host-reported first, then detected
        let mut contacts = self.take_reported_contacts();
        contacts.extend(systems::contacts::detect(
            &self.world,
            &mut self.contact_tracker,
        ));
        // 6. Combat
        let rules = CombatRules {
            ordering: self.config.contact_ordering,
            counter_kill: self.config.projectiles_enabled,
        };
        let player_hit = systems::combat::resolve(
            &self.world,
            &contacts,
            rules,
            &mut self.score,
            &mut self.emitter,
            &mut self.events,
        );
        if player_hit.is_some() {
            self.on_player_hit();
        }
        // 7. Visibility (reset, then sweep)
        let lit = systems::visibility::run(&mut self.world, &self.config);
        // 8. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.index, &mut self.despawn_buffer);

        log::trace!(
            "tick {}: {} entities, {} lit, {} contacts, {} projectiles",
            self.time.tick,
            self.world.len(),
            lit,
            contacts.len(),
            self.emitter.live_projectiles
        );
    }
}
