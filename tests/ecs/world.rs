//! Integration tests for world orchestration.
//!
//! Tests system registration, partial initialization failure, tick
//! broadcast, and shutdown sequencing.

use tickmill_ecs::{System, World};
use tickmill_foundation::Error;

use crate::fixtures::{
    Health, HealthSystem, LifecycleProbe, MovementSystem, Position, TimerSystem, Velocity,
};

// =============================================================================
// Registration
// =============================================================================

#[test]
fn one_system_per_concrete_type() {
    let mut world = World::new();
    world.add_system(MovementSystem::default()).unwrap();

    let result = world.add_system(MovementSystem::default());
    assert!(matches!(result, Err(Error::SystemAlreadyRegistered { .. })));
    assert_eq!(world.len(), 1);
}

#[test]
fn systems_of_different_types_coexist() {
    let mut world = World::new();
    world.add_system(MovementSystem::default()).unwrap();
    world.add_system(HealthSystem::default()).unwrap();
    world.add_system(TimerSystem::default()).unwrap();

    assert_eq!(world.len(), 3);
    assert!(world.has_system::<MovementSystem>());
    assert!(world.has_system::<HealthSystem>());
    assert!(world.has_system::<TimerSystem>());
}

#[test]
fn get_system_returns_the_concrete_type() {
    let mut world = World::new();
    world.add_system(HealthSystem::with_regen(3.0)).unwrap();

    let system = world.get_system::<HealthSystem>().unwrap();
    assert_eq!(system.regen_per_second, 3.0);
    assert!(world.get_system::<MovementSystem>().is_none());
}

// =============================================================================
// Initialization (Scenario C)
// =============================================================================

#[test]
fn failed_initialize_short_circuits_without_rollback() {
    let mut world = World::new();

    let ok = LifecycleProbe::new(true);
    let ok_inits = ok.init_calls.clone();
    world.add_system(ok).unwrap();

    let failing = FailingProbe::new();
    let failing_inits = failing.probe.init_calls.clone();
    world.add_system(failing).unwrap();

    let result = world.initialize();
    assert!(matches!(result, Err(Error::SystemInitFailed { .. })));

    // The first system initialized and stays registered; no rollback.
    assert_eq!(ok_inits.get(), 1);
    assert_eq!(failing_inits.get(), 1);
    assert!(world.has_system::<LifecycleProbe>());
    assert!(world.has_system::<FailingProbe>());
}

#[test]
fn successful_initialize_reaches_every_system() {
    let mut world = World::new();
    let probe = LifecycleProbe::new(true);
    let inits = probe.init_calls.clone();
    world.add_system(probe).unwrap();
    world.add_system(MovementSystem::default()).unwrap();

    world.initialize().unwrap();
    assert_eq!(inits.get(), 1);
}

// =============================================================================
// Tick Broadcast
// =============================================================================

#[test]
fn tick_with_zero_systems_is_a_noop() {
    let mut world = World::new();
    world.tick(1.0);
    world.tick(0.0);
    assert_eq!(world.ticks(), 2);
}

#[test]
fn tick_drives_every_registered_system() {
    let mut world = World::new();
    world.add_system(MovementSystem::default()).unwrap();
    world.add_system(HealthSystem::with_regen(10.0)).unwrap();

    {
        let movement = world.get_system_mut::<MovementSystem>().unwrap();
        let entity = movement.entities_mut().spawn();
        entity.attach(Position { x: 0.0, y: 0.0 }).unwrap();
        entity.attach(Velocity { dx: 1.0, dy: 0.0 }).unwrap();
    }
    {
        let health = world.get_system_mut::<HealthSystem>().unwrap();
        health
            .entities_mut()
            .spawn()
            .attach(Health {
                current: 50,
                max: 100,
            })
            .unwrap();
    }

    world.initialize().unwrap();
    world.tick(1.0);

    let movement = world.get_system::<MovementSystem>().unwrap();
    let moved = movement
        .entities()
        .iter()
        .next()
        .and_then(|e| e.get::<Position>())
        .copied()
        .unwrap();
    assert_eq!(moved, Position { x: 1.0, y: 0.0 });

    let health = world.get_system::<HealthSystem>().unwrap();
    let current = health
        .entities()
        .iter()
        .next()
        .and_then(|e| e.get::<Health>())
        .map(|h| h.current)
        .unwrap();
    assert_eq!(current, 60);
}

// =============================================================================
// Shutdown (Scenario E)
// =============================================================================

#[test]
fn remove_system_shuts_it_down_exactly_once() {
    let mut world = World::new();
    let probe = LifecycleProbe::new(true);
    let shutdowns = probe.shutdown_calls.clone();
    world.add_system(probe).unwrap();

    assert!(world.remove_system::<LifecycleProbe>());

    assert_eq!(shutdowns.get(), 1);
    assert!(!world.has_system::<LifecycleProbe>());
    assert!(world.get_system::<LifecycleProbe>().is_none());
    assert!(!world.remove_system::<LifecycleProbe>());
}

#[test]
fn world_shutdown_is_idempotent() {
    let mut world = World::new();
    let probe = LifecycleProbe::new(true);
    let shutdowns = probe.shutdown_calls.clone();
    world.add_system(probe).unwrap();

    world.shutdown();
    world.shutdown();

    assert_eq!(shutdowns.get(), 1);
    assert!(world.is_empty());
}

#[test]
fn dropping_the_world_shuts_systems_down() {
    let probe = LifecycleProbe::new(true);
    let shutdowns = probe.shutdown_calls.clone();

    {
        let mut world = World::new();
        world.add_system(probe).unwrap();
    }

    assert_eq!(shutdowns.get(), 1);
}

#[test]
fn shutdown_after_failed_initialize_is_safe() {
    let mut world = World::new();
    world.add_system(FailingProbe::new()).unwrap();

    assert!(world.initialize().is_err());
    world.shutdown();
    assert!(world.is_empty());
}

// =============================================================================
// Helpers
// =============================================================================

/// A distinct concrete type whose `initialize` fails, wrapping a probe so
/// call counts stay observable.
struct FailingProbe {
    probe: LifecycleProbe,
}

impl FailingProbe {
    fn new() -> Self {
        Self {
            probe: LifecycleProbe::new(false),
        }
    }
}

impl System for FailingProbe {
    fn entities(&self) -> &tickmill_ecs::EntityStore {
        self.probe.entities()
    }

    fn entities_mut(&mut self) -> &mut tickmill_ecs::EntityStore {
        self.probe.entities_mut()
    }

    fn initialize(&mut self) -> bool {
        self.probe.initialize()
    }

    fn tick(&mut self, delta: f32) {
        self.probe.tick(delta);
    }

    fn shutdown(&mut self) {
        self.probe.shutdown();
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
