//! World orchestration.
//!
//! The [`World`] is the root owner of the whole live object graph: it holds
//! at most one system per concrete type and sequences their lifecycle,
//! `initialize` once, `tick` per frame, `shutdown` once at the end.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use tickmill_foundation::{Error, Result};

use crate::system::System;

/// A registered system together with its concrete type name.
struct Registered {
    name: &'static str,
    system: Box<dyn System>,
}

/// Top-level owner and sequencer of systems.
///
/// Systems are keyed by concrete type; registering a second system of the
/// same type fails. Lifecycle calls run in registration order, which keeps
/// startup failures and replays deterministic. The contract guarantees no
/// particular order between systems; implementations must not rely on it.
///
/// Dropping the world shuts it down, so every registered system sees its
/// [`shutdown`](System::shutdown) hook exactly once.
#[derive(Default)]
pub struct World {
    systems: HashMap<TypeId, Registered>,
    order: Vec<TypeId>,
    ticks: u64,
}

impl World {
    /// Creates a new empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            systems: HashMap::new(),
            order: Vec::new(),
            ticks: 0,
        }
    }

    /// Registers a system, transferring ownership to the world.
    ///
    /// Returns a mutable reference to the registered system.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SystemAlreadyRegistered`] if a system of type `S`
    /// is already registered; the existing system is left unmodified.
    pub fn add_system<S: System>(&mut self, system: S) -> Result<&mut S> {
        let key = TypeId::of::<S>();
        if self.systems.contains_key(&key) {
            return Err(Error::system_already_registered(type_name::<S>()));
        }

        self.order.push(key);
        let entry = self.systems.entry(key).or_insert(Registered {
            name: type_name::<S>(),
            system: Box::new(system),
        });

        Ok(entry
            .system
            .as_any_mut()
            .downcast_mut::<S>()
            .expect("registry slot holds the system just inserted"))
    }

    /// Returns the registered system of type `S`, if any.
    #[must_use]
    pub fn get_system<S: System>(&self) -> Option<&S> {
        self.systems
            .get(&TypeId::of::<S>())
            .and_then(|entry| entry.system.as_any().downcast_ref::<S>())
    }

    /// Returns the registered system of type `S` mutably, if any.
    #[must_use]
    pub fn get_system_mut<S: System>(&mut self) -> Option<&mut S> {
        self.systems
            .get_mut(&TypeId::of::<S>())
            .and_then(|entry| entry.system.as_any_mut().downcast_mut::<S>())
    }

    /// Checks whether a system of type `S` is registered.
    #[must_use]
    pub fn has_system<S: System>(&self) -> bool {
        self.systems.contains_key(&TypeId::of::<S>())
    }

    /// Removes the system of type `S`, invoking its `shutdown` hook before
    /// dropping it together with all of its entities.
    ///
    /// Returns whether it was registered. Removing an absent system is not
    /// an error.
    pub fn remove_system<S: System>(&mut self) -> bool {
        let key = TypeId::of::<S>();
        let Some(mut entry) = self.systems.remove(&key) else {
            return false;
        };

        self.order.retain(|k| *k != key);
        entry.system.shutdown();
        true
    }

    /// Initializes every registered system, in registration order.
    ///
    /// Stops at the first system whose `initialize` hook reports failure.
    /// Systems initialized before the failure are left in place and are
    /// not rolled back; the host decides whether to abort or call
    /// [`shutdown`](World::shutdown), which is safe in any state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SystemInitFailed`] naming the first system that
    /// failed to initialize.
    pub fn initialize(&mut self) -> Result<()> {
        for key in &self.order {
            if let Some(entry) = self.systems.get_mut(key) {
                if !entry.system.initialize() {
                    return Err(Error::system_init_failed(entry.name));
                }
            }
        }
        Ok(())
    }

    /// Advances every registered system by `delta` seconds.
    ///
    /// Systems tick unconditionally, in registration order. Ticking a
    /// world with no systems is a no-op.
    pub fn tick(&mut self, delta: f32) {
        for key in &self.order {
            if let Some(entry) = self.systems.get_mut(key) {
                entry.system.tick(delta);
            }
        }
        self.ticks += 1;
    }

    /// Returns the number of ticks this world has executed.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Shuts down every registered system, in registration order, then
    /// clears the registry, dropping all systems and their entities.
    ///
    /// Idempotent: a second call sees an empty registry and does nothing.
    pub fn shutdown(&mut self) {
        for key in &self.order {
            if let Some(entry) = self.systems.get_mut(key) {
                entry.system.shutdown();
            }
        }
        self.order.clear();
        self.systems.clear();
    }

    /// Returns the number of registered systems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns true if no systems are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl Drop for World {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .order
            .iter()
            .filter_map(|key| self.systems.get(key).map(|entry| entry.name))
            .collect();
        f.debug_struct("World")
            .field("systems", &names)
            .field("ticks", &self.ticks)
            .finish()
    }
}
