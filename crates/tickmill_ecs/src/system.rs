//! Systems and per-system entity ownership.
//!
//! A system is the unit of behavior: it owns a private [`EntityStore`] and
//! advances its entities once per world tick. The [`System`] trait is the
//! contract concrete behaviors implement; [`EntityStore`] does the identity
//! allocation and lookup bookkeeping so implementations only hold one as a
//! field and hand out access through the trait's accessors.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use tickmill_foundation::EntityId;

use crate::entity::Entity;

/// Owns a system's entities and allocates their identifiers.
///
/// Identifiers start at 1 and increase monotonically; an identifier is
/// never reused after [`destroy`](EntityStore::destroy), even within long
/// runs of spawn/destroy churn. Lookups by identifier therefore either
/// find the original entity or nothing.
///
/// Iteration order over entities is unspecified. Callers that need a
/// deterministic order should collect [`ids`](EntityStore::ids) and sort.
pub struct EntityStore {
    next_id: u64,
    entities: HashMap<EntityId, Entity>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entities: HashMap::new(),
        }
    }

    /// Spawns a new entity, returning a mutable reference to it.
    ///
    /// The reference is valid until the entity is destroyed or the store
    /// is dropped.
    pub fn spawn(&mut self) -> &mut Entity {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;

        self.entities.entry(id).or_insert_with(|| Entity::new(id))
    }

    /// Returns the entity with the given identifier, if it is live.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Returns the entity with the given identifier mutably, if it is live.
    #[must_use]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Checks whether an entity with the given identifier is live.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Destroys the entity with the given identifier, dropping all of its
    /// components with it.
    ///
    /// Returns whether it existed. Destroying an absent identifier is not
    /// an error. The identifier is not reused.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        self.entities.remove(&id).is_some()
    }

    /// Iterates over all live entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterates over all live entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    /// Iterates over the identifiers of all live entities.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if there are no live entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("next_id", &self.next_id)
            .field("entities", &self.entities.len())
            .finish()
    }
}

/// The per-tick behavior contract.
///
/// A concrete system owns an [`EntityStore`] by composition and exposes it
/// through [`entities`](System::entities) / [`entities_mut`](System::entities_mut).
/// The world drives the lifecycle: [`initialize`](System::initialize) once
/// before the first tick, [`tick`](System::tick) once per world tick, and
/// [`shutdown`](System::shutdown) exactly once on removal or world
/// shutdown. Ticking before a successful initialize or after shutdown is a
/// caller error the runtime does not guard against; the world's
/// orchestration order is the guard.
///
/// Systems must not assume any tick order relative to other systems, and
/// operate on their own entities only. Reaching into a foreign system's
/// entities requires an explicitly passed reference and an absence check
/// on every lookup.
///
/// # Examples
///
/// ```
/// use tickmill_ecs::{EntityStore, System};
///
/// #[derive(Default)]
/// struct Ager {
///     entities: EntityStore,
///     elapsed: f32,
/// }
///
/// impl System for Ager {
///     fn entities(&self) -> &EntityStore {
///         &self.entities
///     }
///
///     fn entities_mut(&mut self) -> &mut EntityStore {
///         &mut self.entities
///     }
///
///     fn tick(&mut self, delta: f32) {
///         self.elapsed += delta;
///     }
///
///     fn as_any(&self) -> &dyn std::any::Any {
///         self
///     }
///
///     fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
///         self
///     }
/// }
/// ```
pub trait System: Any {
    /// Returns the system's owned entity set.
    fn entities(&self) -> &EntityStore;

    /// Returns the system's owned entity set mutably.
    fn entities_mut(&mut self) -> &mut EntityStore;

    /// One-time setup hook, called before the first tick.
    ///
    /// Returns whether setup succeeded. The default succeeds trivially.
    fn initialize(&mut self) -> bool {
        true
    }

    /// Advances this system by `delta` seconds of simulation time.
    ///
    /// `delta` is the caller-measured elapsed time since the previous tick
    /// and is non-negative. Implementations may mutate, spawn, and destroy
    /// their own entities here.
    fn tick(&mut self, delta: f32);

    /// One-time teardown hook.
    ///
    /// The default is a no-op. Implementations must tolerate being called
    /// regardless of whether `initialize` ran or succeeded.
    fn shutdown(&mut self) {}

    /// Downcast hook for type-keyed registry lookups.
    ///
    /// Implementations return `self`.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast hook for type-keyed registry lookups.
    ///
    /// Implementations return `self`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
