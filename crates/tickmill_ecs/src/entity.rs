//! Entities and their type-keyed component slots.
//!
//! An [`Entity`] maps each concrete component type to at most one attached
//! payload. Attach and detach are the only mutators of the component set;
//! nothing is ever silently evicted.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use tickmill_foundation::{EntityId, Error, Result};

use crate::component::Component;

/// An identity plus an owned set of at most one component per concrete type.
///
/// Entities are created by [`EntityStore::spawn`](crate::EntityStore::spawn)
/// and owned by exactly one store for their whole lifetime. Destroying the
/// entity drops all of its components with it.
pub struct Entity {
    id: EntityId,
    components: HashMap<TypeId, Box<dyn Any>>,
}

impl Entity {
    /// Only the owning store constructs entities.
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            components: HashMap::new(),
        }
    }

    /// Returns this entity's identifier.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Attaches a component, returning a mutable reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentAlreadyAttached`] if a component of type
    /// `C` is already attached; the existing component is left unmodified.
    pub fn attach<C: Component>(&mut self, component: C) -> Result<&mut C> {
        match self.components.entry(TypeId::of::<C>()) {
            Entry::Occupied(_) => Err(Error::component_already_attached(
                self.id,
                type_name::<C>(),
            )),
            Entry::Vacant(slot) => {
                let stored = slot.insert(Box::new(component));
                Ok(stored
                    .downcast_mut::<C>()
                    .expect("slot holds the component just inserted"))
            }
        }
    }

    /// Returns the attached component of type `C`, if any.
    #[must_use]
    pub fn get<C: Component>(&self) -> Option<&C> {
        self.components
            .get(&TypeId::of::<C>())
            .and_then(|slot| slot.downcast_ref::<C>())
    }

    /// Returns the attached component of type `C` mutably, if any.
    #[must_use]
    pub fn get_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.components
            .get_mut(&TypeId::of::<C>())
            .and_then(|slot| slot.downcast_mut::<C>())
    }

    /// Checks whether a component of type `C` is attached.
    #[must_use]
    pub fn has<C: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<C>())
    }

    /// Detaches and drops the component of type `C`.
    ///
    /// Returns whether one was attached. Detaching an absent component is
    /// not an error.
    pub fn detach<C: Component>(&mut self) -> bool {
        self.components.remove(&TypeId::of::<C>()).is_some()
    }

    /// Returns the number of attached components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Component payloads are type-erased; show the count instead.
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("components", &self.components.len())
            .finish()
    }
}
