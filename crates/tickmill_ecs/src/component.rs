//! The component contract.
//!
//! Components are plain data payloads keyed by their concrete type. The
//! trait is a marker: opting a type in is a deliberate one-line impl, and
//! storage stays type-erased (`Box<dyn Any>` keyed by `TypeId`) inside
//! [`Entity`](crate::Entity).

/// Marker trait for data payloads attachable to an entity.
///
/// An entity holds at most one component of each concrete type. Components
/// carry no behavior of their own; systems read and mutate them during
/// [`tick`](crate::System::tick).
///
/// A component that refers to another entity stores an
/// `Option<EntityId>` and re-resolves it through the owning store at use,
/// since the referenced entity may have been destroyed since.
///
/// # Examples
///
/// ```
/// use tickmill_ecs::Component;
///
/// struct Position {
///     x: f32,
///     y: f32,
/// }
///
/// impl Component for Position {}
/// ```
pub trait Component: 'static {}
