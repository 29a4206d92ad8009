//! Entity trait: records identified by id rather than by value.

use std::collections::HashSet;

pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// First entity in `items` with the given id.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}

/// The first id that appears more than once, if any.
pub fn first_duplicate_id<E: Entity>(items: &[E]) -> Option<&E::Id> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(Entity::id).find(|id| !seen.insert(*id))
}
