use core::fmt::Debug;
use core::hash::Hash;

/// An identity-bearing record persisted in one storage collection.
pub trait Entity {
    /// Name of the collection the entity is stored in.
    const COLLECTION: &'static str;

    type Id: Copy + Eq + Hash + Debug;

    /// `None` until the persistence layer has inserted the entity.
    fn id(&self) -> Option<Self::Id>;
}

/// A field pointing at another entity, either by id or fully loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<T: Entity> {
    Id(T::Id),
    Loaded(T),
}

impl<T: Entity> Reference<T> {
    pub fn loaded(entity: T) -> Self {
        Reference::Loaded(entity)
    }

    /// The referenced identifier, whichever variant is held.
    /// Only a loaded entity that was never persisted yields `None`.
    pub fn id(&self) -> Option<T::Id> {
        match self {
            Reference::Id(id) => Some(*id),
            Reference::Loaded(entity) => entity.id(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Reference::Loaded(_))
    }

    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Reference::Loaded(entity) => Some(entity),
            Reference::Id(_) => None,
        }
    }
}

impl<T: Entity> From<T> for Reference<T> {
    fn from(entity: T) -> Self {
        Reference::Loaded(entity)
    }
}
