// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Handle registry: owns the collections of one drawable kind and hands out
//! opaque ids for them.
//!
//! Ids grow monotonically from a u64 counter that never wraps, so a
//! destroyed id stays invalid. Sprite and text ids are different types
//! (`CollectionId<SpriteKind>` vs `CollectionId<TextKind>`), which keeps the
//! two namespaces apart at compile time.

use crate::{
    config::SpriteOrder,
    error::{ProviderError, ProviderResult},
    render::{
        collection::Collection,
        info::{DrawableKind, SpriteKind, TextKind},
    },
};
use log::debug;
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Opaque id of a live collection of kind `K`
pub struct CollectionId<K> {
    id: u64,
    _kind: PhantomData<fn() -> K>,
}

pub type SpriteCollectionId = CollectionId<SpriteKind>;
pub type TextCollectionId = CollectionId<TextKind>;

impl<K> CollectionId<K> {
    fn new(id: u64) -> Self {
        Self {
            id,
            _kind: PhantomData,
        }
    }

    pub fn raw(&self) -> u64 {
        self.id
    }
}

// manual impls, derive would require K: Clone, K: Eq...
impl<K> Clone for CollectionId<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for CollectionId<K> {}

impl<K> PartialEq for CollectionId<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K> Eq for CollectionId<K> {}

impl<K> PartialOrd for CollectionId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for CollectionId<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<K> Hash for CollectionId<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<K> fmt::Debug for CollectionId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CollectionId({})", self.id)
    }
}

pub struct HandleRegistry<K: DrawableKind> {
    collections: BTreeMap<u64, Collection<K>>,
    next_id: u64,
    // z order handed to new sprite collections
    order: SpriteOrder,
}

impl<K: DrawableKind> Default for HandleRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleRegistry<SpriteKind> {
    /// Sprite registry whose collections draw in the given z order
    pub fn with_order(order: SpriteOrder) -> Self {
        Self {
            order,
            ..Self::new()
        }
    }
}

impl<K: DrawableKind> HandleRegistry<K> {
    pub fn new() -> Self {
        Self {
            collections: BTreeMap::new(),
            next_id: 1,
            order: SpriteOrder::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn contains(&self, id: CollectionId<K>) -> bool {
        self.collections.contains_key(&id.id)
    }

    /// Register an empty collection and return its id
    pub fn create(&mut self) -> ProviderResult<CollectionId<K>> {
        let id = CollectionId::new(self.alloc_id()?);
        self.validate(id, false)?;
        let collection = self.new_collection();
        self.collections.insert(id.id, collection);
        debug!("registry create {:?}", id);
        Ok(id)
    }

    // next id not currently registered, the counter only moves forward
    fn alloc_id(&mut self) -> ProviderResult<u64> {
        loop {
            let id = self.next_id;
            self.next_id = id.checked_add(1).ok_or(ProviderError::HandlesExhausted)?;
            if !self.collections.contains_key(&id) {
                return Ok(id);
            }
        }
    }

    fn new_collection(&self) -> Collection<K> {
        let mut c = Collection::new();
        c.set_order(self.order);
        c
    }

    pub fn destroy(&mut self, id: CollectionId<K>) -> ProviderResult<()> {
        self.validate(id, true)?;
        self.collections.remove(&id.id);
        debug!("registry destroy {:?}", id);
        Ok(())
    }

    /// Check `id` against the registry.
    ///
    /// With `expect_present` an unknown id is `InvalidHandle`; without it a
    /// known id is `DuplicateHandle`.
    pub fn validate(&self, id: CollectionId<K>, expect_present: bool) -> ProviderResult<()> {
        match (self.contains(id), expect_present) {
            (false, true) => Err(ProviderError::InvalidHandle(id.id)),
            (true, false) => Err(ProviderError::DuplicateHandle(id.id)),
            _ => Ok(()),
        }
    }

    pub fn get(&self, id: CollectionId<K>) -> ProviderResult<&Collection<K>> {
        self.collections
            .get(&id.id)
            .ok_or(ProviderError::InvalidHandle(id.id))
    }

    pub fn get_mut(&mut self, id: CollectionId<K>) -> ProviderResult<&mut Collection<K>> {
        self.collections
            .get_mut(&id.id)
            .ok_or(ProviderError::InvalidHandle(id.id))
    }
}
