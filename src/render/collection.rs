// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! collection.rs implements a Collection that holds named drawables of one kind.
//! Drawables are stored in a vector in insertion order and looked up by name
//! through a hashmap of offsets.
//! draw submits them in the order given by their render weight (z_depth for
//! sprites), equal weights keep insertion order.

use crate::{
    config::SpriteOrder,
    error::{ProviderError, ProviderResult},
    render::{
        device::{device_error, Device},
        info::{DrawableKind, SpriteKind, TextKind},
    },
};
use log::debug;
use std::{cmp::Reverse, collections::HashMap};

pub struct Collection<K: DrawableKind> {
    items: Vec<(String, K::Encoded)>,
    tag_index: HashMap<String, usize>,

    // item index, render weight... empty means stale
    render_index: Vec<(usize, i32)>,

    // only sprite collections can change it, text weights are all equal
    order: SpriteOrder,
}

pub type SpriteCollection = Collection<SpriteKind>;
pub type TextCollection = Collection<TextKind>;

impl<K: DrawableKind> Default for Collection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: DrawableKind> Collection<K> {
    pub fn new() -> Self {
        Self {
            items: vec![],
            tag_index: HashMap::new(),
            render_index: vec![],
            order: SpriteOrder::default(),
        }
    }

    pub(super) fn set_order(&mut self, order: SpriteOrder) {
        self.order = order;
        self.render_index.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tag_index.contains_key(name)
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(n, _)| n.as_str())
    }

    pub fn add(&mut self, name: &str, info: &K::Info) -> ProviderResult<()> {
        if self.contains(name) {
            return Err(ProviderError::DuplicateName(name.to_string()));
        }
        self.items.push((name.to_string(), K::construct(info)));
        self.tag_index.insert(name.to_string(), self.items.len() - 1);
        self.render_index.clear();
        debug!("collection add '{}' ({} items)", name, self.items.len());
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> ProviderResult<()> {
        let idx = self.index_of(name)?;
        self.items.remove(idx);
        self.tag_index.remove(name);
        // later items shifted down by one
        for v in self.tag_index.values_mut() {
            if *v > idx {
                *v -= 1;
            }
        }
        self.render_index.clear();
        debug!("collection remove '{}' ({} items)", name, self.items.len());
        Ok(())
    }

    /// Replace the whole drawable, the entry keeps its insertion slot
    pub fn set(&mut self, name: &str, info: &K::Info) -> ProviderResult<()> {
        let idx = self.index_of(name)?;
        self.items[idx].1 = K::construct(info);
        self.render_index.clear();
        Ok(())
    }

    pub fn get(&self, name: &str) -> ProviderResult<K::Info> {
        let idx = self.index_of(name)?;
        Ok(K::extract(&self.items[idx].1))
    }

    pub fn update_render_index(&mut self) {
        if self.render_index.is_empty() {
            for (i, (_, item)) in self.items.iter().enumerate() {
                self.render_index.push((i, K::render_weight(item)));
            }
            // sort_by_key is stable, ties stay in insertion order
            match self.order {
                SpriteOrder::BackToFront => self.render_index.sort_by_key(|d| d.1),
                SpriteOrder::FrontToBack => self.render_index.sort_by_key(|d| Reverse(d.1)),
            }
        }
    }

    /// Names in the order draw submits them
    pub fn draw_order(&mut self) -> Vec<&str> {
        self.update_render_index();
        self.render_index
            .iter()
            .map(|&(i, _)| self.items[i].0.as_str())
            .collect()
    }

    /// Submit every drawable to the device, stops at the first device error
    pub fn draw<D: Device + ?Sized>(&mut self, device: &mut D) -> ProviderResult<()> {
        self.update_render_index();
        for &(i, _) in &self.render_index {
            K::submit(&mut *device, &self.items[i].1).map_err(device_error)?;
        }
        Ok(())
    }

    fn index_of(&self, name: &str) -> ProviderResult<usize> {
        self.tag_index
            .get(name)
            .copied()
            .ok_or_else(|| ProviderError::NameNotFound(name.to_string()))
    }
}
