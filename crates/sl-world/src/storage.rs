//! Bounded multi-resource inventories.
//!
//! Two shapes are used:
//!
//! - [`ArbitraryStorage`]: a carriage's cargo hold.  Any resource may be
//!   stored, but only `slots` distinct kinds at once and at most `size` of
//!   each.
//! - [`SpecializedStorage`]: building and producer inventories with a fixed
//!   limit per resource kind.  Kinds without a limit cannot be stored.
//!
//! Both implement [`Storage`], the narrow contract the carriage logic uses.
//! `alter_inventory` never fails: it applies as much of the delta as fits
//! and reports what it actually applied.

use std::collections::BTreeMap;

use sl_core::ResourceId;

// ── Storage trait ─────────────────────────────────────────────────────────────

pub trait Storage {
    /// Units of `res` currently held.
    fn get_value(&self, res: ResourceId) -> u32;

    /// Capacity for `res`.  Zero means `res` cannot be stored right now.
    fn get_size(&self, res: ResourceId) -> u32;

    /// Add (`delta > 0`) or remove (`delta < 0`) units of `res`.
    ///
    /// The result is clamped to `0..=get_size(res)`; the return value is the
    /// signed change actually applied.
    fn alter_inventory(&mut self, res: ResourceId, delta: i64) -> i64;

    /// `true` if nothing is stored.
    fn is_empty(&self) -> bool;

    /// Remaining room for `res`.
    fn free_space(&self, res: ResourceId) -> u32 {
        self.get_size(res).saturating_sub(self.get_value(res))
    }
}

/// Clamp `value + delta` into `0..=size` and return the applied change.
fn clamped_delta(value: u32, size: u32, delta: i64) -> i64 {
    let target = (value as i64 + delta).clamp(0, size.max(value) as i64);
    target - value as i64
}

// ── ArbitraryStorage ──────────────────────────────────────────────────────────

/// Slot-based storage accepting any resource kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArbitraryStorage {
    slots: u32,
    size:  u32,
    /// Non-zero entries only; a kind disappears when its stock reaches 0.
    items: BTreeMap<ResourceId, u32>,
}

impl ArbitraryStorage {
    pub fn new(slots: u32, size: u32) -> Self {
        Self { slots, size, items: BTreeMap::new() }
    }

    /// Total capacity over all slots.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.slots * self.size
    }

    /// Held resources with their amounts, in ascending id order.
    pub fn contents(&self) -> impl Iterator<Item = (ResourceId, u32)> + '_ {
        self.items.iter().map(|(&r, &n)| (r, n))
    }
}

impl Storage for ArbitraryStorage {
    fn get_value(&self, res: ResourceId) -> u32 {
        self.items.get(&res).copied().unwrap_or(0)
    }

    fn get_size(&self, res: ResourceId) -> u32 {
        if self.items.contains_key(&res) || (self.items.len() as u32) < self.slots {
            self.size
        } else {
            0
        }
    }

    fn alter_inventory(&mut self, res: ResourceId, delta: i64) -> i64 {
        let value = self.get_value(res);
        let applied = clamped_delta(value, self.get_size(res), delta);
        let new_value = (value as i64 + applied) as u32;
        if new_value == 0 {
            self.items.remove(&res);
        } else {
            self.items.insert(res, new_value);
        }
        applied
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ── SpecializedStorage ────────────────────────────────────────────────────────

/// Storage with an individual limit per resource kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecializedStorage {
    limits: BTreeMap<ResourceId, u32>,
    stock:  BTreeMap<ResourceId, u32>,
}

impl SpecializedStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set_limit`](Self::set_limit).
    pub fn with_limit(mut self, res: ResourceId, size: u32) -> Self {
        self.set_limit(res, size);
        self
    }

    /// Allow up to `size` units of `res`.  Stock above a lowered limit is kept
    /// but nothing more can be added until it drops below.
    pub fn set_limit(&mut self, res: ResourceId, size: u32) {
        self.limits.insert(res, size);
    }

    /// Resource kinds with a limit, in ascending id order.
    pub fn kinds(&self) -> impl Iterator<Item = ResourceId> + '_ {
        self.limits.keys().copied()
    }
}

impl Storage for SpecializedStorage {
    fn get_value(&self, res: ResourceId) -> u32 {
        self.stock.get(&res).copied().unwrap_or(0)
    }

    fn get_size(&self, res: ResourceId) -> u32 {
        self.limits.get(&res).copied().unwrap_or(0)
    }

    fn alter_inventory(&mut self, res: ResourceId, delta: i64) -> i64 {
        let value = self.get_value(res);
        let applied = clamped_delta(value, self.get_size(res), delta);
        if applied != 0 {
            self.stock.insert(res, (value as i64 + applied) as u32);
        }
        applied
    }

    fn is_empty(&self) -> bool {
        self.stock.values().all(|&n| n == 0)
    }
}
