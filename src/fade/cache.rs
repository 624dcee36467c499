//! Memoizing interpolator.
//!
//! Results are keyed by `(background, foreground, factor)`. The map lock is
//! held only long enough to fetch or create the per-key slot; the slot itself
//! is a `OnceLock`, so each key is computed at most once and readers never
//! see a half-written value.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use super::interpolator::{Interpolator, Linear};
use crate::color::{clamp_factor, Color, Rgb};

/// Default bound on cached blends. Each entry is a few dozen bytes.
pub const DEFAULT_MAX_ENTRIES: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    background: Rgb,
    foreground: Rgb,
    factor_bits: u64,
}

impl CacheKey {
    fn new(background: Rgb, foreground: Rgb, factor: f64) -> Self {
        let factor = clamp_factor(factor);
        // -0.0 and 0.0 blend identically
        let factor = if factor == 0.0 { 0.0 } else { factor };
        Self {
            background,
            foreground,
            factor_bits: factor.to_bits(),
        }
    }
}

type Slot = Arc<OnceLock<Color>>;

#[derive(Default)]
struct Slots {
    map: HashMap<CacheKey, Slot>,
    /// Insertion order for FIFO eviction
    order: VecDeque<CacheKey>,
}

/// A thread-safe cache of interpolation results.
pub struct ColorCache {
    slots: Mutex<Slots>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ColorCache {
    /// Create a cache holding at most `max_entries` blends.
    pub fn new(max_entries: usize) -> Self {
        Self {
            slots: Mutex::new(Slots::default()),
            max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    // The map only holds idempotent values, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, key: CacheKey) -> Slot {
        let mut slots = self.lock();
        if let Some(slot) = slots.map.get(&key) {
            return Arc::clone(slot);
        }

        let slot = Slot::default();
        slots.map.insert(key, Arc::clone(&slot));
        slots.order.push_back(key);
        while slots.map.len() > self.max_entries {
            match slots.order.pop_front() {
                Some(old) => {
                    slots.map.remove(&old);
                }
                None => break,
            }
        }
        slot
    }

    /// Return the cached blend, computing it on first use.
    pub fn get_or_compute(&self, background: Rgb, foreground: Rgb, factor: f64) -> Color {
        let slot = self.slot(CacheKey::new(background, foreground, factor));
        if let Some(color) = slot.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(%background, %foreground, factor, "Interpolation cache hit");
            return color.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        slot.get_or_init(|| Linear.interpolate_rgb(background, foreground, factor))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut slots = self.lock();
        slots.map.clear();
        slots.order.clear();
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl std::fmt::Debug for ColorCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorCache")
            .field("len", &self.len())
            .field("max_entries", &self.max_entries)
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}

impl Interpolator for ColorCache {
    fn interpolate_rgb(&self, background: Rgb, foreground: Rgb, factor: f64) -> Color {
        self.get_or_compute(background, foreground, factor)
    }
}

/// The process-wide cache used by the terminal-aware entry points.
pub fn global() -> &'static ColorCache {
    static GLOBAL: OnceLock<ColorCache> = OnceLock::new();
    GLOBAL.get_or_init(ColorCache::default)
}
