//! Per-surface engine pooling.
//!
//! A host with several independent surfaces (split views, secondary windows)
//! runs one engine per surface so concurrent gestures never share state. The
//! pool creates engines lazily through a host-supplied factory and keeps them
//! keyed by [`SurfaceId`] for the lifetime of the surface.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::events::EventSink;
use crate::input::engine::PointerEngine;
use crate::sampler::PointSampler;
use crate::types::SurfaceId;

/// Lazily populated map of one [`PointerEngine`] per surface.
pub struct EnginePool<S: PointSampler, E: EventSink> {
    engines: Mutex<HashMap<SurfaceId, PointerEngine<S, E>>>,
    factory: Box<dyn Fn(SurfaceId) -> PointerEngine<S, E> + Send + Sync>,
}

impl<S: PointSampler, E: EventSink> EnginePool<S, E> {
    /// Create an empty pool. The factory runs once per surface, on first use.
    pub fn new(
        factory: impl Fn(SurfaceId) -> PointerEngine<S, E> + Send + Sync + 'static,
    ) -> Self {
        Self {
            engines: Mutex::new(HashMap::new()),
            factory: Box::new(factory),
        }
    }

    /// Run `f` against the engine for `surface`, creating it if this is the
    /// surface's first pointer event.
    pub fn with_engine<R>(
        &self,
        surface: SurfaceId,
        f: impl FnOnce(&mut PointerEngine<S, E>) -> R,
    ) -> R {
        let mut engines = self.engines.lock();
        let engine = engines
            .entry(surface)
            .or_insert_with(|| (self.factory)(surface));
        f(engine)
    }

    /// Drop the engine for a closed surface, discarding any in-flight
    /// gesture. Returns the engine if one existed.
    pub fn remove(&self, surface: SurfaceId) -> Option<PointerEngine<S, E>> {
        self.engines.lock().remove(&surface)
    }

    /// Earliest armed deadline across all pooled engines.
    pub fn next_deadline(&self) -> Option<u64> {
        self.engines
            .lock()
            .values()
            .filter_map(PointerEngine::next_deadline)
            .min()
    }

    /// Drive every pooled engine's timers up to `now_ms`.
    pub fn tick(&self, now_ms: u64) {
        for engine in self.engines.lock().values_mut() {
            engine.tick(now_ms);
        }
    }

    pub fn len(&self) -> usize {
        self.engines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.lock().is_empty()
    }
}
