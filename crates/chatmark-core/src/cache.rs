use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;
use once_cell::sync::Lazy;

use crate::block::render;
use crate::options::RenderOptions;

const CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

type Cache = Mutex<LruCache<String, String>>;

static RENDER_CACHE: Lazy<Cache> = Lazy::new(|| Mutex::new(LruCache::new(CACHE_CAPACITY)));

/// Same as [`render`], memoized in a process-wide LRU keyed by the message text.
///
/// Input beyond the default length limit is cut before rendering, which also bounds the size
/// of every cache entry.
pub fn render_cached(source: &str) -> String {
    let (source, truncated) = RenderOptions::default().clamp(source);
    if truncated {
        log::debug!("cached render input truncated to {} bytes", source.len());
    }

    if let Some(cached) = lock_cache().get(source) {
        log::trace!("render cache hit ({} bytes)", source.len());
        return cached.clone();
    }

    log::trace!("render cache miss ({} bytes)", source.len());
    let html = render(source);
    lock_cache().put(source.to_string(), html.clone());
    html
}

pub fn clear_render_cache() {
    lock_cache().clear();
}

// Rendering cannot leave the cache half-updated, so a poisoned lock is still usable.
fn lock_cache() -> MutexGuard<'static, LruCache<String, String>> {
    RENDER_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
