//! Best-effort image preloading.
//!
//! Each catalog URL is fetched once on a detached task so the images are
//! warm in whatever cache sits between us and the origin. Nothing waits on
//! these tasks and nothing observes their outcome; a failed preload just
//! means the image loads cold when first displayed.

use super::catalog::ImageCatalog;

/// Kick off a fire-and-forget fetch for every catalog image.
///
/// Join handles are intentionally dropped. Non-HTTP references (e.g. local
/// asset paths in a demo catalog) are skipped.
pub fn preload_all(client: &reqwest::Client, catalog: &ImageCatalog) {
    for entry in catalog.iter() {
        if !entry.url.starts_with("http://") && !entry.url.starts_with("https://") {
            log::debug!("skipping preload of non-http image '{}'", entry.key);
            continue;
        }

        let client = client.clone();
        let key = entry.key.clone();
        let url = entry.url.clone();
        tokio::spawn(async move {
            match client.get(&url).send().await {
                Ok(response) => {
                    log::debug!("preloaded '{}' ({})", key, response.status());
                }
                Err(e) => {
                    log::debug!("preload of '{}' failed: {}", key, e);
                }
            }
        });
    }
}
