use crate::error::UniquifyError;
use crate::registry::UsedColors;
use crate::search::{nearest_available, SearchCache};

/// Summary of one recoloring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniquifyReport {
    /// Pixels fully resolved (searched, registered, written back).
    pub pixels_processed: usize,
    /// Pixels whose replacement differs from their original color.
    pub recolored: usize,
    /// `false` if the progress callback cancelled the run.
    pub completed: bool,
}

/// Rewrite `pixels` in place so that no color appears more than once.
///
/// Pixels are resolved strictly one at a time, in buffer order: each pixel's
/// replacement is registered as used before the next pixel's search starts —
/// the ordering that guarantees two pixels can never end up with the same
/// color. `on_progress` is called between pixels whenever the permille of
/// completed work increases; returning `false` stops the run. Already
/// rewritten pixels keep their replacements on cancellation, and on the
/// (practically unreachable) exhaustion error.
pub fn recolor_in_place(
    pixels: &mut [rgb::RGB<u8>],
    resume_cache: bool,
    mut on_progress: impl FnMut(u32) -> bool,
) -> Result<UniquifyReport, UniquifyError> {
    let total = pixels.len();
    let mut used = UsedColors::new();
    let mut cache = SearchCache::new();
    let mut recolored = 0;
    let mut last_permille = None;

    for (i, pixel) in pixels.iter_mut().enumerate() {
        let cache = resume_cache.then_some(&mut cache);
        let replacement = nearest_available(*pixel, |c| !used.contains(c), cache)
            .ok_or(UniquifyError::SearchExhausted { pixel: i })?;

        used.insert(replacement);
        if replacement != *pixel {
            recolored += 1;
        }
        *pixel = replacement;

        let permille = ((i + 1) * 1000 / total) as u32;
        if last_permille.map_or(true, |p| permille > p) {
            last_permille = Some(permille);
            if !on_progress(permille) {
                return Ok(UniquifyReport {
                    pixels_processed: i + 1,
                    recolored,
                    completed: false,
                });
            }
        }
    }

    Ok(UniquifyReport {
        pixels_processed: total,
        recolored,
        completed: true,
    })
}
