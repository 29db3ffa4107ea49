//! Per-file metadata normalization.
//!
//! Relevant camera keys are promoted to the front of each record so the
//! report reads top-down: a fixed list of promoted names is matched by
//! case-insensitive substring against every attribute name, and matched
//! entries are emitted first, in promoted-list order. The remaining
//! original keys follow in their original relative order; only an original
//! key whose name exactly equals a matched promoted name is folded into
//! the promoted entry instead of appearing twice.

use seqmeta_ingest::Result;
use seqmeta_ingest::lens::LensResolver;
use seqmeta_model::{AttributeMap, FileRecord};
use tracing::warn;

/// Promoted attribute names, in output order.
pub const PROMOTED_KEYS: [&str; 6] = ["focalLength", "lens", "roll", "tilt", "focal", "lens_type"];

/// Normalize one file's attributes into an ordered [`FileRecord`].
///
/// Keys containing `lens_type` have their value replaced through the lens
/// resolver when a table is configured and a row matches; an unresolvable
/// serial keeps its original value. When several attribute names match the
/// same promoted name, the later one wins (a collision is logged).
///
/// # Errors
///
/// Fails only when a configured lens table cannot be loaded
/// ([`seqmeta_ingest::IngestError::LensTable`]), which is fatal for the
/// run.
pub fn normalize(
    filename: &str,
    attrs: &AttributeMap,
    resolver: &mut LensResolver,
) -> Result<FileRecord> {
    let mut promoted: [Option<String>; PROMOTED_KEYS.len()] = Default::default();

    for (key, value) in attrs.iter() {
        let key_lower = key.to_ascii_lowercase();

        let mut value = value.to_string();
        if key_lower.contains("lens_type") && resolver.is_configured() {
            if let Some(resolved) = resolver.resolve(&value)? {
                value = resolved;
            }
        }

        for (index, promoted_key) in PROMOTED_KEYS.iter().enumerate() {
            if key_lower.contains(&promoted_key.to_ascii_lowercase()) {
                if promoted[index].is_some() {
                    warn!(
                        file = filename,
                        promoted = promoted_key,
                        key,
                        "promoted key collision, later value overwrites"
                    );
                }
                promoted[index] = Some(value.clone());
            }
        }
    }

    let mut entries: Vec<(String, String)> = Vec::with_capacity(attrs.len());
    let mut matched_names: Vec<&str> = Vec::new();
    for (index, promoted_key) in PROMOTED_KEYS.iter().enumerate() {
        if let Some(value) = promoted[index].take() {
            entries.push(((*promoted_key).to_string(), value));
            matched_names.push(promoted_key);
        }
    }

    for (key, value) in attrs.iter() {
        if matched_names.contains(&key) {
            continue;
        }
        entries.push((key.to_string(), value.to_string()));
    }

    Ok(FileRecord::new(filename, entries))
}
