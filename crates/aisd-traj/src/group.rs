//! Grouping records by entity.
//!
//! An ordered lookup (entity id → index into a dense `Vec<RawTrack>`) keeps
//! tracks in first-seen order, so later stages never iterate a hash map and
//! the output is deterministic.

use aisd_core::{EntityIndex, RawRecord};

use crate::{Fix, RawTrack};

#[cfg(not(feature = "fx-hash"))]
type EntityMap = std::collections::HashMap<String, usize>;

#[cfg(feature = "fx-hash")]
type EntityMap = rustc_hash::FxHashMap<String, usize>;

/// Split `records` into one [`RawTrack`] per entity.
///
/// Tracks come back in order of each entity's first record; every record is
/// kept, in input order, within its track.
pub fn group_records<I>(records: I) -> Vec<RawTrack>
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut index = EntityMap::default();
    let mut tracks: Vec<RawTrack> = Vec::new();

    for record in records {
        let fix = Fix { coord: record.coord, timestamp: record.timestamp };
        match index.get(&record.entity_id) {
            Some(&i) => tracks[i].fixes.push(fix),
            None => {
                let i = tracks.len();
                index.insert(record.entity_id.clone(), i);
                tracks.push(RawTrack {
                    entity:    EntityIndex(i as u32),
                    entity_id: record.entity_id,
                    fixes:     vec![fix],
                });
            }
        }
    }

    tracks
}
