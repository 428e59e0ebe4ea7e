//! Input and output record types.
//!
//! `RawRecord` is what the ingestion layer hands to the toolkit;
//! `TransitionRecord` is the only thing the toolkit hands back.

use crate::{ActionId, Coord, SequenceId, StateId, Timestamp};

/// One observed vessel position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRecord {
    /// Source identifier of the vessel (MMSI for AIS data).
    pub entity_id: String,
    pub coord:     Coord,
    pub timestamp: Timestamp,
}

impl RawRecord {
    pub fn new(entity_id: impl Into<String>, lon: f64, lat: f64, timestamp: f64) -> Self {
        Self {
            entity_id: entity_id.into(),
            coord:     Coord::new(lon, lat),
            timestamp: Timestamp(timestamp),
        }
    }
}

/// One state-action-state row of the output dataset.
///
/// The last row of every trajectory is a terminal marker:
/// `action == to_state == -1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionRecord {
    pub sequence_id: SequenceId,
    pub from_state:  StateId,
    pub action:      ActionId,
    pub to_state:    StateId,
    /// Representative coordinate of `from_state`; `None` unless coordinates
    /// were requested.
    pub coord:       Option<Coord>,
}

impl TransitionRecord {
    /// Terminal marker row closing a trajectory that ends in `last_state`.
    pub fn terminal(sequence_id: SequenceId, last_state: StateId, coord: Option<Coord>) -> Self {
        Self {
            sequence_id,
            from_state: last_state,
            action:     ActionId::TERMINAL,
            to_state:   StateId::TERMINAL,
            coord,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.action.is_terminal() && self.to_state.is_terminal()
    }
}
