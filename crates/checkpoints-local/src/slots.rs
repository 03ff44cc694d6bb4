use chrono::{DateTime, Duration, Utc};

use doc_checkpoints_core::CheckpointRecord;

/// Slot rotation policy for a fixed pool of checkpoint slots.
///
/// Free slots are always preferred, in pool order. On a full pool the
/// allocator either collapses into the most recent slot (a save within the
/// debounce window) or evicts the least recently modified one. Slot ids are
/// never renumbered; eviction always reuses an existing id.
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    max_checkpoints: usize,
    debounce: Duration,
}

impl SlotAllocator {
    pub fn new(max_checkpoints: usize, debounce_seconds: u64) -> Self {
        Self {
            max_checkpoints,
            debounce: Duration::seconds(debounce_seconds as i64),
        }
    }

    /// The full ordered pool of slot identifiers for any document.
    pub fn slot_ids(&self) -> Vec<String> {
        (0..self.max_checkpoints)
            .map(|i| format!("checkpoint{}", i))
            .collect()
    }

    /// Pool-ordered subset of slots with no existing checkpoint file.
    pub fn free_slots(&self, occupied: &[String]) -> Vec<String> {
        self.slot_ids()
            .into_iter()
            .filter(|id| !occupied.iter().any(|o| o == id))
            .collect()
    }

    /// Pick the slot for a new checkpoint.
    ///
    /// `existing` must be sorted by modification time descending, the same
    /// ordering `list` returns. The elapsed time is taken as an absolute
    /// difference so a file mtime slightly ahead of the clock still counts as
    /// recent.
    pub fn select(
        &self,
        free: &[String],
        existing: &[CheckpointRecord],
        now: DateTime<Utc>,
    ) -> String {
        if let Some(id) = free.first() {
            return id.clone();
        }
        let (Some(newest), Some(oldest)) = (existing.first(), existing.last()) else {
            // No free slot and no records; only reachable with an empty pool.
            return "checkpoint0".to_string();
        };
        let elapsed = (now - newest.last_modified).abs();
        if elapsed < self.debounce {
            newest.id.clone()
        } else {
            oldest.id.clone()
        }
    }
}
