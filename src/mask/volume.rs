//! Sparse collection of slice labelmaps.

use std::collections::BTreeMap;

use super::{SegmentIndex, SliceId, SliceLabelmap};

/// Labelmap volume: slice labelmaps keyed by slice position.
///
/// Only slices that have been painted exist. Slices are created by the host
/// (`insert_slice` / `ensure_slice`) and removed either by the host or by the
/// painter when an erase leaves a slice empty.
#[derive(Clone, Debug, Default)]
pub struct LabelmapVolume {
    slices: BTreeMap<SliceId, SliceLabelmap>,
}

impl LabelmapVolume {
    /// Create an empty volume.
    pub fn new() -> Self {
        Self { slices: BTreeMap::new() }
    }

    /// Insert or replace a slice, returning the previous one.
    pub fn insert_slice(&mut self, id: SliceId, slice: SliceLabelmap) -> Option<SliceLabelmap> {
        self.slices.insert(id, slice)
    }

    /// Get the slice at `id`, creating an unlabeled `columns x rows` slice if missing.
    pub fn ensure_slice(&mut self, id: SliceId, columns: u32, rows: u32) -> &mut SliceLabelmap {
        self.slices.entry(id).or_insert_with(|| {
            log::trace!("allocating {columns}x{rows} labelmap for slice {id}");
            SliceLabelmap::new(columns, rows)
        })
    }

    pub fn slice(&self, id: SliceId) -> Option<&SliceLabelmap> {
        self.slices.get(&id)
    }

    pub fn slice_mut(&mut self, id: SliceId) -> Option<&mut SliceLabelmap> {
        self.slices.get_mut(&id)
    }

    pub fn contains(&self, id: SliceId) -> bool {
        self.slices.contains_key(&id)
    }

    /// Remove a slice entry entirely.
    pub fn remove_slice(&mut self, id: SliceId) -> Option<SliceLabelmap> {
        self.slices.remove(&id)
    }

    /// Number of slices currently stored.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Stored slice ids in ascending order.
    pub fn slice_ids(&self) -> impl Iterator<Item = SliceId> + '_ {
        self.slices.keys().copied()
    }

    /// Slices whose invalidated flag is raised.
    pub fn invalidated_slices(&self) -> Vec<SliceId> {
        self.slices
            .iter()
            .filter(|(_, slice)| slice.is_invalidated())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Collect invalidated slices and mark them rendered.
    ///
    /// Intended for the renderer at the start of a redraw.
    pub fn take_invalidated(&mut self) -> Vec<SliceId> {
        let mut taken = Vec::new();
        for (id, slice) in self.slices.iter_mut() {
            if slice.is_invalidated() {
                slice.mark_rendered();
                taken.push(*id);
            }
        }
        taken
    }

    /// Total pixels labeled with `segment` across all slices.
    pub fn segment_pixel_count(&self, segment: SegmentIndex) -> usize {
        self.slices.values().map(|s| s.count_segment(segment)).sum()
    }
}
