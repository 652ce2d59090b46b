use crate::catalog::Track;

/// One visible row: what the list shows for a track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistRow {
    pub title: String,
    pub artist: String,
}

/// Activation token for a row of a specific render.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowBinding {
    generation: u64,
    index: usize,
}

#[derive(Debug, Default)]
pub struct PlaylistView {
    tracks: Vec<Track>,
    rows: Vec<PlaylistRow>,
    generation: u64,
    cursor: usize,
}

impl PlaylistView {
    /// Replace the visible list with one row per track, in order.
    ///
    /// Bindings handed out before this call stop resolving.
    pub fn render(&mut self, tracks: Vec<Track>) {
        self.rows = tracks
            .iter()
            .map(|t| PlaylistRow {
                title: t.title.clone(),
                artist: t.artist.clone(),
            })
            .collect();
        self.tracks = tracks;
        self.generation = self.generation.wrapping_add(1);
        self.cursor = 0;
    }

    pub fn rows(&self) -> &[PlaylistRow] {
        &self.rows
    }

    #[cfg(test)]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Binding for the row at `index` of the current render.
    pub fn binding(&self, index: usize) -> Option<RowBinding> {
        (index < self.rows.len()).then_some(RowBinding {
            generation: self.generation,
            index,
        })
    }

    /// Resolve a binding to its track, or `None` when it belongs to an
    /// earlier render.
    pub fn resolve(&self, binding: RowBinding) -> Option<(usize, &Track)> {
        if binding.generation != self.generation {
            return None;
        }
        self.tracks.get(binding.index).map(|t| (binding.index, t))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.rows.len() {
            self.cursor = index;
        }
    }

    /// Move the cursor down, wrapping to the first row.
    pub fn cursor_next(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = (self.cursor + 1) % self.rows.len();
        }
    }

    /// Move the cursor up, wrapping to the last row.
    pub fn cursor_prev(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.rows.len() - 1);
        }
    }
}
