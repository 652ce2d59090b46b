/// The artist cards and the search box that narrows them.
#[derive(Debug, Default)]
pub struct GroupList {
    names: Vec<String>,
    query: String,
    search_active: bool,
    /// Position within `visible()`.
    cursor: usize,
}

impl GroupList {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            ..Self::default()
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_active(&self) -> bool {
        self.search_active
    }

    /// Names of the cards currently shown, in original order.
    ///
    /// A card is shown when its name contains the trimmed query,
    /// case-insensitively; an empty query shows every card.
    pub fn visible(&self) -> Vec<&str> {
        let term = self.query.trim().to_lowercase();
        self.names
            .iter()
            .filter(|name| term.is_empty() || name.to_lowercase().contains(&term))
            .map(String::as_str)
            .collect()
    }

    pub fn open_search(&mut self) {
        self.search_active = true;
    }

    /// Close the search box if nothing has been typed into it.
    pub fn dismiss_search(&mut self) {
        if self.query.is_empty() {
            self.search_active = false;
        }
    }

    /// Leave the search box but keep its filter applied.
    pub fn finish_search(&mut self) {
        self.search_active = false;
    }

    #[cfg(test)]
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.clamp_cursor();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_cursor();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.clamp_cursor();
    }

    /// Escape: empty the query, close the box and show every card again.
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.search_active = false;
        self.clamp_cursor();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Name of the card under the cursor, if any card is visible.
    pub fn selected(&self) -> Option<&str> {
        self.visible().get(self.cursor).copied()
    }

    pub fn cursor_next(&mut self) {
        let n = self.visible().len();
        if n > 0 {
            self.cursor = (self.cursor + 1) % n;
        }
    }

    pub fn cursor_prev(&mut self) {
        let n = self.visible().len();
        if n > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(n - 1);
        }
    }

    fn clamp_cursor(&mut self) {
        let n = self.visible().len();
        if self.cursor >= n {
            self.cursor = 0;
        }
    }
}
