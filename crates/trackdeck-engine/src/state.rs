use std::collections::HashMap;
use trackdeck_types::SectionKey;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Stored pagination position of one section.
///
/// The stored page may transiently exceed the valid range after filtering
/// shrinks a collection; it is clamped at read time and written back via
/// [`SectionStateStore::sync_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        PageState {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Session-scoped pagination state, keyed per section.
///
/// Entries survive snapshot refreshes and search-term changes; sections are
/// fully independent of each other.
#[derive(Debug, Default)]
pub struct SectionStateStore {
    entries: HashMap<SectionKey, PageState>,
}

impl SectionStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for a section, defaulting for unseen keys without
    /// touching the store.
    pub fn page_state(&self, key: SectionKey) -> PageState {
        self.entries.get(&key).copied().unwrap_or_default()
    }

    /// Insert defaults for any unseen keys; existing entries are kept as-is.
    /// Called whenever the section catalogue is (re)computed.
    pub fn materialize<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = SectionKey>,
    {
        for key in keys {
            self.entries.entry(key).or_default();
        }
    }

    pub fn set_page(&mut self, key: SectionKey, page: usize) {
        self.entries.entry(key).or_default().page = page;
    }

    /// Changing density invalidates the previous offset, so the page resets
    /// to 1 along with the new size.
    pub fn set_page_size(&mut self, key: SectionKey, page_size: usize) {
        let entry = self.entries.entry(key).or_default();
        entry.page_size = page_size;
        entry.page = 1;
    }

    /// Write back the effective page reported by the pagination engine when
    /// it differs from the stored one.
    pub fn sync_page(&mut self, key: SectionKey, effective_page: usize) {
        if self.page_state(key).page != effective_page {
            self.set_page(key, effective_page);
        }
    }
}
