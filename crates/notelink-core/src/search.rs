//! Referrer and quick-link search over a [`NoteSource`]
//!
//! Upstream failures are logged and degrade to empty results; only an empty
//! target id is reported back to the caller.

use std::collections::BTreeMap;
use std::future::Future;

use futures::future::try_join_all;
use notelink_config::NoteLinkConfig;
use tokio::sync::RwLock;

use crate::error::MentionResult;
use crate::keyword::Keyword;
use crate::model::{Note, Referrer, SearchedNote};
use crate::notebook::NotebookIndex;
use crate::service::MentionService;
use crate::source::{NoteSource, Page, SourceResult};

/// Collect every page of a paginated listing, starting at page 1
async fn fetch_all<T, F, Fut>(mut fetch: F) -> SourceResult<Vec<T>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = SourceResult<Page<T>>>,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let Page {
            items: batch,
            has_more,
        } = fetch(page).await?;
        items.extend(batch);
        if !has_more {
            return Ok(items);
        }
        page += 1;
    }
}

/// Searches a note source for referrers and quick-link candidates
pub struct ReferrerSearch<S> {
    source: S,
    mentions: MentionService,
    config: NoteLinkConfig,
    notebooks: RwLock<NotebookIndex>,
}

impl<S: NoteSource> ReferrerSearch<S> {
    /// Create a search over `source`
    pub fn new(source: S, mentions: MentionService, config: NoteLinkConfig) -> Self {
        Self {
            source,
            mentions,
            config,
            notebooks: RwLock::new(NotebookIndex::default()),
        }
    }

    /// The wrapped note source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Active configuration
    pub fn config(&self) -> &NoteLinkConfig {
        &self.config
    }

    async fn fetch_notes_matching(&self, query: &str) -> SourceResult<Vec<Note>> {
        let hits = fetch_all(|page| self.source.search(query, page)).await?;
        let notes = try_join_all(hits.iter().map(|hit| self.source.note(&hit.id))).await?;
        Ok(notes)
    }

    /// Notes linking to `note_id`, with note-level mentions
    pub async fn search_referrers(&self, note_id: &str) -> MentionResult<Vec<Referrer>> {
        let keyword = Keyword::parse(note_id)?;
        if !self.config.referrers.is_enabled() {
            return Ok(Vec::new());
        }

        let query = self.config.referrers.query_for(keyword.as_str());
        let notes = match self.fetch_notes_matching(&query).await {
            Ok(notes) => notes,
            Err(err) => {
                tracing::error!(note_id, error = %err, "referrer search failed");
                return Ok(Vec::new());
            }
        };

        self.mentions.search_referrers_of_element(
            keyword.as_str(),
            notes,
            self.config.referrers.note_mention_text_length,
        )
    }

    /// Referrers of each element of `note_id`, keyed by element id
    ///
    /// Empty element ids are skipped and elements nobody links to are left
    /// out of the map.
    pub async fn search_referrers_of_elements(
        &self,
        note_id: &str,
        element_ids: &[String],
    ) -> MentionResult<BTreeMap<String, Vec<Referrer>>> {
        Keyword::parse(note_id)?;
        let mut result = BTreeMap::new();
        if !self.config.referrers.is_enabled() {
            return Ok(result);
        }

        for element_id in element_ids.iter().filter(|id| !id.is_empty()) {
            let keyword = Keyword::for_element(note_id, element_id)?;
            let query = self.config.referrers.query_for(keyword.as_str());
            let notes = match self.fetch_notes_matching(&query).await {
                Ok(notes) => notes,
                Err(err) => {
                    tracing::error!(
                        note_id,
                        element_id = %element_id,
                        error = %err,
                        "element referrer search failed"
                    );
                    return Ok(BTreeMap::new());
                }
            };

            let referrers = self.mentions.search_referrers_of_element(
                keyword.as_str(),
                notes,
                self.config.referrers.element_mention_text_length,
            )?;
            if !referrers.is_empty() {
                result.insert(element_id.clone(), referrers);
            }
        }

        Ok(result)
    }

    /// Quick-link candidates for typed text, or recent notes when nothing is typed
    pub async fn search_notes(&self, keyword: Option<&str>) -> Vec<SearchedNote> {
        let quick_link = &self.config.quick_link;
        if !quick_link.is_enabled() {
            return Vec::new();
        }

        let query = keyword
            .filter(|keyword| !keyword.is_empty())
            .map(|keyword| quick_link.query_for(keyword));
        let found = match &query {
            Some(query) => fetch_all(|page| self.source.search(query, page)).await,
            None => self.source.recent_notes(quick_link.recent_limit).await,
        };

        let mut notes = match found {
            Ok(notes) => notes,
            Err(err) => {
                tracing::error!(error = %err, "quick-link search failed");
                return Vec::new();
            }
        };

        if quick_link.show_path {
            let index = self.notebooks.read().await;
            for note in &mut notes {
                note.path = Some(index.path_of(&note.parent_id));
            }
        }

        notes
    }

    /// Reload every notebook for quick-link paths; returns how many were indexed
    pub async fn rebuild_notebook_index(&self) -> SourceResult<usize> {
        let roots = fetch_all(|page| self.source.notebooks(page)).await?;
        let index = NotebookIndex::build(&roots);
        let count = index.len();
        *self.notebooks.write().await = index;
        tracing::debug!(notebooks = count, "rebuilt notebook index");
        Ok(count)
    }
}
