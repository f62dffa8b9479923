// src/application/search_gateway.rs
use tracing::{debug, instrument, warn};

use crate::application::arguments::SearchArgs;
use crate::application::ports::NoteSearcher;
use crate::domain::{GatewayError, Note, RequestContext, SearchQuery};

/// Search index adapter. Without a configured searcher every search is empty.
pub struct SearchGateway<X: NoteSearcher> {
    searcher: Option<X>,
}

impl<X: NoteSearcher> SearchGateway<X> {
    pub fn new(searcher: Option<X>) -> Self {
        Self { searcher }
    }

    pub fn is_enabled(&self) -> bool {
        self.searcher.is_some()
    }

    /// Only the free-text query reaches the index; the author, team and
    /// date filters are accepted but not forwarded.
    #[instrument(level = "debug", skip(self, ctx))]
    pub async fn search(&self, ctx: &RequestContext, args: SearchArgs) -> Result<Vec<Note>, GatewayError> {
        let Some(text) = args.query else {
            debug!("No search text given, returning empty result");
            return Ok(Vec::new());
        };

        let Some(searcher) = &self.searcher else {
            debug!("No search backend configured, returning empty result");
            return Ok(Vec::new());
        };

        let query = SearchQuery::text(text);
        let notes = searcher.search(ctx, &query).await.map_err(|e| {
            warn!(error = %e, "Search backend failed");
            GatewayError::backend("search", e)
        })?;

        debug!(hits = notes.len(), "Search completed");
        Ok(notes)
    }
}
