//! # Dynamic Field Collector
//!
//! Exhaustive, order-preserving retrieval of a parent object's dynamic fields
//! over the cursor-paged listing endpoint.
//!
//! Pages are fetched strictly one after another: request N+1 carries the cursor
//! returned with page N. Collection stops only when a page reports
//! `has_next_page = false`; the number of pages is not bounded here, that is
//! left to the transport.
//!
//! ## Failure
//! [`DynamicFieldCollector::collect`] is all-or-nothing. The first transport
//! error is returned unchanged and every field gathered so far is dropped.
//!
//! ## Streaming
//! [`DynamicFieldCollector::pages`] and [`DynamicFieldCollector::fields`] expose
//! the same walk lazily, so a caller can stop early without fetching the rest.

use crate::config::FieldQueryConfig;
use crate::fields::source::DynamicFieldSource;
use crate::fields::types::{Cursor, DynamicFieldDescriptor, DynamicFieldPage, DynamicFieldsRequest};
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, instrument, warn};

/// Collect every dynamic field of `parent_id`, in the order the ledger emits them.
pub async fn collect_dynamic_fields<S>(
    source: &S,
    parent_id: &str,
) -> Result<Vec<DynamicFieldDescriptor>, S::Error>
where
    S: DynamicFieldSource + ?Sized,
{
    DynamicFieldCollector::new(source).collect(parent_id).await
}

/// Pages through a [`DynamicFieldSource`] on behalf of one caller
pub struct DynamicFieldCollector<'a, S: ?Sized> {
    source: &'a S,
    page_limit: Option<u32>,
}

impl<'a, S> DynamicFieldCollector<'a, S>
where
    S: DynamicFieldSource + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            page_limit: None,
        }
    }

    /// Build a collector using the page size from `config`
    pub fn from_config(source: &'a S, config: &FieldQueryConfig) -> Self {
        Self {
            source,
            page_limit: config.page_limit,
        }
    }

    /// Ask the ledger for at most `limit` fields per page
    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    pub fn page_limit(&self) -> Option<u32> {
        self.page_limit
    }

    fn request(&self, parent_id: &str, cursor: Option<Cursor>) -> DynamicFieldsRequest {
        DynamicFieldsRequest {
            parent_id: parent_id.to_string(),
            cursor,
            limit: self.page_limit,
        }
    }

    /// Fetch every page and return the concatenated fields in page order
    #[instrument(skip(self), fields(page_limit = ?self.page_limit))]
    pub async fn collect(
        &self,
        parent_id: &str,
    ) -> Result<Vec<DynamicFieldDescriptor>, S::Error> {
        let mut fields = Vec::new();
        let mut cursor: Option<Cursor> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .source
                .list_dynamic_fields(self.request(parent_id, cursor.take()))
                .await?;
            pages += 1;

            debug!(
                page = pages,
                fields = page.dynamic_fields.len(),
                has_next_page = page.has_next_page,
                "Fetched dynamic field page"
            );

            fields.extend(page.dynamic_fields);
            if !page.has_next_page {
                break;
            }

            if page.cursor.is_none() {
                warn!(
                    parent_id,
                    page = pages,
                    "Page reports more results but carries no cursor"
                );
            }
            cursor = page.cursor;
        }

        debug!(pages, total = fields.len(), "Collected dynamic fields");
        Ok(fields)
    }

    /// Lazily fetch pages of `parent_id`.
    ///
    /// The stream ends after the final page or right after yielding an error.
    pub fn pages(
        &self,
        parent_id: impl Into<String>,
    ) -> impl Stream<Item = Result<DynamicFieldPage, S::Error>> + 'a
    where
        S::Error: 'a,
    {
        let source = self.source;
        let limit = self.page_limit;
        let parent_id = parent_id.into();

        // state: Some(cursor) while a request is due, None once the final page was seen
        stream::try_unfold(Some(None::<Cursor>), move |state| {
            let request = state.map(|cursor| DynamicFieldsRequest {
                parent_id: parent_id.clone(),
                cursor,
                limit,
            });

            async move {
                let Some(request) = request else {
                    return Ok::<_, S::Error>(None);
                };

                let parent_id = request.parent_id.clone();
                let page = source.list_dynamic_fields(request).await?;
                debug!(
                    %parent_id,
                    fields = page.dynamic_fields.len(),
                    has_next_page = page.has_next_page,
                    "Fetched dynamic field page"
                );

                let next = if page.has_next_page {
                    if page.cursor.is_none() {
                        warn!(%parent_id, "Page reports more results but carries no cursor");
                    }
                    Some(page.cursor.clone())
                } else {
                    None
                };
                Ok(Some((page, next)))
            }
        })
    }

    /// Lazily yield the fields of `parent_id` one at a time, in page order
    pub fn fields(
        &self,
        parent_id: impl Into<String>,
    ) -> impl Stream<Item = Result<DynamicFieldDescriptor, S::Error>> + 'a
    where
        S::Error: 'a,
    {
        self.pages(parent_id)
            .map_ok(|page| stream::iter(page.dynamic_fields.into_iter().map(Ok)))
            .try_flatten()
    }
}
