//! Explorer session
//!
//! Owns the stores and ports and runs the query cycle:
//! 1. Issue a ticket for the request
//! 2. Acquire a location fix iff the preference is enabled
//! 3. Submit the prompt with current-visualization context and history
//! 4. Apply the response iff the ticket is still the latest
//! 5. Append the conversation turn, derive the About Data panel, render
//!
//! A transport failure leaves the stored result untouched; a stale
//! response is dropped without rendering.

use crate::client::QueryClient;
use crate::config::SessionConfig;
use crate::error::ClientError;
use crate::location::{acquire_location, LocationProvider};
use vq_describe::{build_about, ChartPort, RenderPort};
use vq_model::{CurrentVisualization, QueryContext, QueryRequest, QueryResult};
use vq_schema::SchemaStore;
use vq_state::{ClientPrefs, ResultStore};

/// The explorer session: single owner of client-side state
pub struct ExplorerSession<P> {
    config: SessionConfig,
    client: QueryClient,
    schema: SchemaStore,
    store: ResultStore,
    prefs: ClientPrefs,
    location: Option<Box<dyn LocationProvider>>,
    panel: P,
}

impl<P> ExplorerSession<P>
where
    P: RenderPort + ChartPort,
{
    /// Create a session from configuration and a panel implementation
    #[must_use]
    pub fn new(config: SessionConfig, panel: P) -> Self {
        Self {
            client: QueryClient::new(config.api_url.clone()),
            schema: SchemaStore::new(config.schema_url.clone()),
            store: ResultStore::with_history_limit(config.history_limit),
            prefs: ClientPrefs::new(config.prefs_dir.clone()),
            location: None,
            config,
            panel,
        }
    }

    /// With a location provider
    #[must_use]
    pub fn with_location_provider(mut self, provider: Box<dyn LocationProvider>) -> Self {
        self.location = Some(provider);
        self
    }

    /// Submit one natural-language query and render the outcome
    ///
    /// Returns whether the response was applied; `Ok(false)` means a newer
    /// request superseded this one while it was in flight.
    ///
    /// # Errors
    /// `ClientError::Transport` when the backend is unreachable or the
    /// payload undecodable. The stored result is untouched in that case.
    pub async fn ask(&mut self, prompt: &str) -> Result<bool, ClientError> {
        let ticket = self.store.issue_ticket();
        tracing::info!("submitting query");

        let location_enabled = self.prefs.location_enabled();
        let location = match &self.location {
            Some(provider) if location_enabled => {
                acquire_location(provider.as_ref(), self.config.location_timeout).await
            }
            _ => None,
        };

        let context = QueryContext {
            current_visualization: CurrentVisualization::from_result(&self.store.current()),
            conversation_history: self.store.history(),
            location_enabled,
        };
        let mut request = QueryRequest::new(prompt).with_context(context);
        if let Some(point) = location {
            request = request.with_location(point);
        }

        let response = self.client.submit(&request).await?;

        if !self.store.apply_if_latest(ticket, response) {
            return Ok(false);
        }

        let result = self.store.current();
        self.store
            .append_turn(prompt, result.text_response.clone().unwrap_or_default());
        self.render(&result).await;
        Ok(true)
    }

    /// Run the one-shot startup query, if one was stashed
    ///
    /// # Errors
    /// Propagates the transport error from [`ExplorerSession::ask`].
    pub async fn run_initial_query(&mut self) -> Result<bool, ClientError> {
        match self.prefs.take_initial_query() {
            Some(query) => self.ask(&query).await,
            None => Ok(false),
        }
    }

    /// Re-derive the About Data panel and redraw without a new query
    pub async fn refresh(&mut self) {
        let result = self.store.current();
        self.render(&result).await;
    }

    async fn render(&mut self, result: &QueryResult) {
        let schema = self.schema.load().await;
        let about = build_about(&result.aggregation, &result.insights, &schema);
        for view in about.sections() {
            self.panel.render_section(view);
        }
        self.panel.render_chart(result);
    }

    /// The result store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// The schema store
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &SchemaStore {
        &self.schema
    }

    /// The client preferences
    #[inline]
    #[must_use]
    pub fn prefs(&self) -> &ClientPrefs {
        &self.prefs
    }

    /// The panel implementation
    #[inline]
    #[must_use]
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// The session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
