//! # Portal Orchestrator
//!
//! This module coordinates one page render:
//! 1. Load the content fixture once, on a blocking task
//! 2. Seed the filter state from the page URL
//! 3. Decide between the landing and results layouts
//! 4. Filter, sort and partition the collection for the results layout
//! 5. Fill the landing sections otherwise

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info};
use url::Url;

use content_loader::{Category, ContentIndex, ContentItem};
use pipeline::{is_search_active, partition, sort_items, FilterPipeline};
use search_state::{query_to_state, read_params, state_to_query, FilterState, SearchContext, Taxonomy};

use crate::config::PortalConfig;
use crate::views::{LandingView, PortalView, ResultsView};

/// Coordinates the content index, the taxonomy and the search pipeline
#[derive(Clone)]
pub struct PortalOrchestrator {
    content: Arc<ContentIndex>,
    taxonomy: Arc<Taxonomy>,
    filter_pipeline: Arc<FilterPipeline>,
    config: PortalConfig,
}

impl PortalOrchestrator {
    /// Build an orchestrator over an already-loaded index
    pub fn new(content: Arc<ContentIndex>, taxonomy: Arc<Taxonomy>, config: PortalConfig) -> Self {
        let filter_pipeline = Arc::new(FilterPipeline::standard(taxonomy.clone()));
        Self {
            content,
            taxonomy,
            filter_pipeline,
            config,
        }
    }

    /// Load the fixture named by `config` and build the orchestrator.
    ///
    /// A fixture that cannot be read or parsed leaves the portal with an
    /// empty collection. Only a panicked load task is an error.
    pub async fn load(config: PortalConfig) -> Result<Self> {
        let start_time = Instant::now();
        let path = config.content_path.clone();

        let loaded = tokio::task::spawn_blocking(move || ContentIndex::load_from_file(&path))
            .await
            .context("Content load task panicked")?;

        let content = match loaded {
            Ok(index) => {
                info!(
                    "Loaded {} content items from {:?} in {:.2?}",
                    index.len(),
                    config.content_path,
                    start_time.elapsed()
                );
                index
            }
            Err(e) => {
                error!(
                    "Failed to load content from {:?}, continuing with an empty collection: {}",
                    config.content_path, e
                );
                ContentIndex::new()
            }
        };

        Ok(Self::new(
            Arc::new(content),
            Arc::new(Taxonomy::builtin()),
            config,
        ))
    }

    pub fn content(&self) -> &ContentIndex {
        &self.content
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Filter state for a page opened at `url`
    pub fn session_start(&self, url: &Url) -> FilterState {
        self.navigate(url, FilterState::new())
    }

    /// Follow a URL change. Only the parent topic follows the URL.
    pub fn navigate(&self, url: &Url, filters: FilterState) -> FilterState {
        query_to_state(url, &self.taxonomy, filters)
    }

    /// "View all" on a landing section: select `parent` and write it to the URL
    pub fn view_all(&self, parent: &str, filters: FilterState, url: &Url) -> Result<(FilterState, Url)> {
        let canonical = self.taxonomy.canonical_parent(parent)?;
        let filters = filters.with_parent_topic(&self.taxonomy, Some(canonical));
        let next_url = state_to_query(&filters, url);
        info!("View all '{}' -> {}", canonical, next_url);
        Ok((filters, next_url))
    }

    /// Render the page for `query` and `filters` at `url`
    pub fn view(&self, query: &str, filters: FilterState, url: &Url) -> Result<PortalView> {
        let params = read_params(url);
        let context = SearchContext::new(query, filters).with_regions_disabled(params.disable_regions);

        if is_search_active(&context) {
            Ok(PortalView::Results(self.results(&context)?))
        } else {
            Ok(PortalView::Landing(self.landing()))
        }
    }

    /// Build the results layout for a search
    pub fn results(&self, context: &SearchContext) -> Result<ResultsView> {
        let start_time = Instant::now();

        let mut matches = self
            .filter_pipeline
            .apply(self.content.items(), context)
            .context("Failed to apply filters")?;
        sort_items(&mut matches, context.filters.sort_by());

        let (top, rest) = partition(&matches, self.config.top_matches);
        let view = ResultsView {
            query: context.query.clone(),
            total: matches.len(),
            sort_by: context.filters.sort_by(),
            chips: context.filters.active_chips(context.regions_disabled),
            top_matches: owned(top),
            all_matches: owned(rest),
        };

        info!(
            "Built results view: {} matches ({} top) for query '{}' in {:.2?}",
            view.total,
            view.top_matches.len(),
            context.query,
            start_time.elapsed()
        );
        Ok(view)
    }

    /// Build the landing layout
    pub fn landing(&self) -> LandingView {
        let sizes = &self.config.landing;
        let featured = self.content.featured();
        let featured_id = featured.map(|item| item.id);

        let news_grid = self
            .content
            .items()
            .iter()
            .filter(|item| Some(item.id) != featured_id)
            .take(sizes.news_grid)
            .cloned()
            .collect();
        let rail = |category: Category| -> Vec<ContentItem> {
            self.content
                .items_by_category(category)
                .into_iter()
                .take(sizes.rail)
                .cloned()
                .collect()
        };

        let view = LandingView {
            featured: featured.cloned(),
            news_grid,
            operations: rail(Category::Operations),
            equipment: rail(Category::Equipment),
            for_you: self.content.for_you().take(sizes.for_you).cloned().collect(),
        };
        info!(
            "Built landing view: {} grid, {} operations, {} equipment, {} for you",
            view.news_grid.len(),
            view.operations.len(),
            view.equipment.len(),
            view.for_you.len()
        );
        view
    }
}

fn owned(items: &[&ContentItem]) -> Vec<ContentItem> {
    items.iter().map(|item| (*item).clone()).collect()
}
