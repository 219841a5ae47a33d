use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use content_loader::ContentItem;
use portal::{LandingView, PortalConfig, PortalOrchestrator, PortalView, ResultsView};
use search_state::{
    parse_date_bound, parse_url, state_to_query, Dimension, FilterState, SearchContext, SortMode,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;
use url::Url;

/// Portal Search - filter, search and sort the news portal collection
#[derive(Parser)]
#[command(name = "portal-search")]
#[command(about = "Search and browse the news portal content collection", long_about = None)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the content fixture (JSON array of items)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Number of highlighted top matches
    #[arg(long)]
    top_matches: Option<usize>,

    /// Page URL; `parentTopic` and `disableRegions` are read from it
    #[arg(long, default_value = "/")]
    url: String,

    /// Print views as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search and print the results (or the landing page if nothing is active)
    Search(SearchArgs),

    /// Print the landing page sections
    Landing,

    /// Select a parent topic as the "view all" link does and print the results
    ViewAll {
        /// Parent topic name, e.g. "Operations"
        parent: String,
    },

    /// List parent topics, subtopics and regions
    Taxonomy,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Free text query
    #[arg(default_value = "")]
    query: String,

    /// Region to filter by (repeatable)
    #[arg(long = "region")]
    regions: Vec<String>,

    /// Parent topic to filter by (repeatable); one already selected by --url stays selected
    #[arg(long = "topic")]
    topics: Vec<String>,

    /// Subtopic to filter by (repeatable)
    #[arg(long = "subtopic")]
    subtopics: Vec<String>,

    /// Sort order: latest or bestMatch
    #[arg(long, default_value = "latest")]
    sort: String,

    /// Earliest date, YYYY-MM-DD or DD/MM/YYYY
    #[arg(long)]
    from: Option<String>,

    /// Latest date, YYYY-MM-DD or DD/MM/YYYY
    #[arg(long)]
    to: Option<String>,

    /// Drop an active filter by its chip label, e.g. "Heritage" (repeatable)
    #[arg(long = "remove-chip")]
    remove_chips: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PortalConfig::from_file(path)?,
        None => PortalConfig::default(),
    };
    if let Some(path) = cli.content {
        config = config.with_content_path(path);
    }
    if let Some(top_matches) = cli.top_matches {
        config = config.with_top_matches(top_matches);
    }
    let url = parse_url(&cli.url).with_context(|| format!("Invalid URL '{}'", cli.url))?;

    info!("Loading content from {}", config.content_path.display());
    let start = Instant::now();
    let orchestrator = PortalOrchestrator::load(config).await?;
    // Keep stdout clean for --json
    if !cli.json {
        println!(
            "{} Loaded {} items in {:?}",
            "✓".green(),
            orchestrator.content().len(),
            start.elapsed()
        );
    }

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search(args) => handle_search(&orchestrator, &url, args, cli.json)?,
        Commands::Landing => print_view(&PortalView::Landing(orchestrator.landing()), cli.json)?,
        Commands::ViewAll { parent } => handle_view_all(&orchestrator, &url, &parent, cli.json)?,
        Commands::Taxonomy => handle_taxonomy(&orchestrator),
        Commands::Benchmark { requests } => handle_benchmark(orchestrator, requests).await?,
    }

    Ok(())
}

/// Build the filter state from the command line on top of what the URL says
fn build_filters(orchestrator: &PortalOrchestrator, url: &Url, args: &SearchArgs) -> Result<FilterState> {
    let taxonomy = orchestrator.taxonomy();
    let mut filters = orchestrator.session_start(url);

    for region in &args.regions {
        let region = taxonomy.canonical_region(region)?;
        filters = filters.toggle(taxonomy, Dimension::Region, region);
    }
    for topic in &args.topics {
        let topic = taxonomy.canonical_parent(topic)?;
        if !filters.parent_topics().any(|selected| selected == topic) {
            filters = filters.toggle(taxonomy, Dimension::ParentTopic, topic);
        }
    }
    for subtopic in &args.subtopics {
        let subtopic = taxonomy.canonical_subtopic(subtopic)?;
        filters = filters.toggle(taxonomy, Dimension::Subtopic, subtopic);
    }

    let sort: SortMode = args.sort.parse()?;
    filters = filters.with_sort(sort);

    if args.from.is_some() || args.to.is_some() {
        let from = args.from.as_deref().map(parse_date_bound).transpose()?;
        let to = args.to.as_deref().map(parse_date_bound).transpose()?;
        filters = filters.with_date_range(from, to)?;
    }

    for label in &args.remove_chips {
        let chip = filters
            .active_chips(false)
            .into_iter()
            .find(|chip| chip.to_string().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| anyhow!("No active filter '{}'", label))?;
        filters = filters.remove_chip(taxonomy, &chip);
    }

    Ok(filters)
}

/// Handle the 'search' command
fn handle_search(orchestrator: &PortalOrchestrator, url: &Url, args: SearchArgs, json: bool) -> Result<()> {
    let filters = build_filters(orchestrator, url, &args)?;
    let next_url = state_to_query(&filters, url);

    let view = orchestrator.view(&args.query, filters, url)?;
    print_view(&view, json)?;

    if !json {
        println!("{} {}", "URL:".dimmed(), display_url(&next_url));
    }
    Ok(())
}

/// Handle the 'view-all' command
fn handle_view_all(orchestrator: &PortalOrchestrator, url: &Url, parent: &str, json: bool) -> Result<()> {
    let filters = orchestrator.session_start(url);
    let (filters, next_url) = orchestrator.view_all(parent, filters, url)?;

    let view = orchestrator.view("", filters, &next_url)?;
    print_view(&view, json)?;

    if !json {
        println!("{} {}", "URL:".dimmed(), display_url(&next_url));
    }
    Ok(())
}

/// Handle the 'taxonomy' command
fn handle_taxonomy(orchestrator: &PortalOrchestrator) {
    let taxonomy = orchestrator.taxonomy();

    println!("{}", "Topics:".bold().blue());
    for group in taxonomy.groups() {
        let category = group
            .category
            .map(|c| format!(" (category: {})", c))
            .unwrap_or_default();
        println!("{}{}{}", "• ".green(), group.name.bold(), category.dimmed());
        for subtopic in &group.subtopics {
            println!("    - {}", subtopic);
        }
    }

    println!("{}", "Regions:".bold().blue());
    for region in taxonomy.regions() {
        println!("{}{}", "• ".green(), region);
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(orchestrator: PortalOrchestrator, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("Benchmark needs at least one request");
    }

    // Query words are drawn from the loaded titles
    let words: Vec<String> = orchestrator
        .content()
        .items()
        .iter()
        .flat_map(|item| item.title.split_whitespace())
        .filter(|word| word.len() > 3)
        .map(|word| word.to_lowercase())
        .collect();
    if words.is_empty() {
        return Err(anyhow!("No content loaded; nothing to benchmark"));
    }
    let regions = orchestrator.taxonomy().regions().to_vec();

    let contexts: Vec<SearchContext> = (0..requests)
        .map(|i| {
            let word = &words[rand::random::<u32>() as usize % words.len()];
            let mut filters = FilterState::new();
            if i % 2 == 1 {
                let region = &regions[rand::random::<u32>() as usize % regions.len()];
                filters = filters.toggle(orchestrator.taxonomy(), Dimension::Region, region);
            }
            SearchContext::new(word.clone(), filters)
        })
        .collect();

    let wall_clock = Instant::now();
    let mut handles = vec![];
    for context in contexts {
        let orchestrator = orchestrator.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            orchestrator.results(&context)?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let wall_time = wall_clock.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / wall_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", requests);
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn print_view(view: &PortalView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view).context("Failed to encode view")?);
        return Ok(());
    }
    match view {
        PortalView::Landing(landing) => print_landing(landing),
        PortalView::Results(results) => print_results(results),
    }
    Ok(())
}

fn print_results(results: &ResultsView) {
    let title = if results.query.trim().is_empty() {
        "Search results".to_string()
    } else {
        format!("Search results for '{}'", results.query.trim())
    };
    println!("{} ({} found, sorted by {})", title.bold().blue(), results.total, results.sort_by);

    if !results.chips.is_empty() {
        let chips: Vec<String> = results.chips.iter().map(|chip| format!("[{} ✕]", chip)).collect();
        println!("{}", chips.join(" ").yellow());
    }
    if results.is_empty() {
        println!("{}", "No results. Try a different search or clear the filters.".dimmed());
        return;
    }

    println!("{}", "Top matches:".bold());
    for (i, item) in results.top_matches.iter().enumerate() {
        print_item(i + 1, item);
    }
    if !results.all_matches.is_empty() {
        println!("{}", "All matches:".bold());
        let offset = results.top_matches.len();
        for (i, item) in results.all_matches.iter().enumerate() {
            print_item(offset + i + 1, item);
        }
    }
}

fn print_landing(landing: &LandingView) {
    if let Some(featured) = &landing.featured {
        println!("{}", "Featured:".bold().blue());
        print_item(1, featured);
    }
    let sections = [
        ("News and features", &landing.news_grid),
        ("Operations", &landing.operations),
        ("Equipment & Technology", &landing.equipment),
        ("For you", &landing.for_you),
    ];
    for (name, items) in sections {
        if items.is_empty() {
            continue;
        }
        println!("{}", format!("{}:", name).bold().blue());
        for (i, item) in items.iter().enumerate() {
            print_item(i + 1, item);
        }
    }
}

fn print_item(rank: usize, item: &ContentItem) {
    let date = item
        .date
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "undated".to_string());
    println!(
        "{}. {} [{}] {}",
        rank.to_string().green(),
        item.title,
        item.category,
        date.dimmed()
    );
    if !item.tags.is_empty() {
        println!("   {}", item.tags.join(", ").dimmed());
    }
}

/// Path and query only; the host is a placeholder for relative URLs
fn display_url(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_loader::ContentIndex;
    use search_state::Taxonomy;
    use std::sync::Arc;

    fn build_test_orchestrator() -> PortalOrchestrator {
        PortalOrchestrator::new(
            Arc::new(ContentIndex::new()),
            Arc::new(Taxonomy::builtin()),
            PortalConfig::default(),
        )
    }

    fn search_args() -> SearchArgs {
        SearchArgs {
            query: String::new(),
            regions: vec![],
            topics: vec![],
            subtopics: vec![],
            sort: "latest".to_string(),
            from: None,
            to: None,
            remove_chips: vec![],
        }
    }

    #[test]
    fn test_topic_flag_keeps_parent_from_url() {
        let orchestrator = build_test_orchestrator();
        let url = parse_url("/?parentTopic=Heritage").unwrap();
        let args = SearchArgs {
            topics: vec!["heritage".to_string(), "People".to_string()],
            ..search_args()
        };

        let filters = build_filters(&orchestrator, &url, &args).unwrap();
        assert_eq!(filters.parent_topics().collect::<Vec<_>>(), vec!["Heritage", "People"]);
    }

    #[test]
    fn test_remove_chip_flag() {
        let orchestrator = build_test_orchestrator();
        let url = parse_url("/?parentTopic=Heritage").unwrap();
        let args = SearchArgs {
            regions: vec!["asia".to_string()],
            from: Some("2024-01-01".to_string()),
            remove_chips: vec!["heritage".to_string(), "from 2024-01-01".to_string()],
            ..search_args()
        };

        let filters = build_filters(&orchestrator, &url, &args).unwrap();
        assert!(filters.topics().is_empty());
        assert!(filters.date_range().is_none());
        assert_eq!(filters.regions(), &["Asia".to_string()]);
        assert_eq!(state_to_query(&filters, &url).query(), None, "parentTopic dropped from the URL");
    }

    #[test]
    fn test_remove_chip_unknown_label() {
        let orchestrator = build_test_orchestrator();
        let args = SearchArgs {
            remove_chips: vec!["Nonsense".to_string()],
            ..search_args()
        };
        assert!(build_filters(&orchestrator, &parse_url("/").unwrap(), &args).is_err());
    }
}
