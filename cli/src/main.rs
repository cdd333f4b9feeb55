//! ideagraph CLI: load an idea graph and print any view level
//!
//! Logs go to stderr (`RUST_LOG`, default `info`) so stdout stays
//! machine-readable with `--format json`.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use ideagraph::{
    ClusterPresentation, CompanyFilter, EngineConfig, EngineStatus, FileSource, GraphSource, HttpSource,
    IdeaGraphEngine, Layout, MemoizedSource, NodeData, TitleCompanyExtractor, ViewEvent,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ideagraph", version, about = "Idea graph explorer")]
struct Cli {
    /// Graph payload: a JSON file path or the backend base URL
    #[arg(long, default_value = "graph.json", global = true, env = "IDEAGRAPH_SOURCE")]
    source: String,

    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Company filter entry (repeatable)
    #[arg(long = "company", global = true)]
    companies: Vec<String>,

    /// Draw the clusters level as regions holding their top ideas
    #[arg(long, global = true)]
    regions: bool,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster overview
    Clusters,
    /// Highest-degree ideas of a cluster
    Top { cluster: String },
    /// An idea and its direct connections
    Connected { cluster: String, idea: String },
    /// Every idea of a cluster
    All { cluster: String },
    /// Companies available at a level
    Companies {
        #[arg(long)]
        cluster: Option<String>,
        #[arg(long, requires = "cluster")]
        idea: Option<String>,
        /// Use the all-ideas scope of --cluster instead of its top ideas
        #[arg(long, requires = "cluster", conflicts_with = "idea")]
        all: bool,
    },
    /// Load statistics
    Status,
    /// Interactive navigation
    Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut engine = load(&cli.source, config).await?;
    if !cli.companies.is_empty() {
        engine.set_companies(cli.companies.iter().cloned().collect::<CompanyFilter>());
    }
    if cli.regions {
        engine.set_presentation(ClusterPresentation::Regions);
    }

    match cli.command {
        Commands::Clusters => print_layout(&engine, &cli.format),
        Commands::Top { cluster } => {
            navigate(&mut engine, &[ViewEvent::SelectCluster(cluster.into())])?;
            print_layout(&engine, &cli.format)
        }
        Commands::Connected { cluster, idea } => {
            navigate(
                &mut engine,
                &[ViewEvent::SelectCluster(cluster.into()), ViewEvent::SelectIdea(idea.into())],
            )?;
            print_layout(&engine, &cli.format)
        }
        Commands::All { cluster } => {
            navigate(&mut engine, &[ViewEvent::SelectCluster(cluster.into()), ViewEvent::ShowAll])?;
            print_layout(&engine, &cli.format)
        }
        Commands::Companies { cluster, idea, all } => {
            let mut events = Vec::new();
            if let Some(cluster) = cluster {
                events.push(ViewEvent::SelectCluster(cluster.into()));
            }
            if let Some(idea) = idea {
                events.push(ViewEvent::SelectIdea(idea.into()));
            }
            if all {
                events.push(ViewEvent::ShowAll);
            }
            navigate(&mut engine, &events)?;
            print_companies(&engine, &cli.format)
        }
        Commands::Status => print_status(&engine, &cli.format),
        Commands::Shell => run_shell(&mut engine, &cli.format),
    }
}

async fn load(source: &str, config: EngineConfig) -> Result<IdeaGraphEngine> {
    let ttl = Duration::from_secs(config.source.cache_ttl_secs);
    let inner: Box<dyn GraphSource> = if source.starts_with("http://") || source.starts_with("https://") {
        let timeout = Duration::from_secs(config.source.http_timeout_secs);
        Box::new(HttpSource::with_timeout(source, timeout)?)
    } else {
        Box::new(FileSource::new(source))
    };
    let source = MemoizedSource::new(inner, ttl);

    let mut engine = IdeaGraphEngine::new(config);
    if let EngineStatus::Unavailable { reason, fallback_link } =
        engine.load(&source, &TitleCompanyExtractor::new()).await
    {
        bail!("graph not available: {} (try {})", reason, fallback_link);
    }
    Ok(engine)
}

/// Apply events in order, failing if one leaves the expected level
fn navigate(engine: &mut IdeaGraphEngine, events: &[ViewEvent]) -> Result<()> {
    for event in events {
        let before = engine.state().clone();
        engine.handle(event);
        let reached = match event {
            ViewEvent::SelectCluster(id) => engine.state().focused_cluster() == Some(id),
            ViewEvent::SelectIdea(id) => engine.state().focused_idea() == Some(id),
            _ => engine.state() != &before,
        };
        if !reached {
            bail!("cannot apply {:?} at {}", event, before.level());
        }
    }
    Ok(())
}

fn print_layout(engine: &IdeaGraphEngine, format: &OutputFormat) -> Result<()> {
    let layout = engine.layout();
    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "state": engine.state(),
                "visibleIdeas": engine.visible_idea_count(),
                "layout": layout,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => {
            println!("{} ({} ideas visible)", engine.state().level(), engine.visible_idea_count());
            print_nodes(layout);
            print_edges(layout);
        }
    }
    Ok(())
}

fn print_nodes(layout: &Layout) {
    if layout.nodes.is_empty() {
        println!("(no nodes)");
        return;
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["id", "x", "y", "size", "label", "count"]);
    for node in &layout.nodes {
        let (label, count) = match &node.data {
            NodeData::Cluster { cluster } | NodeData::Region { cluster, .. } => {
                (cluster.name.clone(), cluster.idea_count.to_string())
            }
            NodeData::Idea { idea, rank, focused, .. } => {
                let marker = if *focused { "* " } else { "" };
                (
                    format!("{}{}", marker, idea.summary),
                    rank.map(|r| format!("#{}", r)).unwrap_or_default(),
                )
            }
        };
        table.add_row(vec![
            node.id.clone(),
            format!("{:.1}", node.position.x),
            format!("{:.1}", node.position.y),
            format!("{:?}", node.size).to_lowercase(),
            label,
            count,
        ]);
    }
    println!("{}", table);
    println!("{} node(s)", layout.nodes.len());
}

fn print_edges(layout: &Layout) {
    if layout.edges.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["id", "source", "target", "handles", "kind", "width"]);
    for edge in &layout.edges {
        table.add_row(vec![
            edge.id.clone(),
            edge.source.clone(),
            edge.target.clone(),
            format!("{} -> {}", edge.source_handle, edge.target_handle),
            format!("{:?}", edge.kind).to_lowercase(),
            format!("{:.2}", edge.style.stroke_width),
        ]);
    }
    println!("{}", table);
    println!("{} edge(s)", layout.edges.len());
}

fn print_companies(engine: &IdeaGraphEngine, format: &OutputFormat) -> Result<()> {
    let companies = engine.available_companies();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&companies)?),
        OutputFormat::Table => {
            for company in &companies {
                let marker = if engine.filter().contains(company) { "[x]" } else { "[ ]" };
                println!("{} {}", marker, company);
            }
            println!("{} compan(ies)", companies.len());
        }
    }
    Ok(())
}

fn print_status(engine: &IdeaGraphEngine, format: &OutputFormat) -> Result<()> {
    let stats = engine.store().statistics();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Table => {
            println!("Ideas:       {}", stats.ideas);
            println!("Clusters:    {}", stats.clusters);
            println!("Connections: {}", stats.connections);
            println!("Skipped:     {}", stats.skipped_connections);
            println!("Unclustered: {}", stats.unclustered_ideas);
            println!("Companies:   {}", stats.companies);
        }
    }
    Ok(())
}

fn run_shell(engine: &mut IdeaGraphEngine, format: &OutputFormat) -> Result<()> {
    println!("Idea graph shell");
    println!("Type :help for commands. :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("{}> ", engine.state().level());

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (command, arg) = match trimmed.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (trimmed, ""),
        };

        let result = match command {
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :cluster <id>   Open a cluster's top ideas");
                println!("  :idea <id>      Open an idea's connections");
                println!("  :all            Show every idea of the cluster");
                println!("  :back           Go up one level");
                println!("  :home           Back to clusters");
                println!("  :company <name> Toggle a company filter entry");
                println!("  :clear          Clear the company filter");
                println!("  :companies      List available companies");
                println!("  :regions        Toggle the clusters presentation");
                println!("  :inspect <id>   Show an idea's details");
                println!("  :quit           Exit shell");
                Ok(())
            }
            ":cluster" => step(engine, ViewEvent::SelectCluster(arg.into()), format),
            ":idea" => step(engine, ViewEvent::SelectIdea(arg.into()), format),
            ":all" => step(engine, ViewEvent::ShowAll, format),
            ":back" => step(engine, ViewEvent::Back, format),
            ":home" => step(engine, ViewEvent::BackToClusters, format),
            ":company" => {
                engine.toggle_company(arg);
                print_layout(engine, format)
            }
            ":clear" => {
                engine.clear_companies();
                print_layout(engine, format)
            }
            ":companies" => print_companies(engine, format),
            ":regions" => {
                let next = match engine.presentation() {
                    ClusterPresentation::Bubbles => ClusterPresentation::Regions,
                    ClusterPresentation::Regions => ClusterPresentation::Bubbles,
                };
                engine.set_presentation(next);
                print_layout(engine, format)
            }
            ":inspect" => {
                if engine.inspect(&arg.into()) {
                    print_inspected(engine)
                } else {
                    eprintln!("Unknown idea: {}", arg);
                    Ok(())
                }
            }
            other => {
                eprintln!("Unknown command: {}", other);
                Ok(())
            }
        };
        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }

    println!("Bye!");
    Ok(())
}

fn step(engine: &mut IdeaGraphEngine, event: ViewEvent, format: &OutputFormat) -> Result<()> {
    if !engine.handle(&event) {
        eprintln!("(no change)");
        return Ok(());
    }
    print_layout(engine, format)
}

fn print_inspected(engine: &IdeaGraphEngine) -> Result<()> {
    if let Some(idea) = engine.inspected() {
        println!("{}", idea.summary);
        if !idea.full_context.is_empty() {
            println!("\n{}\n", idea.full_context);
        }
        println!("{} | {}", idea.guest, idea.episode_title);
        if !idea.youtube_deep_link.is_empty() {
            println!("{}", idea.youtube_deep_link);
        }
    }
    Ok(())
}
