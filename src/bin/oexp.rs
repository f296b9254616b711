//! CLI entry point for the `oexp` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use osint_explorer::chart::LayoutMode;
use osint_explorer::cli::commands::{self, ChartArgs};
use osint_explorer::config::ThemeConfig;
use osint_explorer::types::{ExplorerError, DEFAULT_ROOT_NAME};

#[derive(Parser)]
#[command(
    name = "oexp",
    about = "OSINT Explorer CLI: build, annotate, search and chart OSINT resource trees"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Theme file (TOML) with icon and colour tables
    #[arg(long)]
    theme: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree document from category directories
    Build {
        /// Directory holding NN-name category folders
        dir: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Name of the root node
        #[arg(long, default_value = DEFAULT_ROOT_NAME)]
        root_name: String,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Write the annotated tree
    Annotate {
        /// Path to the tree document
        file: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List the categories
    Categories {
        /// Path to the tree document
        file: PathBuf,
    },
    /// Print the search index
    Index {
        /// Path to the tree document
        file: PathBuf,
    },
    /// Search node names and descriptions
    Search {
        /// Path to the tree document
        file: PathBuf,
        /// Text to look for (at least 2 characters)
        query: String,
        /// Restrict to a category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Show the path from the root to a node
    Path {
        /// Path to the tree document
        file: PathBuf,
        /// Original node name
        name: String,
    },
    /// Write the tree restricted to some categories
    Project {
        /// Path to the tree document
        file: PathBuf,
        /// Category to keep (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Write the chart option document
    Chart {
        /// Path to the tree document
        file: PathBuf,
        /// Layout: tree or radial
        #[arg(long, default_value = "tree")]
        layout: String,
        /// Hide node labels
        #[arg(long)]
        no_labels: bool,
        /// Dark colour scheme
        #[arg(long)]
        dark: bool,
        /// Expand and select the path to this node
        #[arg(long)]
        highlight: Option<String>,
        /// Category to keep (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Tree statistics
    Stats {
        /// Path to the tree document
        file: PathBuf,
    },
    /// Write the built-in theme to a TOML file
    ThemeInit {
        /// Path of the theme file to create
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let theme = match ThemeConfig::load_or_default(cli.theme.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    };

    let result = match cli.command {
        Commands::Build {
            dir,
            out,
            root_name,
            pretty,
        } => commands::cmd_build(&dir, out.as_deref(), &root_name, pretty),
        Commands::Annotate { file, out, pretty } => {
            commands::cmd_annotate(&file, &theme, out.as_deref(), pretty)
        }
        Commands::Categories { file } => commands::cmd_categories(&file, &theme, json),
        Commands::Index { file } => commands::cmd_index(&file, &theme, json),
        Commands::Search {
            file,
            query,
            categories,
        } => commands::cmd_search(&file, &theme, &query, &categories, json),
        Commands::Path { file, name } => commands::cmd_path(&file, &theme, &name, json),
        Commands::Project {
            file,
            categories,
            out,
            pretty,
        } => commands::cmd_project(&file, &theme, &categories, out.as_deref(), pretty),
        Commands::Chart {
            file,
            layout,
            no_labels,
            dark,
            highlight,
            categories,
            out,
            pretty,
        } => {
            let layout = match LayoutMode::from_name(&layout) {
                Some(l) => l,
                None => {
                    eprintln!("Invalid layout: {}", layout);
                    process::exit(3);
                }
            };
            commands::cmd_chart(
                &file,
                &theme,
                ChartArgs {
                    layout,
                    show_labels: !no_labels,
                    dark,
                    highlight: highlight.as_deref(),
                    categories: &categories,
                    out: out.as_deref(),
                    pretty,
                },
            )
        }
        Commands::Stats { file } => commands::cmd_stats(&file, &theme, json),
        Commands::ThemeInit { path } => commands::cmd_theme_init(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}

fn exit_code(e: &ExplorerError) -> i32 {
    match e {
        ExplorerError::Io(_) => 1,
        ExplorerError::Json(_)
        | ExplorerError::Yaml { .. }
        | ExplorerError::ConfigParse(_)
        | ExplorerError::ConfigWrite(_)
        | ExplorerError::InvalidDirectoryName(_)
        | ExplorerError::MissingTools(_) => 2,
        ExplorerError::InvalidArgument(_) => 3,
        ExplorerError::NodeNotFound(_) => 4,
    }
}
