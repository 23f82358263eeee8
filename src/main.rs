use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use og_preview::{
    config::{Config, defaults::DEFAULT_CONFIG_FILE},
    layouts::{LayoutRegistry, PropertyKind, RenderEnv, parse_assignments},
    logo_assets::{LogoId, LogoResolver, RenderContext, logo_options},
    models::AuthorDirectory,
};

#[derive(Parser)]
#[command(name = "og-preview")]
#[command(version)]
#[command(about = "Render Open Graph preview card descriptions")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding logo SVGs (overrides config file)
    #[arg(long, value_name = "DIR")]
    asset_dir: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available logos
    Logos,

    /// List layouts and the fields they accept
    Layouts {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a logo to the reference a card would embed
    Resolve {
        logo: LogoId,

        /// Rendering context: server or client
        #[arg(long, default_value = "client")]
        context: RenderContext,
    },

    /// Render a layout to its card description (JSON)
    Render {
        layout: String,

        /// Field assignment, repeatable
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,

        /// Rendering context: server or client
        #[arg(long, default_value = "client")]
        context: RenderContext,

        /// Do not start from the layout's default field values
        #[arg(long)]
        no_defaults: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = format!("og_preview={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load_from_file(&cli.config)?;
    if let Some(asset_dir) = cli.asset_dir {
        config.assets.asset_dir = asset_dir;
    }
    debug!("Using asset directory: {}", config.assets.asset_dir.display());

    let resolver = LogoResolver::from_config(&config.assets);
    let authors = AuthorDirectory::new(config.authors.default_avatar.clone());
    let registry = LayoutRegistry::builtin();

    match cli.command {
        Commands::Logos => {
            for option in logo_options() {
                println!("{:<18} {}", option.value, option.label);
            }
        }
        Commands::Layouts { json } => print_layouts(&registry, json)?,
        Commands::Resolve { logo, context } => {
            println!("{}", resolver.resolve(logo, context));
        }
        Commands::Render {
            layout,
            fields,
            context,
            no_defaults,
        } => {
            let layout = registry.get(&layout)?;
            let mut values = if no_defaults {
                Default::default()
            } else {
                layout.default_fields()
            };
            values.extend(parse_assignments(&fields)?);

            info!("Rendering {} card for {} context", layout.name(), context);
            let env = RenderEnv::new(&resolver, &authors, context);
            let card = layout.render(&values, &env)?;
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
    }

    Ok(())
}

fn print_layouts(registry: &LayoutRegistry, json: bool) -> Result<()> {
    if json {
        let listing: Vec<_> = registry
            .iter()
            .map(|layout| {
                serde_json::json!({
                    "name": layout.name(),
                    "properties": layout.properties(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for layout in registry.iter() {
        println!("{}", layout.name());
        for property in layout.properties() {
            let kind = match &property.kind {
                PropertyKind::Text { .. } => "text".to_string(),
                PropertyKind::Select { options } => format!("select [{}]", options.join("|")),
            };
            match &property.default {
                Some(default) => {
                    println!("  {:<10} {} (default: {:?})", property.name, kind, default)
                }
                None => println!("  {:<10} {}", property.name, kind),
            }
        }
    }
    Ok(())
}
