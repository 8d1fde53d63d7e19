use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use shorts_ideagen::config::{default_config_path, GeneratorConfig};
use shorts_ideagen::random::RngSource;
use shorts_ideagen::{server, synthesize_with, IdeaRecord};

#[derive(Parser)]
#[command(name = "shorts-ideagen", about = "Short-form video idea generator")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    Serve(ServeArgs),
    Niches,
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    #[arg(long)]
    niche: String,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long)]
    web_root: Option<String>,
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long)]
    path: Option<PathBuf>,
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args, &load_config(cli.config)?),
        Command::Serve(args) => run_serve(args, load_config(cli.config)?).await,
        Command::Niches => {
            for niche in load_config(cli.config)?.catalog().niches() {
                println!("{}", niche);
            }
            Ok(())
        }
        Command::InitConfig(args) => run_init_config(args, cli.config),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<GeneratorConfig, String> {
    let (config, config_path) = GeneratorConfig::load(path)?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        tracing::debug!(path = %path.display(), "loaded config");
    }
    Ok(config)
}

fn run_generate(args: GenerateArgs, config: &GeneratorConfig) -> Result<(), String> {
    let niche = args.niche.trim();
    if niche.is_empty() {
        return Err("Please enter a niche or topic".to_string());
    }

    let catalog = config.catalog();
    let ideas = match args.seed {
        Some(seed) => synthesize_with(&catalog, niche, &mut RngSource::seeded(seed)),
        None => synthesize_with(&catalog, niche, &mut RngSource::from_entropy()),
    };

    if args.json {
        let payload = serde_json::to_string_pretty(&serde_json::json!({ "ideas": ideas }))
            .map_err(|err| format!("failed to serialize ideas: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    for (idx, idea) in ideas.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_idea(idx, idea);
    }
    Ok(())
}

fn print_idea(idx: usize, idea: &IdeaRecord) {
    let badge = if idea.trending { " [TRENDING]" } else { "" };
    println!("#{} {}{}", idx + 1, idea.title, badge);
    println!("Viral score: {}%", idea.viral_score);
    println!("Hook: {}", idea.hook);
    println!("\nScript:\n{}", idea.script);
    println!("\nThumbnail: {}", idea.thumbnail);
    println!(
        "Best time: {} | Duration: {}",
        idea.optimization.best_time, idea.optimization.duration
    );
    println!("Tips:");
    for tip in &idea.optimization.tips {
        println!("- {}", tip);
    }
    println!("Hashtags: {}", idea.hashtags.join(" "));
}

async fn run_serve(args: ServeArgs, mut config: GeneratorConfig) -> Result<(), String> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(web_root) = args.web_root {
        config.server.web_root = Some(web_root);
    }
    if let Some(delay_ms) = args.delay_ms {
        config.server.response_delay_ms = delay_ms;
    }

    let catalog = config.catalog();
    server::serve(&config.server, catalog).await
}

fn run_init_config(args: InitConfigArgs, global: Option<PathBuf>) -> Result<(), String> {
    let path = args
        .path
        .or(global)
        .or_else(default_config_path)
        .ok_or_else(|| "no config path available".to_string())?;
    if path.exists() && !args.force {
        return Err(format!(
            "config already exists at {} (pass --force to overwrite)",
            path.display()
        ));
    }
    GeneratorConfig::default().write(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
