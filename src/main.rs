mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rppgen_core::config::ConfigManager;
use tracing_subscriber::EnvFilter;

use commands::generate::GenerateArgs;
use commands::prompt::PromptArgs;
use commands::theme::ThemeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "rppgen",
    version,
    about = "Generator RPP Cerdas - membuat Rencana Pelaksanaan Pembelajaran dengan Gemini"
)]
struct Cli {
    /// Gemini model ID, e.g. gemini-2.5-flash (overrides rppgen.toml)
    #[arg(long, global = true)]
    model: Option<String>,

    /// API key env var to read (checks this, then GOOGLE_API_KEY)
    #[arg(long, global = true)]
    api_key_env: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill in the lesson-plan form and generate the RPP text
    Generate(GenerateArgs),

    /// Print the prompt that would be sent, without calling the API
    Prompt(PromptArgs),

    /// Show or change the persisted display theme
    Theme(ThemeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let manager = ConfigManager::load()?;
    let generator = manager.config().generator.clone();
    let model = cli.model.unwrap_or(generator.model);
    let api_key_env = cli.api_key_env.unwrap_or(generator.api_key_env);

    match cli.command.unwrap_or(Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => commands::generate::run(&model, &api_key_env, args).await,
        Commands::Prompt(args) => commands::prompt::run(args),
        Commands::Theme(args) => commands::theme::run(args),
    }
}
