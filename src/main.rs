use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hntrends::models::TrendReport;
use hntrends::output::render;
use hntrends::{
    ClaudeProvider, Config, GeminiProvider, HackerNewsClient, LLMProvider, OutputFormat,
    PipelineConfig, ProviderKind, TrendPipeline,
};

#[derive(Parser, Debug)]
#[command(name = "hntrends")]
#[command(version = "0.1.0")]
#[command(about = "Analyze Hacker News front-page trends for a topic")]
struct Args {
    /// Keyword to filter front-page titles by (case-insensitive)
    #[arg(default_value = "AI")]
    topic: String,

    /// LLM provider (gemini, claude); overrides LLM_PROVIDER
    #[arg(short, long)]
    provider: Option<String>,

    /// Model identifier; overrides LLM_MODEL
    #[arg(short, long)]
    model: Option<String>,

    /// Sampling temperature; overrides LLM_TEMPERATURE
    #[arg(short, long)]
    temperature: Option<f32>,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// List the matching stories before the analysis
    #[arg(long)]
    show_articles: bool,

    /// Disable the progress spinner
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("hntrends=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let provider_override = args
        .provider
        .as_deref()
        .map(str::parse::<ProviderKind>)
        .transpose()?;
    let format: OutputFormat = args.format.parse()?;

    let mut config = Config::from_env(provider_override)?;
    if let Some(model) = args.model.clone() {
        config.model = Some(model);
    }
    if let Some(temperature) = args.temperature {
        config.set_temperature(temperature)?;
    }

    let llm: Arc<dyn LLMProvider> = match config.provider {
        ProviderKind::Gemini => {
            let mut provider = GeminiProvider::new(
                config.api_key.clone(),
                config.model.clone(),
                config.llm_timeout,
            )?;
            if let Some(base_url) = config.llm_base_url.clone() {
                provider = provider.with_base_url(base_url);
            }
            Arc::new(provider)
        }
        ProviderKind::Claude => {
            let mut provider = ClaudeProvider::new(
                config.api_key.clone(),
                config.model.clone(),
                config.llm_timeout,
            )?;
            if let Some(base_url) = config.llm_base_url.clone() {
                provider = provider.with_base_url(base_url);
            }
            Arc::new(provider)
        }
    };
    tracing::info!("Using {} model {}", llm.name(), llm.model());

    let source = HackerNewsClient::new(config.front_page_url.clone(), config.fetch_timeout)?;

    let mut pipeline_config = PipelineConfig::from(&config);
    pipeline_config.show_progress = !args.no_progress;

    let pipeline = TrendPipeline::new(source, llm.clone(), pipeline_config);

    tracing::info!("Starting trend analysis for topic: {}", args.topic);
    let state = pipeline.run(&args.topic).await?;

    let report = TrendReport::new(state, llm.name(), llm.model());
    let output = render(&report, format, args.show_articles)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
