use clap::{Parser, Subcommand};
use reddit_summarizer::model::SummaryResponse;
use reddit_summarizer::{server, SummarizerConfig, ThreadSummarizer};

#[derive(Parser)]
#[command(name = "reddit-summarizer")]
#[command(about = "Summarize Reddit threads with an LLM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a single thread and print the result
    Summarize {
        /// Reddit thread URL
        url: String,
    },
    /// Serve the summarize endpoint over HTTP
    Serve,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = SummarizerConfig::load()?;

    match cli.command {
        Command::Summarize { url } => {
            let summarizer = ThreadSummarizer::builder().config(config).build()?;
            match summarizer.respond(&url).await {
                SummaryResponse::Summary { summary } => println!("{}", summary),
                SummaryResponse::Error { error } => {
                    eprintln!("{}", error);
                    std::process::exit(1);
                }
            }
        }
        Command::Serve => server::serve(config).await?,
    }

    Ok(())
}
