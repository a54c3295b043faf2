use clap::{Parser, Subcommand};
use deckshot::{DeckConfig, DeckController};

#[derive(Parser)]
#[command(name = "deckshot", about = "Export the built-in slide deck as PNGs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the slides in the deck
    List {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export one slide, or the whole deck
    Export {
        /// 1-based slide number; exports every slide when omitted
        #[arg(long)]
        slide: Option<usize>,
        /// Output directory for the PNG files
        #[arg(long, default_value = ".")]
        out: String,
        /// Font-service URL to fetch font CSS from before capture
        #[arg(long)]
        font_css_url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("deckshot: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::List { json } => {
            let deck = DeckController::new(DeckConfig::default())?;
            if json {
                let slides: Vec<_> = deck.catalog().iter().collect();
                println!("{}", serde_json::to_string_pretty(&slides)?);
            } else {
                for slide in deck.catalog().iter() {
                    println!("{:>2}  {}", slide.id + 1, slide.title);
                }
            }
        }
        Command::Export {
            slide,
            out,
            font_css_url,
        } => {
            let config = DeckConfig {
                output_dir: out.clone().into(),
                font_css_url,
                ..Default::default()
            };
            let mut deck = DeckController::new(config)?;
            deck.mount_export_surfaces()?;
            deck.fonts().load().await;

            match slide {
                Some(n) => {
                    let count = deck.catalog().len();
                    if n == 0 || n > count {
                        anyhow::bail!("slide must be between 1 and {}", count);
                    }
                    deck.select_slide(n - 1);
                    deck.download_current().await?;
                    println!("Exported slide {} to {}", n, out);
                }
                None => {
                    deck.download_all().await?;
                    println!("Exported {} slides to {}", deck.catalog().len(), out);
                }
            }
        }
    }
    Ok(())
}
