use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::assembler::assemble;
use crate::clipboard::Clipboard;
use crate::commands::{EditorCommand, Outcome};
use crate::config::Config;
use crate::generation::load_payload;
use crate::labels::Labels;
use crate::messages::HELP_TEXT;
use crate::render::format_view;
use crate::session::Session;
use crate::target::TargetAi;
use crate::view::build_view;

#[derive(Parser, Debug)]
#[command(name = "promptwizard", version)]
#[command(about = "Edit generated image prompts and export them for a target model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the supported target models
    Targets,
    /// Print the final prompt for a generated payload
    Assemble {
        /// JSON payload: a string (compact) or an object of fields
        file: PathBuf,
        /// Target model (Midjourney, Stable Diffusion, DALL-E)
        #[arg(short, long)]
        target: Option<TargetAi>,
    },
    /// Edit a prompt interactively
    Edit {
        /// Optional payload to start from
        file: Option<PathBuf>,
    },
}

pub async fn execute(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Targets => {
            for target in TargetAi::ALL {
                println!("{target}");
            }
        }
        Commands::Assemble { file, target } => {
            let model = load_payload(&file).await?;
            let target = target.unwrap_or(config.target);
            println!("{}", assemble(&model, target));
        }
        Commands::Edit { file } => {
            let mut clipboard = config.clipboard.open()?;
            run_editor(&config, file, clipboard.as_mut()).await?;
        }
    }
    Ok(())
}

async fn run_editor(
    config: &Config,
    file: Option<PathBuf>,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    let labels = Labels::new(config.language);
    let mut session = Session::with_reset_window(config.copied_reset).with_target(config.target);

    if let Some(path) = file {
        let model = load_payload(&path).await?;
        session.adopt(model);
    }

    info!(target = %session.target(), "Editor started");
    println!("{HELP_TEXT}\n");
    println!("{}", format_view(&build_view(&session, &labels)));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let command = match EditorCommand::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match command.dispatch(&mut session, &labels, clipboard).await? {
            Outcome::Print(text) => println!("{text}"),
            Outcome::Silent => {}
            Outcome::Quit => break,
        }
    }

    debug!("Editor finished");
    Ok(())
}
