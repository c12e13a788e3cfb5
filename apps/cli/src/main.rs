mod cli;
mod command;
mod config;
mod error;
mod output;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // 日志输出到 stderr，stdout 只留给搜索结果
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let cfg = match &command_line.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    }
    .context("Load configuration error")?;

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::List { book, json } => {
                Box::new(command::ListCommand::new(cfg, book, json))
            }
            cli::Commands::Show { title, book } => {
                Box::new(command::ShowCommand::new(cfg, book, title))
            }
            cli::Commands::Search { keyword, book, search, json } => {
                Box::new(command::SearchCommand::new(cfg, book, keyword, search, json))
            }
            cli::Commands::Interactive { book, threshold } => {
                Box::new(command::InteractiveCommand::new(cfg, book, threshold))
            }
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}
