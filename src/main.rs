use activity_console::utils::logger;
use activity_console::{AppError, CliConfig, Command, Console, CurrencyConverter, CurrencyExchange, MainMenu};
use anyhow::Context;
use clap::Parser;
use std::io;

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting activity-console");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<AppError>() {
            Some(AppError::InputClosed) => {
                tracing::info!("Input closed, leaving");
                println!("\nInput closed. Goodbye!");
                0
            }
            Some(app_error) => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                app_error.exit_code()
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        },
    };

    std::process::exit(exit_code);
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let config = cli.app_config().context("failed to load configuration")?;
    let converter = CurrencyConverter::default();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.display.clone());

    match cli.command.clone().unwrap_or(Command::Menu) {
        Command::Menu => MainMenu::new(&config, converter).run(&mut console)?,
        Command::Convert { amount, yes, json } => {
            CurrencyExchange::new(converter).convert_once(&mut console, amount, yes, json)?;
        }
        Command::Rates => CurrencyExchange::new(converter).show_rates(&mut console)?,
    }

    tracing::info!("activity-console finished");
    Ok(())
}
