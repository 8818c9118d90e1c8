mod cli;
mod demo;
mod input;

use clap::Parser;

use cli::{Args, Command};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    let config_path = args.config.as_deref();

    match args.command {
        Some(Command::Config { action }) => {
            cli::handle_config_action(action, config_path);
        }
        Some(Command::Submit { endpoint, fields }) => {
            let code = cli::handle_submit(endpoint, fields, config_path).await;
            std::process::exit(code);
        }
        Some(Command::Run { no_preload }) => {
            if let Err(e) = demo::run(config_path, no_preload).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = demo::run(config_path, false).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
