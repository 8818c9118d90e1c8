//! Subcommand handlers for submit and config actions.

use std::path::Path;

use super::args::ConfigAction;
use vitrine::config::{default_path, Config};
use vitrine::forms::{ContactForm, Notice, RelayClient, DEFAULT_RELAY_ENDPOINT};

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) {
    match action {
        ConfigAction::Show => {
            let config = match Config::load(config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            println!("Current configuration:");
            println!("  Default category: {}", config.hero.default_key);
            println!("  Rotation interval: {} ms", config.hero.interval_ms);
            println!("  Selection cooldown: {} ms", config.hero.cooldown_ms);
            println!("  Reveal threshold: {}", config.hero.reveal_threshold);
            if config.hero.images.is_empty() {
                println!("  Images: none (hero rotator disabled)");
            } else {
                println!("  Images:");
                for entry in &config.hero.images {
                    println!("    {} -> {}", entry.key, entry.url);
                }
            }
            println!(
                "  Relay endpoint: {}",
                config
                    .relay
                    .endpoint
                    .as_deref()
                    .unwrap_or(DEFAULT_RELAY_ENDPOINT)
            );
            println!("  Relay timeout: {} s", config.relay.timeout_secs);
            println!("  Status line: {}", if config.ui.status_line { "yes" } else { "no" });
            println!();

            let path = config_path.map(Path::to_path_buf).unwrap_or_else(default_path);
            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
        }
        ConfigAction::Init => {
            let path = config_path.map(Path::to_path_buf).unwrap_or_else(default_path);

            if path.exists() {
                eprintln!("Config file already exists: {}", path.display());
                eprintln!("Use 'vitrine config show' to view current settings.");
                std::process::exit(1);
            }

            if let Some(parent) = path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", path.display());
            println!("Edit it and run 'vitrine run' to start the demo.");
        }
    }
}

/// Handle the submit subcommand. Returns the process exit code.
pub async fn handle_submit(
    endpoint: Option<String>,
    fields: Vec<(String, String)>,
    config_path: Option<&Path>,
) -> i32 {
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let endpoint = endpoint
        .or_else(|| config.relay.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string());

    let client = match RelayClient::with_settings(endpoint, config.relay.timeout()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let mut form = ContactForm::new("cli", fields);
    match client.submit(&mut form).await {
        Notice::Delivered => {
            println!("Message delivered.");
            0
        }
        Notice::Rejected { status } => {
            eprintln!("The relay rejected the submission (HTTP {}).", status);
            eprintln!("Check the form fields and try again.");
            1
        }
        Notice::ConnectionFailed => {
            eprintln!("Could not reach the relay endpoint. Check your connection and try again.");
            1
        }
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# vitrine configuration

[hero]
# Category displayed first and used as the rotation anchor
default_key = "home"
# Time between automatic image advances
interval_ms = 6000
# Delay after a user selection before rotation resumes
cooldown_ms = 9000
# Fraction of the hero section that must be visible to reveal the content
reveal_threshold = 0.2

# Rotation order follows the order of these entries
[[hero.image]]
key = "home"
url = "assets/img/pastel-portada.jpg"

[[hero.image]]
key = "productos"
url = "assets/img/pastel-tres.jpg"

[[hero.image]]
key = "blog"
url = "assets/img/pastel-dos.jpg"

[[hero.image]]
key = "sobre"
url = "assets/img/pastel-portada.jpg"

[[hero.image]]
key = "contacto"
url = "assets/img/pastel-uno.jpg"

[relay]
# Contact form relay endpoint
# endpoint = "https://formspree.io/f/YOUR_FORM_ID"
# Request timeout in seconds
timeout_secs = 30

[ui]
# Print stage transitions while the demo runs
status_line = true
"#;
