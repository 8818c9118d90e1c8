//! Interactive terminal demo.
//!
//! Hosts the hero driver and the menu controller behind a raw-mode key
//! loop: keys stand in for the browser events the behavior layer would
//! normally receive, and stage transitions are printed as they happen.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::input::{handle_key_event, DemoAction};
use vitrine::config::Config;
use vitrine::hero::{self, preload_all, ImageCatalog, RevealWatcher, Rotator, Stage};
use vitrine::menu::MenuController;

/// RAII guard for terminal raw mode.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Run the demo loop until `q` is pressed.
pub async fn run(
    config_path: Option<&Path>,
    no_preload: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::load(config_path)?;

    let mut menu = MenuController::new();

    // Missing hero configuration disables the rotator, not the demo.
    let hero = match config.hero.catalog()? {
        Some(catalog) => {
            let rotator = Rotator::new(catalog.clone(), &config.hero.default_key, config.hero.timing())?;
            let stage = Arc::new(Mutex::new(Stage::new()));
            let watcher = RevealWatcher::new(config.hero.reveal_threshold);
            let (tx, rx) = mpsc::channel(32);

            if !no_preload {
                preload_all(&reqwest::Client::new(), &catalog);
            }

            tokio::spawn(hero::driver::run(rotator, stage.clone(), watcher, rx));
            Some((catalog, tx, stage))
        }
        None => {
            log::warn!("hero rotator disabled (no images configured)");
            None
        }
    };

    print_key_help(hero.as_ref().map(|(catalog, _, _)| catalog));

    let _raw = RawModeGuard::enable()?;
    let mut events = EventStream::new();
    let mut status_interval = tokio::time::interval(Duration::from_millis(250));
    let mut last_status = String::new();

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        let catalog = hero.as_ref().map(|(catalog, _, _)| catalog);
                        match handle_key_event(key_event, catalog) {
                            DemoAction::Quit => break,
                            DemoAction::Hero(hero_event) => {
                                if let Some((_, tx, _)) = &hero {
                                    // The driver only stops when the demo does.
                                    let _ = tx.send(hero_event).await;
                                }
                            }
                            DemoAction::MenuToggle => {
                                let open = !menu.is_open();
                                menu.on_toggle(open);
                                print_menu(&menu);
                            }
                            DemoAction::MenuEscape => {
                                menu.on_escape();
                                print_menu(&menu);
                            }
                            DemoAction::MenuOutsideClick => {
                                menu.on_document_click(false);
                                print_menu(&menu);
                            }
                            DemoAction::None => {}
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize, focus and mouse events are irrelevant here.
                    }
                    Some(Err(e)) => {
                        return Err(Box::new(e));
                    }
                    None => break,
                }
            }

            _ = status_interval.tick() => {
                if !config.ui.status_line {
                    continue;
                }
                if let Some((_, _, stage)) = &hero {
                    let line = {
                        let stage = stage.lock().unwrap();
                        format!(
                            "hero: {} [{}{}]",
                            stage.background().unwrap_or("-"),
                            if stage.is_visible() { "visible" } else { "hidden" },
                            if stage.is_revealed() { ", revealed" } else { "" },
                        )
                    };
                    if line != last_status {
                        print!("{}\r\n", line);
                        last_status = line;
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_key_help(catalog: Option<&ImageCatalog>) {
    println!("vitrine demo - q quits");
    if let Some(catalog) = catalog {
        for (i, entry) in catalog.iter().enumerate() {
            println!("  {}  select '{}'", i + 1, entry.key);
        }
        println!("  p/l  pointer enter/leave (pause/resume rotation)");
        println!("  v  scroll hero into view");
    } else {
        println!("  (hero rotator disabled - run 'vitrine config init' for a sample catalog)");
    }
    println!("  m  toggle menu, Esc close, o click outside");
}

fn print_menu(menu: &MenuController) {
    print!(
        "menu: {} [aria-expanded={}, focus={:?}]\r\n",
        if menu.is_open() { "open" } else { "closed" },
        menu.aria_expanded(),
        menu.focus(),
    );
}
