//! Async driver serializing the hero's event sources.
//!
//! One `tokio::select!` loop owns the rotator and multiplexes its four
//! inputs: the armed timer deadline, category selections, pointer
//! enter/leave, and visibility reports. Handlers never run concurrently;
//! their relative order across sources follows real-time arrival.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::time::sleep_until;

use super::rotator::Rotator;
use super::stage::Stage;
use super::viewport::RevealWatcher;

/// Events the embedding surface feeds into the hero driver.
#[derive(Debug, Clone, PartialEq)]
pub enum HeroEvent {
    /// A click on an element carrying a category key.
    Select(String),
    /// Pointer entered or touch started on the hero background.
    PointerEnter,
    /// Pointer left or touch ended on the hero background.
    PointerLeave,
    /// Visibility ratio of the hero section, in `[0.0, 1.0]`.
    Visibility(f32),
}

/// Run the hero loop until every event sender is dropped.
///
/// Displays the default image and starts rotation, then serializes timer
/// ticks and incoming events. The pending visibility flag on the stage is
/// applied at the top of each iteration, one step after the display call
/// that armed it.
pub async fn run(
    mut rotator: Rotator,
    stage: Arc<Mutex<Stage>>,
    mut watcher: RevealWatcher,
    mut events: mpsc::Receiver<HeroEvent>,
) {
    rotator.initialize(&mut stage.lock().unwrap());
    log::debug!(
        "hero rotation started on '{}' with {} images",
        rotator.current_key(),
        rotator.catalog().len()
    );

    loop {
        stage.lock().unwrap().frame();

        let deadline = rotator.next_tick();
        let tick = async move {
            match deadline {
                Some(at) => sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            maybe_event = events.recv() => {
                match maybe_event {
                    Some(HeroEvent::Select(key)) => {
                        rotator.select_category(&key, &mut stage.lock().unwrap());
                    }
                    Some(HeroEvent::PointerEnter) => {
                        rotator.pause();
                    }
                    Some(HeroEvent::PointerLeave) => {
                        rotator.resume();
                    }
                    Some(HeroEvent::Visibility(ratio)) => {
                        if watcher.observe(ratio) {
                            stage.lock().unwrap().reveal();
                        }
                    }
                    None => {
                        // All senders dropped - the page is gone.
                        break;
                    }
                }
            }

            _ = tick => {
                rotator.on_tick(&mut stage.lock().unwrap());
            }
        }
    }
}
