//! Browser client for the paddle ball game
//!
//! Draws with the Canvas 2D API and runs the `game_core` simulation on a fixed
//! timestep, paced by `requestAnimationFrame`.
//! Note: everything here needs a browser, so the crate only builds for wasm32

#![cfg(target_arch = "wasm32")]

mod canvas;
mod error;
mod frame;
mod input;
mod logging;
mod options;

use canvas::{create_canvas, CanvasSurface};
use error::ClientError;
use frame::AnimationFrame;
use game_core::{FrameRequester, Game};
use options::StartOptions;
use wasm_bindgen::prelude::*;

/// Mount the game and start the loop.
///
/// `options` is an optional JSON object, e.g.
/// `{ "mount_id": "pong", "log_level": "debug", "game": { "player_speed": 5.0 } }`.
/// A page without the mount element is not an error: the loop simply isn't started.
#[wasm_bindgen]
pub fn start(options: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let options = match options {
        Some(json) => StartOptions::from_json(&json)?,
        None => StartOptions::default(),
    };
    logging::init(options.log_level()?);

    run(options).map_err(|err| {
        log::error!("Failed to start: {err}");
        JsValue::from(err)
    })
}

fn run(options: StartOptions) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoDocument)?;

    let Some(mount) = document.get_element_by_id(&options.mount_id) else {
        log::warn!(
            "No element with id `{}` to mount the game in, not starting",
            options.mount_id
        );
        return Ok(());
    };

    let mut game = Game::new(options.game)?;
    let (canvas, context) =
        create_canvas(&document, game.map.width as u32, game.map.height as u32)?;
    mount.append_child(&canvas)?;

    input::install_key_listeners(&window, game.input_sender())?;

    let performance = window.performance();
    let mut surface = CanvasSurface::new(context);
    let frames = AnimationFrame::new(window);
    let next_frame = frames.clone();

    frames.install(move || {
        let now = performance
            .as_ref()
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now);
        game.frame(now, &mut surface);

        if let Err(err) = next_frame.request_next_frame() {
            log::error!("Failed to schedule the next frame, stopping: {err}");
        }
    });
    frames.request_next_frame()?;

    log::info!("Game started in `#{}`", options.mount_id);
    Ok(())
}
