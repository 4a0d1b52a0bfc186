//! Keyboard input handling

use std::sync::mpsc::Sender;

use game_core::InputEvent;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use crate::error::ClientError;

/// Handle key down event
pub fn handle_key_down(event: &KeyboardEvent) -> InputEvent {
    InputEvent::KeyDown(event.key_code())
}

/// Handle key up event
pub fn handle_key_up(event: &KeyboardEvent) -> InputEvent {
    InputEvent::KeyUp(event.key_code())
}

/// Forward key presses and releases on `window` to the game's inbox
pub fn install_key_listeners(window: &Window, sender: Sender<InputEvent>) -> Result<(), ClientError> {
    listen(window, "keydown", sender.clone(), handle_key_down)?;
    listen(window, "keyup", sender, handle_key_up)?;
    Ok(())
}

fn listen(
    window: &Window,
    kind: &str,
    sender: Sender<InputEvent>,
    to_event: fn(&KeyboardEvent) -> InputEvent,
) -> Result<(), ClientError> {
    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if sender.send(to_event(&event)).is_err() {
            log::debug!("Game is gone, dropping key event");
        }
    });
    window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}
