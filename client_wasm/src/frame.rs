//! `requestAnimationFrame` scheduling with a timer fallback

use std::cell::RefCell;
use std::rc::Rc;

use game_core::FrameRequester;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::ClientError;

const FALLBACK_FRAME_MS: i32 = 1000 / 60;

type FrameCallback = Closure<dyn FnMut()>;

/// Reschedules one installed callback. Clones share the callback.
#[derive(Clone)]
pub struct AnimationFrame {
    window: Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationFrame {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Set the function run on every frame
    pub fn install(&self, frame: impl FnMut() + 'static) {
        *self.callback.borrow_mut() = Some(Closure::new(frame));
    }
}

impl FrameRequester for AnimationFrame {
    type Error = ClientError;

    fn request_next_frame(&self) -> Result<(), ClientError> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(()); // Nothing installed yet
        };
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();

        if self.window.request_animation_frame(function).is_err() {
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(function, FALLBACK_FRAME_MS)?;
        }
        Ok(())
    }
}
