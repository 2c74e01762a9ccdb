//! Live Update Stream
//!
//! Server-sent-events connection delivering full leaderboard snapshots.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use super::leaderboard::LeaderboardSnapshot;
use crate::api::client::parse_snapshot;

/// Handle to an open server-push subscription.
///
/// Clones share the underlying connection. `close` is idempotent and
/// detaches every observer, so nothing fires after it returns.
#[derive(Clone)]
pub struct LeaderboardStream {
    source: Rc<RefCell<Option<EventSource>>>,
}

impl LeaderboardStream {
    /// Open a connection to the given stream URL.
    pub fn open(url: &str) -> Result<Self, String> {
        let source = EventSource::new(url)
            .map_err(|e| format!("EventSource connection failed: {:?}", e))?;

        Ok(Self {
            source: Rc::new(RefCell::new(Some(source))),
        })
    }

    /// Register an observer for the connection becoming established.
    pub fn on_open(&self, handler: impl Fn() + 'static) {
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"Leaderboard stream connected".into());
            handler();
        }) as Box<dyn FnMut(JsValue)>);

        if let Some(source) = self.source.borrow().as_ref() {
            source.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        }
        on_open.forget();
    }

    /// Register an observer invoked with each pushed snapshot.
    ///
    /// Every event carries the complete replacement leaderboard. A payload
    /// that does not decode as a snapshot closes the stream; the view keeps
    /// whatever it last displayed.
    pub fn on_snapshot(&self, handler: impl Fn(LeaderboardSnapshot) + 'static) {
        let stream = self.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text: String = text.into();
                match parse_snapshot(&text) {
                    Ok(snapshot) => handler(snapshot),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Malformed leaderboard update: {}", e).into(),
                        );
                        stream.close();
                    }
                }
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        if let Some(source) = self.source.borrow().as_ref() {
            source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        }
        on_message.forget();
    }

    /// Register an observer for transport-level errors.
    pub fn on_error(&self, handler: impl Fn() + 'static) {
        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("Leaderboard stream error: {:?}", e).into());
            handler();
        }) as Box<dyn FnMut(JsValue)>);

        if let Some(source) = self.source.borrow().as_ref() {
            source.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        }
        on_error.forget();
    }

    /// Terminate the connection. Safe to call repeatedly.
    pub fn close(&self) {
        if let Some(source) = self.source.borrow_mut().take() {
            source.set_onopen(None);
            source.set_onmessage(None);
            source.set_onerror(None);
            source.close();
        }
    }

    /// Check if the subscription is still open.
    pub fn is_open(&self) -> bool {
        self.source
            .borrow()
            .as_ref()
            .map(|source| source.ready_state() != EventSource::CLOSED)
            .unwrap_or(false)
    }
}
