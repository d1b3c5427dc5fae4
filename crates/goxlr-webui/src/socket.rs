//! Daemon WebSocket client.
//!
//! Keeps the store in sync with the daemon: asks for a full status on every
//! (re)connect, then applies the patches the daemon broadcasts. Dropped
//! connections are retried after the configured delay.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use goxlr_ui_core::{DaemonRequest, DaemonSession, ProtocolError};
use leptos::*;
use log::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use crate::state::AppContext;

/// Daemon connection state, shown in the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// Socket opening
    Connecting,
    /// Socket open, status received or pending
    Connected,
    /// Socket closed, reconnect scheduled
    Disconnected,
}

impl ConnectionState {
    /// Status bar label.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Connecting => "Connecting",
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnected => "Disconnected",
        }
    }
}

// Live socket plus the JS callbacks that must outlive it.
struct Connection {
    ws: WebSocket,
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

/// WebSocket link to the daemon.
#[derive(Clone)]
pub struct DaemonSocket {
    url: String,
    reconnect_delay: Duration,
    ctx: AppContext,
    session: Rc<RefCell<DaemonSession>>,
    connection: Rc<RefCell<Option<Connection>>>,
}

impl DaemonSocket {
    /// Create a socket handle (not yet connected).
    pub fn new(url: String, reconnect_delay_ms: u32, ctx: AppContext) -> Self {
        Self {
            url,
            reconnect_delay: Duration::from_millis(u64::from(reconnect_delay_ms)),
            ctx,
            session: Rc::new(RefCell::new(DaemonSession::new())),
            connection: Rc::new(RefCell::new(None)),
        }
    }

    /// Open the socket and wire up its callbacks.
    pub fn connect(&self) -> Result<(), JsValue> {
        info!("Connecting to daemon at {}", self.url);
        self.ctx.connection.set(ConnectionState::Connecting);

        let ws = WebSocket::new(&self.url)?;

        let on_open = {
            let socket = self.clone();
            Closure::<dyn FnMut()>::new(move || {
                socket.ctx.connection.set(ConnectionState::Connected);
                if let Err(e) = socket.send(DaemonRequest::GetStatus) {
                    error!("Status request failed: {:?}", e);
                }
            })
        };

        let on_message = {
            let socket = self.clone();
            Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
                match ev.data().as_string() {
                    Some(text) => socket.handle_text(&text),
                    None => warn!("Ignoring non-text daemon frame"),
                }
            })
        };

        let on_close = {
            let socket = self.clone();
            Closure::<dyn FnMut(CloseEvent)>::new(move |ev: CloseEvent| {
                warn!("Daemon socket closed ({}): {}", ev.code(), ev.reason());
                socket.session.borrow_mut().reset();
                socket.ctx.connection.set(ConnectionState::Disconnected);
                socket.schedule_reconnect();
            })
        };

        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        *self.connection.borrow_mut() = Some(Connection {
            ws,
            _on_open: on_open,
            _on_message: on_message,
            _on_close: on_close,
        });

        Ok(())
    }

    /// Send a request to the daemon.
    pub fn send(&self, request: DaemonRequest) -> Result<(), JsValue> {
        let frame = self
            .session
            .borrow_mut()
            .request(request)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        match self.connection.borrow().as_ref() {
            Some(conn) => conn.ws.send_with_str(&frame),
            None => Err("Daemon socket not open".into()),
        }
    }

    fn handle_text(&self, text: &str) {
        let session = &self.session;
        let result = self
            .ctx
            .store
            .try_update(|store| session.borrow_mut().handle_message(text, store));

        match result {
            Some(Ok(event)) => debug!("Daemon message handled: {:?}", event),
            Some(Err(ProtocolError::UnexpectedId(id))) => {
                debug!("Ignored response for request {}", id)
            }
            Some(Err(e)) => error!("Daemon message error: {}", e),
            None => warn!("Store disposed, dropping daemon message"),
        }
    }

    fn schedule_reconnect(&self) {
        let socket = self.clone();
        set_timeout(
            move || {
                if let Err(e) = socket.connect() {
                    error!("Reconnect failed: {:?}", e);
                    socket.ctx.connection.set(ConnectionState::Disconnected);
                    socket.schedule_reconnect();
                }
            },
            self.reconnect_delay,
        );
    }
}
