//! Back-button coordination across open surfaces.
//!
//! Sheets and overlays register a handler when they open; the host's back
//! event walks the registry newest-first and stops at the first handler
//! that consumes it. The registry is an owned object handed to whoever
//! wires up the host bridge, never shared global state.

use std::fmt;

/// Token returned by [`BackHandlerRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// A handler's answer to a back event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackResponse {
    /// Event handled; stop walking the registry.
    Consumed,
    /// Not interested; try the next handler.
    Pass,
}

type BoxedHandler = Box<dyn FnMut() -> BackResponse>;

/// Ordered registry of back-event handlers.
#[derive(Default)]
pub struct BackHandlerRegistry {
    next_id: u64,
    handlers: Vec<(HandlerId, BoxedHandler)>,
}

impl fmt::Debug for BackHandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackHandlerRegistry")
            .field("next_id", &self.next_id)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl BackHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; newer handlers are asked first.
    pub fn subscribe(&mut self, handler: impl FnMut() -> BackResponse + 'static) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler; returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() < before
    }

    /// Deliver one back event, newest handler first.
    ///
    /// Stops at the first handler that consumes it; `Pass` means nobody
    /// did and the host should run its default back behavior.
    pub fn dispatch(&mut self) -> BackResponse {
        for (_, handler) in self.handlers.iter_mut().rev() {
            if handler() == BackResponse::Consumed {
                return BackResponse::Consumed;
            }
        }
        BackResponse::Pass
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
