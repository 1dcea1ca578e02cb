mod back_handlers;
mod dispatch;
mod launch;

pub use back_handlers::{BackHandlerRegistry, BackResponse, HandlerId};
pub use dispatch::{DeepLinkDispatcher, DispatchOutcome};
pub use launch::LaunchParams;
