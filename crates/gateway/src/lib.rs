//! Erika data-access gateway.
//!
//! The [`Gateway`] presents one method per dashboard operation (workspace
//! lists and details, search, config read/write, streaming chat) and
//! internally dispatches to either the [`LiveTransport`] (HTTP backend) or
//! the [`MockTransport`] (fixture data with simulated latency). In live
//! mode, any transport failure falls back to the mock substitute and emits
//! a [`FallbackNotice`]. Callers see identical result shapes either way.

pub use codec::FrameDecoder;
pub use gateway::{Gateway, GatewayConfig, SendMessage};
pub use live::LiveTransport;
pub use mock::MockTransport;
pub use mode::{DataMode, ModeStore, UnknownMode};
pub use notify::{FallbackNotice, Notifier};

mod codec;
mod fixtures;
mod gateway;
mod live;
mod mock;
mod mode;
mod notify;
