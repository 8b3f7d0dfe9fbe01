//! Merchant callback adapters.
//!
//! - `HttpCallbackDispatcher` - reqwest-backed delivery with a bounded timeout
//! - `MockCallbackDispatcher` - scripted outcomes and call tracking for tests

mod http_callback_dispatcher;
mod mock_callback_dispatcher;

pub use http_callback_dispatcher::{HttpCallbackConfig, HttpCallbackDispatcher};
pub use mock_callback_dispatcher::{MockCallbackDispatcher, RecordedDelivery};
