pub mod chain;
pub mod client;
pub mod conf;
pub mod error;
pub mod interceptor;

pub use chain::{Interceptor, Next, Transport};
pub use client::RestClient;
pub use conf::{CaptureFailure, WireLogConf};
pub use error::Error;
pub use interceptor::log::WireLogger;
