#[cfg(feature = "ureq-client")]
mod ureq_impl;

#[cfg(feature = "ureq-client")]
pub use ureq_impl::UreqConnector;
