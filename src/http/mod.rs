//! HTTP layer — `DeliveryHttp`, the low-level request executor.

mod client;

pub use client::DeliveryHttp;
