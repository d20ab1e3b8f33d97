//! Inbound adapters translating external requests into domain port calls.
//!
//! Only HTTP is provided; framework details stay inside [`http`].

pub mod http;
