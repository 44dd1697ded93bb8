//! Shared building blocks for the Dropwatch client.
//!
//! Everything in this crate is target independent: the web application
//! compiles it to WebAssembly, while the test suite exercises it natively.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

pub mod access;
pub mod auth;
pub mod counseling;
pub mod errors;
pub mod models;
pub mod session;
pub mod storage;
pub mod theme;
pub mod validation;

pub use access::{Access, AccessRule, Audience, NavLink, Page, View, authorize, authorize_path};
pub use errors::StorageError;
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use theme::ThemeStore;
