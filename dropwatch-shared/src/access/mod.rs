//! Route authorization.
//!
//! Every known path maps to a [`Page`]. A session is reduced to an
//! [`Audience`], each audience owns one [`AccessRule`] (allowed pages plus
//! a default), and [`authorize`] is a lookup in that table. Requests for a
//! page outside the audience's set, including unknown paths, redirect to
//! the audience default; there is no forbidden response.

mod gate;
mod navigation;
mod pages;

pub use gate::{Access, AccessRule, Audience, View, authorize, authorize_path};
pub use navigation::{NavLink, navigation};
pub use pages::Page;
