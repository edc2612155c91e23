//! Thin convex lens model shared by the web and native frontends.
//!
//! [`optics`] turns three distances into an image; [`layout`] and [`rays`] turn
//! that image into diagram coordinates. Nothing in this crate holds state or
//! touches a platform API.

pub mod constants;
pub mod error;
pub mod frame;
pub mod layout;
pub mod locale;
pub mod optics;
pub mod rays;
pub mod state;
pub mod svg;

pub use error::*;
pub use frame::*;
pub use layout::*;
pub use locale::{describe_text, format_fixed, Labels, Locale};
pub use optics::*;
pub use rays::*;
pub use state::*;
