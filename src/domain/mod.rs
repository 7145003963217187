//! Domain values shared by every layer.

pub mod locale;
pub mod user;
