//! 领域实体

pub mod ad;
pub mod user;

pub use ad::{Ad, NewAd};
pub use user::{NewUser, User};
