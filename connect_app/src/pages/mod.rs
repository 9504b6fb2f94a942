//! Headless view-models, one per route.
//!
//! Each page keeps the state a renderer displays and exposes the user actions as async methods.
//! Failures are reported through [crate::toast::Toasts] and never escape a page. Methods that can
//! navigate return the [crate::routes::Route] to go to.

pub mod connections;
pub mod forgot_password;
pub mod login;
pub mod messages;
pub mod profile;
pub mod search;
pub mod signup;
pub mod user_profile;
