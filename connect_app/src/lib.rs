pub mod app;
pub mod auth_context;
pub mod config;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod session_store;
pub mod toast;

#[cfg(test)]
mod test_util;
