//! User registration and login API.
//!
//! The [`auth`] module holds the framework-independent flows; [`api`] wires
//! them to HTTP and [`cli`] to the command line.

pub mod api;
pub mod auth;
pub mod cli;
