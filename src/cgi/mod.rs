//! # Módulo CGI
//! src/cgi/mod.rs
//!
//! ```text
//! Request → env::CgiEnvironment::build → executor::run_cgi_program
//!         → parser::process_child_output → Response
//! ```

pub mod env;
pub mod executor;
pub mod parser;

pub use env::{CgiEnvironment, ConnectionInfo};
pub use executor::run_cgi_program;
