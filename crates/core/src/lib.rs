//! depargs-core - Order-independent dependent arguments for clap
//!
//! An argument declared with [`DependentArg`] is only accepted when at least
//! one of the arguments it requires was also supplied, wherever those appear
//! on the command line. Scanning parks such arguments as pending; the caller
//! must run [`Namespace::resolve`] afterwards to accept or drop them.

pub mod config;
pub mod dependent;
pub mod errors;
pub mod namespace;
pub mod parser;
pub mod table;
pub mod types;

pub use config::*;
pub use dependent::*;
pub use errors::*;
pub use namespace::*;
pub use parser::*;
pub use table::*;
pub use types::*;
