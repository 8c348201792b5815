pub mod option;
pub mod cli;
pub mod error;
mod convert;

pub use option::Opt;
