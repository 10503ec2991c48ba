#![no_std]

extern crate alloc;

pub use engine::*;
pub use error::*;
pub use score::*;
pub use token::*;
pub use types::*;

mod engine;
mod error;
mod score;
mod token;
mod types;
