#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
pub mod dictionary;
mod engine;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod policy;
pub mod prelude;
pub mod rng;
mod ui;

pub use common::*;
pub use config::*;
pub use dictionary::*;
pub use engine::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use policy::*;
pub use rng::*;
pub use ui::*;
