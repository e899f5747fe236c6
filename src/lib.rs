#![cfg_attr(not(feature = "std"), no_std)]
//! Single-player battleship grid: ship placement, shot resolution and
//! victory detection, with no I/O of its own.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod cell;
mod common;
mod config;
mod coord;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod render;
mod ship;
mod ship_list;
mod state;

pub use cell::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use render::{OpponentView, OwnerView};
pub use ship::*;
pub use ship_list::*;
pub use state::*;
