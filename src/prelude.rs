//! Commonly used types and utilities for ease of import.

pub use crate::{
    EngineConfig, Grid, Orientation, PlacementEngine, PlacementRecord, PlacementValidator,
    PolicyKind, Position, Seed,
};
