pub mod emit;
pub mod error;
pub mod hex;
pub mod image;
pub mod instructions;
pub mod matcher;

pub mod isa {
    pub mod mcs51; // i8051/i8052 instruction forms
}

use std::path::PathBuf;

pub use emit::{emit, EmitOptions, EmitSession};
pub use error::RomError;
pub use image::{load, load_file, RomImage};
pub use matcher::{OpcodeMatcher, TableMatcher};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RomConfig {
    pub capacity: usize, // bytes addressable by the core
    pub output: PathBuf,
}

impl Default for RomConfig {
    fn default() -> Self {
        Self {
            capacity: image::ROM_CAPACITY,
            output: PathBuf::from(emit::DEFAULT_OUTPUT),
        }
    }
}
