#![no_std]

pub mod board;
pub mod color;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod fixed;
pub mod parser;
pub mod registry;
pub mod serial;
pub mod status;
pub mod validate;

pub use board::{Board, ColorCorrection, ConfigStorage, LineInput, PwmOutput, SystemReset};
pub use color::{ChannelLevels, Matrix3};
pub use command::CommandId;
pub use config::{LedInfo, ModuleConfig};
pub use console::{Console, ConsoleConfig, Outcome};
pub use error::Error;
pub use fixed::Fixed;
pub use parser::{Args, LineBuffer};
pub use registry::{CommandDescriptor, DuplicateKey, Registry};
pub use serial::{QueuedLineReader, RxProducer, RxQueue};
