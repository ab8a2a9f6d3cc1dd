//! Command table
//!
//! Every console command is described by a static [`CommandDescriptor`].
//! The table order is the order of the help listing; lookup is by key.

use crate::command::CommandId;

/// Static description of one console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Key the command is invoked with (first character of the line)
    pub key: char,
    /// Number of integer arguments the command requires
    pub arity: u8,
    /// Handler run after the arguments were parsed
    pub command: CommandId,
    /// Usage text printed by help and after argument errors
    pub usage: &'static str,
    /// Successful execution ends the console session
    pub exits: bool,
}

impl CommandDescriptor {
    const fn new(key: char, arity: u8, command: CommandId, usage: &'static str) -> Self {
        Self {
            key,
            arity,
            command,
            usage,
            exits: false,
        }
    }

    const fn exiting(self) -> Self {
        Self {
            exits: true,
            ..self
        }
    }
}

/// Built-in console commands, in help order
pub static COMMANDS: [CommandDescriptor; 15] = [
    CommandDescriptor::new('a', 1, CommandId::SetAddress, "a <address>: Set module address"),
    CommandDescriptor::new(
        'b',
        2,
        CommandId::SetBrightness,
        "b <channel> <brightness>: Set brightness of a single PWM channel",
    ),
    CommandDescriptor::new(
        'c',
        4,
        CommandId::SetColor,
        "c <led> <x> <y> <Y>: Switch LED to xyY color",
    ),
    CommandDescriptor::new('C', 1, CommandId::CalibrateLed, "C <led>: Set calibration of LED"),
    CommandDescriptor::new('e', 0, CommandId::Echo, "e: Begin echo mode"),
    CommandDescriptor::new('f', 0, CommandId::PasteFile, "f: Paste a command file"),
    CommandDescriptor::new(
        'h',
        2,
        CommandId::SetHeatLimit,
        "h <sensor> <heat-limit>: Set heat limit",
    ),
    CommandDescriptor::new('l', 0, CommandId::ReloadConfig, "l: Reload configuration"),
    CommandDescriptor::new(
        'm',
        1,
        CommandId::SetCorrection,
        "m <led>: set an LED's correction matrix",
    ),
    CommandDescriptor::new(
        'p',
        4,
        CommandId::SetPwmChannels,
        "p <led> <r-chan> <g-chan> <b-chan>: set an LED's PWM channels",
    ),
    CommandDescriptor::new('q', 0, CommandId::Quit, "q: Quit to normal mode").exiting(),
    CommandDescriptor::new('r', 0, CommandId::Reset, "r: Reset"),
    CommandDescriptor::new('s', 0, CommandId::SaveConfig, "s: Save configuration"),
    CommandDescriptor::new(
        'y',
        1,
        CommandId::SetMaxY,
        "y <led-index>: Set maximum Y value for LED",
    ),
    CommandDescriptor::new('?', 0, CommandId::Help, "?: Show command usage messages"),
];

/// Error returned when a command table contains the same key twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateKey(pub char);

/// Ordered, immutable set of commands with distinct keys
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    commands: &'static [CommandDescriptor],
}

impl Registry {
    /// Create a registry over a custom command table
    ///
    /// Returns `Err(DuplicateKey(key))` if two descriptors share a key.
    pub fn new(commands: &'static [CommandDescriptor]) -> Result<Self, DuplicateKey> {
        for (i, descriptor) in commands.iter().enumerate() {
            if commands[..i].iter().any(|other| other.key == descriptor.key) {
                return Err(DuplicateKey(descriptor.key));
            }
        }
        Ok(Self { commands })
    }

    /// Registry over the built-in [`COMMANDS`]
    pub const fn builtin() -> Self {
        Self {
            commands: &COMMANDS,
        }
    }

    /// Find the command invoked with `key`
    pub fn lookup(&self, key: char) -> Option<&'static CommandDescriptor> {
        let commands: &'static [CommandDescriptor] = self.commands;
        commands.iter().find(|descriptor| descriptor.key == key)
    }

    /// Iterate over all commands in help order
    pub fn iter(&self) -> impl Iterator<Item = &'static CommandDescriptor> + use<> {
        let commands: &'static [CommandDescriptor] = self.commands;
        commands.iter()
    }

    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
