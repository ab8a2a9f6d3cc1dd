//! Dispatch engine
//!
//! Reads one line, resolves the command by its first character, parses the
//! declared number of arguments, runs the handler and reports the result.
//! Errors never end the session; only a successful exit-flagged command
//! does.

use core::fmt::{self, Write as _};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::board::Board;
use crate::command::CommandId;
use crate::config::ModuleConfig;
use crate::error::Error;
use crate::parser::{LineBuffer, parse_args, parse_value};
use crate::registry::Registry;
use crate::status;

/// Line terminator used for all console output
pub const CRLF: &str = "\r\n";

/// Default limit for command files pasted from within command files
pub const DEFAULT_MAX_PASTE_DEPTH: u8 = 8;

const UNKNOWN_COMMAND: &str = "Unknown command";
const ARGUMENTS_ARE_MISSING: &str = "Not enough arguments";
const ARGUMENTS_ARE_INVALID: &str = "Argument not a valid integer";
const UNKNOWN_PARSER_ERROR: &str = "Error occurred while parsing input";
const ERROR_RUNNING_COMMAND: &str = "Error occurred while running command";

/// Runtime settings of the console
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    /// Banner line shown on top of the status screen
    pub program_id: &'static str,
    /// Maximum number of nested command-file pastes
    pub max_paste_depth: u8,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            program_id: concat!("myrtio-led-console build ", env!("CARGO_PKG_VERSION")),
            max_paste_depth: DEFAULT_MAX_PASTE_DEPTH,
        }
    }
}

/// Result of one read/parse/execute cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran successfully
    Completed,
    /// An exit-flagged command ran successfully; the session ends
    Exit,
    /// No command is registered for the key
    UnknownCommand,
    /// The arguments could not be parsed; the handler was not run
    Rejected(Error),
    /// The handler failed
    Failed(Error),
}

impl Outcome {
    pub const fn should_exit(self) -> bool {
        matches!(self, Self::Exit)
    }
}

/// Interactive configuration console
pub struct Console<B: Board> {
    board: B,
    registry: Registry,
    settings: ConsoleConfig,
    paste_depth: u8,
}

impl<B: Board> Console<B> {
    /// Create a console with the built-in commands
    pub fn new(board: B, settings: ConsoleConfig) -> Self {
        Self::with_registry(board, Registry::builtin(), settings)
    }

    /// Create a console with a custom command table
    pub const fn with_registry(board: B, registry: Registry, settings: ConsoleConfig) -> Self {
        Self {
            board,
            registry,
            settings,
            paste_depth: 0,
        }
    }

    pub const fn board(&self) -> &B {
        &self.board
    }

    pub const fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn into_board(self) -> B {
        self.board
    }

    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    pub const fn settings(&self) -> &ConsoleConfig {
        &self.settings
    }

    /// Run a console session until an exit command succeeds
    ///
    /// The status screen is shown before every prompt.
    pub fn run(&mut self, config: &mut ModuleConfig) {
        loop {
            self.show_status_prompt(config);
            if self.run_command_prompt(config).should_exit() {
                break;
            }
        }
    }

    /// Show the configuration snapshot followed by the prompt marker
    pub fn show_status_prompt(&mut self, config: &ModuleConfig) {
        let _ = status::show_status_prompt(&mut self.board, config, self.settings.program_id);
    }

    /// Read one command line and execute it
    pub fn run_command_prompt(&mut self, config: &mut ModuleConfig) -> Outcome {
        let line = self.read_line();
        self.execute(&line, config)
    }

    /// Execute one command line
    pub fn execute(&mut self, line: &str, config: &mut ModuleConfig) -> Outcome {
        let Some(descriptor) = line.chars().next().and_then(|key| self.registry.lookup(key))
        else {
            self.say(UNKNOWN_COMMAND);
            return Outcome::UnknownCommand;
        };

        #[cfg(feature = "esp32-log")]
        println!("[console] command '{}'", descriptor.key);

        let args = match parse_args(line, usize::from(descriptor.arity)) {
            Ok(args) => args,
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("[console] '{}' rejected: {}", descriptor.key, error);

                self.say(match error {
                    Error::MissingArguments => ARGUMENTS_ARE_MISSING,
                    Error::ArgumentFormat => ARGUMENTS_ARE_INVALID,
                    _ => UNKNOWN_PARSER_ERROR,
                });
                self.print(format_args!("Usage: {}{CRLF}", descriptor.usage));
                return Outcome::Rejected(error);
            }
        };

        match descriptor.command.run(self, config, &args) {
            Ok(()) if descriptor.exits => Outcome::Exit,
            Ok(()) => Outcome::Completed,
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("[console] '{}' failed: {}", descriptor.key, error);

                if let Some(text) = error.diagnostic() {
                    self.say(text);
                }
                self.say(ERROR_RUNNING_COMMAND);
                Outcome::Failed(error)
            }
        }
    }

    /// Check whether another nested session may be started
    pub(crate) const fn can_nest(&self) -> bool {
        self.paste_depth < self.settings.max_paste_depth
    }

    /// Run nested sessions from pasted input until one of them exits
    ///
    /// Uses the native call stack; depth is bounded by
    /// [`ConsoleConfig::max_paste_depth`].
    pub(crate) fn run_nested(&mut self, config: &mut ModuleConfig) -> Result<(), Error> {
        if !self.can_nest() {
            return Err(Error::NestingTooDeep);
        }

        self.paste_depth += 1;
        while !self.run_command_prompt(config).should_exit() {}
        self.paste_depth -= 1;

        Ok(())
    }

    /// Discard the lines of a rejected paste up to its closing exit command
    ///
    /// Pastes opened inside the discarded lines are balanced as well.
    pub(crate) fn skip_paste(&mut self) {
        let mut open: usize = 1;
        while open > 0 {
            let line = self.read_line();
            match line.chars().next().and_then(|key| self.registry.lookup(key)) {
                Some(descriptor) if descriptor.command == CommandId::PasteFile => open += 1,
                Some(descriptor) if descriptor.exits => open -= 1,
                _ => {}
            }
        }
    }

    pub(crate) fn read_line(&mut self) -> LineBuffer {
        let mut line = LineBuffer::new();
        self.board.read_line(&mut line);
        line
    }

    /// Prompt for a number until the operator enters a valid one
    pub(crate) fn ask_int(&mut self, prompt: &str, radix: u32) -> i32 {
        loop {
            self.write(prompt);
            let line = self.read_line();
            match parse_value(&line, radix) {
                Ok(value) => return value,
                Err(_) => self.say(ARGUMENTS_ARE_INVALID),
            }
        }
    }

    /// Write text without a line terminator
    pub(crate) fn write(&mut self, text: &str) {
        let _ = self.board.write_str(text);
    }

    /// Write one line of text
    pub(crate) fn say(&mut self, text: &str) {
        let _ = self.board.write_str(text);
        let _ = self.board.write_str(CRLF);
    }

    pub(crate) fn print(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.board.write_fmt(args);
    }
}
