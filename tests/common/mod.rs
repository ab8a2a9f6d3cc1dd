#![allow(dead_code)]

use std::collections::VecDeque;
use std::fmt;
use std::string::String;
use std::vec::Vec;

use myrtio_led_console::{
    ColorCorrection, ConfigStorage, Console, ConsoleConfig, Error, LineBuffer, LineInput,
    ModuleConfig, PwmOutput, SystemReset,
};

/// Board double with scripted input and recorded side effects
pub struct MockBoard {
    pub input: VecDeque<String>,
    pub output: String,
    pub pwm: Vec<(u8, u16)>,
    pub frames: usize,
    pub channel_offset: u8,
    pub pwm_error: Option<Error>,
    pub stored: Result<ModuleConfig, Error>,
    pub saved: Vec<ModuleConfig>,
    pub save_error: Option<Error>,
    pub resets: usize,
}

impl MockBoard {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|line| String::from(*line)).collect(),
            output: String::new(),
            pwm: Vec::new(),
            frames: 0,
            channel_offset: 0,
            pwm_error: None,
            stored: Err(Error::ConfigNotFound),
            saved: Vec::new(),
            save_error: None,
            resets: 0,
        }
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl LineInput for MockBoard {
    fn read_line(&mut self, line: &mut LineBuffer) {
        let next = self
            .input
            .pop_front()
            .expect("console read past the end of the scripted input");
        line.clear();
        for c in next.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
    }
}

impl fmt::Write for MockBoard {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}

impl PwmOutput for MockBoard {
    fn set_brightness(&mut self, channel: u8, brightness: u16) -> Result<(), Error> {
        if let Some(error) = self.pwm_error {
            return Err(error);
        }
        self.pwm.push((channel, brightness));
        Ok(())
    }

    fn send_frame(&mut self) -> Result<(), Error> {
        self.frames += 1;
        Ok(())
    }

    fn map_channel(&self, index: u8) -> u8 {
        index + self.channel_offset
    }
}

impl ConfigStorage for MockBoard {
    fn load(&mut self) -> Result<ModuleConfig, Error> {
        self.stored.clone()
    }

    fn save(&mut self, config: &ModuleConfig) -> Result<(), Error> {
        if let Some(error) = self.save_error {
            return Err(error);
        }
        self.saved.push(config.clone());
        Ok(())
    }
}

impl ColorCorrection for MockBoard {}

impl SystemReset for MockBoard {
    fn request_reset(&mut self) {
        self.resets += 1;
    }
}

/// Console over a mock board fed with `lines`
pub fn console(lines: &[&str]) -> Console<MockBoard> {
    Console::new(MockBoard::new(lines), ConsoleConfig::default())
}

/// Output produced so far, cleared afterwards
pub fn output(console: &mut Console<MockBoard>) -> String {
    console.board_mut().take_output()
}
