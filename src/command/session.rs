//! Commands acting on the console session itself

use crate::board::Board;
use crate::config::ModuleConfig;
use crate::console::{CRLF, Console};
use crate::error::Error;

const BEGINNING_ECHO: &str = "Echoing... Finish with q on a single line";
const PASTE_NOW: &str = "Paste a file with one command per line, finish with q";
const PASTE_TOO_DEEP: &str = "Paste files nested too deeply";

/// `e`: read and discard lines until a line consisting of `q`
pub(super) fn echo<B: Board>(console: &mut Console<B>) -> Result<(), Error> {
    console.say(BEGINNING_ECHO);
    while console.read_line().as_str() != "q" {}
    Ok(())
}

/// `f`: run pasted commands until one of them quits
///
/// The `q` ending the paste only ends the nested session; the outer session
/// continues. Errors of pasted commands are reported but do not stop the
/// paste. A paste nested too deeply is read to its end and discarded.
pub(super) fn paste_file<B: Board>(
    console: &mut Console<B>,
    config: &mut ModuleConfig,
) -> Result<(), Error> {
    if !console.can_nest() {
        console.say(PASTE_TOO_DEEP);
        console.skip_paste();
        return Err(Error::NestingTooDeep);
    }

    console.say(PASTE_NOW);
    console.run_nested(config)
}

/// `r`
pub(super) fn reset<B: Board>(console: &mut Console<B>) -> Result<(), Error> {
    console.board_mut().request_reset();
    Ok(())
}

/// `?`: list the usage of every command in table order
pub(super) fn help<B: Board>(console: &mut Console<B>) -> Result<(), Error> {
    for descriptor in console.registry().iter() {
        console.say(descriptor.usage);
    }
    console.write(CRLF);
    Ok(())
}
