//! Interrupt-fed serial input.
//!
//! The UART receive interrupt pushes bytes into an [`RxQueue`] through an
//! [`RxProducer`]; the console pulls complete lines out of it with a
//! [`QueuedLineReader`]. The queue is a `heapless::Deque` guarded by a
//! critical section, so producer and reader may live in different
//! execution contexts.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::board::LineInput;
use crate::parser::LineBuffer;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;

/// Error returned when a byte arrives while the queue is full.
///
/// Carries the dropped byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overrun(pub u8);

/// Bounded receive queue shared between an interrupt and the console.
pub struct RxQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> RxQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a producer handle for the receive interrupt.
    pub const fn producer(&self) -> RxProducer<'_, SIZE> {
        RxProducer { queue: self }
    }

    /// Get a line reader over this queue.
    pub const fn line_reader(&self) -> QueuedLineReader<'_, SIZE> {
        QueuedLineReader {
            queue: self,
            after_cr: false,
        }
    }

    /// Append a received byte.
    ///
    /// Returns `Err(Overrun(byte))` if the queue is full.
    pub fn push(&self, byte: u8) -> Result<(), Overrun> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(byte).map_err(Overrun)
        })
    }

    /// Take the oldest byte, if any.
    pub fn pop(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of bytes waiting.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for RxQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for an [`RxQueue`].
#[derive(Clone, Copy)]
pub struct RxProducer<'a, const SIZE: usize> {
    queue: &'a RxQueue<SIZE>,
}

impl<const SIZE: usize> RxProducer<'_, SIZE> {
    /// Append one received byte.
    pub fn push(&self, byte: u8) -> Result<(), Overrun> {
        self.queue.push(byte)
    }

    /// Append as many bytes as fit; returns how many were queued.
    pub fn push_slice(&self, bytes: &[u8]) -> usize {
        let mut queued = 0;
        for &byte in bytes {
            if self.queue.push(byte).is_err() {
                #[cfg(feature = "esp32-log")]
                println!("[serial] rx overrun, dropped {} bytes", bytes.len() - queued);
                break;
            }
            queued += 1;
        }
        queued
    }
}

/// Line editor over an [`RxQueue`].
///
/// A line ends at `\r` or `\n`; the `\n` of a `\r\n` pair is swallowed.
/// Backspace and DEL remove the previous character. Only tabs and printable
/// ASCII are kept. Characters beyond the line capacity are discarded.
pub struct QueuedLineReader<'a, const SIZE: usize> {
    queue: &'a RxQueue<SIZE>,
    after_cr: bool,
}

impl<const SIZE: usize> QueuedLineReader<'_, SIZE> {
    /// Busy-wait for the next byte.
    fn next_byte(&self) -> u8 {
        loop {
            if let Some(byte) = self.queue.pop() {
                return byte;
            }
            core::hint::spin_loop();
        }
    }
}

impl<const SIZE: usize> LineInput for QueuedLineReader<'_, SIZE> {
    fn read_line(&mut self, line: &mut LineBuffer) {
        line.clear();
        loop {
            let byte = self.next_byte();
            let after_cr = core::mem::replace(&mut self.after_cr, byte == b'\r');

            match byte {
                b'\n' if after_cr => {}
                b'\r' | b'\n' => return,
                BACKSPACE | DELETE => {
                    line.pop();
                }
                b'\t' | 0x20..=0x7e => {
                    let _ = line.push(char::from(byte));
                }
                _ => {}
            }
        }
    }
}
