//! Shared growth policy for the two amortized-append buffers in this
//! crate: the backing store of a [`List`](crate::List) and the output
//! accumulator underneath the printer.

use std::collections::TryReserveError;
use std::io;

/// Capacity floor for the output accumulator.
const ACCUMULATOR_FLOOR: usize = 16;

/// Computes the next capacity for a buffer that currently has room for
/// `current` slots and wants headroom for at least `extra` more.
///
/// Growth is geometric (one-and-a-half times the current capacity)
/// plus the requested headroom, keeping repeated appends amortized
/// linear.
pub(crate) fn next_capacity(current: usize, extra: usize) -> usize {
    current + current / 2 + extra
}

/// A growable output byte buffer.
///
/// Implements `io::Write` so it can sit underneath a
/// [`Printer`](crate::Printer). Growth is fallible: an allocation
/// failure surfaces as `io::ErrorKind::OutOfMemory` instead of
/// aborting the process.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    buf: Vec<u8>,
}

impl Accumulator {
    pub fn new() -> Self {
        Accumulator { buf: Vec::new() }
    }

    /// Appends `bytes`, growing the buffer as needed.
    pub fn put(&mut self, bytes: &[u8]) -> Result<(), TryReserveError> {
        let len = self.buf.len();
        if len + bytes.len() > self.buf.capacity() {
            let target = next_capacity(self.buf.capacity(), bytes.len() + 1).max(ACCUMULATOR_FLOOR);
            self.buf.try_reserve_exact(target - len)?;
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl io::Write for Accumulator {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.put(buf)
            .map_err(|_| io::Error::new(io::ErrorKind::OutOfMemory, "output buffer growth failed"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
