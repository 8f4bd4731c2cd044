//! Output sink that tracks how many lines have been written.

use std::io::{self, Write};

/// Wraps a writer and counts newline bytes passing through it.
///
/// The amalgamator uses the count to tell which output line an expansion
/// starts on, so breadcrumbs can point back at it.
#[derive(Debug)]
pub struct LineCountingWriter<W> {
    inner: W,
    lines: usize,
}

impl<W: Write> LineCountingWriter<W> {
    /// Start counting from zero.
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            lines: 0,
        }
    }

    /// Number of complete lines written so far.
    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// 1-based number of the line the next write will land on.
    #[must_use]
    pub const fn current_line(&self) -> usize {
        self.lines + 1
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for LineCountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.lines += buf[..written].iter().filter(|&&b| b == b'\n').count();
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
