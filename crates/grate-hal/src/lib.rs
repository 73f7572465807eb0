#![no_std]

/// Sink for host1x command words, implemented by the submission layer.
///
/// Implementations own framing and flushing; the shader codec only pushes
/// words in stream order.
pub trait PushBuffer {
    type Error: core::fmt::Debug;

    /// Append one 32-bit command word.
    fn push(&mut self, word: u32) -> Result<(), Self::Error>;

    /// Append a run of command words in order.
    fn push_all(&mut self, words: &[u32]) -> Result<(), Self::Error> {
        for &word in words {
            self.push(word)?;
        }
        Ok(())
    }

    /// Words that can still be pushed before the buffer must be flushed,
    /// or `None` if the implementation grows on demand.
    fn remaining(&self) -> Option<usize> {
        None
    }
}

/// Fixed-size push buffer over a caller-provided word slice.
pub struct SlicePushBuffer<'a> {
    words: &'a mut [u32],
    len: usize,
}

/// Returned when a [`SlicePushBuffer`] has no room left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushBufferFull {
    /// Capacity of the underlying slice in words.
    pub capacity: usize,
}

impl<'a> SlicePushBuffer<'a> {
    pub fn new(words: &'a mut [u32]) -> Self {
        Self { words, len: 0 }
    }

    /// Words pushed so far.
    pub fn as_slice(&self) -> &[u32] {
        &self.words[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PushBuffer for SlicePushBuffer<'_> {
    type Error = PushBufferFull;

    fn push(&mut self, word: u32) -> Result<(), Self::Error> {
        let capacity = self.words.len();
        let slot = self
            .words
            .get_mut(self.len)
            .ok_or(PushBufferFull { capacity })?;
        *slot = word;
        self.len += 1;
        Ok(())
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.words.len() - self.len)
    }
}
