//! Command-by-command walk over a host1x word stream.

use gr3d_registers::{CommandWord, OpcodeE};

use crate::error::ShaderError;

/// One command word with its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command<'a> {
    /// Index of the command word in the stream.
    pub at: usize,
    pub word: CommandWord,
    pub opcode: OpcodeE,
    pub payload: &'a [u32],
}

impl Command<'_> {
    /// Register address written by each payload word, in payload order.
    ///
    /// INCR walks upward from the offset, NONINCR repeats it, MASK visits
    /// `offset + b` for each set bit `b` from the lowest. Addresses may run
    /// past the 12-bit register space.
    pub fn targets(&self) -> impl Iterator<Item = u32> + '_ {
        let offset = u32::from(self.word.offset());
        let mask = self.word.payload();
        let opcode = self.opcode;
        let mut bits = (0..16u32).filter(move |&b| mask & (1u16 << b) != 0);
        (0..self.payload.len() as u32).map(move |i| match opcode {
            OpcodeE::Incr => offset + i,
            OpcodeE::Mask => offset + bits.next().unwrap_or(0),
            _ => offset,
        })
    }
}

/// Iterator over the commands of a stream.
///
/// Yields an error and then stops at the first invalid opcode or truncated
/// payload.
pub struct CommandReader<'a> {
    words: &'a [u32],
    pos: usize,
    failed: bool,
}

impl<'a> CommandReader<'a> {
    #[must_use]
    pub fn new(words: &'a [u32]) -> Self {
        Self {
            words,
            pos: 0,
            failed: false,
        }
    }

    fn read(&mut self) -> Result<Command<'a>, ShaderError> {
        let at = self.pos;
        let word = CommandWord::from_raw(self.words[at]);
        let opcode = word.opcode().map_err(|_| ShaderError::InvalidOpcode {
            at,
            word: word.to_raw(),
        })?;
        let needed = word.payload_len().map_err(|_| ShaderError::InvalidOpcode {
            at,
            word: word.to_raw(),
        })?;
        let start = at + 1;
        let payload = self
            .words
            .get(start..start + needed)
            .ok_or(ShaderError::Truncated {
                at,
                needed,
                remaining: self.words.len() - start,
            })?;
        self.pos = start + needed;
        Ok(Command {
            at,
            word,
            opcode,
            payload,
        })
    }
}

impl<'a> Iterator for CommandReader<'a> {
    type Item = Result<Command<'a>, ShaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.words.len() {
            return None;
        }
        let item = self.read();
        self.failed = item.is_err();
        Some(item)
    }
}
