//! Fixed-capacity instruction tables filled word by word.

use gr3d_registers::components::gr3d_regs::INSTRUCTION_CAPACITY;
use gr3d_registers::RegisterClassE;

use crate::error::ShaderError;
use crate::instr::{LinkInstr, PackedInstr};

/// Entries per instruction table.
pub const TABLE_CAPACITY: usize = INSTRUCTION_CAPACITY as usize;

/// Entries in the linker window (two registers each).
pub const LINKER_CAPACITY: usize = TABLE_CAPACITY / 2;

/// Capacity check shared by the encoder and decoder.
///
/// A table of `capacity` words accepts a block only while
/// `filled + incoming < capacity`, so a full table is never reached.
pub fn check_capacity(
    class: RegisterClassE,
    filled: usize,
    incoming: usize,
) -> Result<(), ShaderError> {
    let bank = class.bank();
    if filled + incoming >= bank.word_capacity() {
        return Err(ShaderError::CapacityExceeded {
            class,
            limit: usize::from(bank.capacity),
        });
    }
    Ok(())
}

/// Table of records for one register port.
///
/// Words arrive in stream order; every `T::words()` words complete a record.
#[derive(Clone, Debug)]
pub struct InstructionTable<T: PackedInstr> {
    entries: heapless::Vec<T, TABLE_CAPACITY>,
    words: usize,
}

impl<T: PackedInstr> Default for InstructionTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PackedInstr> InstructionTable<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
            words: 0,
        }
    }

    /// Append one block of payload words, failing before any word is stored
    /// if the block would reach the table's capacity.
    pub fn extend_words(&mut self, payload: &[u32]) -> Result<(), ShaderError> {
        check_capacity(T::CLASS, self.words, payload.len())?;
        for &word in payload {
            self.push_word(word)?;
        }
        Ok(())
    }

    fn push_word(&mut self, word: u32) -> Result<(), ShaderError> {
        let slot = self.words % T::words();
        if slot == 0 && self.entries.push(T::default()).is_err() {
            return Err(ShaderError::CapacityExceeded {
                class: T::CLASS,
                limit: TABLE_CAPACITY,
            });
        }
        let Some(entry) = self.entries.last_mut() else {
            return Err(ShaderError::CapacityExceeded {
                class: T::CLASS,
                limit: TABLE_CAPACITY,
            });
        };
        entry.parts_mut()[T::STREAM_ORDER[slot]] = word;
        self.words += 1;
        Ok(())
    }

    /// Records written so far. A partially written trailing record counts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words written so far.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Record at `index`, or a zero record past the end.
    #[must_use]
    pub fn get_or_zero(&self, index: usize) -> T {
        self.entries.get(index).copied().unwrap_or_default()
    }
}

/// The positional linker register window.
///
/// Register `first + w` holds word `w % 2` of entry `w / 2`.
#[derive(Clone, Debug)]
pub struct LinkerWindow {
    entries: [LinkInstr; LINKER_CAPACITY],
    used: usize,
}

impl Default for LinkerWindow {
    fn default() -> Self {
        Self {
            entries: [LinkInstr::default(); LINKER_CAPACITY],
            used: 0,
        }
    }
}

impl LinkerWindow {
    /// Write word index `w` of the window.
    pub fn write(&mut self, w: usize, value: u32) -> Result<(), ShaderError> {
        check_capacity(RegisterClassE::Linker, w, 1)?;
        let entry = w / 2;
        self.entries[entry].parts[w % 2] = value;
        self.used = self.used.max(entry + 1);
        Ok(())
    }

    /// Entries up to and including the highest one written.
    #[must_use]
    pub fn as_slice(&self) -> &[LinkInstr] {
        &self.entries[..self.used]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instr::{AluInstr, PseqInstr, VpeInstr};

    #[test]
    fn test_words_fill_records_in_stream_order() {
        let mut table = InstructionTable::<AluInstr>::new();
        table.extend_words(&[1, 0, 3, 2, 5, 4, 7, 6, 11, 10]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.word_count(), 10);
        assert_eq!(table.as_slice()[0].parts, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(table.as_slice()[1].parts, [10, 11, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_block_reaching_capacity_fails() {
        let mut table = InstructionTable::<PseqInstr>::new();
        assert!(table.extend_words(&[0; 63]).is_ok());
        assert_eq!(
            table.extend_words(&[0]),
            Err(ShaderError::CapacityExceeded {
                class: RegisterClassE::Pseq,
                limit: 64
            })
        );
        assert_eq!(table.len(), 63);

        let mut table = InstructionTable::<PseqInstr>::new();
        assert!(table.extend_words(&[0; 64]).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn test_vertex_capacity_in_words() {
        let mut table = InstructionTable::<VpeInstr>::new();
        assert!(table.extend_words(&[0; 63 * 4]).is_ok());
        assert!(table.extend_words(&[0; 4]).is_err());
    }

    #[test]
    fn test_get_or_zero() {
        let mut table = InstructionTable::<PseqInstr>::new();
        table.extend_words(&[7]).unwrap();
        assert_eq!(table.get_or_zero(0), PseqInstr::new(7));
        assert_eq!(table.get_or_zero(40), PseqInstr::default());
    }

    #[test]
    fn test_linker_window_positional() {
        let mut window = LinkerWindow::default();
        window.write(4, 0xAAAA).unwrap();
        window.write(1, 0xBBBB).unwrap();
        assert_eq!(window.as_slice().len(), 3);
        assert_eq!(window.as_slice()[0], LinkInstr::new(0, 0xBBBB));
        assert_eq!(window.as_slice()[2], LinkInstr::new(0xAAAA, 0));
        assert!(window.write(62, 1).is_ok());
        assert!(window.write(63, 1).is_err());
    }
}
