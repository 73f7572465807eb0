//! Register: ALU_BUFFER_SIZE

/// ALU_BUFFER_SIZE
///
/// Number of ALU buffer slots per fragment (1-4) and the matching
/// ratio the hardware derives from [`ALU_BUFFER_DIVIDEND`].
///
/// [`ALU_BUFFER_DIVIDEND`]: crate::components::gr3d_regs::ALU_BUFFER_DIVIDEND
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct AluBufferSizeReg(u32);

impl core::default::Default for AluBufferSizeReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl AluBufferSizeReg {
    pub const SIZE_MINUS_ONE_OFFSET: usize = 0;
    pub const SIZE_MINUS_ONE_WIDTH: usize = 2;
    pub const SIZE_MINUS_ONE_MASK: u32 = 0x3;

    pub const RATIO_OFFSET: usize = 24;
    pub const RATIO_WIDTH: usize = 8;
    pub const RATIO_MASK: u32 = 0xFF;

    /// Largest buffer size the SIZE_MINUS_ONE field can carry.
    pub const MAX_BUFFER_SIZE: u32 = Self::SIZE_MINUS_ONE_MASK + 1;

    #[inline(always)]
    #[must_use]
    pub const fn from_raw(val: u32) -> Self {
        Self(val)
    }

    #[inline(always)]
    #[must_use]
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// Build the register value for a buffer size in `1..=MAX_BUFFER_SIZE`.
    ///
    /// The caller validates the range; a size of zero has no encoding.
    #[must_use]
    pub const fn for_buffer_size(size: u32) -> Self {
        let ratio = crate::components::gr3d_regs::ALU_BUFFER_DIVIDEND / (size * 4);
        Self((ratio << Self::RATIO_OFFSET) | (size - 1))
    }

    /// SIZE_MINUS_ONE
    #[inline(always)]
    #[must_use]
    pub fn size_minus_one(&self) -> u8 {
        let val = (self.0 >> Self::SIZE_MINUS_ONE_OFFSET) & Self::SIZE_MINUS_ONE_MASK;
        val as u8
    }

    /// SIZE_MINUS_ONE
    #[inline(always)]
    pub fn set_size_minus_one(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SIZE_MINUS_ONE_MASK << Self::SIZE_MINUS_ONE_OFFSET))
            | ((val & Self::SIZE_MINUS_ONE_MASK) << Self::SIZE_MINUS_ONE_OFFSET);
    }

    /// RATIO
    #[inline(always)]
    #[must_use]
    pub fn ratio(&self) -> u8 {
        let val = (self.0 >> Self::RATIO_OFFSET) & Self::RATIO_MASK;
        val as u8
    }

    /// RATIO
    #[inline(always)]
    pub fn set_ratio(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::RATIO_MASK << Self::RATIO_OFFSET))
            | ((val & Self::RATIO_MASK) << Self::RATIO_OFFSET);
    }

    /// Buffer size as seen by the hardware (SIZE_MINUS_ONE + 1).
    #[must_use]
    pub fn buffer_size(&self) -> u32 {
        self.size_minus_one() as u32 + 1
    }
}

impl core::fmt::Debug for AluBufferSizeReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AluBufferSizeReg")
            .field("size_minus_one", &self.size_minus_one())
            .field("ratio", &self.ratio())
            .finish()
    }
}
