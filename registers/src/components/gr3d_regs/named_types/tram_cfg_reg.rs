//! Register: LINKER_TRAM_CFG

/// LINKER_TRAM_CFG
///
/// Rows of the interpolation buffer (TRAM) used by the linker and the
/// derived row stride [`TRAM_ROW_DIVIDEND`] / rows.
///
/// [`TRAM_ROW_DIVIDEND`]: crate::components::gr3d_regs::TRAM_ROW_DIVIDEND
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct TramCfgReg(u32);

impl core::default::Default for TramCfgReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl TramCfgReg {
    pub const STRIDE_OFFSET: usize = 0;
    pub const STRIDE_WIDTH: usize = 8;
    pub const STRIDE_MASK: u32 = 0xFF;

    pub const ROWS_OFFSET: usize = 8;
    pub const ROWS_WIDTH: usize = 8;
    pub const ROWS_MASK: u32 = 0xFF;

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

    /// Build the register value for `rows` used TRAM rows.
    ///
    /// The caller rejects `rows == 0`.
    #[must_use]
    pub const fn for_rows(rows: u32) -> Self {
        let stride = crate::components::gr3d_regs::TRAM_ROW_DIVIDEND / rows;
        Self(((rows & Self::ROWS_MASK) << Self::ROWS_OFFSET) | (stride & Self::STRIDE_MASK))
    }

    /// STRIDE
    #[inline(always)]
    #[must_use]
    pub fn stride(&self) -> u8 {
        let val = (self.0 >> Self::STRIDE_OFFSET) & Self::STRIDE_MASK;
        val as u8
    }

    /// STRIDE
    #[inline(always)]
    pub fn set_stride(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::STRIDE_MASK << Self::STRIDE_OFFSET))
            | ((val & Self::STRIDE_MASK) << Self::STRIDE_OFFSET);
    }

    /// ROWS
    #[inline(always)]
    #[must_use]
    pub fn rows(&self) -> u8 {
        let val = (self.0 >> Self::ROWS_OFFSET) & Self::ROWS_MASK;
        val as u8
    }

    /// ROWS
    #[inline(always)]
    pub fn set_rows(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::ROWS_MASK << Self::ROWS_OFFSET))
            | ((val & Self::ROWS_MASK) << Self::ROWS_OFFSET);
    }
}

impl core::fmt::Debug for TramCfgReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TramCfgReg")
            .field("stride", &self.stride())
            .field("rows", &self.rows())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = TramCfgReg::default();
        assert_eq!(reg.stride(), 0);
        assert_eq!(reg.rows(), 0);
    }

    #[test]
    fn test_for_rows() {
        let reg = TramCfgReg::for_rows(4);
        assert_eq!(reg.rows(), 4);
        assert_eq!(reg.stride(), 16);
        assert_eq!(reg.to_raw(), 0x0410);
        assert_eq!(TramCfgReg::for_rows(64).to_raw(), 0x4001);
    }
}
