//! Register: PSEQ_DW_CFG

/// PSEQ_DW_CFG
///
/// Number of PSEQ executions between DW (data write) stages.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PseqDwCfgReg(u32);

impl core::default::Default for PseqDwCfgReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl PseqDwCfgReg {
    pub const EXEC_NB_OFFSET: usize = 6;
    pub const EXEC_NB_WIDTH: usize = 7;
    pub const EXEC_NB_MASK: u32 = 0x7F;

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

    /// EXEC_NB
    #[inline(always)]
    #[must_use]
    pub fn exec_nb(&self) -> u8 {
        let val = (self.0 >> Self::EXEC_NB_OFFSET) & Self::EXEC_NB_MASK;
        val as u8
    }

    /// EXEC_NB
    #[inline(always)]
    pub fn set_exec_nb(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::EXEC_NB_MASK << Self::EXEC_NB_OFFSET))
            | ((val & Self::EXEC_NB_MASK) << Self::EXEC_NB_OFFSET);
    }
}

impl core::fmt::Debug for PseqDwCfgReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PseqDwCfgReg")
            .field("exec_nb", &self.exec_nb())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = PseqDwCfgReg::default();
        assert_eq!(reg.exec_nb(), 0);
    }

    #[test]
    fn test_exec_nb_field() {
        let mut reg = PseqDwCfgReg::default();
        reg.set_exec_nb(0x7F);
        assert_eq!(reg.to_raw(), 0x7F << 6);
        assert_eq!(PseqDwCfgReg::from_raw(3 << 6).exec_nb(), 3);
        // Bits outside the field are ignored.
        assert_eq!(PseqDwCfgReg::from_raw(0xFFFF_E03F).exec_nb(), 0);
    }
}
