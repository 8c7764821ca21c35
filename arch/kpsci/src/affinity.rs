// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Logical CPU index to MPIDR affinity translation.

/// Aff2..Aff0 only; bits [31:24] must be zero.
pub const NARROW_AFFINITY_MASK: u64 = 0x00ff_ffff;
/// Aff3..Aff0; bits [63:40] and [31:24] must be zero.
pub const EXTENDED_AFFINITY_MASK: u64 = 0xff_00ff_ffff;

/// Width of address-sized PSCI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrWidth {
    /// 32-bit arguments, SMC32 function ids.
    Narrow,
    /// 64-bit arguments, SMC64 function ids.
    Extended,
}

impl AddrWidth {
    /// The width of the CPU this crate is built for.
    pub const fn native() -> Self {
        if cfg!(target_pointer_width = "64") {
            AddrWidth::Extended
        } else {
            AddrWidth::Narrow
        }
    }

    /// Mask clearing the reserved MPIDR bits for this width.
    pub const fn affinity_mask(self) -> u64 {
        match self {
            AddrWidth::Narrow => NARROW_AFFINITY_MASK,
            AddrWidth::Extended => EXTENDED_AFFINITY_MASK,
        }
    }
}

/// Raw MPIDR values indexed by logical CPU id.
#[derive(Debug, Clone, Copy)]
pub struct AffinityTable {
    mpidr: &'static [usize],
    width: AddrWidth,
}

impl AffinityTable {
    pub const fn new(mpidr: &'static [usize], width: AddrWidth) -> Self {
        Self { mpidr, width }
    }

    /// Number of logical CPUs.
    #[inline]
    pub const fn cpu_num(&self) -> usize {
        self.mpidr.len()
    }

    #[inline]
    pub const fn width(&self) -> AddrWidth {
        self.width
    }

    /// Target affinity for `cpu_id`.
    ///
    /// `cpu_id` must be below [`cpu_num`](Self::cpu_num).
    #[inline]
    pub fn resolve(&self, cpu_id: usize) -> usize {
        (self.mpidr[cpu_id] as u64 & self.width.affinity_mask()) as usize
    }
}
