// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Static memory layout of the board.

use crate::config::{
    devices::{GIC_SIZE, GICC_PADDR, GICD_PADDR},
    plat::{PHYS_MEMORY_BASE, PHYS_MEMORY_SIZE, PHYS_VIRT_OFFSET},
};

/// Memory type of a mapped range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemAttr {
    /// Cacheable normal memory.
    Normal,
    /// nGnRE device memory.
    Device,
}

/// One range for the kernel address space, with an inclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemDesc {
    pub vaddr_start: usize,
    pub vaddr_end: usize,
    pub paddr_start: usize,
    pub attr: MemAttr,
}

impl MemDesc {
    const fn linear(paddr: usize, size: usize, attr: MemAttr) -> Self {
        Self {
            vaddr_start: paddr + PHYS_VIRT_OFFSET,
            vaddr_end: paddr + PHYS_VIRT_OFFSET + size - 1,
            paddr_start: paddr,
            attr,
        }
    }

    /// Size of the range in bytes.
    pub const fn size(&self) -> usize {
        self.vaddr_end - self.vaddr_start + 1
    }
}

/// RAM plus the GIC-400 register frames.
pub static PLATFORM_MEM_DESC: [MemDesc; 3] = [
    MemDesc::linear(PHYS_MEMORY_BASE, PHYS_MEMORY_SIZE, MemAttr::Normal),
    MemDesc::linear(GICD_PADDR, GIC_SIZE, MemAttr::Device),
    MemDesc::linear(GICC_PADDR, GIC_SIZE, MemAttr::Device),
];
