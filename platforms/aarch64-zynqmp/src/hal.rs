// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Services the board bring-up consumes from the rest of the kernel.

use core::ops::Range;

use kpsci::{Psci, Trap};
use memory_addr::{PhysAddr, VirtAddr};

use crate::mem::MemDesc;

/// Kernel collaborators driven by the board bring-up sequence.
///
/// None of these are implemented here: the address space, allocators,
/// interrupt controller, timer and console drivers live in their own
/// modules. Every method is called from boot context without a scheduler.
pub trait BoardHal: Sync {
    /// Installs the kernel address-space window `[base, base + size)`.
    fn map_kernel_aspace(&self, base: VirtAddr, size: usize, pv_offset: usize);

    /// Hands a physical range to the page allocator.
    fn page_init(&self, region: Range<PhysAddr>);

    /// Maps the platform memory descriptors.
    fn mmu_setup(&self, descs: &[MemDesc]);

    /// Initializes the kernel heap over `region`.
    fn heap_init(&self, region: Range<VirtAddr>);

    /// Global interrupt controller init.
    fn irq_init(&self);

    fn uart_init(&self);

    /// Global tick timer init.
    fn timer_init(&self);

    /// Sets the idle hook of the calling CPU.
    fn set_idle_hook(&self, hook: fn());

    /// Attaches the named device as the system console.
    fn console_set_device(&self, name: &str);

    /// Kernel virtual to physical translation.
    fn v2p(&self, vaddr: VirtAddr) -> Option<PhysAddr>;

    /// Virtual address of the secondary CPU entry code.
    fn secondary_entry(&self) -> VirtAddr;

    /// Root of the shared kernel page table.
    fn kernel_table_root(&self) -> PhysAddr;

    /// Loads `root` as the calling CPU's kernel page table.
    fn ktbl_set(&self, root: PhysAddr);

    /// Installs the trap vector table on the calling CPU.
    fn vector_init(&self);

    /// Initializes the calling CPU's GIC CPU interface.
    fn gic_cpu_init(&self);

    /// Initializes the calling CPU's generic timer.
    fn local_timer_init(&self);

    /// Logical id of the calling CPU.
    fn cpu_id(&self) -> usize;

    /// Enters the scheduler on the calling CPU.
    fn scheduler_start(&self) -> !;

    /// Releases all secondary CPUs.
    ///
    /// The default issues one PSCI CPU_ON per secondary CPU without waiting
    /// for any of them. Platforms with another release mechanism (spin
    /// tables, mailboxes) override this.
    fn secondary_cpu_up<T: Trap>(&self, psci: &Psci<T>)
    where
        Self: Sized,
    {
        crate::mp::psci_secondary_cpu_up(self, psci)
    }
}
