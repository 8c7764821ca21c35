// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Primary CPU platform initialization.

use kpsci::{AddrWidth, AffinityTable, ArmTrap, Psci, PsciVersion, Trap};
use lazyinit::LazyInit;
use memory_addr::{pa, va};

use crate::{
    BoardHal,
    config::{
        devices::CONSOLE_DEVICE,
        plat::{
            CPU_MPIDR, HEAP_BEGIN, HEAP_END, KERNEL_ASPACE_BASE, KERNEL_ASPACE_SIZE, PAGE_END,
            PAGE_START, PHYS_VIRT_OFFSET,
        },
        psci::{METHOD, VERSION_MAJOR, VERSION_MINOR},
    },
    initcall::run_board_initcalls,
    mem::PLATFORM_MEM_DESC,
    power::idle_wfi,
};

/// The system PSCI context, published once by [`platform_init`].
pub static PSCI: LazyInit<Psci<ArmTrap>> = LazyInit::new();

/// The PSCI context, if the boot CPU has published it.
pub fn psci() -> Option<&'static Psci<ArmTrap>> {
    PSCI.get()
}

/// The PSCI version requested from firmware.
pub const fn psci_version() -> PsciVersion {
    PsciVersion::new(VERSION_MAJOR as u16, VERSION_MINOR as u16)
}

/// Runs the one-time board init on the boot CPU and returns the PSCI
/// context built on `trap`.
///
/// A PSCI failure only leaves the context without bound operations; boot
/// goes on without CPU power management.
pub fn board_init<H: BoardHal, T: Trap>(hal: &H, trap: T, dtb: usize) -> Psci<T> {
    hal.map_kernel_aspace(va!(KERNEL_ASPACE_BASE), KERNEL_ASPACE_SIZE, PHYS_VIRT_OFFSET);
    hal.page_init(pa!(PAGE_START)..pa!(PAGE_END));
    hal.mmu_setup(&PLATFORM_MEM_DESC);
    hal.heap_init(va!(HEAP_BEGIN)..va!(HEAP_END));

    hal.irq_init();
    hal.uart_init();
    hal.timer_init();
    hal.set_idle_hook(idle_wfi);

    let mut psci = Psci::new(trap, AffinityTable::new(CPU_MPIDR, AddrWidth::native()));
    if let Err(err) = psci.init(Some(METHOD), psci_version(), dtb) {
        warn!("PSCI unavailable ({err}), CPU power management disabled");
    }

    hal.console_set_device(CONSOLE_DEVICE);
    info!("heap: [{HEAP_BEGIN:#010x} - {HEAP_END:#010x}]");

    run_board_initcalls();
    psci
}

/// Board init with the hardware conduit; publishes the context in [`PSCI`].
pub fn platform_init<H: BoardHal>(hal: &H, dtb: usize) -> &'static Psci<ArmTrap> {
    PSCI.init_once(board_init(hal, ArmTrap, dtb))
}
