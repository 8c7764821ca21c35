// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Secondary CPU release and per-CPU bring-up.

use kpsci::{Psci, Trap};
use kspin::SpinRaw;

use crate::{BoardHal, power::idle_wfe};

/// Serializes the per-CPU init of secondary CPUs.
static BOOT_LOCK: SpinRaw<()> = SpinRaw::new(());

/// Issues PSCI CPU_ON for CPUs `1..N`, all entering at the physical address
/// of the secondary entry code.
///
/// Best effort: results are not checked and nothing waits for a CPU to come
/// up. A CPU that firmware refuses to start simply never joins.
///
/// # Panics
///
/// Panics if the entry code has no physical mapping.
pub fn psci_secondary_cpu_up<H: BoardHal, T: Trap>(hal: &H, psci: &Psci<T>) {
    let entry_va = hal.secondary_entry();
    let Some(entry) = hal.v2p(entry_va) else {
        panic!(
            "Failed to translate '_secondary_cpu_entry' ({:#x}) to physical address",
            entry_va.as_usize()
        );
    };

    for cpu_id in 1..psci.affinity().cpu_num() {
        let ret = psci.cpu_on(cpu_id, entry.as_usize());
        debug!("CPU_ON cpu {cpu_id} entry {:#x}: {ret:?}", entry.as_usize());
    }
}

/// Per-CPU init of a secondary CPU, run under the boot lock.
pub fn secondary_cpu_init<H: BoardHal>(hal: &H) {
    let _guard = BOOT_LOCK.lock();

    hal.ktbl_set(hal.kernel_table_root());
    hal.vector_init();
    hal.gic_cpu_init();
    hal.local_timer_init();
    hal.set_idle_hook(idle_wfe);

    info!("cpu {} boot success", hal.cpu_id());
}

/// Entry of a secondary CPU once its early assembly has set up a stack.
pub fn secondary_cpu_bsp_start<H: BoardHal>(hal: &H) -> ! {
    secondary_cpu_init(hal);
    hal.scheduler_start()
}
