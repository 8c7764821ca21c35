// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Idle hooks and system power control.

use crate::init::psci;

/// Idle hook of the boot CPU: sleep until the next interrupt.
pub fn idle_wfi() {
    aarch64_cpu::asm::wfi();
}

/// Idle hook of secondary CPUs: sleep until an event from another CPU.
pub fn idle_wfe() {
    aarch64_cpu::asm::wfe();
}

/// Resets the system through PSCI.
pub fn reboot() {
    match psci() {
        Some(psci) => psci.system_reboot(),
        None => warn!("reboot: PSCI is not initialized"),
    }
}

/// Powers the system off through PSCI and parks the CPU if firmware returns.
pub fn shutdown() -> ! {
    info!("Shutting down...");
    if let Some(psci) = psci() {
        psci.system_off();
    }
    warn!("It should shutdown!");
    loop {
        idle_wfi();
    }
}
