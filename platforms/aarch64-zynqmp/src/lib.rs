// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Board bring-up for the ZynqMP Cortex-A53 cluster.
//!
//! The boot CPU runs [`platform_init`] once: it sets up memory, interrupt,
//! console and timer through the [`BoardHal`] collaborator, negotiates PSCI
//! and publishes the resulting context in [`PSCI`]. Once the shared page
//! tables are in place it calls [`BoardHal::secondary_cpu_up`]; each
//! secondary CPU then enters [`secondary_cpu_bsp_start`].
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

mod hal;
mod init;
pub mod initcall;
mod mem;
mod mp;
mod power;
pub mod shell;

pub mod config {
    //! Platform configuration module.
    //!
    //! If the `PLAT_CONFIG_PATH` environment variable is set, it will load the
    //! configuration from the specified path. Otherwise, it will fall back to
    //! the `zynqmp.toml` file in the package directory.
    axconfig_macros::include_configs!(path_env = "PLAT_CONFIG_PATH", fallback = "zynqmp.toml");

    const _: () = assert!(
        const_str::equal!(PACKAGE, env!("CARGO_PKG_NAME")),
        "`PACKAGE` field in the configuration does not match the Package name. Please check your \
         configuration file."
    );
    const _: () = assert!(
        plat::CPU_MPIDR.len() == plat::CPU_NUM,
        "`cpu-mpidr` must list one MPIDR per CPU"
    );
}

pub use self::hal::BoardHal;
pub use self::init::{PSCI, board_init, platform_init, psci, psci_version};
pub use self::mem::{MemAttr, MemDesc, PLATFORM_MEM_DESC};
pub use self::mp::{psci_secondary_cpu_up, secondary_cpu_bsp_start, secondary_cpu_init};
pub use self::power::{idle_wfe, idle_wfi, reboot, shutdown};
