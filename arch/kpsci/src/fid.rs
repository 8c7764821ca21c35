// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! PSCI function identifiers (ARM DEN0022).
//!
//! Calls that carry an address-sized argument exist twice: the SMC32
//! (`FN_*`) encoding and the SMC64 (`FN64_*`) encoding. Everything else only
//! has the 32-bit encoding.

/// Base of the SMC32 PSCI function range.
pub const PSCI_0_2_FN_BASE: u32 = 0x8400_0000;
/// Base of the SMC64 PSCI function range.
pub const PSCI_0_2_FN64_BASE: u32 = 0xC400_0000;

pub const PSCI_0_2_FN_PSCI_VERSION: u32 = PSCI_0_2_FN_BASE;
pub const PSCI_0_2_FN_CPU_SUSPEND: u32 = PSCI_0_2_FN_BASE + 1;
pub const PSCI_0_2_FN_CPU_OFF: u32 = PSCI_0_2_FN_BASE + 2;
pub const PSCI_0_2_FN_CPU_ON: u32 = PSCI_0_2_FN_BASE + 3;
pub const PSCI_0_2_FN_AFFINITY_INFO: u32 = PSCI_0_2_FN_BASE + 4;
pub const PSCI_0_2_FN_MIGRATE: u32 = PSCI_0_2_FN_BASE + 5;
pub const PSCI_0_2_FN_MIGRATE_INFO_TYPE: u32 = PSCI_0_2_FN_BASE + 6;
pub const PSCI_0_2_FN_SYSTEM_OFF: u32 = PSCI_0_2_FN_BASE + 8;
pub const PSCI_0_2_FN_SYSTEM_RESET: u32 = PSCI_0_2_FN_BASE + 9;

pub const PSCI_0_2_FN64_CPU_SUSPEND: u32 = PSCI_0_2_FN64_BASE + 1;
pub const PSCI_0_2_FN64_CPU_ON: u32 = PSCI_0_2_FN64_BASE + 3;
pub const PSCI_0_2_FN64_AFFINITY_INFO: u32 = PSCI_0_2_FN64_BASE + 4;
pub const PSCI_0_2_FN64_MIGRATE: u32 = PSCI_0_2_FN64_BASE + 5;

pub const PSCI_1_0_FN_PSCI_FEATURES: u32 = PSCI_0_2_FN_BASE + 0xa;

pub const PSCI_1_1_FN_SYSTEM_RESET2: u32 = PSCI_0_2_FN_BASE + 0x12;
pub const PSCI_1_1_FN64_SYSTEM_RESET2: u32 = PSCI_0_2_FN64_BASE + 0x12;

/// `reset_type` for SYSTEM_RESET2: bit 31 clear selects the architectural
/// reset types, value 0 is SYSTEM_WARM_RESET.
pub const PSCI_1_1_RESET_TYPE_SYSTEM_WARM_RESET: usize = 0;
