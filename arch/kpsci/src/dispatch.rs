// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Version-selected PSCI operation bindings.

use crate::{AddrWidth, fid::*};

/// Function ids bound to the seven negotiated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionFamily {
    pub version: u32,
    pub cpu_suspend: u32,
    pub cpu_off: u32,
    pub cpu_on: u32,
    pub affinity_info: u32,
    pub migrate: u32,
    pub migrate_info_type: u32,
}

impl FunctionFamily {
    /// PSCI 0.2 ids using the SMC32 convention throughout.
    pub const V0_2_NARROW: Self = Self {
        version: PSCI_0_2_FN_PSCI_VERSION,
        cpu_suspend: PSCI_0_2_FN_CPU_SUSPEND,
        cpu_off: PSCI_0_2_FN_CPU_OFF,
        cpu_on: PSCI_0_2_FN_CPU_ON,
        affinity_info: PSCI_0_2_FN_AFFINITY_INFO,
        migrate: PSCI_0_2_FN_MIGRATE,
        migrate_info_type: PSCI_0_2_FN_MIGRATE_INFO_TYPE,
    };

    /// PSCI 0.2 ids with SMC64 encodings for address-carrying calls.
    pub const V0_2_EXTENDED: Self = Self {
        version: PSCI_0_2_FN_PSCI_VERSION,
        cpu_suspend: PSCI_0_2_FN64_CPU_SUSPEND,
        cpu_off: PSCI_0_2_FN_CPU_OFF,
        cpu_on: PSCI_0_2_FN64_CPU_ON,
        affinity_info: PSCI_0_2_FN64_AFFINITY_INFO,
        migrate: PSCI_0_2_FN64_MIGRATE,
        migrate_info_type: PSCI_0_2_FN_MIGRATE_INFO_TYPE,
    };

    /// The PSCI 0.2 family for the given addressing width.
    pub const fn v0_2(width: AddrWidth) -> Self {
        match width {
            AddrWidth::Narrow => Self::V0_2_NARROW,
            AddrWidth::Extended => Self::V0_2_EXTENDED,
        }
    }
}

/// The dispatch table: either nothing is callable yet, or all seven
/// operations are, through one function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch {
    #[default]
    Unbound,
    Negotiated(FunctionFamily),
}

impl Dispatch {
    #[inline]
    pub const fn is_bound(&self) -> bool {
        matches!(self, Dispatch::Negotiated(_))
    }

    #[inline]
    pub const fn family(&self) -> Option<&FunctionFamily> {
        match self {
            Dispatch::Unbound => None,
            Dispatch::Negotiated(family) => Some(family),
        }
    }
}

/// SYSTEM_RESET2 id for the given addressing width.
pub(crate) const fn system_reset2(width: AddrWidth) -> u32 {
    match width {
        AddrWidth::Narrow => PSCI_1_1_FN_SYSTEM_RESET2,
        AddrWidth::Extended => PSCI_1_1_FN64_SYSTEM_RESET2,
    }
}
