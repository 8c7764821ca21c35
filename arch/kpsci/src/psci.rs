// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The PSCI context and its power operations.

use core::fmt;

use crate::{
    AffinityTable, Conduit, Dispatch, FunctionFamily, PsciError, PsciRet, Result, Trap,
    dispatch::system_reset2,
    fid::{
        PSCI_0_2_FN_PSCI_VERSION, PSCI_0_2_FN_SYSTEM_OFF, PSCI_0_2_FN_SYSTEM_RESET,
        PSCI_1_0_FN_PSCI_FEATURES, PSCI_1_1_RESET_TYPE_SYSTEM_WARM_RESET,
    },
};

/// A PSCI interface version, encoded by firmware as `major << 16 | minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PsciVersion {
    major: u16,
    minor: u16,
}

impl PsciVersion {
    pub const V0_1: Self = Self::new(0, 1);
    pub const V0_2: Self = Self::new(0, 2);
    pub const V1_0: Self = Self::new(1, 0);
    pub const V1_1: Self = Self::new(1, 1);

    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self::new((raw >> 16) as u16, raw as u16)
    }

    pub const fn raw(self) -> u32 {
        ((self.major as u32) << 16) | self.minor as u32
    }

    pub const fn major(self) -> u16 {
        self.major
    }

    pub const fn minor(self) -> u16 {
        self.minor
    }
}

impl fmt::Display for PsciVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

/// The PSCI context of the system.
///
/// Built by the boot CPU with [`Psci::new`] and [`Psci::init`], then shared
/// by reference. Both the conduit and the dispatch table are written at
/// most once.
pub struct Psci<T> {
    trap: T,
    affinity: AffinityTable,
    conduit: Option<Conduit>,
    dispatch: Dispatch,
}

impl<T: Trap> Psci<T> {
    /// Creates a context with no conduit and nothing bound.
    pub const fn new(trap: T, affinity: AffinityTable) -> Self {
        Self {
            trap,
            affinity,
            conduit: None,
            dispatch: Dispatch::Unbound,
        }
    }

    /// Selects the conduit and negotiates `version` with firmware.
    ///
    /// `method` is the firmware description's conduit (`"smc"` or `"hvc"`),
    /// `dtb` the device tree blob, unused unless discovery needs it. On error
    /// the dispatch table stays unbound and every table operation reports
    /// [`PsciRet::NOT_SUPPORTED`].
    pub fn init(&mut self, method: Option<&str>, version: PsciVersion, dtb: usize) -> Result<()> {
        if self.conduit.is_some() {
            return Err(PsciError::AlreadyInitialized);
        }
        let Some(method) = method else {
            error!("No \"method\" property for PSCI");
            return Err(PsciError::NoMethod);
        };
        let conduit = method.parse::<Conduit>().map_err(|_| {
            error!("Invalid \"method\" property: {method}");
            PsciError::InvalidMethod
        })?;
        self.conduit = Some(conduit);

        let negotiated = match version {
            PsciVersion::V0_1 => self.init_0_1(dtb),
            PsciVersion::V0_2 => self.init_0_2(dtb),
            PsciVersion::V1_0 => self.init_1_0(dtb),
            _ => {
                error!("Invalid \"version\" property: {version}");
                Err(PsciError::UnsupportedVersion(version))
            }
        };
        negotiated?;

        // Firmware is free to answer differently this time; it is only logged.
        let reported = PsciVersion::from_raw(self.version().raw());
        info!("Using PSCI {reported} Function IDs");
        Ok(())
    }

    fn init_0_1(&mut self, _dtb: usize) -> Result<()> {
        error!("PSCI v0.1 can only be initialized from the device tree");
        Err(PsciError::UnsupportedVersion(PsciVersion::V0_1))
    }

    fn init_0_2(&mut self, _dtb: usize) -> Result<()> {
        let probe = self
            .call_direct(PSCI_0_2_FN_PSCI_VERSION, 0, 0, 0)
            .unwrap_or(PsciRet::NOT_SUPPORTED);
        // Bit 31 of a version word is zero; anything negative is a status.
        let reported = match probe.status() {
            Ok(raw) => PsciVersion::from_raw(raw),
            Err(status) => {
                error!("PSCI_VERSION failed: {status}");
                return Err(PsciError::Firmware(status));
            }
        };
        if reported < PsciVersion::V0_2 {
            error!("PSCI version {reported} detected, need at least v0.2");
            return Err(PsciError::FirmwareTooOld(reported));
        }
        self.dispatch = Dispatch::Negotiated(FunctionFamily::v0_2(self.affinity.width()));
        Ok(())
    }

    fn init_1_0(&mut self, dtb: usize) -> Result<()> {
        self.init_0_2(dtb)
    }

    /// The bound conduit, if any.
    pub fn conduit(&self) -> Option<Conduit> {
        self.conduit
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    pub fn affinity(&self) -> &AffinityTable {
        &self.affinity
    }

    pub fn trap(&self) -> &T {
        &self.trap
    }

    fn call_direct(&self, fid: u32, a0: usize, a1: usize, a2: usize) -> Option<PsciRet> {
        let conduit = self.conduit?;
        Some(PsciRet::from_word(conduit.invoke(&self.trap, fid, a0, a1, a2)))
    }

    fn call_bound<F>(&self, select: F, a0: usize, a1: usize, a2: usize) -> PsciRet
    where
        F: FnOnce(&FunctionFamily) -> u32,
    {
        match (&self.dispatch, self.conduit) {
            (Dispatch::Negotiated(family), Some(conduit)) => {
                PsciRet::from_word(conduit.invoke(&self.trap, select(family), a0, a1, a2))
            }
            _ => PsciRet::NOT_SUPPORTED,
        }
    }

    /// PSCI_VERSION.
    pub fn version(&self) -> PsciRet {
        self.call_bound(|f| f.version, 0, 0, 0)
    }

    /// CPU_ON: starts logical CPU `cpu_id` at physical address `entry`.
    pub fn cpu_on(&self, cpu_id: usize, entry: usize) -> PsciRet {
        if !self.dispatch.is_bound() {
            return PsciRet::NOT_SUPPORTED;
        }
        if cpu_id >= self.affinity.cpu_num() {
            return PsciRet::INVALID_PARAMETERS;
        }
        let target = self.affinity.resolve(cpu_id);
        self.call_bound(|f| f.cpu_on, target, entry, 0)
    }

    /// CPU_OFF: powers down the calling CPU. Returns only on failure.
    pub fn cpu_off(&self, state: u32) -> PsciRet {
        self.call_bound(|f| f.cpu_off, state as usize, 0, 0)
    }

    /// CPU_SUSPEND with an opaque `power_state` and resume address `entry`.
    pub fn cpu_suspend(&self, power_state: u32, entry: usize) -> PsciRet {
        self.call_bound(|f| f.cpu_suspend, power_state as usize, entry, 0)
    }

    /// MIGRATE: moves the trusted OS to logical CPU `cpu_id`.
    pub fn migrate(&self, cpu_id: usize) -> PsciRet {
        if !self.dispatch.is_bound() {
            return PsciRet::NOT_SUPPORTED;
        }
        if cpu_id >= self.affinity.cpu_num() {
            return PsciRet::INVALID_PARAMETERS;
        }
        let target = self.affinity.resolve(cpu_id);
        self.call_bound(|f| f.migrate, target, 0, 0)
    }

    /// AFFINITY_INFO for a raw target affinity.
    pub fn affinity_info(&self, target_affinity: usize, lowest_affinity_level: usize) -> PsciRet {
        self.call_bound(|f| f.affinity_info, target_affinity, lowest_affinity_level, 0)
    }

    /// MIGRATE_INFO_TYPE.
    pub fn migrate_info_type(&self) -> PsciRet {
        self.call_bound(|f| f.migrate_info_type, 0, 0, 0)
    }

    /// PSCI_FEATURES: asks firmware whether `fid` is implemented.
    pub fn features(&self, fid: u32) -> PsciRet {
        self.call_direct(PSCI_1_0_FN_PSCI_FEATURES, fid as usize, 0, 0)
            .unwrap_or(PsciRet::NOT_SUPPORTED)
    }

    /// SYSTEM_OFF. Does not consult the dispatch table.
    pub fn system_off(&self) {
        if self.call_direct(PSCI_0_2_FN_SYSTEM_OFF, 0, 0, 0).is_none() {
            warn!("system off: no PSCI conduit bound");
        }
    }

    /// Resets the system, preferring an architectural warm reset through
    /// SYSTEM_RESET2 when firmware implements it.
    pub fn system_reboot(&self) {
        if self.conduit.is_none() {
            warn!("system reboot: no PSCI conduit bound");
            return;
        }
        let reset2 = system_reset2(self.affinity.width());
        if self.features(reset2) != PsciRet::NOT_SUPPORTED {
            // reset_type[31] = 0 (architectural), cookie ignored.
            self.call_direct(reset2, PSCI_1_1_RESET_TYPE_SYSTEM_WARM_RESET, 0, 0);
        } else {
            self.call_direct(PSCI_0_2_FN_SYSTEM_RESET, 0, 0, 0);
        }
    }
}
