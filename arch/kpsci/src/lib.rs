// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! ARM Power State Coordination Interface (PSCI) support.
//!
//! The boot CPU builds one [`Psci`] context: it selects the conduit
//! ([`Conduit::Smc`] or [`Conduit::Hvc`]), negotiates the firmware version and
//! binds the function-identifier family matching that version and the active
//! addressing width. After that the context is only read, from any CPU.
//!
//! Calls made before negotiation succeeds are well defined: table operations
//! return [`PsciRet::NOT_SUPPORTED`] without trapping into firmware.
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

mod affinity;
mod conduit;
mod dispatch;
mod error;
pub mod fid;
mod psci;

pub use self::affinity::{AddrWidth, AffinityTable, EXTENDED_AFFINITY_MASK, NARROW_AFFINITY_MASK};
pub use self::conduit::{ArmTrap, Conduit, Trap};
pub use self::dispatch::{Dispatch, FunctionFamily};
pub use self::error::{AffinityState, FirmwareStatus, PsciError, PsciRet, Result};
pub use self::psci::{Psci, PsciVersion};
