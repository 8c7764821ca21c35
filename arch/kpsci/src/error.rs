// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! PSCI configuration errors and firmware return words.
//!
//! Configuration problems are reported once, by [`Psci::init`](crate::Psci::init),
//! as a [`PsciError`]. Power operations never fail on the Rust side: they
//! hand back the raw firmware word as a [`PsciRet`], which the caller may
//! decode with [`PsciRet::status`].

use core::fmt;

use crate::PsciVersion;

/// Errors raised while bringing up the PSCI interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsciError {
    /// No conduit method was given.
    NoMethod,
    /// The conduit method is neither `"smc"` nor `"hvc"`.
    InvalidMethod,
    /// The requested interface version cannot be brought up.
    UnsupportedVersion(PsciVersion),
    /// Firmware reported a version older than 0.2.
    FirmwareTooOld(PsciVersion),
    /// The version query itself failed.
    Firmware(FirmwareStatus),
    /// The conduit was already bound by an earlier call.
    AlreadyInitialized,
}

impl fmt::Display for PsciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PsciError::NoMethod => write!(f, "no PSCI conduit method"),
            PsciError::InvalidMethod => write!(f, "invalid PSCI conduit method"),
            PsciError::UnsupportedVersion(v) => write!(f, "unsupported PSCI version {v}"),
            PsciError::FirmwareTooOld(v) => write!(f, "firmware PSCI version {v} is too old"),
            PsciError::Firmware(status) => write!(f, "PSCI_VERSION failed: {status}"),
            PsciError::AlreadyInitialized => write!(f, "PSCI already initialized"),
        }
    }
}

/// Convenience type alias for Result with PsciError
pub type Result<T> = core::result::Result<T, PsciError>;

/// A raw 32-bit PSCI return word.
///
/// Depending on the call this is a status code, a version, an affinity state
/// or a migrate type. It is passed through exactly as firmware returned it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PsciRet(u32);

impl PsciRet {
    pub const SUCCESS: Self = Self::from_status(FirmwareStatus::Success);
    pub const NOT_SUPPORTED: Self = Self::from_status(FirmwareStatus::NotSupported);
    pub const INVALID_PARAMETERS: Self = Self::from_status(FirmwareStatus::InvalidParameters);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Truncates an x0 result word to the 32-bit PSCI return value.
    #[inline]
    pub const fn from_word(word: usize) -> Self {
        Self(word as u32)
    }

    const fn from_status(status: FirmwareStatus) -> Self {
        Self(status as i32 as u32)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The word as firmware would leave it in x0 (sign-extended).
    #[inline]
    pub const fn as_word(self) -> usize {
        self.0 as i32 as isize as usize
    }

    /// Decodes a status-returning call.
    ///
    /// Non-negative words are `Ok` with the raw value; negative words are the
    /// matching [`FirmwareStatus`].
    pub fn status(self) -> core::result::Result<u32, FirmwareStatus> {
        let code = self.0 as i32;
        if code >= 0 {
            Ok(self.0)
        } else {
            Err(FirmwareStatus::from_repr(code).unwrap_or(FirmwareStatus::InternalFailure))
        }
    }

    /// Decodes an AFFINITY_INFO result.
    pub fn affinity_state(self) -> core::result::Result<AffinityState, FirmwareStatus> {
        let value = self.status()?;
        AffinityState::from_repr(value).ok_or(FirmwareStatus::InternalFailure)
    }
}

impl fmt::Debug for PsciRet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status() {
            Ok(v) => write!(f, "PsciRet({v:#x})"),
            Err(e) => write!(f, "PsciRet({e})"),
        }
    }
}

/// PSCI return codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::FromRepr, strum::Display)]
#[repr(i32)]
pub enum FirmwareStatus {
    Success = 0,
    NotSupported = -1,
    InvalidParameters = -2,
    Denied = -3,
    AlreadyOn = -4,
    OnPending = -5,
    InternalFailure = -6,
    NotPresent = -7,
    Disabled = -8,
    InvalidAddress = -9,
}

/// Power state of an affinity instance as reported by AFFINITY_INFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::FromRepr)]
#[repr(u32)]
pub enum AffinityState {
    On = 0,
    Off = 1,
    OnPending = 2,
}
