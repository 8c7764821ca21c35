// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! PSCI conduits and the raw privileged-call primitive.

/// The trap instruction used to reach the PSCI implementation.
///
/// Parsed from the `method` string of the firmware description (`"smc"` or
/// `"hvc"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Conduit {
    /// Secure monitor call, handled at EL3 (e.g. TF-A).
    Smc,
    /// Hypervisor call, handled at EL2.
    Hvc,
}

impl Conduit {
    /// Issues `fid` with three argument words through this conduit and
    /// returns x0. The remaining result registers are dropped.
    #[inline]
    pub fn invoke<T: Trap + ?Sized>(self, trap: &T, fid: u32, a0: usize, a1: usize, a2: usize) -> usize {
        trace!("psci {self}: fid={fid:#x} args=({a0:#x}, {a1:#x}, {a2:#x})");
        match self {
            Conduit::Smc => trap.smc(fid, a0, a1, a2),
            Conduit::Hvc => trap.hvc(fid, a0, a1, a2),
        }
    }
}

/// The two SMCCC trap primitives.
///
/// Both take a function id in w0 and up to three argument words in x1..x3
/// and return the x0 result word. All knowledge of the trap instructions
/// themselves stays behind this trait.
pub trait Trap {
    /// Traps with `smc #0`.
    fn smc(&self, fid: u32, a0: usize, a1: usize, a2: usize) -> usize;
    /// Traps with `hvc #0`.
    fn hvc(&self, fid: u32, a0: usize, a1: usize, a2: usize) -> usize;
}

/// The hardware trap primitives of the running CPU.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArmTrap;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "aarch64")] {
        use core::arch::asm;

        impl Trap for ArmTrap {
            fn smc(&self, fid: u32, a0: usize, a1: usize, a2: usize) -> usize {
                let ret: usize;
                // SAFETY: SMCCC call; the firmware only clobbers the
                // registers listed below.
                unsafe {
                    asm!(
                        "smc #0",
                        inlateout("x0") fid as usize => ret,
                        inlateout("x1") a0 => _,
                        inlateout("x2") a1 => _,
                        inlateout("x3") a2 => _,
                        out("x4") _, out("x5") _, out("x6") _, out("x7") _,
                        out("x8") _, out("x9") _, out("x10") _, out("x11") _,
                        out("x12") _, out("x13") _, out("x14") _, out("x15") _,
                        out("x16") _, out("x17") _,
                        options(nostack)
                    );
                }
                ret
            }

            fn hvc(&self, fid: u32, a0: usize, a1: usize, a2: usize) -> usize {
                let ret: usize;
                // SAFETY: same register contract as `smc`.
                unsafe {
                    asm!(
                        "hvc #0",
                        inlateout("x0") fid as usize => ret,
                        inlateout("x1") a0 => _,
                        inlateout("x2") a1 => _,
                        inlateout("x3") a2 => _,
                        out("x4") _, out("x5") _, out("x6") _, out("x7") _,
                        out("x8") _, out("x9") _, out("x10") _, out("x11") _,
                        out("x12") _, out("x13") _, out("x14") _, out("x15") _,
                        out("x16") _, out("x17") _,
                        options(nostack)
                    );
                }
                ret
            }
        }
    } else {
        use crate::PsciRet;

        impl Trap for ArmTrap {
            fn smc(&self, fid: u32, _a0: usize, _a1: usize, _a2: usize) -> usize {
                warn!("smc {fid:#x}: no secure monitor on this architecture");
                PsciRet::NOT_SUPPORTED.as_word()
            }

            fn hvc(&self, fid: u32, _a0: usize, _a1: usize, _a2: usize) -> usize {
                warn!("hvc {fid:#x}: no hypervisor on this architecture");
                PsciRet::NOT_SUPPORTED.as_word()
            }
        }
    }
}
