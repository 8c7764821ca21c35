// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Late component initializers run at the end of board init.

use linkme::distributed_slice;

/// Initializers registered with
/// `#[distributed_slice(BOARD_INITCALLS)] static X: fn() = ...;`.
#[distributed_slice]
pub static BOARD_INITCALLS: [fn()];

pub(crate) fn run_board_initcalls() {
    debug!("running {} board initcalls", BOARD_INITCALLS.len());
    for init in BOARD_INITCALLS {
        init();
    }
}
