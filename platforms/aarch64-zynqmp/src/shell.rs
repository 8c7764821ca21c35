// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Operator commands exported by the board.

use linkme::distributed_slice;

/// A shell command without arguments.
#[derive(Debug)]
pub struct ShellCommand {
    pub name: &'static str,
    pub help: &'static str,
    pub func: fn(),
}

/// All commands linked into the kernel image.
#[distributed_slice]
pub static SHELL_COMMANDS: [ShellCommand];

#[distributed_slice(SHELL_COMMANDS)]
static REBOOT_COMMAND: ShellCommand = ShellCommand {
    name: "reboot",
    help: "reboot system",
    func: crate::power::reboot,
};

/// Looks a command up by name.
pub fn find_command(name: &str) -> Option<&'static ShellCommand> {
    SHELL_COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Runs the named command; returns `false` if there is none.
pub fn run_command(name: &str) -> bool {
    match find_command(name) {
        Some(cmd) => {
            (cmd.func)();
            true
        }
        None => {
            warn!("{name}: command not found");
            false
        }
    }
}
