/// Name the administrative command is registered under
pub const COMMAND_NAME: &str = "ghostfixer";
/// Permission node required to run it
pub const ADMIN_PERMISSION: &str = "ghostfixer.admin";

pub const NO_PERMISSION_MESSAGE: &str = "No permission.";
pub const RELOADED_MESSAGE: &str = "[GhostBlockFixer] Reloaded!";

/// Parsed form of `/ghostfixer <subcommand>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminCommand {
    Reload,
}

impl AdminCommand {
    /// Returns None when `label` is not this command or the subcommand is unknown
    pub fn parse(label: &str, args: &[&str]) -> Option<Self> {
        if !label.eq_ignore_ascii_case(COMMAND_NAME) {
            return None;
        }
        match args.first() {
            Some(arg) if arg.eq_ignore_ascii_case("reload") => Some(AdminCommand::Reload),
            _ => None,
        }
    }
}

/// What happened when a command was dispatched to the fixer
#[derive(Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Not ours, or missing/unknown subcommand; the host shows usage
    Unhandled,
    NoPermission,
    Reloaded,
    /// Previous configuration stays active
    ReloadFailed(String),
}
