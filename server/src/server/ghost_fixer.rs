use std::sync::Arc;

use log::{error, info, warn};

use ghostfix_shared::{ConfigError, ConfigFile, ResyncConfig};

use crate::{
    command::{
        AdminCommand, CommandOutcome, ADMIN_PERMISSION, COMMAND_NAME, NO_PERMISSION_MESSAGE,
        RELOADED_MESSAGE,
    },
    coordinator::ResyncCoordinator,
    events::{BlockIntentKind, DisconnectEvent, MoveEvent},
    host::{CommandSender, HostHandles, ListenerPriority},
    GhostFixError,
};

/// The running fixer: owns the coordinator and the configuration file, and is
/// the handle the host forwards its movement, disconnect and command events to.
pub struct GhostFixer {
    coordinator: Arc<ResyncCoordinator>,
    config_file: ConfigFile,
}

impl GhostFixer {
    /// Starts the fixer inside `host`.
    ///
    /// # Errors
    /// Fails with [`GhostFixError::MissingPacketLayer`] when the packet
    /// interception layer is not installed, and with
    /// [`GhostFixError::Config`] when the configuration cannot be loaded.
    pub fn enable(host: HostHandles, config_file: ConfigFile) -> Result<Self, GhostFixError> {
        if !host.packets.is_available() {
            error!("Packet interception layer not found! Disabling ghost block fixer.");
            return Err(GhostFixError::MissingPacketLayer);
        }

        let config = config_file.load_or_create()?;
        let coordinator = Arc::new(ResyncCoordinator::new(&host, config));

        let listener = coordinator.clone();
        host.packets.subscribe(
            &BlockIntentKind::ALL,
            ListenerPriority::Highest,
            Box::new(move |event| {
                listener.on_block_intent(&event);
            }),
        );

        info!("Ghost block fixer loaded from {}", config_file.path().display());

        Ok(Self {
            coordinator,
            config_file,
        })
    }

    pub fn coordinator(&self) -> &ResyncCoordinator {
        &self.coordinator
    }

    pub fn config(&self) -> ResyncConfig {
        self.coordinator.config()
    }

    pub fn on_move(&self, event: &MoveEvent) {
        self.coordinator.on_move(event);
    }

    pub fn on_disconnect(&self, event: &DisconnectEvent) {
        self.coordinator.on_disconnect(event);
    }

    /// Re-reads the configuration file. On failure the active configuration
    /// is left untouched.
    pub fn reload(&self) -> Result<ResyncConfig, ConfigError> {
        let config = self.config_file.load_or_create()?;
        self.coordinator.reload(config.clone());
        Ok(config)
    }

    /// Dispatches `/<label> <args>`
    pub fn handle_command(
        &self,
        sender: &dyn CommandSender,
        label: &str,
        args: &[&str],
    ) -> CommandOutcome {
        if !label.eq_ignore_ascii_case(COMMAND_NAME) {
            return CommandOutcome::Unhandled;
        }
        if !sender.has_permission(ADMIN_PERMISSION) {
            sender.send_message(NO_PERMISSION_MESSAGE);
            return CommandOutcome::NoPermission;
        }

        match AdminCommand::parse(label, args) {
            Some(AdminCommand::Reload) => match self.reload() {
                Ok(_) => {
                    sender.send_message(RELOADED_MESSAGE);
                    CommandOutcome::Reloaded
                }
                Err(err) => {
                    warn!("reload failed, keeping previous configuration: {}", err);
                    let message = err.to_string();
                    sender.send_message(&message);
                    CommandOutcome::ReloadFailed(message)
                }
            },
            None => CommandOutcome::Unhandled,
        }
    }
}
