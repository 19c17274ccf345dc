/// Enabling the fixer inside a host.

use std::fs;

use ghostfix_server::{BlockIntentEvent, BlockIntentKind, GhostFixError, ListenerPriority};
use ghostfix_shared::{BlockPosition, ConfigFile, ResyncConfig};
use ghostfix_test::{init_logging, TestHost, TestPacketLayer};

#[test]
fn missing_packet_layer_refuses_to_start() {
    init_logging();
    let host = TestHost::with_packet_layer(TestPacketLayer::missing());
    let dir = tempfile::tempdir().unwrap();
    let file = ConfigFile::in_dir(dir.path());

    let result = host.enable(file.clone());

    assert!(matches!(result, Err(GhostFixError::MissingPacketLayer)));
    assert_eq!(host.packets.listener_count(), 0);
    // nothing is written before the prerequisite check
    assert!(!file.path().exists());
}

#[test]
fn first_start_writes_default_config() {
    let host = TestHost::new();
    let dir = tempfile::tempdir().unwrap();
    let file = ConfigFile::in_dir(dir.path().join("GhostBlockFixer"));

    let fixer = host.enable(file.clone()).unwrap();

    assert!(file.path().exists());
    assert_eq!(fixer.config(), ResyncConfig::default());
}

#[test]
fn existing_config_is_used() {
    let host = TestHost::new();
    let dir = tempfile::tempdir().unwrap();
    let file = ConfigFile::in_dir(dir.path());
    fs::write(
        file.path(),
        r#"{ "sync-delay-ticks": 2, "debug-messages": true }"#,
    )
    .unwrap();

    let fixer = host.enable(file).unwrap();

    let config = fixer.config();
    assert_eq!(config.sync_delay_ticks, 2);
    assert!(config.debug_messages);
    assert_eq!(config.cooldown_ms, 50);
}

#[test]
fn malformed_config_fails_startup() {
    let host = TestHost::new();
    let dir = tempfile::tempdir().unwrap();
    let file = ConfigFile::in_dir(dir.path());
    fs::write(file.path(), "cooldown-ms: 50").unwrap();

    assert!(matches!(host.enable(file), Err(GhostFixError::Config(_))));
}

#[test]
fn subscribes_to_place_and_dig_at_highest_priority() {
    let host = TestHost::new();
    let dir = tempfile::tempdir().unwrap();
    let _fixer = host.enable(ConfigFile::in_dir(dir.path())).unwrap();

    assert_eq!(
        host.packets.subscriptions(),
        vec![(
            vec![BlockIntentKind::Place, BlockIntentKind::Dig],
            ListenerPriority::Highest
        )]
    );
}

#[test]
fn intercepted_packet_drives_full_resync() {
    let host = TestHost::new();
    let dir = tempfile::tempdir().unwrap();
    let _fixer = host.enable(ConfigFile::in_dir(dir.path())).unwrap();
    let actor = host.join();
    host.world.look_at(actor, Some(BlockPosition::new(10, 64, 10)));

    assert_eq!(
        host.packets
            .deliver(BlockIntentEvent::new(actor, BlockIntentKind::Place)),
        1
    );
    assert_eq!(host.scheduler.pending_count(), 1);

    host.scheduler.advance(1);
    assert_eq!(host.sender.sent().len(), 7);
}
