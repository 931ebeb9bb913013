//! Online mode tests: two peers exchanging envelopes in memory.

use plus_slash::core::{GameState, Outcome, Player, Symbol};
use plus_slash::error::GameError;
use plus_slash::net::{DropReason, Envelope, OnlineSession, PeerEvent, RemoteOutcome};

/// Send `index` from `from` and deliver it to `to`.
fn relay(from: &mut OnlineSession, to: &mut OnlineSession, index: usize) -> RemoteOutcome {
    let envelope = from.play_local(index).unwrap();
    to.receive(envelope)
}

#[test]
fn test_peers_stay_in_sync() {
    let mut host = OnlineSession::host();
    let mut guest = OnlineSession::join();

    for (turn, cell) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        let outcome = if turn % 2 == 0 {
            relay(&mut host, &mut guest, cell)
        } else {
            relay(&mut guest, &mut host, cell)
        };
        assert!(matches!(outcome, RemoteOutcome::Applied(_)));
    }

    assert_eq!(host.state(), guest.state());
    assert_eq!(host.ply(), 5);
    assert_eq!(guest.ply(), 5);
}

/// Fill the board, then race to a Slash row on top. Player 1 completes it.
const WINNING_SCRIPT: [usize; 15] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 1, 2, 0, 1, 2];

fn play_script(host: &mut OnlineSession, guest: &mut OnlineSession, script: &[usize]) -> RemoteOutcome {
    let mut last = RemoteOutcome::Reset;
    for (turn, &cell) in script.iter().enumerate() {
        last = if turn % 2 == 0 {
            relay(host, guest, cell)
        } else {
            relay(guest, host, cell)
        };
    }
    last
}

#[test]
fn test_remote_win_is_applied() {
    let mut host = OnlineSession::host();
    let mut guest = OnlineSession::join();

    let last = play_script(&mut host, &mut guest, &WINNING_SCRIPT);

    match last {
        RemoteOutcome::Applied(state) => {
            assert_eq!(state.winner, Some(Outcome::Winner(Player::One)));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(host.state(), guest.state());
}

#[test]
fn test_duplicate_delivery_is_dropped() {
    let mut host = OnlineSession::host();
    let mut guest = OnlineSession::join();

    let envelope = host.play_local(4).unwrap();
    assert!(matches!(guest.receive(envelope), RemoteOutcome::Applied(_)));
    let before = *guest.state();

    assert_eq!(guest.receive(envelope), RemoteOutcome::Dropped(DropReason::Duplicate));
    assert_eq!(*guest.state(), before);
}

#[test]
fn test_out_of_order_delivery_is_dropped() {
    let mut guest = OnlineSession::join();

    let outcome = guest.receive(Envelope::new(2, PeerEvent::Move { index: 4 }));

    assert_eq!(outcome, RemoteOutcome::Dropped(DropReason::OutOfOrder));
    assert_eq!(*guest.state(), GameState::new());
}

#[test]
fn test_remote_move_out_of_turn_is_dropped() {
    let mut host = OnlineSession::host();
    host.play_local(4).unwrap();

    let mut guest = OnlineSession::join();
    let outcome = guest.receive(Envelope::new(0, PeerEvent::Move { index: 4 }));
    assert!(matches!(outcome, RemoteOutcome::Applied(_)));

    let outcome = host.receive(Envelope::new(1, PeerEvent::Move { index: 0 }));
    assert!(matches!(outcome, RemoteOutcome::Applied(_)));

    // a second guest move in a row
    let outcome = host.receive(Envelope::new(2, PeerEvent::Move { index: 8 }));
    assert_eq!(outcome, RemoteOutcome::Dropped(DropReason::NotRemoteTurn));
}

#[test]
fn test_illegal_remote_move_is_dropped() {
    let mut host = OnlineSession::host();
    let mut guest = OnlineSession::join();
    relay(&mut host, &mut guest, 4);

    // the guest's view says cell 4 is under Ko
    let outcome = host.receive(Envelope::new(1, PeerEvent::Move { index: 4 }));
    assert_eq!(outcome, RemoteOutcome::Dropped(DropReason::IllegalMove));

    let outcome = host.receive(Envelope::new(1, PeerEvent::Move { index: 42 }));
    assert_eq!(outcome, RemoteOutcome::Dropped(DropReason::IllegalMove));
    assert_eq!(host.ply(), 1);
}

#[test]
fn test_local_turn_enforced() {
    let mut host = OnlineSession::host();
    host.play_local(4).unwrap();

    assert_eq!(
        host.play_local(0).unwrap_err(),
        GameError::NotYourTurn { player: Player::One }
    );
    assert_eq!(
        host.play_local(4).unwrap_err(),
        GameError::NotYourTurn { player: Player::One }
    );
}

#[test]
fn test_local_illegal_move() {
    let mut host = OnlineSession::host();
    let mut guest = OnlineSession::join();
    relay(&mut host, &mut guest, 4);

    assert_eq!(
        guest.play_local(4).unwrap_err(),
        GameError::InvalidMoveTarget { index: 4 }
    );
    assert_eq!(guest.ply(), 1);
}

#[test]
fn test_reset_round_trip() {
    let mut host = OnlineSession::host();
    let mut guest = OnlineSession::join();
    relay(&mut host, &mut guest, 4);
    relay(&mut guest, &mut host, 0);

    let envelope = guest.request_reset();
    assert_eq!(*guest.state(), GameState::new());
    assert_eq!(host.receive(envelope), RemoteOutcome::Reset);
    assert_eq!(*host.state(), GameState::new());
    assert_eq!(host.ply(), 0);

    assert!(matches!(relay(&mut host, &mut guest, 8), RemoteOutcome::Applied(_)));
}

#[test]
fn test_disconnect_stops_play() {
    let mut host = OnlineSession::host();
    let outcome = host.receive(Envelope::new(0, PeerEvent::PeerDisconnect));

    assert_eq!(outcome, RemoteOutcome::Disconnected);
    assert!(!host.is_connected());
    assert!(!host.is_my_turn());
    assert_eq!(host.play_local(4).unwrap_err(), GameError::Disconnected);
    assert_eq!(
        host.receive(Envelope::new(0, PeerEvent::Move { index: 4 })),
        RemoteOutcome::Dropped(DropReason::Disconnected)
    );
}

#[test]
fn test_close_locally() {
    let mut guest = OnlineSession::join();
    guest.close();
    assert!(!guest.is_connected());
    assert_eq!(guest.play_local(0).unwrap_err(), GameError::Disconnected);
}

#[test]
fn test_json_transport() {
    let mut host = OnlineSession::host();
    let mut guest = OnlineSession::join();

    let text = host.play_local(4).unwrap().to_json().unwrap();
    let outcome = guest.receive_json(&text).unwrap();

    assert!(matches!(outcome, RemoteOutcome::Applied(s) if s.board.get(4) == Some(Symbol::Vertical)));
    assert!(guest.receive_json("not json").is_err());
}

#[test]
fn test_binary_transport() {
    let mut host = OnlineSession::host();
    let mut guest = OnlineSession::join();

    let bytes = host.play_local(2).unwrap().to_bytes().unwrap();
    let outcome = guest.receive_bytes(&bytes).unwrap();

    assert!(matches!(outcome, RemoteOutcome::Applied(_)));
    assert_eq!(host.state(), guest.state());
}

#[test]
fn test_decided_game_blocks_moves() {
    let mut host = OnlineSession::host();
    let mut guest = OnlineSession::join();
    play_script(&mut host, &mut guest, &WINNING_SCRIPT);

    assert!(!guest.is_my_turn());
    assert_eq!(guest.play_local(3).unwrap_err(), GameError::GameAlreadyDecided);

    let late = Envelope::new(host.ply(), PeerEvent::Move { index: 3 });
    assert!(matches!(host.receive(late), RemoteOutcome::Dropped(_)));
    assert_eq!(host.ply(), 15);
}
