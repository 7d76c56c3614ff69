use seabattle::prelude::*;
use seabattle::{PlayerSide, ShotRecord, TurnReport};

#[test]
fn test_board_view_survives_json() {
    let mut side = PlayerSide::new();
    side.place_ship(ShipId(4), Coord::new(3, 3), Orientation::Vertical)
        .unwrap();
    side.receive_attack(Coord::new(3, 3)).unwrap();
    side.receive_attack(Coord::new(4, 3)).unwrap();
    side.receive_attack(Coord::new(0, 9)).unwrap();

    let view = BoardView::hidden(&side);
    let json = serde_json::to_string(&view).unwrap();
    let back: BoardView = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
    assert_eq!(back.sunk(), &[ShipId(4)]);
    assert_eq!(back.get(Coord::new(4, 3)), Some(CellView::Sunk(ShipId(4))));
    assert_eq!(back.get(Coord::new(0, 9)), Some(CellView::Miss));
}

#[test]
fn test_status_and_events_survive_json() {
    let mut session = GameSession::new(EngineConfig::seeded(17)).unwrap();
    session.auto_place_human().unwrap();
    let report = session.attack(Coord::new(0, 0)).unwrap();

    let status = session.status();
    let back: GameStatus = serde_json::from_str(&serde_json::to_string(&status).unwrap()).unwrap();
    assert_eq!(back, status);

    let back: TurnReport = serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
    assert_eq!(back, report);

    let events = session.drain_events();
    let json = serde_json::to_string(&events).unwrap();
    let back: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, events);
}

#[test]
fn test_event_json_shape() {
    let event = GameEvent::AttackResolved {
        attacker: Side::Opponent,
        coord: Coord::new(2, 5),
        shot: Shot::Sunk(ShipId(1)),
    };
    let value = serde_json::to_value(event).unwrap();
    assert_eq!(value["AttackResolved"]["attacker"], "Opponent");
    assert_eq!(value["AttackResolved"]["coord"]["row"], 2);
    assert_eq!(value["AttackResolved"]["coord"]["col"], 5);
    assert_eq!(value["AttackResolved"]["shot"]["Sunk"], 1);

    let record = ShotRecord {
        coord: Coord::new(0, 0),
        shot: Shot::Miss,
    };
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"coord":{"row":0,"col":0},"shot":"Miss"}"#
    );
}
