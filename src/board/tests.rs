use super::*;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Human.opponent(), Side::Computer);
    assert_eq!(Side::Computer.opponent(), Side::Human);
}

#[test]
fn test_side_codes() {
    assert_eq!(Side::Human.code(), 1);
    assert_eq!(Side::Computer.code(), 2);
    assert_eq!(Side::from_code(2), Some(Side::Computer));
    assert_eq!(Side::from_code(0), None);
}

#[test]
fn test_point_labels() {
    assert_eq!(Point(0).to_string(), "P1");
    assert_eq!("P24".parse::<Point>(), Ok(Point(23)));
    assert_eq!("P0".parse::<Point>(), Err(ParsePointError::OutOfRange(0)));
    assert!(matches!("24".parse::<Point>(), Err(ParsePointError::Malformed(_))));
}

#[test]
fn test_point_checked_range() {
    assert_eq!(Point::checked(0), Some(Point(0)));
    assert_eq!(Point::checked(23), Some(Point(23)));
    assert_eq!(Point::checked(24), None);
    assert_eq!(Point::checked(30), None);
    assert_eq!("P25".parse::<Point>(), Err(ParsePointError::OutOfRange(25)));
}

#[test]
fn test_point_centrality() {
    assert_eq!(Point(0).centrality(), 2);
    assert_eq!(Point(1).centrality(), 3);
    assert_eq!(Point(4).centrality(), 4);
    assert_eq!(Point(19).centrality(), 4);
}

#[test]
fn test_point_rings() {
    assert_eq!(Point(0).ring(), Ring::Outer);
    assert_eq!(Point(10).ring(), Ring::Middle);
    assert_eq!(Point(16).ring(), Ring::Inner);
}

#[test]
fn test_new_state_is_empty() {
    let state = GameState::new();
    assert_eq!(state.phase(), Phase::Placement);
    assert_eq!(state.count_on_board(Side::Human), 0);
    assert_eq!(state.count_on_board(Side::Computer), 0);
    assert_eq!(state.placed(Side::Human), 0);
    assert_eq!(state.empty_points().count(), NUM_POINTS);
    assert_eq!(state, GameState::default());
}

#[test]
fn test_apply_placement_counts() {
    let mut state = GameState::new();
    state.apply_move(Move::placement(Point(5)), Side::Human);
    assert_eq!(state.get(Point(5)), Some(Side::Human));
    assert_eq!(state.placed(Side::Human), 1);
    assert_eq!(state.placed(Side::Computer), 0);
}

#[test]
fn test_phase_switches_after_eighteen_placements() {
    let mut state = GameState::new();
    for i in 0..18u8 {
        assert_eq!(state.phase(), Phase::Placement);
        let side = if i % 2 == 0 { Side::Human } else { Side::Computer };
        state.apply_move(Move::placement(Point(i)), side);
    }
    assert_eq!(state.phase(), Phase::Movement);
    assert_eq!(state.placed(Side::Human), PIECES_PER_SIDE);
    assert_eq!(state.placed(Side::Computer), PIECES_PER_SIDE);
}

#[test]
fn test_apply_slide_moves_piece() {
    let mut state = GameState::new();
    state.set_placed(Side::Human, 9);
    state.set_placed(Side::Computer, 9);
    state.place_piece(Point(0), Side::Human);

    state.apply_move(Move::slide(Point(0), Point(1)), Side::Human);
    assert!(state.is_empty(Point(0)));
    assert_eq!(state.get(Point(1)), Some(Side::Human));
    assert_eq!(state.placed(Side::Human), 9);
}

#[test]
fn test_apply_capture_clears_opponent() {
    let mut state = GameState::new();
    state.place_piece(Point(8), Side::Computer);
    state.apply_move(Move::placement(Point(0)).with_capture(Point(8)), Side::Human);
    assert!(state.is_empty(Point(8)));
    assert_eq!(state.get(Point(0)), Some(Side::Human));
}

#[test]
fn test_phase_never_returns_to_placement() {
    let mut state = GameState::new();
    state.set_placed(Side::Human, 9);
    state.set_placed(Side::Computer, 9);
    assert_eq!(state.phase(), Phase::Movement);
    state.set_placed(Side::Computer, 0);
    assert_eq!(state.phase(), Phase::Movement);
}

#[test]
fn test_captures_suffered() {
    let mut state = GameState::new();
    state.set_placed(Side::Computer, 5);
    for p in [0, 1, 2] {
        state.place_piece(Point(p), Side::Computer);
    }
    assert_eq!(state.captures_suffered(Side::Computer), 2);
}

#[test]
fn test_count_in_ring() {
    let mut state = GameState::new();
    state.place_piece(Point(6), Side::Computer);
    state.place_piece(Point(11), Side::Computer);
    state.place_piece(Point(3), Side::Computer);
    state.place_piece(Point(7), Side::Human);
    assert_eq!(state.count_in_ring(Side::Computer, Ring::Inner), 2);
    assert_eq!(state.count_in_ring(Side::Computer, Ring::Middle), 1);
    assert_eq!(state.count_in_ring(Side::Computer, Ring::Outer), 0);
    assert_eq!(state.count_in_ring(Side::Human, Ring::Inner), 1);
}

#[test]
fn test_position_key_encoding() {
    let mut state = GameState::new();
    state.place_piece(Point(0), Side::Human);
    state.place_piece(Point(23), Side::Computer);
    let key = state.position_key();
    assert_eq!(key.as_str(), "100000000000000000000002");
    assert_eq!(key.to_string().len(), NUM_POINTS);
}

#[test]
fn test_position_key_ignores_counters() {
    let mut a = GameState::new();
    a.place_piece(Point(3), Side::Human);
    let mut b = a.clone();
    b.set_placed(Side::Human, 4);
    assert_ne!(a, b);
    assert_eq!(a.position_key(), b.position_key());
}

#[test]
fn test_clone_is_independent() {
    let mut state = GameState::new();
    state.apply_move(Move::placement(Point(2)), Side::Computer);
    let snapshot = state.clone();
    state.apply_move(Move::placement(Point(3)), Side::Human);
    assert!(snapshot.is_empty(Point(3)));
    assert_eq!(snapshot.placed(Side::Human), 0);
}
