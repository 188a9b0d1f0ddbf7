//! End-to-end console runs: feed a script of commands through the full
//! loop and check the transcript.

use arbiter_proto::Interpreter;

/// Run a script (one command per line) and return the full transcript.
fn run_script(script: &str) -> String {
    let mut interpreter = Interpreter::new();
    let mut output = Vec::new();
    interpreter
        .run(script.as_bytes(), &mut output)
        .expect("in-memory I/O cannot fail");
    String::from_utf8(output).expect("transcript is utf-8")
}

#[test]
fn banner_and_goodbye() {
    let out = run_script("quit\n");
    assert!(out.starts_with("Chess move arbiter."));
    assert!(out.contains("Side to move: White"));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn opening_moves_round_trip_through_fen() {
    let out = run_script("move e2e4\nmove e7e5\nfen\nquit\n");
    assert!(out.contains("Move played: e2e4"));
    assert!(out.contains("Move played: e7e5"));
    assert!(out.contains(
        "FEN: rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2"
    ));
}

#[test]
fn illegal_moves_leave_the_board_alone() {
    let out = run_script("move e2e5\nmove e7e5\nmove e1e3\nfen\nquit\n");
    assert_eq!(out.matches("Invalid move:").count(), 3);
    assert!(out.contains("FEN: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
}

#[test]
fn castling_with_a_cleared_path() {
    let out = run_script(
        "fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQK2R w KQkq - 0 1\nmove e1g1\nquit\n",
    );
    assert!(out.contains("Position set from FEN"));
    assert!(out.contains("Move played: e1g1"));
    assert!(out.contains("RNBQ1RK1"));
}

#[test]
fn castling_refused_while_minor_pieces_block() {
    // After 1. e4 d5 2. exd5 the f1 bishop and g1 knight still block e1-h1.
    let out = run_script("move e2e4\nmove d7d5\nmove e4d5\nmove e1g1\nquit\n");
    assert!(out.contains("Move played: e4d5"));
    assert!(out.contains("Invalid move: e1g1"));
}

#[test]
fn quiet_promotion_on_the_push_square() {
    let out = run_script("fen 4k3/6P1/8/8/8/8/8/4K3 w - - 0 1\nmove g7g8q\nquit\n");
    assert!(out.contains("Move played: g7g8q"));
    assert!(out.contains("FEN: 4k1Q1/8/8/8/8/8/8/4K3 b - - 0 1"));
}

#[test]
fn castling_from_the_start_is_refused() {
    // The f1 bishop and g1 knight are still in the way.
    let out = run_script("move e1g1\nquit\n");
    assert!(out.contains("Invalid move: e1g1"));
}

#[test]
fn castling_through_check_is_refused() {
    let out = run_script(
        "fen rnb1kbnr/pp1ppppp/8/q7/4P3/5N2/PPP2PPP/RNBQK2R w KQkq - 2 4\nmove e1g1\nquit\n",
    );
    assert!(out.contains("Invalid move: e1g1"));
}

#[test]
fn en_passant_window_opens_and_closes() {
    let open = run_script(
        "fen rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3\nmove e5d6\nquit\n",
    );
    assert!(open.contains("Move played: e5d6"));

    let closed = run_script(
        "fen rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3\nmove e5d6\nquit\n",
    );
    assert!(closed.contains("Invalid move: e5d6"));
}

#[test]
fn promotion_requires_a_piece_letter() {
    let script = "fen rnbqkbnr/ppppppPp/8/8/8/8/PPPPPPP1/RNBQKBNR w KQkq - 0 1\n";
    let missing = run_script(&format!("{script}move g7h8\nquit\n"));
    assert!(missing.contains("Invalid move: g7h8"));

    let queened = run_script(&format!("{script}move g7h8q\nquit\n"));
    assert!(queened.contains("Move played: g7h8q"));
    assert!(queened.contains("rnbqkbnQ"));
}

#[test]
fn check_and_checkmate_are_announced() {
    let out = run_script(
        "move e2e4\nmove e7e5\nmove d1h5\nmove b8c6\nmove f1c4\nmove g8f6\nmove h5f7\nquit\n",
    );
    assert!(out.contains("CHECKMATE! White wins!"));
}

#[test]
fn stalemate_announced_on_fen_load() {
    let out = run_script("fen 7k/5Q2/6K1/8/8/8/8/8 b - - 0 1\nquit\n");
    assert!(out.contains("STALEMATE! Draw."));
}

#[test]
fn reset_restores_the_start() {
    let out = run_script("move e2e4\nreset\nfen\nquit\n");
    assert!(out.contains("Board reset to starting position"));
    assert!(out.contains("FEN: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
}

#[test]
fn legal_in_a_forced_position() {
    // The undefended queen on g2 gives check; capturing it is the only move.
    let out = run_script("fen 7k/8/8/8/8/8/6q1/7K w - - 0 1\nlegal\nquit\n");
    assert!(out.contains("Legal moves (1): h1g2"));
}

#[test]
fn malformed_input_gets_the_format_hint() {
    let out = run_script("move e2\nmove\nquit\n");
    assert_eq!(
        out.matches("Invalid move format. Use 'move <from><to>' or 'move <from><to><promo>'")
            .count(),
        2
    );
}

#[test]
fn unknown_commands_point_at_help() {
    let out = run_script("banana\nhelp\nquit\n");
    assert!(out.contains("Unknown command. Type 'help' for available commands."));
    assert!(out.contains("Commands:"));
}

#[test]
fn wrong_side_cannot_move_first() {
    let out = run_script("move e7e5\nquit\n");
    assert!(out.contains("Invalid move: e7e5"));
}
