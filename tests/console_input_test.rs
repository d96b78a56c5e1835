//! Tests for move entry at the console.

use strictly_tictactoe::{
    Board, Console, ConsoleConfig, InputError, MoveCommand, MoveRead, Player, Position,
    parse_move, read_move, validate_move,
};

fn read(input: &[u8], board: &Board, player: Player) -> (MoveRead, String) {
    let mut out = Vec::new();
    let read = {
        let mut console = Console::new(
            input,
            &mut out,
            ConsoleConfig::new().with_clear_screen(false),
        );
        read_move(&mut console, board, player).expect("read move")
    };
    (read, String::from_utf8(out).expect("utf8"))
}

#[test]
fn test_two_three_is_middle_right() {
    let MoveCommand::Place { row, col } = parse_move("2,3").expect("parse") else {
        panic!("expected placement");
    };
    let pos = validate_move(&Board::new(), row, col).expect("valid");
    assert_eq!(pos, Position::MiddleRight);
    assert_eq!(pos.to_index(), 5);
}

#[test]
fn test_rejections() {
    let board = Board::new();
    assert_eq!(validate_move(&board, 0, 1), Err(InputError::OutOfRange));
    assert_eq!(validate_move(&board, 4, 1), Err(InputError::OutOfRange));
    assert_eq!(parse_move("a,b"), Err(InputError::InvalidFormat));
}

#[test]
fn test_reprompts_until_valid() {
    let mut board = Board::new();
    board.apply_move(Position::Center, Player::X);
    let before = board.clone();

    let (read, out) = read(b"a,b\n0,1\n4,1\n2,2\n3,1\n", &board, Player::O);

    assert_eq!(read, MoveRead::Move(Position::BottomLeft));
    assert_eq!(board, before);

    let prompt = "Player O - Enter your move (row,col): ";
    assert_eq!(out.matches(prompt).count(), 5);

    let format = out.find(&InputError::InvalidFormat.to_string()).expect("format msg");
    let range = out.find(&InputError::OutOfRange.to_string()).expect("range msg");
    let taken = out.find(&InputError::CellTaken.to_string()).expect("taken msg");
    assert!(format < range && range < taken);
    assert_eq!(out.matches(&InputError::OutOfRange.to_string()).count(), 2);
}

#[test]
fn test_quit_tokens_any_case() {
    for token in ["Q", "quit", "EXIT"] {
        let mut board = Board::new();
        board.apply_move(Position::TopLeft, Player::X);
        let before = board.clone();

        let (read, out) = read(format!("{token}\n1,2\n").as_bytes(), &board, Player::O);

        assert_eq!(read, MoveRead::Quit, "token {token}");
        assert_eq!(board, before);
        assert!(out.contains("Exiting game. Goodbye!"));
        assert_eq!(out.matches("Enter your move").count(), 1);
    }
}

#[test]
fn test_end_of_input_quits() {
    let (read, out) = read(b"", &Board::new(), Player::X);
    assert_eq!(read, MoveRead::Quit);
    assert!(out.contains("Exiting game. Goodbye!"));
}

#[test]
fn test_invalid_utf8_reprompts_as_bad_format() {
    let board = Board::new();
    let (read, out) = read(b"\xff,1\n\xff\xfe\n1,1\n", &board, Player::X);

    assert_eq!(read, MoveRead::Move(Position::TopLeft));
    assert_eq!(out.matches(&InputError::InvalidFormat.to_string()).count(), 2);
    assert_eq!(out.matches("Enter your move").count(), 3);
}
