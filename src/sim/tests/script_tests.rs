//! Script parser tests

use crate::core::{Decision, Point};
use crate::sim::script::{parse_command, parse_script, Command, ScriptError};

#[test]
fn test_parse_every_command() {
    let script = "\
down 100 200
move 180.5 -12
up
leave
cancel
press like
press pass
press superlike
wait 350
flush
";
    let commands: Vec<Command> = parse_script(script)
        .unwrap()
        .into_iter()
        .map(|step| step.command)
        .collect();

    assert_eq!(
        commands,
        vec![
            Command::Down(Point::new(100.0, 200.0)),
            Command::Move(Point::new(180.5, -12.0)),
            Command::Up,
            Command::Leave,
            Command::Cancel,
            Command::Press(Decision::Like),
            Command::Press(Decision::Pass),
            Command::Press(Decision::SuperLike),
            Command::Wait(350),
            Command::Flush,
        ]
    );
}

#[test]
fn test_comments_and_blank_lines_keep_line_numbers() {
    let script = "# warm up\n\npress like   # heart button\n";
    let steps = parse_script(script).unwrap();

    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].line, 3);
    assert_eq!(steps[0].command, Command::Press(Decision::Like));
}

#[test]
fn test_unknown_command() {
    let result = parse_script("down 0 0\njump 3\n");

    match result {
        Err(ScriptError::UnknownCommand { command, line }) => {
            assert_eq!(command, "jump");
            assert_eq!(line, 2);
        }
        other => panic!("Expected UnknownCommand, got {:?}", other),
    }
}

#[test]
fn test_bad_arguments_report_usage() {
    let result = parse_script("down 10\n");
    assert!(matches!(
        result,
        Err(ScriptError::Syntax {
            line: 1,
            usage: "down X Y"
        })
    ));

    let result = parse_script("press maybe\n");
    assert!(matches!(result, Err(ScriptError::Syntax { line: 1, .. })));
}

#[test]
fn test_trailing_garbage_rejected() {
    assert!(parse_script("up now\n").is_err());
    assert!(parse_script("wait 10ms\n").is_err());
}

#[test]
fn test_parse_command_leaves_rest() {
    let (rest, command) = parse_command("wait 25 extra").unwrap();
    assert_eq!(command, Command::Wait(25));
    assert_eq!(rest, " extra");
}

#[test]
fn test_command_display_round_trips() {
    for text in ["down 1 2", "move -3 4.5", "press superlike", "wait 50", "flush"] {
        let (_, command) = parse_command(text).unwrap();
        assert_eq!(command.to_string(), text);
    }
}
