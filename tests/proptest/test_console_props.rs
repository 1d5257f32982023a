//! Property-based tests for the console
//!
//! Random key sequences must never eat into the prompt, and the window
//! always holds exactly `rows` lines.

use gridconsole::console::{Arrow, Console, Key};
use gridconsole::host::{ContainerNode, MemoryHost};
use gridconsole::models::LineState;
use proptest::prelude::*;

fn bound_console(rows: u32, prompt: &str) -> Console<MemoryHost> {
    let mut host = MemoryHost::default();
    host.add_container(ContainerNode::new("div").with_class("console"));
    let mut console = Console::new(host);
    console
        .set_prompt(prompt)
        .set_size(80, rows)
        .unwrap()
        .bind_to(".console")
        .unwrap()
        .prompt()
        .unwrap();
    console
}

fn edit_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        3 => any::<char>()
            .prop_filter("printable", |c| !c.is_control())
            .prop_map(Key::Char),
        2 => Just(Key::Backspace),
        1 => Just(Key::Delete),
        1 => Just(Key::Home),
        1 => Just(Key::End),
        1 => prop_oneof![
            Just(Arrow::Left),
            Just(Arrow::Up),
            Just(Arrow::Right),
            Just(Arrow::Down)
        ]
        .prop_map(Key::Arrow),
    ]
}

proptest! {
    #[test]
    fn prop_prompt_is_never_edited(
        prompt in "[A-Z]:\\\\> |\\$ |> ",
        keys in prop::collection::vec(edit_key(), 0..60)
    ) {
        let mut console = bound_console(5, &prompt);
        let prompt_len = prompt.chars().count();

        for key in keys {
            console.handle_key(key);

            let line = console.current_line().unwrap();
            prop_assert!(line.text().starts_with(&prompt));
            prop_assert!(line.len() >= prompt_len);

            let caret = console.caret().unwrap();
            prop_assert!(caret >= prompt_len && caret <= line.len());
        }
    }

    #[test]
    fn prop_window_size_is_constant(
        rows in 1u32..12,
        inputs in prop::collection::vec("[a-z]{0,8}", 0..40)
    ) {
        let mut console = bound_console(rows, "> ");

        for input in &inputs {
            console.type_text(input);
            console.handle_key(Key::Enter);
            prop_assert_eq!(console.line_count(), rows as usize);
        }

        prop_assert_eq!(console.current_row(), inputs.len() as u64 + 1);
        prop_assert_eq!(console.current_line().unwrap().state(), LineState::Editing);

        // rows stay contiguous, oldest first
        let rows_seen: Vec<u64> = console.lines().map(|l| l.row()).collect();
        for pair in rows_seen.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
    }

    #[test]
    fn prop_output_lines_scroll_fifo(
        rows in 2u32..10,
        pieces in prop::collection::vec("[a-z]{1,6}", 1..30)
    ) {
        let mut console = bound_console(rows, "> ");
        console.write(&pieces.join("\n")).unwrap();

        prop_assert_eq!(console.line_count(), rows as usize);

        // row 1 keeps the released prompt, output follows it and any rows
        // not reached yet stay blank
        let mut history: Vec<String> = vec!["> ".to_string()];
        history.extend(pieces.iter().cloned());
        let rows = rows as usize;
        let expected: Vec<String> = if history.len() >= rows {
            history[history.len() - rows..].to_vec()
        } else {
            let blanks = rows - history.len();
            history.into_iter().chain(std::iter::repeat(String::new()).take(blanks)).collect()
        };

        let visible: Vec<String> = console.lines().map(|l| l.text().to_string()).collect();
        prop_assert_eq!(visible, expected);
        prop_assert_eq!(console.current_line().unwrap().text(), pieces.last().unwrap().as_str());
    }
}
