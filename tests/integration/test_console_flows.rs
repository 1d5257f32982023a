//! Integration Tests for Console Flows
//!
//! Drive a bound console through prompt / type / Enter cycles the way a
//! host would, and check what ends up on screen.

use gridconsole::console::{Console, ConsoleWriter, Key, KeyOutcome, TextEntered, DEFAULT_PROMPT};
use gridconsole::host::{ContainerNode, MemoryHost};
use gridconsole::models::LineState;
use gridconsole::observers::{EchoBack, MsDosEmulator};
use std::cell::RefCell;
use std::rc::Rc;

fn console_with_rows(rows: u32) -> Console<MemoryHost> {
    let mut host = MemoryHost::default();
    host.add_container(ContainerNode::new("div").with_class("console"));

    let mut console = Console::new(host);
    console
        .set_size(80, rows)
        .unwrap()
        .bind_to("div.console")
        .unwrap();
    console
}

fn visible_texts(console: &Console<MemoryHost>) -> Vec<String> {
    console.lines().map(|l| l.text().to_string()).collect()
}

#[test]
fn test_hello_enter_notifies_once() {
    let seen: Rc<RefCell<Vec<TextEntered>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut console = console_with_rows(25);
    console
        .on_text_entered_fn(move |event, _| sink.borrow_mut().push(event.clone()))
        .prompt()
        .unwrap();

    let start = console.current_row();
    console.type_text("hello");
    console.handle_key(Key::Enter);

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].entered_text, "hello");
    assert_eq!(console.current_row(), start + 1);
}

#[test]
fn test_submitting_more_than_rows_scrolls_fifo() {
    let rows = 6u32;
    let mut console = console_with_rows(rows);
    console.prompt().unwrap();

    let total = rows as usize + 5;
    for i in 0..total {
        console.type_text(&format!("cmd{}", i));
        console.handle_key(Key::Enter);
    }

    assert_eq!(console.line_count(), rows as usize);

    let texts = visible_texts(&console);
    // newest line is the re-prompted active line
    assert_eq!(texts.last().map(String::as_str), Some(DEFAULT_PROMPT));
    assert_eq!(console.current_line().unwrap().state(), LineState::Editing);

    // the rest are the most recent submissions, oldest first
    let expected: Vec<String> = (total - (rows as usize - 1)..total)
        .map(|i| format!("{}cmd{}", DEFAULT_PROMPT, i))
        .collect();
    assert_eq!(&texts[..texts.len() - 1], expected.as_slice());

    // earliest rows are gone
    assert!(console.line(1).is_none());
    assert_eq!(console.current_row(), total as u64 + 1);
}

#[test]
fn test_write_creates_lines_without_prompt() {
    let mut console = console_with_rows(10);
    let before = console.current_row();
    console.write("a\nb\r\nc").unwrap();

    let rows: Vec<&str> = (before + 1..=before + 3)
        .map(|r| console.line(r).unwrap().text())
        .collect();
    assert_eq!(rows, vec!["a", "b", "c"]);
    assert!(rows.iter().all(|t| !t.starts_with(DEFAULT_PROMPT)));
}

#[test]
fn test_write_keeps_blank_pieces() {
    let mut console = console_with_rows(10);
    console.write("a\n\nb\r").unwrap();

    // "a", "", "b", ""
    assert_eq!(console.current_row(), 5);
    assert_eq!(console.line(3).unwrap().text(), "");
    assert_eq!(console.line(4).unwrap().text(), "b");
}

#[test]
fn test_echo_session() {
    let mut console = console_with_rows(25);
    console.on_text_entered(EchoBack::new()).prompt().unwrap();

    for cmd in ["dir", "ver"] {
        console.type_text(cmd);
        console.handle_key(Key::Enter);
    }

    let texts = visible_texts(&console);
    assert_eq!(
        &texts[..5],
        &[
            format!("{}dir", DEFAULT_PROMPT),
            "dir".to_string(),
            format!("{}ver", DEFAULT_PROMPT),
            "ver".to_string(),
            DEFAULT_PROMPT.to_string(),
        ]
    );
}

#[test]
fn test_observer_can_write_multiple_lines() {
    let mut console = console_with_rows(25);
    console
        .on_text_entered_fn(|event: &TextEntered, out: &mut dyn ConsoleWriter| {
            out.write(&format!("You typed:\n{}", event.entered_text));
            out.advance_line();
        })
        .prompt()
        .unwrap();

    console.type_text("x\r");

    assert_eq!(console.line(2).unwrap().text(), "You typed:");
    assert_eq!(console.line(3).unwrap().text(), "x");
    assert_eq!(console.line(4).unwrap().text(), "");
    assert_eq!(console.line(5).unwrap().text(), DEFAULT_PROMPT);
}

#[test]
fn test_dos_stub_writes_nothing() {
    let mut console = console_with_rows(25);
    console.on_text_entered(MsDosEmulator::new()).prompt().unwrap();

    console.type_text("DIR\r");
    assert_eq!(console.current_row(), 2);
    assert_eq!(console.line(2).unwrap().text(), DEFAULT_PROMPT);
}

#[test]
fn test_submitted_lines_stay_read_only() {
    let mut console = console_with_rows(5);
    console.prompt().unwrap();
    console.type_text("first\r");

    assert_eq!(console.line(1).unwrap().state(), LineState::Submitted);
    assert_eq!(console.focused_row(), Some(2));

    console.type_text("second");
    assert_eq!(
        console.line(1).unwrap().text(),
        format!("{}first", DEFAULT_PROMPT)
    );
}

#[test]
fn test_custom_prompt_and_size() {
    let mut console = console_with_rows(3);
    console
        .set_prompt("A> ")
        .set_size(40, 4)
        .unwrap()
        .prompt()
        .unwrap();

    assert_eq!(console.line_count(), 4);
    assert_eq!(console.current_line().unwrap().text(), "A> ");

    console.type_text("go\r");
    assert_eq!(console.line(1).unwrap().text(), "A> go");

    let px = console.pixel_size().unwrap();
    assert_eq!(px.width, 8.0 * 40.0 + 1.0);
    assert_eq!(px.height, 16.0 * 4.0 + 1.0);
}

#[test]
fn test_keys_ignored_before_prompt() {
    let mut console = console_with_rows(5);
    assert_eq!(console.handle_key(Key::Char('a')), KeyOutcome::Ignored);
    assert_eq!(console.handle_key(Key::Enter), KeyOutcome::Ignored);
    assert_eq!(console.current_row(), 1);
}
