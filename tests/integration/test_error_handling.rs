//! Integration Tests for Error Handling
//!
//! Setup calls fail synchronously with a configuration or
//! invalid-argument error and leave the console as it was.

use gridconsole::console::Console;
use gridconsole::error::ErrorKind;
use gridconsole::host::{ContainerNode, ContainerRef, MemoryHost};
use gridconsole::models::GridSize;

fn host_with(nodes: &[ContainerNode]) -> MemoryHost {
    let mut host = MemoryHost::default();
    for node in nodes {
        host.add_container(node.clone());
    }
    host
}

#[test]
fn test_bind_no_match() {
    let mut console = Console::new(host_with(&[ContainerNode::new("div").with_id("other")]));
    let err = console.bind_to("div.console").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(!console.is_bound());
    assert_eq!(console.line_count(), 0);
}

#[test]
fn test_bind_ambiguous() {
    let node = ContainerNode::new("div").with_class("console");
    let mut console = Console::new(host_with(&[node.clone(), node]));
    let err = console.bind_to(".console").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("ambiguous"));
}

#[test]
fn test_bind_malformed_selector() {
    let mut console = Console::new(host_with(&[ContainerNode::new("div")]));
    let err = console.bind_to("div > span").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_bind_nothing_ever_supplied() {
    let mut console = Console::new(MemoryHost::default());
    let err = console.bind(None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_rebind_after_detach() {
    let mut host = MemoryHost::default();
    let id = host.add_container(ContainerNode::new("div"));
    let mut console = Console::new(host);
    console.bind_to(ContainerRef::Handle(id)).unwrap();

    console.host_mut().detach_container(id);
    let err = console.rebind().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_set_size_zero_leaves_console_untouched() {
    let mut host = MemoryHost::default();
    let id = host.add_container(ContainerNode::new("div").with_id("c"));
    let mut console = Console::new(host);
    console.bind_to("#c").unwrap();

    let before_px = console.host().container_size(id);
    let measurements = console.host().measurements();

    for (cols, rows) in [(0, 25), (80, 0), (0, 0)] {
        let err = console.set_size(cols, rows).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    assert_eq!(console.grid_size(), GridSize::default());
    assert_eq!(console.line_count(), 25);
    assert_eq!(console.host().container_size(id), before_px);
    assert_eq!(console.host().measurements(), measurements);
}

#[test]
fn test_non_numeric_size_strings() {
    for input in ["", "abc", "80x", "x25", "eightyxtwenty", "80x-1", "1.5x2"] {
        let err = input.parse::<GridSize>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "input {:?}", input);
    }
}

#[test]
fn test_prompt_before_bind() {
    let mut console = Console::new(MemoryHost::default());
    let err = console.prompt().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_write_before_bind() {
    let mut console = Console::new(MemoryHost::default());
    let err = console.write("a\nb").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    // nothing moved, so binding later starts from row 1
    assert_eq!(console.current_row(), 1);
    assert_eq!(console.line_count(), 0);
}
