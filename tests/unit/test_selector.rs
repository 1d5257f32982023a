//! Unit Tests for Container Selection

use gridconsole::error::ErrorKind;
use gridconsole::host::{ContainerNode, ContainerRef, Host, MemoryHost, Selector};

fn sample_host() -> MemoryHost {
    let mut host = MemoryHost::default();
    host.add_container(ContainerNode::new("div").with_id("main").with_class("console"));
    host.add_container(ContainerNode::new("div").with_class("panel"));
    host.add_container(ContainerNode::new("pre").with_class("panel").with_class("console"));
    host
}

#[test]
fn test_parse_forms() {
    for expr in ["div", "#main", ".console", "div.console", "div#main.console", "DIV"] {
        assert!(Selector::parse(expr).is_ok(), "expected {:?} to parse", expr);
    }
}

#[test]
fn test_parse_rejects() {
    for expr in ["", "   ", "div span", "div > pre", "#a#b", "div,pre", "."] {
        let err = Selector::parse(expr).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration, "expr {:?}", expr);
    }
}

#[test]
fn test_query_counts() {
    let host = sample_host();
    let count = |expr: &str| host.query(&Selector::parse(expr).unwrap()).len();

    assert_eq!(count("div"), 2);
    assert_eq!(count(".console"), 2);
    assert_eq!(count(".panel.console"), 1);
    assert_eq!(count("#main"), 1);
    assert_eq!(count("span"), 0);
}

#[test]
fn test_resolve_requires_exactly_one() {
    let host = sample_host();

    assert!(ContainerRef::from("pre.console").resolve(&host).is_ok());
    assert_eq!(
        ContainerRef::from(".console").resolve(&host).unwrap_err().kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        ContainerRef::from("canvas").resolve(&host).unwrap_err().kind(),
        ErrorKind::Configuration
    );
}

#[test]
fn test_detached_containers_not_selected() {
    let mut host = MemoryHost::default();
    let id = host.add_container(ContainerNode::new("div").with_class("console"));
    host.detach_container(id);

    assert!(host.query(&Selector::parse(".console").unwrap()).is_empty());
    assert!(!host.is_attached(&id));
}
