use std::rc::Rc;
use std_util::prelude::*;
use tests::{
    branch, leaf, sample,
    tree::{TraversingVisitor, Visitor},
    DepthFirst, Entry, Error, Log, Progress, Recorder,
};

fn refusing(log: &Log, name: &str) -> TraversingVisitor<String, Error> {
    let mut visitor =
        TraversingVisitor::new(Rc::new(DepthFirst::new(log)), Box::new(Recorder::refusing(log, name)));
    visitor.set_progress_monitor(Some(Box::new(Progress::new(log))));
    visitor
}

#[test]
fn inner_visit_failure_stops_the_walk() {
    let log = Log::new();
    let mut visitor = refusing(&log, "a");

    let err = assert_err!(visitor.visit_branch(&sample()), Error::Refused(_));
    assert_eq!(err, Error::Refused("a".to_string()));

    // `b` is never reached and `root` never finishes its traversal
    assert_eq!(log.names(Entry::visit), ["root"]);
    assert_eq!(log.names(Entry::traverse), ["root"]);
    assert!(!log.entries().contains(&Entry::Traversed("root".to_string())));
}

#[test]
fn failure_skips_the_remaining_hook() {
    let log = Log::new();
    let mut visitor = refusing(&log, "root");

    assert_err!(visitor.visit_branch(&sample()));

    // Visit first, so the failed visit leaves nothing to traverse
    assert!(log.entries().is_empty());
}

#[test]
fn failure_during_pre_order_traversal() {
    let log = Log::new();
    let mut visitor = refusing(&log, "b");
    visitor.set_traverse_first(true);

    let tree = branch("root", vec![leaf("a"), leaf("b"), leaf("c")]);
    let err = assert_err!(visitor.visit_branch(&tree));

    assert_eq!(err.to_string(), "refused to visit `b`");
    assert_eq!(log.names(Entry::visit), ["a"]);
    assert_eq!(log.names(Entry::traverse), ["root", "a", "b"]);
}
