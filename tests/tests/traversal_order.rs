use pretty_assertions::assert_eq;
use std::rc::Rc;
use tests::{
    branch, leaf, sample,
    tree::{TraversingVisitor, UnmonitoredTraversingVisitor, Visitor},
    DepthFirst, Entry, Error, Log, Progress, Recorder,
};

fn visit(name: &str) -> Entry {
    Entry::Visit(name.to_string())
}

fn traverse(name: &str) -> Entry {
    Entry::Traverse(name.to_string())
}

fn traversed(name: &str) -> Entry {
    Entry::Traversed(name.to_string())
}

fn visited(name: &str) -> Entry {
    Entry::Visited(name.to_string())
}

fn traversing_visitor(log: &Log) -> TraversingVisitor<String, Error> {
    TraversingVisitor::new(Rc::new(DepthFirst::new(log)), Box::new(Recorder::new(log)))
}

#[test]
fn visits_before_traversing_by_default() {
    let log = Log::new();
    let mut visitor = traversing_visitor(&log);

    assert!(!visitor.traverse_first());
    assert_eq!(visitor.visit_branch(&sample()), Ok("root".to_string()));

    assert_eq!(
        log.entries(),
        [
            visit("root"),
            traverse("root"),
            visit("a"),
            traverse("a"),
            visit("b"),
            traverse("b"),
        ]
    );
}

#[test]
fn traverses_before_visiting() {
    let log = Log::new();
    let mut visitor = traversing_visitor(&log);
    visitor.set_traverse_first(true);

    assert_eq!(visitor.visit_branch(&sample()), Ok("root".to_string()));

    assert_eq!(
        log.entries(),
        [
            traverse("root"),
            traverse("a"),
            visit("a"),
            traverse("b"),
            visit("b"),
            visit("root"),
        ]
    );
}

#[test]
fn dispatched_node_on_its_own() {
    let log = Log::new();
    let mut visitor = traversing_visitor(&log);

    let tests::Node::Leaf(node) = leaf("a") else {
        unreachable!()
    };

    assert_eq!(visitor.visit_leaf(&node), Ok("a".to_string()));
    assert_eq!(log.entries(), [visit("a"), traverse("a")]);
}

#[test]
fn one_traversal_per_node() {
    let tree = branch(
        "root",
        vec![
            leaf("a"),
            tests::Node::Branch(branch("inner", vec![leaf("b"), leaf("c")])),
            leaf("d"),
        ],
    );

    for traverse_first in [false, true] {
        let log = Log::new();
        let mut visitor = traversing_visitor(&log);
        visitor.set_traverse_first(traverse_first);

        assert_eq!(visitor.visit_branch(&tree), Ok("root".to_string()));

        let mut visits = log.names(Entry::visit);
        let mut traversals = log.names(Entry::traverse);
        visits.sort();
        traversals.sort();

        assert_eq!(visits, ["a", "b", "c", "d", "inner", "root"]);
        assert_eq!(traversals, visits);
    }
}

#[test]
fn progress_is_reported_once_set() {
    let log = Log::new();
    let mut visitor = traversing_visitor(&log);
    visitor.set_traverse_first(true);

    visitor.visit_branch(&sample()).unwrap();
    assert!(log.names(Entry::notification).is_empty());

    log.clear();
    visitor.set_progress_monitor(Some(Box::new(Progress::new(&log))));
    visitor.visit_branch(&sample()).unwrap();

    assert_eq!(
        log.entries(),
        [
            traverse("root"),
            traverse("a"),
            traversed("a"),
            visit("a"),
            visited("a"),
            traverse("b"),
            traversed("b"),
            visit("b"),
            visited("b"),
            traversed("root"),
            visit("root"),
            visited("root"),
        ]
    );
}

#[test]
fn progress_follows_the_visit_by_default() {
    let log = Log::new();
    let mut visitor = traversing_visitor(&log);
    visitor.set_progress_monitor(Some(Box::new(Progress::new(&log))));

    let tests::Node::Leaf(node) = leaf("a") else {
        unreachable!()
    };

    visitor.visit_leaf(&node).unwrap();

    assert_eq!(
        log.entries(),
        [visit("a"), visited("a"), traverse("a"), traversed("a")]
    );
}

#[test]
fn without_progress_monitor() {
    let log = Log::new();
    let mut visitor = UnmonitoredTraversingVisitor::<String, Error>::new(
        Rc::new(DepthFirst::new(&log)),
        Box::new(Recorder::new(&log)),
    );
    visitor.set_traverse_first(true);

    assert_eq!(visitor.visit_branch(&sample()), Ok("root".to_string()));
    assert_eq!(
        log.entries(),
        [
            traverse("root"),
            traverse("a"),
            visit("a"),
            traverse("b"),
            visit("b"),
            visit("root"),
        ]
    );
}
