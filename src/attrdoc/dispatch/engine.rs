//! Sibling-grouping dispatch
//!
//! Walks the children of a node and hands every child whose tag is in the
//! registry to a handler. Consecutive matched children with the same tag form
//! one run and share one handler. Children whose tag is not registered are
//! skipped and do not interrupt a run, so
//!
//! ```text
//! A A X A B      (X unregistered)
//! ```
//!
//! produces one `A` run over three nodes followed by one `B` run.

use super::handler::Handler;
use super::registry::Registry;
use super::DispatchError;
use crate::attrdoc::ast::Node;

/// The open run: its handler and the last node it processed
struct Run<'n, C> {
    handler: Box<dyn Handler<C>>,
    last: &'n Node,
}

/// Dispatch the children of `parent` to the handlers of `registry`.
///
/// The first handler error stops the walk and is returned; no further
/// handler calls are made.
pub fn process<C>(parent: &Node, registry: &Registry<C>, ctx: &mut C) -> Result<(), DispatchError> {
    let mut run: Option<Run<'_, C>> = None;

    for node in parent.children() {
        // A node continuing the open run is registered by construction
        let continues = run
            .as_ref()
            .is_some_and(|current| current.last.tag() == node.tag());
        if continues {
            if let Some(current) = run.as_mut() {
                current.last = node;
            }
        } else {
            let Some(mut handler) = registry.create(node.tag()) else {
                continue;
            };
            let previous = match run.take() {
                Some(mut closing) => {
                    log::trace!("closing run of \\{}", closing.last.tag());
                    closing
                        .handler
                        .group_end(closing.last, Some(&*handler), ctx)?;
                    Some(closing.handler)
                }
                None => None,
            };
            log::trace!("opening run of \\{}", node.tag());
            handler.group_start(node, previous.as_deref(), ctx)?;
            run = Some(Run {
                handler,
                last: node,
            });
        }

        if let Some(current) = run.as_mut() {
            current.handler.process(node, ctx)?;
        }
    }

    if let Some(mut closing) = run {
        closing.handler.group_end(closing.last, None, ctx)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call as a line in the context
    struct Recorder(&'static str);

    impl Handler<Vec<String>> for Recorder {
        fn process(&mut self, node: &Node, ctx: &mut Vec<String>) -> Result<(), DispatchError> {
            ctx.push(format!("{} process {}", self.0, node.get_value()));
            Ok(())
        }

        fn group_start(
            &mut self,
            node: &Node,
            previous: Option<&dyn Handler<Vec<String>>>,
            ctx: &mut Vec<String>,
        ) -> Result<(), DispatchError> {
            let previous = previous.map_or("-", |h| h.kind());
            ctx.push(format!("{} start {} after {}", self.0, node.get_value(), previous));
            Ok(())
        }

        fn group_end(
            &mut self,
            node: &Node,
            next: Option<&dyn Handler<Vec<String>>>,
            ctx: &mut Vec<String>,
        ) -> Result<(), DispatchError> {
            let next = next.map_or("-", |h| h.kind());
            ctx.push(format!("{} end {} before {}", self.0, node.get_value(), next));
            Ok(())
        }

        fn kind(&self) -> &'static str {
            self.0
        }
    }

    struct Failing;

    impl Handler<Vec<String>> for Failing {
        fn process(&mut self, node: &Node, _ctx: &mut Vec<String>) -> Result<(), DispatchError> {
            Err(DispatchError::handler(node.tag(), "rejected"))
        }

        fn kind(&self) -> &'static str {
            "F"
        }
    }

    fn registry() -> Registry<Vec<String>> {
        Registry::new()
            .define_with("a", Recorder, "A")
            .define_with("b", Recorder, "B")
    }

    fn parent(tags: &[(&str, &str)]) -> Node {
        tags.iter().fold(Node::root(), |parent, (tag, value)| {
            parent.with_child(Node::new(*tag).with_value(value))
        })
    }

    #[test]
    fn test_runs_skip_unregistered_tags() {
        let root = parent(&[("a", "1"), ("a", "2"), ("x", "3"), ("a", "4"), ("b", "5")]);
        let mut calls = Vec::new();
        process(&root, &registry(), &mut calls).unwrap();
        assert_eq!(
            calls,
            vec![
                "A start 1 after -",
                "A process 1",
                "A process 2",
                "A process 4",
                "A end 4 before B",
                "B start 5 after A",
                "B process 5",
                "B end 5 before -",
            ]
        );
    }

    #[test]
    fn test_alternating_tags_open_separate_runs() {
        let root = parent(&[("a", "1"), ("b", "2"), ("a", "3")]);
        let mut calls = Vec::new();
        process(&root, &registry(), &mut calls).unwrap();
        let starts = calls.iter().filter(|c| c.contains(" start ")).count();
        let ends = calls.iter().filter(|c| c.contains(" end ")).count();
        assert_eq!(starts, 3);
        assert_eq!(ends, 3);
        assert_eq!(calls[4], "B end 2 before A");
    }

    #[test]
    fn test_no_matches_makes_no_calls() {
        let mut calls = Vec::new();
        process(&Node::root(), &registry(), &mut calls).unwrap();
        assert!(calls.is_empty());

        let root = parent(&[("x", "1"), ("y", "2")]);
        process(&root, &registry(), &mut calls).unwrap();
        assert!(calls.is_empty());
    }

    #[test]
    fn test_only_direct_children_are_dispatched() {
        let root =
            Node::root().with_child(Node::new("x").with_child(Node::new("a").with_value("deep")));
        let mut calls = Vec::new();
        process(&root, &registry(), &mut calls).unwrap();
        assert!(calls.is_empty());
    }

    #[test]
    fn test_one_handler_built_per_run() {
        use std::cell::Cell;
        use std::rc::Rc;

        let built = Rc::new(Cell::new(0));
        let counter = Rc::clone(&built);
        let registry = Registry::new().define("a", move || {
            counter.set(counter.get() + 1);
            Recorder("A")
        });
        let root = parent(&[("a", "1"), ("a", "2"), ("x", "3"), ("a", "4"), ("y", "5")]);
        let mut calls = Vec::new();
        process(&root, &registry, &mut calls).unwrap();
        assert_eq!(built.get(), 1);

        let root = parent(&[("a", "1"), ("b", "2"), ("a", "3")]);
        let registry = registry.define_with("b", Recorder, "B");
        process(&root, &registry, &mut calls).unwrap();
        assert_eq!(built.get(), 3);
    }

    #[test]
    fn test_first_error_stops_dispatch() {
        let registry = registry().define("f", || Failing);
        let root = parent(&[("a", "1"), ("f", "2"), ("b", "3")]);
        let mut calls = Vec::new();
        let err = process(&root, &registry, &mut calls).unwrap_err();
        assert!(matches!(err, DispatchError::Handler { ref tag, .. } if tag == "f"));
        assert_eq!(calls, vec!["A start 1 after -", "A process 1", "A end 1 before F"]);
    }
}
