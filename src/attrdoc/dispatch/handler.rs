//! Handler capability trait
//!
//! A handler renders one run of same-tagged nodes. The engine creates a fresh
//! handler for every run and drives it through three phases:
//!
//! 1. `group_start` with the run's first node and the previous run's handler
//! 2. `process` for every node of the run
//! 3. `group_end` with the run's last node and the next run's handler
//!
//! The neighbouring handlers let a handler decide whether to open or close a
//! shared wrapper, e.g. one list for consecutive function and member runs.
//! All three methods default to doing nothing.
//!
//! `C` is the context shared by every handler of a dispatch run (an output
//! buffer, id tables, ...). It is passed to each call instead of living in
//! global state, so independent runs do not interfere.

use super::DispatchError;
use crate::attrdoc::ast::Node;

pub trait Handler<C> {
    /// Process one node of the run
    fn process(&mut self, _node: &Node, _ctx: &mut C) -> Result<(), DispatchError> {
        Ok(())
    }

    /// Called once before the first `process` of the run
    fn group_start(
        &mut self,
        _node: &Node,
        _previous: Option<&dyn Handler<C>>,
        _ctx: &mut C,
    ) -> Result<(), DispatchError> {
        Ok(())
    }

    /// Called once after the last `process` of the run
    fn group_end(
        &mut self,
        _node: &Node,
        _next: Option<&dyn Handler<C>>,
        _ctx: &mut C,
    ) -> Result<(), DispatchError> {
        Ok(())
    }

    /// Identifies the handler's kind to its neighbours.
    ///
    /// Defaults to the concrete type name, so two handlers of the same type
    /// recognise each other.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
