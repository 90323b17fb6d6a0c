//! Structured trace events for step-by-step observation of the algorithms.
//!
//! Every traced operation reports what it is doing as a stream of
//! [`TraceEvent`]s: a scope is opened with [`TraceEvent::Enter`], observations
//! inside it are [`TraceEvent::Note`]s, and [`TraceEvent::Exit`] closes it
//! again. Scopes nest, so a consumer can rebuild the full call structure;
//! [`StepTree`] does exactly that, and [`LogTrace`] flattens the stream into
//! [`log`] records instead.
//!
//! Sinks are passed into each operation explicitly; there is no global
//! logger. The default sink is [`NoTrace`], which reports itself as disabled
//! so call sites skip event construction entirely.

use core::fmt;

/// A single observation reported by a traced operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A named scope was opened (one primality trial, one padding call, ...).
    Enter(String),
    /// An observation inside the current scope.
    Note {
        /// Short machine-readable label for the kind of observation.
        kind: &'static str,
        /// Free-text payload.
        detail: String,
    },
    /// The current scope finished.
    Exit,
}

/// Receiver for [`TraceEvent`]s.
pub trait TraceSink {
    /// Whether this sink observes events at all.
    ///
    /// Call sites consult this before formatting payloads, so a disabled
    /// sink costs nothing. The answer must stay stable for the duration of
    /// one traced operation, otherwise `Enter`/`Exit` pairs come out
    /// unbalanced.
    fn enabled(&self) -> bool {
        true
    }

    /// Consume one event.
    fn event(&mut self, event: TraceEvent);
}

/// The do-nothing sink used when no observer is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn enabled(&self) -> bool {
        false
    }

    fn event(&mut self, _event: TraceEvent) {}
}

/// One node of a recorded step tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepNode {
    /// Scope name or `kind: detail` note text.
    pub label: String,
    /// Nested scopes and notes, in arrival order.
    pub children: Vec<StepNode>,
}

/// A sink that records events as a tree of nested steps.
///
/// Rendering via [`fmt::Display`] produces an indented outline, one line per
/// node, suitable for a terminal or a tree widget.
#[derive(Debug, Clone)]
pub struct StepTree {
    root: StepNode,
    // Path of child indices from the root to the currently open scope.
    path: Vec<usize>,
}

impl StepTree {
    /// Creates an empty tree whose root carries `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            root: StepNode {
                label: label.into(),
                children: Vec::new(),
            },
            path: Vec::new(),
        }
    }

    /// The recorded tree.
    pub fn root(&self) -> &StepNode {
        &self.root
    }

    fn current(&mut self) -> &mut StepNode {
        let mut node = &mut self.root;
        for &i in &self.path {
            node = &mut node.children[i];
        }
        node
    }
}

impl TraceSink for StepTree {
    fn event(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Enter(label) => {
                let current = self.current();
                current.children.push(StepNode {
                    label,
                    children: Vec::new(),
                });
                let index = current.children.len() - 1;
                self.path.push(index);
            }
            TraceEvent::Note { kind, detail } => {
                self.current().children.push(StepNode {
                    label: format!("{kind}: {detail}"),
                    children: Vec::new(),
                });
            }
            TraceEvent::Exit => {
                self.path.pop();
            }
        }
    }
}

impl fmt::Display for StepTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node(node: &StepNode, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "{:indent$}{}", "", node.label, indent = depth * 2)?;
            for child in &node.children {
                write_node(child, depth + 1, f)?;
            }
            Ok(())
        }

        write_node(&self.root, 0, f)
    }
}

/// A sink that forwards events to the [`log`] crate at debug level.
///
/// Scope nesting is rendered as indentation, so `RUST_LOG=debug` output reads
/// like the step tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace {
    depth: usize,
}

impl LogTrace {
    /// Creates a sink at nesting depth zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for LogTrace {
    fn enabled(&self) -> bool {
        log::log_enabled!(log::Level::Debug)
    }

    fn event(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Enter(label) => {
                log::debug!("{:indent$}> {}", "", label, indent = self.depth * 2);
                self.depth += 1;
            }
            TraceEvent::Note { kind, detail } => {
                log::debug!("{:indent$}{}: {}", "", kind, detail, indent = self.depth * 2);
            }
            TraceEvent::Exit => {
                self.depth = self.depth.saturating_sub(1);
            }
        }
    }
}

macro_rules! trace_enter {
    ($sink:expr, $($arg:tt)*) => {
        if $sink.enabled() {
            $sink.event($crate::trace::TraceEvent::Enter(format!($($arg)*)));
        }
    };
}

macro_rules! trace_note {
    ($sink:expr, $kind:expr, $($arg:tt)*) => {
        if $sink.enabled() {
            $sink.event($crate::trace::TraceEvent::Note {
                kind: $kind,
                detail: format!($($arg)*),
            });
        }
    };
}

macro_rules! trace_exit {
    ($sink:expr) => {
        if $sink.enabled() {
            $sink.event($crate::trace::TraceEvent::Exit);
        }
    };
}

pub(crate) use {trace_enter, trace_exit, trace_note};
