// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output and tree outlines.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use lamina_core::sublayer::SublayerTree;
use lamina_core::trace::{
    ResolveEvent, ToggleEvent, TraceSink, TreeBuiltEvent, TreeRejectedEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_tree_built(&mut self, e: &TreeBuiltEvent) {
        let _ = writeln!(
            self.writer,
            "[tree] nodes={} roots={}",
            e.node_count, e.root_count,
        );
    }

    fn on_toggle(&mut self, e: &ToggleEvent) {
        let _ = writeln!(self.writer, "[toggle] id={} checked={}", e.id, e.checked);
    }

    fn on_resolve(&mut self, e: &ResolveEvent) {
        if e.show_none {
            let _ = writeln!(
                self.writer,
                "[resolve] candidates={} suppressed={} -> show-none",
                e.candidates, e.suppressed,
            );
        } else {
            let _ = writeln!(
                self.writer,
                "[resolve] candidates={} suppressed={} visible={}",
                e.candidates, e.suppressed, e.visible,
            );
        }
    }

    fn on_tree_rejected(&mut self, e: &TreeRejectedEvent) {
        let _ = writeln!(self.writer, "[rejected] id={}", e.offending_id);
    }
}

/// Renders an indented checkbox outline of a sublayer tree.
///
/// One line per sublayer, children indented under their parent:
///
/// ```text
/// [x] 0
///     [x] 1
///     [ ] 2
/// [x] 3
/// ```
#[must_use]
pub fn outline(tree: &SublayerTree) -> String {
    fn write_node(tree: &SublayerTree, id: i32, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str("    ");
        }
        out.push_str(if tree.checked(id) { "[x] " } else { "[ ] " });
        out.push_str(&id.to_string());
        out.push('\n');
        for child in tree.children(id) {
            write_node(tree, child, depth + 1, out);
        }
    }

    let mut out = String::new();
    for root in tree.roots() {
        write_node(tree, root, 0, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use lamina_core::sublayer::{NO_PARENT, SublayerNode, SublayerTree};
    use lamina_core::trace::Tracer;

    use super::*;

    fn sample_tree() -> SublayerTree {
        let nodes = [
            SublayerNode::container(0, NO_PARENT, vec![1, 2], true),
            SublayerNode::leaf(1, 0, true),
            SublayerNode::leaf(2, 0, false),
            SublayerNode::leaf(3, NO_PARENT, true),
        ];
        SublayerTree::from_nodes(&nodes).unwrap()
    }

    #[test]
    fn outline_indents_children() {
        let rendered = outline(&sample_tree());
        assert_eq!(rendered, "[x] 0\n    [x] 1\n    [ ] 2\n[x] 3\n");
    }

    #[test]
    fn pretty_print_resolve_line() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let tree = sample_tree();
        let mut tracer = Tracer::new(&mut sink);
        let _ = tree.visible_layer_ids_traced(&mut tracer);

        let text = String::from_utf8(sink.writer).unwrap();
        assert_eq!(text, "[resolve] candidates=2 suppressed=0 visible=2\n");
    }

    #[test]
    fn pretty_print_show_none_line() {
        let nodes = [SublayerNode::leaf(1, NO_PARENT, false)];
        let tree = SublayerTree::from_nodes(&nodes).unwrap();

        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let mut tracer = Tracer::new(&mut sink);
        let _ = tree.visible_layer_ids_traced(&mut tracer);

        let text = String::from_utf8(sink.writer).unwrap();
        assert_eq!(text, "[resolve] candidates=0 suppressed=0 -> show-none\n");
    }

    #[test]
    fn pretty_print_toggle_line() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let mut tracer = Tracer::new(&mut sink);
        tracer.toggle(&lamina_core::trace::ToggleEvent {
            id: 2,
            checked: true,
        });
        let text = String::from_utf8(sink.writer).unwrap();
        assert_eq!(text, "[toggle] id=2 checked=true\n");
    }
}
