use std::{
    collections::HashMap,
    fmt::Display,
    hash::Hash,
    io::{self, Cursor, Write},
};

use crate::{
    core::{Graph, VertexType},
    path::Path,
};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Exporter to the [Graphviz DOT](https://graphviz.org/doc/info/lang.html)
/// format.
pub struct Dot<V> {
    name: String,
    get_vertex_label: Box<dyn Fn(&V) -> String>,
    highlight: Option<Path<V>>,
}

impl<V> Dot<V> {
    pub fn new<F>(name: Option<String>, get_vertex_label: F) -> Self
    where
        F: Fn(&V) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
            highlight: None,
        }
    }

    /// Renders the edges of the path in bold.
    pub fn highlight(self, path: Path<V>) -> Self {
        Self {
            highlight: Some(path),
            ..self
        }
    }

    pub fn to_string(&self, graph: &Graph<V>) -> String
    where
        V: VertexType,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<V: Display> Dot<V> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v}"))
    }
}

impl<V: VertexType> Export<Graph<V>> for Dot<V> {
    fn export<W: Write>(&self, graph: &Graph<V>, out: &mut W) -> io::Result<()> {
        out.write_all(b"digraph ")?;

        let mut indexer = Indexer::new();

        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for vertex in graph.vertices() {
            out.write_all(
                format!(
                    "    v{} [label={:?}];\n",
                    indexer.get(vertex),
                    (self.get_vertex_label)(vertex)
                )
                .as_bytes(),
            )?;
        }

        for (src, dst) in graph.edges() {
            let highlighted = self
                .highlight
                .as_ref()
                .map(|path| path.edges().any(|(u, v)| u == src && v == dst))
                .unwrap_or(false);

            let attrs = if highlighted { " [style=bold]" } else { "" };

            out.write_all(
                format!(
                    "    v{} -> v{}{};\n",
                    indexer.get(src),
                    indexer.get(dst),
                    attrs
                )
                .as_bytes(),
            )?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

#[derive(Debug)]
struct Indexer<'a, V>(HashMap<&'a V, usize>);

impl<'a, V: Eq + Hash> Indexer<'a, V> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&mut self, vertex: &'a V) -> usize {
        let new_idx = self.0.len();
        *self.0.entry(vertex).or_insert(new_idx)
    }
}

#[cfg(test)]
mod tests {
    use crate::{algo::find_path_bfs, infra::testing::create_path};

    use super::*;

    #[test]
    fn export_path_graph() {
        let graph = create_path(3);
        let dot = Dot::with_display(Some(String::from("P"))).to_string(&graph);

        assert!(dot.starts_with("digraph P {\n"));
        assert!(dot.ends_with("}\n"));
        assert_eq!(dot.matches("label=").count(), 3);
        assert_eq!(dot.matches(" -> ").count(), 2);
        assert!(!dot.contains("bold"));
    }

    #[test]
    fn export_highlighted() {
        let mut graph = create_path(4);
        graph.add_edge(0, 3);

        let path = find_path_bfs(&graph, &0, &3);
        let dot = Dot::with_display(None).highlight(path).to_string(&graph);

        assert!(dot.starts_with("digraph G {\n"));
        assert_eq!(dot.matches("[style=bold]").count(), 1);
    }
}
