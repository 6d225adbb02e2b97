use crate::llrb_tree::map::LlrbMap;
use crate::llrb_tree::node::{Color, Node};
use crate::llrb_tree::tree::Tree;
use std::fmt::Display;
use std::io::{self, Write};

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Red => "red",
        Color::Black => "black",
    }
}

fn quote<T: Display>(value: &T) -> String {
    let mut ret = String::from("\"");
    for c in value.to_string().chars() {
        if c == '"' || c == '\\' {
            ret.push('\\');
        }
        ret.push(c);
    }
    ret.push('"');
    ret
}

fn write_nodes<T, U, W>(tree: &Tree<T, U>, writer: &mut W) -> io::Result<()>
where
    T: Display,
    U: Display,
    W: Write,
{
    if let Some(ref node) = tree {
        let label = format!("{}:{}", node.entry.key, node.entry.value);
        write!(
            writer,
            "{} [shape=circle,color={},label={}];",
            quote(&node.entry.key),
            color_name(node.color),
            quote(&label),
        )?;
        write_nodes(&node.left, writer)?;
        write_nodes(&node.right, writer)?;
    }
    Ok(())
}

fn write_edge<T, U, W>(parent: &Node<T, U>, child: &Tree<T, U>, writer: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    if let Some(ref child) = child {
        write!(
            writer,
            "{}->{}[color={}];",
            quote(&parent.entry.key),
            quote(&child.entry.key),
            color_name(child.color),
        )?;
    }
    Ok(())
}

fn write_edges<T, U, W>(tree: &Tree<T, U>, writer: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    if let Some(ref node) = tree {
        write_edge(node, &node.left, writer)?;
        write_edge(node, &node.right, writer)?;
        write_edges(&node.left, writer)?;
        write_edges(&node.right, writer)?;
    }
    Ok(())
}

impl<T, U> LlrbMap<T, U>
where
    T: Display,
    U: Display,
{
    /// Writes the tree as a Graphviz `digraph`. Each node is labelled `key:value` and colored by
    /// the color of the link to its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 10);
    ///
    /// let mut buffer = Vec::new();
    /// map.write_dot(&mut buffer).unwrap();
    /// assert!(buffer.starts_with(b"digraph G {"));
    /// ```
    pub fn write_dot<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        writer.write_all(b"digraph G {")?;
        write_nodes(self.root(), writer)?;
        write_edges(self.root(), writer)?;
        writer.write_all(b"}")
    }

    /// Returns the Graphviz description produced by `write_dot` as a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 10);
    /// assert_eq!(
    ///     map.to_dot(),
    ///     r#"digraph G {"1" [shape=circle,color=black,label="1:10"];}"#,
    /// );
    /// ```
    pub fn to_dot(&self) -> String {
        let mut buffer = Vec::new();
        self.write_dot(&mut buffer)
            .expect("Writing to a `Vec<u8>` should not fail.");
        String::from_utf8(buffer).expect("Expected the dot output to be valid UTF-8.")
    }
}
