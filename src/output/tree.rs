//! Tree printer for rendered output
//!
//! Branch glyphs are dimmed, directories bold blue, `(empty)` markers dim
//! italic. Without color the output is byte-identical to `RenderedTree::text`.

use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{LineKind, RenderedTree, TreeLine};

use super::config::OutputConfig;

pub struct TreePrinter {
    config: OutputConfig,
}

impl TreePrinter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Plain text, identical to what gets persisted.
    pub fn format(&self, tree: &RenderedTree) -> String {
        tree.text()
    }

    pub fn print(&self, tree: &RenderedTree) -> io::Result<()> {
        // The color decision was already made from flags and environment
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(&mut stdout, tree)?;
        stdout.flush()
    }

    /// Write every line, newline-terminated, to any color-capable writer.
    pub fn write_to<W: WriteColor>(&self, out: &mut W, tree: &RenderedTree) -> io::Result<()> {
        for line in tree.lines() {
            self.write_line(out, line)?;
        }
        Ok(())
    }

    /// Render into an in-memory buffer, with ANSI escapes when color is on.
    pub fn render_buffer(&self, tree: &RenderedTree) -> io::Result<Vec<u8>> {
        let mut buffer = if self.config.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        self.write_to(&mut buffer, tree)?;
        Ok(buffer.into_inner())
    }

    fn write_line<W: WriteColor>(&self, out: &mut W, line: &TreeLine) -> io::Result<()> {
        if !line.prefix.is_empty() {
            out.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(out, "{}", line.prefix)?;
            out.reset()?;
        }

        match line.kind {
            LineKind::Root | LineKind::Directory => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            LineKind::Empty => {
                out.set_color(ColorSpec::new().set_dimmed(true).set_italic(true))?;
            }
            LineKind::File => {}
        }
        write!(out, "{}", line.label)?;
        out.reset()?;
        writeln!(out)
    }
}
