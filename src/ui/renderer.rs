use anyhow::Result;
use std::io::{self, Stdout, Write};

use lifegrid_core::config::RenderConfig;
use lifegrid_core::Board;

/// Anything that can present a board after a generation or a direct edit.
///
/// Rendering is split in two so drivers can copy what they need while the
/// board is locked and do the output with the lock released.
pub trait Renderer {
    /// Everything `present` needs, detached from the board.
    type Frame;

    /// Called with the board locked. Must not block or do I/O.
    fn capture(&self, board: &Board) -> Self::Frame;

    fn present(&mut self, frame: Self::Frame) -> Result<()>;

    fn render(&mut self, board: &Board) -> Result<()> {
        let frame = self.capture(board);
        self.present(frame)
    }
}

/// Turns a board into text: one line per row, one glyph per cell. Glyphs are
/// derived from cell state on every call; nothing is cached between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    alive: char,
    dead: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl TextRenderer {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.alive_glyph, config.dead_glyph)
    }

    pub fn frame(&self, board: &Board) -> String {
        let mut out = String::with_capacity(
            (usize::from(board.width()) + 1) * usize::from(board.height()),
        );
        if board.width() == 0 {
            return out;
        }
        for row in board.rows() {
            out.extend(
                row.iter()
                    .map(|cell| if cell.is_alive() { self.alive } else { self.dead }),
            );
            out.push('\n');
        }
        out
    }
}

/// Writes a header and a text frame per render to any `Write` sink.
pub struct ConsoleRenderer<W: Write> {
    text: TextRenderer,
    out: W,
}

impl ConsoleRenderer<Stdout> {
    pub fn stdout(config: &RenderConfig) -> Self {
        Self::new(TextRenderer::from_config(config), io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(text: TextRenderer, out: W) -> Self {
        Self { text, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    type Frame = String;

    fn capture(&self, board: &Board) -> String {
        let stable = if board.is_stable() { " (stable)" } else { "" };
        format!(
            "Generation {} | population {}{}\n{}\n",
            board.generation(),
            board.population(),
            stable,
            self.text.frame(board)
        )
    }

    fn present(&mut self, frame: String) -> Result<()> {
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Discards every frame. Used for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    type Frame = ();

    fn capture(&self, _board: &Board) {}

    fn present(&mut self, _frame: ()) -> Result<()> {
        Ok(())
    }
}
