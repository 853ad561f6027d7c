use anyhow::Result;

use crate::frame::Frame;

pub mod curses;
#[cfg(test)]
pub mod record;

/// A display that takes whole frames, row by row.
pub trait Renderer {
    /// Blanks the drawing surface ahead of a new frame.
    fn begin_frame(&mut self) -> Result<()>;
    fn draw_row(&mut self, row: usize, text: &str) -> Result<()>;
    /// Moves the paint position back to the origin.
    fn reset_cursor(&mut self) -> Result<()>;
    fn present(&mut self) -> Result<()>;

    fn render_frame(&mut self, frame: &Frame) -> Result<()> {
        self.begin_frame()?;
        for (row, text) in frame.rows().iter().enumerate() {
            self.draw_row(row, text)?;
        }
        self.reset_cursor()?;
        self.present()
    }
}
