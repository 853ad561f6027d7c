use anyhow::{ensure, Result};

use super::Renderer;

/// Keeps every presented frame in memory.
#[derive(Debug, Default)]
pub struct RecordRender {
    pub frames: Vec<Vec<String>>,
    pending: Vec<String>,
    cursor_reset: bool,
}

impl Renderer for RecordRender {
    fn begin_frame(&mut self) -> Result<()> {
        self.pending.clear();
        self.cursor_reset = false;
        Ok(())
    }

    fn draw_row(&mut self, row: usize, text: &str) -> Result<()> {
        ensure!(row == self.pending.len(), "row {} drawn out of order", row);
        self.pending.push(text.to_owned());
        Ok(())
    }

    fn reset_cursor(&mut self) -> Result<()> {
        self.cursor_reset = true;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        ensure!(self.cursor_reset, "frame presented without a cursor reset");
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}
