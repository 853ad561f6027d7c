use anyhow::{ensure, Result};
use pancurses::{curs_set, endwin, initscr, newwin, noecho, Window, ERR};

use super::Renderer;

/// Full-screen curses sink. The board window sits at the top-left corner.
pub struct CursesRender {
    _stdscr: Window,
    win: Window,
    rows: usize,
}

/// Checks an `mvaddstr` status. Filling the bottom-right cell makes curses
/// report ERR after the text is written, so the last row may fail.
fn check_row_status(status: i32, row: usize, rows: usize) -> Result<()> {
    ensure!(
        status != ERR || row + 1 == rows,
        "failed to draw row {} of {}",
        row,
        rows
    );
    Ok(())
}

impl CursesRender {
    /// Takes over the terminal. Pair with [`CursesRender::close`].
    pub fn open(columns: usize, rows: usize) -> Result<Self> {
        let screen = initscr();
        // Hand the terminal back if anything below fails.
        let screen = scopeguard::guard(screen, |_| {
            endwin();
        });
        noecho();
        curs_set(0);
        let (max_rows, max_cols) = screen.get_max_yx();
        log::debug!(
            "terminal is {}x{}, board is {}x{}",
            max_cols,
            max_rows,
            columns,
            rows
        );
        ensure!(
            columns <= max_cols as usize && rows <= max_rows as usize,
            "board {}x{} does not fit a {}x{} terminal",
            columns,
            rows,
            max_cols,
            max_rows
        );
        let win = newwin(rows as i32, columns as i32, 0, 0);
        Ok(Self {
            _stdscr: scopeguard::ScopeGuard::into_inner(screen),
            win,
            rows,
        })
    }

    pub fn close(self) {
        let Self { _stdscr, win, .. } = self;
        drop(win);
        drop(_stdscr);
        endwin();
    }
}

impl Renderer for CursesRender {
    fn begin_frame(&mut self) -> Result<()> {
        ensure!(self.win.erase() != ERR, "failed to erase board window");
        Ok(())
    }

    fn draw_row(&mut self, row: usize, text: &str) -> Result<()> {
        let status = self.win.mvaddstr(row as i32, 0, text);
        check_row_status(status, row, self.rows)
    }

    fn reset_cursor(&mut self) -> Result<()> {
        ensure!(self.win.mv(0, 0) != ERR, "failed to move cursor home");
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        ensure!(self.win.refresh() != ERR, "failed to refresh board window");
        Ok(())
    }
}
