use std::io::{self, Stdout, Write};
use std::panic;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse reporting. Raw mode is switched back
/// off if the rest of the setup fails.
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    match enter_screen(io::stdout()) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = leave_screen(&mut io::stdout());
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed, so a
/// panic inside the picker does not leave the shell in raw mode.
pub fn install_panic_hook() {
    let original = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
        original(info);
    }));
}

fn enter_screen(mut stdout: Stdout) -> io::Result<Tui> {
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_screen_exits_alternate_screen() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "wrote {:?}", written);
    }
}
