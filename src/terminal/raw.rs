use std::panic::PanicHookInfo;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

static TERMINAL_INITIALIZED: AtomicBool = AtomicBool::new(false);

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// RAII wrapper for raw mode and alternate screen.
/// Enables raw mode and enters alternate screen on creation.
/// Restores terminal state on drop, and before a panic message is printed.
pub struct RawMode {
    original_hook: Option<Arc<PanicHook>>,
}

impl RawMode {
    /// Enter raw mode and alternate screen
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        crossterm::terminal::enable_raw_mode()?;

        let mut stdout = std::io::stdout();
        if let Err(e) = crossterm::execute!(
            stdout,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
        ) {
            let _ = crossterm::terminal::disable_raw_mode();
            return Err(e.into());
        }

        TERMINAL_INITIALIZED.store(true, Ordering::SeqCst);
        tracing::debug!("terminal entered raw mode");

        // Restore the terminal first so the panic message lands on a sane screen
        let original_hook: Arc<PanicHook> = Arc::new(std::panic::take_hook());
        let chained = Arc::clone(&original_hook);
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            chained(info);
        }));

        Ok(Self {
            original_hook: Some(original_hook),
        })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        restore_terminal();

        // set_hook panics on a panicking thread; the chained hook stays then
        if let Some(hook) = self.original_hook.take()
            && !std::thread::panicking()
        {
            std::panic::set_hook(Box::new(move |info| hook(info)));
        }
    }
}

/// Leave the alternate screen and raw mode. Safe to call more than once.
fn restore_terminal() {
    if TERMINAL_INITIALIZED.swap(false, Ordering::SeqCst) {
        let mut stdout = std::io::stdout();

        // Clear before leaving so terminals without a real alternate screen
        // are not left with editor artifacts
        let _ = crossterm::execute!(
            stdout,
            crossterm::style::ResetColor,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0),
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );

        let _ = crossterm::terminal::disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}
