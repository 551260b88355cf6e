//! Terminal frontend: renders the emulated 40×24 text screen and feeds
//! host keystrokes into the keyboard latch.

use anyhow::{Context, Result};
use apple2_emu::system::keys;
use apple2_emu::video::{self, GlyphStyle};
use apple2_emu::AppleSystem;
use clap::Parser;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::fs;
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "apple2-term",
    about = "Run Apple II ROM firmware in a terminal window."
)]
struct Args {
    /// ROM image to load (12 KiB, mapped at $D000-$FFFF).
    #[arg(value_name = "ROM", default_value = "appleII.rom")]
    rom: PathBuf,

    /// Number of instructions to execute between keyboard polls.
    #[arg(long, default_value_t = 100)]
    batch: u32,

    /// Sleep this many milliseconds after each batch (0 = no sleep).
    #[arg(long, default_value_t = 1)]
    tick_ms: u64,

    /// Do not use the alternate screen buffer (useful in tmux capture panes).
    #[arg(long, default_value_t = false)]
    no_alt_screen: bool,
}

struct TerminalGuard {
    use_alt: bool,
}

impl TerminalGuard {
    fn enter(use_alt: bool) -> Result<Self> {
        let mut out = stdout();
        crossterm::terminal::enable_raw_mode()?;
        if use_alt {
            crossterm::execute!(out, EnterAlternateScreen)?;
        }
        crossterm::execute!(out, Hide, Clear(ClearType::All))?;
        out.flush()?;
        Ok(Self { use_alt })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = crossterm::execute!(out, Show);
        if self.use_alt {
            let _ = crossterm::execute!(out, LeaveAlternateScreen);
        }
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

fn render_frame(apple: &AppleSystem, status: &str) -> Result<()> {
    let mut out = stdout();
    crossterm::queue!(out, MoveTo(0, 0))?;

    for row in 0..video::ROWS {
        crossterm::queue!(out, MoveTo(0, row as u16))?;
        let mut style = GlyphStyle::Normal;
        for glyph in video::screen_row(apple, row) {
            if glyph.style != style {
                style = glyph.style;
                let attr = match style {
                    GlyphStyle::Normal => Attribute::Reset,
                    GlyphStyle::Inverse => Attribute::Reverse,
                    GlyphStyle::Flash => Attribute::SlowBlink,
                };
                crossterm::queue!(out, SetAttribute(Attribute::Reset), SetAttribute(attr))?;
            }
            crossterm::queue!(out, Print(glyph.ch))?;
        }
        crossterm::queue!(out, SetAttribute(Attribute::Reset))?;
    }

    crossterm::queue!(
        out,
        MoveTo(0, video::ROWS as u16),
        Clear(ClearType::CurrentLine),
        Print(status)
    )?;
    out.flush()?;
    Ok(())
}

/// Polls pending terminal events; returns false when the user quits.
fn poll_keyboard(apple: &mut AppleSystem) -> Result<bool> {
    while event::poll(Duration::ZERO)? {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match key.code {
            KeyCode::F(7) => apple.reset(),
            KeyCode::F(12) => return Ok(false),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(false);
            }
            KeyCode::Char(ch)
                if key.modifiers.contains(KeyModifiers::CONTROL) && ch.is_ascii_alphabetic() =>
            {
                // Ctrl chords arrive as letters; hand the machine the
                // control byte the raw terminal would have produced.
                apple.set_key(keys::latch_byte(ch.to_ascii_uppercase() as u8 & 0x1F));
            }
            KeyCode::Left => apple.set_key(keys::LEFT_ARROW),
            KeyCode::Right => apple.set_key(keys::RIGHT_ARROW),
            KeyCode::Enter => apple.set_key(keys::RETURN),
            KeyCode::Backspace => apple.set_key(keys::LEFT_ARROW),
            KeyCode::Esc => apple.set_key(keys::ESCAPE),
            KeyCode::Char(ch) if ch.is_ascii() => {
                apple.set_key(keys::latch_byte(ch as u8));
            }
            _ => {}
        }
    }
    Ok(true)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rom = fs::read(&args.rom)
        .with_context(|| format!("failed to read ROM image {}", args.rom.display()))?;
    let mut apple = AppleSystem::new(&rom)?;

    let _guard = TerminalGuard::enter(!args.no_alt_screen)?;
    let status = format!(
        "{}  |  F7 reset  F12 quit",
        args.rom
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    );

    loop {
        apple.step_n(args.batch);

        if args.tick_ms > 0 {
            sleep(Duration::from_millis(args.tick_ms));
        }

        if !poll_keyboard(&mut apple)? {
            break;
        }

        if apple.take_video_dirty() {
            render_frame(&apple, &status)?;
        }
    }

    Ok(())
}
