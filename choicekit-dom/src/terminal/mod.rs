use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Color, ColorContext, TextStyle};

/// Raw-mode alternate-screen terminal with double-buffered diff rendering.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal: entered raw mode at {width}x{height}");

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` for input and drain everything pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    pub fn render(&mut self, root: &Element, color_ctx: &ColorContext) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            self.current_buffer = Buffer::new(width, height);
            // Force a full repaint after resize.
            self.previous_buffer = Buffer::new(0, 0);
        }

        let background = color_ctx.to_rgb(&Color::var("background"));
        self.current_buffer.set_background(background);
        self.current_buffer.reset();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.current_buffer, color_ctx);

        self.flush()?;

        self.previous_buffer = self.current_buffer.clone();
        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush(&mut self) -> io::Result<()> {
        let full_repaint = self.previous_buffer.width() != self.current_buffer.width();
        let mut last: Option<(u16, u16)> = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        let changed: Vec<_> = if full_repaint {
            (0..self.current_buffer.height())
                .flat_map(|y| (0..self.current_buffer.width()).map(move |x| (x, y)))
                .filter_map(|(x, y)| self.current_buffer.cell(x, y).map(|c| (x, y, *c)))
                .collect()
        } else {
            self.current_buffer
                .changes(&self.previous_buffer)
                .map(|(x, y, c)| (x, y, *c))
                .collect()
        };

        for (x, y, cell) in changed {
            if cell.continuation {
                continue;
            }

            if last != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.style != last_style {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(self.stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                if cell.style.strikethrough {
                    queue!(self.stdout, SetAttribute(Attribute::CrossedOut))?;
                }
                last_style = cell.style;
            }

            queue!(
                self.stdout,
                SetForegroundColor(CtColor::Rgb {
                    r: cell.fg.r,
                    g: cell.fg.g,
                    b: cell.fg.b,
                }),
                SetBackgroundColor(CtColor::Rgb {
                    r: cell.bg.r,
                    g: cell.bg.g,
                    b: cell.bg.b,
                })
            )?;
            write!(self.stdout, "{}", cell.symbol)?;

            last = Some((x + char_width(cell.symbol).max(1) as u16, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
