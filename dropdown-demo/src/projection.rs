//! Terminal rendering of a dropdown view.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
};
use dropdown::render::{DropdownView, RenderProjection};
use dropdown::selection::SelectionMode;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::hit::{HitMap, Rect};

/// Draws one dropdown at a fixed spot and records its hit regions.
pub struct TermProjection<'a, W: Write> {
    out: &'a mut W,
    hits: &'a mut HitMap,
    area: Rect,
    focused: bool,
}

impl<'a, W: Write> TermProjection<'a, W> {
    pub fn new(out: &'a mut W, hits: &'a mut HitMap, area: Rect, focused: bool) -> Self {
        Self {
            out,
            hits,
            area,
            focused,
        }
    }

    fn print_at(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y), Print(text))
    }

    /// Trigger line: value or badges, clear button, caret.
    fn render_trigger(&mut self, view: &DropdownView<'_>) -> io::Result<()> {
        let Rect { x, y, width, .. } = self.area;
        // Reserve " × ▼" on the right
        let inner = width.saturating_sub(4);

        self.hits.insert(Rect::new(x, y, width, 1), view.id.as_str());
        if self.focused {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        self.print_at(x, y, &" ".repeat(width as usize))?;

        match view.mode {
            SelectionMode::Multiple if !view.badges.is_empty() => {
                let mut col = x;
                for badge in &view.badges {
                    let text = format!("[{} ×]", badge.label);
                    let w = text.width() as u16;
                    if col + w > x + inner {
                        self.print_at(col, y, "…")?;
                        break;
                    }
                    self.hits.insert(Rect::new(col, y, w, 1), badge.id.as_str());
                    queue!(self.out, SetForegroundColor(Color::Cyan))?;
                    self.print_at(col, y, &text)?;
                    queue!(self.out, SetForegroundColor(Color::Reset))?;
                    col += w + 1;
                }
            }
            _ => {
                let text = view.display_text();
                let is_placeholder = view.label.is_none();
                if is_placeholder {
                    queue!(self.out, SetAttribute(Attribute::Dim))?;
                }
                self.print_at(x, y, &fit(&text, inner as usize))?;
                if is_placeholder {
                    queue!(self.out, SetAttribute(Attribute::NormalIntensity))?;
                    if self.focused {
                        queue!(self.out, SetAttribute(Attribute::Bold))?;
                    }
                }
            }
        }

        let clear_x = x + inner + 1;
        self.hits.insert(Rect::new(clear_x, y, 1, 1), view.clear_id.as_str());
        self.print_at(clear_x, y, "×")?;
        self.print_at(x + width.saturating_sub(1), y, if view.is_open { "▲" } else { "▼" })?;
        queue!(self.out, SetAttribute(Attribute::Reset))
    }

    fn render_options(&mut self, view: &DropdownView<'_>) -> io::Result<()> {
        let Rect { x, y, width, .. } = self.area;

        for (i, option) in view.options.iter().enumerate() {
            let row = y + 1 + i as u16;
            self.hits.insert(Rect::new(x, row, width, 1), option.id.as_str());

            let marker = if option.is_selected { "✓ " } else { "  " };
            let text = fit(&format!("{}{}", marker, option.label), width as usize);
            if option.is_highlighted {
                queue!(self.out, SetAttribute(Attribute::Reverse))?;
            }
            if option.is_selected {
                queue!(self.out, SetForegroundColor(Color::Magenta))?;
            }
            self.print_at(x, row, &text)?;
            queue!(self.out, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

impl<W: Write> RenderProjection for TermProjection<'_, W> {
    type Error = io::Error;

    fn render(&mut self, view: &DropdownView<'_>) -> io::Result<()> {
        self.render_trigger(view)?;
        if view.is_open {
            self.render_options(view)?;
        }
        Ok(())
    }
}

/// Pad or truncate `text` to exactly `width` columns.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{}{}", text, " ".repeat(width - text.width()));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
