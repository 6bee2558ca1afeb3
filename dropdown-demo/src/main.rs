//! Dropdown Demo
//!
//! Two dropdowns in a terminal:
//! - Fruit: single selection
//! - Toppings: multiple selection with removable badges
//!
//! Tab switches focus, Enter/Space open and commit, Up/Down navigate,
//! Escape closes, the mouse works too. Ctrl+C or `q` quits.

mod hit;
mod projection;
mod terminal;

use std::fs::File;
use std::io;
use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use crossterm::{cursor::MoveTo, queue, style::Print};
use dropdown::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use hit::{HitMap, Rect};
use projection::TermProjection;
use terminal::Terminal;

/// A dropdown plus the value its caller owns.
struct Field {
    label: &'static str,
    widget: Dropdown,
    options: Vec<OptionRef>,
    value: SelectionValue,
    area: Rect,
}

impl Field {
    fn handle(&mut self, event: &Event) -> EventResult {
        let mut proposed = None;
        let result = self.widget.handle_event(
            event,
            Props::new(&self.options, &self.value),
            |v| proposed = Some(v),
        );
        if let Some(next) = proposed {
            log::info!("{} -> {:?}", self.label, next.labels());
            self.value = next;
        }
        result
    }

    fn container_id(&self) -> &str {
        self.widget.id().as_str()
    }

    fn owns(&self, element_id: &str) -> bool {
        self.widget.id().resolve(element_id).is_ok()
    }
}

struct Demo {
    fields: Vec<Field>,
    focused: Option<usize>,
    hits: HitMap,
}

impl Demo {
    fn new() -> Self {
        let fruit = Field {
            label: "Fruit",
            widget: Dropdown::new(DropdownConfig::new("fruit").placeholder("Choose a fruit")),
            options: options([
                ("Apple", "apple"),
                ("Banana", "banana"),
                ("Cherry", "cherry"),
                ("Date", "date"),
                ("Elderberry", "elderberry"),
            ]),
            value: SelectionValue::Single(None),
            area: Rect::new(2, 3, 28, 1),
        };
        let toppings = Field {
            label: "Toppings",
            widget: Dropdown::new(
                DropdownConfig::new("toppings")
                    .placeholder("Add toppings")
                    .equality(Equality::Value),
            ),
            options: options([
                ("Cream", 1),
                ("Honey", 2),
                ("Nuts", 3),
                ("Granola", 4),
            ]),
            value: SelectionValue::empty_multiple(),
            area: Rect::new(36, 3, 40, 1),
        };

        Self {
            fields: vec![fruit, toppings],
            focused: Some(0),
            hits: HitMap::new(),
        }
    }

    /// Move focus, emitting Blur to the field that loses it.
    fn set_focus(&mut self, next: Option<usize>) -> Vec<Event> {
        if self.focused == next {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(old) = self.focused {
            events.push(Event::blur(self.fields[old].container_id()));
        }
        if let Some(new) = next {
            events.push(Event::Focus {
                target: self.fields[new].container_id().to_string(),
            });
        }
        log::debug!("[focus] {:?} -> {:?}", self.focused, next);
        self.focused = next;
        events
    }

    fn focused_target(&self) -> Option<String> {
        self.focused.map(|i| self.fields[i].container_id().to_string())
    }

    fn owner_of(&self, element_id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.owns(element_id))
    }

    /// Translate a raw terminal event. Returns `None` to quit.
    fn translate(&mut self, raw: &CrosstermEvent) -> Option<Vec<Event>> {
        let mut events = Vec::new();
        match raw {
            CrosstermEvent::Key(key_event) => {
                // Only process key press events (not release/repeat on some terminals)
                if key_event.kind != KeyEventKind::Press {
                    return Some(events);
                }
                let quit = key_event.code == KeyCode::Char('q')
                    || (key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL));
                if quit {
                    return None;
                }
                if matches!(key_event.code, KeyCode::Tab | KeyCode::BackTab) {
                    let next = match self.focused {
                        Some(i) => (i + 1) % self.fields.len(),
                        None => 0,
                    };
                    return Some(self.set_focus(Some(next)));
                }
                events.push(Event::Key {
                    target: self.focused_target(),
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                });
            }
            CrosstermEvent::Mouse(mouse_event) => {
                let (x, y) = (mouse_event.column, mouse_event.row);
                let target = self.hits.hit_test(x, y);
                match mouse_event.kind {
                    MouseEventKind::Down(button) => {
                        // Clicking inside a dropdown focuses its container
                        let owner = target.as_deref().and_then(|id| self.owner_of(id));
                        events.extend(self.set_focus(owner));
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::Moved => events.push(Event::Hover { target, x, y }),
                    _ => {}
                }
            }
            _ => {}
        }
        Some(events)
    }

    fn dispatch(&mut self, event: &Event) {
        for field in &mut self.fields {
            if field.handle(event).is_handled() {
                log::trace!("{} consumed {:?}", field.label, event);
            }
        }
    }

    fn draw(&mut self, term: &mut Terminal) -> io::Result<()> {
        term.clear()?;
        self.hits.clear();

        let out = term.out();
        queue!(
            out,
            MoveTo(2, 1),
            Print("Tab: switch  Enter/Space: open/commit  Up/Down: move  Esc: close  q: quit")
        )?;

        for (i, field) in self.fields.iter().enumerate() {
            queue!(out, MoveTo(field.area.x, field.area.y - 1), Print(field.label))?;
            let mut projection =
                TermProjection::new(&mut *out, &mut self.hits, field.area, self.focused == Some(i));
            field
                .widget
                .render(Props::new(&field.options, &field.value), &mut projection)?;
        }

        for (i, field) in self.fields.iter().enumerate() {
            let labels = field.value.labels();
            let shown = if labels.is_empty() {
                "(none)".to_string()
            } else {
                labels.join(", ")
            };
            queue!(
                out,
                MoveTo(2, 12 + i as u16),
                Print(format!("{}: {}", field.label, shown))
            )?;
        }

        term.flush()
    }
}

fn run() -> io::Result<()> {
    let mut term = Terminal::new()?;
    let mut demo = Demo::new();
    demo.draw(&mut term)?;

    loop {
        for raw in term.poll(Duration::from_millis(250))? {
            let Some(events) = demo.translate(&raw) else {
                log::info!("quit");
                return Ok(());
            };
            for event in &events {
                demo.dispatch(event);
            }
        }
        demo.draw(&mut term)?;
    }
}

fn main() {
    match File::create("dropdown-demo.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file: {}", e),
    }

    if let Err(e) = run() {
        log::error!("demo failed: {}", e);
        eprintln!("Error: {}", e);
    }
}
