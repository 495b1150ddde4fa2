//! Interactive option group in the terminal.
//!
//! Tab moves between options, arrows and hjkl change the selection, `?` help
//! opens with Enter, `r` restores the host value, `q` quits. Logs go to
//! `radio.log`.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use log::LevelFilter;

use choicekit::logging::{self, LogConfig};
use choicekit::prelude::*;
use choicekit_dom::{Color, Edges, Size, Style};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&LogConfig::new("radio.log").level(LevelFilter::Debug))?;

    let config = OptionGroupConfig::from_json(
        r#"{
            "label": "Pick a **fruit**",
            "help": "Only one fruit per basket",
            "options": ["Apple", "*Banana*", "~~Durian~~", "[Kiwi](https://example.com)"],
            "captions": ["Crisp", "", "Banned", "Fuzzy"],
            "value": 0,
            "horizontal": false
        }"#,
    )?;

    let mut group = OptionGroup::new("fruit", config)
        .on_change(|index| log::info!("selection changed to {index}"));

    let theme = dark_theme();
    let ctx = ColorContext::new(&theme);
    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();

    loop {
        let root = ui(&group);
        let layout = term.render(&root, &ctx)?.clone();

        for raw in term.poll(Duration::from_millis(250))? {
            if let CrosstermEvent::Key(key) = &raw {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => {
                        group.reset(group.config().initial_value);
                        continue;
                    }
                    _ => {}
                }
            }

            for event in focus.process_event(&raw, &root, &layout) {
                if let Some(target) = group.handle_event(&event).focus_target() {
                    focus.focus(target);
                }
            }
        }
    }
}

fn ui(group: &OptionGroup) -> Element {
    let status = match group.selected() {
        Some(index) => format!("Selected: {}", group.options()[index]),
        None => "Nothing selected".to_string(),
    };

    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .gap(1)
        .style(Style::new().background(Color::var("background")))
        .child(group.view())
        .child(Element::text(status).style(Style::new().dim()))
}
