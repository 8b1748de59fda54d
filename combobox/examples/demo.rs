//! Select control demo
//!
//! One single-mode and one multi-mode select over the same five options:
//! - Tab moves focus between the two controls
//! - Enter/Space opens the dropdown and commits the highlighted option
//! - Up/Down/Home/End move the highlight, Escape closes
//! - Mouse: click the trigger to toggle, a row to select, the ✕ glyphs to
//!   clear or remove a badge; clicking elsewhere blurs (and closes)
//! - q quits

use std::fs::File;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::LevelFilter;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use simplelog::{Config, WriteLogger};

use combobox::prelude::*;

const SINGLE_AREA: Rect = Rect {
    x: 2,
    y: 3,
    width: 40,
    height: 1,
};
const MULTI_AREA: Rect = Rect {
    x: 2,
    y: 11,
    width: 40,
    height: 1,
};

struct Host {
    single: Select,
    multi: Select,
    focused: usize,
}

impl Host {
    fn new() -> Self {
        let options: Vec<OptionRef> = vec![
            SelectOption::shared(1, "first"),
            SelectOption::shared(2, "Second"),
            SelectOption::shared(3, "Third"),
            SelectOption::shared(4, "Fourth"),
            SelectOption::shared(5, "Fifth"),
        ];

        let single = Select::with_placeholder(Mode::Single, "Choose one");
        let multi = Select::with_placeholder(Mode::Multi, "Choose many");
        // Both controls share the same option handles; identity comparisons
        // depend on that.
        single.set_options(options.clone());
        multi.set_options(options);

        Self {
            single,
            multi,
            focused: 0,
        }
    }

    fn focused_select(&self) -> &Select {
        if self.focused == 0 {
            &self.single
        } else {
            &self.multi
        }
    }

    /// Apply a computed change back into the control that produced it.
    /// The host owns the persisted selection; here it simply round-trips.
    fn apply(select: &Select, events: SelectEvents) {
        if let Some(change) = events.change {
            select
                .set_selection(change.selection)
                .expect("selection mode matches control");
        }
    }

    fn cycle_focus(&mut self) {
        self.focused_select().on_blur();
        self.focused = (self.focused + 1) % 2;
    }

    fn blur_all(&mut self) {
        self.single.on_blur();
        self.multi.on_blur();
    }

    fn summary(&self, select: &Select) -> String {
        let labels: Vec<String> = select
            .selection()
            .selected()
            .iter()
            .map(|o| o.label.clone())
            .collect();
        if labels.is_empty() {
            "(none)".to_string()
        } else {
            labels.join(", ")
        }
    }
}

fn main() -> io::Result<()> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("combobox-demo.log")?,
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut host = Host::new();
    let result = run(&mut terminal, &mut host);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    host: &mut Host,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let dim = Style::default().fg(Color::DarkGray);
            frame.render_widget(
                Paragraph::new("Select demo - Tab to switch, q to quit").style(dim),
                Rect::new(2, 1, 50, 1),
            );
            frame.render_widget(
                Paragraph::new(format!("Single: {}", host.summary(&host.single))).style(dim),
                Rect::new(2, 9, 60, 1),
            );
            frame.render_widget(
                Paragraph::new(format!("Multi:  {}", host.summary(&host.multi))).style(dim),
                Rect::new(2, 19, 60, 1),
            );

            host.single.render(frame, SINGLE_AREA, host.focused == 0);
            host.multi.render(frame, MULTI_AREA, host.focused == 1);
            host.single.clear_dirty();
            host.multi.clear_dirty();
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let combo: KeyCombo = key.into();
                let select = host.focused_select().clone();
                let (result, events) = select.handle_key(&combo);
                Host::apply(&select, events);
                if result.is_handled() {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Tab => host.cycle_focus(),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let (x, y) = (mouse.column, mouse.row);
                    let (result, events) = host.single.handle_click(x, y);
                    if result.is_handled() {
                        Host::apply(&host.single, events);
                        if host.focused != 0 {
                            host.multi.on_blur();
                        }
                        host.focused = 0;
                        continue;
                    }
                    let (result, events) = host.multi.handle_click(x, y);
                    if result.is_handled() {
                        Host::apply(&host.multi, events);
                        if host.focused != 1 {
                            host.single.on_blur();
                        }
                        host.focused = 1;
                        continue;
                    }
                    // Click landed outside both controls.
                    host.blur_all();
                }
                MouseEventKind::Moved => {
                    host.single.handle_hover(mouse.column, mouse.row);
                    host.multi.handle_hover(mouse.column, mouse.row);
                }
                _ => {}
            },
            _ => {}
        }
    }
}
