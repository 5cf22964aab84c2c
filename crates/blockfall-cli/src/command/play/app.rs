use std::time::Duration;

use blockfall_engine::{Command, EngineState, GameEngine};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::{
    settings::Settings,
    tui::{App, RenderMode, Runtime},
    view::widgets::{GameDisplay, KeyBinding, KeyBindingDisplay},
};

const FPS: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Engine(Command),
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        let command = match event.code {
            KeyCode::Left => Command::MoveLeft,
            KeyCode::Right => Command::MoveRight,
            KeyCode::Down => Command::SoftDrop,
            KeyCode::Up => Command::Rotate,
            KeyCode::Char(' ') => Command::HardDrop,
            KeyCode::Char('p' | 'P') => Command::TogglePause,
            KeyCode::Char('s' | 'S') => Command::Start,
            KeyCode::Char('r' | 'R') => Command::Restart,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => return Some(Self::Quit),
            _ => return None,
        };
        Some(Self::Engine(command))
    }

    fn bindings(state: EngineState) -> &'static [KeyBinding<'static>] {
        match state {
            EngineState::Idle => &[(&["s"], "Start"), (&["q"], "Quit")],
            EngineState::Running => &[
                (&["←", "→"], "Move"),
                (&["↓"], "Soft Drop"),
                (&["↑"], "Rotate"),
                (&["Space"], "Hard Drop"),
                (&["p"], "Pause"),
                (&["r"], "Restart"),
                (&["q"], "Quit"),
            ],
            EngineState::Paused => &[(&["p"], "Resume"), (&["r"], "Restart"), (&["q"], "Quit")],
            EngineState::GameOver => &[(&["r", "s"], "New Game"), (&["q"], "Quit")],
        }
    }
}

/// Splits wall-clock time into whole milliseconds for the engine, carrying the remainder.
#[derive(Debug, Default)]
struct TickClock {
    carry: Duration,
}

impl TickClock {
    fn advance(&mut self, elapsed: Duration) -> u64 {
        let total = self.carry + elapsed;
        let millis = u64::try_from(total.as_millis()).unwrap_or(u64::MAX);
        self.carry = total.saturating_sub(Duration::from_millis(millis));
        millis
    }
}

#[derive(Debug)]
pub(crate) struct PlayApp {
    engine: GameEngine,
    clock: TickClock,
    tick_interval: Duration,
    show_ghost: bool,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(engine: GameEngine, settings: &Settings) -> Self {
        Self {
            engine,
            clock: TickClock::default(),
            tick_interval: settings.tick_interval(),
            show_ghost: settings.show_ghost,
            is_exiting: false,
        }
    }

    pub(crate) fn into_engine(self) -> GameEngine {
        self.engine
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.kind != KeyEventKind::Press {
            return;
        }
        match Action::from_key_event(event) {
            Some(Action::Engine(command)) => {
                self.engine.submit(command);
            }
            Some(Action::Quit) => self.is_exiting = true,
            None => {}
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(self.tick_interval));
        runtime.set_render_mode(RenderMode::throttled_from_rate(FPS));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) {
        if let Some(event) = event.as_key_event() {
            self.handle_key(&event);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let game_display = GameDisplay::new(&self.engine, self.show_ghost);
        let help = KeyBindingDisplay::new(Action::bindings(self.engine.state()));

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(22), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(game_display, main_area);
        frame.render_widget(help, help_area);
    }

    fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) {
        let elapsed_ms = self.clock.advance(elapsed);
        self.engine.tick(elapsed_ms);
    }
}
