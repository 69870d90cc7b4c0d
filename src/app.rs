//! App struct: configuration, event loop, rendering.
//!
//! [`App`] ties together the compositor, the input adapter, a canvas and the
//! terminal driver. The `new_headless` constructor allows testing without a
//! real terminal, and [`App::run`] accepts any stream of crossterm events so
//! tests can feed it a synthetic one.

use std::io;

use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};

use crate::color::{Color, RandomColors};
use crate::compositor::{Compositor, RenderStyle};
use crate::event::{InputAdapter, InputEvent, SplitBindings};
use crate::frame::FrameTree;
use crate::geometry::Size;
use crate::layout::{AbsolutePolicy, HandlePlacement, LayoutEngine};
use crate::render::{Canvas, Driver};
use crate::split::Splitter;

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Terminal window title.
    pub title: Option<String>,
    pub placement: HandlePlacement,
    pub absolute_policy: AbsolutePolicy,
    /// Seed for new frame colors. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub style: RenderStyle,
    pub bindings: SplitBindings,
    /// Start from a single root frame instead of the demo layout.
    pub blank: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: Some("touchtile".to_string()),
            placement: HandlePlacement::default(),
            absolute_policy: AbsolutePolicy::default(),
            seed: None,
            style: RenderStyle::default(),
            bindings: SplitBindings::default(),
            blank: false,
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_placement(mut self, placement: HandlePlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_absolute_policy(mut self, policy: AbsolutePolicy) -> Self {
        self.absolute_policy = policy;
        self
    }

    /// Make new frame colors reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_handle_diameter(mut self, diameter: i32) -> Self {
        self.style.handle_diameter = diameter;
        self
    }

    pub fn with_handle_color(mut self, color: Color) -> Self {
        self.style.handle_color = color;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.style.clear_color = color;
        self
    }

    pub fn with_bindings(mut self, bindings: SplitBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Start from a single root frame (builder).
    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    /// Build a compositor for a window of `size`.
    pub fn build_compositor(&self, size: Size) -> Compositor {
        let colors = match self.seed {
            Some(seed) => RandomColors::seeded(seed),
            None => RandomColors::new(),
        };
        let splitter = Splitter::new(LayoutEngine::new(self.absolute_policy), colors);
        let tree = if self.blank {
            FrameTree::new(size)
        } else {
            Compositor::demo_tree(size)
        };
        Compositor::new(tree, splitter)
            .with_placement(self.placement)
            .with_bindings(self.bindings.clone())
            .with_style(self.style)
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application struct.
///
/// The driver is optional to support headless testing.
pub struct App {
    adapter: InputAdapter<Compositor>,
    canvas: Canvas,
    /// The last canvas sent to the terminal, for differential updates.
    previous: Option<Canvas>,
    driver: Option<Driver>,
    config: AppConfig,
}

impl App {
    /// Create a new app with a real terminal driver.
    ///
    /// Queries the terminal size to set the initial root size.
    pub fn new(config: AppConfig) -> io::Result<Self> {
        let (width, height) = Driver::terminal_size()?;
        let driver = Driver::new()?;
        let mut app = Self::new_headless(width, height, config);
        app.driver = Some(driver);
        Ok(app)
    }

    /// Create a headless app for testing (no terminal driver).
    pub fn new_headless(width: u16, height: u16, config: AppConfig) -> Self {
        let size = Size::new(i32::from(width), i32::from(height));
        Self {
            adapter: InputAdapter::new(config.build_compositor(size)),
            canvas: Canvas::new(width, height),
            previous: None,
            driver: None,
            config,
        }
    }

    pub fn compositor(&self) -> &Compositor {
        self.adapter.listener()
    }

    /// The most recently painted canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Route one input event. Returns `true` when a repaint is needed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if let InputEvent::Resize { width, height } = event {
            self.canvas.resize(width, height);
            self.previous = None;
        }
        self.adapter.dispatch(event)
    }

    /// Paint the compositor and, if a driver is attached, flush to the terminal.
    ///
    /// After the first frame only changed cells are written.
    pub fn render(&mut self) -> io::Result<()> {
        self.adapter.listener().paint(&mut self.canvas);

        if let Some(driver) = self.driver.as_mut() {
            match &self.previous {
                Some(previous) => driver.apply_updates(&self.canvas.diff(previous))?,
                None => driver.draw(&self.canvas)?,
            }
            driver.flush()?;
            self.previous = Some(self.canvas.clone());
        }
        Ok(())
    }

    /// Paint once, then handle events until the stream ends or a quit event
    /// arrives.
    pub async fn run<S>(&mut self, mut events: S) -> io::Result<()>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        self.render()?;
        while self.adapter.is_running() {
            let Some(event) = events.next().await else { break };
            let Some(input) = InputEvent::from_crossterm(event?) else { continue };
            if self.handle_input(input) {
                self.render()?;
            }
        }
        log::debug!("event loop finished after {} frames", self.canvas.presented());
        Ok(())
    }

    /// Take over the terminal, run on crossterm's event stream, then restore
    /// the terminal even if entering it or the loop failed.
    pub async fn run_terminal(&mut self) -> io::Result<()> {
        let entered = match self.driver.as_mut() {
            Some(driver) => driver.enter(self.config.title.as_deref()),
            None => Ok(()),
        };
        let result = match entered {
            Ok(()) => self.run(EventStream::new()).await,
            Err(e) => Err(e),
        };
        let left = match self.driver.as_mut() {
            Some(driver) => driver.leave(),
            None => Ok(()),
        };
        first_error(result, left)
    }

    /// Whether the app should quit.
    pub fn should_quit(&self) -> bool {
        !self.adapter.is_running()
    }

    /// Request the app to quit.
    pub fn request_quit(&mut self) {
        self.adapter.request_quit();
    }

    /// Whether the app has a terminal driver (not headless).
    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }
}

/// The session's own error wins over a failure to restore the terminal.
fn first_error(result: io::Result<()>, restore: io::Result<()>) -> io::Result<()> {
    if let Err(e) = &restore {
        log::error!("failed to restore the terminal: {e}");
    }
    result.and(restore)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{PointerButton, PointerEvent};
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    fn headless_app() -> App {
        App::new_headless(80, 24, AppConfig::new().with_seed(7).with_handle_diameter(1))
    }

    fn click(column: u16, row: u16, button: MouseButton) -> io::Result<Event> {
        Ok(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(button),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn headless_app_no_driver() {
        let app = headless_app();
        assert!(!app.has_driver());
        assert!(!app.should_quit());
    }

    #[test]
    fn headless_app_sizes_root_and_canvas() {
        let app = App::new_headless(120, 40, AppConfig::default());
        let tree = app.compositor().tree();
        assert_eq!(tree.region(tree.root()).size(), Size::new(120, 40));
        assert_eq!(app.canvas().size(), Size::new(120, 40));
    }

    #[test]
    fn demo_layout_by_default() {
        let app = headless_app();
        assert_eq!(app.compositor().tree().frame_count(), 5);
    }

    #[test]
    fn blank_layout_has_only_the_root() {
        let app = App::new_headless(80, 24, AppConfig::new().blank(true));
        assert_eq!(app.compositor().tree().frame_count(), 1);
    }

    // ── AppConfig builder ────────────────────────────────────────────

    #[test]
    fn config_builder() {
        let config = AppConfig::new()
            .with_title("tiles")
            .with_placement(HandlePlacement::ParentMidline)
            .with_absolute_policy(AbsolutePolicy::Literal)
            .with_seed(3)
            .with_handle_diameter(2)
            .with_handle_color(Color::WHITE)
            .with_clear_color(Color::BLACK);

        assert_eq!(config.title.as_deref(), Some("tiles"));
        assert_eq!(config.placement, HandlePlacement::ParentMidline);
        assert_eq!(config.absolute_policy, AbsolutePolicy::Literal);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.style.handle_diameter, 2);
        assert_eq!(config.style.handle_color, Color::WHITE);
        assert_eq!(config.style.clear_color, Color::BLACK);
    }

    #[test]
    fn config_reaches_the_compositor() {
        let app = App::new_headless(
            80,
            24,
            AppConfig::new().with_placement(HandlePlacement::ParentMidline),
        );
        assert_eq!(app.compositor().placement(), HandlePlacement::ParentMidline);
    }

    #[test]
    fn same_seed_same_colors() {
        let split = |seed| {
            let mut app = App::new_headless(80, 24, AppConfig::new().blank(true).with_seed(seed));
            app.handle_input(InputEvent::Pointer(PointerEvent::down(1, 1, PointerButton::Left)));
            let tree = app.compositor().tree();
            let colors: Vec<Color> = tree
                .leaves()
                .into_iter()
                .map(|id| tree.get(id).unwrap().color)
                .collect();
            colors
        };
        assert_eq!(split(11), split(11));
    }

    // ── handle_input ─────────────────────────────────────────────────

    #[test]
    fn press_splits_and_requests_redraw() {
        let mut app = headless_app();
        let redraw =
            app.handle_input(InputEvent::Pointer(PointerEvent::down(5, 5, PointerButton::Right)));
        assert!(redraw);
        assert_eq!(app.compositor().tree().frame_count(), 7);
    }

    #[test]
    fn miss_does_not_redraw() {
        let mut app = headless_app();
        let press = PointerEvent::down(200, 5, PointerButton::Right);
        let redraw = app.handle_input(InputEvent::Pointer(press));
        assert!(!redraw);
        assert_eq!(app.compositor().tree().frame_count(), 5);
    }

    #[test]
    fn resize_updates_canvas_and_tree() {
        let mut app = headless_app();
        assert!(app.handle_input(InputEvent::Resize { width: 100, height: 30 }));
        assert_eq!(app.canvas().size(), Size::new(100, 30));
        let tree = app.compositor().tree();
        assert_eq!(tree.region(tree.root()).size(), Size::new(100, 30));
    }

    #[test]
    fn request_quit() {
        let mut app = headless_app();
        app.request_quit();
        assert!(app.should_quit());
    }

    // ── render / run ─────────────────────────────────────────────────

    #[test]
    fn render_paints_headless() {
        let mut app = headless_app();
        app.render().unwrap();
        assert_eq!(app.canvas().presented(), 1);
        assert_eq!(app.canvas().get(10, 5), Some(Color::new(0, 128, 0)));
    }

    #[test]
    fn run_processes_events_until_quit() {
        let mut app = headless_app();
        let events = futures::stream::iter(vec![
            click(5, 5, MouseButton::Left),
            click(60, 20, MouseButton::Right),
            key(KeyCode::Esc),
            click(5, 5, MouseButton::Left),
        ]);

        tokio_test::block_on(app.run(events)).unwrap();

        assert!(app.should_quit());
        assert_eq!(app.compositor().tree().frame_count(), 9);
        // Initial paint plus one per split.
        assert_eq!(app.canvas().presented(), 3);
    }

    #[test]
    fn run_stops_when_the_stream_ends() {
        let mut app = headless_app();
        let events = futures::stream::iter(vec![click(5, 5, MouseButton::Middle)]);

        tokio_test::block_on(app.run(events)).unwrap();

        assert!(!app.should_quit());
        assert_eq!(app.canvas().presented(), 2);
    }

    #[test]
    fn run_propagates_stream_errors() {
        let mut app = headless_app();
        let events = futures::stream::iter(vec![Err(io::Error::other("tty gone"))]);

        let err = tokio_test::block_on(app.run(events)).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
    }

    #[test]
    fn loop_error_wins_over_restore_error() {
        let err = first_error(Err(io::Error::other("loop")), Err(io::Error::other("restore")))
            .unwrap_err();
        assert_eq!(err.to_string(), "loop");
    }

    #[test]
    fn restore_error_surfaces_after_clean_loop() {
        let err = first_error(Ok(()), Err(io::Error::other("restore"))).unwrap_err();
        assert_eq!(err.to_string(), "restore");
        assert!(first_error(Ok(()), Ok(())).is_ok());
    }
}
