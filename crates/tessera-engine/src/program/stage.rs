use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::input::Event;
use crate::time::{FrameClock, FrameTime};

use super::{Program, ProgramError, Screen, ScreenSpec};

type ScreenCallback = Box<dyn FnMut(&Screen)>;

static NEXT_ATTACHMENT: AtomicU64 = AtomicU64::new(1);

/// Token proving that a host registered for input on a particular stage.
///
/// Not `Clone`: detaching consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct InputAttachment {
    id: u64,
}

/// Hosts a [`Program`]: owns its screen, steps it and tracks when it needs
/// to be displayed.
pub struct Stage<P: Program> {
    program: P,
    screen: Screen,
    clock: FrameClock,
    frame_number: u64,
    needs_display: bool,
    average_elapsed: Option<f64>,
    did_display: Option<ScreenCallback>,
    on_screen_changed: Option<ScreenCallback>,
    input: Option<u64>,
}

impl<P: Program> Stage<P> {
    /// Builds the screen, then runs `program.setup`.
    pub fn new(mut program: P, spec: ScreenSpec) -> Result<Self, ProgramError> {
        let mut screen = Screen::new(spec)?;
        program.setup(&mut screen);
        Ok(Self {
            program,
            screen,
            clock: FrameClock::new(),
            frame_number: 0,
            needs_display: true,
            average_elapsed: None,
            did_display: None,
            on_screen_changed: None,
            input: None,
        })
    }

    #[inline]
    pub fn program(&self) -> &P {
        &self.program
    }

    #[inline]
    pub fn program_mut(&mut self) -> &mut P {
        &mut self.program
    }

    #[inline]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[inline]
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Number of completed ticks.
    #[inline]
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    #[inline]
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Running average of tick deltas in seconds; `None` before the first tick.
    #[inline]
    pub fn average_elapsed(&self) -> Option<f64> {
        self.average_elapsed
    }

    /// Called after every display with the freshly drawn screen.
    pub fn set_did_display(&mut self, callback: impl FnMut(&Screen) + 'static) {
        self.did_display = Some(Box::new(callback));
    }

    /// Called whenever [`Stage::set_screen_spec`] rebuilds the layers.
    pub fn set_on_screen_changed(&mut self, callback: impl FnMut(&Screen) + 'static) {
        self.on_screen_changed = Some(Box::new(callback));
    }

    /// Replaces every layer. On error the current screen is kept.
    pub fn set_screen_spec(&mut self, spec: ScreenSpec) -> Result<(), ProgramError> {
        self.screen = Screen::new(spec)?;
        self.needs_display = true;
        if let Some(callback) = self.on_screen_changed.as_mut() {
            callback(&self.screen);
        }
        Ok(())
    }

    /// Steps the program with the wall clock.
    pub fn tick(&mut self) {
        let time = self.clock.tick();
        self.tick_with(time);
    }

    /// Steps the program with a caller-supplied time.
    pub fn tick_with(&mut self, time: FrameTime) {
        self.frame_number += 1;
        self.average_elapsed = Some(match self.average_elapsed {
            Some(average) => (time.dt + average) / 2.0,
            None => time.dt,
        });
        log::trace!("stage: frame {} dt={:.4}s", self.frame_number, time.dt);
        self.program.update(&time);
        self.needs_display = true;
    }

    /// Clears every layer, draws the program and signals did-display.
    pub fn display(&mut self) {
        self.screen.clear_all();
        self.program.draw(&mut self.screen);
        if let Some(callback) = self.did_display.as_mut() {
            callback(&self.screen);
        }
    }

    /// Displays only when a tick or screen change happened since the last
    /// display. Returns whether it displayed.
    pub fn display_if_needed(&mut self) -> bool {
        if !self.needs_display {
            return false;
        }
        self.display();
        self.needs_display = false;
        true
    }

    /// Runs `frames` ticks, displaying after each.
    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.tick();
            self.display_if_needed();
        }
    }

    /// Registers the caller as the stage's input source. Only one
    /// attachment may exist at a time.
    pub fn attach_input(&mut self) -> Result<InputAttachment, ProgramError> {
        if self.input.is_some() {
            log::warn!("stage: rejected second input attachment");
            return Err(ProgramError::InputAlreadyAttached);
        }
        let id = NEXT_ATTACHMENT.fetch_add(1, Ordering::Relaxed);
        self.input = Some(id);
        Ok(InputAttachment { id })
    }

    /// Delivers `event` to the program. Events carrying a token from another
    /// stage are dropped.
    pub fn dispatch(&mut self, attachment: &InputAttachment, event: Event) {
        if self.input != Some(attachment.id) {
            log::warn!("stage: dropped {event:?} from a foreign input attachment");
            return;
        }
        self.program.handle_event(&event);
    }

    pub fn detach_input(&mut self, attachment: InputAttachment) {
        if self.input == Some(attachment.id) {
            self.input = None;
        }
    }

    #[inline]
    pub fn is_input_attached(&self) -> bool {
        self.input.is_some()
    }

    pub fn into_program(self) -> P {
        self.program
    }
}

impl<P: Program + fmt::Debug> fmt::Debug for Stage<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("program", &self.program)
            .field("screen", &self.screen)
            .field("frame_number", &self.frame_number)
            .field("needs_display", &self.needs_display)
            .field("average_elapsed", &self.average_elapsed)
            .field("input_attached", &self.input.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::{Direction, IntPoint, IntSize};
    use crate::paint::Color;
    use crate::program::LayerSpec;

    #[derive(Debug, Default)]
    struct Counter {
        setups: u32,
        updates: u32,
        draws: u32,
        last_dt: f64,
        moves: Vec<Direction>,
    }

    impl Program for Counter {
        fn setup(&mut self, screen: &mut Screen) {
            self.setups += 1;
            screen.canvas().set_clear_color(Some(Color::BLUE));
        }

        fn update(&mut self, time: &FrameTime) {
            self.updates += 1;
            self.last_dt = time.dt;
        }

        fn draw(&mut self, screen: &mut Screen) {
            self.draws += 1;
            screen.canvas().set_point(IntPoint::ZERO, Color::RED);
        }

        fn moved(&mut self, direction: Direction) {
            self.moves.push(direction);
        }
    }

    fn small_spec() -> ScreenSpec {
        ScreenSpec::default().with_canvas_size(IntSize::new(4, 4))
    }

    #[test]
    fn new_runs_setup_once() {
        let stage = Stage::new(Counter::default(), small_spec()).unwrap();
        assert_eq!(stage.program().setups, 1);
        assert_eq!(stage.frame_number(), 0);
        assert!(stage.needs_display());
        assert_eq!(stage.average_elapsed(), None);
    }

    #[test]
    fn invalid_spec_fails() {
        let err = Stage::new(Counter::default(), ScreenSpec::new(3, vec![LayerSpec::default()])).unwrap_err();
        assert_eq!(err, ProgramError::InvalidMainLayer { main_layer: 3, layer_count: 1 });
    }

    #[test]
    fn tick_updates_and_averages() {
        let mut stage = Stage::new(Counter::default(), small_spec()).unwrap();
        stage.tick_with(FrameTime::fixed(0.5, 0));
        assert_eq!(stage.average_elapsed(), Some(0.5));
        stage.tick_with(FrameTime::fixed(0.25, 1));
        assert_eq!(stage.average_elapsed(), Some(0.375));
        assert_eq!(stage.frame_number(), 2);
        assert_eq!(stage.program().updates, 2);
        assert_eq!(stage.program().last_dt, 0.25);
    }

    #[test]
    fn display_clears_then_draws() {
        let mut stage = Stage::new(Counter::default(), small_spec()).unwrap();
        stage.screen_mut().canvas().set_point(IntPoint::new(1, 1), Color::GREEN);
        stage.display();
        let canvas = &stage.screen().layers()[1];
        assert_eq!(canvas.color_at(IntPoint::ZERO), Color::RED);
        assert_eq!(canvas.color_at(IntPoint::new(1, 1)), Color::BLUE);
    }

    #[test]
    fn display_if_needed_tracks_ticks() {
        let mut stage = Stage::new(Counter::default(), small_spec()).unwrap();
        assert!(stage.display_if_needed());
        assert!(!stage.display_if_needed());
        stage.tick_with(FrameTime::fixed(0.1, 0));
        assert!(stage.display_if_needed());
        assert_eq!(stage.program().draws, 2);
    }

    #[test]
    fn run_frames_ticks_and_displays() {
        let displays = Rc::new(Cell::new(0));
        let mut stage = Stage::new(Counter::default(), small_spec()).unwrap();
        let seen = Rc::clone(&displays);
        stage.set_did_display(move |screen| {
            assert_eq!(screen.layers().len(), 2);
            seen.set(seen.get() + 1);
        });
        stage.run_frames(3);
        assert_eq!(stage.frame_number(), 3);
        assert_eq!(stage.program().draws, 3);
        assert_eq!(displays.get(), 3);
    }

    #[test]
    fn set_screen_spec_rebuilds_layers() {
        let changes = Rc::new(Cell::new(0));
        let mut stage = Stage::new(Counter::default(), small_spec()).unwrap();
        let seen = Rc::clone(&changes);
        stage.set_on_screen_changed(move |screen| {
            assert_eq!(screen.layers().len(), 3);
            seen.set(seen.get() + 1);
        });
        stage.display_if_needed();

        let spec = ScreenSpec::new(2, vec![LayerSpec::default(); 3]).with_canvas_size(IntSize::new(8, 2));
        stage.set_screen_spec(spec).unwrap();
        assert_eq!(changes.get(), 1);
        assert_eq!(stage.screen().canvas_size(), IntSize::new(8, 2));
        assert!(stage.needs_display());

        assert!(stage.set_screen_spec(ScreenSpec::new(0, Vec::new())).is_err());
        assert_eq!(stage.screen().layers().len(), 3);
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn input_attaches_once() {
        let mut stage = Stage::new(Counter::default(), small_spec()).unwrap();
        let attachment = stage.attach_input().unwrap();
        assert!(stage.is_input_attached());
        assert_eq!(stage.attach_input().unwrap_err(), ProgramError::InputAlreadyAttached);

        stage.dispatch(&attachment, Event::Move(Direction::Up));
        assert_eq!(stage.program().moves, vec![Direction::Up]);

        stage.detach_input(attachment);
        assert!(!stage.is_input_attached());
        assert!(stage.attach_input().is_ok());
    }

    #[test]
    fn foreign_attachment_is_ignored() {
        let mut first = Stage::new(Counter::default(), small_spec()).unwrap();
        let mut second = Stage::new(Counter::default(), small_spec()).unwrap();
        let _mine = first.attach_input().unwrap();
        let theirs = second.attach_input().unwrap();
        first.dispatch(&theirs, Event::Move(Direction::Left));
        assert!(first.program().moves.is_empty());

        first.detach_input(theirs);
        assert!(first.is_input_attached());
    }
}
