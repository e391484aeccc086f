use crate::coords::{Direction, Point};
use crate::input::Event;
use crate::time::FrameTime;

use super::Screen;

/// Contract implemented by drawing programs hosted on a [`Stage`](super::Stage).
///
/// The stage calls `setup` once after the screen is built, then `update`
/// once per tick and `draw` whenever a display is needed. Layers are already
/// cleared when `draw` runs.
pub trait Program {
    fn setup(&mut self, screen: &mut Screen);

    fn update(&mut self, time: &FrameTime);

    fn draw(&mut self, screen: &mut Screen);

    /// Touch points are in canvas pixel coordinates.
    fn touch_began(&mut self, point: Point) {
        let _ = point;
    }

    fn touch_moved(&mut self, point: Point) {
        let _ = point;
    }

    fn touch_ended(&mut self, point: Point) {
        let _ = point;
    }

    fn touch_cancelled(&mut self, point: Point) {
        let _ = point;
    }

    fn key_pressed(&mut self, key: &str) {
        let _ = key;
    }

    fn key_released(&mut self, key: &str) {
        let _ = key;
    }

    /// Directional input such as a swipe.
    fn moved(&mut self, direction: Direction) {
        let _ = direction;
    }

    /// Routes `event` to the matching hook.
    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::TouchBegan(p) => self.touch_began(*p),
            Event::TouchMoved(p) => self.touch_moved(*p),
            Event::TouchEnded(p) => self.touch_ended(*p),
            Event::TouchCancelled(p) => self.touch_cancelled(*p),
            Event::KeyPressed(key) => self.key_pressed(key),
            Event::KeyReleased(key) => self.key_released(key),
            Event::Move(direction) => self.moved(*direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Program for Recorder {
        fn setup(&mut self, _screen: &mut Screen) {}
        fn update(&mut self, _time: &FrameTime) {}
        fn draw(&mut self, _screen: &mut Screen) {}

        fn touch_began(&mut self, point: Point) {
            self.calls.push(format!("began {point}"));
        }

        fn touch_cancelled(&mut self, point: Point) {
            self.calls.push(format!("cancelled {point}"));
        }

        fn key_pressed(&mut self, key: &str) {
            self.calls.push(format!("pressed {key}"));
        }

        fn moved(&mut self, direction: Direction) {
            self.calls.push(format!("moved {direction:?}"));
        }
    }

    #[test]
    fn events_reach_their_hooks() {
        let mut program = Recorder::default();
        let p = Point::new(1.0, 2.0);
        program.handle_event(&Event::TouchBegan(p));
        program.handle_event(&Event::TouchCancelled(p));
        program.handle_event(&Event::key_pressed(Key::Arrow(Direction::Left)));
        program.handle_event(&Event::Move(Direction::Down));
        assert_eq!(
            program.calls,
            vec![format!("began {p}"), format!("cancelled {p}"), "pressed ArrowLeft".to_string(), "moved Down".to_string()]
        );
    }

    #[test]
    fn unhandled_events_are_ignored() {
        let mut program = Recorder::default();
        program.handle_event(&Event::TouchMoved(Point::ZERO));
        program.handle_event(&Event::TouchEnded(Point::ZERO));
        program.handle_event(&Event::KeyReleased("ArrowUp".into()));
        assert!(program.calls.is_empty());
    }
}
