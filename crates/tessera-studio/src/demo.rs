use rand::SeedableRng;
use rand::rngs::StdRng;
use tessera_engine::canvas::{BlendMode, StrokeStyle};
use tessera_engine::coords::{Direction, IntPoint, IntSize, Path, Point, Rect};
use tessera_engine::input::Key;
use tessera_engine::numeric::{random_choice, random_frac};
use tessera_engine::paint::{Color, ColorStop, Gradient, SpreadMode};
use tessera_engine::program::{LayerSpec, Program, Screen, ScreenSpec};
use tessera_engine::tiles::{Board, Shape, ShapeError, ShapeMode, SimpleSprite, Sprite, TileValue};
use tessera_engine::time::FrameTime;

const BOARD_SIZE: IntSize = IntSize::new(12, 8);
const TILE_SIZE: IntSize = IntSize::new(4, 4);
const SPRITE_LAYER: usize = 2;

/// Gradient scroll speed in pixels per second.
const SCROLL_SPEED: f64 = 12.0;

const APPLE: [&str; 4] = ["❔🍏🍏❔", "🍏🍏🍏🍏", "🍏🍏🍏🍏", "❔🍏🍏❔"];
const HEART: [&str; 4] = [
    "\u{2764}\u{FE0F}❔❔\u{2764}\u{FE0F}",
    "\u{2764}\u{FE0F}\u{2764}\u{FE0F}\u{2764}\u{FE0F}\u{2764}\u{FE0F}",
    "❔\u{2764}\u{FE0F}\u{2764}\u{FE0F}❔",
    "❔❔❔❔",
];
const BUTTERFLY: [&str; 4] = ["🦋❔❔🦋", "🦋💭💭🦋", "🦋💭💭🦋", "🦋❔❔🦋"];
const BEE: [&str; 3] = ["🍋💣🍋", "💣🍋💣", "🍋💣🍋"];

#[derive(Debug, Clone)]
pub struct Tile(Shape);

impl TileValue for Tile {
    fn shape(&self) -> &Shape {
        &self.0
    }
}

/// Background gradient, main layer with a tile board and a border, and a
/// wrapping sprite on top.
pub fn screen_spec() -> ScreenSpec {
    ScreenSpec::new(
        1,
        vec![LayerSpec::new(Some(Color::BLACK)), LayerSpec::new(Some(Color::CLEAR)), LayerSpec::new(Some(Color::CLEAR))],
    )
    .with_canvas_size(BOARD_SIZE * TILE_SIZE)
}

#[derive(Debug)]
pub struct Demo {
    rng: StdRng,
    tiles: Vec<Tile>,
    board: Board<Tile>,
    sprite: SimpleSprite,
    heading: Direction,
    elapsed: f64,
}

impl Demo {
    pub fn new(seed: u64) -> Result<Self, ShapeError> {
        let tiles = vec![Tile(Shape::standard(APPLE)?), Tile(Shape::standard(HEART)?), Tile(Shape::standard(BUTTERFLY)?)];
        let sprite = SimpleSprite::new(Shape::standard(BEE)?).with_mode(ShapeMode::Wrap);
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            tiles,
            board: Board::new(BOARD_SIZE, TILE_SIZE),
            sprite,
            heading: Direction::Right,
            elapsed: 0.0,
        })
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn sprite_position(&self) -> IntPoint {
        self.sprite.position
    }
}

impl Program for Demo {
    fn setup(&mut self, screen: &mut Screen) {
        self.board.clear_cells();
        for point in self.board.bounds().points() {
            if random_frac(&mut self.rng) < 0.3 {
                let tile = random_choice(&mut self.rng, &self.tiles).cloned();
                self.board.set_point(point, tile);
            }
        }
        let size = screen.canvas_size();
        self.sprite.position = IntPoint::new(size.width / 2, size.height / 2);
    }

    fn update(&mut self, time: &FrameTime) {
        self.elapsed += time.dt;
        self.sprite.position += self.heading.int_offset();
    }

    fn draw(&mut self, screen: &mut Screen) {
        let size = screen.canvas_size();
        let frame = Rect::new(0.0, 0.0, size.width as f64, size.height as f64);

        if let Some(background) = screen.background_canvas() {
            let shift = (self.elapsed * SCROLL_SPEED) % frame.size.height;
            let gradient = Gradient::new(vec![
                ColorStop::new(Color::DEEP_BLUE, 0.0),
                ColorStop::new(Color::MEDIUM_BLUE, 0.5),
                ColorStop::new(Color::BLUE_GREEN, 1.0),
            ])
            .with_spread(SpreadMode::Reflect);
            background.fill_gradient(
                &Path::rect(frame),
                &gradient,
                Point::new(0.0, shift),
                Point::new(0.0, shift + frame.size.height / 2.0),
                BlendMode::Normal,
            );
        }

        let canvas = screen.canvas();
        self.board.draw(canvas);
        canvas.stroke_path(&Path::rect(frame.inset(0.5, 0.5)), &StrokeStyle::new(Color::GOLD, 1.0));

        if let Some(layer) = screen.layer_mut(SPRITE_LAYER) {
            self.sprite.draw(layer);
        }
    }

    fn key_pressed(&mut self, key: &str) {
        if let Some(direction) = Key::from_name(key).and_then(Key::direction) {
            self.heading = direction;
        }
    }

    fn moved(&mut self, direction: Direction) {
        self.heading = direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_engine::input::Event;
    use tessera_engine::program::Stage;

    #[test]
    fn demo_draws_every_layer() {
        let mut stage = Stage::new(Demo::new(7).unwrap(), screen_spec()).unwrap();
        stage.run_frames(2);
        assert_eq!(stage.program().sprite_position(), IntPoint::new(26, 16));

        let screen = stage.screen();
        let background = &screen.layers()[0];
        assert_eq!(background.color_at(IntPoint::new(10, 10)).alpha, 1.0);
        let border = screen.layers()[1].color_at(IntPoint::new(0, 0));
        assert_eq!(border, Color::GOLD);
        let bee = screen.layers()[SPRITE_LAYER].color_at(IntPoint::new(27, 17));
        assert_eq!(bee, Color::YELLOW);
    }

    #[test]
    fn input_steers_the_sprite() {
        let mut stage = Stage::new(Demo::new(7).unwrap(), screen_spec()).unwrap();
        let input = stage.attach_input().unwrap();
        stage.dispatch(&input, Event::key_pressed(Key::Arrow(Direction::Up)));
        assert_eq!(stage.program().heading(), Direction::Up);
        stage.dispatch(&input, Event::Move(Direction::Left));
        stage.run_frames(1);
        assert_eq!(stage.program().sprite_position(), IntPoint::new(23, 16));
    }
}
