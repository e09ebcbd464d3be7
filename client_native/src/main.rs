//! Native client for coin pong: window, input sampling, rendering, text
//! and audio. All game rules live in `game_core`; this binary only feeds
//! sampled input in and draws the resulting state.

use ggez::event::{self, EventHandler, KeyCode, KeyMods, MouseButton};
use ggez::input::keyboard;
use ggez::nalgebra as na;
use ggez::{conf, graphics, timer, Context, ContextBuilder, GameResult};

use std::env;
use std::path;

use game_core::{Config, GameRng, Params, Side};

mod assets;
mod game;

use assets::Assets;
use game::PongGame;

type Point2 = na::Point2<f32>;
type Vector2 = na::Vector2<f32>;

const DESIRED_FPS: u32 = Params::SIM_FPS;

const BACKGROUND: (u8, u8, u8) = (0x1a, 0x20, 0x2c);
const BALL_COLOR: (u8, u8, u8) = (0xff, 0x00, 0x00);
const LEFT_PADDLE_COLOR: (u8, u8, u8) = (0x00, 0x00, 0xff);
const RIGHT_PADDLE_COLOR: (u8, u8, u8) = (0x00, 0xff, 0x00);

const SCORE_TEXT_SIZE: f32 = 24.0;

struct MainState {
    game: PongGame,
    assets: Assets,
}

impl MainState {
    fn new(ctx: &mut Context) -> GameResult<MainState> {
        print_instructions();

        let assets = Assets::new(ctx)?;

        // Collision sizing follows the rendered coin size, so the
        // simulation sees exactly what the player sees.
        let (coin_w, coin_h) = assets.coin_footprint();
        let config = Config::new().with_coin_footprint(coin_w, coin_h);
        let game = PongGame::new(config, GameRng::from_entropy());

        Ok(MainState { game, assets })
    }
}

fn print_instructions() {
    println!();
    println!("Coin pong:");
    println!("  Left paddle: W / S");
    println!("  Right paddle: Up / Down");
    println!("  Click the ball to serve. Escape quits.");
    println!();
}

/// Fold a pair of held keys into a movement axis. Both held cancel out.
fn key_axis(ctx: &Context, up: KeyCode, down: KeyCode) -> i8 {
    let mut dir = 0;
    if keyboard::is_key_pressed(ctx, up) {
        dir -= 1;
    }
    if keyboard::is_key_pressed(ctx, down) {
        dir += 1;
    }
    dir
}

fn rgb((r, g, b): (u8, u8, u8)) -> graphics::Color {
    graphics::Color::from_rgb(r, g, b)
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while timer::check_update_time(ctx, DESIRED_FPS) {
            // Sample key state for this frame
            self.game
                .input
                .set_axis(Side::Left, key_axis(ctx, KeyCode::W, KeyCode::S));
            self.game
                .input
                .set_axis(Side::Right, key_axis(ctx, KeyCode::Up, KeyCode::Down));

            self.game.step();

            if self.game.events.any_hit() {
                self.assets.play_pickup_sound();
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, rgb(BACKGROUND));

        // Ball
        let (ball_pos, ball_radius) = self.game.ball();
        let ball_mesh = graphics::Mesh::new_circle(
            ctx,
            graphics::DrawMode::fill(),
            Point2::new(ball_pos.x, ball_pos.y),
            ball_radius,
            0.5,
            rgb(BALL_COLOR),
        )?;
        graphics::draw(ctx, &ball_mesh, graphics::DrawParam::default())?;

        // Paddles
        for (side, rect) in self.game.paddles() {
            let color = match side {
                Side::Left => rgb(LEFT_PADDLE_COLOR),
                Side::Right => rgb(RIGHT_PADDLE_COLOR),
            };
            let mesh = graphics::Mesh::new_rectangle(
                ctx,
                graphics::DrawMode::fill(),
                graphics::Rect::new(rect.min.x, rect.min.y, rect.width(), rect.height()),
                color,
            )?;
            graphics::draw(ctx, &mesh, graphics::DrawParam::default())?;
        }

        // Coins, animated off the shared wall clock
        let elapsed_ms = timer::time_since_start(ctx).as_millis() as u64;
        if let Some(frame) = self.assets.coin_frame(elapsed_ms) {
            let scale = Params::COIN_DRAW_SCALE;
            for pos in self.game.coin_positions() {
                let params = graphics::DrawParam::new()
                    .dest(Point2::new(pos.x, pos.y))
                    .offset(Point2::new(0.5, 0.5))
                    .scale(Vector2::new(scale, scale));
                graphics::draw(ctx, frame, params)?;
            }
        }

        // Scores (skipped entirely when the font failed to load)
        if let Some(font) = self.assets.font {
            let left_text =
                graphics::Text::new((format!("Player 1: {}", self.game.score.left), font, SCORE_TEXT_SIZE));
            let right_text =
                graphics::Text::new((format!("Player 2: {}", self.game.score.right), font, SCORE_TEXT_SIZE));

            let left_dest = Point2::new(50.0, 20.0);
            let right_dest = Point2::new(self.game.config.window_width - 200.0, 20.0);
            graphics::draw(ctx, &left_text, (left_dest, 0.0, graphics::WHITE))?;
            graphics::draw(ctx, &right_text, (right_dest, 0.0, graphics::WHITE))?;
        }

        graphics::present(ctx)?;
        timer::yield_now();
        Ok(())
    }

    fn mouse_button_down_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.game.input.push_click(glam::Vec2::new(x, y));
        }
    }

    fn key_down_event(&mut self, ctx: &mut Context, keycode: KeyCode, _keymod: KeyMods, _repeat: bool) {
        if keycode == KeyCode::Escape {
            event::quit(ctx);
        }
    }
}

pub fn main() -> GameResult {
    // Look for assets in CARGO_MANIFEST_DIR/resources when run from the
    // cargo project, falling back to ./resources next to the binary.
    let resource_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let mut path = path::PathBuf::from(manifest_dir);
        path.push("resources");
        path
    } else {
        path::PathBuf::from("./resources")
    };

    let cb = ContextBuilder::new("coin_pong", "coin_pong")
        .window_setup(conf::WindowSetup::default().title("Coin Pong"))
        .window_mode(
            conf::WindowMode::default().dimensions(Params::WINDOW_WIDTH, Params::WINDOW_HEIGHT),
        )
        .add_resource_path(resource_dir);

    let (ctx, events_loop) = &mut cb.build()?;

    let state = &mut MainState::new(ctx)?;
    event::run(ctx, events_loop, state)
}
