//! Raylib window frontend.
//!
//! Provides raylib-backed implementations of the match collaborators:
//! - [`RaylibSheetLoader`] – loads textures into a [`TextureStore`]
//! - [`RaylibSurface`] – paints through a `RaylibDrawHandle`
//! - [`RaylibKeyboard`] – turns key state changes into [`KeyEvent`]s
//! - [`RaylibHud`] – health bars, timer box and outcome banner
//!
//! [`run`] opens the window and drives a match until the window closes.

use log::{info, warn};
use raylib::prelude::*;

use crate::components::fighter::Slot;
use crate::components::geometry::{Rect, Size};
use crate::components::sprite::SpriteSheet;
use crate::error::FightError;
use crate::events::hud::Hud;
use crate::events::input::{InputSource, KeyEvent};
use crate::game::Match;
use crate::resources::gameconfig::GameConfig;
use crate::resources::matchstatus::Outcome;
use crate::resources::roster::Roster;
use crate::resources::sheetloader::SheetLoader;
use crate::resources::texturestore::TextureStore;
use crate::surface::{self, PaintSurface};

fn to_color(color: surface::Color) -> Color {
    Color::new(color.r, color.g, color.b, color.a)
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

/// Map a browser-style key identifier to a raylib key.
pub fn keyboard_key(identifier: &str) -> Option<KeyboardKey> {
    let key = match identifier {
        " " => KeyboardKey::KEY_SPACE,
        "Enter" => KeyboardKey::KEY_ENTER,
        "ArrowLeft" => KeyboardKey::KEY_LEFT,
        "ArrowRight" => KeyboardKey::KEY_RIGHT,
        "ArrowUp" => KeyboardKey::KEY_UP,
        "ArrowDown" => KeyboardKey::KEY_DOWN,
        "a" => KeyboardKey::KEY_A,
        "b" => KeyboardKey::KEY_B,
        "c" => KeyboardKey::KEY_C,
        "d" => KeyboardKey::KEY_D,
        "e" => KeyboardKey::KEY_E,
        "f" => KeyboardKey::KEY_F,
        "g" => KeyboardKey::KEY_G,
        "h" => KeyboardKey::KEY_H,
        "i" => KeyboardKey::KEY_I,
        "j" => KeyboardKey::KEY_J,
        "k" => KeyboardKey::KEY_K,
        "l" => KeyboardKey::KEY_L,
        "m" => KeyboardKey::KEY_M,
        "n" => KeyboardKey::KEY_N,
        "o" => KeyboardKey::KEY_O,
        "p" => KeyboardKey::KEY_P,
        "q" => KeyboardKey::KEY_Q,
        "r" => KeyboardKey::KEY_R,
        "s" => KeyboardKey::KEY_S,
        "t" => KeyboardKey::KEY_T,
        "u" => KeyboardKey::KEY_U,
        "v" => KeyboardKey::KEY_V,
        "w" => KeyboardKey::KEY_W,
        "x" => KeyboardKey::KEY_X,
        "y" => KeyboardKey::KEY_Y,
        "z" => KeyboardKey::KEY_Z,
        _ => return None,
    };
    Some(key)
}

/// Texture loader that keeps every texture it loads.
pub struct RaylibSheetLoader<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
    pub textures: &'a mut TextureStore,
}

impl SheetLoader for RaylibSheetLoader<'_> {
    fn load(&mut self, path: &str) -> SpriteSheet {
        if let Some(texture) = self.textures.get(path) {
            return SpriteSheet::new(path, texture.width as f32, texture.height as f32);
        }
        match self.rl.load_texture(self.thread, path) {
            Ok(texture) => {
                let sheet = SpriteSheet::new(path, texture.width as f32, texture.height as f32);
                self.textures.insert(path, texture);
                sheet
            }
            Err(e) => {
                warn!("Failed to load texture '{}': {}", path, e);
                SpriteSheet::new(path, 0.0, 0.0)
            }
        }
    }
}

/// Paint surface over one frame's draw handle.
pub struct RaylibSurface<'a, 'b> {
    pub d: &'a mut RaylibDrawHandle<'b>,
    pub textures: &'a TextureStore,
    pub size: Size,
}

impl PaintSurface for RaylibSurface<'_, '_> {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, dest: Rect, color: surface::Color) {
        self.d.draw_rectangle_rec(to_rectangle(dest), to_color(color));
    }

    fn stroke_rect(&mut self, dest: Rect, color: surface::Color) {
        self.d.draw_rectangle_lines(
            dest.x as i32,
            dest.y as i32,
            dest.width as i32,
            dest.height as i32,
            to_color(color),
        );
    }

    fn draw_image(&mut self, sheet: &SpriteSheet, src: Option<Rect>, dest: Rect) {
        let Some(texture) = self.textures.get(&sheet.key) else {
            return;
        };
        let src = src.unwrap_or(Rect::from_parts(Default::default(), sheet.size()));
        self.d.draw_texture_pro(
            texture,
            to_rectangle(src),
            to_rectangle(dest),
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }
}

/// Keyboard poller for the keys a roster bound.
pub struct RaylibKeyboard {
    keys: Vec<(String, KeyboardKey)>,
    pending: Vec<KeyEvent>,
}

impl RaylibKeyboard {
    pub fn new(identifiers: impl IntoIterator<Item = String>) -> Self {
        let keys = identifiers
            .into_iter()
            .filter_map(|id| match keyboard_key(&id) {
                Some(key) => Some((id, key)),
                None => {
                    warn!("Key {:?} has no keyboard mapping, ignoring", id);
                    None
                }
            })
            .collect();
        RaylibKeyboard {
            keys,
            pending: Vec::new(),
        }
    }

    /// Record this frame's presses and releases. Call before drawing starts.
    pub fn capture(&mut self, rl: &RaylibHandle) {
        for (id, key) in &self.keys {
            if rl.is_key_pressed(*key) {
                self.pending.push(KeyEvent::press(id.as_str()));
            }
            if rl.is_key_released(*key) {
                self.pending.push(KeyEvent::release(id.as_str()));
            }
        }
    }
}

impl InputSource for RaylibKeyboard {
    fn poll(&mut self) -> Vec<KeyEvent> {
        std::mem::take(&mut self.pending)
    }
}

const BAR_HEIGHT: i32 = 30;
const TIMER_WIDTH: i32 = 100;
const MARGIN: i32 = 20;

/// On-screen HUD drawn over the match.
#[derive(Debug, Clone)]
pub struct RaylibHud {
    health: [f32; 2],
    timer: u32,
    banner: Option<String>,
}

impl RaylibHud {
    pub fn new(seconds: u32) -> Self {
        RaylibHud {
            health: [100.0, 100.0],
            timer: seconds,
            banner: None,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, width: i32, height: i32) {
        let bar_width = (width - 2 * MARGIN - TIMER_WIDTH) / 2;

        let left = MARGIN;
        let right = MARGIN + bar_width + TIMER_WIDTH;
        d.draw_rectangle(left, MARGIN, bar_width, BAR_HEIGHT, Color::RED);
        d.draw_rectangle(right, MARGIN, bar_width, BAR_HEIGHT, Color::RED);

        let fill = |percent: f32| (bar_width as f32 * percent / 100.0) as i32;
        let one = fill(self.health[Slot::One.index()]);
        d.draw_rectangle(left + bar_width - one, MARGIN, one, BAR_HEIGHT, Color::SKYBLUE);
        let two = fill(self.health[Slot::Two.index()]);
        d.draw_rectangle(right, MARGIN, two, BAR_HEIGHT, Color::SKYBLUE);

        let timer_x = MARGIN + bar_width;
        d.draw_rectangle(timer_x, MARGIN - 5, TIMER_WIDTH, BAR_HEIGHT + 10, Color::BLACK);
        d.draw_rectangle_lines(timer_x, MARGIN - 5, TIMER_WIDTH, BAR_HEIGHT + 10, Color::WHITE);
        let text = self.timer.to_string();
        d.draw_text(&text, timer_x + TIMER_WIDTH / 2 - 6 * text.len() as i32, MARGIN, 24, Color::WHITE);

        if let Some(banner) = &self.banner {
            let font_size = 48;
            let text_width = banner.len() as i32 * font_size / 2;
            d.draw_text(
                banner,
                (width - text_width) / 2,
                (height - font_size) / 2,
                font_size,
                Color::WHITE,
            );
        }
    }
}

impl Hud for RaylibHud {
    fn set_health(&mut self, slot: Slot, percent: f32) {
        self.health[slot.index()] = percent;
    }

    fn set_timer(&mut self, seconds: u32) {
        self.timer = seconds;
    }

    fn show_outcome(&mut self, outcome: &Outcome) {
        self.banner = Some(outcome.to_string());
    }
}

/// Open the window and play one match. Returns the outcome, or `None`
/// when the window was closed first.
pub fn run(config: &GameConfig, roster: &Roster) -> Result<Option<Outcome>, FightError> {
    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title(&config.title)
        .build();
    if !rl.is_window_ready() {
        return Err(FightError::ResourceUnavailable(
            "raylib window could not be created".to_string(),
        ));
    }
    rl.set_target_fps(config.target_fps);

    let mut textures = TextureStore::new();
    let mut duel = {
        let mut loader = RaylibSheetLoader {
            rl: &mut rl,
            thread: &thread,
            textures: &mut textures,
        };
        Match::new(config, roster, &mut loader)?
    };
    info!("Loaded {} textures", textures.len());

    let mut keyboard = RaylibKeyboard::new(duel.bound_keys());
    let mut hud = RaylibHud::new(config.duration);
    let size = Size::new(width as f32, height as f32);

    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_F11) {
            duel.toggle_debug();
        }
        keyboard.capture(&rl);
        let dt = rl.get_frame_time();
        duel.advance_clock(dt, &mut hud);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        {
            let mut surface = RaylibSurface {
                d: &mut d,
                textures: &textures,
                size,
            };
            if duel.is_running() {
                duel.tick(&mut keyboard, &mut surface, &mut hud);
            } else {
                // Keep the last frame and the banner up.
                duel.render(&mut surface);
            }
        }
        hud.draw(&mut d, width as i32, height as i32);
    }

    Ok(duel.outcome())
}
