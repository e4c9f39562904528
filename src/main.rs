//! Lane Dodger entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, MouseEvent, Window};

    use lane_dodger::GameConfig;
    use lane_dodger::audio::BackgroundMusic;
    use lane_dodger::renderer::{DomRenderer, Frame};
    use lane_dodger::sim::{Effect, GameEvent, GameLoop, InputEvent, Key, Viewport};

    /// Game instance holding all state
    struct Game {
        game_loop: GameLoop,
        renderer: DomRenderer,
        music: BackgroundMusic,
        last_time: f64,
    }

    impl Game {
        /// Run the simulation ticks due since the last frame
        fn update(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;

            for event in self.game_loop.frame(elapsed) {
                if let GameEvent::Crashed { id } = event {
                    self.music.pause();
                    log::info!(
                        "Game over (hit car {}), final score {}",
                        id,
                        self.game_loop.state().score
                    );
                }
            }
        }

        fn render(&mut self) {
            let frame = Frame::capture(self.game_loop.state());
            self.renderer.render(&frame);
        }

        fn input(&mut self, event: InputEvent) {
            match self.game_loop.input(event) {
                Some(Effect::ToggleMusic) => self.music.toggle(),
                Some(Effect::StopMusic) => self.music.pause(),
                None => {}
            }
        }

        /// Reset game state for restart
        fn restart(&mut self, seed: u64) {
            self.game_loop.restart(seed);
            self.renderer.clear();
            self.music.stop();
        }
    }

    fn viewport(window: &Window) -> Viewport {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        Viewport::new(width as f32, height as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Lane Dodger starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(renderer) = DomRenderer::new(&document) else {
            log::error!("Game markup incomplete, not starting");
            return;
        };

        let config = GameConfig::load();
        let music = BackgroundMusic::new(&config.music_src, config.music_volume);
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            game_loop: GameLoop::new(config, viewport(&window), seed),
            renderer,
            music,
            last_time: 0.0,
        }));

        setup_input_handlers(&window, &document, game.clone());
        setup_restart_button(&document, game.clone());
        setup_auto_pause(&window, &document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Lane Dodger running!");
    }

    fn setup_input_handlers(window: &Window, document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_key_name(&event.key()) else {
                    return;
                };
                event.prevent_default();
                // Dropped if a frame is mid-update; the next press will land
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.input(key.into_event());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click over the play area toggles music
        if let Some(container) = document.get_element_by_id("gameContainer") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.input(InputEvent::Click);
                }
            });
            let _ = container
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Viewport resize
        {
            let window_clone = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.game_loop.resize(viewport(&window_clone));
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        // A callback still holding the game means the previous frame is not done;
        // skip this one instead of overlapping it
        match game.try_borrow_mut() {
            Ok(mut g) => {
                g.update(time);
                g.render();
            }
            Err(_) => log::debug!("Frame dropped, game busy"),
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("restartButton") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            // The button sits inside the play area; keep the click from toggling music
            event.stop_propagation();
            let seed = js_sys::Date::now() as u64;
            if let Ok(mut g) = game.try_borrow_mut() {
                g.restart(seed);
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(window: &Window, document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    if let Ok(mut g) = game.try_borrow_mut() {
                        g.input(InputEvent::FocusLost);
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.input(InputEvent::FocusLost);
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_dodger::GameConfig;
    use lane_dodger::sim::{GameLoop, GamePhase, Viewport};

    /// Give up after five minutes of simulated driving
    const MAX_TICKS: u64 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Lane Dodger (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let mut game = GameLoop::new(GameConfig::load(), Viewport::new(800.0, 600.0), 0x5eed);
    let step = game.config().tick_interval_ms();

    while game.phase() == GamePhase::Running && game.state().time_ticks < MAX_TICKS {
        if let Some(event) = autopilot::steer(game.state()) {
            game.input(event);
        }
        game.frame(step);
    }

    let state = game.state();
    println!(
        "\nHeadless run finished: {:?} after {} ticks, score {}",
        state.phase, state.time_ticks, state.score
    );
}

/// Naive dodging for the headless demo
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use lane_dodger::sim::{Direction, GameState, InputEvent};

    /// Horizontal clearance kept around the player
    const MARGIN: f32 = 10.0;

    /// Step away from the nearest car coming down the player's lane
    pub fn steer(state: &GameState) -> Option<InputEvent> {
        let player = &state.player.bounds;
        let threat = state
            .traffic
            .iter()
            .filter(|car| {
                let b = &car.bounds;
                b.top() <= player.bottom()
                    && b.right() + MARGIN >= player.left()
                    && b.left() - MARGIN <= player.right()
            })
            .max_by(|a, b| a.bounds.bottom().total_cmp(&b.bounds.bottom()))?;

        let player_mid = player.left() + player.size.x / 2.0;
        let threat_mid = threat.bounds.left() + threat.bounds.size.x / 2.0;
        let room_right = state.viewport.width - player.right();
        let dir = if threat_mid <= player_mid && room_right >= state.speed {
            Direction::Right
        } else if player.left() >= state.speed {
            Direction::Left
        } else {
            Direction::Right
        };
        Some(InputEvent::Move(dir))
    }
}
