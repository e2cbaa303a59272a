//! Penguin Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use penguin_dash::renderer::{RenderState, build_scene};
    use penguin_dash::sim::{Command, GameEvent, GamePhase, Hud};
    use penguin_dash::Engine;

    /// Game instance holding all state
    struct Game {
        engine: Engine,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                engine: Engine::new(seed),
                render_state: None,
            }
        }

        /// One simulation tick per animation frame
        fn update(&mut self) {
            self.engine.tick();

            for event in self.engine.drain_events() {
                match event {
                    GameEvent::Crashed(hud) => show_game_over(&hud),
                    GameEvent::PhaseChanged { to: GamePhase::Playing, .. } => hide_game_over(),
                    GameEvent::PhaseChanged { from, to } => {
                        log::debug!("Phase {:?} -> {:?}", from, to)
                    }
                    GameEvent::FishCollected { total } => log::debug!("Fish collected: {}", total),
                    GameEvent::LaneChanged { .. } => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(self.engine.state());
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM. GameOver keeps the crash tick's values.
        fn update_hud(&self) {
            let Some(document) = document() else {
                return;
            };
            let hud = self.engine.hud();
            set_text(&document, "scoreValue", hud.score);
            set_text(&document, "distanceValue", hud.distance);
            set_text(&document, "fishValue", hud.pickups);
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(document: &Document, id: &str, value: impl ToString) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    fn show_game_over(hud: &Hud) {
        let Some(document) = document() else {
            return;
        };
        set_text(&document, "finalScore", hud.score);
        set_text(&document, "finalDistance", hud.distance);
        set_text(&document, "finalFish", hud.pickups);
        if let Some(el) = document.get_element_by_id("gameOverScreen") {
            let _ = el.class_list().remove_1("hidden");
        }
    }

    fn hide_game_over() {
        if let Some(el) = document().and_then(|d| d.get_element_by_id("gameOverScreen")) {
            let _ = el.class_list().add_1("hidden");
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Penguin Dash starting...");

        let Some(document) = document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #gameCanvas element");
            return;
        };
        let width = canvas.width();
        let height = canvas.height();

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match create_render_state(&instance, canvas, width, height).await {
            Some(render_state) => game.borrow_mut().render_state = Some(render_state),
            None => log::warn!("Rendering unavailable, running simulation only"),
        }

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Penguin Dash running!");
    }

    async fn create_render_state(
        instance: &wgpu::Instance,
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Option<RenderState> {
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| log::error!("Failed to create surface: {e}"))
            .ok()?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| log::error!("Failed to get adapter: {e}"))
            .ok()?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| log::error!("Failed to create device: {e}"))
            .ok()
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            let code = event.code();
            if g.engine.key_down(&code) && code.starts_with("Arrow") {
                // Keep the page from scrolling
                event.prevent_default();
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id("restartBtn")) else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut g = game.borrow_mut();
            if g.engine.command(Command::Restart) {
                log::info!("Game restarted");
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use penguin_dash::sim::{Command, GameEvent, GamePhase, autopilot};
    use penguin_dash::{Engine, Tuning};

    /// Ten minutes at 60 frames per second
    const MAX_TICKS: u64 = 60 * 60 * 10;
    const REPORT_EVERY: u64 = 600;

    /// `penguin-dash [seed] [tuning.json]`
    pub fn run() {
        let mut args = std::env::args().skip(1);
        let seed = args
            .next()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or_else(clock_seed);
        let tuning = args.next().map(|path| load_tuning(&path)).unwrap_or_default();

        let mut engine = match Engine::with_tuning(seed, tuning) {
            Ok(engine) => engine,
            Err(e) => {
                log::warn!("{e}, using default tuning");
                Engine::new(seed)
            }
        };

        log::info!("Penguin Dash (headless) seed {}", seed);
        engine.command(Command::Start);

        for tick in 1..=MAX_TICKS {
            if let Some(command) = autopilot::suggest(engine.state()) {
                engine.command(command);
            }
            engine.tick();

            for event in engine.drain_events() {
                match event {
                    GameEvent::FishCollected { total } => log::debug!("Fish! ({})", total),
                    GameEvent::LaneChanged { lane } => log::trace!("Lane {}", lane),
                    GameEvent::Crashed(hud) => log::info!("Crashed at tick {}: {:?}", tick, hud),
                    GameEvent::PhaseChanged { from, to } => {
                        log::debug!("Phase {:?} -> {:?}", from, to)
                    }
                }
            }

            if engine.phase() == GamePhase::GameOver {
                break;
            }
            if tick % REPORT_EVERY == 0 {
                let hud = engine.hud();
                log::info!(
                    "tick {}: speed {:.3}, score {}, distance {}, fish {}, obstacles {}",
                    tick,
                    engine.state().speed,
                    hud.score,
                    hud.distance,
                    hud.pickups,
                    engine.state().obstacles.len()
                );
            }
        }

        let hud = engine.hud();
        println!(
            "Final score: {}  distance: {}  fish: {}",
            hud.score, hud.distance, hud.pickups
        );
        match serde_json::to_string_pretty(&hud) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize stats: {e}"),
        }
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn load_tuning(path: &str) -> Tuning {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning file {path}: {e}, using defaults");
                return Tuning::default();
            }
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {path}");
                tuning
            }
            Err(e) => {
                log::warn!("Rejected tuning file {path}: {e}, using defaults");
                Tuning::default()
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
