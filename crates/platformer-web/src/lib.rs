pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, input handlers, data accessors)
///
/// Calls made before `game_init` are ignored (accessors return zero/null).
///
/// # Arguments
///
/// - `$game_type`: a type implementing `platformer_engine::Game` with a
///   `new()` and a `with_config(GameConfig)` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::warn!("{}: not initialized, call game_init() first", $game_name);
                    R::default()
                }
            })
        }

        fn install(runner: $crate::GameRunner<$game_type>) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_init() {
            install($crate::GameRunner::new(<$game_type>::new()));
        }

        /// Start with a JSON config. Missing fields take their defaults; an
        /// unparsable or invalid document falls back to the defaults entirely.
        #[wasm_bindgen]
        pub fn game_init_with_config(json: &str) {
            let config = match platformer_engine::GameConfig::from_json(json) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("{}: {}, using defaults", $game_name, err);
                    platformer_engine::GameConfig::default()
                }
            };
            let game = <$game_type>::with_config(config.clone());
            install($crate::GameRunner::with_config(game, config));
        }

        #[wasm_bindgen]
        pub fn game_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(platformer_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(platformer_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(platformer_engine::InputEvent::KeyUp { key_code }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            RUNNER.with(|cell| cell.borrow().as_ref().map_or(std::ptr::null(), |r| r.header_ptr()))
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            RUNNER.with(|cell| cell.borrow().as_ref().map_or(std::ptr::null(), |r| r.instances_ptr()))
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            RUNNER.with(|cell| cell.borrow().as_ref().map_or(std::ptr::null(), |r| r.game_events_ptr()))
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}

#[cfg(target_arch = "wasm32")]
mod exports {
    use platformer_engine::Platformer;
    use wasm_bindgen::prelude::*;

    crate::export_game!(Platformer, "platformer");
}
