use platformer_engine::bridge::protocol::{FrameHeader, HEADER_FLOATS};
use platformer_engine::systems::render::build_render_buffer;
use platformer_engine::{Game, GameConfig, InputEvent, InputQueue, ProtocolLayout, RenderBuffer, Session};

/// Generic game runner that wires up the simulation loop.
///
/// The export macro keeps one runner in a `thread_local!` and forwards free
/// `#[wasm_bindgen]` functions to it, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    session: Session,
    input: InputQueue,
    render_buffer: RenderBuffer,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    frame: u32,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self::with_config(game, config)
    }

    /// Run `game` against an explicit config instead of the one it reports.
    /// An invalid config is replaced by the defaults.
    pub fn with_config(game: G, config: GameConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("{}, using defaults", err);
                GameConfig::default()
            }
        };
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            game,
            session: Session::new(config),
            input: InputQueue::new(),
            render_buffer,
            layout,
            header: [0.0; HEADER_FLOATS],
            frame: 0,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.session);
        self.initialized = true;
        self.write_header();
    }

    /// Push an input event into the queue for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run exactly one simulation frame and refresh the shared buffers.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.session.clear_frame_data();

        self.game.update(&mut self.session, &self.input);

        // Drain input after update
        self.input.drain();

        build_render_buffer(self.session.world.iter(), &mut self.render_buffer);

        self.frame = self.frame.wrapping_add(1);
        self.write_header();
    }

    fn write_header(&mut self) {
        let frame = FrameHeader {
            frame: self.frame,
            instance_count: self.render_buffer.instances.len(),
            event_count: self.session.events.len(),
            world_width: self.session.config.world_width,
            world_height: self.session.config.world_height,
        };
        self.layout.write_header(&mut self.header, &frame);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.session.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.session.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.session.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.session.config.world_height
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
