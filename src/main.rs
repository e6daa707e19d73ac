//! 3D Pong: two paddles, a bouncing ball, and a free-fly camera

use pong3d::prelude::*;

/// Camera fly speed in units per second
const CAMERA_SPEED: f32 = 2.5;

/// Mouse-look sensitivity in degrees per pixel
const MOUSE_SENSITIVITY: f32 = 0.1;

struct PongGame {
    config: GameConfig,
    state: GameState,
    mapper: InputMapper,
    camera: Camera,
    light: Light,
    meshes: MeshStore,
    ball_mesh: Option<AssetHandle<Mesh>>,
    paddle_mesh: Option<AssetHandle<Mesh>>,
    ball_model: Option<(wgpu::Buffer, wgpu::BindGroup)>,
    left_paddle_model: Option<(wgpu::Buffer, wgpu::BindGroup)>,
    right_paddle_model: Option<(wgpu::Buffer, wgpu::BindGroup)>,
    material_bind_group: Option<wgpu::BindGroup>,
}

impl PongGame {
    fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::from_config(&config),
            config,
            mapper: InputMapper::with_defaults(),
            camera: Camera::new(),
            light: Light::default(),
            meshes: MeshStore::new(),
            ball_mesh: None,
            paddle_mesh: None,
            ball_model: None,
            left_paddle_model: None,
            right_paddle_model: None,
            material_bind_group: None,
        }
    }

    /// Load a model, substituting a built-in primitive when the file is
    /// missing or malformed. The game keeps running either way.
    fn load_mesh_or(
        &mut self,
        ctx: &EngineContext,
        path: &str,
        fallback: impl FnOnce() -> Mesh,
    ) -> AssetHandle<Mesh> {
        match self.meshes.load(ctx.renderer(), path) {
            Ok(handle) => handle,
            Err(e) => {
                log::error!("Failed to load {path}: {e}; using a built-in primitive");
                self.meshes.insert(ctx.renderer(), fallback())
            }
        }
    }

    fn ball_transform(&self) -> Mat4 {
        let position = self.state.ball.position;
        Mat4::from_translation(Vec3::new(position.x, position.y, 0.0))
            * Mat4::from_scale(Vec3::splat(self.config.ball_scale))
    }

    fn paddle_transform(&self, x: f32, offset: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(x, offset, 0.0))
            * Mat4::from_scale(Vec3::splat(self.config.paddle_scale))
    }
}

impl Game for PongGame {
    fn init(&mut self, ctx: &mut EngineContext) {
        log::info!("Initializing Pong");

        let ball_path = self.config.ball_mesh.clone();
        let paddle_path = self.config.paddle_mesh.clone();
        self.ball_mesh = Some(self.load_mesh_or(ctx, &ball_path, || Mesh::sphere(1.0, 24, 16)));
        self.paddle_mesh = Some(self.load_mesh_or(ctx, &paddle_path, Mesh::cube));

        // Optional diffuse texture for both models
        if let Some(path) = self.config.texture.clone() {
            let renderer = ctx.renderer();
            match Texture::from_path(renderer.device(), renderer.queue(), &path, Some("diffuse")) {
                Ok(texture) => {
                    self.material_bind_group = Some(
                        renderer.create_material_bind_group(&Material::textured_default(), &texture),
                    );
                }
                Err(e) => log::error!("Failed to load texture {path}: {e}; using plain material"),
            }
        }

        // Model bind groups, refreshed every frame from game state
        self.ball_model = Some(ctx.renderer().create_model_bind_group(self.ball_transform()));
        self.left_paddle_model = Some(
            ctx.renderer()
                .create_model_bind_group(self.paddle_transform(-self.config.paddle_x, 0.0)),
        );
        self.right_paddle_model = Some(
            ctx.renderer()
                .create_model_bind_group(self.paddle_transform(self.config.paddle_x, 0.0)),
        );

        self.camera.set_aspect(ctx.width(), ctx.height());

        log::info!("Pong initialized");
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        let dt = ctx.time.delta_seconds();

        if self.mapper.is_pressed(&ctx.input, Action::Quit) {
            ctx.quit();
            return;
        }

        // Paddle movement: a fixed step per tick while the key is held
        self.state.apply_paddle_input(PaddleInput {
            left_up: self.mapper.is_pressed(&ctx.input, Action::LeftPaddleUp),
            left_down: self.mapper.is_pressed(&ctx.input, Action::LeftPaddleDown),
            right_up: self.mapper.is_pressed(&ctx.input, Action::RightPaddleUp),
            right_down: self.mapper.is_pressed(&ctx.input, Action::RightPaddleDown),
        });

        // Ball motion and wall bounces
        self.state.tick(dt);

        // Camera fly and look
        if self.mapper.is_pressed(&ctx.input, Action::CameraForward) {
            self.camera.move_forward(CAMERA_SPEED * dt);
        }
        if self.mapper.is_pressed(&ctx.input, Action::CameraBackward) {
            self.camera.move_forward(-CAMERA_SPEED * dt);
        }

        let mouse = ctx.input.mouse_delta();
        if mouse != Vec2::ZERO {
            // Screen Y grows downward; looking up means a negative delta
            self.camera
                .rotate(mouse.x, -mouse.y, MOUSE_SENSITIVITY.to_radians());
        }

        let scroll = ctx.input.scroll_delta().y;
        if scroll != 0.0 {
            self.camera.zoom(scroll);
        }

        // Push transforms to the GPU
        if let Some((buffer, _)) = &self.ball_model {
            ctx.renderer().update_model_buffer(buffer, self.ball_transform());
        }
        if let Some((buffer, _)) = &self.left_paddle_model {
            let transform =
                self.paddle_transform(-self.config.paddle_x, self.state.left_paddle.offset);
            ctx.renderer().update_model_buffer(buffer, transform);
        }
        if let Some((buffer, _)) = &self.right_paddle_model {
            let transform =
                self.paddle_transform(self.config.paddle_x, self.state.right_paddle.offset);
            ctx.renderer().update_model_buffer(buffer, transform);
        }
    }

    fn render(&mut self, ctx: &mut EngineContext) {
        ctx.renderer_mut().update_camera(&self.camera);
        ctx.renderer_mut().update_light(&self.light);

        let renderer = ctx.renderer();
        let Some(mut frame) = renderer.begin_frame() else {
            return;
        };

        {
            let mut render_pass = renderer.begin_render_pass(&mut frame);
            let material = self
                .material_bind_group
                .as_ref()
                .unwrap_or_else(|| renderer.default_material_bind_group());

            if let (Some(mesh), Some((_, bind_group))) = (&self.ball_mesh, &self.ball_model) {
                renderer.draw_mesh(&mut render_pass, mesh.get(), bind_group, material);
            }

            if let Some(mesh) = &self.paddle_mesh {
                if let Some((_, bind_group)) = &self.left_paddle_model {
                    renderer.draw_mesh(&mut render_pass, mesh.get(), bind_group, material);
                }
                if let Some((_, bind_group)) = &self.right_paddle_model {
                    renderer.draw_mesh(&mut render_pass, mesh.get(), bind_group, material);
                }
            }
        }

        renderer.end_frame(frame);
    }

    fn on_resize(&mut self, _ctx: &mut EngineContext, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    fn shutdown(&mut self, _ctx: &mut EngineContext) {
        log::info!("Shutting down Pong");
    }
}

fn main() {
    env_logger::init();

    let config = GameConfig::load_or_default("pong.ron");
    let engine_config = EngineConfig::default()
        .with_title(config.title.clone())
        .with_size(config.width, config.height)
        .with_vsync(config.vsync);

    let game = PongGame::new(config);
    let engine = Engine::new(engine_config, game);

    if let Err(e) = engine.run() {
        eprintln!("Engine error: {e}");
        std::process::exit(1);
    }
}
