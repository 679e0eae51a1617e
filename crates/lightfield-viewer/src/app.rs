use crate::{
    camera::CameraController,
    config::Config,
    renderer::{shaders::ShaderSources, Renderer},
    ui,
    viewer::ViewerState,
};
use anyhow::{Context, Result};
use lightfield::{collect_views, load_light_field, GridShape, ViewInfo};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

/// The light-field viewer: refocus parameters, drag input and the GPU side.
pub struct App {
    pub renderer: Renderer,
    pub viewer: ViewerState,
    pub camera_controller: CameraController,
    pub egui_ctx: egui::Context,
    pub egui_state: egui_winit::State,
    show_ui: bool,
    rows: Option<u32>,
    cols: Option<u32>,
}

impl App {
    /// Builds the rendering surface and shader program for `window`.
    pub async fn new(window: Arc<Window>, config: &Config) -> Result<Self> {
        let shaders = ShaderSources::load(&config.shader_dir)?;
        let renderer = Renderer::new(window.clone(), &shaders).await?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            &*window,
            None,
            None,
        );

        Ok(Self {
            renderer,
            viewer: ViewerState::new(config.focus, config.aperture),
            camera_controller: CameraController::new(config.drag_mode),
            egui_ctx,
            egui_state,
            show_ui: !config.no_ui,
            rows: config.rows,
            cols: config.cols,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.renderer.resize(new_size);
        }
    }

    /// Returns true when the event was consumed (by the UI or the viewer).
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        // A release over the panel must still end the drag.
        if let WindowEvent::MouseInput {
            button: MouseButton::Left,
            state: ElementState::Released,
            ..
        } = event
        {
            self.camera_controller.release();
        }

        if self.show_ui {
            let response = self.egui_state.on_window_event(window, event);
            if response.consumed {
                return true;
            }
        }

        self.camera_controller.handle_event(
            event,
            self.renderer.gfx.viewport(),
            &mut self.viewer.camera,
        );

        match event {
            WindowEvent::Resized(physical_size) => self.resize(*physical_size),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::KeyR) =>
            {
                self.viewer.camera.reset();
                return true;
            }
            WindowEvent::DroppedFile(path) => {
                if !accepts_drop(path) {
                    log::warn!(
                        "Ignoring dropped file {}: drop a directory of views",
                        path.display()
                    );
                } else if let Err(err) = self.load_paths(window, std::slice::from_ref(path)) {
                    log::error!("Failed to load {}: {:#}", path.display(), err);
                }
                return true;
            }
            _ => {}
        }

        false
    }

    /// Loads views given as a directory or a list of files, resolving the grid
    /// from the configured rows/cols.
    pub fn load_paths(&mut self, window: &Window, paths: &[PathBuf]) -> Result<()> {
        let views = collect_views(paths)?;
        let shape = GridShape::resolve(self.rows, self.cols, views.len())?;
        self.set_light_field(window, &views, shape.rows, shape.cols)
    }

    /// Decodes and tiles `views` into a new texture, replacing the current one.
    ///
    /// Nothing changes on failure.
    pub fn set_light_field(
        &mut self,
        window: &Window,
        views: &[ViewInfo],
        rows: u32,
        cols: u32,
    ) -> Result<()> {
        let shape = GridShape::new(rows, cols)?;
        let buffer = load_light_field(views, shape)?;
        self.renderer
            .upload(&buffer)
            .context("failed to upload light field")?;

        self.viewer.set_light_field(shape, buffer.image_size());
        drop(buffer);

        // The minimum from the previous load would clamp a narrower request.
        window.set_min_inner_size(Some(self.viewer.minimum_size_hint()));
        let _ = window.request_inner_size(self.viewer.size_hint());
        log::info!("Light field texture is bound ({}x{} views)", rows, cols);
        Ok(())
    }

    #[inline]
    pub fn focus_point(&self) -> f32 {
        self.viewer.focus_point()
    }

    pub fn set_focus_point(&mut self, value: f32) {
        self.viewer.set_focus_point(value);
    }

    #[inline]
    pub fn aperture_size(&self) -> f32 {
        self.viewer.aperture_size()
    }

    pub fn set_aperture_size(&mut self, value: f32) {
        self.viewer.set_aperture_size(value);
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let frame = self.renderer.gfx.surface.get_current_texture()?;
        let swap_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(&swap_view, &self.viewer.uniforms());

        if self.show_ui {
            self.render_ui(window, &swap_view);
        }

        frame.present();
        Ok(())
    }

    fn render_ui(&mut self, window: &Window, swap_view: &wgpu::TextureView) {
        let egui_input = self.egui_state.take_egui_input(window);
        self.egui_ctx.begin_frame(egui_input);

        ui::draw_controls(&self.egui_ctx, &mut self.viewer);

        let egui_output = self.egui_ctx.end_frame();
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output);

        let shapes = self
            .egui_ctx
            .tessellate(egui_output.shapes, self.egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [
                self.renderer.gfx.config.width,
                self.renderer.gfx.config.height,
            ],
            pixels_per_point: self.egui_ctx.pixels_per_point(),
        };

        let mut encoder = self
            .renderer
            .gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("UI Encoder"),
            });

        for (id, delta) in &egui_output.textures_delta.set {
            self.renderer.egui_renderer.update_texture(
                &self.renderer.gfx.device,
                &self.renderer.gfx.queue,
                *id,
                delta,
            );
        }

        self.renderer.egui_renderer.update_buffers(
            &self.renderer.gfx.device,
            &self.renderer.gfx.queue,
            &mut encoder,
            &shapes,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("EGUI Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: swap_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer
                .egui_renderer
                .render(&mut render_pass, &shapes, &screen_descriptor);
        }

        for id in &egui_output.textures_delta.free {
            self.renderer.egui_renderer.free_texture(id);
        }

        self.renderer
            .gfx
            .queue
            .submit(std::iter::once(encoder.finish()));
    }
}

/// Only whole directories are reloaded on drop; winit delivers a multi-file
/// drop as one event per file, which cannot describe a grid.
fn accepts_drop(path: &Path) -> bool {
    path.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_accept_directories_only() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("view_00.png");
        std::fs::write(&file, b"").unwrap();

        assert!(accepts_drop(dir.path()));
        assert!(!accepts_drop(&file));
        assert!(!accepts_drop(&dir.path().join("absent")));
    }
}
