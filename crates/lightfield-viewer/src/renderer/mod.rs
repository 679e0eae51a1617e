//! The main rendering orchestrator. Owns the GPU context, the refocus
//! pipeline and the currently uploaded light field.

pub mod context;
pub mod pipelines;
pub mod shaders;
pub mod texture;

use self::{
    context::GfxContext, pipelines::lightfield::LightFieldPipeline, shaders::ShaderSources,
    texture::LightFieldTexture,
};
use crate::data::LightFieldUniformsStd140;
use anyhow::Result;
use lightfield::LightFieldBuffer;
use std::sync::Arc;
use winit::window::Window;

/// Owns all rendering-related state.
pub struct Renderer {
    pub gfx: GfxContext,
    pub lightfield: LightFieldPipeline,
    pub texture: Option<LightFieldTexture>,
    pub egui_renderer: egui_wgpu::Renderer,
}

impl Renderer {
    /// Sets up the surface and builds the refocus program. Runs once per window.
    pub async fn new(window: Arc<Window>, shaders: &ShaderSources) -> Result<Self> {
        let gfx = GfxContext::new(window).await?;
        let lightfield = LightFieldPipeline::new(&gfx.device, gfx.config.format, shaders).await?;

        let egui_renderer =
            egui_wgpu::Renderer::new(&gfx.device, gfx.config.format, None, 1);

        Ok(Self {
            gfx,
            lightfield,
            texture: None,
            egui_renderer,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.gfx.resize(new_size);
        }
    }

    /// Replaces the current light field texture. On error the previous one stays.
    pub fn upload(&mut self, buffer: &LightFieldBuffer) -> Result<()> {
        let texture = LightFieldTexture::new(
            &self.gfx.device,
            &self.gfx.queue,
            &self.lightfield.texture_layout,
            buffer,
        )?;
        self.texture = Some(texture);
        Ok(())
    }

    /// Clears the frame and, once a light field is loaded, draws the refocused view.
    pub fn render(&mut self, swap_view: &wgpu::TextureView, uniforms: &LightFieldUniformsStd140) {
        let mut encoder = self
            .gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        if self.texture.is_some() {
            self.lightfield.write_uniforms(&self.gfx.queue, uniforms);
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Refocus Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: swap_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(texture) = &self.texture {
                self.lightfield.draw(&mut pass, texture);
            }
        }

        self.gfx.queue.submit(std::iter::once(encoder.finish()));
    }
}
