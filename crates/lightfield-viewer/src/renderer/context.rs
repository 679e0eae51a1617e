use anyhow::{anyhow, Result};
use std::sync::Arc;
use winit::window::Window;

/// Holds all GPU resources needed for rendering.
pub struct GfxContext {
    pub surface: wgpu::Surface<'static>,
    pub device:  wgpu::Device,
    pub queue:   wgpu::Queue,
    pub config:  wgpu::SurfaceConfiguration,
    pub size:    winit::dpi::PhysicalSize<u32>,
}

impl GfxContext {
    /// Creates a new graphics context bound to the given window.
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());

        // The surface must outlive the window; `Arc` guarantees this.
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference:         wgpu::PowerPreference::default(),
                compatible_surface:       Some(&surface),
                force_fallback_adapter:   false,
            })
            .await
            .ok_or_else(|| anyhow!("Failed to find a suitable GPU adapter."))?;

        log::info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label:             Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits:   light_field_limits(&adapter.limits()),
                },
                None, // no trace
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let surface_format = preferred_surface_format(&caps.formats)
            .ok_or_else(|| anyhow!("Surface reports no supported formats."))?;
        log::debug!("Surface format {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage:                       wgpu::TextureUsages::RENDER_ATTACHMENT,
            format:                      surface_format,
            width:                       size.width.max(1),
            height:                      size.height.max(1),
            present_mode:                wgpu::PresentMode::Fifo, // V‑sync
            alpha_mode:                  caps.alpha_modes[0],
            view_formats:                vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Resizes the swap chain when the window size changes.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Surface size as `[width, height]` in physical pixels.
    #[inline]
    pub fn viewport(&self) -> [u32; 2] {
        [self.size.width, self.size.height]
    }
}

/// Default limits, raised to the adapter's 3D texture size so deep light
/// fields fit.
pub fn light_field_limits(adapter: &wgpu::Limits) -> wgpu::Limits {
    wgpu::Limits {
        max_texture_dimension_3d: adapter.max_texture_dimension_3d,
        ..wgpu::Limits::default()
    }
}

/// First sRGB format the surface offers, else its first format. The light
/// field texture is sRGB, so an sRGB target presents its bytes unchanged.
pub fn preferred_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat;

    #[test]
    fn srgb_surface_format_is_preferred() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(
            preferred_surface_format(&formats),
            Some(TextureFormat::Bgra8UnormSrgb)
        );
        assert_eq!(
            preferred_surface_format(&[TextureFormat::Rgba16Float]),
            Some(TextureFormat::Rgba16Float)
        );
        assert_eq!(preferred_surface_format(&[]), None);
    }

    #[test]
    fn only_the_3d_limit_is_raised() {
        let adapter = wgpu::Limits {
            max_texture_dimension_3d: 16384,
            max_texture_dimension_2d: 32768,
            ..wgpu::Limits::default()
        };
        let limits = light_field_limits(&adapter);
        assert_eq!(limits.max_texture_dimension_3d, 16384);
        assert_eq!(
            limits.max_texture_dimension_2d,
            wgpu::Limits::default().max_texture_dimension_2d
        );
    }
}
