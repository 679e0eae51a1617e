//! Device-resident copy of a light field.

use anyhow::{bail, Result};
use lightfield::LightFieldBuffer;
use wgpu::util::{DeviceExt, TextureDataOrder};

/// wgpu has no 3-channel 8-bit format; views are expanded to RGBA on upload.
/// sRGB so that sampling and presenting to an sRGB surface round-trip the
/// stored bytes.
pub const LIGHT_FIELD_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// A 3D texture with one depth slice per view, plus the bind group that
/// exposes it to the refocus shader. Dropping it releases the GPU objects.
pub struct LightFieldTexture {
    _texture: wgpu::Texture,
    _view: wgpu::TextureView,
    _sampler: wgpu::Sampler,
    pub bind: wgpu::BindGroup,
}

impl LightFieldTexture {
    /// Uploads `buffer` in one call. `layout` must be the refocus pipeline's
    /// texture bind group layout.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        buffer: &LightFieldBuffer,
    ) -> Result<Self> {
        let size = buffer.image_size();
        let extent = wgpu::Extent3d {
            width: size.width,
            height: size.height,
            depth_or_array_layers: buffer.shape().views() as u32,
        };

        let limit = device.limits().max_texture_dimension_3d;
        if extent.width > limit || extent.height > limit || extent.depth_or_array_layers > limit {
            bail!(
                "light field texture {}x{}x{} exceeds the device 3D texture limit of {}",
                extent.width,
                extent.height,
                extent.depth_or_array_layers,
                limit
            );
        }

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("Light Field Texture"),
                size: extent,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D3,
                format: LIGHT_FIELD_FORMAT,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            TextureDataOrder::LayerMajor,
            &buffer.to_rgba8(),
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Light Field View"),
            dimension: Some(wgpu::TextureViewDimension::D3),
            ..Default::default()
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Light Field Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            // Single mip level.
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Light Field Texture Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        log::info!(
            "Uploaded light field texture {}x{}x{}",
            extent.width,
            extent.height,
            extent.depth_or_array_layers
        );

        Ok(Self {
            _texture: texture,
            _view: view,
            _sampler: sampler,
            bind,
        })
    }
}
