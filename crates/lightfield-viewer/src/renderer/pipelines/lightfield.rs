use crate::data::types::{LightFieldUniformsStd140 as LightFieldUniforms, QuadVertex, QUAD_INDICES, QUAD_VERTICES};
use crate::renderer::{shaders::ShaderSources, texture::LightFieldTexture};
use anyhow::{bail, Result};
use wgpu::util::DeviceExt;

/// Refocus program plus the static image-plane quad it is drawn on.
pub struct LightFieldPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub texture_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    uniform_bind: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    quad_ib: wgpu::Buffer,
}

impl LightFieldPipeline {
    /// Compiles both shader stages and links the pipeline.
    ///
    /// Shader or pipeline validation errors are returned instead of reaching
    /// the device's uncaptured error handler.
    pub async fn new(
        device: &wgpu::Device,
        color_fmt: wgpu::TextureFormat,
        sources: &ShaderSources,
    ) -> Result<Self> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&sources.vertex_path.display().to_string()),
            source: wgpu::ShaderSource::Wgsl(sources.vertex.as_str().into()),
        });
        let fs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&sources.fragment_path.display().to_string()),
            source: wgpu::ShaderSource::Wgsl(sources.fragment.as_str().into()),
        });

        // Group 0: parameters
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Light Field Uniform Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<LightFieldUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        // Group 1: views + sampler, one bind group per uploaded light field
        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Light Field Texture Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D3,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Light Field Uniform Buffer"),
            size: std::mem::size_of::<LightFieldUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_bind = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Light Field Uniform Bind Group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Image Plane VB"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let quad_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Image Plane IB"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let vbuf_layouts = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position (vec3)
                wgpu::VertexAttribute {
                    shader_location: 0,
                    offset: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Texcoord (vec2)
                wgpu::VertexAttribute {
                    shader_location: 1,
                    offset: 12,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }];

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Light Field PipelineLayout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Light Field Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: "vs_main",
                buffers: &vbuf_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_fmt,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        if let Some(err) = device.pop_error_scope().await {
            bail!(
                "failed to build shader program from {} and {}: {}",
                sources.vertex_path.display(),
                sources.fragment_path.display(),
                err
            );
        }

        Ok(Self {
            pipeline,
            texture_layout,
            uniform_buffer,
            uniform_bind,
            quad_vb,
            quad_ib,
        })
    }

    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &LightFieldUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub fn draw<'a>(&'a self, rpass: &mut wgpu::RenderPass<'a>, texture: &'a LightFieldTexture) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniform_bind, &[]);
        rpass.set_bind_group(1, &texture.bind, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_index_buffer(self.quad_ib.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }
}
