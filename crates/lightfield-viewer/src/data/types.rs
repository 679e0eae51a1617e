//! Core data types for the light-field viewer, focused on GPU data representation.

/// One corner of the image-plane quad.
/// Must match `VertexIn` in `lightfield.vert.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct QuadVertex {
    /// Clip-space position.
    pub position: [f32; 3],
    /// Texture coordinate; v grows downwards so row 0 of a view is at the top.
    pub texcoord: [f32; 2],
}

/// Corners of the full-viewport quad.
#[rustfmt::skip]
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { position: [-1.0, -1.0, 0.0], texcoord: [0.0, 1.0] },
    QuadVertex { position: [-1.0,  1.0, 0.0], texcoord: [0.0, 0.0] },
    QuadVertex { position: [ 1.0,  1.0, 0.0], texcoord: [1.0, 0.0] },
    QuadVertex { position: [ 1.0, -1.0, 0.0], texcoord: [1.0, 1.0] },
];

/// Two triangles covering [`QUAD_VERTICES`].
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Uniform block of the refocus shader, respecting std140 layout.
/// Must match `LightFieldUniforms` in `lightfield.frag.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, Debug, Default, PartialEq)]
pub struct LightFieldUniformsStd140 {
    pub focus_point: f32,
    pub aperture_size: f32,
    /// Camera position on the view grid, both axes in [0, 1].
    pub camera_position_x: f32,
    pub camera_position_y: f32,
    pub rows: i32,
    pub cols: i32,
    pub _pad: [i32; 2],
}

// Buffer size must match the WGSL-reflected size.
const _: [(); 32] = [(); core::mem::size_of::<LightFieldUniformsStd140>()];
const _: [(); 20] = [(); core::mem::size_of::<QuadVertex>()];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_indices_cover_both_triangles() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
        // Opposite corners 0 and 2 are shared by both triangles.
        assert_eq!(&QUAD_INDICES[..3], &[0, 1, 2]);
        assert_eq!(&QUAD_INDICES[3..], &[0, 2, 3]);
    }

    #[test]
    fn top_left_corner_samples_first_row() {
        let top_left = QUAD_VERTICES
            .iter()
            .find(|v| v.position[0] < 0.0 && v.position[1] > 0.0)
            .unwrap();
        assert_eq!(top_left.texcoord, [0.0, 0.0]);
    }
}
