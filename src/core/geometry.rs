/// Interleaved mesh vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Subdivided rectangle in the XY plane, centred on the origin, facing +Z.
///
/// UVs use the texture-space convention of wgpu: `(0, 0)` is the top-left
/// texel, so images appear upright without flipping.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub segments_x: u32,
    pub segments_y: u32,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Self {
        Self {
            width,
            height,
            segments_x: segments_x.max(1),
            segments_y: segments_y.max(1),
        }
    }

    pub fn vertex_count(&self) -> usize {
        ((self.segments_x + 1) * (self.segments_y + 1)) as usize
    }

    pub fn index_count(&self) -> usize {
        (self.segments_x * self.segments_y * 6) as usize
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        let gx = self.segments_x;
        let gy = self.segments_y;
        let mut out = Vec::with_capacity(self.vertex_count());
        for iy in 0..=gy {
            let v = iy as f32 / gy as f32;
            let y = self.height * 0.5 - v * self.height;
            for ix in 0..=gx {
                let u = ix as f32 / gx as f32;
                let x = u * self.width - self.width * 0.5;
                out.push(Vertex {
                    position: [x, y, 0.0],
                    normal: [0.0, 0.0, 1.0],
                    uv: [u, v],
                });
            }
        }
        out
    }

    /// Counter-clockwise triangles (front face towards +Z).
    pub fn indices(&self) -> Vec<u16> {
        let gx = self.segments_x;
        let gy = self.segments_y;
        let row = gx + 1;
        let mut out = Vec::with_capacity(self.index_count());
        for iy in 0..gy {
            for ix in 0..gx {
                let a = (ix + row * iy) as u16;
                let b = (ix + row * (iy + 1)) as u16;
                let c = (ix + 1 + row * (iy + 1)) as u16;
                let d = (ix + 1 + row * iy) as u16;
                out.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        out
    }
}
