// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! CPU-side batching of solid rectangles into clip-space triangles.

use aos_core::Rect;
use bytemuck::{Pod, Zeroable};

/// One vertex of a solid quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Clip-space position.
    pub position: [f32; 2],
    /// Straight-alpha RGBA, already in the surface's color space.
    pub color: [f32; 4],
}

impl QuadVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Vertex buffer layout matching `shaders/quad.wgsl`.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Converts a pixel position to clip space for a `viewport` of the given size.
///
/// Pixel `(0, 0)` is the top-left corner; clip-space `y` points up.
pub fn to_clip_space(x: i32, y: i32, viewport: (u32, u32)) -> [f32; 2] {
    let (width, height) = (viewport.0.max(1) as f32, viewport.1.max(1) as f32);
    [
        x as f32 / width * 2.0 - 1.0,
        1.0 - y as f32 / height * 2.0,
    ]
}

/// The triangles of one frame.
#[derive(Debug, Default)]
pub struct QuadBatch {
    vertices: Vec<QuadVertex>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends two triangles covering `rect`. Empty rectangles are skipped.
    pub fn push(&mut self, rect: Rect, color: [f32; 4], viewport: (u32, u32)) {
        if rect.is_empty() {
            return;
        }
        let top_left = to_clip_space(rect.x, rect.y, viewport);
        let bottom_right = to_clip_space(rect.right(), rect.bottom(), viewport);
        let top_right = [bottom_right[0], top_left[1]];
        let bottom_left = [top_left[0], bottom_right[1]];

        self.vertices.extend(
            [
                top_left,
                bottom_left,
                bottom_right,
                top_left,
                bottom_right,
                top_right,
            ]
            .map(|position| QuadVertex { position, color }),
        );
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[QuadVertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of quads in the batch.
    pub fn len(&self) -> usize {
        self.vertices.len() / 6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_clip_extremes() {
        let viewport = (1280, 720);
        assert_eq!(to_clip_space(0, 0, viewport), [-1.0, 1.0]);
        assert_eq!(to_clip_space(1280, 720, viewport), [1.0, -1.0]);
        assert_eq!(to_clip_space(640, 360, viewport), [0.0, 0.0]);
    }

    #[test]
    fn zero_viewport_does_not_divide_by_zero() {
        let [x, y] = to_clip_space(10, 10, (0, 0));
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn push_emits_two_triangles() {
        let mut batch = QuadBatch::new();
        let red = [1.0, 0.0, 0.0, 1.0];
        batch.push(Rect::new(0, 0, 640, 360), red, (1280, 720));

        assert_eq!(batch.len(), 1);
        let positions: Vec<[f32; 2]> = batch.vertices().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                [-1.0, 1.0],
                [-1.0, 0.0],
                [0.0, 0.0],
                [-1.0, 1.0],
                [0.0, 0.0],
                [0.0, 1.0],
            ]
        );
        assert!(batch.vertices().iter().all(|v| v.color == red));
    }

    #[test]
    fn empty_rects_are_skipped_and_clear_resets() {
        let mut batch = QuadBatch::new();
        batch.push(Rect::new(10, 10, 0, 5), [1.0; 4], (100, 100));
        assert!(batch.is_empty());

        batch.push(Rect::new(10, 10, 5, 5), [1.0; 4], (100, 100));
        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn vertex_layout_matches_struct() {
        let layout = QuadVertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 8);
    }
}
