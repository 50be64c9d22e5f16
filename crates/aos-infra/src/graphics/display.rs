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


//! The `wgpu` implementation of [`Display`].
//!
//! Draw calls are batched on the CPU during the frame and submitted in a
//! single render pass on `present`.

use super::context::GraphicsContext;
use super::quad::{QuadBatch, QuadVertex};
use aos_core::{Color, Display, DrawSurface, Rect, ShellConfig};
use anyhow::Result;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

/// A window-backed display that renders solid quads.
///
/// Text goes through the default [`DrawSurface::draw_text`] placeholder since
/// no font is loaded.
pub struct WgpuDisplay {
    window: Arc<Window>,
    context: GraphicsContext,
    pipeline: wgpu::RenderPipeline,
    batch: QuadBatch,
    clear_color: Color,
    size: (u32, u32),
}

impl WgpuDisplay {
    /// Initializes the GPU for `window`. Blocks until the device is ready.
    ///
    /// # Errors
    /// Any failure to obtain a surface, adapter or device. The shell must not
    /// start without a display.
    pub fn new(window: Arc<Window>, config: &ShellConfig) -> Result<Self> {
        let context = pollster::block_on(GraphicsContext::new(Arc::clone(&window), config.vsync))?;
        let pipeline = create_quad_pipeline(context.device(), context.format());
        let size = context.size();
        log::info!(
            "WgpuDisplay ready on \"{}\" ({}x{}).",
            context.adapter_name(),
            size.0,
            size.1
        );

        Ok(Self {
            window,
            context,
            pipeline,
            batch: QuadBatch::new(),
            clear_color: config.clear_color,
            size,
        })
    }

    fn gpu_color(&self, color: Color) -> [f32; 4] {
        if self.context.is_srgb() {
            color.to_linear()
        } else {
            color.to_srgb_f32()
        }
    }

    /// Follows window resizes; a minimized window reports zero and is skipped.
    fn sync_size(&mut self) {
        let inner = self.window.inner_size();
        let size = (inner.width, inner.height);
        if size != self.size {
            self.size = size;
            self.context.resize(size.0, size.1);
        }
    }

    fn acquire_frame(&mut self) -> Option<wgpu::SurfaceTexture> {
        match self.context.current_texture() {
            Ok(frame) => Some(frame),
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("WgpuDisplay: Surface {e:?}; reconfiguring and skipping the frame.");
                self.context.reconfigure();
                None
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("WgpuDisplay: Timeout acquiring a frame; skipping it.");
                None
            }
            Err(e) => {
                log::error!("WgpuDisplay: Failed to acquire a frame: {e:?}");
                None
            }
        }
    }
}

impl DrawSurface for WgpuDisplay {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let color = self.gpu_color(color);
        self.batch.push(rect, color, self.size);
    }
}

impl Display for WgpuDisplay {
    fn clear(&mut self, color: Color) {
        self.sync_size();
        self.batch.clear();
        self.clear_color = color;
    }

    fn present(&mut self) {
        if self.size.0 == 0 || self.size.1 == 0 {
            return;
        }
        let Some(frame) = self.acquire_frame() else {
            return;
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let device = self.context.device();
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("A-OS Frame Encoder"),
        });

        let vertex_buffer = (!self.batch.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("A-OS Quad Vertices"),
                contents: bytemuck::cast_slice(self.batch.vertices()),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let [r, g, b, a] = self.gpu_color(self.clear_color);
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("A-OS Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(buffer) = &vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..self.batch.vertices().len() as u32, 0..1);
            }
        }

        self.context.queue().submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        frame.present();
        log::trace!("Presented {} quads.", self.batch.len());
    }
}

fn create_quad_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("A-OS Quad Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/quad.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("A-OS Quad Pipeline Layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("A-OS Quad Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[QuadVertex::layout()],
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        multiview: None,
        cache: None,
    })
}
