use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::window::Window;

use crate::adapters::pixel_format::copy_board_to_rgba;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::input::gui::GuiError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Blits the board through `pixels` and draws egui on top in the same pass.
///
/// The pixel buffer keeps the board size; only the surface follows the
/// window, and the scaling renderer stretches one onto the other.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    board: PixelBuffer,
    width: u32,
    height: u32,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, board: PixelRect) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(board.width(), board.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            board: PixelBuffer::new(board),
            width: size.width,
            height: size.height,
        })
    }

    fn board_mut(&mut self) -> &mut PixelBuffer {
        &mut self.board
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        copy_board_to_rgba(&self.board, self.pixels.frame_mut());

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // Keep the board underneath.
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    fn window_to_board(&self, position: (f64, f64)) -> Point {
        let position = (position.0 as f32, position.1 as f32);

        match self.pixels.window_pos_to_pixel(position) {
            Ok((x, y)) => Point::new(x as i32, y as i32),
            Err((x, y)) => Point::new(x as i32, y as i32),
        }
    }
}
