// File: crates/timings-viewer/src/viewer.rs
// Summary: Interactive window that shows a rendered chart via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use timings_core::{Chart, RenderOptions};
use tracing::{debug, error};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Open a window showing `chart` and block until the user closes it (close button, Q or Escape).
/// The chart is re-rendered whenever the window size changes.
pub fn show(chart: Chart, opts: RenderOptions) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(chart.title.as_str())
        .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
        .build(&event_loop)
        .map_err(|e| anyhow!("failed to open window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    let mut frame: Option<(PhysicalSize<u32>, Vec<u32>)> = None;

    event_loop.run(move |event, _, control_flow| {
        // the surface must not outlive its context
        let _ = &context;
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Q | VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&chart, &opts, &mut surface, size, &mut frame) {
                    error!("redraw failed: {e:#}");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }
            _ => {}
        }
    })
}

/// Blit the chart at `size`, reusing the last frame when the size has not changed.
fn present(
    chart: &Chart,
    opts: &RenderOptions,
    surface: &mut softbuffer::Surface,
    size: PhysicalSize<u32>,
    cache: &mut Option<(PhysicalSize<u32>, Vec<u32>)>,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // minimized
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;

    if cache.as_ref().map_or(true, |(s, _)| *s != size) {
        let mut frame_opts = *opts;
        frame_opts.width = size.width as i32;
        frame_opts.height = size.height as i32;
        let (rgba, _, _, _) = chart.render_to_rgba8(&frame_opts)?;
        debug!(width = size.width, height = size.height, "rendered frame");
        *cache = Some((size, rgba.chunks_exact(4).map(pack_pixel).collect()));
    }

    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("surface buffer: {e}"))?;
    if let Some((_, pixels)) = cache.as_ref() {
        for (dst, &src) in buffer.iter_mut().zip(pixels) {
            *dst = src;
        }
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

/// RGBA bytes to softbuffer's 0RGB word.
fn pack_pixel(px: &[u8]) -> u32 {
    let r = px[0] as u32;
    let g = px[1] as u32;
    let b = px[2] as u32;
    (r << 16) | (g << 8) | b
}
