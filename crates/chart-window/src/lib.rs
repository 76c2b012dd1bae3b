// File: crates/chart-window/src/lib.rs
// Summary: Blocking chart window: renders chart-core to a window via RGBA blit (CPU) using winit + softbuffer.
// Controls: left-drag pans, wheel zooms at the cursor, R/Home resets, A refits y, Esc/Q or close dismisses.

pub mod viewer;

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use chart_core::{Chart, RenderOptions};
use tracing::{debug, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

pub use viewer::Viewer;

/// Open a window titled `title` showing `chart` and block until the user dismisses it.
pub fn show(chart: Chart, opts: RenderOptions, title: &str) -> Result<()> {
    let mut viewer = Viewer::new(chart, opts);
    let (w, h) = viewer.size();

    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(w, h))
        .build(&event_loop)
        .map_err(|e| anyhow!("failed to create chart window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let size = window.inner_size();
    viewer.resize(size.width, size.height);
    info!(width = size.width, height = size.height, title, "chart window opened");

    let mut failure: Option<anyhow::Error> = None;

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        let mut redraw = false;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    viewer.resize(new_size.width, new_size.height);
                    redraw = true;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    viewer.cursor_moved(position.x, position.y);
                    redraw = true;
                }
                WindowEvent::CursorLeft { .. } => {
                    viewer.cursor_left();
                    redraw = true;
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                    ElementState::Pressed => viewer.begin_drag(),
                    ElementState::Released => viewer.end_drag(),
                },
                WindowEvent::MouseWheel { delta, .. } => {
                    match delta {
                        MouseScrollDelta::LineDelta(_, y) => viewer.scroll_lines(y as f64),
                        MouseScrollDelta::PixelDelta(p) => viewer.scroll_pixels(p.y),
                    }
                    redraw = true;
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape | VirtualKeyCode::Q => *control_flow = ControlFlow::Exit,
                    VirtualKeyCode::R | VirtualKeyCode::Home => {
                        viewer.reset();
                        redraw = true;
                    }
                    VirtualKeyCode::A => {
                        redraw = viewer.fit_y();
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                if let Err(e) = present(&mut surface, &mut viewer) {
                    failure = Some(e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
        if redraw {
            window.request_redraw();
        }
    });

    debug!("chart window closed");
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn present(surface: &mut softbuffer::Surface, viewer: &mut Viewer) -> Result<()> {
    let (w, h) = viewer.size();
    let (nw, nh) = match (NonZeroU32::new(w), NonZeroU32::new(h)) {
        (Some(nw), Some(nh)) => (nw, nh),
        // minimized
        _ => return Ok(()),
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize surface: {e}"))?;

    let pixels = viewer.frame()?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("map surface buffer: {e}"))?;
    let n = buffer.len().min(pixels.len());
    buffer[..n].copy_from_slice(&pixels[..n]);
    buffer.present().map_err(|e| anyhow!("present frame: {e}"))?;
    Ok(())
}
