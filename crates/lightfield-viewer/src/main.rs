//! Entry point for the light-field viewer application.

use anyhow::Result;
use clap::Parser;
use lightfield_viewer::{
    app::App,
    config::Config,
    timer::{RefreshTimer, REFRESH_INTERVAL},
    viewer::ViewerState,
};
use std::{sync::Arc, time::Instant};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

fn main() -> Result<()> {
    // Initialize logging; default to "info" if RUST_LOG is unset.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = Config::parse();
    log::debug!("Configuration: {:?}", config);

    // Create the event loop and window.
    let event_loop = EventLoop::new()?;
    let initial = ViewerState::default();
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Light Field Viewer")
            .with_inner_size(initial.size_hint())
            .with_min_inner_size(initial.minimum_size_hint())
            .build(&event_loop)?,
    );

    // Initialise the rendering surface and shader program (async → sync).
    let mut app = match pollster::block_on(App::new(window.clone(), &config)) {
        Ok(app) => app,
        Err(err) => {
            log::error!("Failed to initialise viewer: {:#}", err);
            return Err(err);
        }
    };

    if !config.views.is_empty() {
        if let Err(err) = app.load_paths(&window, &config.views) {
            log::error!("Failed to load light field: {:#}", err);
            return Err(err);
        }
    }

    let mut refresh = RefreshTimer::new(REFRESH_INTERVAL, Instant::now());

    // Run the winit event loop.
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => {
                // Forward events to the app; handle unconsumed window events.
                if !app.handle_event(&window, &event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::KeyboardInput { event, .. } => {
                            if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                                elwt.exit();
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            match app.render(&window) {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost) => {
                                    app.resize(app.renderer.gfx.size);
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    log::error!("WGPU out of memory – exiting.");
                                    elwt.exit();
                                }
                                Err(e) => log::error!("Render error: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                // Redraw on every tick, whether or not anything changed.
                if refresh.poll(Instant::now()) {
                    window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(refresh.deadline()));
            }
            _ => {}
        }
    })?;

    Ok(())
}
