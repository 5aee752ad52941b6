use std::time::Instant;

use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::config::AppConfig;
use crate::controllers::playback::{DeadlineTimer, PlaybackController};
use crate::core::actions::generate_construction::generate_construction;
use crate::core::data::interval::Interval;
use crate::input::gui::app::GuiApp;
use crate::input::gui::error::GuiError;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use crate::presenters::panel::PanelPresenter;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the viewer window and blocks until it is closed.
pub fn run_gui(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let history = generate_construction(Interval::UNIT, config.max_iterations)?;
    let speed_range = config.speed_range()?;

    let event_loop = EventLoop::new().map_err(GuiError::from)?;

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Cantor Set Construction")
            .with_inner_size(LogicalSize::new(
                f64::from(config.window_width),
                f64::from(config.window_height),
            ))
            .with_min_inner_size(LogicalSize::new(480.0, 320.0))
            .build(&event_loop)
            .map_err(GuiError::from)?,
    ));

    let presenter = PixelsPresenter::new(window)?;
    let controller = PlaybackController::new(
        history,
        config.speed,
        speed_range,
        PanelPresenter::new(),
        DeadlineTimer::new(),
    );
    let mut app = GuiApp::new(window, &event_loop, presenter, controller);

    info!(
        max_iterations = config.max_iterations,
        speed = config.speed,
        "viewer started"
    );

    let mut redraw_pending = true;
    let mut failure: Option<GuiError> = None;

    event_loop
        .run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);
                redraw_pending |= egui_repaint;

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let mut egui_output = app.update_ui(window);
                        let platform_output = std::mem::take(&mut egui_output.platform_output);
                        app.egui_state.handle_platform_output(window, platform_output);

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|viewport| viewport.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            error!(error = %err, "render failed");
                            failure = Some(err);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = app.resize(size.width, size.height) {
                            error!(error = %err, "resize failed");
                            failure = Some(err);
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = app.resize(size.width, size.height) {
                            failure = Some(err);
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(code),
                                state: ElementState::Pressed,
                                repeat: false,
                                ..
                            },
                        ..
                    } if !egui_consumed => {
                        redraw_pending |= app.handle_key(*code);
                    }
                    _ => {
                        if egui_consumed {
                            redraw_pending = true;
                        }
                    }
                }
            }
            Event::AboutToWait => {
                redraw_pending |= app.poll(Instant::now());

                if redraw_pending {
                    window.request_redraw();
                }

                match app.next_wake() {
                    Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
                    None => elwt.set_control_flow(ControlFlow::Wait),
                }
            }
            _ => {}
        })
        .map_err(GuiError::from)?;

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
