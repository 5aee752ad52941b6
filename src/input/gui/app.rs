use std::time::Instant;

use egui::{Color32, Context, Pos2, RichText, Sense, Stroke, Ui, pos2, vec2};
use egui_winit::State as EguiWinitState;
use tracing::trace;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::window::Window;

use crate::controllers::playback::{
    DeadlineTimer, PlaybackController, PlaybackKey, StatTarget,
};
use crate::core::actions::derive_statistics::SeriesPoint;
use crate::core::actions::rasterize_construction::pixel_to_data;
use crate::core::cantor::shapes::shape_at;
use crate::input::gui::error::GuiError;
use crate::input::gui::keys::playback_key;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use crate::presenters::panel::PanelPresenter;
use crate::presenters::tween::TWEEN_STEP_INTERVAL;

pub const SIDE_PANEL_WIDTH: f32 = 320.0;
const SERIES_CHART_HEIGHT: f32 = 120.0;
const GROWTH_COLOUR: Color32 = Color32::from_rgb(102, 126, 234);
const LENGTH_COLOUR: Color32 = Color32::from_rgb(240, 147, 251);

pub type GuiController = PlaybackController<PanelPresenter, DeadlineTimer>;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    presenter: T,
    controller: GuiController,
    last_tween_update: Instant,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: GuiController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        let mut app = Self {
            width: size.width,
            height: size.height,
            presenter,
            controller,
            last_tween_update: Instant::now(),
            egui_ctx,
            egui_state,
        };
        app.controller.refresh();
        app
    }

    /// Width in physical pixels of the construction view, left of the panel.
    fn view_width(&self) -> u32 {
        let panel = (SIDE_PANEL_WIDTH * self.egui_ctx.pixels_per_point()).ceil() as u32;
        self.width.saturating_sub(panel).max(1)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;
        self.presenter.resize(width, height)?;
        self.controller.presenter_mut().mark_chart_dirty();
        Ok(())
    }

    /// Steps statistic tweens up to `now`. Runs before every controller call
    /// so a retarget starts from a fresh clock.
    fn advance_tweens(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tween_update);
        self.last_tween_update = now;
        self.controller.presenter_mut().advance_stats(elapsed)
    }

    /// Fires every elapsed animation tick. Returns whether anything changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = self.advance_tweens(now);

        while let Some(handle) = self.controller.timer_mut().take_due(now) {
            changed |= self.controller.on_timer_fired(handle);
        }

        changed
    }

    /// Earliest instant the loop has to wake without input.
    pub fn next_wake(&self) -> Option<Instant> {
        let timer = self.controller.timer().next_deadline();
        let tween = self
            .controller
            .presenter()
            .is_animating_stats()
            .then(|| self.last_tween_update + TWEEN_STEP_INTERVAL);

        match (timer, tween) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.egui_ctx.wants_keyboard_input() {
            return false;
        }

        let Some(key) = playback_key(code) else {
            return false;
        };

        self.advance_tweens(Instant::now());
        trace!(?key, "shortcut");
        self.controller.handle_key(key)
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), GuiError> {
        if self.controller.presenter_mut().take_chart_dirty() {
            let view_width = self.view_width();
            if let Some(chart) = self.controller.presenter().chart() {
                self.presenter.draw_construction(chart, view_width)?;
            }
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let ctx = self.egui_ctx.clone();

        ctx.run(raw_input, |ctx| {
            egui::SidePanel::right("playback_panel")
                .exact_width(SIDE_PANEL_WIDTH)
                .resizable(false)
                .show(ctx, |ui| self.side_panel(ui));

            self.construction_overlay(ctx);
        })
    }

    fn side_panel(&mut self, ui: &mut Ui) {
        ui.heading("Cantor Set");
        ui.separator();

        let Some(controls) = self.controller.presenter().controls() else {
            return;
        };

        let mut iteration = controls.iteration.max(1);
        let slider = egui::Slider::new(&mut iteration, 1..=controls.max_iterations.max(1))
            .text("Iteration");
        if ui.add_enabled(controls.selection_enabled, slider).changed() {
            self.advance_tweens(Instant::now());
            self.controller.select_iteration(iteration);
        }

        let range = self.controller.state().speed_range();
        let mut speed = controls.speed;
        if ui
            .add(egui::Slider::new(&mut speed, range.min()..=range.max()).text("Speed"))
            .changed()
        {
            self.controller.set_speed(speed);
        }

        ui.horizontal(|ui| {
            let label = if controls.animating { "Pause" } else { "Play" };
            if ui.button(label).clicked() {
                self.advance_tweens(Instant::now());
                self.controller.toggle();
            }
            if ui.button("Reset").clicked() {
                self.advance_tweens(Instant::now());
                self.controller.reset();
            }
        });

        ui.separator();

        for &target in StatTarget::ALL {
            if let Some(text) = self.controller.presenter().stat_text(target) {
                ui.horizontal(|ui| {
                    ui.label(format!("{}:", target.label()));
                    ui.label(RichText::new(text).strong());
                });
            }
        }

        if let Some(chart) = self.controller.presenter().chart() {
            let max_index = chart.max_iterations.saturating_sub(1).max(1) as f64;
            let max_growth = (max_index * std::f64::consts::LN_2).max(f64::EPSILON);

            ui.separator();
            ui.label("Segment growth (ln count)");
            series_chart(ui, &chart.growth, max_index, max_growth, GROWTH_COLOUR);

            ui.label("Total length");
            series_chart(ui, &chart.length, max_index, 1.0, LENGTH_COLOUR);
        }

        ui.separator();
        for (key, action) in PlaybackKey::SHORTCUTS {
            ui.label(format!("{}: {}", key, action));
        }
    }

    fn construction_overlay(&self, ctx: &Context) {
        let Some(chart) = self.controller.presenter().chart() else {
            return;
        };

        egui::Area::new(egui::Id::new("construction_title"))
            .fixed_pos(pos2(12.0, 8.0))
            .show(ctx, |ui| {
                ui.label(RichText::new(&chart.title).strong().color(Color32::WHITE));
            });

        let Some(pointer) = ctx.input(|input| input.pointer.hover_pos()) else {
            return;
        };

        let pixels_per_point = ctx.pixels_per_point();
        let x = f64::from(pointer.x * pixels_per_point);
        let y = f64::from(pointer.y * pixels_per_point);
        let view_width = self.view_width();

        if x >= f64::from(view_width) {
            return;
        }

        let (data_x, data_y) = pixel_to_data(x, y, view_width, self.height, chart.max_iterations);

        if let Some(shape) = shape_at(&chart.construction, data_x, data_y) {
            egui::show_tooltip_at_pointer(ctx, egui::Id::new("construction_hover"), |ui| {
                ui.label(shape.hover_label());
            });
        }
    }
}

fn series_chart(ui: &mut Ui, points: &[SeriesPoint], x_max: f64, y_max: f64, colour: Color32) {
    let (response, painter) =
        ui.allocate_painter(vec2(ui.available_width(), SERIES_CHART_HEIGHT), Sense::hover());
    let rect = response.rect.shrink(6.0);

    painter.rect_filled(response.rect, 4.0, Color32::from_gray(28));

    let to_screen = |point: &SeriesPoint| -> Pos2 {
        pos2(
            rect.left() + (point.x / x_max) as f32 * rect.width(),
            rect.bottom() - (point.y / y_max) as f32 * rect.height(),
        )
    };

    for pair in points.windows(2) {
        painter.line_segment([to_screen(&pair[0]), to_screen(&pair[1])], Stroke::new(2.0, colour));
    }

    for point in points {
        painter.circle_filled(to_screen(point), 3.0, colour);
    }
}
