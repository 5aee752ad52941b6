use egui::Context as EguiContext;
use winit::window::Window;

use crate::controllers::playback::ChartData;
use crate::input::gui::error::GuiError;

/// Window surface the GUI app draws into.
pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window) -> Result<Self, GuiError>;

    /// Rasterizes the construction into the leftmost `view_width` pixels of
    /// the framebuffer.
    fn draw_construction(&mut self, chart: &ChartData, view_width: u32) -> Result<(), GuiError>;

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
}
