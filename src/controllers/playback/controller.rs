use tracing::{debug, trace};

use crate::controllers::playback::data::chart_data::{ChartData, ControlsView, StatTarget};
use crate::controllers::playback::input::PlaybackKey;
use crate::controllers::playback::ports::presenter::PlaybackPresenterPort;
use crate::controllers::playback::ports::timer::TimerPort;
use crate::core::actions::derive_statistics::{IterationStatistics, growth_series, length_series};
use crate::core::cantor::shapes::{construction_shapes, construction_title};
use crate::core::data::construction_history::ConstructionHistory;
use crate::core::playback::{
    PlaybackState, SpeedRange, StepDirection, TimerHandle, animation_delay,
};

/// Owns one viewing session: the precomputed construction, the playback
/// state, and the ports used to show them.
pub struct PlaybackController<P: PlaybackPresenterPort, T: TimerPort> {
    history: ConstructionHistory,
    state: PlaybackState,
    presenter: P,
    timer: T,
}

impl<P: PlaybackPresenterPort, T: TimerPort> PlaybackController<P, T> {
    pub fn new(
        history: ConstructionHistory,
        speed: u32,
        speed_range: SpeedRange,
        presenter: P,
        timer: T,
    ) -> Self {
        let state = PlaybackState::new(history.depth(), speed, speed_range);

        Self {
            history,
            state,
            presenter,
            timer,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &ConstructionHistory {
        &self.history
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Pushes the current iteration to every view.
    pub fn refresh(&mut self) {
        self.render();
    }

    pub fn toggle(&mut self) {
        if self.state.is_animating() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Starts animating. The first advance happens immediately; later ones
    /// follow the speed-derived delay.
    pub fn play(&mut self) {
        if self.state.is_animating() {
            return;
        }

        if let Some(stale) = self.state.begin_animation() {
            self.timer.cancel(stale);
        }

        debug!(
            iteration = self.state.current_iteration(),
            speed = self.state.speed(),
            "animation started"
        );

        self.tick();
    }

    pub fn pause(&mut self) {
        if !self.state.is_animating() {
            return;
        }

        if let Some(pending) = self.state.end_animation() {
            self.timer.cancel(pending);
        }

        debug!(iteration = self.state.current_iteration(), "animation paused");

        self.presenter.render_controls(self.controls_view());
    }

    pub fn reset(&mut self) {
        if let Some(pending) = self.state.reset() {
            self.timer.cancel(pending);
        }

        debug!("playback reset");

        self.render();
    }

    /// Manual step; ignored while animating and at either end of the range.
    pub fn step(&mut self, direction: StepDirection) -> bool {
        if !self.state.step(direction) {
            return false;
        }

        self.render();
        true
    }

    /// Direct iteration selection from the slider; ignored while animating.
    pub fn select_iteration(&mut self, iteration: usize) -> bool {
        if !self.state.select(iteration) {
            return false;
        }

        self.render();
        true
    }

    /// Takes effect from the next scheduled tick.
    pub fn set_speed(&mut self, speed: u32) {
        let applied = self.state.set_speed(speed);
        trace!(requested = speed, applied, "speed changed");

        self.presenter.render_controls(self.controls_view());
    }

    /// Host callback for an elapsed timer. Returns whether it advanced.
    pub fn on_timer_fired(&mut self, handle: TimerHandle) -> bool {
        if !self.state.claim_tick(handle) {
            trace!(?handle, "ignoring stale animation tick");
            return false;
        }

        self.tick();
        true
    }

    /// Keyboard shortcuts. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: PlaybackKey) -> bool {
        match key {
            PlaybackKey::TogglePlay => {
                self.toggle();
                true
            }
            PlaybackKey::Reset => {
                self.reset();
                true
            }
            PlaybackKey::StepForward => self.step(StepDirection::Forward),
            PlaybackKey::StepBack => self.step(StepDirection::Back),
        }
    }

    fn tick(&mut self) {
        let iteration = self.state.advance_wrapping();
        trace!(iteration, "animation advanced");

        self.render();

        let handle = self.timer.schedule(animation_delay(self.state.speed()));
        self.state.set_pending_timer(handle);
    }

    fn render(&mut self) {
        let shown = self.state.current_iteration().min(self.history.depth());
        let chart = self.chart_data(shown);

        self.presenter.render_chart(&chart);

        if let Some(stats) = IterationStatistics::derive(&self.history, shown.saturating_sub(1)) {
            for &target in StatTarget::ALL {
                self.presenter.render_text(
                    target,
                    target.value(&stats),
                    target.decimals(),
                    target.suffix(),
                );
            }
        }

        self.presenter.render_controls(self.controls_view());
    }

    #[must_use]
    pub fn chart_data(&self, shown: usize) -> ChartData {
        ChartData {
            title: construction_title(shown),
            max_iterations: self.state.max_iterations(),
            construction: construction_shapes(&self.history, shown, self.state.max_iterations()),
            growth: growth_series(&self.history, shown),
            length: length_series(&self.history, shown),
        }
    }

    #[must_use]
    pub fn controls_view(&self) -> ControlsView {
        ControlsView {
            iteration: self.state.current_iteration(),
            max_iterations: self.state.max_iterations(),
            selection_enabled: self.state.selection_enabled(),
            animating: self.state.is_animating(),
            speed: self.state.speed(),
        }
    }
}
