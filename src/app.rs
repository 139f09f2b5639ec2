//! Main application state and egui integration.

use std::time::Duration;

use eframe::egui;

use crossbeam::channel::Receiver;
use fitform::metrics::engine::HealthSummary;
use fitform::profile::ProfileStore;
use fitform::storage::config::{self, AppConfig};
use fitform::trainer::signal::{PostureSignal, PostureSignalSource, SimulatedPostureSource};
use fitform::trainer::WorkoutSession;
use fitform::ui::screens::{
    DashboardAction, DashboardScreen, LandingScreen, OnboardingScreen, Screen, TrainerAction,
    TrainerScreen,
};
use fitform::ui::theme::Theme;

/// Main application state.
pub struct FitFormApp {
    /// Current screen
    screen: Screen,
    /// UI theme
    theme: Theme,
    /// Application configuration
    config: AppConfig,
    /// Session profile store
    profile_store: ProfileStore,
    /// Onboarding wizard screen
    onboarding: OnboardingScreen,
    /// Trainer workout state
    session: WorkoutSession,
    /// Simulated posture signal generator
    signal_source: SimulatedPostureSource,
    /// Live signal channel while a workout is recording
    signal_rx: Option<Receiver<PostureSignal>>,
}

impl FitFormApp {
    /// Create the application, loading configuration and applying the theme.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = match config::load_config() {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, "failed to load config, using defaults");
                AppConfig::default()
            }
        };

        let theme = config.ui.theme.unwrap_or_else(Theme::from_system);
        cc.egui_ctx.set_visuals(theme.visuals());
        if (config.ui.font_scale - 1.0).abs() > f32::EPSILON {
            cc.egui_ctx.set_zoom_factor(config.ui.font_scale);
        }

        let signal_source = SimulatedPostureSource::with_intervals(
            config.trainer.rep_interval(),
            config.trainer.feedback_interval(),
        );

        Self {
            screen: Screen::Landing,
            theme,
            config,
            profile_store: ProfileStore::new(),
            onboarding: OnboardingScreen::new(),
            session: WorkoutSession::new(),
            signal_source,
            signal_rx: None,
        }
    }

    /// Fold any pending posture signals into the session.
    fn drain_signals(&mut self) {
        if let Some(rx) = &self.signal_rx {
            for signal in rx.try_iter() {
                self.session.apply(signal);
            }
        }
    }

    fn toggle_recording(&mut self) {
        if self.session.is_running() {
            self.session.pause();
            self.signal_source.stop();
            self.signal_rx = None;
        } else {
            self.signal_rx = Some(self.signal_source.start());
            self.session.start();
        }
    }

    fn reset_workout(&mut self) {
        self.signal_source.stop();
        self.signal_rx = None;
        self.session.reset();
    }
}

impl eframe::App for FitFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_signals();

        // Keep the workout clock ticking while recording
        if self.session.is_running() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        // The dashboard requires a profile; absent means onboarding first
        if self.screen == Screen::Dashboard && !self.profile_store.is_set() {
            tracing::debug!("no session profile, redirecting to onboarding");
            self.screen = Screen::Onboarding;
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Landing => {
                if let Some(next) = LandingScreen::show(ui, self.profile_store.is_set()) {
                    self.screen = next;
                }
            }
            Screen::Onboarding => {
                if let Some(profile) = self.onboarding.show(ui) {
                    self.profile_store.set(profile);
                    self.screen = Screen::Dashboard;
                }
            }
            Screen::Dashboard => {
                let action = match self.profile_store.get() {
                    Some(profile) => {
                        let summary = HealthSummary::for_profile(profile);
                        DashboardScreen::show(
                            ui,
                            profile,
                            &summary,
                            self.config.ui.show_macro_chart,
                        )
                    }
                    None => None,
                };

                match action {
                    Some(DashboardAction::OpenTrainer) => self.screen = Screen::Trainer,
                    Some(DashboardAction::EditProfile) => {
                        self.profile_store.clear();
                        self.onboarding.restart();
                        self.screen = Screen::Onboarding;
                    }
                    None => {}
                }
            }
            Screen::Trainer => {
                match TrainerScreen::show(ui, &mut self.session, self.theme) {
                    Some(TrainerAction::ToggleRecording) => self.toggle_recording(),
                    Some(TrainerAction::Reset) => self.reset_workout(),
                    Some(TrainerAction::BackToDashboard) => self.screen = Screen::Dashboard,
                    None => {}
                }
            }
        });
    }
}
