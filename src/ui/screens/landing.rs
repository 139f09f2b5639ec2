//! Landing screen implementation.

use egui::{RichText, Ui, Vec2};

use super::Screen;
use crate::ui::theme::DarkTheme;

/// Landing screen UI.
pub struct LandingScreen;

impl LandingScreen {
    /// Render the landing screen and return the next screen if navigation
    /// was requested.
    pub fn show(ui: &mut Ui, has_profile: bool) -> Option<Screen> {
        let mut next_screen = None;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);

            ui.label(
                RichText::new("FITFORM AI")
                    .size(56.0)
                    .strong()
                    .color(DarkTheme::ACCENT),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new("Smart Coaching for a Stronger You")
                    .size(22.0)
                    .strong(),
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(
                    "Transform your fitness journey with AI-powered personal training, \
                     real-time posture detection, and personalized nutrition plans \
                     tailored just for you.",
                )
                .size(15.0)
                .weak(),
            );

            ui.add_space(48.0);

            let button_size = Vec2::new(300.0, 56.0);

            if ui
                .add_sized(
                    button_size,
                    egui::Button::new(RichText::new("Start Your Fitness Journey").size(18.0)),
                )
                .clicked()
            {
                next_screen = Some(Screen::Onboarding);
            }

            if has_profile {
                ui.add_space(16.0);
                if ui
                    .add_sized(
                        button_size,
                        egui::Button::new(RichText::new("Go to Dashboard").size(18.0)),
                    )
                    .clicked()
                {
                    next_screen = Some(Screen::Dashboard);
                }
            }

            ui.add_space(48.0);
            ui.separator();
            ui.add_space(24.0);

            ui.columns(3, |cols| {
                cols[0].vertical_centered(|ui| {
                    ui.label(RichText::new("AI Posture Coach").strong());
                    ui.label(
                        RichText::new("Real-time form feedback while you train.").weak(),
                    );
                });
                cols[1].vertical_centered(|ui| {
                    ui.label(RichText::new("Personalized Nutrition").strong());
                    ui.label(
                        RichText::new("Calorie and macro targets built from your profile.")
                            .weak(),
                    );
                });
                cols[2].vertical_centered(|ui| {
                    ui.label(RichText::new("Goal-Based Plans").strong());
                    ui.label(
                        RichText::new("Coaching tips tuned to what you want to achieve.")
                            .weak(),
                    );
                });
            });
        });

        next_screen
    }
}
