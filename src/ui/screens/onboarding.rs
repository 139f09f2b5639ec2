//! Onboarding screen that wraps the wizard.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

use crate::onboarding::{OnboardingStep, OnboardingWizard};
use crate::profile::types::{
    ActivityLevel, DietPreference, FitnessGoal, Gender, Profile, ProfileError,
};

/// Onboarding screen UI.
pub struct OnboardingScreen {
    /// Wizard controller
    wizard: OnboardingWizard,
    /// Error from the last failed finish attempt
    last_error: Option<ProfileError>,
}

impl Default for OnboardingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingScreen {
    /// Create a new onboarding screen.
    pub fn new() -> Self {
        Self {
            wizard: OnboardingWizard::new(),
            last_error: None,
        }
    }

    /// Restart the wizard, discarding collected fields.
    pub fn restart(&mut self) {
        self.wizard.restart();
        self.last_error = None;
    }

    /// Show the onboarding screen.
    ///
    /// Returns the finished profile once the user completes the flow.
    pub fn show(&mut self, ui: &mut Ui) -> Option<Profile> {
        let mut finished = None;

        self.show_header(ui);
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.add_space(16.0);

            let step = self.wizard.current_step();
            ui.heading(step.title());
            ui.label(RichText::new(step.description()).weak());
            ui.add_space(16.0);

            match step {
                OnboardingStep::Welcome => {}
                OnboardingStep::PersonalInfo => self.show_personal_info(ui),
                OnboardingStep::BodyMetrics => self.show_body_metrics(ui),
                OnboardingStep::Lifestyle => self.show_lifestyle(ui),
                OnboardingStep::Goals => self.show_goals(ui),
                OnboardingStep::Complete => {}
            }

            if let Some(error) = &self.last_error {
                ui.add_space(8.0);
                ui.colored_label(Color32::from_rgb(248, 113, 113), error.to_string());
            }

            ui.add_space(24.0);
            finished = self.show_navigation(ui);
        });

        finished
    }

    fn show_header(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Getting Started");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let state = self.wizard.state();
                ui.label(
                    RichText::new(format!("{}% complete", state.progress_percent()))
                        .size(14.0)
                        .color(Color32::GRAY),
                );

                let current_idx = self.wizard.current_step().index();
                for (i, _step) in OnboardingStep::all().iter().enumerate().rev() {
                    let color = if i < current_idx {
                        Color32::from_rgb(74, 222, 128) // completed
                    } else if i == current_idx {
                        Color32::from_rgb(59, 130, 246) // current
                    } else {
                        Color32::from_rgb(100, 100, 110) // pending
                    };

                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::new(20.0, 8.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, color);
                }
            });
        });
    }

    fn show_personal_info(&mut self, ui: &mut Ui) {
        let form = self.wizard.form_mut();

        ui.label("Full Name");
        ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Enter your full name"));
        ui.add_space(12.0);

        ui.label("Age");
        ui.add(egui::TextEdit::singleline(&mut form.age).hint_text("Enter your age"));
        ui.add_space(12.0);

        ui.label("Gender");
        ui.horizontal(|ui| {
            for gender in Gender::all() {
                ui.selectable_value(&mut form.gender, Some(*gender), gender.display_name());
            }
        });
    }

    fn show_body_metrics(&mut self, ui: &mut Ui) {
        let form = self.wizard.form_mut();

        ui.label("Height (cm)");
        ui.add(
            egui::TextEdit::singleline(&mut form.height_cm)
                .hint_text("Enter your height in centimeters"),
        );
        ui.add_space(12.0);

        ui.label("Weight (kg)");
        ui.add(
            egui::TextEdit::singleline(&mut form.weight_kg)
                .hint_text("Enter your weight in kilograms"),
        );
    }

    fn show_lifestyle(&mut self, ui: &mut Ui) {
        let form = self.wizard.form_mut();

        ui.label("Daily Routine");
        for level in ActivityLevel::all() {
            ui.selectable_value(&mut form.activity_level, Some(*level), level.display_name());
        }
        ui.add_space(12.0);

        ui.label("Food Preferences");
        ui.horizontal_wrapped(|ui| {
            for pref in DietPreference::all() {
                ui.selectable_value(&mut form.diet_preference, Some(*pref), pref.display_name());
            }
        });
    }

    fn show_goals(&mut self, ui: &mut Ui) {
        let form = self.wizard.form_mut();

        ui.label("Primary Fitness Goal");
        for goal in FitnessGoal::all() {
            let selected = form.fitness_goal == Some(*goal);
            let text = format!("{}\n{}", goal.display_name(), goal.description());
            if ui.selectable_label(selected, text).clicked() {
                form.fitness_goal = Some(*goal);
            }
        }
    }

    fn show_navigation(&mut self, ui: &mut Ui) -> Option<Profile> {
        let mut finished = None;
        let step = self.wizard.current_step();

        ui.horizontal(|ui| {
            let back_enabled = !step.is_first();
            if ui
                .add_enabled(back_enabled, egui::Button::new("Previous"))
                .clicked()
            {
                self.wizard.previous_step();
                self.last_error = None;
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if step.is_last() {
                    if ui.button("Open Dashboard").clicked() {
                        match self.wizard.finish() {
                            Ok(profile) => finished = Some(profile),
                            Err(error) => self.last_error = Some(error),
                        }
                    }
                } else {
                    let label = if step.next() == Some(OnboardingStep::Complete) {
                        "Complete"
                    } else {
                        "Next"
                    };
                    if ui
                        .add_enabled(self.wizard.can_advance(), egui::Button::new(label))
                        .clicked()
                    {
                        self.wizard.next_step();
                        self.last_error = None;
                    }
                }
            });
        });

        finished
    }
}
