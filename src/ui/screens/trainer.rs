//! AI trainer screen: simulated posture coaching during a workout.

use egui::{Align, Color32, Layout, Pos2, RichText, Stroke, Ui, Vec2};

use crate::trainer::session::{format_workout_time, Exercise, WorkoutSession};
use crate::ui::theme::{feedback_color, posture_rating_color, DarkTheme, Theme};

/// Action requested from the trainer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerAction {
    /// Start or pause the workout
    ToggleRecording,
    /// Reset all counters
    Reset,
    /// Return to the dashboard
    BackToDashboard,
}

/// Pose keypoints for the skeleton overlay, in a 0-100 coordinate space.
const SKELETON_POINTS: [(f32, f32); 15] = [
    (50.0, 15.0), // head
    (50.0, 25.0), // neck
    (40.0, 30.0), // left shoulder
    (60.0, 30.0), // right shoulder
    (35.0, 45.0), // left elbow
    (65.0, 45.0), // right elbow
    (30.0, 60.0), // left wrist
    (70.0, 60.0), // right wrist
    (50.0, 50.0), // spine
    (45.0, 65.0), // left hip
    (55.0, 65.0), // right hip
    (42.0, 80.0), // left knee
    (58.0, 80.0), // right knee
    (40.0, 95.0), // left ankle
    (60.0, 95.0), // right ankle
];

/// Keypoint index pairs joined by skeleton bones.
const SKELETON_CONNECTIONS: [(usize, usize); 14] = [
    (0, 1),   // head-neck
    (1, 2),   // neck-shoulders
    (1, 3),
    (2, 4),   // arms
    (3, 5),
    (4, 6),
    (5, 7),
    (1, 8),   // spine
    (8, 9),   // hips
    (8, 10),
    (9, 10),
    (9, 11),  // legs
    (10, 12),
    (11, 13),
];

/// Trainer screen UI.
pub struct TrainerScreen;

impl TrainerScreen {
    /// Render the trainer screen.
    pub fn show(ui: &mut Ui, session: &mut WorkoutSession, theme: Theme) -> Option<TrainerAction> {
        let mut action = None;

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading("AI Posture Coach");
            ui.label(
                RichText::new("Real-time posture detection and form correction powered by AI")
                    .weak(),
            );
        });
        ui.add_space(12.0);

        ui.columns(2, |cols| {
            Self::show_analysis_panel(&mut cols[0], session, theme);
            Self::show_sidebar(&mut cols[1], session, theme);
        });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                    let toggle_label = if session.is_running() {
                        "Stop Demo"
                    } else {
                        "Start Demo"
                    };
                    if ui
                        .add_sized(
                            Vec2::new(140.0, 40.0),
                            egui::Button::new(RichText::new(toggle_label).size(16.0)),
                        )
                        .clicked()
                    {
                        action = Some(TrainerAction::ToggleRecording);
                    }

                    if ui
                        .add_sized(Vec2::new(100.0, 40.0), egui::Button::new("Reset"))
                        .clicked()
                    {
                        action = Some(TrainerAction::Reset);
                    }

                    if ui
                        .add_sized(Vec2::new(100.0, 40.0), egui::Button::new("Dashboard"))
                        .clicked()
                    {
                        action = Some(TrainerAction::BackToDashboard);
                    }
                });
            });
        });

        action
    }

    fn show_analysis_panel(ui: &mut Ui, session: &WorkoutSession, theme: Theme) {
        ui.group(|ui| {
            let desired = Vec2::new(ui.available_width(), 280.0);
            let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
            let painter = ui.painter_at(rect);

            painter.rect_filled(rect, 8.0, Color32::from_rgb(17, 24, 39));

            if session.is_running() {
                Self::draw_skeleton(&painter, rect);

                painter.text(
                    rect.left_top() + Vec2::new(12.0, 12.0),
                    egui::Align2::LEFT_TOP,
                    "AI ANALYZING",
                    egui::FontId::proportional(13.0),
                    DarkTheme::ERROR,
                );
            } else {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Click \"Start Demo\" to see AI analysis in action",
                    egui::FontId::proportional(14.0),
                    Color32::GRAY,
                );
            }

            // Posture score overlay
            let score = session.posture_score();
            painter.text(
                rect.right_top() + Vec2::new(-12.0, 12.0),
                egui::Align2::RIGHT_TOP,
                format!("Posture {score}%"),
                egui::FontId::proportional(16.0),
                posture_rating_color(session.posture_rating(), Theme::Dark),
            );

            // Rep counter overlay
            painter.text(
                rect.left_bottom() + Vec2::new(12.0, -12.0),
                egui::Align2::LEFT_BOTTOM,
                format!("Reps {}", session.reps()),
                egui::FontId::proportional(16.0),
                DarkTheme::ACCENT,
            );
        });

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Feedback:").strong());
            ui.colored_label(
                feedback_color(session.feedback_kind(), theme),
                session.feedback(),
            );
        });
    }

    fn draw_skeleton(painter: &egui::Painter, rect: egui::Rect) {
        let scale = |x: f32, y: f32| -> Pos2 {
            Pos2::new(
                rect.left() + rect.width() * (x / 100.0),
                rect.top() + rect.height() * (y / 100.0),
            )
        };

        for (a, b) in SKELETON_CONNECTIONS {
            let (ax, ay) = SKELETON_POINTS[a];
            let (bx, by) = SKELETON_POINTS[b];
            painter.line_segment(
                [scale(ax, ay), scale(bx, by)],
                Stroke::new(2.0, DarkTheme::ACCENT),
            );
        }

        for (x, y) in SKELETON_POINTS {
            painter.circle_filled(scale(x, y), 3.0, DarkTheme::ACCENT_ALT);
        }
    }

    fn show_sidebar(ui: &mut Ui, session: &mut WorkoutSession, theme: Theme) {
        ui.heading("Current Exercise");
        ui.add_space(4.0);
        let mut selected = session.exercise();
        for exercise in Exercise::all() {
            if ui
                .selectable_value(&mut selected, *exercise, exercise.display_name())
                .clicked()
            {
                session.set_exercise(selected);
            }
        }

        ui.add_space(16.0);
        ui.heading("Live Metrics");
        ui.add_space(4.0);

        egui::Grid::new("live_metrics")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label("Workout Time");
                ui.label(
                    RichText::new(format_workout_time(session.elapsed()))
                        .strong()
                        .color(DarkTheme::ACCENT),
                );
                ui.end_row();

                ui.label("Calories Burnt");
                ui.label(RichText::new(session.calories().to_string()).strong());
                ui.end_row();

                ui.label("Total Reps");
                ui.label(RichText::new(session.reps().to_string()).strong());
                ui.end_row();

                ui.label("Avg. Form");
                ui.label(
                    RichText::new(format!(
                        "{}% ({})",
                        session.posture_score(),
                        session.posture_rating().label()
                    ))
                    .strong()
                    .color(posture_rating_color(session.posture_rating(), theme)),
                );
                ui.end_row();
            });
    }
}
