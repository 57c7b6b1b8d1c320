use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use super::{
    chat_view,
    practice_view,
    settings::{
        SettingsData,
        SettingsModal,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    capture,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        GradeLevel,
        StudyContext,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
    review::ReviewController,
    session::SessionController,
};

const BACKEND_CHECK_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Chat,
    Practice,
}

pub struct SomoApp {
    // UI State
    pub view: View,
    pub theme: Theme,

    // Study selection shared by both views
    pub grade: Option<GradeLevel>,
    pub subject: Option<String>,

    // Controllers
    pub session: SessionController,
    pub review: ReviewController,

    // Configuration
    pub settings: SettingsData,
    pub settings_modal: SettingsModal,

    // External services
    pub backend_connected: bool,
    pub last_backend_check: Option<Instant>,
    pub task_manager: TaskManager,
}

impl SomoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>("settings.json");
        let session =
            SessionController::new(capture::platform_backend(&settings.capture_locale));

        let app = Self {
            view: View::Chat,
            theme: Theme::default(),

            grade: None,
            subject: None,

            session,
            review: ReviewController::new(),

            settings,
            settings_modal: SettingsModal::new(),

            backend_connected: false,
            last_backend_check: None,
            task_manager: TaskManager::new(),
        };

        set_theme(&cc.egui_ctx, app.theme.clone());
        cc.egui_ctx.set_theme(if app.settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        app
    }

    pub fn study_context(&self) -> Option<StudyContext> {
        match (self.grade, self.subject.as_deref()) {
            (Some(grade), Some(subject)) => Some(StudyContext::new(grade, subject)),
            _ => None,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Answer { id, result } => self.session.handle_answer(id, result),
            TaskResult::Flashcards { id, result } => self.review.handle_deck(id, result),
            TaskResult::BackendStatus(connected) => self.backend_connected = connected,
        }
    }

    fn update_backend_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_backend_check {
            None => true,
            Some(last_check) => now.duration_since(last_check) >= BACKEND_CHECK_INTERVAL,
        };

        if should_check {
            self.task_manager.check_backend(self.settings.backend_url.clone());
            self.last_backend_check = Some(now);
        }
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark = ctx.theme() == egui::Theme::Dark;
        if dark != self.settings.dark_mode {
            self.settings.dark_mode = dark;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for SomoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();
        for result in task_results {
            self.handle_task_result(result);
        }

        self.session.poll_capture();

        let now = Instant::now();
        if self.review.tick(now) {
            ctx.request_repaint();
        }
        if let Some(remaining) = self.review.time_until_commit(now) {
            ctx.request_repaint_after(remaining);
        }

        self.update_backend_status();
        self.sync_theme_preference(ctx);

        TopBar::show(
            ctx,
            &mut self.view,
            &mut self.settings_modal,
            &self.settings,
            self.backend_connected,
        );

        match self.view {
            View::Chat => chat_view::show(ctx, self),
            View::Practice => practice_view::show(ctx, self),
        }

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.settings = settings;
            self.save_settings();
        }

        // Results and the status probe arrive between frames; keep a slow
        // repaint going so they are picked up without user input.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
