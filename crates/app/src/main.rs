use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use sentencify_core::model::LessonId;
use services::LessonService;
use storage::repository::Storage;
use tracing::info;
use ui::{App, UiApp, build_app_context};

mod cli;
mod logging;

use crate::cli::Cli;
use crate::logging::init_logging;

struct DesktopApp {
    lesson_service: Arc<LessonService>,
    open_lesson_on_launch: Option<LessonId>,
}

impl UiApp for DesktopApp {
    fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson_service)
    }

    fn open_lesson_on_launch(&self) -> Option<LessonId> {
        self.open_lesson_on_launch.clone()
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let settings = cli.builder_settings().context("invalid --slots value")?;
    let storage = Storage::builtin().context("failed to load the built-in course")?;
    let lesson_service = LessonService::from_storage(&storage).with_settings(settings);

    if let Some(id) = &cli.lesson {
        let lessons = lesson_service.list_lessons()?;
        if !lessons.iter().any(|lesson| lesson.id() == id) {
            bail!("unknown lesson `{id}`");
        }
    }

    info!(
        slots = settings.slot_count(),
        shuffle = settings.shuffle_parts(),
        lesson = cli.lesson.as_ref().map(LessonId::as_str),
        "starting sentencify"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        lesson_service: Arc::new(lesson_service),
        open_lesson_on_launch: cli.lesson,
    });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Sentencify")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(2);
    }
}
