use std::sync::{Arc, Mutex};

use sentencify_core::model::LessonId;
use services::LessonService;

pub trait UiApp: Send + Sync {
    fn lesson_service(&self) -> Arc<LessonService>;

    /// Lesson to open in the modal right after launch, if any.
    fn open_lesson_on_launch(&self) -> Option<LessonId>;
}

#[derive(Clone)]
pub struct AppContext {
    open_lesson_on_launch_configured: Option<LessonId>,
    open_lesson_on_launch_once: Arc<Mutex<Option<LessonId>>>,

    lesson_service: Arc<LessonService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let open_lesson_on_launch_configured = app.open_lesson_on_launch();
        let lesson_service = app.lesson_service();

        Self {
            open_lesson_on_launch_once: Arc::new(Mutex::new(
                open_lesson_on_launch_configured.clone(),
            )),
            open_lesson_on_launch_configured,
            lesson_service,
        }
    }

    /// Returns the launch lesson the first time it is called, `None` after.
    #[must_use]
    pub fn take_open_lesson_on_launch(&self) -> Option<LessonId> {
        self.open_lesson_on_launch_once
            .lock()
            .ok()
            .and_then(|mut once| once.take())
    }

    /// The configured value (not the one-shot value). Useful for diagnostics.
    #[must_use]
    pub fn open_lesson_on_launch_configured(&self) -> Option<&LessonId> {
        self.open_lesson_on_launch_configured.as_ref()
    }

    #[must_use]
    pub fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson_service)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sentencify_core::model::LessonId;
    use services::LessonService;
    use storage::repository::Storage;

    use super::{UiApp, build_app_context};

    struct FixedApp(Arc<LessonService>);

    impl UiApp for FixedApp {
        fn lesson_service(&self) -> Arc<LessonService> {
            Arc::clone(&self.0)
        }

        fn open_lesson_on_launch(&self) -> Option<LessonId> {
            Some(LessonId::new("simple"))
        }
    }

    #[test]
    fn launch_lesson_is_taken_once_across_clones() {
        let service = Arc::new(LessonService::from_storage(&Storage::builtin().unwrap()));
        let app: Arc<dyn UiApp> = Arc::new(FixedApp(service));
        let ctx = build_app_context(&app);
        let clone = ctx.clone();

        assert_eq!(ctx.take_open_lesson_on_launch(), Some(LessonId::new("simple")));
        assert_eq!(clone.take_open_lesson_on_launch(), None);
        assert_eq!(
            clone.open_lesson_on_launch_configured(),
            Some(&LessonId::new("simple"))
        );
    }
}
