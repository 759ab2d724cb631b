use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use sentencify_core::model::{BuilderSettings, LessonId};
use services::LessonService;
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::HomeView;
use crate::views::lesson_modal::LessonTestHandles;
use crate::vm::LessonIntent;

#[derive(Clone)]
struct TestApp {
    lesson_service: Arc<LessonService>,
    open_lesson_on_launch: Option<LessonId>,
}

impl UiApp for TestApp {
    fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson_service)
    }

    fn open_lesson_on_launch(&self) -> Option<LessonId> {
        self.open_lesson_on_launch.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    lesson_handles: LessonTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.lesson_handles.clone());
    rsx! { HomeView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub lesson_service: Arc<LessonService>,
    pub lesson_handles: LessonTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: LessonIntent) {
        let dispatch = self.lesson_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn close_lesson(&mut self) {
        let close = self.lesson_handles.close();
        self.dom.in_runtime(|| close.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(open_lesson_on_launch: Option<&str>) -> ViewHarness {
    setup_view_harness_with_settings(open_lesson_on_launch, BuilderSettings::default())
}

pub fn setup_view_harness_with_settings(
    open_lesson_on_launch: Option<&str>,
    settings: BuilderSettings,
) -> ViewHarness {
    let storage = Storage::builtin().expect("built-in course");
    let lesson_service =
        Arc::new(LessonService::from_storage(&storage).with_settings(settings));
    let lesson_handles = LessonTestHandles::default();

    let app = Arc::new(TestApp {
        lesson_service: Arc::clone(&lesson_service),
        open_lesson_on_launch: open_lesson_on_launch.map(LessonId::new),
    });

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            lesson_handles: lesson_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        lesson_service,
        lesson_handles,
    }
}
