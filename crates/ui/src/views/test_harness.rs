use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::QuestionSet;
use services::{BuiltinQuestions, QuestionSource};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

#[derive(Clone)]
struct TestApp {
    questions: QuestionSet,
}

impl UiApp for TestApp {
    fn quiz_title(&self) -> String {
        "Test Quiz".to_string()
    }

    fn questions(&self) -> QuestionSet {
        self.questions.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
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

pub fn setup_view_harness(questions: QuestionSet) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { questions }),
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}

pub fn setup_builtin_harness() -> ViewHarness {
    setup_view_harness(BuiltinQuestions.load().expect("built-in questions"))
}
