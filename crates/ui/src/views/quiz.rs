use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{ChoiceVm, QuestionScreenVm, QuizIntent, QuizScreen, QuizVm, ResultsScreenVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| QuizVm::new(ctx.start_quiz()));

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        // The controller rejects out-of-order intents; the UI just keeps its current state.
        if let Err(err) = vm.write().apply(intent) {
            tracing::warn!(?intent, %err, "quiz intent rejected");
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let screen = vm.read().screen();

    rsx! {
        div { class: "page quiz-page",
            match screen {
                QuizScreen::Question(question) => rsx! {
                    QuestionPanel { screen: question, on_intent: dispatch_intent }
                },
                QuizScreen::Results(results) => rsx! {
                    ResultsPanel { screen: results, on_intent: dispatch_intent }
                },
            }
        }
    }
}

#[component]
fn QuestionPanel(screen: QuestionScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let choices = screen.choices.iter().map(|choice| {
        rsx! {
            ChoiceItem { key: "{choice.index}", choice: choice.clone(), on_intent }
        }
    });

    rsx! {
        section { class: "quiz-question", id: "question-container",
            p { class: "quiz-progress", id: "progress", "{screen.progress_label}" }
            h2 { class: "quiz-question-text", id: "question", "{screen.text}" }
            ul { class: "quiz-choices", id: "choices",
                {choices}
            }
            div { class: "quiz-footer",
                span { class: "quiz-score", "{screen.score_label}" }
                button {
                    class: "btn btn-primary",
                    id: "next-btn",
                    r#type: "button",
                    disabled: !screen.can_advance,
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{screen.next_label}"
                }
            }
        }
    }
}

#[component]
fn ChoiceItem(choice: ChoiceVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = choice.index;
    let selectable = choice.state.is_selectable();

    rsx! {
        li {
            class: "{choice.state.class()}",
            "data-index": "{index}",
            onclick: move |_| {
                if selectable {
                    on_intent.call(QuizIntent::Select(index));
                }
            },
            "{choice.label}"
        }
    }
}

#[component]
fn ResultsPanel(screen: ResultsScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-results", id: "results-container",
            h2 { "Results" }
            p { class: "quiz-results-summary", id: "results", "{screen.summary_label}" }
            p { class: "quiz-results-percent", "{screen.percent_label}" }
            button {
                class: "btn btn-primary",
                id: "restart-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Restart Quiz"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
