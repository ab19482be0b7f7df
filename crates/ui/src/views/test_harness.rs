use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quizdeck_core::model::Deck;
use quizdeck_core::{AppIntent, AppState, DragRelease, SessionIntent, seed_decks};

use super::Shell;
use super::deck_session::SessionTestHandles;
use super::shell::dispatch_app_intent;

#[derive(Clone, Default)]
struct StateHandle(Rc<RefCell<Option<Signal<AppState>>>>);

#[derive(Props, Clone)]
struct ShellRootProps {
    decks: Vec<Deck>,
    state: StateHandle,
    session: SessionTestHandles,
}

impl PartialEq for ShellRootProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ShellRootProps {}

#[component]
fn ShellRoot(props: ShellRootProps) -> Element {
    let state = use_context_provider(|| Signal::new(AppState::new(props.decks.clone())));
    use_context_provider(|| props.session.clone());
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.state.0.borrow_mut() = Some(state);
    }
    rsx! { Shell { title: "QuizDeck" } }
}

pub struct ShellHarness {
    pub dom: VirtualDom,
    state: StateHandle,
    session: SessionTestHandles,
}

impl ShellHarness {
    pub fn new(decks: Vec<Deck>) -> Self {
        let state = StateHandle::default();
        let session = SessionTestHandles::default();
        let mut dom = VirtualDom::new_with_props(
            ShellRoot,
            ShellRootProps {
                decks,
                state: state.clone(),
                session: session.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom, state, session }
    }

    pub fn seeded() -> Self {
        Self::new(seed_decks().expect("seed decks"))
    }

    fn signal(&self) -> Signal<AppState> {
        (*self.state.0.borrow()).expect("app state registered")
    }

    pub fn state(&self) -> AppState {
        let signal = self.signal();
        self.dom.in_runtime(|| signal.peek().clone())
    }

    pub fn dispatch(&mut self, intent: AppIntent) {
        let signal = self.signal();
        self.dom.in_runtime(|| dispatch_app_intent(signal, intent));
        drive_dom(&mut self.dom);
    }

    /// Requires an open deck.
    pub fn dispatch_session(&mut self, intent: SessionIntent) {
        let dispatch = self.session.get().dispatch;
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// What the card wrapper reports when a pointer press ends.
    pub fn release_drag(&mut self, release: DragRelease) {
        let release_drag = self.session.get().release_drag;
        self.dom.in_runtime(|| release_drag.call(release));
        drive_dom(&mut self.dom);
    }

    /// What a click on the card body reports.
    pub fn click_card(&mut self) {
        let flip_card = self.session.get().flip_card;
        self.dom.in_runtime(|| flip_card.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn current_index(&self) -> usize {
        let session = self.session.get().session;
        self.dom.in_runtime(|| session.peek().current_index())
    }

    /// Let queued effects run and re-render what they touched.
    pub async fn settle(&mut self) {
        for _ in 0..2 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            drive_dom(&mut self.dom);
        }
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

/// The markup of the `div` carrying `class_attr`, nested elements included.
pub fn div_markup<'a>(html: &'a str, class_attr: &str) -> &'a str {
    let marker = format!("class=\"{class_attr}\"");
    let at = html.find(&marker).expect("element rendered");
    let start = html[..at].rfind("<div").expect("element is a div");
    let mut depth = 0usize;
    let mut cursor = start;
    loop {
        let open = html[cursor..].find("<div").map(|i| cursor + i);
        let close = html[cursor..].find("</div>").map(|i| cursor + i).expect("div closes");
        match open {
            Some(open) if open < close => {
                depth += 1;
                cursor = open + 4;
            }
            _ => {
                depth -= 1;
                cursor = close + 6;
                if depth == 0 {
                    return &html[start..cursor];
                }
            }
        }
    }
}
