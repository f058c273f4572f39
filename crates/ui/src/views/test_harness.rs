use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, CalculatorService};
use storage::repository::{CalculationRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::CalculatorView;

#[derive(Clone)]
struct TestApp {
    open_dialog_on_launch: bool,
    calculator: Arc<CalculatorService>,
}

impl UiApp for TestApp {
    fn open_dialog_on_launch(&self) -> bool {
        self.open_dialog_on_launch
    }

    fn calculator(&self) -> Arc<CalculatorService> {
        Arc::clone(&self.calculator)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn CalculatorHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { CalculatorView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub calculator: Arc<CalculatorService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
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

pub fn setup_view_harness(open_dialog_on_launch: bool) -> ViewHarness {
    setup_view_harness_with_storage(open_dialog_on_launch, Storage::in_memory())
}

pub fn setup_view_harness_with_repo(
    open_dialog_on_launch: bool,
    calculations: Arc<dyn CalculationRepository>,
) -> ViewHarness {
    setup_view_harness_with_storage(open_dialog_on_launch, Storage { calculations })
}

fn setup_view_harness_with_storage(open_dialog_on_launch: bool, storage: Storage) -> ViewHarness {
    let calculator = AppServices::new(&storage).calculator();

    let app = Arc::new(TestApp {
        open_dialog_on_launch,
        calculator: Arc::clone(&calculator),
    });
    let dom = VirtualDom::new_with_props(CalculatorHarness, ViewHarnessProps { app });

    ViewHarness {
        dom,
        storage,
        calculator,
    }
}
