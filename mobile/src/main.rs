use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::views::Compare;
use ui::Theme;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
    #[route("/")]
    Compare {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        Theme {}

        Router::<Route> {}
    }
}

/// A mobile-specific Router layout around the shared `AppNavbar` component.
#[component]
fn MobileNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
