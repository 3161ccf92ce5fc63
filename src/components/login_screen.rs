use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_create: Callback<String>,
    pub on_load: Callback<String>,
    pub busy: bool,
}

/// Entry view: one username box, create or load. Empty input is rejected by
/// the session controller before any network call.
#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let username_ref = use_node_ref();

    let on_create = {
        let username_ref = username_ref.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| {
            on_create.emit(input_value(&username_ref));
        })
    };

    let on_load = {
        let username_ref = username_ref.clone();
        let on_load = props.on_load.clone();
        Callback::from(move |_: MouseEvent| {
            on_load.emit(input_value(&username_ref));
        })
    };

    // Enter behaves like "Load User", the common path for returning users.
    let on_keydown = {
        let username_ref = username_ref.clone();
        let on_load = props.on_load.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_load.emit(input_value(&username_ref));
            }
        })
    };

    html! {
        <div class="login-card">
            <h1>{"🚇 Transit Tracker"}</h1>
            <p>{"Routes, live vehicles and service alerts"}</p>

            <input
                type="text"
                id="username"
                placeholder="Enter your username"
                ref={username_ref}
                onkeydown={on_keydown}
                disabled={props.busy}
            />

            <div class="login-actions">
                <button onclick={on_create} disabled={props.busy}>{"Create User"}</button>
                <button onclick={on_load} disabled={props.busy}>{"Load User"}</button>
            </div>
        </div>
    }
}

fn input_value(input: &NodeRef) -> String {
    input
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}
