// web_app/components/common.rs - Reusable UI components
//
// Small building blocks for the inventory table. They hold no state of
// their own: values come in as signals and edits go out through callbacks.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

/// Error message line
///
/// Rendered below the table while an add attempt is rejected.
#[component]
pub fn ErrorMessage(
    /// The message to display
    message: String,
) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            {message}
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("button {}", class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Clickable icon, used for the per-row delete action
#[component]
pub fn IconButton(
    src: &'static str,
    alt: &'static str,
    on_click: Callback<()>,
    #[prop(default = 20)]
    size: u32,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            title=alt
            width=size.to_string()
            class="icon-button"
            on:click=move |_| on_click.run(())
        />
    }
}

/// Keydown handler that runs `on_enter` when Enter is pressed
fn enter_key(on_enter: Option<Callback<()>>) -> impl Fn(KeyboardEvent) + Copy + 'static {
    move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(handler) = on_enter {
                handler.run(());
            }
        }
    }
}

/// Text input component
///
/// Controlled input: shows `value` and reports every edit through `on_input`.
/// Enter triggers `on_enter` when given.
#[component]
pub fn TextInput(
    /// The current value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every keystroke
    on_input: Callback<String>,
    #[prop(optional)]
    on_enter: Option<Callback<()>>,
    /// Accessible label
    #[prop(default = "")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="text"
            aria-label=label
            class="text-input"
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:keydown=enter_key(on_enter)
        />
    }
}

/// Number input component
///
/// Uncontrolled: while a number is half typed (`1e`, `-`) the browser
/// reports an empty value, so writing the reported value back would wipe
/// the field. The text is left to the browser and only cleared when
/// `reset` changes.
#[component]
pub fn NumberInput(
    /// Bumped whenever the field should be emptied
    #[prop(into)]
    reset: Signal<u64>,
    /// Called with the browser's value on every keystroke
    on_input: Callback<String>,
    #[prop(optional)]
    on_enter: Option<Callback<()>>,
    #[prop(default = "")]
    label: &'static str,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        reset.track();
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    });

    view! {
        <input
            type="number"
            aria-label=label
            class="text-input"
            node_ref=input_ref
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:keydown=enter_key(on_enter)
        />
    }
}

/// Select dropdown component
///
/// A select for string values given as (value, label) pairs.
#[component]
pub fn SelectString(
    /// The currently selected value
    #[prop(into)]
    value: Signal<String>,
    /// Available options as (value, label) pairs
    options: Vec<(String, String)>,
    /// Called with the chosen value
    on_change: Callback<String>,
    #[prop(default = "")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <select
            class="select"
            aria-label=label
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options.into_iter().map(|(opt_value, label)| {
                let opt_val = opt_value.clone();
                view! {
                    <option
                        value=opt_value
                        selected=move || value.get() == opt_val
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Price display component
///
/// Shows an already formatted price, right-aligned in its cell.
#[component]
pub fn PriceDisplay(
    /// Price text, e.g. "23.11"
    price: String,
) -> impl IntoView {
    view! {
        <span class="price">{price}</span>
    }
}
