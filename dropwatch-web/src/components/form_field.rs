use shared::validation::FieldErrors;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Message for `field`, if the last validation rejected it.
pub fn field_error(errors: Option<&FieldErrors>, field: &str) -> Option<String> {
    errors.and_then(|errors| errors.get(field)).map(ToString::to_string)
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Labelled input with its validation message underneath.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let callback = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                callback.emit(input.value());
            }
        })
    };
    let invalid = props.error.is_some();

    html! {
        <div class="form-control w-full">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{props.label.clone()}</span>
            </label>
            <input
                id={props.id.clone()}
                class={classes!("input", "input-bordered", "w-full", invalid.then_some("input-error"))}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                disabled={props.disabled}
                aria-invalid={invalid.to_string()}
                {oninput}
            />
            if let Some(error) = &props.error {
                <p class="text-error text-sm mt-1">{error.clone()}</p>
            }
        </div>
    }
}
