use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="flex flex-wrap items-end justify-between gap-4 mb-6">
            <div>
                <h1 class="text-3xl font-bold">{props.title.clone()}</h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-base-content/70 mt-1">{subtitle.clone()}</p>
                }
            </div>
            {props.children.clone()}
        </div>
    }
}
