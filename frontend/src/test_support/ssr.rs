use leptos::*;

/// Renders a view to HTML inside a throwaway reactive runtime.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let runtime = create_runtime();
    let html = view().into_view().render_to_string().to_string();
    runtime.dispose();
    leptos_reactive::suppress_resource_load(false);
    html
}
