use crate::theme::CHECKBOX_ID;
use leptos::*;

/// Switch markup the theme bindings attach to. The input carries the id the
/// bindings look up, so pages rendered with this component need no extra wiring.
#[component]
pub fn ThemeSwitch(
    #[prop(optional, into)] checkbox_id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let checkbox_id = checkbox_id.unwrap_or_else(|| CHECKBOX_ID.to_string());
    let label = label.unwrap_or_else(|| "Dark mode".to_string());

    view! {
        <label class="theme-switch" for=checkbox_id.clone()>
            <input type="checkbox" id=checkbox_id/>
            <span class="slider round"></span>
            <span class="sr-only">{label}</span>
        </label>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_checkbox_with_default_id() {
        let html = render_to_string(move || view! { <ThemeSwitch/> });
        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("id=\"checkbox\""));
        assert!(html.contains("Dark mode"));
        assert!(!html.contains("aria-label"));
    }

    #[test]
    fn renders_custom_id_and_label() {
        let html = render_to_string(move || {
            view! { <ThemeSwitch checkbox_id="site-theme" label="Night reading"/> }
        });
        assert!(html.contains("id=\"site-theme\""));
        assert!(html.contains("for=\"site-theme\""));
        assert!(html.contains("Night reading"));
        assert!(!html.contains("id=\"checkbox\""));
    }
}
