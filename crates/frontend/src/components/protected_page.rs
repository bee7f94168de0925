//! Guard for pages that need a stored session

use crate::browser::WindowNavigator;
use crate::components::LoadingSpinner;
use crate::session::decision_for;
use rota_core::{GuardDecision, Navigator};
use yew::prelude::*;
use yew_router::hooks::use_location;

#[derive(Properties, PartialEq)]
pub struct ProtectedPageProps {
    pub children: Children,
}

/// Renders its children only when the stored session may view the current path.
///
/// Otherwise nothing of the page is rendered and the browser is sent to the
/// redirect target. The router reuses this component across routes, so the
/// decision is taken again on every render for the current location.
#[function_component(ProtectedPage)]
pub fn protected_page(props: &ProtectedPageProps) -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| WindowNavigator.current_path());
    let decision = decision_for(&path);

    use_effect_with(decision.clone(), |decision| {
        if let GuardDecision::Redirect(target) = decision {
            WindowNavigator.navigate(target);
        }
    });

    match decision {
        GuardDecision::Allow => html! { <>{ props.children.clone() }</> },
        GuardDecision::Redirect(_) => html! {
            <LoadingSpinner text={Some("Redirecting...".to_string())} />
        },
    }
}
