//! Runtime-effect dispatch for the desktop host boundary.

use leptos::{logging, spawn_local};
use platform_host_web::apply_document_theme;

use crate::{host::DesktopHostContext, persistence, reducer::RuntimeEffect};

pub(super) fn run_runtime_effect(host: DesktopHostContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::PersistTheme(theme) => spawn_local(async move {
            if let Err(err) = persistence::persist_theme(&host, theme).await {
                logging::warn!("theme persist failed: {err}");
            }
        }),
        RuntimeEffect::ApplyTheme(theme) => {
            if let Err(err) = apply_document_theme(theme) {
                logging::warn!("theme apply failed: {err}");
            }
        }
        RuntimeEffect::OpenExternalUrl(url) => spawn_local(async move {
            if let Err(err) = host.external_url_service().open_url(&url).await {
                logging::warn!("open external url `{url}` failed: {err}");
            }
        }),
        RuntimeEffect::NavigateExternal(url) => spawn_local(async move {
            if let Err(err) = host.external_url_service().navigate(&url).await {
                logging::warn!("navigate to `{url}` failed: {err}");
            }
        }),
    }
}
