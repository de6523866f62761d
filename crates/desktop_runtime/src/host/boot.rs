use leptos::{logging, spawn_local};
use platform_host_web::system_prefers_dark;

use crate::{
    host::DesktopHostContext, persistence, reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn install_boot_hydration(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    spawn_local(async move {
        let theme = persistence::load_theme(&host, system_prefers_dark()).await;
        logging::log!("desktop boot theme: {theme}");
        runtime.dispatch_action(DesktopAction::HydrateTheme { theme });
    });
}
