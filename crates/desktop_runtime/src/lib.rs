pub mod apps;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod finder;
pub mod gallery;
pub mod host;
pub mod interaction;
pub mod model;
pub mod navigation;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod transition;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{load_theme, persist_theme};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
