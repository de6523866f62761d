//! Reducer helpers for theme transitions.

use crate::{
    model::DesktopState,
    reducer::{DesktopAction, RuntimeEffect},
};

pub(super) fn reduce_appearance_action(
    state: &mut DesktopState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) {
    match action {
        DesktopAction::ToggleTheme => {
            state.theme = state.theme.toggled();
            effects.push(RuntimeEffect::ApplyTheme(state.theme));
            effects.push(RuntimeEffect::PersistTheme(state.theme));
        }
        DesktopAction::SetTheme { theme } => {
            state.theme = *theme;
            effects.push(RuntimeEffect::ApplyTheme(*theme));
            effects.push(RuntimeEffect::PersistTheme(*theme));
        }
        DesktopAction::HydrateTheme { theme } => {
            state.theme = *theme;
            effects.push(RuntimeEffect::ApplyTheme(*theme));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use platform_host::ThemePreference;
    use pretty_assertions::assert_eq;

    use crate::reducer::reduce_desktop;

    use super::*;

    #[test]
    fn toggle_theme_applies_and_persists() {
        let mut state = DesktopState::default();
        let effects = reduce_desktop(&mut state, DesktopAction::ToggleTheme);

        assert_eq!(state.theme, ThemePreference::Dark);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ApplyTheme(ThemePreference::Dark),
                RuntimeEffect::PersistTheme(ThemePreference::Dark),
            ]
        );
    }

    #[test]
    fn hydrate_theme_does_not_persist() {
        let mut state = DesktopState::default();
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::HydrateTheme {
                theme: ThemePreference::Dark,
            },
        );

        assert_eq!(state.theme, ThemePreference::Dark);
        assert_eq!(
            effects,
            vec![RuntimeEffect::ApplyTheme(ThemePreference::Dark)]
        );
    }

    #[test]
    fn set_theme_is_idempotent_on_state() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::SetTheme {
                theme: ThemePreference::Light,
            },
        );
        assert_eq!(state, DesktopState::default());
    }
}
