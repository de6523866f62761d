use portfolio_assistant::PERSONAL_INFO;

use super::*;

const PROMPT: &str = "$";

#[component]
pub(super) fn TerminalWindow() -> impl IntoView {
    view! {
        <WindowContainer window_id=WindowId::Terminal title=move || "Skills".to_string() class="terminal-window">
            <div class="terminal">
                <p class="terminal-line">
                    <span class="terminal-prompt">{PROMPT}</span>
                    " show skills"
                </p>
                {PERSONAL_INFO
                    .skills
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="terminal-group">
                                <p class="terminal-label">{format!("✔ {}", group.label)}</p>
                                <p class="terminal-items">{group.items.join(", ")}</p>
                            </div>
                        }
                    })
                    .collect_view()}
                <p class="terminal-footer">
                    {format!("{} skill groups loaded", PERSONAL_INFO.skills.len())}
                </p>
            </div>
        </WindowContainer>
    }
}
