//! Two-option slide button.

use dioxus::prelude::*;
use wtc_core::toggle::{Side, Toggle};

#[derive(Props, Clone, PartialEq)]
pub struct SlideButtonProps {
    #[props(default = "Option 1".to_string())]
    pub label_left: String,
    #[props(default = "Option 2".to_string())]
    pub label_right: String,
    #[props(default = "Option 1".to_string())]
    pub selected_label: String,
    /// Receives the label of the clicked option
    pub on_change: EventHandler<String>,
}

/// A pill-shaped switch with a highlight that slides under the selected option.
///
/// Both buttons are measured once mounted; the highlight takes the width of
/// the selected one. A new `selected_label` from the owner moves the highlight
/// without emitting `on_change`.
#[component]
pub fn SlideButton(props: SlideButtonProps) -> Element {
    let mut toggle = use_signal(|| {
        Toggle::new(&props.label_left, &props.label_right, &props.selected_label)
    });
    let on_change = props.on_change;

    // Follow the owner when it changes the selection
    let selected_label = props.selected_label.clone();
    use_effect(use_reactive!(|(selected_label,)| {
        toggle.write().set_selected(&selected_label);
    }));

    let indicator = toggle.read().indicator();
    let selected = toggle.read().selected_side();
    let indicator_style = format!(
        "position: absolute; top: 2px; bottom: 2px; left: {}px; width: {}px; border-radius: 999px; background: var(--toggle-indicator-color); transition: left 0.25s ease, width 0.25s ease;",
        indicator.offset + 2.0,
        indicator.width
    );
    let button_style = |side: Side| {
        let color = if selected == Some(side) {
            "var(--toggle-selected-color)"
        } else {
            "var(--toggle-label-color)"
        };
        format!(
            "position: relative; z-index: 1; border: none; background: transparent; padding: 6px 14px; cursor: pointer; font-size: 13px; color: {};",
            color
        )
    };
    let left_style = button_style(Side::Left);
    let right_style = button_style(Side::Right);
    let label_left = toggle.read().label(Side::Left).to_string();
    let label_right = toggle.read().label(Side::Right).to_string();

    rsx! {
        div {
            style: "position: relative; display: inline-flex; padding: 2px; border-radius: 999px; background: var(--toggle-track-color);",
            div { style: "{indicator_style}" }
            button {
                style: "{left_style}",
                onmounted: move |evt: MountedEvent| async move {
                    if let Ok(rect) = evt.get_client_rect().await {
                        toggle.write().measure(Side::Left, rect.width());
                    }
                },
                onclick: move |_| {
                    let label = toggle.write().select(Side::Left);
                    on_change.call(label);
                },
                "{label_left}"
            }
            button {
                style: "{right_style}",
                onmounted: move |evt: MountedEvent| async move {
                    if let Ok(rect) = evt.get_client_rect().await {
                        toggle.write().measure(Side::Right, rect.width());
                    }
                },
                onclick: move |_| {
                    let label = toggle.write().select(Side::Right);
                    on_change.call(label);
                },
                "{label_right}"
            }
        }
    }
}
