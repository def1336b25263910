// ui/src/components/currency_dropdown.rs
#![allow(non_snake_case)]

use api::currency::Currency;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// Which selector, if any, is open.
///
/// A single tagged value instead of two booleans, so "opening one side
/// closes the other" holds structurally.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DropdownSelection {
    #[default]
    None,
    From,
    To,
}

impl DropdownSelection {
    /// The state after clicking the toggle button for `side`.
    pub fn toggled(self, side: Self) -> Self {
        if self == side {
            Self::None
        } else {
            side
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CurrencyDropdownProps {
    /// The currency currently shown on the toggle button.
    pub selected: Currency,
    /// Whether this dropdown's list is open.
    pub open: bool,
    pub on_toggle: EventHandler<()>,
    pub on_select: EventHandler<Currency>,
}

/// A dropdown selector over the fixed currency catalog.
pub fn CurrencyDropdown(props: CurrencyDropdownProps) -> Element {
    let chevron_style = if props.open {
        "transition: transform 0.3s; transform: rotate(180deg);"
    } else {
        "transition: transform 0.3s;"
    };

    rsx! {
        div {
            // Above the outside-click backdrop so the toggle stays reachable.
            style: "position: relative; z-index: 10;",
            button {
                class: "secondary outline",
                style: "display: flex; align-items: center; gap: 0.5rem; width: 6.5rem; padding: 0.375rem 0.5rem; margin-bottom: 0;",
                onclick: move |_| props.on_toggle.call(()),
                img {
                    src: "{props.selected.flag()}",
                    alt: "{props.selected.code()} flag",
                    width: "20",
                    height: "15",
                }
                span {
                    style: "font-size: 0.875rem; font-weight: 600;",
                    "{props.selected.code()}"
                }
                span {
                    style: "margin-left: auto; {chevron_style}",
                    "▾"
                }
            }
            if props.open {
                ul {
                    role: "listbox",
                    // Stop click propagation so list chrome clicks stay local.
                    onclick: |e| e.stop_propagation(),
                    style: "
                        position: absolute;
                        top: 100%;
                        left: 0;
                        z-index: 10;
                        min-width: 9rem;
                        max-height: 15rem;
                        overflow-y: auto;
                        margin: 0.25rem 0 0;
                        padding: 0.25rem;
                        list-style: none;
                        background-color: var(--pico-card-background-color);
                        border: 1px solid var(--pico-card-border-color);
                        border-radius: var(--pico-border-radius);
                    ",
                    for currency in Currency::iter() {
                        li {
                            key: "{currency.code()}",
                            style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.3rem 0.5rem; cursor: pointer; white-space: nowrap;",
                            title: "{currency.name()}",
                            onclick: move |_| props.on_select.call(currency),
                            img {
                                src: "{currency.flag()}",
                                alt: "{currency.code()} flag",
                                width: "20",
                                height: "16",
                            }
                            "{currency.code()}"
                        }
                    }
                }
            }
        }
    }
}
