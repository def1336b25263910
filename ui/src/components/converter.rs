// ui/src/components/converter.rs
#![allow(non_snake_case)]

use std::cell::Cell;
use std::rc::Rc;

use api::config::RateServiceConfig;
use api::convert;
use api::currency::Currency;
use api::rate_table::RateTable;
use dioxus::prelude::*;

use crate::components::amount_input::AmountInput;
use crate::components::currency_dropdown::CurrencyDropdown;
use crate::components::currency_dropdown::DropdownSelection;
use crate::components::pico::Button;

/// The converter widget: two amount fields, two selectors, one rate table.
#[component]
pub fn CurrencyConverter() -> Element {
    let config = use_context::<RateServiceConfig>();

    let mut from_currency = use_signal(|| Currency::USD);
    let mut to_currency = use_signal(|| Currency::EUR);
    let mut amount_from = use_signal(String::new);
    let mut amount_to = use_signal(String::new);
    let mut rates = use_signal::<Option<RateTable>>(|| None);
    let mut error = use_signal::<Option<String>>(|| None);
    let mut open_dropdown = use_signal(DropdownSelection::default);

    // Monotonic id per fetch; a response only lands while it is the newest.
    let request_seq = use_hook(|| Rc::new(Cell::new(0u64)));

    // Refresh the table on mount and whenever either selection changes.
    use_effect(move || {
        let base = from_currency();
        let quote = to_currency();
        let seq = request_seq.get() + 1;
        request_seq.set(seq);

        let config = config.clone();
        let request_seq = Rc::clone(&request_seq);
        spawn(async move {
            let outcome = api::latest_rates(&config, base).await;
            if request_seq.get() != seq {
                // A newer request is in flight; drop this response.
                return;
            }
            match outcome {
                Ok(table) => {
                    // Update the conversion if there's an amount already entered.
                    let typed = amount_from.peek().clone();
                    if !typed.is_empty() {
                        if let Some(rate) = table.get(quote) {
                            if let Some(converted) = convert::forward(&typed, rate) {
                                amount_to.set(converted);
                            }
                        }
                    }
                    rates.set(Some(table));
                    error.set(None);
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("rate refresh failed: {e}");
                    // A failed refresh keeps whatever table we already had.
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    // The cached factor for the current "to" currency, if any.
    let current_rate = move || {
        rates
            .peek()
            .as_ref()
            .and_then(|table| table.get(*to_currency.peek()))
    };

    let handle_amount_from = move |value: String| {
        amount_from.set(value.clone());
        if let Some(rate) = current_rate() {
            match convert::forward(&value, rate) {
                Some(converted) => amount_to.set(converted),
                None => amount_to.set(String::new()),
            }
        }
    };

    let handle_amount_to = move |value: String| {
        amount_to.set(value.clone());
        if let Some(rate) = current_rate() {
            match convert::reverse(&value, rate) {
                Some(converted) => amount_from.set(converted),
                None => amount_from.set(String::new()),
            }
        }
    };

    // The explicit convert path stays wired even though the button is shown
    // inactive.
    let handle_convert = move |_| {
        let rate = current_rate();
        let typed = amount_from.peek().clone();
        match convert::explicit(&typed, rate) {
            Ok(converted) => {
                amount_to.set(converted);
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let summary = {
        let quote = to_currency();
        let rate_display = rates
            .read()
            .as_ref()
            .and_then(|table| table.get(quote))
            .map(convert::format_rate)
            .unwrap_or_else(|| "-".to_string());
        format!(
            "1 {} = {} {}",
            from_currency().code(),
            rate_display,
            quote.code()
        )
    };

    rsx! {
        if open_dropdown() != DropdownSelection::None {
            // Backdrop to catch clicks outside both dropdown containers.
            div {
                style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                onclick: move |_| open_dropdown.set(DropdownSelection::None),
            }
        }
        div {
            style: "display: flex; flex-direction: column; gap: 1.25rem;",

            // From row
            div {
                style: "display: flex; align-items: center; gap: 0.5rem;",
                div {
                    style: "flex-grow: 1;",
                    AmountInput {
                        value: amount_from(),
                        placeholder: "Enter amount",
                        on_input: handle_amount_from,
                    }
                }
                CurrencyDropdown {
                    selected: from_currency(),
                    open: open_dropdown() == DropdownSelection::From,
                    on_toggle: move |_| {
                        let next = open_dropdown.peek().toggled(DropdownSelection::From);
                        open_dropdown.set(next);
                    },
                    on_select: move |currency| {
                        from_currency.set(currency);
                        open_dropdown.set(DropdownSelection::None);
                    },
                }
            }

            // To row
            div {
                style: "display: flex; align-items: center; gap: 0.5rem;",
                div {
                    style: "flex-grow: 1;",
                    AmountInput {
                        value: amount_to(),
                        placeholder: "Converted amount",
                        on_input: handle_amount_to,
                    }
                }
                CurrencyDropdown {
                    selected: to_currency(),
                    open: open_dropdown() == DropdownSelection::To,
                    on_toggle: move |_| {
                        let next = open_dropdown.peek().toggled(DropdownSelection::To);
                        open_dropdown.set(next);
                    },
                    on_select: move |currency| {
                        to_currency.set(currency);
                        open_dropdown.set(DropdownSelection::None);
                    },
                }
            }

            if let Some(message) = error() {
                small {
                    style: "color: var(--pico-color-red-500);",
                    "{message}"
                }
            }

            Button {
                disabled: true,
                on_click: handle_convert,
                "Convert"
            }

            p {
                style: "display: flex; justify-content: center; margin: 0; color: var(--pico-muted-color); font-size: 0.875rem;",
                "{summary}"
            }
        }
    }
}
