//=============================================================================
// File: src/screens/convert.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::converter::CurrencyConverter;
use crate::components::pico::Card;

#[component]
pub fn ConvertScreen() -> Element {
    rsx! {
        div {
            class: "converter-card",
            Card {
                h3 {
                    style: "text-align: center;",
                    "Currency Converter"
                }
                CurrencyConverter {}
            }
        }
    }
}
