// ui/src/components/amount_input.rs
#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Strips everything but digits and the first decimal point.
///
/// The paired recompute never sees letters or a second dot; an empty or
/// lone-dot result still counts as "not a number" downstream.
pub fn sanitize_decimal(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut has_decimal = false;
    for ch in input.chars() {
        if ch.is_ascii_digit() {
            sanitized.push(ch);
        } else if ch == '.' && !has_decimal {
            sanitized.push(ch);
            has_decimal = true;
        }
    }
    sanitized
}

/// A controlled text input restricted to plain decimal amounts.
#[component]
pub fn AmountInput(value: String, placeholder: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            r#type: "text",
            inputmode: "decimal",
            style: "margin-bottom: 0; width: 100%;",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |event: FormEvent| on_input.call(sanitize_decimal(&event.value())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_digits_and_one_decimal_point() {
        assert_eq!(sanitize_decimal("1234.56"), "1234.56");
        assert_eq!(sanitize_decimal("1.2.3"), "1.23");
        assert_eq!(sanitize_decimal("12a,b3"), "123");
        assert_eq!(sanitize_decimal("-5"), "5");
        assert_eq!(sanitize_decimal(""), "");
        assert_eq!(sanitize_decimal("."), ".");
    }
}
