use rust_decimal::Decimal;

/// Capitalises each word of a stored (lowercase) name for display.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) if first.is_lowercase() => {
                    first.to_uppercase().collect::<String>() + chars.as_str()
                }
                Some(first) => first.to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a monetary amount with exactly two fraction digits.
pub fn money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Budgets of zero mean "no budget set" and display as N/A.
pub fn budget_display(budget: Decimal) -> String {
    if budget.is_zero() {
        "N/A".to_string()
    } else {
        money(budget)
    }
}
