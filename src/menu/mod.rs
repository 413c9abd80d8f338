pub mod budget;
pub mod expenses;
pub mod goals;
pub mod income;

use std::io::{self, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::fmt::title_case;
use crate::operations::goals::ResyncReport;

pub fn read_line() -> String {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

pub fn prompt(message: &str) -> String {
    println!("{message}");
    print!(": ");
    let _ = io::stdout().flush();
    read_line()
}

/// Prompts until the user enters something; `0` returns None (go back).
pub fn prompt_or_back(message: &str) -> Option<String> {
    loop {
        let input = prompt(message);
        if input == "0" {
            return None;
        }
        if input.is_empty() {
            continue;
        }
        return Some(input.to_lowercase());
    }
}

/// Prompts for a monetary amount with at most two decimal places; `0`
/// returns None (go back).
pub fn prompt_amount(message: &str) -> Option<Decimal> {
    loop {
        let input = prompt(message);
        if input == "0" {
            return None;
        }
        match Decimal::from_str(&input) {
            Ok(amount) if amount.scale() <= 2 => return Some(amount),
            _ => println!("\nPlease enter a valid amount."),
        }
    }
}

pub fn confirm(message: &str) -> bool {
    loop {
        let input = prompt(message).to_lowercase();
        match input.as_str() {
            "yes" | "y" => return true,
            "no" | "n" => return false,
            _ => println!("\nPlease enter yes or no."),
        }
    }
}

/// Warns the user about goals whose progress may now be stale. The income
/// mutation itself has already succeeded and is not rolled back.
pub fn warn_stale_goals(report: &ResyncReport) {
    for failure in &report.failures {
        println!(
            "\nWarning: the {} goal could not be updated and its progress may be stale.",
            title_case(&failure.category)
        );
        println!("Error: {}", failure.error);
    }
    if let Some(error) = &report.aborted {
        println!("\nWarning: income goals could not be resynchronised and may be stale.");
        println!("Error: {error}");
    }
}
