use crate::db::store::{LedgerStore, SqliteStore};
use crate::fmt::{budget_display, money, title_case};
use crate::menu::{confirm, prompt, prompt_amount, prompt_or_back};
use crate::operations::budget::{budget_overview, category_breakdown};
use crate::operations::expenses;

pub fn main_menu(store: &mut SqliteStore) {
    println!("\nBudgeting Options");

    loop {
        let input = prompt(
            "\nPlease select from one of the following options:\n\
             1 - Set or edit a category budget\n\
             2 - View budgets\n\
             3 - Add a new expense category\n\
             4 - Delete an expense category\n\
             0 - Return to previous menu",
        );
        match input.as_str() {
            "1" => set_budget(store),
            "2" => view_budgets(store),
            "3" => crate::menu::expenses::add_category(store),
            "4" => crate::menu::expenses::delete_category(store),
            "0" => return,
            _ => {}
        }
    }
}

fn set_budget(store: &mut SqliteStore) {
    let categories = match store.list_expense_categories() {
        Ok(categories) if categories.is_empty() => {
            println!("\nYou haven't added any expense categories.");
            return;
        }
        Ok(categories) => categories,
        Err(e) => {
            println!("\nSorry, something went wrong accessing the expense categories.");
            println!("Error: {e}");
            return;
        }
    };

    println!("\nThe current categories and their budgets are:");
    for category in &categories {
        println!(
            "{} -- {}",
            title_case(&category.name),
            budget_display(category.budget)
        );
    }

    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the category you want to budget for. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };
    if !categories.iter().any(|category| category.name == name) {
        println!("\nYou did not enter the name of a category.");
        return;
    }

    let Some(budget) = prompt_amount(
        "\nPlease enter the budget for this category. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    match expenses::set_category_budget(store, &name, budget) {
        Ok(()) => println!(
            "\nThe budget for {} has been set to {}.",
            title_case(&name),
            money(budget)
        ),
        Err(e) => {
            println!("\nSorry, the budget could not be set.");
            println!("Error: {e}");
        }
    }
}

fn view_budgets(store: &SqliteStore) {
    let overview = match budget_overview(store) {
        Ok(overview) if overview.is_empty() => {
            println!("\nYou haven't added any expense categories.");
            return;
        }
        Ok(overview) => overview,
        Err(e) => {
            println!("\nSorry, something went wrong building the budget overview.");
            println!("Error: {e}");
            return;
        }
    };

    println!("\nCategory -- Budget -- Comment");
    for status in &overview {
        println!(
            "{} -- {} -- {}",
            title_case(&status.category),
            budget_display(status.budget),
            status.status
        );
    }

    if !confirm("\nWould you like to see the expenses behind one of these categories? Please enter yes or no.") {
        return;
    }

    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the category you want to view. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    let category = match store.get_expense_category(&name) {
        Ok(Some(category)) => category,
        Ok(None) => {
            println!("\nYou did not enter the name of a category.");
            return;
        }
        Err(e) => {
            println!("\nSorry, something went wrong accessing the expense categories.");
            println!("Error: {e}");
            return;
        }
    };
    let expenses = match store.list_expenses(Some(&category.name)) {
        Ok(expenses) => expenses,
        Err(e) => {
            println!("\nSorry, something went wrong accessing the expenses.");
            println!("Error: {e}");
            return;
        }
    };

    let breakdown = category_breakdown(&category, &expenses);
    println!(
        "\n{} -- Budget: {}",
        title_case(&breakdown.category),
        budget_display(breakdown.budget)
    );
    if breakdown.lines.is_empty() {
        println!("You haven't added any expenses to this category.");
        return;
    }
    for line in &breakdown.lines {
        println!(
            "    {} -- {} -- {}",
            title_case(&line.name),
            money(line.amount),
            line.date_added
        );
    }
    println!("Expense Total: {}", money(breakdown.total));
    println!("{}", breakdown.status);
}
