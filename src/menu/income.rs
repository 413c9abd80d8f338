use chrono::Local;

use crate::db::store::{LedgerStore, SqliteStore};
use crate::fmt::{money, title_case};
use crate::menu::{confirm, prompt, prompt_amount, prompt_or_back, warn_stale_goals};
use crate::models::income::Income;
use crate::operations::income::{self, IncomeEdit};

pub fn main_menu(store: &mut SqliteStore) {
    println!("\nIncome Options");

    loop {
        let input = prompt(
            "\nPlease select from one of the following options:\n\
             1 - Add a new income\n\
             2 - Edit an income\n\
             3 - Delete an income\n\
             4 - View all income\n\
             5 - View income by category\n\
             6 - Add a new income category\n\
             7 - Delete an income category\n\
             0 - Return to previous menu",
        );
        match input.as_str() {
            "1" => add_income(store),
            "2" => edit_income(store),
            "3" => delete_income(store),
            "4" => view_all(store),
            "5" => view_by_category(store),
            "6" => add_category(store),
            "7" => delete_category(store),
            "0" => return,
            _ => {}
        }
    }
}

fn print_income(records: &[Income]) {
    println!("\nCategory -- Name -- Amount -- Date Added");
    for income in records {
        println!(
            "{} -- {} -- {} -- {}",
            title_case(&income.category),
            title_case(&income.name),
            money(income.amount),
            income.date_added
        );
    }
}

fn list_category_names(store: &SqliteStore) -> Option<Vec<String>> {
    match store.list_income_categories() {
        Ok(categories) if categories.is_empty() => {
            println!("\nYou haven't added any income categories.");
            None
        }
        Ok(categories) => Some(categories.into_iter().map(|c| c.name).collect()),
        Err(e) => {
            println!("\nSorry, something went wrong accessing the income categories.");
            println!("Error: {e}");
            None
        }
    }
}

fn add_income(store: &mut SqliteStore) {
    println!("\nAdding a new income.");

    let Some(categories) = list_category_names(store) else {
        return;
    };
    println!("\nThe current income categories are:");
    for name in &categories {
        println!("{}", title_case(name));
    }

    let Some(category) = prompt_or_back(
        "\nPlease enter the name of the category you wish to add the income to. Enter 0 to cancel.",
    ) else {
        return;
    };
    let Some(name) = prompt_or_back(
        "\nPlease describe the income. It must be unique.\nEnter 0 to return to the previous menu.",
    ) else {
        return;
    };
    let Some(amount) =
        prompt_amount("\nPlease enter the amount of the income. Enter 0 to return to the previous menu.")
    else {
        return;
    };

    let today = Local::now().date_naive();
    match income::add_income(store, &category, &name, amount, today) {
        Ok((record, resync)) => {
            println!("\n{} was successfully added.", title_case(&record.name));
            warn_stale_goals(&resync);
        }
        Err(e) => {
            println!("\nSorry, the income could not be added.");
            println!("Error: {e}");
        }
    }
}

fn edit_income(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the income you want to edit. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    let current = match store.get_income(&name) {
        Ok(Some(income)) => income,
        Ok(None) => {
            println!("\nYou did not enter the name of an income.");
            return;
        }
        Err(e) => {
            println!("\nSorry, something went wrong accessing the income records.");
            println!("Error: {e}");
            return;
        }
    };

    let mut edit = IncomeEdit::default();

    if confirm(&format!(
        "\nThe current category is {}.\nWould you like to change it? Please enter yes or no.",
        title_case(&current.category)
    )) {
        match prompt_or_back(
            "\nPlease enter the category you wish to change the income to. Enter 0 to return to the previous menu.",
        ) {
            Some(category) => edit.category = Some(category),
            None => return,
        }
    }

    if confirm(&format!(
        "\nThe name of the income is {}.\nWould you like to change it? Please enter yes or no.",
        title_case(&current.name)
    )) {
        match prompt_or_back(
            "\nPlease enter a new name for the income. It must be unique.\nEnter 0 to return to the previous menu.",
        ) {
            Some(new_name) => edit.name = Some(new_name),
            None => return,
        }
    }

    if confirm(&format!(
        "\nThe value of the income is {}.\nWould you like to change it? Please enter yes or no.",
        money(current.amount)
    )) {
        match prompt_amount(
            "\nPlease enter the new amount of the income. Enter 0 to return to the previous menu.",
        ) {
            Some(amount) => edit.amount = Some(amount),
            None => return,
        }
    }

    let today = Local::now().date_naive();
    match income::edit_income(store, &name, edit, today) {
        Ok((updated, resync)) => {
            println!("\n{} has been successfully updated.", title_case(&updated.name));
            warn_stale_goals(&resync);
        }
        Err(e) => {
            println!("\nSorry, the income could not be updated.");
            println!("Error: {e}");
        }
    }
}

fn delete_income(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the income you want to delete. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    match income::delete_income(store, &name) {
        Ok(resync) => {
            println!("\n{} has been deleted.", title_case(&name));
            warn_stale_goals(&resync);
        }
        Err(e) => {
            println!("\nSorry, the income could not be deleted.");
            println!("Error: {e}");
        }
    }
}

fn view_all(store: &SqliteStore) {
    match store.list_income(None) {
        Ok(records) if records.is_empty() => println!("\nYou haven't added any income."),
        Ok(records) => print_income(&records),
        Err(e) => {
            println!("\nSorry, something went wrong accessing the income records.");
            println!("Error: {e}");
        }
    }
}

fn view_by_category(store: &SqliteStore) {
    let Some(categories) = list_category_names(store) else {
        return;
    };
    println!("\nThe current income categories are:");
    for name in &categories {
        println!("{}", title_case(name));
    }

    let Some(category) = prompt_or_back(
        "\nPlease enter the name of the category you want to view. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };
    if !categories.iter().any(|name| *name == category) {
        println!("\nYou did not enter the name of a category.");
        return;
    }

    match store.list_income(Some(&category)) {
        Ok(records) if records.is_empty() => {
            println!("\nYou haven't added any income to this category.")
        }
        Ok(records) => print_income(&records),
        Err(e) => {
            println!("\nSorry, something went wrong accessing the income records.");
            println!("Error: {e}");
        }
    }
}

fn add_category(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease describe the income category. The name must be unique.\nEnter 0 to return to the previous menu.",
    ) else {
        return;
    };

    match income::add_category(store, &name) {
        Ok(category) => println!("\n{} was successfully added.", title_case(&category.name)),
        Err(e) => {
            println!("\nSorry, the category could not be added.");
            println!("Error: {e}");
        }
    }
}

fn delete_category(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the category you want to delete. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    if !confirm(&format!(
        "\nAre you sure you want to delete the {} category? All income in this category,\nand any income goal for it, will also be deleted. Please enter yes or no.",
        title_case(&name)
    )) {
        return;
    }

    match income::delete_category(store, &name) {
        Ok(()) => println!("\nThe {} category has been deleted.", title_case(&name)),
        Err(e) => {
            println!("\nSorry, the category could not be deleted.");
            println!("Error: {e}");
        }
    }
}
