use chrono::Local;

use crate::db::store::{LedgerStore, SqliteStore};
use crate::fmt::{money, title_case};
use crate::menu::{confirm, prompt, prompt_amount, prompt_or_back};
use crate::models::expense::Expense;
use crate::operations::expenses::{self, ExpenseEdit};

pub fn main_menu(store: &mut SqliteStore) {
    println!("\nExpense Options");

    loop {
        let input = prompt(
            "\nPlease select from one of the following options:\n\
             1 - Add a new expense\n\
             2 - Edit an expense\n\
             3 - Delete an expense\n\
             4 - View all expenses\n\
             5 - View expenses by category\n\
             6 - Add a new expense category\n\
             7 - Delete an expense category\n\
             0 - Return to previous menu",
        );
        match input.as_str() {
            "1" => add_expense(store),
            "2" => edit_expense(store),
            "3" => delete_expense(store),
            "4" => view_all(store),
            "5" => view_by_category(store),
            "6" => add_category(store),
            "7" => delete_category(store),
            "0" => return,
            _ => {}
        }
    }
}

fn print_expenses(expenses: &[Expense]) {
    println!("\nCategory -- Name -- Amount -- Date Added");
    for expense in expenses {
        println!(
            "{} -- {} -- {} -- {}",
            title_case(&expense.category),
            title_case(&expense.name),
            money(expense.amount),
            expense.date_added
        );
    }
}

fn list_category_names(store: &SqliteStore) -> Option<Vec<String>> {
    match store.list_expense_categories() {
        Ok(categories) if categories.is_empty() => {
            println!("\nYou haven't added any expense categories.");
            None
        }
        Ok(categories) => Some(categories.into_iter().map(|c| c.name).collect()),
        Err(e) => {
            println!("\nSorry, something went wrong accessing the expense categories.");
            println!("Error: {e}");
            None
        }
    }
}

fn add_expense(store: &mut SqliteStore) {
    println!("\nAdding a new expense.");

    let Some(categories) = list_category_names(store) else {
        return;
    };
    println!("\nThe current expense categories are:");
    for name in &categories {
        println!("{}", title_case(name));
    }

    let Some(category) = prompt_or_back(
        "\nPlease enter the name of the category you wish to add the expense to. Enter 0 to cancel.",
    ) else {
        return;
    };
    let Some(name) = prompt_or_back(
        "\nPlease describe the expense. It must be unique.\nEnter 0 to return to the previous menu.",
    ) else {
        return;
    };
    let Some(amount) =
        prompt_amount("\nPlease enter the amount of the expense. Enter 0 to return to the previous menu.")
    else {
        return;
    };

    let today = Local::now().date_naive();
    match expenses::add_expense(store, &category, &name, amount, today) {
        Ok(expense) => println!("\n{} was successfully added.", title_case(&expense.name)),
        Err(e) => {
            println!("\nSorry, the expense could not be added.");
            println!("Error: {e}");
        }
    }
}

fn edit_expense(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the expense you want to edit. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    let current = match store.get_expense(&name) {
        Ok(Some(expense)) => expense,
        Ok(None) => {
            println!("\nYou did not enter the name of an expense.");
            return;
        }
        Err(e) => {
            println!("\nSorry, something went wrong accessing the expenses.");
            println!("Error: {e}");
            return;
        }
    };

    let mut edit = ExpenseEdit::default();

    if confirm(&format!(
        "\nThe current category is {}.\nWould you like to change it? Please enter yes or no.",
        title_case(&current.category)
    )) {
        match prompt_or_back(
            "\nPlease enter the category you wish to change the expense to. Enter 0 to return to the previous menu.",
        ) {
            Some(category) => edit.category = Some(category),
            None => return,
        }
    }

    if confirm(&format!(
        "\nThe name of the expense is {}.\nWould you like to change it? Please enter yes or no.",
        title_case(&current.name)
    )) {
        match prompt_or_back(
            "\nPlease enter a new name for the expense. It must be unique.\nEnter 0 to return to the previous menu.",
        ) {
            Some(new_name) => edit.name = Some(new_name),
            None => return,
        }
    }

    if confirm(&format!(
        "\nThe value of the expense is {}.\nWould you like to change it? Please enter yes or no.",
        money(current.amount)
    )) {
        match prompt_amount(
            "\nPlease enter the new amount of the expense. Enter 0 to return to the previous menu.",
        ) {
            Some(amount) => edit.amount = Some(amount),
            None => return,
        }
    }

    let today = Local::now().date_naive();
    match expenses::edit_expense(store, &name, edit, today) {
        Ok(updated) => println!("\n{} has been successfully updated.", title_case(&updated.name)),
        Err(e) => {
            println!("\nSorry, the expense could not be updated.");
            println!("Error: {e}");
        }
    }
}

fn delete_expense(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the expense you want to delete. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    match expenses::delete_expense(store, &name) {
        Ok(()) => println!("\n{} has been deleted.", title_case(&name)),
        Err(e) => {
            println!("\nSorry, the expense could not be deleted.");
            println!("Error: {e}");
        }
    }
}

fn view_all(store: &SqliteStore) {
    match store.list_expenses(None) {
        Ok(expenses) if expenses.is_empty() => println!("\nYou haven't added any expenses."),
        Ok(expenses) => print_expenses(&expenses),
        Err(e) => {
            println!("\nSorry, something went wrong accessing the expenses.");
            println!("Error: {e}");
        }
    }
}

fn view_by_category(store: &SqliteStore) {
    let Some(categories) = list_category_names(store) else {
        return;
    };
    println!("\nThe current expense categories are:");
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

    match store.list_expenses(Some(&category)) {
        Ok(expenses) if expenses.is_empty() => {
            println!("\nYou haven't added any expenses to this category.")
        }
        Ok(expenses) => print_expenses(&expenses),
        Err(e) => {
            println!("\nSorry, something went wrong accessing the expenses.");
            println!("Error: {e}");
        }
    }
}

pub(crate) fn add_category(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease describe the expense category. The name must be unique.\nEnter 0 to return to the previous menu.",
    ) else {
        return;
    };

    match expenses::add_category(store, &name) {
        Ok(category) => println!("\n{} was successfully added.", title_case(&category.name)),
        Err(e) => {
            println!("\nSorry, the category could not be added.");
            println!("Error: {e}");
        }
    }
}

pub(crate) fn delete_category(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the category you want to delete. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    if !confirm(&format!(
        "\nAre you sure you want to delete the {} category? All expenses in this\ncategory will also be deleted. Please enter yes or no.",
        title_case(&name)
    )) {
        return;
    }

    match expenses::delete_category(store, &name) {
        Ok(()) => println!("\nThe {} category has been deleted.", title_case(&name)),
        Err(e) => {
            println!("\nSorry, the category could not be deleted.");
            println!("Error: {e}");
        }
    }
}
