use crate::db::store::{LedgerStore, SqliteStore};
use crate::fmt::{money, title_case};
use crate::menu::{confirm, prompt, prompt_amount, prompt_or_back};
use crate::models::goal::GoalKind;
use crate::operations::goals::{
    self, GoalEdit, add_to_saving_goal, create_income_goal, create_saving_goal, edit_goal,
};

pub fn main_menu(store: &mut SqliteStore) {
    println!("\nGoal Options");

    loop {
        let input = prompt(
            "\nPlease select from one of the following options:\n\
             1 - Create a new saving goal\n\
             2 - Create a new income goal\n\
             3 - Add to a saving goal\n\
             4 - Edit a goal\n\
             5 - Delete a goal\n\
             6 - View all goals\n\
             0 - Return to previous menu",
        );
        match input.as_str() {
            "1" => new_saving_goal(store),
            "2" => new_income_goal(store),
            "3" => add_to_goal(store),
            "4" => edit_goal_menu(store),
            "5" => delete_goal(store),
            "6" => view_goals(store),
            "0" => return,
            _ => {}
        }
    }
}

fn new_saving_goal(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter a name for the saving goal. It must be unique.\nEnter 0 to return to the previous menu.",
    ) else {
        return;
    };
    let Some(target) = prompt_amount(
        "\nPlease enter the amount you want to save. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    match create_saving_goal(store, &name, target) {
        Ok(goal) => println!(
            "\nThe {} saving goal has been created.",
            title_case(&goal.name)
        ),
        Err(e) => {
            println!("\nSorry, the goal could not be created.");
            println!("Error: {e}");
        }
    }
}

fn new_income_goal(store: &mut SqliteStore) {
    let categories = match store.list_income_categories() {
        Ok(categories) if categories.is_empty() => {
            println!("\nYou haven't added any income categories.");
            return;
        }
        Ok(categories) => categories,
        Err(e) => {
            println!("\nSorry, something went wrong accessing the income categories.");
            println!("Error: {e}");
            return;
        }
    };

    println!("\nThe current income categories are:");
    for category in &categories {
        println!("{}", title_case(&category.name));
    }

    let Some(category) = prompt_or_back(
        "\nPlease enter the income category you want to set a goal for. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };
    let Some(target) = prompt_amount(
        "\nPlease enter the income you are aiming for. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    match create_income_goal(store, &category, target) {
        Ok(goal) => {
            println!(
                "\nThe {} income goal has been created.",
                title_case(&goal.name)
            );
            println!("Current progress: {}", money(goal.progress));
        }
        Err(e) => {
            println!("\nSorry, the goal could not be created.");
            println!("Error: {e}");
        }
    }
}

fn add_to_goal(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the saving goal you want to add to. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };
    let Some(amount) = prompt_amount(
        "\nPlease enter the amount you want to add. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    match add_to_saving_goal(store, &name, amount) {
        Ok(progress) => println!(
            "\nThe {} goal now stands at {}.",
            title_case(&name),
            money(progress)
        ),
        Err(e) => {
            println!("\nSorry, the goal could not be updated.");
            println!("Error: {e}");
        }
    }
}

fn edit_goal_menu(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the goal you want to edit. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    let current = match store.get_goal(&name) {
        Ok(Some(goal)) => goal,
        Ok(None) => {
            println!("\nYou did not enter the name of a goal.");
            return;
        }
        Err(e) => {
            println!("\nSorry, something went wrong accessing the goals.");
            println!("Error: {e}");
            return;
        }
    };

    let mut edit = GoalEdit::default();

    // An income goal is named after its category and tracks the ledger, so
    // only its target can change.
    if current.kind == GoalKind::Saving {
        if confirm(&format!(
            "\nThe name of the goal is {}.\nWould you like to change it? Please enter yes or no.",
            title_case(&current.name)
        )) {
            match prompt_or_back(
                "\nPlease enter a new name for the goal. It must be unique.\nEnter 0 to return to the previous menu.",
            ) {
                Some(new_name) => edit.name = Some(new_name),
                None => return,
            }
        }
    }

    if confirm(&format!(
        "\nThe goal amount is {}.\nWould you like to change it? Please enter yes or no.",
        money(current.target)
    )) {
        match prompt_amount(
            "\nPlease enter the new goal amount. Enter 0 to return to the previous menu.",
        ) {
            Some(target) => edit.target = Some(target),
            None => return,
        }
    }

    if current.kind == GoalKind::Saving {
        if confirm(&format!(
            "\nThe current progress is {}.\nWould you like to change it? Please enter yes or no.",
            money(current.progress)
        )) {
            match prompt_amount(
                "\nPlease enter the new progress. Enter 0 to return to the previous menu.",
            ) {
                Some(progress) => edit.progress = Some(progress),
                None => return,
            }
        }
    }

    match edit_goal(store, &name, edit) {
        Ok(updated) => println!(
            "\nThe {} goal has been successfully updated.",
            title_case(&updated.name)
        ),
        Err(e) => {
            println!("\nSorry, the goal could not be updated.");
            println!("Error: {e}");
        }
    }
}

fn delete_goal(store: &mut SqliteStore) {
    let Some(name) = prompt_or_back(
        "\nPlease enter the name of the goal you want to delete. Enter 0 to return to the previous menu.",
    ) else {
        return;
    };

    let goal = match store.get_goal(&name) {
        Ok(Some(goal)) => goal,
        Ok(None) => {
            println!("\nYou did not enter the name of a goal.");
            return;
        }
        Err(e) => {
            println!("\nSorry, something went wrong accessing the goals.");
            println!("Error: {e}");
            return;
        }
    };

    if !confirm(&format!(
        "\nAre you sure you want to delete the {} goal? Please enter yes or no.",
        title_case(&goal.name)
    )) {
        return;
    }

    match goals::delete_goal(store, &goal.name, goal.kind) {
        Ok(()) => println!("\nThe {} goal has been deleted.", title_case(&goal.name)),
        Err(e) => {
            println!("\nSorry, the goal could not be deleted.");
            println!("Error: {e}");
        }
    }
}

fn view_goals(store: &SqliteStore) {
    let goals = match store.list_goals(None) {
        Ok(goals) if goals.is_empty() => {
            println!("\nYou haven't added any goals.");
            return;
        }
        Ok(goals) => goals,
        Err(e) => {
            println!("\nSorry, something went wrong accessing the goals.");
            println!("Error: {e}");
            return;
        }
    };

    let saving: Vec<_> = goals
        .iter()
        .filter(|goal| goal.kind == GoalKind::Saving)
        .collect();
    if !saving.is_empty() {
        println!("\nSaving Goals\nName -- Goal Amount -- Current Progress");
        for goal in saving {
            println!(
                "{} -- {} -- {}",
                title_case(&goal.name),
                money(goal.target),
                money(goal.progress)
            );
        }
    }

    let income: Vec<_> = goals
        .iter()
        .filter(|goal| goal.kind == GoalKind::Income)
        .collect();
    if !income.is_empty() {
        println!("\nIncome Goals\nCategory -- Target Income -- Current Progress");
        for goal in income {
            println!(
                "{} -- {} -- {}",
                title_case(&goal.name),
                money(goal.target),
                money(goal.progress)
            );
        }
    }
}
