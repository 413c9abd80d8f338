mod db;
mod error;
mod fmt;
mod menu;
mod models;
mod operations;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::db::connection::establish_connection;
use crate::db::store::SqliteStore;
use crate::menu::prompt;

#[derive(Parser)]
#[command(name = "tracker", about = "A console saving and expense tracker")]
struct Cli {
    /// Path to the sqlite database file.
    #[arg(long, default_value = "data/tracker.db")]
    database: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let conn = match establish_connection(&cli.database) {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Could not open the database at {}.", cli.database.display());
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let mut store = SqliteStore::new(conn);

    println!("\nSaving and Expense Tracker");

    loop {
        let input = prompt(
            "\nPlease select from one of the following options:\n\
             1 - Expenses\n\
             2 - Income\n\
             3 - Budgeting\n\
             4 - Goals\n\
             0 - Exit",
        );
        match input.as_str() {
            "1" => menu::expenses::main_menu(&mut store),
            "2" => menu::income::main_menu(&mut store),
            "3" => menu::budget::main_menu(&mut store),
            "4" => menu::goals::main_menu(&mut store),
            "0" => {
                println!("\nLogging off...");
                break;
            }
            _ => {}
        }
    }
}
