// UI layer: the numbered menu loop and the four customer actions.
// Store failures are caught at each action boundary and printed, so a
// failed operation never kills the menu; only terminal I/O errors bubble
// up and end the program.

use crate::store::{parse_id, Customer, CustomerFields, CustomerStore};
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

/// One line of user input. The terminal implementation prompts via
/// `dialoguer`; tests script the answers instead.
pub trait Prompt {
    fn line(&mut self, message: &str) -> Result<String>;
}

/// Terminal-backed prompt. Empty answers are allowed because the update
/// flow treats an empty line as "keep the current value".
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn line(&mut self, message: &str) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }
}

/// Main interactive menu. Receives the customer store and runs the
/// prompt loop until the user chooses "5". This call blocks for the
/// lifetime of the session; every store operation inside it runs to
/// completion before the menu is shown again.
pub fn main_menu(store: &dyn CustomerStore) -> Result<()> {
    menu_loop(store, &mut TermPrompt)
}

fn menu_loop(store: &dyn CustomerStore, prompt: &mut dyn Prompt) -> Result<()> {
    loop {
        println!("What would you like to do?\n");
        println!("  1. Create a customer");
        println!("  2. View all customers");
        println!("  3. Update a customer");
        println!("  4. Delete a customer");
        println!("  5. Quit\n");

        // Exact match on the typed line: no trimming, no number parsing.
        let choice = prompt.line("Number of action to run")?;
        match choice.as_str() {
            "1" => handle_create(store, prompt)?,
            "2" => handle_list(store),
            "3" => handle_update(store, prompt)?,
            "4" => handle_delete(store, prompt)?,
            "5" => break,
            _ => println!("\nInvalid choice. Please enter a number between 1 and 5.\n"),
        }
    }
    Ok(())
}

/// Spinner shown while a store call is in flight.
fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.set_message(message);
    pb
}

/// Collect the two customer fields and insert. Inputs are free text:
/// no validation, no trimming, the age is stored exactly as entered.
fn handle_create(store: &dyn CustomerStore, prompt: &mut dyn Prompt) -> Result<()> {
    let name = prompt.line("What is the customer's name?")?;
    let age = prompt.line("What is the customer's age?")?;

    let sp = spinner("Creating...");
    let created = store.insert(CustomerFields { name, age });
    sp.finish_and_clear();

    match created {
        Ok(c) => println!(
            "\nNew customer created successfully: {}, Age: {}\n",
            c.name, c.age
        ),
        Err(e) => println!("\nError creating customer: {e}\n"),
    }
    Ok(())
}

fn handle_list(store: &dyn CustomerStore) {
    let sp = spinner("Fetching customers...");
    let found = store.find_all();
    sp.finish_and_clear();

    match found {
        Ok(customers) if customers.is_empty() => println!("\nNo customers found.\n"),
        Ok(customers) => {
            println!("\n--- All Customers ---");
            for customer in &customers {
                println!("{customer}");
            }
            println!("---------------------\n");
        }
        Err(e) => println!("\nError fetching customers: {e}\n"),
    }
}

/// Print the current customers so the user can copy an id from the
/// list. Returns `None` when there is nothing to pick from or the fetch
/// failed, in which case the caller aborts the action.
fn list_for_selection(store: &dyn CustomerStore, empty_message: &str) -> Option<Vec<Customer>> {
    let customers = match store.find_all() {
        Ok(customers) => customers,
        Err(e) => {
            println!("\nError fetching customers: {e}\n");
            return None;
        }
    };
    if customers.is_empty() {
        println!("\n{empty_message}\n");
        return None;
    }

    println!("\nBelow is a list of customers: \n");
    for customer in &customers {
        println!("{customer}");
    }
    println!();
    Some(customers)
}

fn handle_update(store: &dyn CustomerStore, prompt: &mut dyn Prompt) -> Result<()> {
    if list_for_selection(store, "No customers to update.").is_none() {
        return Ok(());
    }

    let raw = prompt.line("Copy and paste the id of the customer you would like to update here")?;
    let Some(id) = parse_id(&raw) else {
        println!("\nInvalid ID format.\n");
        return Ok(());
    };

    let current = match store.find_by_id(id) {
        Ok(Some(customer)) => customer,
        Ok(None) => {
            println!("\nCustomer not found with that ID.\n");
            return Ok(());
        }
        Err(e) => {
            println!("\nError updating customer: {e}\n");
            return Ok(());
        }
    };

    let new_name = prompt.line(&format!(
        "What is the customer's new name? (Current: {})",
        current.name
    ))?;
    let new_age = prompt.line(&format!(
        "What is the customer's new age? (Current: {})",
        current.age
    ))?;
    let fields = current.apply(&new_name, &new_age);

    let sp = spinner("Updating...");
    let updated = store.update_by_id(id, fields);
    sp.finish_and_clear();

    match updated {
        Ok(Some(customer)) => println!("\nCustomer updated successfully: {customer}\n"),
        // The record can vanish between the lookup above and this call.
        Ok(None) => println!("\nFailed to update customer. Customer might have been deleted.\n"),
        Err(e) => println!("\nError updating customer: {e}\n"),
    }
    Ok(())
}

fn handle_delete(store: &dyn CustomerStore, prompt: &mut dyn Prompt) -> Result<()> {
    if list_for_selection(store, "No customers to delete.").is_none() {
        return Ok(());
    }

    let raw = prompt.line("Copy and paste the id of the customer you would like to delete here")?;
    let Some(id) = parse_id(&raw) else {
        println!("\nInvalid ID format.\n");
        return Ok(());
    };

    // No existence check first: the delete call itself reports whether a
    // document was removed.
    let sp = spinner("Deleting...");
    let deleted = store.delete_by_id(id);
    sp.finish_and_clear();

    match deleted {
        Ok(Some(customer)) => println!(
            "\nCustomer deleted successfully: Name: {}, Age: {}\n",
            customer.name, customer.age
        ),
        Ok(None) => println!("\nCustomer not found with that ID. No customer deleted.\n"),
        Err(e) => println!("\nError deleting customer: {e}\n"),
    }
    Ok(())
}
