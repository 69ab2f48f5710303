// Entrypoint for the CRM CLI.
// - Keeps `main` small: connect to the store and hand it to the UI loop.
// - Returns `anyhow::Result`, so a failed MongoDB connection prints the
//   error and exits non-zero before the menu is ever shown.

use crm_cli::{store::MongoStore, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // Connect using the `MONGODB_URI` environment variable. This is the
    // only fatal error path; every later failure is caught per action.
    let store = MongoStore::connect()?;

    println!("Welcome to the CRM\n");

    // Start the interactive menu. This call blocks until the user quits.
    main_menu(&store)?;

    println!("\nExiting...");
    store.close();
    Ok(())
}
