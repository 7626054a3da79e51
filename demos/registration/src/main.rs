//! # Event Registration Demo
//!
//! A console stand-in for the form's UI surface. It drives the
//! [`FormController`] through an explicit event loop: each line of input
//! is one discrete user action, exactly like change and submit events in
//! a rendered form.
//!
//! ## Running
//!
//! ```bash
//! cargo run --package registration-demo
//! ```
//!
//! Commands:
//!
//! - `set <field> <value>` - edit a field (e.g. `set name Ada`)
//! - `submit` - validate and, on success, print the accepted values
//! - `show` - print the rendered form HTML
//! - `help` - list the commands and field names
//! - `quit` - exit

use std::io::{self, BufRead, Write};
use std::path::Path;

use eventform_core::logging::setup_logging;
use eventform_core::{EventFormResult, Settings};
use eventform_forms::form::values_as_pretty_json;
use eventform_forms::{Field, FieldValues, FormController};

const SETTINGS_FILE: &str = "eventform.toml";

fn main() -> EventFormResult<()> {
    // Load settings - try TOML first, fall back to defaults
    let settings = if Path::new(SETTINGS_FILE).exists() {
        Settings::from_toml_file(SETTINGS_FILE)?
    } else {
        Settings::default()
    };
    setup_logging(&settings);
    tracing::info!(debug = settings.debug, "registration demo starting");

    println!("Event Registration");
    println!("Type 'help' for commands.\n");

    let mut form = FormController::registration(|values: &FieldValues| {
        println!("Form Data:");
        println!("{}", values_as_pretty_json(values));
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        match line.split_once(' ').unwrap_or((line, "")) {
            ("quit" | "exit", _) => break,
            ("help", _) => print_help(),
            ("show", _) => println!("{}", form.as_html()),
            ("submit", _) => {
                form.handle_submit();
                for (field, message) in form.errors() {
                    println!("  {field}: {message}");
                }
            }
            ("set", rest) => {
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                match Field::from_name(name) {
                    Some(field) => form.handle_change(field, value),
                    None => println!("  unknown field: {name:?} (try 'help')"),
                }
            }
            ("", _) => {}
            (other, _) => println!("  unknown command: {other:?} (try 'help')"),
        }
    }

    tracing::info!("registration demo exiting");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  set <field> <value>   edit a field");
    println!("  submit                validate and resolve");
    println!("  show                  print the rendered form HTML");
    println!("  quit                  exit");
    print!("Fields:");
    for field in Field::ALL {
        print!(" {field}");
    }
    println!();
}
