//! Line-oriented terminal front end for the registration form.

mod command;
mod render;
mod submitter;

use std::fs::File;
use std::io::Write;

use enrollment_lib::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

use command::Command;
use submitter::ConsoleSubmitter;

#[tokio::main]
async fn main() {
    // Log to a file so the form stays readable on the terminal.
    let log_file = File::create("enrollment.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run(Form::new(ConsoleSubmitter)).await {
        eprintln!("Error: {}", e);
    }
}

async fn run(form: Form) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    println!("{}", render::form(&form.state(), form.config()));
    println!("{}", command::HELP);

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Set { field, value }) => form.on_change(field, value),
            Ok(Command::Submit) => {
                let outcome = form.on_submit().await;
                println!("{}", render::outcome(&outcome, &form.state()));
                if matches!(outcome, SubmitOutcome::Submitted(_)) {
                    form.dismiss_notice();
                }
            }
            Ok(Command::Reset) => form.on_reset(),
            Ok(Command::Show) => println!("{}", render::form(&form.state(), form.config())),
            Ok(Command::Help) => println!("{}", command::HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }

        if form.store().is_dirty() {
            form.store().clear_dirty();
            println!("{}", render::form(&form.state(), form.config()));
        }
    }

    log::info!("Session ended");
    Ok(())
}
