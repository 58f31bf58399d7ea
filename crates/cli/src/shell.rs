// Interactive shell
//
// Terminal rendition of the tab bar: one command per tab plus settings.
// The loop owns stdin; forms and tables do the rest.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use tracing::warn;

use tela_core::application::MonthKey;
use tela_core::TrackerService;

use crate::forms;
use crate::render;

pub fn run(service: &mut TrackerService) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with(service, &mut input)
}

fn run_with(service: &mut TrackerService, input: &mut impl BufRead) -> Result<()> {
    println!("{}", "Tela - screen tracking".cyan().bold());
    println!("Type 'help' for the command list.");

    loop {
        print!("{} ", "tela>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "entry" | "register" => entry(service, input)?,
            "recording" | "record" => recording(service, input, rest)?,
            "delivery" | "deliver" => delivery(service, input, rest)?,
            "report" => report(service, input, rest)?,
            "search" => search(service, rest),
            "settings" => settings(service, input)?,
            "help" => help(),
            "quit" | "exit" => break,
            other => {
                println!("{}", format!("unknown command: {}", other).red());
                println!("Type 'help' for the command list.");
            }
        }
    }

    Ok(())
}

fn entry(service: &mut TrackerService, input: &mut impl BufRead) -> Result<()> {
    let Some(form) = forms::registration_form(input, service.settings())? else {
        return Ok(());
    };
    match service.register(form) {
        Ok(screen) => render::success(&format!(
            "Screen {} registered for {}",
            screen.tracking_number, screen.client_name
        )),
        Err(err) => {
            warn!(error = %err, "Registration rejected");
            render::error(&err);
        }
    }
    Ok(())
}

fn recording(service: &mut TrackerService, input: &mut impl BufRead, term: &str) -> Result<()> {
    let screens = service.awaiting_recording(term);
    if screens.is_empty() {
        render::notice("No screens found");
        return Ok(());
    }
    println!("{}", render::screen_table(&screens));

    let Some(screen) = forms::select_screen(input, &screens)? else {
        return Ok(());
    };
    let id = screen.id.clone();
    let tracking = screen.tracking_number.clone();

    let Some(form) = forms::recording_form(input, service.today())? else {
        return Ok(());
    };
    match service.record(&id, form) {
        Ok(screen) => render::success(&format!(
            "Screen {} now {}",
            tracking,
            render::status_badge(screen.status)
        )),
        Err(err) => {
            warn!(screen_id = %id, error = %err, "Recording rejected");
            render::error(&err);
        }
    }
    Ok(())
}

fn delivery(service: &mut TrackerService, input: &mut impl BufRead, term: &str) -> Result<()> {
    let Some(month) = forms::month_prompt(input, service.current_month())? else {
        return Ok(());
    };

    let screens = service.awaiting_delivery(Some(month), term);
    if screens.is_empty() {
        render::notice("No screens found");
        return Ok(());
    }
    println!("{}", render::screen_table(&screens));

    let Some(screen) = forms::select_screen(input, &screens)? else {
        return Ok(());
    };
    let id = screen.id.clone();
    let tracking = screen.tracking_number.clone();

    let Some(form) = forms::delivery_form(input, service.settings())? else {
        return Ok(());
    };
    match service.deliver(&id, form) {
        Ok(screen) => render::success(&format!(
            "Screen {} now {}",
            tracking,
            render::status_badge(screen.status)
        )),
        Err(err) => {
            warn!(screen_id = %id, error = %err, "Delivery rejected");
            render::error(&err);
        }
    }
    Ok(())
}

fn report(service: &TrackerService, input: &mut impl BufRead, arg: &str) -> Result<()> {
    let month = if arg.is_empty() {
        match forms::month_prompt(input, service.current_month())? {
            Some(month) => month,
            None => return Ok(()),
        }
    } else {
        match arg.parse::<MonthKey>() {
            Ok(month) => month,
            Err(err) => {
                render::error(&err);
                return Ok(());
            }
        }
    };

    let report = service.monthly_report(month);
    println!("{}", format!("Summary for {}", report.month).cyan().bold());
    println!("Total screens: {}", report.total);
    if report.screens.is_empty() {
        render::notice("No screens found");
    } else {
        println!("{}", render::report_table(&report));
    }
    Ok(())
}

fn search(service: &TrackerService, term: &str) {
    if term.is_empty() {
        render::notice("usage: search <term>");
        return;
    }
    let screens = service.search(term);
    if screens.is_empty() {
        render::notice("No screens found");
    } else {
        println!("{}", render::screen_table(&screens));
    }
}

fn settings(service: &mut TrackerService, input: &mut impl BufRead) -> Result<()> {
    loop {
        let rosters = service.settings();
        println!("{}", "Settings".cyan().bold());
        println!("  Art finishers:   {}", rosters.art_finishers.join(", "));
        println!("  Delivery people: {}", rosters.delivery_people.join(", "));
        println!(
            "Commands: add-finisher <name>, remove-finisher <name>, \
             add-person <name>, remove-person <name>, done"
        );

        print!("{} ", "settings>".cyan().bold());
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, name) = match line.split_once(char::is_whitespace) {
            Some((command, name)) => (command, name.trim()),
            None => (line, ""),
        };

        let rosters = service.settings_mut();
        match command {
            "add-finisher" => roster_change(rosters.add_art_finisher(name), name, "added"),
            "remove-finisher" => roster_change(rosters.remove_art_finisher(name), name, "removed"),
            "add-person" => roster_change(rosters.add_delivery_person(name), name, "added"),
            "remove-person" => roster_change(rosters.remove_delivery_person(name), name, "removed"),
            "done" | "quit" | "exit" => return Ok(()),
            other => println!("{}", format!("unknown command: {}", other).red()),
        }
    }
}

fn roster_change(changed: bool, name: &str, verb: &str) {
    if changed {
        render::success(&format!("{} {}", name, verb));
    } else {
        render::notice("Nothing changed");
    }
}

fn help() {
    println!("{}", "Commands".cyan().bold());
    println!("  entry                Register a new screen");
    println!("  recording [term]     List screens in Production and record one");
    println!("  delivery [term]      List Recorded screens and deliver one");
    println!("  report [YYYY-MM]     Monthly summary");
    println!("  search <term>        Find screens by client or tracking number");
    println!("  settings             Manage the rosters");
    println!("  quit                 Leave");
}
