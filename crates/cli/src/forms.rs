// Interactive forms
//
// Prompt-per-field versions of the entry, recording and delivery dialogs.
// Every reader takes any BufRead so a scripted session can drive it; None
// always means the input ran out.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;

use tela_core::application::register::TRACKING_NUMBER_LEN;
use tela_core::application::{DeliveryForm, MonthKey, RecordingForm, RegistrationForm};
use tela_core::domain::{Deadline, DeliveryMethod, Screen, Settings, TimeSlot, Weekday};

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the parser accepts the answer. A blank answer picks the
/// default when there is one.
fn ask<T>(
    input: &mut impl BufRead,
    label: &str,
    default: Option<T>,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<Option<T>>
where
    T: std::fmt::Display,
{
    loop {
        match &default {
            Some(value) => println!("{} [{}]", label.bold(), value),
            None => println!("{}", label.bold()),
        }
        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };
        if answer.is_empty() && default.is_some() {
            return Ok(default);
        }
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(message) => println!("{}", message.red()),
        }
    }
}

fn required_text(answer: &str, what: &str) -> std::result::Result<String, String> {
    if answer.is_empty() {
        Err(format!("{} is required", what))
    } else {
        Ok(answer.to_string())
    }
}

pub fn registration_form(
    input: &mut impl BufRead,
    settings: &Settings,
) -> Result<Option<RegistrationForm>> {
    println!("{}", "New screen".cyan().bold());

    let Some(tracking_number) = ask(input, "Tracking number", None, |answer| {
        if answer.chars().count() == TRACKING_NUMBER_LEN {
            Ok(answer.to_string())
        } else {
            Err(format!(
                "exactly {} characters, e.g. NR0001",
                TRACKING_NUMBER_LEN
            ))
        }
    })?
    else {
        return Ok(None);
    };

    let Some(client_name) = ask(input, "Client name", None, |answer| {
        required_text(answer, "client name")
    })?
    else {
        return Ok(None);
    };

    let Some(quantity) = ask(input, "Quantity", Some(1u32), |answer| {
        answer
            .parse::<u32>()
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or_else(|| "a whole number of at least 1".to_string())
    })?
    else {
        return Ok(None);
    };

    println!("Art finishers: {}", settings.art_finishers.join(", "));
    let Some(art_finisher) = ask(input, "Art finisher", None, |answer| {
        if settings.has_art_finisher(answer) {
            Ok(answer.to_string())
        } else {
            Err(format!(
                "pick one of: {}",
                settings.art_finishers.join(", ")
            ))
        }
    })?
    else {
        return Ok(None);
    };

    let days: Vec<String> = Weekday::ALL.iter().map(ToString::to_string).collect();
    println!("Days: {}", days.join(", "));
    let Some(day) = ask(input, "Deadline day", None, |answer| {
        answer.parse::<Weekday>().map_err(|err| err.to_string())
    })?
    else {
        return Ok(None);
    };

    let slots: Vec<String> = TimeSlot::all().map(|slot| slot.to_string()).collect();
    println!("Slots: {}", slots.join(", "));
    let Some(time) = ask(input, "Deadline time", None, |answer| {
        answer.parse::<TimeSlot>().map_err(|err| err.to_string())
    })?
    else {
        return Ok(None);
    };

    Ok(Some(RegistrationForm {
        tracking_number,
        client_name,
        quantity,
        art_finisher,
        deadline: Deadline { day, time },
    }))
}

pub fn recording_form(
    input: &mut impl BufRead,
    today: NaiveDate,
) -> Result<Option<RecordingForm>> {
    let Some(date) = ask(input, "Recording date", Some(today), |answer| {
        NaiveDate::parse_from_str(answer, "%Y-%m-%d")
            .map_err(|_| "expected a date like 2024-05-01".to_string())
    })?
    else {
        return Ok(None);
    };

    let Some(recorded_by) = ask(input, "Recorded by", None, |answer| {
        required_text(answer, "recorder name")
    })?
    else {
        return Ok(None);
    };

    Ok(Some(RecordingForm { date, recorded_by }))
}

pub fn delivery_form(
    input: &mut impl BufRead,
    settings: &Settings,
) -> Result<Option<DeliveryForm>> {
    let methods: Vec<String> = DeliveryMethod::ALL.iter().map(ToString::to_string).collect();
    println!("Methods: {}", methods.join(", "));
    let Some(method) = ask(
        input,
        "Delivery method",
        Some(DeliveryMethod::Courier),
        |answer| answer.parse::<DeliveryMethod>().map_err(|err| err.to_string()),
    )?
    else {
        return Ok(None);
    };

    println!("Delivery people: {}", settings.delivery_people.join(", "));
    let Some(delivery_person) = ask(input, "Delivery person", None, |answer| {
        required_text(answer, "delivery person name")
    })?
    else {
        return Ok(None);
    };

    Ok(Some(DeliveryForm {
        method,
        delivery_person,
    }))
}

pub fn month_prompt(input: &mut impl BufRead, default: MonthKey) -> Result<Option<MonthKey>> {
    ask(input, "Month (YYYY-MM)", Some(default), |answer| {
        answer.parse::<MonthKey>().map_err(|err| err.to_string())
    })
}

/// Pick one screen from a rendered list by row number. Blank input
/// cancels the selection.
pub fn select_screen<'a>(
    input: &mut impl BufRead,
    screens: &'a [Screen],
) -> Result<Option<&'a Screen>> {
    loop {
        println!(
            "{}",
            format!("Select a screen (1-{}, blank to cancel)", screens.len()).bold()
        );
        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse::<usize>() {
            Ok(row) if (1..=screens.len()).contains(&row) => return Ok(Some(&screens[row - 1])),
            _ => println!("{}", "enter one of the row numbers".red()),
        }
    }
}
