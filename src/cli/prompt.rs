//! Interactive form filling over a line-oriented reader.

use std::io::{BufRead, Write};

use crate::error::{PodgenError, Result};
use crate::render::guest_hint;
use crate::types::{FormState, Gender};

/// Prompt for form fields.
///
/// With `full` every field is asked for; otherwise only the empty required
/// ones. Required fields are re-asked while the answer is empty; optional
/// fields keep their current value on an empty answer.
pub fn fill_form<R: BufRead, W: Write>(
    form: &mut FormState,
    input: &mut R,
    output: &mut W,
    full: bool,
) -> Result<()> {
    if full || form.topic.is_empty() {
        form.topic = prompt_required(input, output, "Topic")?;
    }
    if full || form.host.is_empty() {
        form.host = prompt_required(input, output, "Host Name")?;
    }
    if full {
        form.host_gender = prompt_gender(input, output, "Host Gender", form.host_gender)?;
        if let Some(guests) = prompt_line(input, output, "Guests (comma-separated)")? {
            form.guests_text = guests;
        }
        writeln!(output, "{}", guest_hint(form))?;
        form.guest_gender =
            prompt_gender(input, output, "Guest Gender (applied to all)", form.guest_gender)?;
        if let Some(info) = prompt_line(input, output, "Additional Info")? {
            form.info = info;
        }
    }
    Ok(())
}

/// Ask once. `None` on end of input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String> {
    loop {
        match prompt_line(input, output, label)? {
            Some(value) if !value.is_empty() => return Ok(value),
            Some(_) => writeln!(output, "{label} is required.")?,
            None => {
                return Err(PodgenError::InvalidArgument(format!(
                    "{label} is required"
                )))
            }
        }
    }
}

fn prompt_gender<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: Gender,
) -> Result<Gender> {
    let label = format!("{label} [female/male, default {default}]");
    loop {
        match prompt_line(input, output, &label)? {
            None => return Ok(default),
            Some(value) if value.trim().is_empty() => return Ok(default),
            Some(value) => match value.trim().parse::<Gender>() {
                Ok(gender) => return Ok(gender),
                Err(_) => writeln!(output, "Please answer female or male.")?,
            },
        }
    }
}
