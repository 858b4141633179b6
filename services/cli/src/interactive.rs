use crate::render;
use sleep_assessment::analytics::AnalyticsSink;
use sleep_assessment::assessment::{AssessmentService, AssessmentServiceError, Language};
use sleep_assessment::error::AppError;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// 1-based option number as typed.
    Choose(usize),
    Back,
    Retake,
    Language(Language),
    Quit,
}

fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_ascii_lowercase();

    match command.as_str() {
        "q" | "quit" => Ok(Input::Quit),
        "b" | "back" => Ok(Input::Back),
        "r" | "retake" => Ok(Input::Retake),
        "l" | "lang" => {
            let code = parts.next().ok_or_else(language_usage)?;
            code.parse::<Language>()
                .map(Input::Language)
                .map_err(|err| format!("{err}\n{}", language_usage()))
        }
        "" => Err("enter an option number, b, l <code>, r or q".to_string()),
        other => match other.parse::<usize>() {
            Ok(number) if number >= 1 => Ok(Input::Choose(number)),
            _ => Err(format!("unrecognised input '{line}'")),
        },
    }
}

fn language_usage() -> String {
    let choices: Vec<String> = Language::ordered()
        .into_iter()
        .map(|language| format!("{} = {}", language.code(), language.native_name()))
        .collect();
    format!("usage: l <code> ({})", choices.join(", "))
}

/// Drives `service` from line-based input until the user quits or input ends.
///
/// Rejected transitions are shown to the user and the loop continues; content failures
/// abort.
pub(crate) fn run<A, R, W>(
    service: &mut AssessmentService<'_, A>,
    mut input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    A: AnalyticsSink,
    R: BufRead,
    W: Write,
{
    render::title(out, service.quiz_title()?)?;
    writeln!(out, "{}", service.disclaimer()?)?;

    let mut raw = Vec::new();
    loop {
        show_current(service, out)?;
        write!(out, "> ")?;
        out.flush()?;

        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            debug!("input closed");
            break;
        }
        let Ok(line) = std::str::from_utf8(&raw) else {
            writeln!(out, "input is not valid UTF-8; please type it again")?;
            continue;
        };

        let outcome = match parse_input(line) {
            Ok(Input::Quit) => break,
            Ok(Input::Choose(number)) => service.select_option(number - 1).map(|_| ()),
            Ok(Input::Back) => service.go_back().map(|_| ()),
            Ok(Input::Retake) => {
                service.reset();
                Ok(())
            }
            Ok(Input::Language(language)) => service.change_language(language),
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match outcome {
            Ok(()) => {}
            Err(AssessmentServiceError::Quiz(err)) => writeln!(out, "{err}")?,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn show_current<A, W>(service: &AssessmentService<'_, A>, out: &mut W) -> Result<(), AppError>
where
    A: AnalyticsSink,
    W: Write,
{
    if let Some(result) = service.result()? {
        render::result(out, &result)?;
        let interface = service.interface()?;
        writeln!(out)?;
        writeln!(out, "r) {}  q) quit", interface.retake)?;
        return Ok(());
    }

    if let Some(question) = service.current_question()? {
        let progress = service.progress()?;
        render::question(out, &progress, &question, &service.interface()?.back)?;
    }
    Ok(())
}
