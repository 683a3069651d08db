//! Interactive worksheet
//!
//! Reads one command per line and applies it to a [`Session`]. Course rows
//! are numbered from 1 in this shell.

use super::grades::render_table;
use find_my_cgpa::core::grade_table::GradingScheme;
use find_my_cgpa::core::input::{parse_course_spec, parse_number};
use find_my_cgpa::core::models::{CourseEntry, Scale};
use find_my_cgpa::core::session::Session;
use find_my_cgpa::GpaError;
use find_my_cgpa::{debug, info};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  add [GRADE[:CREDITS]]   append a course row (blank if no arguments)
  grade N GRADE           set the grade of row N
  credits N CREDITS       set the credits of row N (negatives become 0)
  remove N                delete row N
  list                    show the course rows
  scale 4.0|5.0           select the scale for calc and convert
  scheme NAME             select the grading scheme (plus-minus, letter)
  grades                  show the grade table
  calc                    compute the CGPA and start a fresh row list
  cgpa VALUE              enter a CGPA to convert
  convert                 convert the current CGPA to the other scale
  reset                   clear rows and results
  help                    show this help
  quit                    leave the shell";

/// Result of executing one shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Keep reading; print the contained text (may be empty)
    Continue(String),
    /// Leave the shell
    Quit,
}

/// Run the shell on stdin/stdout until `quit` or end of input.
pub fn run(mut session: Session) {
    info!(
        "Shell started with scheme {} on the {} scale",
        session.scheme(),
        session.scale()
    );
    println!("FindMyCgpa shell. Type `help` for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        match execute(&mut session, &line) {
            ShellOutcome::Continue(text) if text.is_empty() => {}
            ShellOutcome::Continue(text) => println!("{text}"),
            ShellOutcome::Quit => break,
        }
    }
}

/// Apply one command line to the session.
pub fn execute(session: &mut Session, line: &str) -> ShellOutcome {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((command, args)) = words.split_first() else {
        return ShellOutcome::Continue(String::new());
    };
    debug!("shell command: {line}");

    let result = match command.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => return ShellOutcome::Quit,
        "help" | "?" => Ok(HELP.to_string()),
        "add" => add(session, args),
        "grade" => edit_grade(session, args),
        "credits" => edit_credits(session, args),
        "remove" | "rm" => remove(session, args),
        "list" | "ls" => Ok(list(session)),
        "scale" => select_scale(session, args),
        "scheme" => select_scheme(session, args),
        "grades" => Ok(render_table(session.scheme(), session.scale())
            .trim_end()
            .to_string()),
        "calc" | "calculate" => session
            .calculate()
            .map(|r| format!("Your CGPA: {}", r.display()))
            .map_err(|e| e.to_string()),
        "cgpa" => enter_cgpa(session, args),
        "convert" => Ok(session.convert().map_or_else(
            || "Nothing to convert yet: run `calc` or enter `cgpa VALUE` first".to_string(),
            |c| format!("Converted CGPA: {} ({} scale)", c.display(), c.to),
        )),
        "reset" => {
            session.reset();
            Ok("✓ Cleared".to_string())
        }
        other => Err(format!("Unknown command '{other}' (type `help`)")),
    };

    ShellOutcome::Continue(result.unwrap_or_else(|e| format!("✗ {e}")))
}

fn add(session: &mut Session, args: &[&str]) -> Result<String, String> {
    let entry = match args {
        [] => CourseEntry::blank(),
        [spec] if spec.contains(':') => parse_course_spec(spec).map_err(|e| e.to_string())?,
        [grade] => CourseEntry::new(*grade, 0.0),
        [grade, credits] => {
            let credits = parse_number(credits).map_err(|e| e.to_string())?;
            CourseEntry::new(*grade, credits)
        }
        _ => return Err("usage: add [GRADE[:CREDITS]]".to_string()),
    };
    session.courses_mut().push(entry);
    Ok(format!("✓ Row {} added", session.courses().len()))
}

fn edit_grade(session: &mut Session, args: &[&str]) -> Result<String, String> {
    let [row, grade] = args else {
        return Err("usage: grade N GRADE".to_string());
    };
    let index = row_index(row)?;
    session
        .courses_mut()
        .set_grade(index, grade)
        .map_err(row_error)?;
    Ok(String::new())
}

fn edit_credits(session: &mut Session, args: &[&str]) -> Result<String, String> {
    let [row, credits] = args else {
        return Err("usage: credits N CREDITS".to_string());
    };
    let index = row_index(row)?;
    let credits = parse_number(credits).map_err(|e| e.to_string())?;
    session
        .courses_mut()
        .set_credits(index, credits)
        .map_err(row_error)?;
    Ok(String::new())
}

fn remove(session: &mut Session, args: &[&str]) -> Result<String, String> {
    let [row] = args else {
        return Err("usage: remove N".to_string());
    };
    let index = row_index(row)?;
    session
        .courses_mut()
        .remove(index)
        .map_err(row_error)?;
    Ok(format!("✓ Row {row} removed"))
}

fn list(session: &Session) -> String {
    let courses = session.courses();
    if courses.is_empty() {
        return "(no rows)".to_string();
    }
    courses
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let grade = if entry.grade.is_empty() { "-" } else { &entry.grade };
            format!("{:>3}. {grade:<4} {}", idx + 1, entry.credits())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn select_scale(session: &mut Session, args: &[&str]) -> Result<String, String> {
    let [raw] = args else {
        return Err("usage: scale 4.0|5.0".to_string());
    };
    let scale = raw.parse::<Scale>().map_err(|e| format!("{e}"))?;
    session.set_scale(scale);
    Ok(format!("✓ Scale set to {scale}"))
}

fn select_scheme(session: &mut Session, args: &[&str]) -> Result<String, String> {
    let [raw] = args else {
        return Err("usage: scheme plus-minus|letter".to_string());
    };
    let scheme = raw.parse::<GradingScheme>().map_err(|e| format!("{e}"))?;
    session.set_scheme(scheme);
    Ok(format!("✓ Scheme set to {scheme}"))
}

fn enter_cgpa(session: &mut Session, args: &[&str]) -> Result<String, String> {
    let [raw] = args else {
        return Err("usage: cgpa VALUE".to_string());
    };
    let value = parse_number(raw).map_err(|e| e.to_string())?;
    session.set_cgpa(value);
    Ok(String::new())
}

/// Describe a list error in the shell's 1-based row numbering
fn row_error(err: GpaError) -> String {
    match err {
        GpaError::CourseIndex { index, len } => {
            format!("no row {} (list has {len} row(s))", index + 1)
        }
        other => other.to_string(),
    }
}

/// Convert a 1-based row number into a list index
fn row_index(raw: &str) -> Result<usize, String> {
    raw.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| format!("invalid row number '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(outcome: ShellOutcome) -> String {
        match outcome {
            ShellOutcome::Continue(text) => text,
            ShellOutcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_full_worksheet_flow() {
        let mut session = Session::default();
        text(execute(&mut session, "grade 1 a"));
        text(execute(&mut session, "credits 1 3"));
        text(execute(&mut session, "add B 4"));
        text(execute(&mut session, "add c:2"));

        assert_eq!(text(execute(&mut session, "calc")), "Your CGPA: 3.11");
        assert_eq!(session.courses().len(), 1);
        assert_eq!(
            text(execute(&mut session, "convert")),
            "Converted CGPA: 3.89 (5.0 scale)"
        );
    }

    #[test]
    fn test_convert_before_any_cgpa() {
        let mut session = Session::default();
        let out = text(execute(&mut session, "convert"));
        assert!(out.starts_with("Nothing to convert yet"));
        assert!(session.last_conversion().is_none());
    }

    #[test]
    fn test_zero_credit_calc_reports_error() {
        let mut session = Session::default();
        let out = text(execute(&mut session, "calc"));
        assert_eq!(out, "✗ cannot compute CGPA: total credit hours is zero");
    }

    #[test]
    fn test_negative_credits_clamped() {
        let mut session = Session::default();
        text(execute(&mut session, "credits 1 -3"));
        assert!(session.courses().entries()[0].credits().abs() < f64::EPSILON);
    }

    #[test]
    fn test_bad_rows_and_commands() {
        let mut session = Session::default();
        assert!(text(execute(&mut session, "grade 0 A")).starts_with("✗ invalid row number"));
        assert_eq!(
            text(execute(&mut session, "remove 5")),
            "✗ no row 5 (list has 1 row(s))"
        );
        text(execute(&mut session, "add"));
        assert_eq!(
            text(execute(&mut session, "grade 3 A")),
            "✗ no row 3 (list has 2 row(s))"
        );
        assert_eq!(
            text(execute(&mut session, "credits 3 1")),
            "✗ no row 3 (list has 2 row(s))"
        );
        assert!(text(execute(&mut session, "scale 10")).starts_with("✗ unsupported scale"));
        assert!(text(execute(&mut session, "fly")).starts_with("✗ Unknown command"));
        assert_eq!(text(execute(&mut session, "   ")), "");
    }

    #[test]
    fn test_scale_and_entered_cgpa() {
        let mut session = Session::default();
        assert_eq!(text(execute(&mut session, "scale 5")), "✓ Scale set to 5.0");
        text(execute(&mut session, "cgpa 4.5"));
        assert_eq!(
            text(execute(&mut session, "convert")),
            "Converted CGPA: 3.60 (4.0 scale)"
        );
    }

    #[test]
    fn test_list_and_quit() {
        let mut session = Session::default();
        text(execute(&mut session, "add A- 2.5"));
        let listing = text(execute(&mut session, "list"));
        assert_eq!(listing, "  1. -    0\n  2. A-   2.5");
        assert_eq!(execute(&mut session, "quit"), ShellOutcome::Quit);
    }
}
