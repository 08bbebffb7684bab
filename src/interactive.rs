//! Menu-driven session for picking numbered images to analyze.
//!
//! Reads from any `BufRead` and writes to any `Write`, so the session runs the
//! same against a terminal or an in-memory script. Invalid input re-prompts in a
//! loop; end of input ends the session.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Number of images offered by the menu.
pub const IMAGE_CHOICES: u32 = 10;

pub fn image_file_name(choice: u32) -> String {
    format!("image{}.png", choice)
}

pub fn image_path(dir: &Path, choice: u32) -> PathBuf {
    dir.join(image_file_name(choice))
}

pub fn print_menu<W: Write>(output: &mut W, choices: u32) -> io::Result<()> {
    writeln!(output, "Choose an image from the options below:")?;
    for i in 1..=choices {
        writeln!(output, "{}. {}", i, image_file_name(i))?;
    }
    Ok(())
}

fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts until a number in `1..=choices` is entered. `None` on end of input.
pub fn read_image_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    choices: u32,
) -> io::Result<Option<u32>> {
    loop {
        write!(
            output,
            "Enter the number of the image you want to analyze (1 to {}): ",
            choices
        )?;
        output.flush()?;

        let Some(line) = read_trimmed_line(input)? else {
            return Ok(None);
        };

        match line.parse::<u32>() {
            Ok(choice) if (1..=choices).contains(&choice) => return Ok(Some(choice)),
            _ => writeln!(
                output,
                "Invalid choice! Choose a number between 1 and {}.",
                choices
            )?,
        }
    }
}

/// `true` only for an explicit `y`.
pub fn ask_continue<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "Analyze another image? (y/n): ")?;
    output.flush()?;
    Ok(read_trimmed_line(input)?.is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
}

/// Runs the menu loop, calling `analyze` once per chosen image.
///
/// Returns how many images were analyzed.
pub fn run_session<R, W, F>(
    input: &mut R,
    output: &mut W,
    choices: u32,
    mut analyze: F,
) -> io::Result<u32>
where
    R: BufRead,
    W: Write,
    F: FnMut(u32, &mut W) -> io::Result<()>,
{
    let mut analyzed = 0;
    print_menu(output, choices)?;

    loop {
        let Some(choice) = read_image_choice(input, output, choices)? else {
            break;
        };

        analyze(choice, output)?;
        analyzed += 1;

        if !ask_continue(input, output)? {
            writeln!(output, "Thank you for using the program. See you next time!")?;
            break;
        }
        writeln!(output, "Sure, please choose another image:")?;
        print_menu(output, choices)?;
    }

    Ok(analyzed)
}
