use anyhow::Result;
use console::style;
use dialoguer::Input;
use std::{
    io::{stdin, stdout, BufRead, Write},
    path::Path,
};

/// Ask whether generation may continue into an already existing directory.
pub fn confirm_existing_target(path: &Path) -> Result<bool> {
    let prompt = format!(
        "The target path \"{}\" already exists. Continue? [Y/N]",
        path.display()
    );

    let answer = if console::user_attended() {
        Input::<String>::new()
            .with_prompt(style(prompt).bold().yellow().to_string())
            .allow_empty(true)
            .interact_text()?
    } else {
        print!("{prompt} ");
        stdout().flush()?;
        read_answer(&mut stdin().lock())?
    };
    Ok(is_affirmative(&answer))
}

/// One line of input without its terminator; end of input reads as empty.
pub fn read_answer(reader: &mut impl BufRead) -> std::io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}
