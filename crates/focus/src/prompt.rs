//! Line-based stdin prompts for `check`, `end` and `resume`.

use std::io::{BufRead, Write};

/// Print `question` and read one trimmed line. `None` on EOF.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{} ", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until the answer starts with one of `keys` (case-insensitive).
/// Returns the matching key, or `None` on EOF.
pub fn choose<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    keys: &[char],
) -> std::io::Result<Option<char>> {
    loop {
        let Some(answer) = ask(input, output, question)? else {
            return Ok(None);
        };
        let first = answer.chars().next().map(|c| c.to_ascii_lowercase());
        if let Some(key) = first.filter(|c| keys.contains(c)) {
            return Ok(Some(key));
        }
        let options: Vec<String> = keys.iter().map(char::to_string).collect();
        writeln!(output, "Please answer {}.", options.join("/"))?;
    }
}

/// Pick a 1-based entry out of `count`. Empty answer or EOF cancels.
pub fn pick_index<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    count: usize,
) -> std::io::Result<Option<usize>> {
    loop {
        let Some(answer) = ask(input, output, question)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
            _ => writeln!(output, "Enter a number between 1 and {}.", count)?,
        }
    }
}

/// `ask`/`choose` against the process's stdin and stdout.
pub fn stdin_ask(question: &str) -> std::io::Result<Option<String>> {
    ask(&mut std::io::stdin().lock(), &mut std::io::stdout(), question)
}

pub fn stdin_choose(question: &str, keys: &[char]) -> std::io::Result<Option<char>> {
    choose(&mut std::io::stdin().lock(), &mut std::io::stdout(), question, keys)
}

pub fn stdin_pick_index(question: &str, count: usize) -> std::io::Result<Option<usize>> {
    pick_index(&mut std::io::stdin().lock(), &mut std::io::stdout(), question, count)
}
