//! Yes/no confirmation prompts.

use std::io::{self, BufRead, Write};

/// Ask `question` on `output` and read a yes/no answer from `input`.
///
/// An empty answer (or end of input) selects `default`. Unrecognised answers re-prompt.
pub fn confirm<R, W>(input: &mut R, output: &mut W, question: &str, default: bool) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        write!(output, "{question} {hint}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(default);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Error: invalid input")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::confirm;

    fn ask(answers: &str, default: bool) -> (bool, String) {
        let mut input = answers.as_bytes();
        let mut output = Vec::new();
        let answer = confirm(&mut input, &mut output, "Beer?", default).unwrap();
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn empty_answer_uses_default() {
        assert!(ask("\n", true).0);
        assert!(!ask("\n", false).0);
        assert!(ask("", true).0);
    }

    #[test]
    fn explicit_answers_win() {
        assert!(!ask("n\n", true).0);
        assert!(ask("YES\n", false).0);
    }

    #[test]
    fn unrecognised_answer_reprompts() {
        let (answer, transcript) = ask("maybe\ny\n", false);
        assert!(answer);
        assert_eq!(transcript.matches("Beer? [y/N]: ").count(), 2);
        assert!(transcript.contains("invalid input"));
    }
}
