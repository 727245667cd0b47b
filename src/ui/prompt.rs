//! Terminal answers for confirmation prompts.

use crate::core::confirm::{Confirm, FixedAnswer, Prompt};
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Asks on stdin; anything but "y"/"yes" (or EOF) declines.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &Prompt) -> bool {
        warning(&prompt.title);
        println!("{}", prompt.text);
        print!("{} / {} [y/N]: ", prompt.confirm_label, prompt.cancel_label);
        let _ = io::stdout().flush();

        let mut s = String::new();
        match io::stdin().read_line(&mut s) {
            Ok(n) if n > 0 => matches!(
                s.trim().to_lowercase().as_str(),
                "y" | "yes" | "s" | "si" | "sí"
            ),
            _ => false,
        }
    }
}

/// `--yes` skips every question.
pub fn confirmer(assume_yes: bool) -> Box<dyn Confirm> {
    if assume_yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalConfirm)
    }
}
