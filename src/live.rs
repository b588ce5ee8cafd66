//! Keeps a calculator panel in sync with edits typed line by line, the way
//! the panel on a page is recalculated whenever one of its inputs changes.

use crate::calculator::calculate_gift_aid;
use crate::panel::Panel;
use crate::prelude::*;
use std::io::{BufRead, Write};

/// Current contents of the two input fields.
#[derive(Debug, Clone, PartialEq)]
struct Inputs {
    gross_gift: RawValue,
    tax_rate: RawValue,
}

impl Inputs {
    /// A line is `GIFT [RATE]`. Leaving the rate out keeps the last one.
    ///
    /// The rate is the last word of the line and everything before it is the
    /// gift, so `1 000 40` is a gift of `1 000` at 40%. A single word is
    /// always the gift.
    fn edit(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }

        match line.rsplit_once(char::is_whitespace) {
            Some((gross_gift, tax_rate)) => {
                self.gross_gift = gross_gift.trim_end().into();
                self.tax_rate = tax_rate.into();
            }
            None => self.gross_gift = line.into(),
        }

        true
    }
}

/// Renders the panel once for the initial inputs, then again after every
/// edit read from the handle. Blank lines are not edits.
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    tax_rate: Option<String>,
) -> Result<()> {
    let mut inputs = Inputs {
        gross_gift: RawValue::Text(String::new()),
        tax_rate: RawValue::Text(tax_rate.unwrap_or_default()),
    };

    let mut panel = Panel::render(calculate_gift_aid(
        &inputs.gross_gift,
        &inputs.tax_rate,
    ));
    writeln!(output, "{}", panel)?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("cannot read edit")?;
        if !inputs.edit(&line) {
            continue;
        }

        panel.update(&inputs.gross_gift, &inputs.tax_rate);
        writeln!(output, "{}", panel)?;
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(input: &str, tax_rate: Option<&str>) -> Result<String> {
        let mut buf = vec![];
        run(input.as_bytes(), &mut buf, tax_rate.map(String::from))?;

        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn it_renders_initial_panel() -> Result<()> {
        let output = run_to_string("", None)?;

        assert!(output.contains("gross-gift:        0.00\n"));
        assert!(output.contains("taxrate:           20\n"));
        assert!(!output.contains("giver-claims"));

        Ok(())
    }

    #[test]
    fn it_rerenders_after_each_edit() -> Result<()> {
        let output = run_to_string("100\n\n100 40\n", None)?;
        let panels: Vec<&str> = output.split("\n\n").collect();

        // initial, "100", "100 40" and the trailing empty split
        assert_eq!(panels.len(), 4);
        assert!(panels[1].contains("charity-claims:    25.00"));
        assert!(!panels[1].contains("giver-claims"));
        assert!(panels[2].contains("giver-claims:      25.00"));
        assert!(panels[2].contains("net-gift-given:    75.00"));

        Ok(())
    }

    #[test]
    fn it_keeps_last_tax_rate() -> Result<()> {
        let output = run_to_string("100 40\n50\n", None)?;
        let panels: Vec<&str> = output.split("\n\n").collect();

        assert!(panels[2].contains("gross-gift:        50.00"));
        assert!(panels[2].contains("taxrate:           40"));

        Ok(())
    }

    #[test]
    fn it_starts_from_given_tax_rate() -> Result<()> {
        let output = run_to_string("100\n", Some("40"))?;
        let panels: Vec<&str> = output.split("\n\n").collect();

        assert!(panels[0].contains("taxrate:           40"));
        assert!(panels[1].contains("giver-claims:      25.00"));

        Ok(())
    }

    #[test]
    fn it_edits_inputs() {
        let mut inputs = Inputs {
            gross_gift: "".into(),
            tax_rate: "".into(),
        };

        assert!(!inputs.edit("   "));
        assert!(inputs.edit("  12.50   45 "));
        assert_eq!(inputs.gross_gift, RawValue::from("12.50"));
        assert_eq!(inputs.tax_rate, RawValue::from("45"));

        assert!(inputs.edit("7"));
        assert_eq!(inputs.gross_gift, RawValue::from("7"));
        assert_eq!(inputs.tax_rate, RawValue::from("45"));
    }

    #[test]
    fn it_keeps_spaces_inside_gift() -> Result<()> {
        let mut inputs = Inputs {
            gross_gift: "".into(),
            tax_rate: "".into(),
        };

        assert!(inputs.edit("1 000 40"));
        assert_eq!(inputs.gross_gift, RawValue::from("1 000"));
        assert_eq!(inputs.tax_rate, RawValue::from("40"));

        // a gift with a space in it is not a number, so it counts as no gift
        let output = run_to_string("1 000 40\n", None)?;
        let panels: Vec<&str> = output.split("\n\n").collect();

        assert!(panels[1].contains("gross-gift:        0.00"));
        assert!(panels[1].contains("taxrate:           40"));

        Ok(())
    }
}
