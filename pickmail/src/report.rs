use std::{fmt, path::PathBuf};

use crate::MaskedAddress;

/// Outcome of a successful pick run.
///
/// Holds masked addresses only; rendering it with `Display` is what the
/// binary prints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickReport {
    /// Number of addresses loaded from the input file.
    pub total: usize,
    /// Every loaded address, masked, in file order. Only filled in when the
    /// full list was requested.
    pub enrolled: Option<Vec<MaskedAddress>>,
    /// The picked addresses, masked, in pick order.
    pub picked: Vec<MaskedAddress>,
    /// The count that was asked for; `picked` is shorter when the input was.
    pub requested: usize,
    /// Where the unmasked selection was written.
    pub output: PathBuf,
}

impl PickReport {
    /// True when the input held fewer addresses than requested.
    pub fn is_short(&self) -> bool {
        self.picked.len() < self.requested
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, addresses: &[MaskedAddress]) -> fmt::Result {
    for address in addresses {
        writeln!(f, "\t{address}")?;
    }
    Ok(())
}

impl fmt::Display for PickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(enrolled) = &self.enrolled {
            writeln!(f, "{} addresses loaded:", self.total)?;
            writeln!(f)?;
            write_list(f, enrolled)?;
            writeln!(f)?;
        }

        if self.is_short() {
            writeln!(
                f,
                "Picked {} of {} requested addresses (only {} available):",
                self.picked.len(),
                self.requested,
                self.total
            )?;
        } else {
            writeln!(f, "Picked {} addresses:", self.picked.len())?;
        }
        writeln!(f)?;
        write_list(f, &self.picked)?;
        writeln!(f)?;
        writeln!(f, "Selection saved to {}", self.output.display())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::PickReport;
    use crate::{EmailAddress, EmailMaskPolicy};

    fn report(enrolled: bool, picked: usize, requested: usize) -> PickReport {
        let policy = EmailMaskPolicy::new();
        let all = [
            EmailAddress::from("bcda@y.com"),
            EmailAddress::from("abc@x.com"),
        ];
        PickReport {
            total: all.len(),
            enrolled: enrolled.then(|| policy.mask_all(&all)),
            picked: policy.mask_all(&all[..picked]),
            requested,
            output: PathBuf::from("picked_emails.txt"),
        }
    }

    #[test]
    fn renders_picked_list() {
        assert_eq!(
            report(false, 1, 1).to_string(),
            "Picked 1 addresses:\n\n\tbc*a@y.com\n\nSelection saved to picked_emails.txt\n"
        );
    }

    #[test]
    fn renders_full_list_first_when_requested() {
        let rendered = report(true, 1, 1).to_string();
        assert!(rendered.starts_with("2 addresses loaded:\n\n\tbc*a@y.com\n\ta**@x.com\n\n"));
        assert!(rendered.contains("Picked 1 addresses:"));
    }

    #[test]
    fn short_selection_is_called_out() {
        let report = report(false, 2, 6);
        assert!(report.is_short());
        assert!(report
            .to_string()
            .starts_with("Picked 2 of 6 requested addresses (only 2 available):"));
    }
}
