//! Interactive text mode
//!
//! A numbered menu read line by line. Generic over the reader and writer so
//! tests can drive it without a terminal.

use std::io::{BufRead, Write};

use crate::display::{error_message, format_balance, format_receipt};
use crate::error::PiggyResult;
use crate::i18n::TextKey;
use crate::models::TransactionKind;
use crate::services::{LedgerService, PreferencesService};

/// A top-level menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Deposit,
    Withdraw,
    ShowBalance,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Deposit),
            "2" => Some(Self::Withdraw),
            "3" => Some(Self::ShowBalance),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits or input ends
///
/// User errors (bad amount, insufficient funds) are printed and the menu
/// continues. Storage errors end the loop and are returned.
pub fn run_interactive<R, W>(
    ledger: &mut LedgerService,
    prefs: &PreferencesService,
    input: R,
    mut output: W,
) -> PiggyResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        print_menu(prefs, &mut output)?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(output, "{}", prefs.text(TextKey::ErrorInvalid))?;
            continue;
        };

        match choice {
            MenuChoice::Deposit | MenuChoice::Withdraw => {
                let (kind, prompt) = if choice == MenuChoice::Deposit {
                    (TransactionKind::Deposit, TextKey::DepositPrompt)
                } else {
                    (TransactionKind::Withdraw, TextKey::WithdrawPrompt)
                };

                write!(output, "{} ", prefs.text(prompt))?;
                output.flush()?;
                let Some(amount) = lines.next() else {
                    break;
                };
                let amount = amount?;

                match ledger.apply(kind, &amount) {
                    Ok(receipt) => writeln!(
                        output,
                        "{}",
                        format_receipt(&receipt, &prefs.language(), prefs.currency())
                    )?,
                    Err(err) if err.is_user_error() => {
                        writeln!(output, "{}", error_message(&err, &prefs.language()))?
                    }
                    Err(err) => return Err(err),
                }
            }
            MenuChoice::ShowBalance => {
                writeln!(
                    output,
                    "{}",
                    format_balance(ledger.balance(), &prefs.language(), prefs.currency())
                )?;
            }
            MenuChoice::Exit => {
                writeln!(output, "{}", prefs.text(TextKey::Exiting))?;
                break;
            }
        }
    }

    ledger.flush()
}

fn print_menu<W: Write>(prefs: &PreferencesService, output: &mut W) -> PiggyResult<()> {
    writeln!(output)?;
    writeln!(output, "{}", prefs.text(TextKey::Title))?;
    writeln!(output, "1. {}", prefs.text(TextKey::Deposit))?;
    writeln!(output, "2. {}", prefs.text(TextKey::Withdraw))?;
    writeln!(output, "3. {}", prefs.text(TextKey::ShowBalance))?;
    writeln!(output, "4. {}", prefs.text(TextKey::Exit))?;
    write!(output, "{} ", prefs.text(TextKey::ChooseOption))?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Language, PiggyPaths};
    use crate::storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(storage: &Storage, config: &AppConfig, script: &str) -> String {
        let mut prefs = PreferencesService::load(storage);
        prefs.set_language(Language::En).unwrap();
        let mut ledger = LedgerService::open(storage, config);

        let mut output = Vec::new();
        run_interactive(&mut ledger, &prefs, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn setup() -> (TempDir, Storage, AppConfig) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PiggyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        (temp_dir, storage, AppConfig::new(paths))
    }

    #[test]
    fn test_deposit_withdraw_and_show() {
        let (_temp_dir, storage, config) = setup();
        let output = run(&storage, &config, "1\n10,50\n2\n3.25\n3\n4\n");

        assert!(output.contains("10.50€ deposited. New balance: 10.50€"));
        assert!(output.contains("3.25€ withdrawn. New balance: 7.25€"));
        assert!(output.contains("Current Balance: 7.25€"));
        assert!(output.contains("Exiting the program."));
    }

    #[test]
    fn test_user_errors_do_not_stop_the_loop() {
        let (_temp_dir, storage, config) = setup();
        let output = run(&storage, &config, "1\nabc\n2\n5\n9\n3\n4\n");

        assert!(output.contains("Invalid input, please try again."));
        assert!(output.contains("Error: Not enough money in the piggy bank!"));
        assert!(output.contains("Current Balance: 0.00€"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (_temp_dir, storage, config) = setup();
        let output = run(&storage, &config, "1\n2\n");

        assert!(output.contains("2.00€ deposited."));
        assert_eq!(
            storage.balance.load().into_inner().value(),
            2.0
        );
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Deposit));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("deposit"), None);
    }
}
