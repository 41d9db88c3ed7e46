use chrono::NaiveDate;
use rolodex_config::AppConfig;
use rolodex_core::rules::local_today;
use rolodex_core::AddressBook;
use rolodex_store::Storage;

use crate::error::CommandError;

pub mod birthdays;
pub mod contacts;

pub type CommandResult = Result<String, CommandError>;

/// State shared by every command of one session.
pub struct Context<'a> {
    pub book: AddressBook,
    pub store: &'a dyn Storage,
    pub config: &'a AppConfig,
    pub today: Option<NaiveDate>,
}

impl Context<'_> {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Help,
    Exit,
    Unknown,
}

impl Command {
    /// Expects an already lowercased keyword.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "remove-phone" => Command::RemovePhone,
            "delete" => Command::Delete,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown,
        }
    }
}

const HELP: &str = "\
Commands:
  hello
  add [name] [phone]
  change [name] [old_phone] [new_phone]
  phone [name]
  remove-phone [name] [phone]
  delete [name]
  all
  add-birthday [name] [DD.MM.YYYY]
  show-birthday [name]
  birthdays
  close | exit";

/// Runs one command against the session. `Exit` is handled by the caller.
pub fn execute(ctx: &mut Context<'_>, command: Command, args: &[String]) -> CommandResult {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => contacts::add_contact(ctx, args),
        Command::Change => contacts::change_contact(ctx, args),
        Command::Phone => contacts::show_phone(ctx, args),
        Command::All => Ok(contacts::show_all(ctx)),
        Command::RemovePhone => contacts::remove_phone(ctx, args),
        Command::Delete => contacts::delete_contact(ctx, args),
        Command::AddBirthday => birthdays::add_birthday(ctx, args),
        Command::ShowBirthday => birthdays::show_birthday(ctx, args),
        Command::Birthdays => Ok(birthdays::upcoming(ctx)),
        Command::Help => Ok(HELP.to_string()),
        Command::Exit => Ok("Good bye!".to_string()),
        Command::Unknown => Err(CommandError::UnknownCommand),
    }
}

/// Returns the arguments as a fixed-size array, or an arity error carrying `usage`.
pub(crate) fn expect_args<'a, const N: usize>(
    args: &'a [String],
    usage: &'static str,
) -> Result<[&'a str; N], CommandError> {
    if args.len() != N {
        return Err(CommandError::Arity(usage));
    }
    Ok(std::array::from_fn(|idx| args[idx].as_str()))
}


#[cfg(test)]
mod tests {
    use super::test_support::{context, run};
    use super::{expect_args, Command};
    use crate::error::CommandError;
    use rolodex_config::AppConfig;
    use rolodex_store::InMemoryStore;

    #[test]
    fn keywords_map_to_commands() {
        assert_eq!(Command::from_keyword("add-birthday"), Command::AddBirthday);
        assert_eq!(Command::from_keyword("close"), Command::Exit);
        assert_eq!(Command::from_keyword("exit"), Command::Exit);
        assert_eq!(Command::from_keyword("addbirthday"), Command::Unknown);
    }

    #[test]
    fn expect_args_checks_count() {
        let args = vec!["Carl".to_string()];
        let [name] = expect_args::<1>(&args, "phone [name]").expect("args");
        assert_eq!(name, "Carl");
        assert_eq!(
            expect_args::<2>(&args, "add [name] [phone]"),
            Err(CommandError::Arity("add [name] [phone]"))
        );
    }

    #[test]
    fn hello_and_unknown_commands() {
        let store = InMemoryStore::new();
        let config = AppConfig::default();
        let mut ctx = context(&store, &config);
        assert_eq!(run(&mut ctx, "hello"), "How can I help you?");
        assert_eq!(run(&mut ctx, "HeLLo"), "How can I help you?");
        assert_eq!(run(&mut ctx, "dance now"), "Invalid command.");
    }

    #[test]
    fn help_lists_commands() {
        let store = InMemoryStore::new();
        let config = AppConfig::default();
        let mut ctx = context(&store, &config);
        let help = run(&mut ctx, "help");
        assert!(help.contains("add-birthday [name] [DD.MM.YYYY]"));
        assert!(help.contains("close | exit"));
    }
}
