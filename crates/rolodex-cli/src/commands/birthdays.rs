use crate::commands::{expect_args, CommandResult, Context};
use crate::error::contact_not_found;

pub fn add_birthday(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let [name, date] = expect_args::<2>(args, "add-birthday [name] [DD.MM.YYYY]")?;
    let record = ctx
        .book
        .find_mut(name)
        .ok_or_else(|| contact_not_found(name))?;
    record.set_birthday(date)?;
    Ok(format!("Birthday added for {}.", name))
}

pub fn show_birthday(ctx: &Context<'_>, args: &[String]) -> CommandResult {
    let [name] = expect_args::<1>(args, "show-birthday [name]")?;
    let record = ctx.book.find(name).ok_or_else(|| contact_not_found(name))?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("{} doesn't have a birthday.", name)),
    }
}

pub fn upcoming(ctx: &Context<'_>) -> String {
    let upcoming = ctx
        .book
        .upcoming_birthdays(ctx.today(), ctx.config.upcoming_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|item| format!("{}: {}", item.name, item.formatted_date()))
        .collect();
    format!("Upcoming birthdays:\n{}", lines.join("\n"))
}
