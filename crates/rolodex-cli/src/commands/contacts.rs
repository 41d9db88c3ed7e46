use rolodex_core::Record;

use crate::commands::{expect_args, CommandResult, Context};
use crate::error::{contact_not_found, CommandError};

pub fn add_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let [name, phone] = expect_args::<2>(args, "add [name] [phone]")?;

    if let Some(record) = ctx.book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    ctx.book.add_record(record);
    Ok("Contact added.".to_string())
}

pub fn change_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let [name, old_phone, new_phone] =
        expect_args::<3>(args, "change [name] [old_phone] [new_phone]")?;
    let record = ctx
        .book
        .find_mut(name)
        .ok_or_else(|| contact_not_found(name))?;

    if record.edit_phone(old_phone, new_phone)? {
        Ok(format!("Phone number updated for {}.", name))
    } else {
        Err(CommandError::PhoneNotFound {
            name: name.to_string(),
            phone: old_phone.to_string(),
        })
    }
}

pub fn show_phone(ctx: &Context<'_>, args: &[String]) -> CommandResult {
    let [name] = expect_args::<1>(args, "phone [name]")?;
    let record = ctx.book.find(name).ok_or(CommandError::PhoneLookupMiss)?;
    if record.phones().is_empty() {
        return Ok(format!("No phone numbers found for {}.", name));
    }
    Ok(format!("Phone number for {}: {}", name, record.phones_display()))
}

pub fn remove_phone(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let [name, phone] = expect_args::<2>(args, "remove-phone [name] [phone]")?;
    let record = ctx
        .book
        .find_mut(name)
        .ok_or_else(|| contact_not_found(name))?;
    if record.find_phone(phone).is_none() {
        return Err(CommandError::PhoneNotFound {
            name: name.to_string(),
            phone: phone.to_string(),
        });
    }
    record.remove_phone(phone);
    Ok(format!("Phone number removed for {}.", name))
}

pub fn delete_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let [name] = expect_args::<1>(args, "delete [name]")?;
    match ctx.book.delete(name) {
        Some(_) => Ok(format!("Contact '{}' deleted.", name)),
        None => Err(contact_not_found(name)),
    }
}

pub fn show_all(ctx: &Context<'_>) -> String {
    if ctx.book.is_empty() {
        return "Address book is empty.".to_string();
    }
    format!("All contacts:\n{}", ctx.book.all_contacts())
}
