use std::io::{self, BufRead, Write};

use tracing::{debug, error};

use crate::commands::{execute, Command, Context};
use crate::util::parse_input;

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const GOODBYE: &str = "Good bye!";

/// Reads commands until `close`, `exit` or end of input, saving the book after each one.
pub fn run<R: BufRead, W: Write>(
    ctx: &mut Context<'_>,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", WELCOME)?;
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            persist(ctx, out)?;
            writeln!(out, "{}", GOODBYE)?;
            return Ok(());
        }

        // Undecodable bytes become replacement characters and fall through as an unknown command.
        let line = String::from_utf8_lossy(&buf);
        let Some((keyword, args)) = parse_input(&line) else {
            continue;
        };
        let command = Command::from_keyword(&keyword);
        debug!(command = %keyword, args = args.len(), "dispatch");

        let reply = match execute(ctx, command, &args) {
            Ok(reply) => reply,
            Err(err) => err.to_string(),
        };

        persist(ctx, out)?;
        writeln!(out, "{}", reply)?;

        if command == Command::Exit {
            return Ok(());
        }
    }
}

fn persist<W: Write>(ctx: &Context<'_>, out: &mut W) -> io::Result<()> {
    if let Err(err) = ctx.store.save(&ctx.book) {
        error!(error = %err, "failed to save address book");
        writeln!(out, "Could not save address book: {}", err)?;
    }
    Ok(())
}
