use common::{command, init_logging, Invocation};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut command = command();
    let matches = command.clone().get_matches();
    let invocation = Invocation::from_matches(&matches)?;
    match invocation.table() {
        Some(table) => print!("{table}"),
        None => command.print_help()?,
    }
    Ok(())
}
